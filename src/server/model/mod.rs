//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types are built from
//! request DTOs and carry validated, normalized input into the service layer.

pub mod car;
pub mod car_at_show;
pub mod owner;
pub mod show_ground;
