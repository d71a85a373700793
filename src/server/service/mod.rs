//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller layer and the data layer. They apply the
//! ownership and deduplication rules by coordinating repository calls and return
//! domain models for controllers to convert into DTOs.

pub mod car;
pub mod car_at_show;
pub mod owner;
pub mod show;
