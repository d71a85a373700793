//! SeaORM entity definitions for the car show database.
//!
//! One module per table. Column names mirror the deployed schema, which is owned
//! by the deployment rather than by this workspace.

pub mod prelude;

pub mod car;
pub mod car_at_show;
pub mod owner;
pub mod show_ground;
