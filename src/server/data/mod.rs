//! Database repository layer for all domain entities.
//!
//! Repositories handle the SQL for each table through SeaORM entity models and return
//! domain models, keeping entity types out of the service and controller layers.

pub mod car;
pub mod car_at_show;
pub mod owner;
pub mod show_ground;

#[cfg(test)]
mod test;
