//! Request and response DTOs for the HTTP API.
//!
//! These types define the JSON wire format. Field names match the column names of the
//! deployed schema so existing clients keep working unchanged.

pub mod api;
pub mod car;
pub mod car_at_show;
pub mod owner;
pub mod show;
