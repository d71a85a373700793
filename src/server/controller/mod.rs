//! HTTP request handlers.
//!
//! Controllers validate request bodies into parameter types, call the service layer and
//! convert the returned domain models into DTOs with the matching status code.

pub mod car;
pub mod car_at_show;
pub mod home;
pub mod owner;
pub mod show;

#[cfg(test)]
mod test;
