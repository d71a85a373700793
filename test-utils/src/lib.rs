//! Car Show Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the car
//! show API. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and factories for inserting rows with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Row factories for shows, owners, cars and show entries
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_car_operations() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new()
//!         .with_car_show_tables()
//!         .build()
//!         .await
//!         .unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (owner, car) = factory::helpers::create_car_with_owner(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
