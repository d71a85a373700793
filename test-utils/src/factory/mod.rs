//! Factory methods for creating test data.
//!
//! Factories insert rows with sensible defaults so tests only spell out the fields they
//! care about. Each entity has a `Factory` struct for customization and a `create_*`
//! convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let show = factory::create_show_ground(&db).await?;
//! let owner = factory::create_owner(&db).await?;
//! let car = factory::create_car(&db, owner.owner_id).await?;
//! factory::create_car_at_show(&db, car.car_id, show.show_ground_id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let owner = factory::owner::OwnerFactory::new(&db)
//!     .email("jane@example.com")
//!     .build()
//!     .await?;
//!
//! let car = factory::car::CarFactory::new(&db, owner.owner_id)
//!     .reg("AB12 CDE")
//!     .year(1967)
//!     .build()
//!     .await?;
//! ```

pub mod car;
pub mod car_at_show;
pub mod helpers;
pub mod owner;
pub mod show_ground;

pub use car::create_car;
pub use car_at_show::create_car_at_show;
pub use owner::create_owner;
pub use show_ground::create_show_ground;
