#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Rental Factory Recipe
//!
//! > **A Recipe for the Factory pattern in Rust.**
//!
//! This crate demonstrates the Factory pattern with a small vehicle-rental model:
//! a region selector hands out a region factory, and the region factory hands
//! out vehicles that can start, stop, and price a rental.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Traits instead of an inheritance tree
//!
//! Two capabilities, two traits:
//! - [`Vehicle`](vehicle::Vehicle): `start`, `stop`, `calculate_rental_cost`.
//!   Implemented by [`Car`](vehicle::Car), [`Bike`](vehicle::Bike) and [`Truck`](vehicle::Truck).
//! - [`RegionFactory`](region::RegionFactory): `create_vehicle`.
//!   Implemented by [`UsRentalFactory`](region::UsRentalFactory),
//!   [`EuRentalFactory`](region::EuRentalFactory) and [`AsiaRentalFactory`](region::AsiaRentalFactory).
//!
//! The selector is a free function, [`create_rental_region`](region::create_rental_region),
//! not a static method on a base type.
//!
//! ### Closed sets are enums
//!
//! [`VehicleType`](model::VehicleType) and [`RentalRegion`](model::RentalRegion)
//! are the discriminants. Inside Rust code they are exhaustive, so the typed entry
//! points ([`rental_region`](region::rental_region), [`RegionFactory::vehicle`](region::RegionFactory::vehicle))
//! cannot fail. Strings coming from outside go through `FromStr`, and that is the
//! only place a [`RentalError`](error::RentalError) can appear.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! [`RentalError`](error::RentalError) has exactly two variants,
//! `UnknownRentalRegion` and `UnknownVehicleType`. Both keep the rejected input.
//!
//! ### 2. Cost Policy
//! Cost is `days * daily_rate` on `f64`, nothing more. Negative days give a
//! negative cost and NaN gives NaN. See [`Vehicle`](vehicle::Vehicle).
//!
//! ### 3. Observability
//! `start` and `stop` are `tracing` events on the `rental::notification` target
//! with the message `Car started`, `Car stopped`, and so on.
//! See the [`vehicle::notification`] module.
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`] - The discriminants
//! - [`vehicle`] - The `Vehicle` trait and its variants
//! - [`region`] - The `RegionFactory` trait, its variants and the selector
//! - [`runtime`] - The end-to-end flow and tracing setup
//! - [`error`] - The error type
//!
//! ## 🚀 Quick Start
//!
//! ```
//! use rental_factory_recipe::region::create_rental_region;
//!
//! let region = create_rental_region("asia")?;
//! let truck = region.create_vehicle("truck")?;
//! truck.start();
//! assert_eq!(truck.calculate_rental_cost(1.0), 150.0);
//! truck.stop();
//! # Ok::<(), rental_factory_recipe::error::RentalError>(())
//! ```
//!
//! ### Running the Demo
//!
//! ```bash
//! cargo run -- --region eu --vehicle bike --days 3
//! RUST_LOG=debug cargo run -- --vehicle truck --json
//! ```

pub mod error;
pub mod model;
pub mod region;
pub mod runtime;
pub mod vehicle;
