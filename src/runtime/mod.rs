//! Runtime orchestration: the end-to-end rental flow and tracing setup.
//!
//! # Main Components
//!
//! - [`quote`] - Runs selector → factory → vehicle from string input
//! - [`RentalQuote`] - The priced result, printable or serializable
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod quote;
pub mod tracing;

pub use self::quote::*;
pub use self::tracing::*;
