//! Error types for the rental factories.

use thiserror::Error;

/// Errors raised when a discriminant does not name a known variant.
///
/// The `Display` text is the bare message; the rejected input is carried in the
/// variant and available through [`RentalError::input`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RentalError {
    /// The region selector was given something other than `us`, `eu` or `asia`.
    #[error("Unknown rental region")]
    UnknownRentalRegion(String),

    /// A region factory was asked for something other than `car`, `bike` or `truck`.
    #[error("Unknown vehicle type")]
    UnknownVehicleType(String),
}

impl RentalError {
    /// The discriminant that was rejected.
    pub fn input(&self) -> &str {
        match self {
            RentalError::UnknownRentalRegion(input) | RentalError::UnknownVehicleType(input) => {
                input
            }
        }
    }
}
