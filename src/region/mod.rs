//! Region factories and the region selector.
//!
//! # Two ways in
//!
//! Each operation comes in a typed form that cannot fail and a string form
//! that parses the discriminant first:
//!
//! | Typed                              | From a string                          |
//! |------------------------------------|----------------------------------------|
//! | [`rental_region`]                  | [`create_rental_region`]               |
//! | [`RegionFactory::vehicle`]         | [`RegionFactory::create_vehicle`]      |
//!
//! The string forms are where [`RentalError`] comes from.
//!
//! ```
//! use rental_factory_recipe::region::create_rental_region;
//!
//! let region = create_rental_region("us").unwrap();
//! let car = region.create_vehicle("car").unwrap();
//! assert_eq!(car.calculate_rental_cost(2.0), 200.0);
//! ```

pub mod factories;

pub use factories::*;

use std::fmt::Debug;
use tracing::{debug, warn};

use crate::error::RentalError;
use crate::model::{RentalRegion, VehicleType};
use crate::vehicle::Vehicle;

/// A rental region that can hand out vehicles.
pub trait RegionFactory: Debug + Send + Sync {
    /// Which region this factory serves.
    fn region(&self) -> RentalRegion;

    /// Builds a fresh vehicle of the given variant.
    fn vehicle(&self, kind: VehicleType) -> Box<dyn Vehicle>;

    /// Parses `kind` and builds the matching vehicle.
    ///
    /// # Errors
    /// [`RentalError::UnknownVehicleType`] if `kind` is not `car`, `bike` or `truck`.
    fn create_vehicle(&self, kind: &str) -> Result<Box<dyn Vehicle>, RentalError> {
        let kind = kind.parse::<VehicleType>().map_err(|e| {
            warn!(region = %self.region(), input = e.input(), "Rejected vehicle type");
            e
        })?;
        Ok(self.vehicle(kind))
    }
}

/// Returns the factory for `region`.
pub fn rental_region(region: RentalRegion) -> Box<dyn RegionFactory> {
    debug!(%region, "Selecting rental region");
    match region {
        RentalRegion::Us => Box::new(UsRentalFactory),
        RentalRegion::Eu => Box::new(EuRentalFactory),
        RentalRegion::Asia => Box::new(AsiaRentalFactory),
    }
}

/// Parses `region` and returns its factory.
///
/// # Errors
/// [`RentalError::UnknownRentalRegion`] if `region` is not `us`, `eu` or `asia`.
pub fn create_rental_region(region: &str) -> Result<Box<dyn RegionFactory>, RentalError> {
    let region = region.parse::<RentalRegion>().map_err(|e| {
        warn!(input = e.input(), "Rejected rental region");
        e
    })?;
    Ok(rental_region(region))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_returns_matching_region() {
        for region in RentalRegion::ALL {
            assert_eq!(rental_region(region).region(), region);
        }
    }

    #[test]
    fn test_unknown_region() {
        let err = create_rental_region("africa").unwrap_err();
        assert_eq!(err, RentalError::UnknownRentalRegion("africa".to_string()));
        assert_eq!(err.to_string(), "Unknown rental region");
    }

    #[test]
    fn test_unknown_vehicle_in_every_region() {
        for region in RentalRegion::ALL {
            let err = rental_region(region).create_vehicle("plane").unwrap_err();
            assert_eq!(err, RentalError::UnknownVehicleType("plane".to_string()));
        }
    }

    #[test]
    fn test_factories_are_interchangeable() {
        let factories: Vec<Box<dyn RegionFactory>> = vec![
            Box::new(UsRentalFactory),
            Box::new(EuRentalFactory),
            Box::new(AsiaRentalFactory),
        ];
        for kind in VehicleType::ALL {
            let costs: Vec<f64> = factories
                .iter()
                .map(|f| f.vehicle(kind).calculate_rental_cost(4.0))
                .collect();
            assert!(costs.windows(2).all(|w| w[0] == w[1]), "{kind}: {costs:?}");
        }
    }
}
