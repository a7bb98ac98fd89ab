//! End-to-end rental flow: region → factory → vehicle → cost.

use serde::Serialize;
use std::fmt::Display;
use tracing::{debug, instrument};

use crate::error::RentalError;
use crate::model::{RentalRegion, VehicleType};
use crate::region::create_rental_region;
use crate::vehicle::Vehicle;

/// Priced rental of one vehicle in one region.
///
/// Serializes with lowercase discriminants, e.g.
/// `{"region":"us","vehicle":"car","days":2.0,"daily_rate":100.0,"cost":200.0}`.
/// A NaN `days` or `cost` serializes as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RentalQuote {
    pub region: RentalRegion,
    pub vehicle: VehicleType,
    pub days: f64,
    pub daily_rate: f64,
    pub cost: f64,
}

impl RentalQuote {
    /// Prices `vehicle` for `days` in `region`.
    pub fn new(region: RentalRegion, vehicle: &dyn Vehicle, days: f64) -> Self {
        Self {
            region,
            vehicle: vehicle.kind(),
            days,
            daily_rate: vehicle.daily_rate(),
            cost: vehicle.calculate_rental_cost(days),
        }
    }
}

impl Display for RentalQuote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} in {} for {} day(s): {}",
            self.vehicle, self.region, self.days, self.cost
        )
    }
}

/// Runs the whole selector → factory → vehicle flow from string discriminants.
///
/// # Errors
/// - [`RentalError::UnknownRentalRegion`] for an unknown `region`
/// - [`RentalError::UnknownVehicleType`] for an unknown `vehicle`
#[instrument]
pub fn quote(region: &str, vehicle: &str, days: f64) -> Result<RentalQuote, RentalError> {
    priced(region, vehicle, days, false)
}

/// Like [`quote`], but starts the vehicle before pricing and stops it after,
/// so the caller observes `"<Vehicle> started"` then `"<Vehicle> stopped"`.
///
/// # Errors
/// Same as [`quote`]. Nothing is started when a discriminant is rejected.
#[instrument]
pub fn rent(region: &str, vehicle: &str, days: f64) -> Result<RentalQuote, RentalError> {
    priced(region, vehicle, days, true)
}

fn priced(
    region: &str,
    vehicle: &str,
    days: f64,
    drive: bool,
) -> Result<RentalQuote, RentalError> {
    let factory = create_rental_region(region)?;
    let vehicle = factory.create_vehicle(vehicle)?;
    if drive {
        vehicle.start();
    }
    let quote = RentalQuote::new(factory.region(), vehicle.as_ref(), days);
    if drive {
        vehicle.stop();
    }
    debug!(cost = quote.cost, "Quoted");
    Ok(quote)
}

/// Parses a day count, mapping anything that is not a number to NaN.
///
/// NaN then flows through [`Vehicle::calculate_rental_cost`] as a NaN cost,
/// so bad input is visible in the result instead of aborting the call.
pub fn parse_days(input: &str) -> f64 {
    input.trim().parse().unwrap_or(f64::NAN)
}
