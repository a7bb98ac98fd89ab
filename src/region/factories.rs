//! The three region factories.
//!
//! They build the same catalog at the same prices; only the reported
//! [`RentalRegion`] differs.

use tracing::debug;

use super::RegionFactory;
use crate::model::{RentalRegion, VehicleType};
use crate::vehicle::{self, Vehicle};

fn build_for(region: RentalRegion, kind: VehicleType) -> Box<dyn Vehicle> {
    debug!(%region, vehicle = %kind, "Building vehicle");
    vehicle::new(kind)
}

/// Rental factory for the US region.
#[derive(Debug, Clone, Copy, Default)]
pub struct UsRentalFactory;

impl RegionFactory for UsRentalFactory {
    fn region(&self) -> RentalRegion {
        RentalRegion::Us
    }

    fn vehicle(&self, kind: VehicleType) -> Box<dyn Vehicle> {
        build_for(self.region(), kind)
    }
}

/// Rental factory for the EU region.
#[derive(Debug, Clone, Copy, Default)]
pub struct EuRentalFactory;

impl RegionFactory for EuRentalFactory {
    fn region(&self) -> RentalRegion {
        RentalRegion::Eu
    }

    fn vehicle(&self, kind: VehicleType) -> Box<dyn Vehicle> {
        build_for(self.region(), kind)
    }
}

/// Rental factory for the Asia region.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsiaRentalFactory;

impl RegionFactory for AsiaRentalFactory {
    fn region(&self) -> RentalRegion {
        RentalRegion::Asia
    }

    fn vehicle(&self, kind: VehicleType) -> Box<dyn Vehicle> {
        build_for(self.region(), kind)
    }
}
