use super::Vehicle;
use crate::model::VehicleType;

/// A truck, rented at 150 per day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Truck;

impl Truck {
    pub const DAILY_RATE: f64 = 150.0;
}

impl Vehicle for Truck {
    fn kind(&self) -> VehicleType {
        VehicleType::Truck
    }

    fn daily_rate(&self) -> f64 {
        Self::DAILY_RATE
    }
}
