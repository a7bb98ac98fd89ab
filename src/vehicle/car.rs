use super::Vehicle;
use crate::model::VehicleType;

/// A car, rented at 100 per day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Car;

impl Car {
    pub const DAILY_RATE: f64 = 100.0;
}

impl Vehicle for Car {
    fn kind(&self) -> VehicleType {
        VehicleType::Car
    }

    fn daily_rate(&self) -> f64 {
        Self::DAILY_RATE
    }
}
