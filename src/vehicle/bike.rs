use super::Vehicle;
use crate::model::VehicleType;

/// A bike, rented at 50 per day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bike;

impl Bike {
    pub const DAILY_RATE: f64 = 50.0;
}

impl Vehicle for Bike {
    fn kind(&self) -> VehicleType {
        VehicleType::Bike
    }

    fn daily_rate(&self) -> f64 {
        Self::DAILY_RATE
    }
}
