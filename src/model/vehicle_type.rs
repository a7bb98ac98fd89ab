use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

use crate::error::RentalError;

/// Discriminant selecting which [`Vehicle`](crate::vehicle::Vehicle) variant a
/// region factory builds.
///
/// Serialized as the lowercase discriminant (`car`, `bike`, `truck`) and
/// displayed with its capitalized name (`Car`, `Bike`, `Truck`). Deserializing
/// goes through [`FromStr`], so it accepts the same spellings as `parse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum VehicleType {
    Car,
    Bike,
    Truck,
}

impl VehicleType {
    /// Every vehicle variant, in declaration order.
    pub const ALL: [VehicleType; 3] = [VehicleType::Car, VehicleType::Bike, VehicleType::Truck];

    /// The lowercase discriminant accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Car => "car",
            VehicleType::Bike => "bike",
            VehicleType::Truck => "truck",
        }
    }

    /// The capitalized name used in notifications.
    pub fn name(&self) -> &'static str {
        match self {
            VehicleType::Car => "Car",
            VehicleType::Bike => "Bike",
            VehicleType::Truck => "Truck",
        }
    }
}

impl Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Case-insensitive; surrounding whitespace is ignored.
impl FromStr for VehicleType {
    type Err = RentalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VehicleType::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RentalError::UnknownVehicleType(s.to_string()))
    }
}

impl TryFrom<String> for VehicleType {
    type Error = RentalError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
