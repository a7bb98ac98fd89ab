//! The [`Vehicle`] capability and its three variants.
//!
//! Every variant is a stateless unit struct. Its behavior is fixed by two
//! values: the [`VehicleType`] tag and the flat daily rate. The provided trait
//! methods derive `start`, `stop` and `calculate_rental_cost` from those.
//!
//! | Variant   | Daily rate |
//! |-----------|-----------:|
//! | [`Car`]   | 100        |
//! | [`Bike`]  | 50         |
//! | [`Truck`] | 150        |

pub mod bike;
pub mod car;
pub mod notification;
pub mod truck;

pub use bike::Bike;
pub use car::Car;
pub use notification::*;
pub use truck::Truck;

use std::fmt::Debug;

use crate::model::VehicleType;

/// A rentable vehicle.
///
/// # Cost policy
///
/// [`calculate_rental_cost`](Vehicle::calculate_rental_cost) is plain `f64`
/// multiplication. Negative and fractional day counts are priced as given,
/// and NaN propagates to a NaN cost. Nothing is clamped and nothing panics.
pub trait Vehicle: Debug + Send + Sync {
    /// The variant tag.
    fn kind(&self) -> VehicleType;

    /// Flat price per rental day.
    fn daily_rate(&self) -> f64;

    /// Emits `"<Vehicle> started"`. Calling it again emits it again.
    fn start(&self) {
        Notification::new(self.kind(), VehicleEvent::Started).emit();
    }

    /// Emits `"<Vehicle> stopped"`.
    fn stop(&self) {
        Notification::new(self.kind(), VehicleEvent::Stopped).emit();
    }

    fn calculate_rental_cost(&self, days: f64) -> f64 {
        days * self.daily_rate()
    }
}

/// Builds a fresh vehicle for the given tag.
pub fn new(kind: VehicleType) -> Box<dyn Vehicle> {
    match kind {
        VehicleType::Car => Box::new(Car),
        VehicleType::Bike => Box::new(Bike),
        VehicleType::Truck => Box::new(Truck),
    }
}
