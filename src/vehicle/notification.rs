//! Start/stop notifications emitted by vehicles.
//!
//! A notification is a `tracing` INFO event on [`NOTIFICATION_TARGET`] whose
//! message is exactly `"<Vehicle> started"` or `"<Vehicle> stopped"`. The event
//! also carries `vehicle` and `event` as structured fields, so subscribers can
//! filter on them without parsing the text.
//!
//! ```bash
//! # Only show notifications
//! RUST_LOG=rental::notification=info cargo run
//! ```

use std::fmt::Display;
use tracing::info;

use crate::model::VehicleType;

/// Target used for every vehicle notification event.
pub const NOTIFICATION_TARGET: &str = "rental::notification";

/// What happened to the vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleEvent {
    Started,
    Stopped,
}

impl Display for VehicleEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VehicleEvent::Started => f.write_str("started"),
            VehicleEvent::Stopped => f.write_str("stopped"),
        }
    }
}

/// A single observable notification, e.g. `Car started`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification {
    pub vehicle: VehicleType,
    pub event: VehicleEvent,
}

impl Notification {
    pub fn new(vehicle: VehicleType, event: VehicleEvent) -> Self {
        Self { vehicle, event }
    }

    /// Emits the notification as a tracing event.
    pub fn emit(&self) {
        info!(
            target: NOTIFICATION_TARGET,
            vehicle = %self.vehicle,
            event = %self.event,
            "{}",
            self
        );
    }
}

impl Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.vehicle, self.event)
    }
}
