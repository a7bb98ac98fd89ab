//! Discriminants used to select region and vehicle variants.

pub mod rental_region;
pub mod vehicle_type;

pub use rental_region::*;
pub use vehicle_type::*;
