use proptest::prelude::*;
use rental_factory_recipe::model::{RentalRegion, VehicleType};
use rental_factory_recipe::region::rental_region;
use rental_factory_recipe::vehicle::{self, Bike, Car, Truck};

fn any_region() -> impl Strategy<Value = RentalRegion> {
    prop::sample::select(RentalRegion::ALL.to_vec())
}

fn any_vehicle_type() -> impl Strategy<Value = VehicleType> {
    prop::sample::select(VehicleType::ALL.to_vec())
}

fn rate_for(kind: VehicleType) -> f64 {
    match kind {
        VehicleType::Car => Car::DAILY_RATE,
        VehicleType::Bike => Bike::DAILY_RATE,
        VehicleType::Truck => Truck::DAILY_RATE,
    }
}

proptest! {
    #[test]
    fn cost_is_days_times_rate(kind in any_vehicle_type(), days in -1.0e6f64..1.0e6) {
        let vehicle = vehicle::new(kind);
        prop_assert_eq!(vehicle.calculate_rental_cost(days), days * rate_for(kind));
    }

    #[test]
    fn region_has_no_effect_on_cost(
        region in any_region(),
        kind in any_vehicle_type(),
        days in -1.0e6f64..1.0e6,
    ) {
        let regional = rental_region(region).vehicle(kind);
        let baseline = rental_region(RentalRegion::Us).vehicle(kind);
        prop_assert_eq!(regional.kind(), baseline.kind());
        prop_assert_eq!(
            regional.calculate_rental_cost(days),
            baseline.calculate_rental_cost(days)
        );
    }

    #[test]
    fn discriminants_round_trip_through_strings(region in any_region(), kind in any_vehicle_type()) {
        prop_assert_eq!(region.as_str().parse::<RentalRegion>(), Ok(region));
        prop_assert_eq!(kind.as_str().to_uppercase().parse::<VehicleType>(), Ok(kind));
    }
}
