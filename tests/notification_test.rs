mod common;

use common::capture_notifications;
use rental_factory_recipe::model::{RentalRegion, VehicleType};
use rental_factory_recipe::region::{create_rental_region, rental_region};
use rental_factory_recipe::runtime::rent;
use rstest::rstest;

#[rstest]
#[case::car("car", "Car started", "Car stopped")]
#[case::bike("bike", "Bike started", "Bike stopped")]
#[case::truck("truck", "Truck started", "Truck stopped")]
fn test_start_and_stop_notifications(
    #[case] vehicle_type: &str,
    #[case] started: &str,
    #[case] stopped: &str,
) {
    let region = create_rental_region("us").unwrap();
    let vehicle = region.create_vehicle(vehicle_type).unwrap();

    let messages = capture_notifications(|| {
        vehicle.start();
        vehicle.stop();
    });

    assert_eq!(messages, vec![started.to_string(), stopped.to_string()]);
}

#[test]
fn test_start_is_repeatable() {
    let car = rental_region(RentalRegion::Eu).vehicle(VehicleType::Car);

    let messages = capture_notifications(|| {
        car.start();
        car.start();
    });

    assert_eq!(messages, vec!["Car started", "Car started"]);
}

#[test]
fn test_cost_emits_nothing() {
    let bike = rental_region(RentalRegion::Asia).vehicle(VehicleType::Bike);

    let messages = capture_notifications(|| {
        assert_eq!(bike.calculate_rental_cost(3.0), 150.0);
    });

    assert!(messages.is_empty());
}

#[test]
fn test_same_notifications_in_every_region() {
    for region in RentalRegion::ALL {
        let truck = rental_region(region).vehicle(VehicleType::Truck);
        let messages = capture_notifications(|| truck.start());
        assert_eq!(messages, vec!["Truck started"], "region {region}");
    }
}

#[test]
fn test_rent_starts_then_stops() {
    let messages = capture_notifications(|| {
        rent("eu", "bike", 2.0).unwrap();
    });

    assert_eq!(messages, vec!["Bike started", "Bike stopped"]);
}

#[test]
fn test_rejected_rent_emits_nothing() {
    let messages = capture_notifications(|| {
        assert!(rent("africa", "bike", 2.0).is_err());
    });

    assert!(messages.is_empty());
}
