//! End-to-end scenarios mirroring how callers drive the entities.

use sk_core::Point;
use sk_mechanics::{Car, CombatUnit, MechConfig, MechError};

#[test]
fn bmw_road_trip() {
    let mut car = Car::new(100.0, 0.9, Point::new(1.0, 1.0).unwrap(), "BMW").unwrap();
    car.refill(80).unwrap();
    assert_eq!(car.fuel_amount(), 80.0);

    car.drive_to(Point::new(5.0, 5.0).unwrap()).unwrap();
    car.drive_to_coordinates(10.0, 10.0).unwrap();

    assert!((car.fuel_amount() - 68.5449).abs() < 1e-4);
    assert_eq!(car.location(), Point::new(10, 10).unwrap());
    assert_eq!(
        car.to_string(),
        "Model:\t\t\tBMW\n\
         Consumption:\t0.9\n\
         Location:\t\t(10.0, 10.0)\n\
         Fuel capacity:\t100.0\n\
         Fuel amount:\t68.5449\n"
    );
}

#[test]
fn failed_operations_leave_car_unchanged() {
    let mut car = Car::new(50, 0.9, Point::new(10.0, 10.0).unwrap(), "Taz").unwrap();
    car.refill(5).unwrap();
    let before = car.clone();

    assert!(matches!(car.refill(-5), Err(MechError::InvalidArgument(_))));
    assert!(matches!(car.refill(46), Err(MechError::InvalidOperation(_))));
    assert!(matches!(
        car.drive_to_coordinates(100, 100),
        Err(MechError::InvalidOperation(_))
    ));
    assert_eq!(car, before);
}

#[test]
fn sergeant_versus_soldier() {
    let mut sergeant = CombatUnit::with_defaults("Sergeant").unwrap();
    let mut soldier = CombatUnit::new("Soldier", 100, 20).unwrap();

    let expected = [(60, 190), (20, 180), (0, 180)];
    for (soldier_hp, sergeant_hp) in expected {
        sergeant.attack(&mut soldier).unwrap();
        assert_eq!(soldier.hit_points(), soldier_hp);
        assert_eq!(sergeant.hit_points(), sergeant_hp);
    }

    assert!(matches!(
        sergeant.attack(&mut soldier),
        Err(MechError::UnitIsDead(_))
    ));
    assert_eq!(soldier.hit_points(), 0);
    assert_eq!(sergeant.hit_points(), 180);

    insta::assert_snapshot!(format!("{sergeant:?}"), @"Unit: Sergeant(dmg 40), hp 180(200)");
}

#[test]
fn configured_defaults() {
    let config = MechConfig::from_json(
        r#"{
            "car": {"capacity": 100.0, "consumption": 0.9, "model": "BMW"},
            "unit": {"hit_points": 120}
        }"#,
    )
    .unwrap();

    let car = Car::from_config(&config.car).unwrap();
    assert_eq!(car.model(), "BMW");
    assert_eq!(car.fuel_capacity(), 100.0);
    assert_eq!(car.location(), Point::origin());

    let unit = CombatUnit::from_config("Guard", &config.unit).unwrap();
    assert_eq!(unit.hit_points(), 120);
    assert_eq!(unit.damage(), 40);
}

#[test]
fn snapshots_serialize() {
    let mut car = Car::default();
    car.refill(10).unwrap();
    let json = serde_json::to_value(&car).unwrap();
    assert_eq!(json["model"], "Mercedes");
    assert_eq!(json["tank"]["amount"], 10.0);
    assert_eq!(json["location"]["x"], 0.0);

    let unit = CombatUnit::new("Soldier", 100, 20).unwrap();
    let json = serde_json::to_value(&unit).unwrap();
    assert_eq!(json["health"]["current"], 100);
    assert_eq!(json["damage"], 20);
}
