use praedex::prelude::*;
use praedex::{proximity::MIDPOINT, repository::seed_listings};

fn land(id: &str, latitude: f64, longitude: f64) -> Listing {
    Listing {
        id: id.into(),
        title: id.into(),
        price: 1.0,
        coordinate: Coordinate::new(latitude, longitude).unwrap(),
        address: "".into(),
        description: "".into(),
        details: ListingDetails::Land { area_sqft: 1 },
    }
}

fn within(pin: &Pin, margin: f64) -> bool {
    (margin..=100.0 - margin).contains(&pin.x) && (margin..=100.0 - margin).contains(&pin.y)
}

#[test]
fn pins_stay_inside_margins_test() {
    let seed = seed_listings();
    for margin in [0.0, 5.0, 10.0, 25.0] {
        let layout = normalize_to_unit_square(&seed, None, margin);
        assert_eq!(layout.pins.len(), seed.len());
        assert!(layout.pins.values().all(|pin| within(pin, margin)));
        assert!(layout.reference.is_none());
    }
}

#[test]
fn extremes_touch_the_margins_test() {
    let listings = vec![land("sw", 40.0, -75.0), land("ne", 41.0, -73.0)];
    let layout = normalize_to_unit_square(&listings, None, 10.0);
    assert_eq!(layout.pins["sw"], Pin { x: 10.0, y: 10.0 });
    assert_eq!(layout.pins["ne"], Pin { x: 90.0, y: 90.0 });
}

#[test]
fn single_point_is_centered_test() {
    let listings = vec![land("only", 40.7128, -74.0060)];
    let layout = normalize_to_unit_square(&listings, None, 10.0);
    assert_eq!(
        layout.pins["only"],
        Pin {
            x: MIDPOINT,
            y: MIDPOINT
        }
    );
}

#[test]
fn flat_axis_is_centered_test() {
    let listings = vec![land("west", 40.0, -75.0), land("east", 40.0, -73.0)];
    let layout = normalize_to_unit_square(&listings, None, 10.0);
    assert_eq!(layout.pins["west"], Pin { x: 10.0, y: 50.0 });
    assert_eq!(layout.pins["east"], Pin { x: 90.0, y: 50.0 });
}

#[test]
fn reference_widens_bounds_test() {
    let listings = vec![land("a", 40.70, -74.00), land("b", 40.72, -73.98)];
    let far = Coordinate::new(40.90, -73.80).unwrap();
    let layout = normalize_to_unit_square(&listings, Some(&far), 10.0);
    let reference = layout.reference.unwrap();
    assert_eq!(reference, Pin { x: 90.0, y: 90.0 });
    assert!(layout.pins.values().all(|pin| within(pin, 10.0)));
    assert_eq!(layout.pins["a"], Pin { x: 10.0, y: 10.0 });
}

#[test]
fn empty_layout_test() {
    let listings: Vec<Listing> = Vec::new();
    let layout = normalize_to_unit_square(&listings, None, 10.0);
    assert!(layout.pins.is_empty());
    assert!(layout.reference.is_none());

    let alone = Coordinate::new(1.0, 1.0).unwrap();
    let layout = normalize_to_unit_square(&listings, Some(&alone), 10.0);
    assert_eq!(layout.reference, Some(Pin { x: 50.0, y: 50.0 }));
}

#[test]
fn half_margin_collapses_test() {
    let listings = vec![land("sw", 40.0, -75.0), land("ne", 41.0, -73.0)];
    for margin in [50.0, 75.0] {
        let layout = normalize_to_unit_square(&listings, None, margin);
        assert!(
            layout
                .pins
                .values()
                .all(|pin| *pin == Pin { x: MIDPOINT, y: MIDPOINT })
        );
    }
}
