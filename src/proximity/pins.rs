use std::collections::BTreeMap;

use serde::Serialize;

use crate::shared::{Coordinate, Identifiable, Located};

pub const MIDPOINT: f64 = 50.0;
pub const DEFAULT_MARGIN_PERCENT: f64 = 10.0;
const MAX_MARGIN: f64 = 50.0;

/// Position on the map panel, in percent of its width (`x`) and height (`y`).
/// `x` grows eastward and `y` grows northward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pin {
    pub x: f64,
    pub y: f64,
}

/// Pins for every listing id, plus the reference marker when one was given.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PinLayout {
    pub pins: BTreeMap<String, Pin>,
    pub reference: Option<Pin>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

impl Bounds {
    fn around(coordinate: &Coordinate) -> Self {
        Self {
            min_latitude: coordinate.latitude(),
            max_latitude: coordinate.latitude(),
            min_longitude: coordinate.longitude(),
            max_longitude: coordinate.longitude(),
        }
    }

    fn extend(mut self, coordinate: &Coordinate) -> Self {
        self.min_latitude = self.min_latitude.min(coordinate.latitude());
        self.max_latitude = self.max_latitude.max(coordinate.latitude());
        self.min_longitude = self.min_longitude.min(coordinate.longitude());
        self.max_longitude = self.max_longitude.max(coordinate.longitude());
        self
    }

    /// Smallest box holding every coordinate, or None if there are none.
    pub fn enclosing<'a, I>(coordinates: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Coordinate>,
    {
        let mut iter = coordinates.into_iter();
        let first = Self::around(iter.next()?);
        Some(iter.fold(first, |bounds, coordinate| bounds.extend(coordinate)))
    }

    /// Linear min-max placement inside `[margin, 100 - margin]`.
    /// An axis with no extent places everything on its midpoint.
    pub fn project(&self, coordinate: &Coordinate, margin_percent: f64) -> Pin {
        let margin = clamp_margin(margin_percent);
        Pin {
            x: scale(
                coordinate.longitude(),
                self.min_longitude,
                self.max_longitude,
                margin,
            ),
            y: scale(
                coordinate.latitude(),
                self.min_latitude,
                self.max_latitude,
                margin,
            ),
        }
    }
}

fn clamp_margin(margin_percent: f64) -> f64 {
    if margin_percent.is_finite() {
        margin_percent.clamp(0.0, MAX_MARGIN)
    } else {
        0.0
    }
}

fn scale(value: f64, min: f64, max: f64, margin: f64) -> f64 {
    let span = max - min;
    if span == 0.0 {
        return MIDPOINT;
    }
    (value - min) / span * (100.0 - 2.0 * margin) + margin
}

/// Places every listing on a bounded map panel. The reference point, when
/// given, takes part in the bounding box so its marker is always visible.
pub fn normalize_to_unit_square<T, I>(
    items: I,
    reference: Option<&Coordinate>,
    margin_percent: f64,
) -> PinLayout
where
    T: Identifiable + Located,
    I: IntoIterator<Item = T>,
{
    let placed: Vec<(String, Coordinate)> = items
        .into_iter()
        .map(|item| (item.id().to_string(), item.coordinate()))
        .collect();

    let coordinates = placed
        .iter()
        .map(|(_, coordinate)| coordinate)
        .chain(reference);
    let Some(bounds) = Bounds::enclosing(coordinates) else {
        return PinLayout::default();
    };

    let pins = placed
        .into_iter()
        .map(|(id, coordinate)| (id, bounds.project(&coordinate, margin_percent)))
        .collect();
    PinLayout {
        pins,
        reference: reference.map(|coordinate| bounds.project(coordinate, margin_percent)),
    }
}

#[test]
fn margin_is_clamped_test() {
    let a = Coordinate::new(0.0, 0.0).unwrap();
    let b = Coordinate::new(1.0, 1.0).unwrap();
    let bounds = Bounds::enclosing([&a, &b]).unwrap();
    assert_eq!(bounds.project(&a, 80.0), Pin { x: 50.0, y: 50.0 });
    assert_eq!(bounds.project(&b, f64::NAN), Pin { x: 100.0, y: 100.0 });
}
