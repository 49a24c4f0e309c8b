pub mod geo;

pub use geo::*;

/// Anything addressable by a stable id with a display name.
pub trait Identifiable {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
}

/// Anything placed on the globe.
pub trait Located {
    fn coordinate(&self) -> Coordinate;
}

impl<T: Identifiable> Identifiable for &T {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: Located> Located for &T {
    fn coordinate(&self) -> Coordinate {
        (**self).coordinate()
    }
}
