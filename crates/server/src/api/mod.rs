mod health;
mod listings;
mod map;
mod params;

pub use health::*;
pub use listings::*;
pub use map::*;
