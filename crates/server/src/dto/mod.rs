mod listing;
mod map;
pub use listing::*;
pub use map::*;
