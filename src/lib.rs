pub mod listing;
pub mod location;
pub mod proximity;
pub mod repository;
pub mod shared;

pub mod prelude {
    pub use crate::listing::{
        Categorized, Category, CategoryFilter, Listing, ListingDetails, ListingDraft, PriceBasis,
    };
    pub use crate::location::{LocationProvider, Locator, ReferencePoint};
    pub use crate::proximity::{
        Annotated, Pin, PinLayout, annotate_and_sort, category_counts, filter_by_category,
        nearest, normalize_to_unit_square,
    };
    pub use crate::repository::{ListingStore, Repository};
    pub use crate::shared::{Coordinate, Distance, Identifiable, Located, distance_km};
}
