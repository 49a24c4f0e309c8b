use praedex::{
    listing::{Listing, PriceBasis},
    proximity::Annotated,
};
use serde::Serialize;

const DIRECTIONS_URL: &str = "https://www.google.com/maps/dir/";

#[derive(Debug, Clone, Serialize)]
pub struct ListingDto {
    #[serde(flatten)]
    pub listing: Listing,
    pub price_basis: PriceBasis,
    pub directions_url: Option<String>,
}

impl ListingDto {
    pub fn from(listing: Listing) -> Self {
        let price_basis = listing.price_basis();
        let directions_url = directions_url(&listing);
        Self {
            listing,
            price_basis,
            directions_url,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnnotatedListingDto {
    #[serde(flatten)]
    pub listing: ListingDto,
    pub distance_km: f64,
    pub distance: String,
}

impl AnnotatedListingDto {
    pub fn from(annotated: Annotated<Listing>) -> Self {
        let distance_km = annotated.distance_km();
        let distance = annotated.distance.to_string();
        Self {
            listing: ListingDto::from(annotated.into_inner()),
            distance_km,
            distance,
        }
    }
}

fn directions_url(listing: &Listing) -> Option<String> {
    let destination = format!(
        "{},{}",
        listing.coordinate.latitude(),
        listing.coordinate.longitude()
    );
    reqwest::Url::parse_with_params(
        DIRECTIONS_URL,
        &[
            ("api", "1"),
            ("destination", destination.as_str()),
            ("destination_place_id", listing.title.as_ref()),
        ],
    )
    .map(|url| url.to_string())
    .ok()
}
