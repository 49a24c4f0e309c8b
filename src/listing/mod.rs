use std::{collections::BTreeSet, sync::Arc};

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod category;
pub use category::*;

use crate::shared::{Coordinate, Identifiable, Located};

pub type Amenities = BTreeSet<Arc<str>>;

pub const MAX_RATING: f64 = 5.0;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Invalid listing: {0}")]
    InvalidListing(String),
}

/// How a listing's price should be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriceBasis {
    Total,
    PerNight,
}

/// Attributes that only make sense for a given category.
/// The variant is the category, so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "kebab-case")]
pub enum ListingDetails {
    ResidentialSale {
        bedrooms: u32,
        bathrooms: f64,
        area_sqft: u32,
        #[serde(default)]
        amenities: Amenities,
    },
    Hotel {
        #[serde(default)]
        amenities: Amenities,
        #[serde(default)]
        rating: Option<f64>,
        #[serde(default)]
        reviews: u32,
    },
    ShortTermRental {
        bedrooms: u32,
        bathrooms: f64,
        #[serde(default)]
        amenities: Amenities,
        #[serde(default)]
        rating: Option<f64>,
        #[serde(default)]
        reviews: u32,
    },
    Land {
        area_sqft: u32,
    },
}

impl ListingDetails {
    pub fn category(&self) -> Category {
        match self {
            ListingDetails::ResidentialSale { .. } => Category::ResidentialSale,
            ListingDetails::Hotel { .. } => Category::Hotel,
            ListingDetails::ShortTermRental { .. } => Category::ShortTermRental,
            ListingDetails::Land { .. } => Category::Land,
        }
    }

    pub fn amenities(&self) -> Option<&Amenities> {
        match self {
            ListingDetails::ResidentialSale { amenities, .. }
            | ListingDetails::Hotel { amenities, .. }
            | ListingDetails::ShortTermRental { amenities, .. } => Some(amenities),
            ListingDetails::Land { .. } => None,
        }
    }

    pub fn rating(&self) -> Option<f64> {
        match self {
            ListingDetails::Hotel { rating, .. }
            | ListingDetails::ShortTermRental { rating, .. } => *rating,
            _ => None,
        }
    }

    pub fn bedrooms(&self) -> Option<u32> {
        match self {
            ListingDetails::ResidentialSale { bedrooms, .. }
            | ListingDetails::ShortTermRental { bedrooms, .. } => Some(*bedrooms),
            _ => None,
        }
    }

    pub fn area_sqft(&self) -> Option<u32> {
        match self {
            ListingDetails::ResidentialSale { area_sqft, .. }
            | ListingDetails::Land { area_sqft } => Some(*area_sqft),
            _ => None,
        }
    }

    fn validate(&self) -> Result<(), Error> {
        if let Some(rating) = self.rating()
            && !(0.0..=MAX_RATING).contains(&rating)
        {
            return Err(Error::InvalidListing(format!(
                "rating {rating} is outside 0-{MAX_RATING}"
            )));
        }
        match self {
            ListingDetails::ResidentialSale { bathrooms, .. }
            | ListingDetails::ShortTermRental { bathrooms, .. }
                if !bathrooms.is_finite() || *bathrooms < 0.0 =>
            {
                Err(Error::InvalidListing(format!(
                    "bathroom count {bathrooms} is not valid"
                )))
            }
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: Arc<str>,
    pub title: Arc<str>,
    pub price: f64,
    pub coordinate: Coordinate,
    pub address: Arc<str>,
    pub description: Arc<str>,
    #[serde(flatten)]
    pub details: ListingDetails,
}

impl Listing {
    pub fn price_basis(&self) -> PriceBasis {
        match self.details.category() {
            Category::Hotel | Category::ShortTermRental => PriceBasis::PerNight,
            Category::ResidentialSale | Category::Land => PriceBasis::Total,
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.id.trim().is_empty() {
            return Err(Error::InvalidListing("id is empty".into()));
        }
        validate_common(&self.title, self.price)?;
        self.details.validate()
    }
}

impl Identifiable for Listing {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.title
    }
}

impl Located for Listing {
    fn coordinate(&self) -> Coordinate {
        self.coordinate
    }
}

impl Categorized for Listing {
    fn category(&self) -> Category {
        self.details.category()
    }
}

/// A listing submitted for creation, before it has an id.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListingDraft {
    pub title: String,
    pub price: f64,
    pub coordinate: Coordinate,
    #[serde(default = "default_address", alias = "location")]
    pub address: String,
    #[serde(default = "default_description")]
    pub description: String,
    #[serde(flatten)]
    pub details: ListingDetails,
}

fn default_address() -> String {
    "Location pending".into()
}

fn default_description() -> String {
    "New listing".into()
}

impl ListingDraft {
    pub fn validate(&self) -> Result<(), Error> {
        validate_common(&self.title, self.price)?;
        self.details.validate()
    }

    pub fn into_listing(self, id: Arc<str>) -> Listing {
        Listing {
            id,
            title: self.title.into(),
            price: self.price,
            coordinate: self.coordinate,
            address: self.address.into(),
            description: self.description.into(),
            details: self.details,
        }
    }
}

fn validate_common(title: &str, price: f64) -> Result<(), Error> {
    if title.trim().is_empty() {
        return Err(Error::InvalidListing("title is empty".into()));
    }
    if !price.is_finite() || price <= 0.0 {
        return Err(Error::InvalidListing(format!("price {price} must be positive")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(details: ListingDetails) -> ListingDraft {
        ListingDraft {
            title: "Harbor loft".into(),
            price: 300.0,
            coordinate: Coordinate::new(40.7, -74.0).unwrap(),
            address: default_address(),
            description: default_description(),
            details,
        }
    }

    #[test]
    fn category_follows_details() {
        let listing = draft(ListingDetails::Land { area_sqft: 9000 }).into_listing("l-1".into());
        assert_eq!(listing.category(), Category::Land);
        assert_eq!(listing.price_basis(), PriceBasis::Total);
    }

    #[test]
    fn nightly_categories_are_priced_per_night() {
        let listing = draft(ListingDetails::Hotel {
            amenities: Amenities::new(),
            rating: Some(4.5),
            reviews: 10,
        })
        .into_listing("h-1".into());
        assert_eq!(listing.price_basis(), PriceBasis::PerNight);
    }

    #[test]
    fn rejects_out_of_range_rating() {
        let value = draft(ListingDetails::ShortTermRental {
            bedrooms: 1,
            bathrooms: 1.0,
            amenities: Amenities::new(),
            rating: Some(5.5),
            reviews: 2,
        });
        assert!(matches!(value.validate(), Err(Error::InvalidListing(_))));
    }

    #[test]
    fn rejects_non_positive_price() {
        let mut value = draft(ListingDetails::Land { area_sqft: 1 });
        value.price = 0.0;
        assert!(value.validate().is_err());
        value.price = f64::NAN;
        assert!(value.validate().is_err());
    }
}
