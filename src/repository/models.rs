use serde::Deserialize;

use crate::{
    listing::{self, Amenities, Category, Listing, ListingDetails},
    repository::Error,
    shared::Coordinate,
};

/// One row of a listings csv file.
///
/// Category specific columns are left empty when they do not apply.
/// Amenities are separated by `;`.
#[derive(Debug, Deserialize, Clone)]
pub struct CsvListing {
    pub id: String,
    pub category: String,
    pub title: String,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    #[serde(default)]
    pub description: String,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<f64>,
    pub area_sqft: Option<u32>,
    #[serde(default)]
    pub amenities: String,
    pub rating: Option<f64>,
    pub reviews: Option<u32>,
}

impl CsvListing {
    fn amenities(&self) -> Amenities {
        self.amenities
            .split(';')
            .map(str::trim)
            .filter(|amenity| !amenity.is_empty())
            .map(|amenity| amenity.into())
            .collect()
    }

    fn details(&self, category: Category) -> Result<ListingDetails, listing::Error> {
        let details = match category {
            Category::ResidentialSale => ListingDetails::ResidentialSale {
                bedrooms: required(self.bedrooms, "bedrooms")?,
                bathrooms: required(self.bathrooms, "bathrooms")?,
                area_sqft: required(self.area_sqft, "area_sqft")?,
                amenities: self.amenities(),
            },
            Category::Hotel => ListingDetails::Hotel {
                amenities: self.amenities(),
                rating: self.rating,
                reviews: self.reviews.unwrap_or_default(),
            },
            Category::ShortTermRental => ListingDetails::ShortTermRental {
                bedrooms: required(self.bedrooms, "bedrooms")?,
                bathrooms: required(self.bathrooms, "bathrooms")?,
                amenities: self.amenities(),
                rating: self.rating,
                reviews: self.reviews.unwrap_or_default(),
            },
            Category::Land => ListingDetails::Land {
                area_sqft: required(self.area_sqft, "area_sqft")?,
            },
        };
        Ok(details)
    }
}

fn required<T>(value: Option<T>, column: &str) -> Result<T, listing::Error> {
    value.ok_or_else(|| listing::Error::InvalidListing(format!("missing {column}")))
}

impl TryFrom<CsvListing> for Listing {
    type Error = Error;

    fn try_from(value: CsvListing) -> Result<Self, Self::Error> {
        let category: Category = value.category.parse()?;
        let details = value.details(category)?;
        let coordinate = Coordinate::new(value.latitude, value.longitude)?;
        Ok(Listing {
            id: value.id.into(),
            title: value.title.into(),
            price: value.price,
            coordinate,
            address: value.address.into(),
            description: value.description.into(),
            details,
        })
    }
}
