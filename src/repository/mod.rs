use std::{
    collections::{BTreeMap, HashMap},
    fs::File,
    io::{self, Read},
    path::Path,
    sync::Arc,
};

use thiserror::Error;
use tracing::{info, warn};

mod models;
mod seed;
pub use models::*;
pub use seed::*;

use crate::{
    listing::{self, Category, CategoryFilter, Listing, ListingDraft},
    proximity::{self, Annotated, PinLayout},
    shared::geo::{self, Coordinate},
};

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Coordinate(#[from] geo::Error),
    #[error(transparent)]
    Listing(#[from] listing::Error),
    #[error("Duplicate listing id: {0}")]
    DuplicateId(String),
}

/// Where request handlers read and add listings.
pub trait ListingStore: Send + Sync {
    fn list(&self) -> Vec<Listing>;
    fn listing_by_id(&self, id: &str) -> Option<Listing>;
    fn add(&mut self, draft: ListingDraft) -> Result<Listing, Error>;
}

/// In-memory listing collection with an id lookup.
#[derive(Debug, Clone, Default)]
pub struct Repository {
    listings: Vec<Listing>,
    listing_lookup: HashMap<Arc<str>, usize>,
}

impl Repository {
    pub fn new() -> Self {
        Default::default()
    }

    /// Adds already identified listings. Every listing is validated and ids
    /// must not collide with each other or with what is already stored.
    pub fn with_listings<I>(mut self, listings: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = Listing>,
    {
        for listing in listings {
            listing.validate()?;
            self.insert(listing)?;
        }
        Ok(self)
    }

    /// Adds the built-in New York collection.
    pub fn with_seed(self) -> Result<Self, Error> {
        let seed = seed_listings();
        info!("Loading {} seed listings", seed.len());
        self.with_listings(seed)
    }

    /// Loads listings from a csv file, see [`CsvListing`] for the columns.
    pub fn with_csv<P: AsRef<Path>>(self, path: P) -> Result<Self, Error> {
        let file = File::open(path.as_ref())?;
        info!("Loading listings from {}", path.as_ref().display());
        self.with_csv_reader(file)
    }

    /// Rows that fail to parse, convert or validate are skipped.
    /// Duplicate ids still fail the whole load.
    pub fn with_csv_reader<R: Read>(self, reader: R) -> Result<Self, Error> {
        let mut reader = csv::Reader::from_reader(reader);
        let listings: Vec<Listing> = reader
            .deserialize::<CsvListing>()
            .enumerate()
            .filter_map(|(i, row)| match parse_row(row) {
                Ok(listing) => Some(listing),
                Err(err) => {
                    warn!("Skipping csv row {}: {err}", i + 1);
                    None
                }
            })
            .collect();
        self.with_listings(listings)
    }

    fn insert(&mut self, listing: Listing) -> Result<(), Error> {
        if self.listing_lookup.contains_key(&listing.id) {
            return Err(Error::DuplicateId(listing.id.to_string()));
        }
        self.listing_lookup
            .insert(listing.id.clone(), self.listings.len());
        self.listings.push(listing);
        Ok(())
    }

    fn next_id(&self) -> Arc<str> {
        let mut n = self.listings.len() + 1;
        loop {
            let id = format!("listing-{n}");
            if !self.listing_lookup.contains_key(id.as_str()) {
                return id.into();
            }
            n += 1;
        }
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Get a listing with the given id.
    /// If no listing is found with the given id None is returned.
    pub fn listing_by_id(&self, id: &str) -> Option<&Listing> {
        let index = self.listing_lookup.get(id)?;
        Some(&self.listings[*index])
    }

    /// Listings accepted by the filter, nearest to the coordinate first.
    pub fn listings_by_distance(
        &self,
        coordinate: &Coordinate,
        filter: CategoryFilter,
    ) -> Vec<Annotated<&Listing>> {
        proximity::filter_by_category(
            proximity::annotate_and_sort(coordinate, &self.listings),
            filter,
        )
    }

    /// The `limit` nearest listings accepted by the filter.
    pub fn nearest(
        &self,
        coordinate: &Coordinate,
        filter: CategoryFilter,
        limit: usize,
    ) -> Vec<Annotated<&Listing>> {
        let mut listings = self.listings_by_distance(coordinate, filter);
        listings.truncate(limit);
        listings
    }

    pub fn pin_layout(
        &self,
        filter: CategoryFilter,
        reference: Option<&Coordinate>,
        margin_percent: f64,
    ) -> PinLayout {
        proximity::normalize_to_unit_square(
            proximity::filter_by_category(&self.listings, filter),
            reference,
            margin_percent,
        )
    }

    pub fn category_counts(&self) -> BTreeMap<Category, usize> {
        proximity::category_counts(&self.listings)
    }
}

fn parse_row(row: Result<CsvListing, csv::Error>) -> Result<Listing, Error> {
    let listing = Listing::try_from(row?)?;
    listing.validate()?;
    Ok(listing)
}

impl ListingStore for Repository {
    fn list(&self) -> Vec<Listing> {
        self.listings.clone()
    }

    fn listing_by_id(&self, id: &str) -> Option<Listing> {
        Repository::listing_by_id(self, id).cloned()
    }

    fn add(&mut self, draft: ListingDraft) -> Result<Listing, Error> {
        draft.validate()?;
        let listing = draft.into_listing(self.next_id());
        self.insert(listing.clone())?;
        info!("Added listing {} ({})", listing.id, listing.title);
        Ok(listing)
    }
}
