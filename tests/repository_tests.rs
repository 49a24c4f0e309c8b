use praedex::{
    listing::{Amenities, Category, CategoryFilter, ListingDetails, ListingDraft},
    repository::{Error, ListingStore, Repository, seed_listings},
    shared::Coordinate,
};

const CSV: &str = "\
id,category,title,price,latitude,longitude,address,description,bedrooms,bathrooms,area_sqft,amenities,rating,reviews
a-1,residential-sale,Corner Condo,450000,40.73,-73.99,1 Union Sq,Bright corner unit,2,1.5,900,Gym; Doorman,,
a-2,hotel,Canal Inn,180,40.72,-74.00,5 Canal St,,,,,WiFi,4.1,88
a-3,shortlet,Park Slope Flat,150,40.67,-73.98,7th Ave,,1,1,,Kitchen,,
a-4,land,Queens Lot,200000,40.70,-73.80,Jamaica Ave,,,,5000,,,
bad-1,castle,Nowhere,1,40.0,-74.0,,,,,,,,
bad-2,land,Off the map,1,123.0,-74.0,,,,,10,,,
bad-3,residential-sale,No bedrooms,1,40.0,-74.0,,,,1,100,,,
bad-4,land,Free lot,0,40.0,-74.0,,,,,10,,,
bad-5,hotel,Too good,100,40.0,-74.0,,,,,,WiFi,7.0,3
";

fn draft(title: &str, price: f64) -> ListingDraft {
    ListingDraft {
        title: title.into(),
        price,
        coordinate: Coordinate::new(40.7, -73.9).unwrap(),
        address: "Kent Ave".into(),
        description: "".into(),
        details: ListingDetails::Land { area_sqft: 4000 },
    }
}

#[test]
fn seed_test() {
    let repository = Repository::new().with_seed().unwrap();
    assert_eq!(repository.len(), seed_listings().len());
    assert_eq!(
        repository.listing_by_id("hotel-3").unwrap().title.as_ref(),
        "Riverside Luxury Inn"
    );
    assert!(repository.listing_by_id("missing").is_none());
    assert!(
        repository
            .category_counts()
            .values()
            .all(|count| *count > 0)
    );
}

#[test]
fn csv_test() {
    let repository = Repository::new().with_csv_reader(CSV.as_bytes()).unwrap();
    assert_eq!(repository.len(), 4);

    let condo = repository.listing_by_id("a-1").unwrap();
    assert_eq!(
        condo.details,
        ListingDetails::ResidentialSale {
            bedrooms: 2,
            bathrooms: 1.5,
            area_sqft: 900,
            amenities: Amenities::from(["Gym".into(), "Doorman".into()]),
        }
    );

    let inn = repository.listing_by_id("a-2").unwrap();
    assert_eq!(inn.details.rating(), Some(4.1));
    assert_eq!(inn.description.as_ref(), "");

    let flat = repository.listing_by_id("a-3").unwrap();
    assert_eq!(flat.details.category(), Category::ShortTermRental);
    assert_eq!(flat.details.rating(), None);

    let lot = repository.listing_by_id("a-4").unwrap();
    assert_eq!(lot.details.area_sqft(), Some(5000));
    assert!(lot.details.amenities().is_none());

    assert!(repository.listing_by_id("bad-1").is_none());
    assert!(repository.listing_by_id("bad-2").is_none());
    assert!(repository.listing_by_id("bad-3").is_none());
    assert!(repository.listing_by_id("bad-4").is_none());
    assert!(repository.listing_by_id("bad-5").is_none());
}

#[test]
fn csv_duplicate_id_test() {
    let csv = "\
id,category,title,price,latitude,longitude,address,description,bedrooms,bathrooms,area_sqft,amenities,rating,reviews
lot-1,land,North lot,1000,40.0,-74.0,,,,,10,,,
lot-1,land,South lot,2000,39.0,-74.0,,,,,10,,,
";
    let result = Repository::new().with_csv_reader(csv.as_bytes());
    assert!(matches!(result, Err(Error::DuplicateId(id)) if id == "lot-1"));
}

#[test]
fn duplicate_id_test() {
    let mut listings = seed_listings();
    listings.push(listings[0].clone());
    let result = Repository::new().with_listings(listings);
    assert!(matches!(result, Err(Error::DuplicateId(id)) if id == "prop-1"));
}

#[test]
fn add_test() {
    let mut repository = Repository::new().with_seed().unwrap();
    let before = repository.len();
    let listing = repository.add(draft("Williamsburg lot", 700_000.0)).unwrap();
    assert_eq!(listing.id.as_ref(), format!("listing-{}", before + 1));
    assert_eq!(repository.list().len(), before + 1);
    assert_eq!(
        ListingStore::listing_by_id(&repository, &listing.id),
        Some(listing.clone())
    );

    let second = repository.add(draft("Red Hook lot", 500_000.0)).unwrap();
    assert_ne!(second.id, listing.id);
}

#[test]
fn add_skips_taken_ids_test() {
    let mut taken = seed_listings().remove(0);
    taken.id = "listing-2".into();
    let mut repository = Repository::new().with_listings([taken]).unwrap();
    let listing = repository.add(draft("Lot", 1.0)).unwrap();
    assert_eq!(listing.id.as_ref(), "listing-3");
}

#[test]
fn add_rejects_invalid_draft_test() {
    let mut repository = Repository::new();
    assert!(matches!(
        repository.add(draft(" ", 10.0)),
        Err(Error::Listing(_))
    ));
    assert!(matches!(
        repository.add(draft("Lot", -10.0)),
        Err(Error::Listing(_))
    ));
    assert!(repository.is_empty());
}

#[test]
fn nearest_by_category_test() {
    let repository = Repository::new().with_seed().unwrap();
    let reference = Coordinate::new(40.7128, -74.0060).unwrap();
    let hotels = repository.nearest(&reference, CategoryFilter::Only(Category::Hotel), 2);
    let ids: Vec<&str> = hotels.iter().map(|hotel| hotel.item.id.as_ref()).collect();
    assert_eq!(ids, vec!["hotel-5", "hotel-3"]);
    assert!(hotels[0].distance <= hotels[1].distance);

    let layout = repository.pin_layout(CategoryFilter::All, Some(&reference), 10.0);
    assert_eq!(layout.pins.len(), repository.len());
    assert!(layout.reference.is_some());
}
