use crate::{
    listing::{Amenities, Listing, ListingDetails},
    shared::Coordinate,
};

fn amenities(values: &[&str]) -> Amenities {
    values.iter().map(|value| (*value).into()).collect()
}

fn listing(
    id: &str,
    title: &str,
    price: f64,
    (latitude, longitude): (f64, f64),
    address: &str,
    description: &str,
    details: ListingDetails,
) -> Listing {
    Listing {
        id: id.into(),
        title: title.into(),
        price,
        coordinate: Coordinate::new_unchecked(latitude, longitude),
        address: address.into(),
        description: description.into(),
        details,
    }
}

fn sale(bedrooms: u32, bathrooms: f64, area_sqft: u32, values: &[&str]) -> ListingDetails {
    ListingDetails::ResidentialSale {
        bedrooms,
        bathrooms,
        area_sqft,
        amenities: amenities(values),
    }
}

fn hotel(rating: f64, reviews: u32, values: &[&str]) -> ListingDetails {
    ListingDetails::Hotel {
        amenities: amenities(values),
        rating: Some(rating),
        reviews,
    }
}

fn shortlet(bedrooms: u32, bathrooms: f64, rating: f64, reviews: u32, values: &[&str]) -> ListingDetails {
    ListingDetails::ShortTermRental {
        bedrooms,
        bathrooms,
        amenities: amenities(values),
        rating: Some(rating),
        reviews,
    }
}

/// The built-in New York collection, covering every category.
pub fn seed_listings() -> Vec<Listing> {
    vec![
        listing(
            "prop-1",
            "Luxury Downtown Apartment",
            850_000.0,
            (40.7128, -74.006),
            "123 Main St, Downtown",
            "Stunning 3-bedroom luxury apartment in the heart of downtown. Features floor-to-ceiling windows, high-end finishes.",
            sale(3, 2.0, 1800, &["Pool", "Gym", "Rooftop", "Concierge"]),
        ),
        listing(
            "prop-2",
            "Suburban Family Home",
            620_000.0,
            (40.758, -73.9855),
            "456 Park Ave, Midtown",
            "Beautiful 4-bedroom family home in a peaceful suburban community with modern kitchen.",
            sale(4, 2.0, 2200, &["Garden", "Garage", "Playground"]),
        ),
        listing(
            "prop-3",
            "Modern Studio",
            420_000.0,
            (40.7489, -73.968),
            "789 5th Ave, Upper East Side",
            "Sleek studio apartment ideal for young professionals. Contemporary design, in-unit washer/dryer.",
            sale(1, 1.0, 650, &["Gym", "WiFi", "Laundry"]),
        ),
        listing(
            "prop-4",
            "Executive Penthouse",
            1_200_000.0,
            (40.7614, -73.9776),
            "1000 Park Ave South, Flatiron",
            "Ultra-premium penthouse with panoramic city views and private rooftop terrace.",
            sale(3, 3.0, 3500, &["Rooftop", "Smart Home", "Private Elevator"]),
        ),
        listing(
            "prop-5",
            "Cozy Townhouse",
            550_000.0,
            (40.7282, -73.7949),
            "234 Queens Blvd, Forest Hills",
            "Charming 2-bedroom townhouse with modern updates. Includes garage and small garden.",
            sale(2, 1.5, 1200, &["Garage", "Garden", "Parking"]),
        ),
        listing(
            "prop-6",
            "Beachfront Villa",
            1_500_000.0,
            (40.5731, -73.9712),
            "567 Beach Road, Coney Island",
            "Exclusive beachfront villa with direct ocean access and luxury finishes.",
            sale(4, 3.0, 4000, &["Beach Access", "Pool", "Private Dock"]),
        ),
        listing(
            "hotel-1",
            "The Plaza Hotel",
            450.0,
            (40.7647, -73.9776),
            "768 5th Avenue, Manhattan",
            "Iconic luxury hotel with world-class service, premium rooms, and fine dining.",
            hotel(4.8, 2350, &["Spa", "Restaurant", "Room Service", "WiFi"]),
        ),
        listing(
            "hotel-2",
            "Modern Times Hotel",
            280.0,
            (40.7549, -73.9841),
            "42 W 44th St, Times Square",
            "Contemporary boutique hotel in the heart of Times Square with rooftop views.",
            hotel(4.6, 1890, &["Rooftop Bar", "Gym", "Lounge"]),
        ),
        listing(
            "hotel-3",
            "Riverside Luxury Inn",
            520.0,
            (40.7505, -74.0072),
            "1 Riverside Drive, Upper West Side",
            "Premium waterfront hotel with Hudson River views, spa, and fine dining.",
            hotel(4.9, 3100, &["Spa", "Restaurant", "River Views", "Concierge"]),
        ),
        listing(
            "hotel-4",
            "Budget Comfort Stay",
            120.0,
            (40.7505, -73.9934),
            "200 Lexington Ave, Gramercy",
            "Affordable, clean, and comfortable hotel perfect for budget travelers.",
            hotel(4.2, 1540, &["WiFi", "Breakfast", "TV"]),
        ),
        listing(
            "hotel-5",
            "Downtown Boutique",
            380.0,
            (40.7165, -74.0043),
            "100 Chambers St, Tribeca",
            "Trendy boutique hotel in Tribeca with modern design and vibrant atmosphere.",
            hotel(4.7, 2100, &["Bar", "Lounge", "Modern Design"]),
        ),
        listing(
            "hotel-6",
            "Sunset Beach Resort",
            650.0,
            (40.5731, -73.9712),
            "888 Beach Boulevard, Coney Island",
            "All-inclusive beach resort with water sports, restaurants, and ocean views.",
            hotel(4.8, 2750, &["Beach", "Water Sports", "Restaurant", "Pool"]),
        ),
        listing(
            "shortlet-1",
            "Williamsburg Loft Stay",
            210.0,
            (40.7081, -73.9571),
            "88 Bedford Ave, Williamsburg",
            "Sunny warehouse loft with exposed brick, a short walk from the waterfront.",
            shortlet(2, 1.0, 4.7, 312, &["WiFi", "Kitchen", "Workspace"]),
        ),
        listing(
            "shortlet-2",
            "Harlem Brownstone Suite",
            165.0,
            (40.8116, -73.9465),
            "21 W 125th St, Harlem",
            "Garden-level suite in a restored brownstone with private entrance.",
            shortlet(1, 1.0, 4.5, 128, &["WiFi", "Garden", "Self Check-in"]),
        ),
        listing(
            "shortlet-3",
            "Astoria Family Apartment",
            190.0,
            (40.7644, -73.9235),
            "30-12 Steinway St, Astoria",
            "Spacious two-bedroom apartment close to the park and the N/W line.",
            shortlet(2, 1.5, 4.4, 96, &["Kitchen", "Washer", "Crib"]),
        ),
        listing(
            "land-1",
            "Staten Island Waterfront Parcel",
            380_000.0,
            (40.5795, -74.1502),
            "Arthur Kill Rd, Staten Island",
            "Zoned residential parcel with water views and utilities at the lot line.",
            ListingDetails::Land { area_sqft: 21_780 },
        ),
        listing(
            "land-2",
            "Bronx Development Lot",
            910_000.0,
            (40.8448, -73.8648),
            "1500 Westchester Ave, Bronx",
            "Corner lot approved for mixed-use development near transit.",
            ListingDetails::Land { area_sqft: 12_500 },
        ),
    ]
}

#[test]
fn seed_listings_are_valid_test() {
    let seed = seed_listings();
    assert!(seed.iter().all(|listing| listing.validate().is_ok()));
    assert!(seed.iter().all(|listing| listing.coordinate.validate().is_ok()));
}
