use criterion::{Criterion, criterion_group, criterion_main};
use praedex::prelude::*;
use praedex::repository::seed_listings;
use std::{hint::black_box, time::Duration};

const COPIES: usize = 1000;

/// Seed listings spread out over a larger area, `COPIES` times over.
fn listings() -> Vec<Listing> {
    let seed = seed_listings();
    (0..COPIES)
        .flat_map(|copy| {
            seed.iter().filter_map(move |listing| {
                let offset = copy as f64 * 0.0007;
                let coordinate = Coordinate::new(
                    listing.coordinate.latitude() + offset,
                    listing.coordinate.longitude() - offset,
                )
                .ok()?;
                Some(Listing {
                    id: format!("{}-{copy}", listing.id).into(),
                    coordinate,
                    ..listing.clone()
                })
            })
        })
        .collect()
}

fn by_distance(repository: &Repository, reference: &Coordinate) {
    let _ = black_box(repository.listings_by_distance(reference, CategoryFilter::All));
}

fn nearest_hotels(repository: &Repository, reference: &Coordinate) {
    let _ = black_box(repository.nearest(reference, CategoryFilter::Only(Category::Hotel), 5));
}

fn pins(repository: &Repository, reference: &Coordinate) {
    let _ = black_box(repository.pin_layout(CategoryFilter::All, Some(reference), 10.0));
}

fn criterion_benchmark(c: &mut Criterion) {
    let repository = Repository::new()
        .with_listings(listings())
        .expect("Failed to build repository");
    let reference = Coordinate::new(40.7128, -74.0060).expect("Invalid reference");

    let mut group = c.benchmark_group("Proximity");

    group.warm_up_time(Duration::from_secs(3));

    group.measurement_time(Duration::from_secs(10));

    group.bench_function("Sort by distance", |b| {
        b.iter(|| by_distance(&repository, &reference))
    });

    group.bench_function("Nearest hotels", |b| {
        b.iter(|| nearest_hotels(&repository, &reference))
    });

    group.bench_function("Pin layout", |b| {
        b.iter(|| pins(&repository, &reference))
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
