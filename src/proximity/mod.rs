use std::collections::BTreeMap;

use rayon::prelude::*;
use tracing::debug;

pub mod pins;
pub use pins::*;

use crate::{
    listing::{Categorized, Category, CategoryFilter},
    shared::{
        Identifiable, Located,
        geo::{Coordinate, Distance},
    },
};

/// An item paired with its distance from a reference point.
/// The distance is kept at the two-decimal kilometer precision it is shown with.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotated<T> {
    pub item: T,
    pub distance: Distance,
}

impl<T> Annotated<T> {
    pub fn distance_km(&self) -> f64 {
        self.distance.as_kilometers()
    }

    pub fn into_inner(self) -> T {
        self.item
    }
}

impl<T: Categorized> Categorized for Annotated<T> {
    fn category(&self) -> Category {
        self.item.category()
    }
}

impl<T: Identifiable> Identifiable for Annotated<T> {
    fn id(&self) -> &str {
        self.item.id()
    }

    fn name(&self) -> &str {
        self.item.name()
    }
}

impl<T: Located> Located for Annotated<T> {
    fn coordinate(&self) -> Coordinate {
        self.item.coordinate()
    }
}

/// Annotates every item with its distance from `reference` and orders them
/// nearest first. Items at equal distance keep their input order.
pub fn annotate_and_sort<T, I>(reference: &Coordinate, items: I) -> Vec<Annotated<T>>
where
    T: Located + Send,
    I: IntoIterator<Item = T>,
{
    let items: Vec<T> = items.into_iter().collect();
    debug!("Annotating {} items from {reference}", items.len());
    let mut annotated: Vec<Annotated<T>> = items
        .into_par_iter()
        .map(|item| {
            let distance = reference.distance(&item.coordinate()).rounded_kilometers();
            Annotated {
                item,
                distance: Distance::from_kilometers(distance),
            }
        })
        .collect();
    // par_sort_by is stable
    annotated.par_sort_by(|a, b| a.distance.cmp_total(&b.distance));
    annotated
}

/// The `limit` items closest to `reference`, nearest first.
pub fn nearest<T, I>(reference: &Coordinate, items: I, limit: usize) -> Vec<Annotated<T>>
where
    T: Located + Send,
    I: IntoIterator<Item = T>,
{
    let mut annotated = annotate_and_sort(reference, items);
    annotated.truncate(limit);
    annotated
}

/// Keeps the items accepted by `filter`, in their original order.
pub fn filter_by_category<T, I>(items: I, filter: CategoryFilter) -> Vec<T>
where
    T: Categorized,
    I: IntoIterator<Item = T>,
{
    items
        .into_iter()
        .filter(|item| filter.matches(item.category()))
        .collect()
}

/// Number of items per category. Every category is present, empty ones with 0.
pub fn category_counts<T, I>(items: I) -> BTreeMap<Category, usize>
where
    T: Categorized,
    I: IntoIterator<Item = T>,
{
    let mut counts: BTreeMap<Category, usize> =
        Category::ALL.iter().map(|category| (*category, 0)).collect();
    items
        .into_iter()
        .for_each(|item| *counts.entry(item.category()).or_default() += 1);
    counts
}
