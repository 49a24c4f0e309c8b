use std::collections::BTreeMap;

use praedex::{
    listing::Category,
    location::ReferencePoint,
    proximity::{Pin, PinLayout},
    shared::Coordinate,
};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ReferenceDto {
    pub coordinate: Coordinate,
    pub live: bool,
    pub acquired_at: String,
    pub pin: Option<Pin>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MapDto {
    pub pins: BTreeMap<String, Pin>,
    pub reference: ReferenceDto,
}

impl MapDto {
    pub fn from(layout: PinLayout, reference: ReferencePoint) -> Self {
        Self {
            pins: layout.pins,
            reference: ReferenceDto {
                coordinate: reference.coordinate,
                live: reference.live,
                acquired_at: reference.acquired_at.to_rfc3339(),
                pin: layout.reference,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryCountsDto {
    pub total: usize,
    pub categories: BTreeMap<Category, usize>,
}
