use praedex::{location::Locator, repository::ListingStore};
use tokio::sync::RwLock;

pub struct AppState {
    pub store: RwLock<Box<dyn ListingStore>>,
    pub locator: Locator,
    pub margin_percent: f64,
}

impl AppState {
    pub fn new<S: ListingStore + 'static>(store: S, locator: Locator, margin_percent: f64) -> Self {
        Self {
            store: RwLock::new(Box::new(store)),
            locator,
            margin_percent,
        }
    }
}
