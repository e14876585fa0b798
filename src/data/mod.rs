//! Data module - CSV loading and cleaning

mod cleaner;
mod loader;

pub use cleaner::{CleanError, DataCleaner};
pub use cleaner::{APP, CATEGORY, CONTENT_RATING, INSTALLS, RATING, REVIEWS};
pub use loader::{DataLoader, LoaderError};
