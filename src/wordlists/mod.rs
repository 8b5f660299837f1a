//! Word sources: the catalog of valid guesses and today's answer

mod catalog;
pub mod loader;

pub use catalog::WordCatalog;
pub use loader::{load_answer, load_catalog};
