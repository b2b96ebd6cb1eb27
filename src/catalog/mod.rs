//! Course catalog wiring.
//!
//! This module turns the flat course file into an in-memory `Catalog` keyed by
//! normalized `CourseId`s. `loader` owns the file format, `model` the data
//! types, and `CatalogRepository` the session-long "last good catalog".

pub mod identity;
pub mod loader;
pub mod model;
pub mod repository;

pub use identity::CourseId;
pub use loader::{LoadStats, load_catalog_from_path, parse_catalog, parse_record};
pub use model::{Catalog, CourseRecord};
pub use repository::CatalogRepository;
