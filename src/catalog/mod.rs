mod load;
mod snapshot;
mod track;

pub use load::{load_catalog, Problem as LoadCatalogProblem};
pub use snapshot::CatalogSnapshot;
pub use track::{AudioDescriptor, Track};
