//! CESR (Composable Event Streaming Representation) primitive codec in Rust.
//!
//! Provides the Matter, Counter and Indexer engines plus the typed primitives
//! KERI and ACDC build on.

// Error handling module
mod errors;
// Primitive codec
pub mod cesr;

pub use errors::{CesrError, Result};
pub use cesr::counting::{BaseCounter, Counter, CounterSource};
pub use cesr::indexing::{BaseIndexer, Indexer, IndexerSource};
pub use cesr::matter::{BaseMatter, Matter, MatterSource};
pub use cesr::{Parsable, Versionage, VERSION};
