//! The operation surface: one façade method per API endpoint.
//!
//! Each family module holds its operation table entries, the per-operation
//! Options types (required fields through `new`, optional fields through
//! `with_*` setters), and an `impl WatsonxData` block of thin methods that
//! hand a table entry plus [`crate::request::RequestParts`] to the shared
//! executor.

pub mod buckets;
pub mod catalogs;
pub mod databases;
pub mod drivers;
pub mod engines;
pub mod milvus;
pub mod presto;
pub mod spark;

pub use buckets::*;
pub use catalogs::*;
pub use databases::*;
pub use drivers::*;
pub use engines::*;
pub use milvus::*;
pub use presto::*;
pub use spark::*;
