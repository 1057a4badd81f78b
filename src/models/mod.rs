//! Model structs mirroring the watsonx.data v2 JSON object shapes.
//!
//! Every optional field is an `Option<T>` with
//! `#[serde(skip_serializing_if = "Option::is_none")]`: absent fields stay
//! absent on the wire (never `null`), and fields missing from a response
//! stay `None` after decode. Fields the API always returns for a valid
//! resource are plain types, so their absence is a decode error.

pub mod buckets;
pub mod catalogs;
pub mod common;
pub mod databases;
pub mod drivers;
pub mod engines;
pub mod milvus;
pub mod presto;
pub mod spark;

pub use buckets::*;
pub use catalogs::*;
pub use common::*;
pub use databases::*;
pub use drivers::*;
pub use engines::*;
pub use milvus::*;
pub use presto::*;
pub use spark::*;
