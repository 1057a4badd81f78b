//! Async Rust client for the IBM watsonx.data v2 REST API.
//!
//! The surface is deliberately uniform: one [`WatsonxData`] method per API
//! operation, each taking a per-operation Options value (required fields via
//! `new`, optional fields via `with_*` setters) and returning a typed serde
//! model or a layered [`ApiError`]. All methods funnel through one shared
//! request pipeline, so validation, header handling, error mapping, and
//! tracing behave identically everywhere.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use url::Url;
//! use watsonx_data::{ApiAuthMethod, ListBucketRegistrationsOptions, WatsonxData};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), watsonx_data::ApiError> {
//! let base_url = Url::parse("https://us-south.lakehouse.cloud.ibm.com/lakehouse/api/v2").unwrap();
//! let client = WatsonxData::builder(base_url)
//!     .auth(ApiAuthMethod::BearerToken, "iam-access-token")
//!     .auth_instance_id("crn:v1:bluemix:public:lakehouse:us-south:a/acct:instance::")
//!     .build()?;
//!
//! let buckets = client
//!     .list_bucket_registrations(&ListBucketRegistrationsOptions::new())
//!     .await?;
//! for bucket in buckets.bucket_registrations.unwrap_or_default() {
//!     println!("{:?} ({:?})", bucket.bucket_display_name, bucket.state);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! Every method returns `Result<_, ApiError>` with four variants a caller
//! can branch on: validation (raised before any I/O), transport, HTTP status
//! (with the parsed server payload), and decode. Nothing is retried inside
//! the crate.
//!
//! Token acquisition is out of scope: callers obtain an IAM bearer token (or
//! API key) through their own flow and hand the credential to the builder.

mod auth;
mod client;
mod endpoint;
mod error;
mod method;
mod patch;
mod request;

pub mod models;
pub mod service;

pub use auth::ApiAuthMethod;
pub use client::{WatsonxData, WatsonxDataBuilder};
pub use error::{ApiError, ErrorBody, ErrorTarget, ValidationError};
pub use method::RestMethod;
pub use patch::{PatchOp, PatchOperation};
pub use service::*;
