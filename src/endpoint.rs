//! Static operation descriptors and path-template resolution.
//!
//! Every API operation is described by one [`Operation`] table entry (verb +
//! path template + identifier). Façade methods stay one-liners by handing
//! their entry and per-call [`crate::request::RequestParts`] to the shared
//! executor.

use url::Url;

use crate::error::{ApiError, ValidationError};
use crate::method::RestMethod;

/// Descriptor for one API operation.
///
/// Path templates use `{name}` placeholders, resolved per call from the
/// operation's path parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    /// Stable operation identifier, sent in the SDK analytics header.
    pub id: &'static str,
    /// HTTP verb.
    pub method: RestMethod,
    /// Path template relative to the service base URL.
    pub path: &'static str,
}

/// Resolves a path template against a base URL.
///
/// Each `{name}` segment is replaced with its value from `params` and pushed
/// through [`Url::path_segments_mut`], which percent-encodes reserved
/// characters: a value of `abc/def` lands on the wire as `abc%2Fdef` and
/// never changes the path structure.
///
/// ## Errors
///
/// - [`ValidationError::EmptyField`] if a parameter value is empty
/// - [`ValidationError::UnresolvedPlaceholder`] if the template names a
///   parameter that was not supplied
/// - [`ValidationError::BaseUrl`] if the base URL cannot carry segments
pub(crate) fn resolve_path(
    base: &Url,
    template: &str,
    params: &[(&'static str, String)],
) -> Result<Url, ApiError> {
    for &(field, ref value) in params {
        if value.is_empty() {
            return Err(ValidationError::EmptyField { field }.into());
        }
    }

    let mut url = base.clone();
    {
        let mut segments = url.path_segments_mut().map_err(|()| ValidationError::BaseUrl {
            url: base.to_string(),
        })?;
        segments.pop_if_empty();
        for segment in template.split('/').filter(|s| !s.is_empty()) {
            if let Some(name) = segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                let value = params
                    .iter()
                    .find(|(param, _)| *param == name)
                    .map(|(_, value)| value.as_str())
                    .ok_or_else(|| ValidationError::UnresolvedPlaceholder {
                        name: name.to_string(),
                    })?;
                segments.push(value);
            } else {
                segments.push(segment);
            }
        }
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://region.lakehouse.cloud.ibm.com/lakehouse/api/v2").unwrap()
    }

    #[test]
    fn test_literal_segments() {
        let url = resolve_path(&base(), "/bucket_registrations", &[]).unwrap();
        assert_eq!(url.path(), "/lakehouse/api/v2/bucket_registrations");
    }

    #[test]
    fn test_placeholder_substitution() {
        let url = resolve_path(
            &base(),
            "/bucket_registrations/{bucket_id}",
            &[("bucket_id", "b1".to_string())],
        )
        .unwrap();
        assert_eq!(url.path(), "/lakehouse/api/v2/bucket_registrations/b1");
    }

    #[test]
    fn test_slash_in_value_is_escaped() {
        let url = resolve_path(
            &base(),
            "/bucket_registrations/{bucket_id}",
            &[("bucket_id", "abc/def".to_string())],
        )
        .unwrap();
        assert_eq!(url.path(), "/lakehouse/api/v2/bucket_registrations/abc%2Fdef");
    }

    #[test]
    fn test_multiple_placeholders() {
        let url = resolve_path(
            &base(),
            "/catalogs/{catalog_id}/schemas/{schema_id}",
            &[
                ("catalog_id", "iceberg_data".to_string()),
                ("schema_id", "sales".to_string()),
            ],
        )
        .unwrap();
        assert_eq!(
            url.path(),
            "/lakehouse/api/v2/catalogs/iceberg_data/schemas/sales"
        );
    }

    #[test]
    fn test_empty_value_is_a_validation_error() {
        let err = resolve_path(
            &base(),
            "/bucket_registrations/{bucket_id}",
            &[("bucket_id", String::new())],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ApiError::Validation(ValidationError::EmptyField { field: "bucket_id" })
        ));
    }

    #[test]
    fn test_unresolved_placeholder_is_a_validation_error() {
        let err = resolve_path(&base(), "/engines/{engine_id}", &[]).unwrap_err();
        assert!(matches!(
            err,
            ApiError::Validation(ValidationError::UnresolvedPlaceholder { name }) if name == "engine_id"
        ));
    }

    #[test]
    fn test_base_url_without_trailing_slash_keeps_prefix() {
        let base = Url::parse("http://127.0.0.1:9999").unwrap();
        let url = resolve_path(&base, "/milvus_services", &[]).unwrap();
        assert_eq!(url.path(), "/milvus_services");
    }
}
