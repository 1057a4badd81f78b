//! HTTP verbs used by the watsonx.data API surface.

use strum::{Display, EnumString};

/// HTTP methods appearing in the watsonx.data v2 endpoint table.
///
/// The API uses GET/POST for reads and creates, PATCH with JSON-Patch bodies
/// for partial updates, PUT for catalog association and snapshot rollback,
/// and DELETE for unregister/teardown operations.
///
/// ## Examples
///
/// ```rust
/// use watsonx_data::RestMethod;
///
/// assert_eq!(RestMethod::Patch.to_string(), "PATCH");
/// assert!(RestMethod::Patch.has_body());
/// assert!(!RestMethod::Delete.has_body());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    /// Retrieve a resource or collection.
    Get,
    /// Create a resource or trigger an action (pause, resume, scale, ...).
    Post,
    /// Replace or associate (catalog attach, snapshot rollback).
    Put,
    /// Partial update with an `application/json-patch+json` body.
    Patch,
    /// Remove a resource.
    Delete,
}

impl RestMethod {
    /// Returns `true` if requests with this method normally carry a body.
    pub fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }

    /// Converts to the equivalent `reqwest::Method`.
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Patch => reqwest::Method::PATCH,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl From<RestMethod> for reqwest::Method {
    fn from(method: RestMethod) -> Self {
        method.to_reqwest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_parse() {
        assert_eq!(RestMethod::Get.to_string(), "GET");
        assert_eq!(RestMethod::Patch.to_string(), "PATCH");
        assert_eq!("DELETE".parse::<RestMethod>().unwrap(), RestMethod::Delete);
    }

    #[test]
    fn test_has_body() {
        assert!(RestMethod::Post.has_body());
        assert!(RestMethod::Put.has_body());
        assert!(RestMethod::Patch.has_body());
        assert!(!RestMethod::Get.has_body());
        assert!(!RestMethod::Delete.has_body());
    }

    #[test]
    fn test_to_reqwest() {
        assert_eq!(RestMethod::Put.to_reqwest(), reqwest::Method::PUT);
        assert_eq!(RestMethod::Delete.to_reqwest(), reqwest::Method::DELETE);
    }
}
