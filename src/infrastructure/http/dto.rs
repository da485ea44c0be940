//! Wire DTOs for the alias endpoint.

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/alias`.
#[derive(Debug, Serialize)]
pub struct CreateAliasRequest<'a> {
    pub url: &'a str,
}

/// Success response body of the alias endpoint.
///
/// ```json
/// {"alias":"abc","_links":{"self":"http://x.com","short":"http://short.com/abc"}}
/// ```
#[derive(Debug, Deserialize)]
pub struct AliasResponse {
    pub alias: String,
    #[serde(rename = "_links")]
    pub links: AliasLinks,
}

#[derive(Debug, Deserialize)]
pub struct AliasLinks {
    /// Echo of the original URL.
    #[serde(rename = "self")]
    pub self_url: String,
    /// The shortened URL.
    pub short: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_alias_response() {
        let body = r#"{"alias":"abc","_links":{"self":"http://x.com","short":"http://short.com/abc"}}"#;
        let dto: AliasResponse = serde_json::from_str(body).unwrap();
        assert_eq!(dto.alias, "abc");
        assert_eq!(dto.links.self_url, "http://x.com");
        assert_eq!(dto.links.short, "http://short.com/abc");
    }

    #[test]
    fn test_deserialize_rejects_missing_links() {
        let body = r#"{"alias":"abc"}"#;
        assert!(serde_json::from_str::<AliasResponse>(body).is_err());
    }

    #[test]
    fn test_serialize_create_request() {
        let body = serde_json::to_string(&CreateAliasRequest {
            url: "https://example.com",
        })
        .unwrap();
        assert_eq!(body, r#"{"url":"https://example.com"}"#);
    }
}
