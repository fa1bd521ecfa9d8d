//! Shared resource model for the aggregated listing.
//!
//! Source files are schema-free JSON, so records stay as open JSON objects.
//! Only the fields the aggregator owns (`type` and `url`) are typed.

use serde::{Deserialize, Serialize};

/// A schema-free source record as read from a data file.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Discriminant written onto every aggregated resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Github,
    BlogPost,
    JobListing,
}

impl ResourceKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::BlogPost => "blog_post",
            Self::JobListing => "job_listing",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the aggregated resource listing.
///
/// `fields` holds every source field except `type` and `url`, which are
/// owned by the aggregator and serialized from `kind` and `url`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resource {
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(flatten)]
    pub fields: Record,
}

impl Resource {
    /// String field lookup that treats empty strings as absent.
    #[must_use]
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .and_then(serde_json::Value::as_str)
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_serializes_type_and_url_alongside_fields() {
        let mut fields = Record::new();
        fields.insert("title".into(), serde_json::json!("Hello"));
        let resource = Resource {
            kind: ResourceKind::BlogPost,
            url: Some("https://example.com/a".into()),
            fields,
        };

        let json = serde_json::to_value(&resource).expect("serialize");
        assert_eq!(json["type"], "blog_post");
        assert_eq!(json["url"], "https://example.com/a");
        assert_eq!(json["title"], "Hello");
    }

    #[test]
    fn resource_kind_display_matches_serde_name() {
        for kind in [
            ResourceKind::Github,
            ResourceKind::BlogPost,
            ResourceKind::JobListing,
        ] {
            let json = serde_json::to_value(kind).expect("serialize");
            assert_eq!(json.as_str(), Some(kind.to_string().as_str()));
        }
    }

    #[test]
    fn str_field_ignores_empty_and_non_string_values() {
        let mut fields = Record::new();
        fields.insert("company".into(), serde_json::json!(""));
        fields.insert("stars".into(), serde_json::json!(12));
        fields.insert("title".into(), serde_json::json!("Advocate"));
        let resource = Resource {
            kind: ResourceKind::JobListing,
            url: None,
            fields,
        };

        assert_eq!(resource.str_field("company"), None);
        assert_eq!(resource.str_field("stars"), None);
        assert_eq!(resource.str_field("title"), Some("Advocate"));
    }
}
