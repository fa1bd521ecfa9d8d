//! Normalization from raw source records to [`drhub_core::Resource`].
//!
//! No schema validation happens here: every source field is carried through
//! and only `type` and `url` are rewritten.

use drhub_core::{Record, Resource, ResourceKind};
use serde_json::Value;

/// Non-empty string value of `key`, if any.
pub(crate) fn non_empty_str<'a>(record: &'a Record, key: &str) -> Option<&'a str> {
    record
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Identity key of a source record: `link`, falling back to `url`.
///
/// Empty strings and non-string values do not count as a key.
#[must_use]
pub fn identity_key(record: &Record) -> Option<&str> {
    non_empty_str(record, "link").or_else(|| non_empty_str(record, "url"))
}

/// Tags `record` with `kind` and coalesces its `url` from `link`/`url`.
///
/// GitHub entries also get a `title` taken from `name` (falling back to an
/// existing `title`) and an empty `description` when none is present.
#[must_use]
pub fn normalize(mut record: Record, kind: ResourceKind) -> Resource {
    let url = identity_key(&record).map(ToOwned::to_owned);
    record.remove("type");
    record.remove("url");

    if kind == ResourceKind::Github {
        let title = non_empty_str(&record, "name")
            .or_else(|| non_empty_str(&record, "title"))
            .map(ToOwned::to_owned);
        if let Some(title) = title {
            record.insert("title".to_owned(), Value::String(title));
        }
        if non_empty_str(&record, "description").is_none() {
            record.insert("description".to_owned(), Value::String(String::new()));
        }
    }

    Resource {
        kind,
        url,
        fields: record,
    }
}
