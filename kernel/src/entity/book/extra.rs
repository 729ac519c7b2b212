use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Caller-supplied attributes the catalog stores and returns untouched.
/// `reading` and `publisher` live here; the catalog only ever reads them
/// for filtering and the list projection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookExtra(Map<String, Value>);

/// Field names the catalog itself owns. A caller-supplied value under one
/// of these would shadow the stored or derived one when the opaque fields
/// are flattened back onto the record.
const FIXED_FIELDS: [&str; 7] = [
    "id",
    "name",
    "pageCount",
    "readPage",
    "finished",
    "insertedAt",
    "updatedAt",
];

impl BookExtra {
    pub fn new(fields: impl Into<Map<String, Value>>) -> Self {
        let mut fields = fields.into();
        for key in FIXED_FIELDS {
            fields.remove(key);
        }
        Self(fields)
    }

    /// Present only when the caller sent a real boolean.
    pub fn reading(&self) -> Option<bool> {
        self.0.get("reading").and_then(Value::as_bool)
    }

    pub fn publisher(&self) -> Option<Value> {
        self.0.get("publisher").cloned()
    }

    /// Overlays `patch` on top of these fields; keys from `patch` win.
    pub fn merge(mut self, patch: BookExtra) -> Self {
        self.0.extend(patch.0);
        self
    }
}

impl AsRef<Map<String, Value>> for BookExtra {
    fn as_ref(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<BookExtra> for Map<String, Value> {
    fn from(value: BookExtra) -> Self {
        value.0
    }
}

#[cfg(test)]
mod test {
    use serde_json::{json, Value};

    use crate::entity::BookExtra;

    fn extra(value: Value) -> BookExtra {
        match value {
            Value::Object(map) => BookExtra::new(map),
            _ => unreachable!(),
        }
    }

    #[test]
    fn merge_overwrites_existing_and_keeps_the_rest() {
        let merged = extra(json!({"author": "Steve", "publisher": "No Starch"}))
            .merge(extra(json!({"publisher": "O'Reilly", "genre": "tech"})));
        assert_eq!(
            Value::Object(merged.into()),
            json!({"author": "Steve", "publisher": "O'Reilly", "genre": "tech"})
        );
    }

    #[test]
    fn catalog_owned_keys_never_become_opaque_fields() {
        let fields = extra(json!({
            "id": "forged",
            "finished": false,
            "insertedAt": "2000-01-01T00:00:00Z",
            "updatedAt": "2000-01-01T00:00:00Z",
            "publisher": "Kept"
        }));
        assert_eq!(
            Value::Object(fields.into()),
            json!({"publisher": "Kept"})
        );
    }

    #[test]
    fn reading_requires_a_boolean() {
        assert_eq!(extra(json!({"reading": true})).reading(), Some(true));
        assert_eq!(extra(json!({"reading": "1"})).reading(), None);
        assert_eq!(extra(json!({})).reading(), None);
    }
}
