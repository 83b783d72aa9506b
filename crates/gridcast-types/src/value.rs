use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// The two shapes a media file reference arrives in.
///
/// List payloads carry either the bare GUID or the loaded row; both render
/// the same way, so the distinction is made once here instead of per call
/// site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MediaFileRef {
    /// Loaded row: link by primary key, label by GUID.
    Linked { id: i64, guid: String },
    /// Bare GUID: link and label both use the GUID.
    Guid(String),
}

impl MediaFileRef {
    pub fn guid(&self) -> &str {
        match self {
            MediaFileRef::Linked { guid, .. } => guid,
            MediaFileRef::Guid(guid) => guid,
        }
    }

    /// Identifier the detail route is interpolated with.
    pub fn link_target(&self) -> String {
        match self {
            MediaFileRef::Linked { id, .. } => id.to_string(),
            MediaFileRef::Guid(guid) => guid.clone(),
        }
    }
}

/// Structured thumbnail item attached to an asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetThumbnail {
    pub location: String,
}

/// A list-oriented cell value after boundary normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum Listed<T> {
    /// Value was absent.
    Null,
    /// Value was present but held no elements.
    Empty,
    /// One or more elements; a scalar wraps to a singleton.
    Items(Vec<T>),
}

/// Coerce a raw cell value to a sequence without interpreting elements.
pub fn listed(value: &Value) -> Listed<&Value> {
    match value {
        Value::Null => Listed::Null,
        Value::Array(items) if items.is_empty() => Listed::Empty,
        Value::Array(items) => Listed::Items(items.iter().collect()),
        scalar => Listed::Items(vec![scalar]),
    }
}

/// Coerce a raw cell value to a sequence of `T`.
///
/// Any element of the wrong shape fails the whole cell with
/// `MalformedValue`; formatters catch that and fail closed.
pub fn listed_as<T: DeserializeOwned>(formatter: &'static str, value: &Value) -> Result<Listed<T>> {
    match listed(value) {
        Listed::Null => Ok(Listed::Null),
        Listed::Empty => Ok(Listed::Empty),
        Listed::Items(raw) => {
            let mut items = Vec::with_capacity(raw.len());
            for element in raw {
                let parsed =
                    serde_json::from_value(element.clone()).map_err(|err| Error::MalformedValue {
                        formatter,
                        detail: err.to_string(),
                    })?;
                items.push(parsed);
            }
            Ok(Listed::Items(items))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_media_file_ref_bare_guid() {
        let parsed: MediaFileRef = serde_json::from_value(json!("cpb-aacip-12345")).unwrap();
        assert_eq!(parsed, MediaFileRef::Guid("cpb-aacip-12345".into()));
        assert_eq!(parsed.link_target(), "cpb-aacip-12345");
    }

    #[test]
    fn test_media_file_ref_loaded_row() {
        let parsed: MediaFileRef =
            serde_json::from_value(json!({"id": 42, "guid": "cpb-aacip-12345"})).unwrap();
        assert_eq!(
            parsed,
            MediaFileRef::Linked {
                id: 42,
                guid: "cpb-aacip-12345".into()
            }
        );
        assert_eq!(parsed.link_target(), "42");
    }

    #[test]
    fn test_listed_absent_and_empty_are_distinct() {
        assert_eq!(listed(&Value::Null), Listed::Null);
        assert_eq!(listed(&json!([])), Listed::Empty);
    }

    #[test]
    fn test_listed_wraps_scalar() {
        let value = json!(true);
        match listed(&value) {
            Listed::Items(items) => assert_eq!(items, vec![&json!(true)]),
            other => panic!("expected singleton, got {:?}", other),
        }
    }

    #[test]
    fn test_listed_as_rejects_wrong_element_shape() {
        let err = listed_as::<bool>("finished", &json!([true, "nope"])).unwrap_err();
        assert!(matches!(err, Error::MalformedValue { formatter: "finished", .. }));
    }

    #[test]
    fn test_listed_as_parses_typed_elements() {
        let parsed = listed_as::<MediaFileRef>(
            "media_file_links",
            &json!(["cpb-aacip-1", {"id": 7, "guid": "cpb-aacip-2"}]),
        )
        .unwrap();
        match parsed {
            Listed::Items(items) => assert_eq!(items.len(), 2),
            other => panic!("expected items, got {:?}", other),
        }
    }
}
