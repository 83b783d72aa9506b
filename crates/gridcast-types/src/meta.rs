use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Column descriptor the grid hands through to formatters untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColumnMeta {
    /// Column (field) name in the row payload.
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Anything else the grid attaches. Carried, never read.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ColumnMeta {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Per-column configuration resolved by the hosting page.
///
/// Formatters read the overrides they understand and ignore the rest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldOptions {
    /// Override for the media-file detail route template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail_route: Option<String>,

    /// Override for the workflow dashboard base URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard_base: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
