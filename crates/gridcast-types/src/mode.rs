use serde::{Deserialize, Serialize};

/// Rendering context the grid supplies with every cell.
///
/// `Display` cells become HTML; everything else (sorting, filtering,
/// export) consumes plain values, so markup must never leak into `Plain`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    #[default]
    Display,
    Plain,
}

impl RenderMode {
    /// Map the grid's per-request type string onto the two-valued mode.
    ///
    /// The widget distinguishes "display", "sort", "filter", "type", and
    /// "export" requests; only the first one draws a visual cell.
    pub fn from_request_type(kind: &str) -> Self {
        match kind {
            "display" => RenderMode::Display,
            _ => RenderMode::Plain,
        }
    }

    pub fn is_display(self) -> bool {
        matches!(self, RenderMode::Display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_request_type() {
        assert_eq!(RenderMode::from_request_type("display"), RenderMode::Display);
    }

    #[test]
    fn test_non_display_request_types() {
        for kind in ["sort", "filter", "type", "export", ""] {
            assert_eq!(RenderMode::from_request_type(kind), RenderMode::Plain);
        }
    }
}
