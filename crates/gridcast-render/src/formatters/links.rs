use serde_json::Value;

use gridcast_types::{ColumnMeta, FieldOptions, RenderMode, Rendered};

use crate::html;

/// Default base of the workflow dashboard the pathspec links point at.
pub const DASHBOARD_BASE: &str = "https://dashboard.gridcast.dev/";

const EXTERNAL_ICON: &str = "fa fa-external-link";

fn link(url: &str, text: &str, mode: RenderMode) -> Rendered {
    if !mode.is_display() {
        return Rendered::Text(text.to_string());
    }
    Rendered::Html(html::anchor_with_icon(url, text, EXTERNAL_ICON))
}

/// `pathspec_link`: link a run's pathspec to the workflow dashboard.
///
/// The dashboard base is noise in a column, so the link text drops it;
/// the href keeps the full URL.
pub fn pathspec_link(
    value: &Value,
    mode: RenderMode,
    _record: &Value,
    _column: &ColumnMeta,
    options: &FieldOptions,
) -> Rendered {
    let Some(url) = value.as_str() else {
        return Rendered::Null;
    };
    let base = options.dashboard_base.as_deref().unwrap_or(DASHBOARD_BASE);
    let text = url.strip_prefix(base).unwrap_or(url);
    link(url, text, mode)
}

/// `external_link`: generic outbound link labeled by its last path segment.
pub fn external_link(
    value: &Value,
    mode: RenderMode,
    _record: &Value,
    _column: &ColumnMeta,
    _options: &FieldOptions,
) -> Rendered {
    let Some(url) = value.as_str() else {
        return Rendered::Null;
    };
    let text = url.rsplit('/').next().unwrap_or(url);
    link(url, text, mode)
}
