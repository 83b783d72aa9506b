use serde_json::Value;

use gridcast_types::{AssetThumbnail, ColumnMeta, FieldOptions, RenderMode, Rendered};

use crate::html;

/// `asset_thumbnail`: inline preview for an asset's thumbnail.
///
/// An absent value renders as nothing at all, not as the null placeholder;
/// a blank thumbnail cell reads better than a marker. Malformed items take
/// the same path.
pub fn asset_thumbnail(
    value: &Value,
    _mode: RenderMode,
    _record: &Value,
    _column: &ColumnMeta,
    _options: &FieldOptions,
) -> Rendered {
    if value.is_null() {
        return Rendered::Nothing;
    }
    match serde_json::from_value::<AssetThumbnail>(value.clone()) {
        Ok(thumbnail) => Rendered::Html(format!(
            r#"<img src="{}" style="max-height:150px;" loading="lazy">"#,
            html::escape(&thumbnail.location)
        )),
        Err(_) => Rendered::Nothing,
    }
}
