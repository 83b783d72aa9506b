use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use gridcast_types::{
    ColumnMeta, FieldOptions, Listed, MediaFileRef, RenderMode, Rendered, listed, listed_as,
};

use crate::html;

/// Relative route the detail links target, interpolated with the identifier.
pub const DETAIL_ROUTE: &str = "../media-file/detail/";

/// Catalog prefix every GUID carries. Stripped from link text only; hrefs
/// keep the full identifier.
static GUID_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^cpb-aacip-").unwrap());

pub(crate) fn short_guid(guid: &str) -> String {
    GUID_PREFIX.replace(guid, "").into_owned()
}

/// `media_file_links`: one detail link per referenced media file.
pub fn media_file_links(
    value: &Value,
    mode: RenderMode,
    _record: &Value,
    _column: &ColumnMeta,
    options: &FieldOptions,
) -> Rendered {
    let refs = match listed_as::<MediaFileRef>("media_file_links", value) {
        Ok(Listed::Null) => return Rendered::Null,
        Ok(Listed::Empty) => return Rendered::Empty,
        Ok(Listed::Items(refs)) => refs,
        // A broken cell must not take the whole table render down with it.
        Err(_) => return Rendered::Null,
    };

    if !mode.is_display() {
        let guids: Vec<String> = refs.iter().map(|r| short_guid(r.guid())).collect();
        return Rendered::Text(guids.join(", "));
    }

    let route = options.detail_route.as_deref().unwrap_or(DETAIL_ROUTE);
    let links: Vec<String> = refs
        .iter()
        .map(|r| {
            html::anchor(
                &format!("{}{}", route, r.link_target()),
                &short_guid(r.guid()),
            )
        })
        .collect();
    Rendered::Html(links.join(" "))
}

/// `media_file_count`: how many media files the row references.
pub fn media_file_count(
    value: &Value,
    _mode: RenderMode,
    _record: &Value,
    _column: &ColumnMeta,
    _options: &FieldOptions,
) -> Rendered {
    match listed(value) {
        Listed::Null => Rendered::Null,
        // An empty collection is a real count of zero, not an empty-column
        // state; this formatter is not list-generic like the others.
        Listed::Empty => Rendered::Number(0),
        Listed::Items(items) => Rendered::Number(items.len() as i64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_guid_strips_catalog_prefix() {
        assert_eq!(short_guid("cpb-aacip-12345"), "12345");
    }

    #[test]
    fn test_short_guid_leaves_other_identifiers_alone() {
        assert_eq!(short_guid("aapb-67890"), "aapb-67890");
        // Anchored: the prefix only counts at the start.
        assert_eq!(short_guid("x-cpb-aacip-1"), "x-cpb-aacip-1");
    }
}
