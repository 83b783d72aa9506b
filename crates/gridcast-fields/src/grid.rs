use serde_json::{Map, Value};

use gridcast_render::Registry;
use gridcast_types::{RenderMode, Result};

use crate::field::Field;

/// Render one record through a view's columns into a `name → wire value`
/// map for the grid.
///
/// Fields with a render key dispatch through the registry; the rest pass
/// their extracted value straight through. A missing formatter surfaces as
/// `FormatterNotFound` so the hosting page decides its own fallback.
pub fn render_row(
    registry: &Registry,
    fields: &[Field],
    record: &Value,
    mode: RenderMode,
) -> Result<Map<String, Value>> {
    let mut row = Map::new();
    for field in fields {
        if field.exclude_from_list {
            continue;
        }
        let value = field.extractor.extract(record);
        let cell = match field.render_key {
            Some(key) => registry.render_cell(
                key,
                &value,
                mode,
                record,
                &field.column_meta(),
                &field.options,
            )?,
            None => value,
        };
        row.insert(field.name.clone(), cell);
    }
    Ok(row)
}
