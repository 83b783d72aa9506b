use serde_json::Value;

use gridcast_types::{ColumnMeta, FieldOptions, Listed, RenderMode, Rendered, listed_as};

/// One glyph per boolean, wrapped in the grid's flex container.
///
/// `tone`/`icon` pairs are the style framework's classes; polarity between
/// the two status variants lives entirely in which pair maps to `true`.
fn glyph_row(
    formatter: &'static str,
    value: &Value,
    mode: RenderMode,
    yes: (&str, &str),
    no: (&str, &str),
) -> Rendered {
    let states = match listed_as::<bool>(formatter, value) {
        Ok(Listed::Null) => return Rendered::Null,
        Ok(Listed::Empty) => return Rendered::Empty,
        Ok(Listed::Items(states)) => states,
        Err(_) => return Rendered::Null,
    };

    if !mode.is_display() {
        let literals: Vec<String> = states.iter().map(bool::to_string).collect();
        return Rendered::Text(literals.join(", "));
    }

    let cells: String = states
        .iter()
        .map(|&state| {
            let (tone, icon) = if state { yes } else { no };
            format!(
                r#"<div class="p-1"><span class="text-center {}"><i class="fa-solid {} fa-lg"></i></span></div>"#,
                tone, icon
            )
        })
        .collect();
    Rendered::Html(format!(r#"<div class="d-flex">{}</div>"#, cells))
}

/// `finished`: the run has completed, successfully or not.
/// True is informational, false is a pending state.
pub fn finished(
    value: &Value,
    mode: RenderMode,
    _record: &Value,
    _column: &ColumnMeta,
    _options: &FieldOptions,
) -> Rendered {
    glyph_row(
        "finished",
        value,
        mode,
        ("text-info", "fa-check"),
        ("text-secondary", "fa-clock"),
    )
}

/// `successful`: polarity differs from `finished`; false here is a
/// failure, not a pending state.
pub fn successful(
    value: &Value,
    mode: RenderMode,
    _record: &Value,
    _column: &ColumnMeta,
    _options: &FieldOptions,
) -> Rendered {
    glyph_row(
        "successful",
        value,
        mode,
        ("text-success", "fa-check-circle"),
        ("text-danger", "fa-circle-xmark"),
    )
}
