/// What a formatter hands back, before placeholder resolution.
///
/// The `Null` and `Empty` states are named rather than rendered here: the
/// hosting page owns the placeholder markup, so formatters report the state
/// and the registry resolves it in one place. `Nothing` is distinct: a
/// cell that renders as nothing at all, not as a placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    /// HTML fragment for a display cell.
    Html(String),
    /// Plain value for sort/filter/export consumers.
    Text(String),
    /// Numeric cell value; the grid sorts it numerically.
    Number(i64),
    /// Value was absent.
    Null,
    /// Value was present but held no elements.
    Empty,
    /// Render nothing at all.
    Nothing,
}
