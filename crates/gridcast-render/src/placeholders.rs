/// Source of the fixed placeholder markup for absent and empty cells.
///
/// The hosting page owns this markup; the registry only calls it when a
/// formatter reports the corresponding state.
pub trait Placeholders: Send + Sync {
    /// Markup standing in for an absent value.
    fn null_column(&self) -> String;

    /// Markup standing in for a present but empty collection.
    fn empty_column(&self) -> String;
}

/// Placeholder markup matching the stock admin table styling.
#[derive(Debug, Clone, Copy, Default)]
pub struct BootstrapPlaceholders;

impl Placeholders for BootstrapPlaceholders {
    fn null_column(&self) -> String {
        r#"<span class="text-center text-secondary">-null-</span>"#.to_string()
    }

    fn empty_column(&self) -> String {
        r#"<span class="text-center text-secondary">-empty-</span>"#.to_string()
    }
}
