use std::collections::HashMap;

use serde_json::Value;

use gridcast_types::{ColumnMeta, Error, FieldOptions, RenderMode, Rendered, Result};

use crate::formatters;
use crate::placeholders::{BootstrapPlaceholders, Placeholders};

/// A formatter: pure function from a cell value and its context to output.
///
/// The argument order is the wire contract with the grid widget and must
/// not change: value, mode, full record, column meta, field options.
pub type FormatterFn = fn(&Value, RenderMode, &Value, &ColumnMeta, &FieldOptions) -> Rendered;

/// Name-to-formatter dispatch surface.
///
/// Built once at startup and read for every cell render afterwards.
/// Registration is not synchronized; it has to finish before the first
/// lookup, which the hosting page's load order already guarantees.
pub struct Registry {
    formatters: HashMap<String, FormatterFn>,
    placeholders: Box<dyn Placeholders>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Empty registry with the default placeholder markup.
    pub fn new() -> Self {
        Self {
            formatters: HashMap::new(),
            placeholders: Box::new(BootstrapPlaceholders),
        }
    }

    /// Registry with the canonical formatter set installed.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.merge(formatters::definitions());
        registry
    }

    /// Swap the placeholder provider.
    pub fn with_placeholders(mut self, placeholders: Box<dyn Placeholders>) -> Self {
        self.placeholders = placeholders;
        self
    }

    /// Add or overwrite a binding. Last write wins on collision, so the
    /// load order of definition sets matters.
    pub fn register(&mut self, name: impl Into<String>, formatter: FormatterFn) {
        self.formatters.insert(name.into(), formatter);
    }

    /// Merge a set of definitions onto this dispatch surface.
    pub fn merge<I>(&mut self, definitions: I)
    where
        I: IntoIterator<Item = (&'static str, FormatterFn)>,
    {
        for (name, formatter) in definitions {
            self.register(name, formatter);
        }
    }

    /// Look up a formatter. A miss is reported, not thrown; whether it is
    /// fatal or falls back to a raw-value renderer is the caller's call.
    pub fn lookup(&self, name: &str) -> Result<FormatterFn> {
        self.formatters
            .get(name)
            .copied()
            .ok_or_else(|| Error::FormatterNotFound(name.to_string()))
    }

    /// Registered formatter names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.formatters.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Dispatch one cell through the named formatter and resolve the
    /// outcome to a wire value.
    pub fn render_cell(
        &self,
        name: &str,
        value: &Value,
        mode: RenderMode,
        record: &Value,
        column: &ColumnMeta,
        options: &FieldOptions,
    ) -> Result<Value> {
        let formatter = self.lookup(name)?;
        Ok(self.resolve(formatter(value, mode, record, column, options)))
    }

    /// Resolve the named presentation states through the placeholder
    /// provider; everything else converts directly.
    pub fn resolve(&self, rendered: Rendered) -> Value {
        match rendered {
            Rendered::Html(html) => Value::String(html),
            Rendered::Text(text) => Value::String(text),
            Rendered::Number(n) => Value::Number(n.into()),
            Rendered::Null => Value::String(self.placeholders.null_column()),
            Rendered::Empty => Value::String(self.placeholders.empty_column()),
            Rendered::Nothing => Value::Null,
        }
    }
}
