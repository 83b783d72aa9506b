use serde_json::{Value, json};

use gridcast_render::{FormatterFn, Placeholders, Registry};
use gridcast_types::{ColumnMeta, Error, FieldOptions, RenderMode, Rendered};

fn render(registry: &Registry, name: &str, value: Value, mode: RenderMode) -> Value {
    registry
        .render_cell(
            name,
            &value,
            mode,
            &Value::Null,
            &ColumnMeta::named("col"),
            &FieldOptions::default(),
        )
        .expect("formatter is registered")
}

#[test]
fn test_standard_registry_names() {
    let registry = Registry::standard();
    assert_eq!(
        registry.names(),
        vec![
            "asset_thumbnail",
            "external_link",
            "finished",
            "media_file_count",
            "media_file_links",
            "pathspec_link",
            "successful",
        ]
    );
}

#[test]
fn test_lookup_miss_is_reported_not_thrown() {
    let registry = Registry::standard();
    let err = registry.lookup("nonexistent").unwrap_err();
    assert!(matches!(err, Error::FormatterNotFound(name) if name == "nonexistent"));
}

#[test]
fn test_render_cell_surfaces_missing_formatter() {
    let registry = Registry::new();
    let err = registry
        .render_cell(
            "finished",
            &json!(true),
            RenderMode::Display,
            &Value::Null,
            &ColumnMeta::named("finished"),
            &FieldOptions::default(),
        )
        .unwrap_err();
    assert!(matches!(err, Error::FormatterNotFound(_)));
}

#[test]
fn test_last_registration_wins() {
    fn constant(
        _: &Value,
        _: RenderMode,
        _: &Value,
        _: &ColumnMeta,
        _: &FieldOptions,
    ) -> Rendered {
        Rendered::Text("overridden".into())
    }

    let mut registry = Registry::standard();
    registry.register("finished", constant);

    let out = render(&registry, "finished", json!(true), RenderMode::Display);
    assert_eq!(out, json!("overridden"));
}

#[test]
fn test_merge_applies_definitions_in_order() {
    fn first(_: &Value, _: RenderMode, _: &Value, _: &ColumnMeta, _: &FieldOptions) -> Rendered {
        Rendered::Text("first".into())
    }
    fn second(_: &Value, _: RenderMode, _: &Value, _: &ColumnMeta, _: &FieldOptions) -> Rendered {
        Rendered::Text("second".into())
    }

    let mut registry = Registry::new();
    registry.merge(vec![
        ("custom", first as FormatterFn),
        ("custom", second),
    ]);

    let out = render(&registry, "custom", Value::Null, RenderMode::Display);
    assert_eq!(out, json!("second"));
}

#[test]
fn test_placeholder_resolution_uses_the_provider() {
    struct Bracketed;

    impl Placeholders for Bracketed {
        fn null_column(&self) -> String {
            "[null]".into()
        }
        fn empty_column(&self) -> String {
            "[empty]".into()
        }
    }

    let registry = Registry::standard().with_placeholders(Box::new(Bracketed));
    assert_eq!(
        render(&registry, "media_file_links", Value::Null, RenderMode::Display),
        json!("[null]")
    );
    assert_eq!(
        render(&registry, "media_file_links", json!([]), RenderMode::Display),
        json!("[empty]")
    );
}

#[test]
fn test_nothing_resolves_to_json_null_not_a_placeholder() {
    let registry = Registry::standard();
    let out = render(&registry, "asset_thumbnail", Value::Null, RenderMode::Display);
    assert_eq!(out, Value::Null);
}
