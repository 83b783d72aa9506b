//! Small HTML builders shared by the formatters.

/// Escape a string for interpolation into markup, text or attribute.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// An anchor with escaped href and label.
pub fn anchor(href: &str, label: &str) -> String {
    format!(r#"<a href="{}">{}</a>"#, escape(href), escape(label))
}

/// An anchor whose label carries a trailing icon element.
pub fn anchor_with_icon(href: &str, label: &str, icon_classes: &str) -> String {
    format!(
        r#"<a href="{}">{} <i class="{}" aria-hidden="true"></i></a>"#,
        escape(href),
        escape(label),
        icon_classes
    )
}
