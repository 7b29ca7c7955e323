//! Markup builders for the employee pages. No behaviour lives here.

/// Bills list page
pub mod bills;
/// Vertical navigation layout
pub mod layout;
/// New-bill form page
pub mod new_bill;

/// Escapes text for inclusion in markup.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
