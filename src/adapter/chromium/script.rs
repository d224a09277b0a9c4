//! JavaScript visibility checks evaluated inside the page.
//!
//! Each check is a self-invoking expression that returns a boolean: whether
//! at least one element matching the locator is visible.

use crate::domain::Locator;

const HELPERS: &str = r#"
  const normalize = (value) => (value || '').replace(/\s+/g, ' ').trim();
  const isVisible = (el) => {
    const style = window.getComputedStyle(el);
    if (style.visibility === 'hidden' || style.display === 'none') return false;
    const rect = el.getBoundingClientRect();
    return rect.width > 0 && rect.height > 0;
  };
  const accessibleName = (el) => {
    const label = el.getAttribute('aria-label');
    if (label) return normalize(label);
    const labelledBy = el.getAttribute('aria-labelledby');
    if (labelledBy) {
      return normalize(labelledBy.split(/\s+/)
        .map((id) => document.getElementById(id))
        .filter(Boolean)
        .map((node) => node.textContent)
        .join(' '));
    }
    return normalize(el.textContent);
  };
"#;

/// CSS selector for elements carrying `role`, explicitly or implicitly.
fn role_selector(role: &str) -> String {
    let explicit = format!("[role=\"{}\"]", role.replace('"', "\\\""));
    let implicit = match role {
        "heading" => Some("h1,h2,h3,h4,h5,h6"),
        "button" => Some("button,input[type=\"button\"],input[type=\"submit\"]"),
        "link" => Some("a[href]"),
        "list" => Some("ul,ol"),
        "listitem" => Some("li"),
        "table" => Some("table"),
        "row" => Some("tr"),
        "cell" => Some("td"),
        "img" => Some("img[alt]"),
        "main" => Some("main"),
        "navigation" => Some("nav"),
        _ => None,
    };
    match implicit {
        Some(tags) => format!("{tags},{explicit}"),
        None => explicit,
    }
}

fn js_string(value: &str) -> String {
    // serde_json string encoding is a valid JS string literal.
    serde_json::Value::String(value.to_owned()).to_string()
}

/// Build the visibility check for `locator`.
pub fn visibility_check(locator: &Locator) -> String {
    match locator {
        Locator::Role { role, name } => format!(
            r#"(() => {{{HELPERS}
  const expected = normalize({name});
  return Array.from(document.querySelectorAll({selector}))
    .some((el) => accessibleName(el) === expected && isVisible(el));
}})()"#,
            name = js_string(name),
            selector = js_string(&role_selector(role)),
        ),
        Locator::Text(text) => format!(
            r#"(() => {{{HELPERS}
  const needle = normalize({text}).toLowerCase();
  const matches = (el) => normalize(el.textContent).toLowerCase().includes(needle);
  if (!document.body) return false;
  return Array.from(document.body.querySelectorAll('*'))
    .filter((el) => !['SCRIPT', 'STYLE', 'NOSCRIPT', 'TEMPLATE'].includes(el.tagName))
    .filter((el) => matches(el) && !Array.from(el.children).some(matches))
    .some(isVisible);
}})()"#,
            text = js_string(text),
        ),
    }
}
