//! CSS color helpers for components that take colors as props.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// Normalize a color prop to a CSS value.
///
/// Accepts hex with or without the leading `#` (`FF9500`, `#ff9500`, `FFF`)
/// and passes anything else (`white`, `rgb(...)`) through unchanged.
#[must_use]
pub fn css_color(raw: &str) -> String {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let is_hex = matches!(digits.len(), 3 | 4 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit());
    if is_hex { format!("#{}", digits.to_ascii_uppercase()) } else { trimmed.to_owned() }
}

/// Inline style for a two-state (idle / hovered) colored control.
#[must_use]
pub fn swap_style(hovered: bool, bg: &str, fg: &str, bg_hovered: &str, fg_hovered: &str) -> String {
    let (bg, fg) = if hovered { (bg_hovered, fg_hovered) } else { (bg, fg) };
    format!("background-color: {}; color: {};", css_color(bg), css_color(fg))
}
