use super::*;

#[test]
fn bare_hex_gets_hash() {
    assert_eq!(css_color("FF9500"), "#FF9500");
}

#[test]
fn hashed_hex_is_kept() {
    assert_eq!(css_color("#1e1e1e"), "#1E1E1E");
}

#[test]
fn short_hex_is_accepted() {
    assert_eq!(css_color("fff"), "#FFF");
}

#[test]
fn named_colors_pass_through() {
    assert_eq!(css_color("white"), "white");
    assert_eq!(css_color(" black "), "black");
}

#[test]
fn words_made_of_hex_letters_need_valid_length() {
    // "beef" is four hex digits and reads as #RGBA; "faded" has five and stays a word.
    assert_eq!(css_color("beef"), "#BEEF");
    assert_eq!(css_color("faded"), "faded");
}

#[test]
fn swap_style_uses_idle_colors() {
    assert_eq!(
        swap_style(false, "FF9500", "FFFFFF", "1E1E1E", "FFFFFF"),
        "background-color: #FF9500; color: #FFFFFF;"
    );
}

#[test]
fn swap_style_uses_hover_colors() {
    assert_eq!(
        swap_style(true, "#FF9500", "#FFFFFF", "white", "black"),
        "background-color: white; color: black;"
    );
}
