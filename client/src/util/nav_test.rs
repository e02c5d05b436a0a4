use super::*;

#[test]
fn home_is_active_only_on_root() {
    assert!(is_active("/", "/"));
    assert!(!is_active("/menu", "/"));
}

#[test]
fn exact_path_is_active() {
    assert!(is_active("/locations", "/locations"));
}

#[test]
fn trailing_slash_is_ignored() {
    assert!(is_active("/story/", "/story"));
}

#[test]
fn query_and_fragment_are_ignored() {
    assert!(is_active("/menu?tab=tea", "/menu"));
    assert!(is_active("/contact#form", "/contact"));
}

#[test]
fn prefix_is_not_active() {
    assert!(!is_active("/menu-specials", "/menu"));
}

#[test]
fn nav_links_are_in_display_order() {
    let labels: Vec<&str> = NAV_LINKS.iter().map(|l| l.label).collect();
    assert_eq!(labels, vec!["MENU", "STORY", "LOCATIONS", "CATERING", "CONTACT"]);
}

#[test]
fn nav_links_are_absolute() {
    assert!(NAV_LINKS.iter().all(|l| l.href.starts_with('/')));
}
