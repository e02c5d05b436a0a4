//! Site navigation entries and active-link matching.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// One link in the top navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Navigation links, left to right.
pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { label: "MENU", href: "/menu" },
    NavLink { label: "STORY", href: "/story" },
    NavLink { label: "LOCATIONS", href: "/locations" },
    NavLink { label: "CATERING", href: "/catering" },
    NavLink { label: "CONTACT", href: "/contact" },
];

/// Whether `href` is the page at `pathname`.
///
/// Matches exactly, ignoring one trailing slash, so `/` is only active on the
/// home page and `/menu` is not active on `/menu-specials`.
#[must_use]
pub fn is_active(pathname: &str, href: &str) -> bool {
    normalize(pathname) == normalize(href)
}

fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    if path.len() > 1 { path.strip_suffix('/').unwrap_or(path) } else { path }
}
