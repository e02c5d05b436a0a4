//! Static marketing copy and asset paths.
//!
//! DESIGN
//! ======
//! Pages render from these values only; nothing here is fetched at runtime.
//! The drink list lives in `content/drinks.json` so copy edits do not touch
//! Rust code.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use gallery::item::Item;

/// Scroll speed of the home page drink strip, in pixels per second.
pub const SIGNATURE_SCROLL_SPEED: f64 = 300.0;

pub const LOGO_SRC: &str = "/assets/logos/urban-ritual-logo.png";
pub const HERO_SRC: &str = "/assets/banners/home-page-hero-large.jpg";
pub const LOCATION_ICON_SRC: &str = "/assets/logos/location_icon.png";
pub const PHONE_ICON_SRC: &str = "/assets/logos/phone_icon.png";

const DRINKS_JSON: &str = include_str!("../content/drinks.json");

/// Parse a JSON array of gallery items.
///
/// # Errors
///
/// Returns the `serde_json` error when the document is not a list of items.
pub fn parse_drinks(raw: &str) -> Result<Vec<Item>, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Drinks shown in the home page gallery.
///
/// A malformed bundle degrades to an empty gallery rather than a broken page.
#[must_use]
pub fn signature_drinks() -> Vec<Item> {
    parse_drinks(DRINKS_JSON).unwrap_or_else(|err| {
        log::warn!("signature drinks unavailable: {err}");
        Vec::new()
    })
}

// ── Home page copy ──────────────────────────────────────────────

pub const HERO_KICKER: &str = "CRAFTING UNFORGETTABLE";
pub const HERO_ACCENT: &str = "boba";
pub const HERO_TAIL: &str = "EXPERIENCES EVERYDAY";

pub const SIGNATURE_TITLE: &str = "Our Signature Drinks";
pub const SIGNATURE_BLURB: &str =
    "Explore our carefully crafted selection of boba teas that blend tradition with innovation.";

pub const STORY_TITLE: &str = "Our Story";
pub const STORY_PARAGRAPHS: [&str; 2] = [
    "Urban Ritual started with a single question: what if the afternoon tea break felt like an \
     event? We brew every batch of tea in small pots throughout the day and cook our tapioca fresh \
     each morning, so the first cup tastes the same as the last.",
    "Our shops are built for lingering. Pull up a stool, watch the pearls simmer, and make the \
     daily ritual your own.",
];

/// One photo in the home page collage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollagePhoto {
    pub src: &'static str,
    pub alt: &'static str,
    /// Modifier class controlling the tile's span in the grid.
    pub span: &'static str,
}

pub const COLLAGE: [CollagePhoto; 5] = [
    CollagePhoto { src: "/assets/collage/bar.jpg", alt: "Tea bar at opening time", span: "collage__tile--tall" },
    CollagePhoto { src: "/assets/collage/pearls.jpg", alt: "Tapioca pearls simmering", span: "collage__tile--wide" },
    CollagePhoto { src: "/assets/collage/pour.jpg", alt: "Milk tea being poured", span: "collage__tile--square" },
    CollagePhoto { src: "/assets/collage/friends.jpg", alt: "Friends sharing drinks", span: "collage__tile--square" },
    CollagePhoto { src: "/assets/collage/storefront.jpg", alt: "Urban Ritual storefront", span: "collage__tile--wide" },
];

/// A customer quote card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub text: &'static str,
    pub customer_image: &'static str,
    pub bg_color: &'static str,
    pub text_color: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        text: "The brown sugar tiger is the best I have had outside Taipei. The pearls are always warm and soft.",
        customer_image: "/assets/testimonials/customer-1.png",
        bg_color: "#FFC787",
        text_color: "#1E1E1E",
    },
    Testimonial {
        text: "My whole office orders from here every Friday. Catering showed up early and nobody waited.",
        customer_image: "/assets/testimonials/customer-2.png",
        bg_color: "#1E1E1E",
        text_color: "#FFFFFF",
    },
    Testimonial {
        text: "Cozy shop, friendly staff, and the taro delight tastes like real taro. I come back every week.",
        customer_image: "/assets/testimonials/customer-3.png",
        bg_color: "#BE8F59",
        text_color: "#FFFFFF",
    },
];

// ── Locations ───────────────────────────────────────────────────

/// One shop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Location {
    pub name: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub image: &'static str,
    pub bg_color: &'static str,
    pub text_color: &'static str,
}

pub const LOCATIONS: [Location; 2] = [
    Location {
        name: "Urban Ritual Sunset",
        address: "1820 Irving St, San Francisco, CA 94122",
        phone: "(415) 555-0132",
        image: "/assets/locations/sunset.jpg",
        bg_color: "#1E1E1E",
        text_color: "#FFFFFF",
    },
    Location {
        name: "Urban Ritual Mission",
        address: "2401 Mission St, San Francisco, CA 94110",
        phone: "(415) 555-0178",
        image: "/assets/locations/mission.jpg",
        bg_color: "#FFC787",
        text_color: "#1E1E1E",
    },
];
