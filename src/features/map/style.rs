use std::collections::HashMap;

use lazy_static::lazy_static;

/// Fallback pin color for categories without a styling entry (Leaflet's
/// default marker blue)
pub const DEFAULT_MARKER_COLOR: &str = "#3388ff";

/// Fallback Font Awesome glyph for categories without a styling entry
pub const DEFAULT_MARKER_ICON: &str = "map-marker-alt";

lazy_static! {
    /// Font Awesome glyph per category key
    static ref CATEGORY_ICONS: HashMap<&'static str, &'static str> = HashMap::from([
        ("restaurants", "utensils"),
        ("cafes", "coffee"),
        ("sports", "volleyball-ball"),
        ("hospitals", "hospital"),
        ("shopping", "shopping-bag"),
    ]);

    /// Pin color per category key
    static ref CATEGORY_COLORS: HashMap<&'static str, &'static str> = HashMap::from([
        ("restaurants", "#FF5733"),
        ("cafes", "#C70039"),
        ("sports", "#900C3F"),
        ("hospitals", "#581845"),
        ("shopping", "#FFC300"),
    ]);
}

/// Icon glyph and pin color for a category marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerStyle {
    pub icon: &'static str,
    pub color: &'static str,
}

impl MarkerStyle {
    /// Resolve the style for a category key, falling back to the default
    /// glyph and color for unknown categories.
    pub fn for_category(category: &str) -> Self {
        Self {
            icon: CATEGORY_ICONS
                .get(category)
                .copied()
                .unwrap_or(DEFAULT_MARKER_ICON),
            color: CATEGORY_COLORS
                .get(category)
                .copied()
                .unwrap_or(DEFAULT_MARKER_COLOR),
        }
    }
}

/// HTML fragment for the colored pin embedding the category glyph.
pub fn marker_html(style: &MarkerStyle) -> String {
    format!(
        "<div class=\"marker-pin\" style=\"background-color: {}\"><i class=\"fas fa-{}\" style=\"color: white\"></i></div>",
        style.color, style.icon
    )
}
