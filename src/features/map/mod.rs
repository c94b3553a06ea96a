pub mod marker;
pub mod style;

pub use marker::create_custom_marker;
pub use style::{marker_html, MarkerStyle, DEFAULT_MARKER_COLOR, DEFAULT_MARKER_ICON};
