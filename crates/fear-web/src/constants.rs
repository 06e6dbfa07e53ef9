// DOM element ids shared with index.html

pub const CANVAS_ID: &str = "fear-canvas";
pub const SLIDER_ID: &str = "dreadSlider";
pub const INFO_BOX_ID: &str = "interaction-instructions";
pub const INFO_ICON_ID: &str = "toggle-icon";

// Presses landing inside any of these never reach the sketch
pub const UI_PRESS_SELECTORS: [&str; 2] = ["#interaction-instructions", "#slider-container"];

// Info box state
pub const COLLAPSED_CLASS: &str = "collapsed";
pub const ICON_COLLAPSED: &str = "+";
pub const ICON_EXPANDED: &str = "\u{2212}"; // minus sign

// Placeholder font family used with the core's text size
pub const PLACEHOLDER_FONT: &str = "sans-serif";
