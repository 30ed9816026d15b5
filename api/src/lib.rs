pub mod diagram;
pub mod prefs;

// persisted preference keys
//
// these are shared with the static version of the site, so they are stored raw (not
// json-encoded) and without any application prefix
pub const THEME_KEY: &str = "theme";
pub const DARK_MODE_KEY: &str = "darkMode";
pub const TEXT_SIZE_KEY: &str = "text-size";

// class names that the stylesheet and the controller agree on
pub const ACTIVE_CLASS: &str = "active";
pub const DARK_MODE_CLASS: &str = "dark-mode";
pub const THEME_CLASS_PREFIX: &str = "theme-";
pub const SHRINK_CLASS: &str = "shrink";
pub const HIDE_ON_SCROLL_CLASS: &str = "hide-on-scroll";
pub const OPEN_CLASS: &str = "open";

// dark mode toggle labels, keyed on the state the button displays
pub const DARK_LABEL: &str = "🌙 Dark Mode";
pub const LIGHT_LABEL: &str = "☀️ Light Mode";

// submenu arrows
pub const ARROW_CLOSED: char = '▾';
pub const ARROW_OPEN: char = '▴';
