//! Navigation constants and configuration defaults
//!
//! Centralized location for magic numbers and default values

/// Section navigation
pub mod navigation {
    /// Height reserved by the fixed navbar when aligning a section to the top
    pub const NAVBAR_OFFSET: f64 = 80.0;

    /// Share of the viewport cut from the top of the active band (percent)
    pub const BAND_TOP_PERCENT: f64 = 30.0;

    /// Share of the viewport cut from the bottom of the active band (percent)
    pub const BAND_BOTTOM_PERCENT: f64 = 30.0;

    /// Route that hosts the sections
    pub const HOME_ROUTE: &str = "/";

    /// Section that always scrolls to the document top
    pub const HOME_SECTION: &str = "home";
}

/// Document pagination
pub mod pagination {
    /// Horizontal padding subtracted from the container's client width
    pub const CONTAINER_PADDING: f64 = 48.0;

    /// Upper bound for the page render width
    pub const MAX_PAGE_WIDTH: f64 = 800.0;

    /// Container width assumed before the first measurement
    pub const INITIAL_WIDTH: f64 = 800.0;

    /// Fraction of a page that must be visible for it to become current
    pub const VISIBILITY_THRESHOLD: f64 = 0.5;

    /// Vertical gap between rendered pages
    pub const PAGE_GAP: f64 = 32.0;

    /// Separator between pages in a document file (form feed)
    pub const PAGE_SEPARATOR: char = '\u{0c}';
}

/// Navbar scroll affordances
pub mod progress {
    /// Scroll distance after which the navbar switches to its solid style
    pub const SCROLLED_THRESHOLD: f64 = 50.0;
}

/// Config file location
pub mod config {
    /// Config directory name under the platform config dir
    pub const CONFIG_DIR_NAME: &str = "folio";

    /// Config file name
    pub const CONFIG_FILE_NAME: &str = "config.toml";
}
