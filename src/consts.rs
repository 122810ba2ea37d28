//! Shared constants: timings, thresholds, and the DOM names the page markup owns.

// ── Loading screen ──────────────────────────────────────────────

/// Period of the loading progress tick, in milliseconds.
pub const LOADING_TICK_MS: u32 = 14;

/// Wall-clock time for the simulated progress to go from 0 to 100%.
pub const LOADING_DURATION_MS: u32 = 1460;

/// Pause at 100% before the overlay starts fading.
pub const LOADING_FADE_DELAY_MS: u32 = 320;

/// Overlay fade duration; matches the stylesheet transition on `.hidden`.
pub const LOADING_HIDE_DELAY_MS: u32 = 600;

/// Opacity applied to the confirm button once it has been used.
pub const LOADING_CONFIRM_DIM_OPACITY: &str = "0.7";

// ── Navigation ──────────────────────────────────────────────────

/// Vertical scroll offset past which the nav gets its glass style.
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 10.0;

/// Delay before re-checking nav state after an in-page link click.
pub const NAV_LINK_RECHECK_MS: u32 = 100;

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "theme";

pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Delay before clearing a leftover black inline body background.
pub const THEME_BACKGROUND_RESET_MS: u32 = 200;

/// Computed form of the inline background that triggers the reset.
pub const THEME_BLACK_BACKGROUND: &str = "rgb(0, 0, 0)";

/// Root attribute carrying the active theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

// ── Skills ──────────────────────────────────────────────────────

/// The featured section counts as visible once its top is this far above the viewport bottom.
pub const SKILL_REVEAL_MARGIN_PX: f64 = 42.0;

/// Period of one percentage-point step of a skill bar.
pub const SKILL_BAR_TICK_MS: u32 = 12;

/// Attribute on `.glass-bar` holding the target percentage.
pub const SKILL_TARGET_ATTRIBUTE: &str = "data-percent";

// ── About flip card ─────────────────────────────────────────────

/// Flip transition duration; focus moves once it has finished.
pub const FLIP_TRANSITION_MS: u32 = 600;

pub const FLIP_RESIZE_SETTLE_MS: u32 = 100;

pub const FLIP_ORIENTATION_SETTLE_MS: u32 = 300;

/// Mirrors the stylesheet rule that disables the flip on phones held upright.
pub const PHONE_PORTRAIT_QUERY: &str = "(max-width: 600px) and (orientation: portrait)";

// ── Element ids ─────────────────────────────────────────────────

pub const ID_THEME_TOGGLE: &str = "theme-toggle";
pub const ID_MAIN_NAV: &str = "mainNav";
pub const ID_FEATURED_SKILLS: &str = "featured-skills";
pub const ID_LOADING_SCREEN: &str = "loading-screen";
pub const ID_LOADING_BAR: &str = "loading-bar";
pub const ID_LOADING_PERCENT: &str = "loading-percent";
pub const ID_LOADING_ENTER: &str = "loading-enter";
pub const ID_PORTFOLIO_CONTENT: &str = "portfolio-content";
pub const ID_ABOUT_CARD: &str = "aboutFlipCard";
pub const ID_ABOUT_TOGGLE: &str = "aboutToggleBtn";
pub const ID_ABOUT_CLOSE: &str = "aboutCloseBtn";
pub const ID_PAGE_CONFIG: &str = "portfolio-config";

// ── Selectors ───────────────────────────────────────────────────

pub const SEL_THEME_ICON: &str = ".theme-icon";
pub const SEL_NAV_LINKS: &str = ".nav-links a";
pub const SEL_HASH_LINKS: &str = "a[href^=\"#\"]";
pub const SEL_SKILL_LIST: &str = ".skill-list";
pub const SEL_SKILL_CARD: &str = ".glass-skill-card";
pub const SEL_SKILL_BAR: &str = ".glass-bar";
pub const SEL_SKILL_PERCENT: &str = ".glass-skill-percent";
pub const SEL_FLIP_FRONT: &str = ".about-flip-front";
pub const SEL_FLIP_BACK: &str = ".about-flip-back";
pub const SEL_FLIP_FACE: &str = ".about-flip-face";

// ── Presentation classes ────────────────────────────────────────

pub const CLASS_NAV_SCROLLED: &str = "scrolled";
pub const CLASS_SKILLS_STOPPED: &str = "stopped";
pub const CLASS_LOADING_HIDDEN: &str = "hidden";
pub const CLASS_CARD_EXPANDED: &str = "expanded";
pub const CLASS_CARD_FLIPPED: &str = "flipped";
pub const CLASS_SKILL_BAR: &str = "glass-bar";
pub const CLASS_SKILL_PERCENT: &str = "glass-skill-percent";
