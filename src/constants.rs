/// DOM hooks and observer tuning for the page glue.
///
/// Numeric defaults for the particle field and counters live in `site-core`;
/// this file only holds what ties them to the page markup.
// Element ids
pub const CANVAS_ID: &str = "bg-canvas";
pub const YEAR_ID: &str = "year";
pub const TO_TOP_ID: &str = "toTop";

// Selectors
pub const STATS_SELECTOR: &str = ".stats";
pub const STAT_CARD_SELECTOR: &str = ".stats .stat";
pub const COUNTER_SELECTOR: &str = ".stat .num[data-target]";
pub const REGION_COUNTER_SELECTOR: &str = ".num[data-target]";
pub const CARD_NUM_SELECTOR: &str = ".num";
pub const SECTION_SELECTOR: &str = "section, main.hero";
pub const NAV_LINK_SELECTOR: &str = ".nav .link";
pub const TIMELINE_ITEM_SELECTOR: &str = ".timeline .t-item";

// Classes
pub const ACTIVE_CLASS: &str = "active";
pub const VISIBLE_CLASS: &str = "visible";
pub const RANGE_CLASS: &str = "range";
pub const SWEEP_CLASS: &str = "is-animating";

// Attributes
pub const TARGET_ATTR: &str = "data-target";
pub const DATE_ATTR: &str = "data-date";
pub const FROM_ATTR: &str = "data-from";
pub const TO_ATTR: &str = "data-to";

// Intersection observers
pub const STATS_ROOT_MARGIN: &str = "0px 0px -10% 0px";
pub const STATS_THRESHOLD: f64 = 0.15;
pub const CARD_THRESHOLD: f64 = 0.3;
pub const NAV_ROOT_MARGIN: &str = "-40% 0px -50% 0px";
pub const NAV_THRESHOLD: f64 = 0.01;

// Media / feature queries
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const HAS_SELECTOR_SUPPORT: &str = "selector(:has(*))";

// Canvas colors
pub const PARTICLE_FILL: &str = "rgba(148, 163, 184, 0.7)";
pub const EDGE_RGB: [u8; 3] = [148, 163, 184];
