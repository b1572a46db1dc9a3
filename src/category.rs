//! Key-name to category classification
//!
//! Pure first-match-wins walk over an ordered rule table. The table is
//! data: extending the grouping means adding a row, never touching the
//! matching logic. More specific rules sit above the broad prefix rules.

/// How a rule matches a key name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Exact(&'static str),
    Prefix(&'static str),
    Suffix(&'static str),
    Contains(&'static str),
}

impl Pattern {
    fn matches(&self, key_name: &str) -> bool {
        match self {
            Pattern::Exact(s) => key_name == *s,
            Pattern::Prefix(s) => key_name.starts_with(s),
            Pattern::Suffix(s) => key_name.ends_with(s),
            Pattern::Contains(s) => key_name.contains(s),
        }
    }
}

/// One classification rule.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub pattern: Pattern,
    pub category: &'static str,
}

const fn rule(pattern: Pattern, category: &'static str) -> CategoryRule {
    CategoryRule { pattern, category }
}

/// Ordered classification table. First match wins.
pub const RULES: &[CategoryRule] = &[
    // Tiling
    rule(Pattern::Prefix("tile-"), "tiling"),
    rule(Pattern::Prefix("toggle-tiled-"), "tiling"),
    rule(Pattern::Prefix("activate-layout"), "tiling"),
    rule(Pattern::Exact("center-window"), "tiling"),
    rule(Pattern::Exact("restore-window"), "tiling"),
    rule(Pattern::Exact("auto-tile"), "tiling"),
    // Window management
    rule(Pattern::Exact("close"), "window-management"),
    rule(Pattern::Exact("minimize"), "window-management"),
    rule(Pattern::Exact("maximize"), "window-management"),
    rule(Pattern::Exact("unmaximize"), "window-management"),
    rule(Pattern::Exact("maximize-horizontally"), "window-management"),
    rule(Pattern::Exact("maximize-vertically"), "window-management"),
    rule(Pattern::Exact("toggle-maximized"), "window-management"),
    rule(Pattern::Exact("toggle-fullscreen"), "window-management"),
    rule(Pattern::Exact("toggle-above"), "window-management"),
    rule(Pattern::Exact("always-on-top"), "window-management"),
    rule(Pattern::Exact("raise"), "window-management"),
    rule(Pattern::Exact("lower"), "window-management"),
    rule(Pattern::Exact("move-to-center"), "window-management"),
    rule(Pattern::Prefix("move-to-corner-"), "window-management"),
    rule(Pattern::Prefix("move-to-side-"), "window-management"),
    rule(Pattern::Prefix("begin-"), "window-management"),
    // Navigation
    rule(Pattern::Prefix("switch-to-workspace-"), "navigation"),
    rule(Pattern::Prefix("move-to-workspace-"), "navigation"),
    rule(Pattern::Prefix("move-to-monitor-"), "navigation"),
    rule(Pattern::Prefix("switch-"), "navigation"),
    rule(Pattern::Prefix("cycle-"), "navigation"),
    // Media
    rule(Pattern::Prefix("volume-"), "media"),
    rule(Pattern::Prefix("playback-"), "media"),
    rule(Pattern::Suffix("-static"), "media"),
    rule(Pattern::Exact("play"), "media"),
    rule(Pattern::Exact("pause"), "media"),
    rule(Pattern::Exact("stop"), "media"),
    rule(Pattern::Exact("previous"), "media"),
    rule(Pattern::Exact("next"), "media"),
    rule(Pattern::Exact("media"), "media"),
    rule(Pattern::Exact("eject"), "media"),
    rule(Pattern::Exact("mic-mute"), "media"),
    // Accessibility
    rule(Pattern::Contains("magnifier"), "accessibility"),
    rule(Pattern::Contains("screenreader"), "accessibility"),
    rule(Pattern::Contains("text-size"), "accessibility"),
    rule(Pattern::Contains("contrast"), "accessibility"),
    rule(Pattern::Exact("on-screen-keyboard"), "accessibility"),
    // System
    rule(Pattern::Exact("screensaver"), "system"),
    rule(Pattern::Exact("logout"), "system"),
    rule(Pattern::Exact("power"), "system"),
    rule(Pattern::Exact("suspend"), "system"),
    rule(Pattern::Exact("hibernate"), "system"),
    rule(Pattern::Exact("lock-screen"), "system"),
    // Shell (broad toggles last so specific toggle-* rules above win)
    rule(Pattern::Contains("screenshot"), "shell"),
    rule(Pattern::Contains("screen-recording"), "shell"),
    rule(Pattern::Contains("input-source"), "shell"),
    rule(Pattern::Exact("focus-active-notification"), "shell"),
    rule(Pattern::Exact("open-application-menu"), "shell"),
    rule(Pattern::Prefix("toggle-"), "shell"),
    rule(Pattern::Prefix("show-"), "shell"),
];

/// Category used when no rule matches.
pub const DEFAULT_CATEGORY: &str = "other";

/// Classify a key name into a display category.
pub fn classify(key_name: &str) -> &'static str {
    RULES
        .iter()
        .find(|rule| rule.pattern.matches(key_name))
        .map(|rule| rule.category)
        .unwrap_or(DEFAULT_CATEGORY)
}
