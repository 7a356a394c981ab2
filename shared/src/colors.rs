use std::fmt;

use crate::zone::Severity;

/// RGBA color with alpha in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

pub const STRONG_RED: Rgba = Rgba::new(220, 38, 38, 0.8);
pub const STRONG_ORANGE: Rgba = Rgba::new(251, 146, 60, 0.8);
pub const MEDIUM_RED: Rgba = Rgba::new(220, 38, 38, 0.6);
pub const MEDIUM_ORANGE: Rgba = Rgba::new(251, 146, 60, 0.6);
pub const MEDIUM_YELLOW: Rgba = Rgba::new(250, 204, 21, 0.6);
pub const NEUTRAL_GRAY: Rgba = Rgba::new(156, 163, 175, 0.4);

/// Border drawn around an emphasized zone.
pub const EMPHASIS_BORDER: &str = "3px solid #dc2626";
pub const RESTING_BORDER: &str = "2px solid rgba(255,255,255,0.3)";

/// Fill lookup keyed by severity (`None` = unclassified) and emphasis.
/// Rows are exhaustive over both keys.
const ZONE_COLOR_TABLE: [(Option<Severity>, bool, Rgba); 8] = [
    (Some(Severity::High), true, STRONG_RED),
    (Some(Severity::Medium), true, STRONG_ORANGE),
    (Some(Severity::Low), true, STRONG_ORANGE),
    (None, true, STRONG_ORANGE),
    (Some(Severity::High), false, MEDIUM_RED),
    (Some(Severity::Medium), false, MEDIUM_ORANGE),
    (Some(Severity::Low), false, MEDIUM_YELLOW),
    (None, false, NEUTRAL_GRAY),
];

/// Fill color for a zone of possibly unknown severity.
pub fn zone_color_for(severity: Option<Severity>, emphasized: bool) -> Rgba {
    ZONE_COLOR_TABLE
        .iter()
        .find(|(s, e, _)| *s == severity && *e == emphasized)
        .map(|(_, _, color)| *color)
        .unwrap_or(NEUTRAL_GRAY)
}

pub fn zone_color(severity: Severity, emphasized: bool) -> Rgba {
    zone_color_for(Some(severity), emphasized)
}

pub fn zone_border(emphasized: bool) -> &'static str {
    if emphasized {
        EMPHASIS_BORDER
    } else {
        RESTING_BORDER
    }
}
