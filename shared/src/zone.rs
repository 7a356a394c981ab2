use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordinal risk classification attached to a hazard zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn is_high(self) -> bool {
        self == Self::High
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Hazard category of a zone. The tag doubles as the prefix of alert ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HazardKind {
    Flood,
    Landslide,
}

impl HazardKind {
    pub fn tag(self) -> &'static str {
        match self {
            Self::Flood => "flood",
            Self::Landslide => "landslide",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "flood" => Some(Self::Flood),
            "landslide" => Some(Self::Landslide),
            _ => None,
        }
    }
}

impl fmt::Display for HazardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Normalized map position, both axes in percent (0..=100) of the map frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HazardZone {
    pub id: u32,
    pub name: &'static str,
    pub position: Position,
    pub severity: Severity,
    pub kind: HazardKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InfrastructureCategory {
    Hospital,
    School,
    Bridge,
}

impl InfrastructureCategory {
    pub fn icon(self) -> &'static str {
        match self {
            Self::Hospital => "\u{1F3E5}",
            Self::School => "\u{1F3EB}",
            Self::Bridge => "\u{1F309}",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfrastructurePoint {
    pub id: u32,
    pub name: &'static str,
    pub category: InfrastructureCategory,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvacuationPoint {
    pub id: u32,
    pub name: &'static str,
    pub position: Position,
}

/// Ground displacement measured at a fixed point, in millimetres.
/// Negative values are subsidence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeformationReading {
    pub position: Position,
    pub displacement_mm: f64,
}

impl DeformationReading {
    pub fn is_subsidence(&self) -> bool {
        self.displacement_mm < 0.0
    }

    /// Signed label such as `-2.3mm` or `+1.1mm`.
    pub fn label(&self) -> String {
        format!("{:+.1}mm", self.displacement_mm)
    }
}
