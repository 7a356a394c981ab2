use std::fmt;

use serde::{Deserialize, Serialize};

use crate::zone::HazardKind;

pub const DASHBOARD_PATH: &str = "/";
pub const MANAGEMENT_PATH: &str = "/management";
pub const ALERT_PATH_PREFIX: &str = "/alert/";

/// Identifier of a zone alert, rendered as `<kind>-<id>` (e.g. `flood-2`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AlertRef {
    pub kind: HazardKind,
    pub zone_id: u32,
}

impl AlertRef {
    pub fn new(kind: HazardKind, zone_id: u32) -> Self {
        Self { kind, zone_id }
    }

    /// Parse `<kind>-<numericId>`. Anything else is not a zone alert.
    pub fn parse(raw: &str) -> Option<Self> {
        let (tag, id) = raw.split_once('-')?;
        let kind = HazardKind::from_tag(tag)?;
        if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let zone_id = id.parse::<u32>().ok()?;
        Some(Self { kind, zone_id })
    }

    pub fn path(&self) -> String {
        format!("{ALERT_PATH_PREFIX}{self}")
    }
}

impl fmt::Display for AlertRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.kind.tag(), self.zone_id)
    }
}

/// Request emitted by the map when a zone click is allowed to open details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationRequest {
    pub alert: AlertRef,
}

impl NavigationRequest {
    pub fn path(&self) -> String {
        self.alert.path()
    }
}

#[cfg(test)]
mod tests {
    use super::{AlertRef, NavigationRequest};
    use crate::zone::HazardKind;

    #[test]
    fn formats_kind_and_id() {
        let alert = AlertRef::new(HazardKind::Landslide, 1);
        assert_eq!(alert.to_string(), "landslide-1");
        assert_eq!(alert.path(), "/alert/landslide-1");
        assert_eq!(NavigationRequest { alert }.path(), "/alert/landslide-1");
    }

    #[test]
    fn parses_well_formed_ids() {
        assert_eq!(
            AlertRef::parse("flood-2"),
            Some(AlertRef::new(HazardKind::Flood, 2))
        );
        assert_eq!(
            AlertRef::parse("landslide-10"),
            Some(AlertRef::new(HazardKind::Landslide, 10))
        );
    }

    #[test]
    fn rejects_malformed_ids() {
        for raw in ["", "001", "flood", "flood-", "flood-x", "flood--1", "fire-1", "flood-+1"] {
            assert_eq!(AlertRef::parse(raw), None, "{raw}");
        }
    }
}
