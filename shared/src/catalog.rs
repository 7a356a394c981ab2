//! Static hazard catalog for the monitored city.
//!
//! Every entry is created once at startup and never mutated during a session.

use crate::zone::{
    DeformationReading, EvacuationPoint, HazardKind, HazardZone, InfrastructureCategory,
    InfrastructurePoint, Position, Severity,
};

pub static FLOOD_ZONES: [HazardZone; 3] = [
    HazardZone {
        id: 1,
        name: "Zona Norte",
        position: Position::new(30.0, 40.0),
        severity: Severity::Medium,
        kind: HazardKind::Flood,
    },
    HazardZone {
        id: 2,
        name: "Centro Histórico",
        position: Position::new(50.0, 60.0),
        severity: Severity::High,
        kind: HazardKind::Flood,
    },
    HazardZone {
        id: 3,
        name: "Bairro Sul",
        position: Position::new(70.0, 30.0),
        severity: Severity::Low,
        kind: HazardKind::Flood,
    },
];

pub static LANDSLIDE_ZONES: [HazardZone; 2] = [
    HazardZone {
        id: 1,
        name: "Encosta Leste",
        position: Position::new(80.0, 20.0),
        severity: Severity::High,
        kind: HazardKind::Landslide,
    },
    HazardZone {
        id: 2,
        name: "Morro Central",
        position: Position::new(40.0, 80.0),
        severity: Severity::Medium,
        kind: HazardKind::Landslide,
    },
];

/// Critical infrastructure as placed on the city-wide dashboard map.
pub static INFRASTRUCTURE: [InfrastructurePoint; 3] = [
    InfrastructurePoint {
        id: 1,
        name: "Hospital Central",
        category: InfrastructureCategory::Hospital,
        position: Position::new(45.0, 55.0),
    },
    InfrastructurePoint {
        id: 2,
        name: "Escola Municipal",
        category: InfrastructureCategory::School,
        position: Position::new(60.0, 40.0),
    },
    InfrastructurePoint {
        id: 3,
        name: "Ponte Principal",
        category: InfrastructureCategory::Bridge,
        position: Position::new(55.0, 70.0),
    },
];

pub static EVACUATION_POINTS: [EvacuationPoint; 2] = [
    EvacuationPoint {
        id: 1,
        name: "Centro Comunitário",
        position: Position::new(25.0, 25.0),
    },
    EvacuationPoint {
        id: 2,
        name: "Estádio Municipal",
        position: Position::new(75.0, 20.0),
    },
];

pub static DEFORMATION_READINGS: [DeformationReading; 2] = [
    DeformationReading {
        position: Position::new(35.0, 25.0),
        displacement_mm: -2.3,
    },
    DeformationReading {
        position: Position::new(65.0, 45.0),
        displacement_mm: 1.1,
    },
];

pub fn zones(kind: HazardKind) -> &'static [HazardZone] {
    match kind {
        HazardKind::Flood => &FLOOD_ZONES,
        HazardKind::Landslide => &LANDSLIDE_ZONES,
    }
}

pub fn find_zone(kind: HazardKind, id: u32) -> Option<&'static HazardZone> {
    zones(kind).iter().find(|zone| zone.id == id)
}

#[cfg(test)]
mod tests {
    use super::{FLOOD_ZONES, LANDSLIDE_ZONES, find_zone, zones};
    use crate::zone::{HazardKind, Severity};

    #[test]
    fn zone_kinds_match_their_collection() {
        assert!(FLOOD_ZONES.iter().all(|z| z.kind == HazardKind::Flood));
        assert!(LANDSLIDE_ZONES.iter().all(|z| z.kind == HazardKind::Landslide));
    }

    #[test]
    fn ids_are_unique_per_kind() {
        for kind in [HazardKind::Flood, HazardKind::Landslide] {
            let mut ids: Vec<u32> = zones(kind).iter().map(|z| z.id).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), zones(kind).len());
        }
    }

    #[test]
    fn positions_stay_inside_the_map_frame() {
        for zone in FLOOD_ZONES.iter().chain(LANDSLIDE_ZONES.iter()) {
            assert!((0.0..=100.0).contains(&zone.position.x), "{}", zone.name);
            assert!((0.0..=100.0).contains(&zone.position.y), "{}", zone.name);
        }
    }

    #[test]
    fn find_zone_looks_up_by_kind_and_id() {
        let zone = find_zone(HazardKind::Landslide, 1).unwrap();
        assert_eq!(zone.name, "Encosta Leste");
        assert_eq!(zone.severity, Severity::High);
        assert!(find_zone(HazardKind::Landslide, 3).is_none());
    }
}
