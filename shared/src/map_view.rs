//! Dashboard state and the per-frame scene handed to the renderer.

use serde::Serialize;

use crate::alert::{AlertLevel, AlertState, TimerKey};
use crate::catalog::{DEFORMATION_READINGS, FLOOD_ZONES, INFRASTRUCTURE, LANDSLIDE_ZONES};
use crate::colors::{Rgba, zone_border, zone_color};
use crate::config::DashboardConfig;
use crate::layers::{LayerId, LayerVisibility};
use crate::navigation::{AlertRef, NavigationRequest};
use crate::zone::{DeformationReading, HazardZone, InfrastructurePoint, Severity};

pub const ALERT_BANNER_TEXT: &str = "ALERTA ATIVO - Clique nas zonas vermelhas para detalhes";
pub const CONTOUR_COUNT: usize = 5;

/// A zone pulses iff it is high severity and an alert or emphasis window is active.
pub fn is_emphasized(level: AlertLevel, simulated: bool, severity: Severity) -> bool {
    severity.is_high() && (simulated || level == AlertLevel::Alert)
}

/// Zone clicks open details when an alert is active, the emphasis window is
/// open, or the zone itself is high severity.
pub fn should_navigate(level: AlertLevel, simulated: bool, severity: Severity) -> bool {
    level == AlertLevel::Alert || simulated || severity.is_high()
}

/// Mutable session state behind the dashboard.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub layers: LayerVisibility,
    pub alert: AlertState,
}

impl DashboardState {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            layers: config.initial_layers.clone(),
            alert: AlertState::new(config.initial_alert_level, config.timings),
        }
    }

    pub fn toggle_layer(&mut self, layer: LayerId) {
        self.layers.toggle(layer);
    }

    pub fn toggle_layer_named(&mut self, name: &str) -> bool {
        self.layers.toggle_named(name)
    }

    pub fn simulate_alert(&mut self, now: f64) {
        self.alert.simulate_alert(now);
    }

    pub fn advance_to(&mut self, now: f64) -> Vec<TimerKey> {
        self.alert.advance_to(now)
    }

    /// Decide whether a click on `zone` opens its detail view. Layer
    /// visibility is not consulted: hidden zones are never offered for clicks.
    pub fn click_zone(&self, zone: &HazardZone) -> Option<NavigationRequest> {
        let level = self.alert.level();
        let simulated = self.alert.simulated();
        let navigate = should_navigate(level, simulated, zone.severity);
        tracing::debug!(
            zone = zone.name,
            kind = zone.kind.tag(),
            %level,
            simulated,
            navigate,
            "zone clicked"
        );
        navigate.then(|| NavigationRequest {
            alert: AlertRef::new(zone.kind, zone.id),
        })
    }

    pub fn scene(&self) -> MapScene {
        let level = self.alert.level();
        let simulated = self.alert.simulated();
        let zone_views = |zones: &'static [HazardZone], layer: LayerId| -> Vec<ZoneView> {
            if !self.layers.is_visible(layer) {
                return Vec::new();
            }
            zones
                .iter()
                .map(|zone| ZoneView::new(zone, is_emphasized(level, simulated, zone.severity)))
                .collect()
        };

        MapScene {
            layers: self.layers.clone(),
            level,
            simulated,
            show_banner: self.alert.is_active(),
            flood_zones: zone_views(&FLOOD_ZONES[..], LayerId::Inundacao),
            landslide_zones: zone_views(&LANDSLIDE_ZONES[..], LayerId::Deslizamento),
            infrastructure: self
                .layers
                .is_visible(LayerId::Infraestrutura)
                .then_some(&INFRASTRUCTURE[..])
                .unwrap_or_default(),
            deformation: self
                .layers
                .is_visible(LayerId::Deformacao)
                .then_some(&DEFORMATION_READINGS[..])
                .unwrap_or_default(),
            show_river: self.layers.is_visible(LayerId::Hidrografia),
            contours: if self.layers.is_visible(LayerId::Topografia) {
                contour_rings()
            } else {
                Vec::new()
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneView {
    pub zone: &'static HazardZone,
    pub emphasized: bool,
    #[serde(skip)]
    pub fill: Rgba,
    pub border: &'static str,
}

impl ZoneView {
    fn new(zone: &'static HazardZone, emphasized: bool) -> Self {
        Self {
            zone,
            emphasized,
            fill: zone_color(zone.severity, emphasized),
            border: zone_border(emphasized),
        }
    }

    pub fn tooltip(&self) -> String {
        format!(
            "Clique para ver detalhes de {} - Severidade: {}",
            self.zone.name, self.zone.severity
        )
    }
}

/// Topographic contour ellipse centred on the map, radii in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Contour {
    pub rx: f64,
    pub ry: f64,
}

fn contour_rings() -> Vec<Contour> {
    (0..CONTOUR_COUNT)
        .map(|i| Contour {
            rx: 20.0 + i as f64 * 15.0,
            ry: 15.0 + i as f64 * 10.0,
        })
        .collect()
}

/// Everything the renderer needs for one frame of the dashboard map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapScene {
    pub layers: LayerVisibility,
    pub level: AlertLevel,
    pub simulated: bool,
    pub show_banner: bool,
    pub flood_zones: Vec<ZoneView>,
    pub landslide_zones: Vec<ZoneView>,
    pub infrastructure: &'static [InfrastructurePoint],
    pub deformation: &'static [DeformationReading],
    pub show_river: bool,
    pub contours: Vec<Contour>,
}

impl MapScene {
    pub fn zones(&self) -> impl Iterator<Item = &ZoneView> {
        self.flood_zones.iter().chain(self.landslide_zones.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::{DashboardState, is_emphasized, should_navigate};
    use crate::alert::AlertLevel;
    use crate::catalog::{FLOOD_ZONES, LANDSLIDE_ZONES};
    use crate::colors::{MEDIUM_ORANGE, MEDIUM_RED, STRONG_RED};
    use crate::config::DashboardConfig;
    use crate::layers::{LayerId, LayerVisibility};
    use crate::zone::{HazardKind, HazardZone, Severity};

    fn dashboard() -> DashboardState {
        DashboardState::new(&DashboardConfig::default())
    }

    fn zone_with(kind: HazardKind, severity: Severity) -> &'static HazardZone {
        FLOOD_ZONES
            .iter()
            .chain(LANDSLIDE_ZONES.iter())
            .find(|z| z.kind == kind && z.severity == severity)
            .unwrap()
    }

    fn all_zones() -> impl Iterator<Item = &'static HazardZone> {
        FLOOD_ZONES.iter().chain(LANDSLIDE_ZONES.iter())
    }

    #[test]
    fn high_severity_always_navigates() {
        let levels = [AlertLevel::Normal, AlertLevel::Attention, AlertLevel::Alert];
        for level in levels {
            for simulated in [false, true] {
                assert!(should_navigate(level, simulated, Severity::High));
            }
        }
    }

    #[test]
    fn lower_severity_navigates_only_when_alert_or_flag() {
        let levels = [AlertLevel::Normal, AlertLevel::Attention, AlertLevel::Alert];
        for severity in [Severity::Low, Severity::Medium] {
            for level in levels {
                for simulated in [false, true] {
                    assert_eq!(
                        should_navigate(level, simulated, severity),
                        level == AlertLevel::Alert || simulated,
                        "{severity:?} {level:?} simulated={simulated}"
                    );
                }
            }
        }
    }

    #[test]
    fn emphasis_requires_high_severity_and_active_alert() {
        assert!(is_emphasized(AlertLevel::Alert, false, Severity::High));
        assert!(is_emphasized(AlertLevel::Normal, true, Severity::High));
        assert!(!is_emphasized(AlertLevel::Normal, false, Severity::High));
        assert!(!is_emphasized(AlertLevel::Attention, false, Severity::High));
        assert!(!is_emphasized(AlertLevel::Alert, true, Severity::Medium));
    }

    #[test]
    fn simulated_alert_lets_medium_flood_zone_navigate() {
        let mut state = dashboard();
        state.simulate_alert(0.0);
        assert_eq!(state.alert.level(), AlertLevel::Alert);
        assert!(state.alert.simulated());

        let zone = zone_with(HazardKind::Flood, Severity::Medium);
        let request = state.click_zone(zone).unwrap();
        assert_eq!(request.alert.to_string(), format!("flood-{}", zone.id));
    }

    #[test]
    fn high_landslide_navigates_at_normal_level() {
        let state = dashboard();
        let zone = LANDSLIDE_ZONES.iter().find(|z| z.id == 1).unwrap();
        assert_eq!(zone.severity, Severity::High);
        assert_eq!(state.alert.level(), AlertLevel::Normal);
        let request = state.click_zone(zone).unwrap();
        assert_eq!(request.path(), "/alert/landslide-1");
    }

    #[test]
    fn low_flood_zone_is_blocked_at_normal_level() {
        let state = dashboard();
        let zone = zone_with(HazardKind::Flood, Severity::Low);
        assert_eq!(state.click_zone(zone), None);
    }

    #[test]
    fn medium_zone_blocked_again_once_alert_resets() {
        let mut state = dashboard();
        state.simulate_alert(0.0);
        let zone = zone_with(HazardKind::Landslide, Severity::Medium);
        assert!(state.click_zone(zone).is_some());

        state.advance_to(3_000.0);
        assert!(state.click_zone(zone).is_some(), "level is still Alert");

        state.advance_to(5_000.0);
        assert_eq!(state.click_zone(zone), None);
    }

    #[test]
    fn click_ignores_layer_visibility() {
        let mut config = DashboardConfig::default();
        config.initial_layers = LayerVisibility::empty();
        let state = DashboardState::new(&config);
        for zone in all_zones() {
            assert_eq!(state.click_zone(zone).is_some(), zone.severity.is_high());
        }
    }

    #[test]
    fn scene_hides_zones_of_disabled_layers() {
        let mut state = dashboard();
        let scene = state.scene();
        assert_eq!(scene.flood_zones.len(), FLOOD_ZONES.len());
        assert!(scene.landslide_zones.is_empty());
        assert_eq!(scene.infrastructure.len(), 3);
        assert!(scene.deformation.is_empty());
        assert!(!scene.show_river);
        assert!(scene.contours.is_empty());

        state.toggle_layer(LayerId::Inundacao);
        state.toggle_layer(LayerId::Deslizamento);
        state.toggle_layer(LayerId::Topografia);
        state.toggle_layer(LayerId::Hidrografia);
        state.toggle_layer(LayerId::Deformacao);
        let scene = state.scene();
        assert!(scene.flood_zones.is_empty());
        assert_eq!(scene.landslide_zones.len(), LANDSLIDE_ZONES.len());
        assert_eq!(scene.deformation.len(), 2);
        assert!(scene.show_river);
        assert_eq!(scene.contours.len(), 5);
        assert_eq!(scene.contours[4].rx, 80.0);
        assert_eq!(scene.contours[4].ry, 55.0);
    }

    #[test]
    fn scene_colors_follow_alert_state() {
        let mut state = dashboard();
        let resting = state.scene();
        assert!(!resting.show_banner);
        let high = resting.zones().find(|v| v.zone.severity == Severity::High).unwrap();
        assert!(!high.emphasized);
        assert_eq!(high.fill, MEDIUM_RED);

        state.simulate_alert(0.0);
        let alert = state.scene();
        assert!(alert.show_banner);
        for view in alert.zones() {
            assert_eq!(view.emphasized, view.zone.severity == Severity::High);
        }
        let high = alert.zones().find(|v| v.zone.severity == Severity::High).unwrap();
        assert_eq!(high.fill, STRONG_RED);
        let medium = alert.zones().find(|v| v.zone.severity == Severity::Medium).unwrap();
        assert_eq!(medium.fill, MEDIUM_ORANGE);
    }

    #[test]
    fn banner_stays_while_level_is_alert_after_flag_clears() {
        let mut state = dashboard();
        state.simulate_alert(0.0);
        state.advance_to(3_000.0);
        assert!(state.scene().show_banner);
        state.advance_to(5_000.0);
        assert!(!state.scene().show_banner);
    }

    #[test]
    fn toggle_layer_named_ignores_unknown_ids() {
        let mut state = dashboard();
        let before = state.layers.clone();
        assert!(!state.toggle_layer_named("satellite"));
        assert_eq!(state.layers, before);
    }

    #[test]
    fn tooltip_names_zone_and_severity() {
        let state = dashboard();
        let scene = state.scene();
        assert_eq!(
            scene.flood_zones[0].tooltip(),
            "Clique para ver detalhes de Zona Norte - Severidade: medium"
        );
    }
}
