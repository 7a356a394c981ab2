//! Fixed alert record and focused map shown on the alert detail screen.

use chrono::NaiveDateTime;

use crate::catalog::{EVACUATION_POINTS, find_zone};
use crate::navigation::AlertRef;
use crate::status::BadgeTone;
use crate::time_format::wall_clock;
use crate::zone::{HazardZone, InfrastructureCategory, InfrastructurePoint, Position};

pub const FALLBACK_ALERT_ID: &str = "001";

#[derive(Debug, Clone, PartialEq)]
pub struct SatellitePass {
    pub sensor: &'static str,
    pub captured_at: NaiveDateTime,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlertRecord {
    /// Route identifier used for labelling, verbatim.
    pub id: String,
    pub title: &'static str,
    pub status: &'static str,
    pub started_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub location: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub cause: &'static str,
    pub river_level: &'static str,
    pub soil_moisture: &'static str,
    pub ai_prediction_pct: u8,
    pub affected_population: &'static str,
    pub critical_infrastructure: &'static [&'static str],
    pub affected_areas: &'static [&'static str],
    pub recommendations: &'static [&'static str],
    pub satellite_passes: Vec<SatellitePass>,
}

impl AlertRecord {
    /// The descriptive record is the same for every alert; only the id label
    /// changes. An empty id is shown as [`FALLBACK_ALERT_ID`].
    pub fn mock(id: &str) -> Self {
        let id = if id.trim().is_empty() {
            FALLBACK_ALERT_ID.to_string()
        } else {
            id.to_string()
        };
        Self {
            id,
            title: "Alerta de Inundação - Centro Histórico",
            status: "ALERTA VERMELHO",
            started_at: wall_clock(2025, 7, 3, 9, 0),
            updated_at: wall_clock(2025, 7, 3, 9, 15),
            location: "Rua Principal, Centro Histórico, Cidade Exemplo",
            latitude: -23.5505,
            longitude: -46.6333,
            cause: "Chuva Extrema (45 mm nas últimas 2h, 78 mm nas últimas 24h)",
            river_level: "2.8 metros (subindo 0.3 m/h)",
            soil_moisture: "85% de saturação (tendência: aumentando)",
            ai_prediction_pct: 85,
            affected_population: "~5.000 pessoas",
            critical_infrastructure: &["Hospital Central", "Ponte Principal", "Escola Municipal"],
            affected_areas: &["Setor Centro-1", "Setor Centro-2", "Setor Centro-3"],
            recommendations: &[
                "Iniciar evacuação das áreas mais baixas",
                "Acionar equipes de resgate",
                "Bloquear acessos à Rua Principal",
                "Emitir aviso à população via sistemas de alerta",
            ],
            satellite_passes: vec![
                SatellitePass {
                    sensor: "Sentinel-1 (Radar)",
                    captured_at: wall_clock(2025, 7, 3, 8, 30),
                    description: "Nível de água detectado",
                },
                SatellitePass {
                    sensor: "Sentinel-2 (Óptica)",
                    captured_at: wall_clock(2025, 7, 2, 14, 0),
                    description: "Variação na cobertura vegetal",
                },
            ],
        }
    }

    pub fn alert_ref(&self) -> Option<AlertRef> {
        AlertRef::parse(&self.id)
    }

    /// Catalog zone the id points at, when it names one.
    pub fn zone(&self) -> Option<&'static HazardZone> {
        let alert = self.alert_ref()?;
        find_zone(alert.kind, alert.zone_id)
    }

    pub fn status_tone(&self) -> BadgeTone {
        status_tone(self.status)
    }

    pub fn coordinates_label(&self) -> String {
        format!("Lat: {}, Lon: {}", self.latitude, self.longitude)
    }
}

pub fn status_tone(status: &str) -> BadgeTone {
    if status.contains("VERMELHO") {
        BadgeTone::Destructive
    } else if status.contains("AMARELO") {
        BadgeTone::Secondary
    } else {
        BadgeTone::Default
    }
}

/// Axis-aligned rectangle in map percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn top_center(&self) -> Position {
        Position::new(self.x + self.width / 2.0, self.y)
    }

    pub fn right_middle(&self) -> Position {
        Position::new(self.x + self.width, self.y + self.height / 2.0)
    }
}

pub const ALERT_AREA: Rect = Rect {
    x: 40.0,
    y: 45.0,
    width: 30.0,
    height: 25.0,
};

pub const WATER_LEVEL_LABEL: &str = "Nível atual: 2.8m";
pub const WATER_TREND_LABEL: &str = "\u{2197} Subindo 0.3 m/h";

/// Critical infrastructure as framed on the focused detail map.
pub static FOCUSED_INFRASTRUCTURE: [InfrastructurePoint; 3] = [
    InfrastructurePoint {
        id: 1,
        name: "Hospital Central",
        category: InfrastructureCategory::Hospital,
        position: Position::new(45.0, 35.0),
    },
    InfrastructurePoint {
        id: 2,
        name: "Escola Municipal",
        category: InfrastructureCategory::School,
        position: Position::new(65.0, 55.0),
    },
    InfrastructurePoint {
        id: 3,
        name: "Ponte Principal",
        category: InfrastructureCategory::Bridge,
        position: Position::new(55.0, 70.0),
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteSegment {
    pub from: Position,
    pub to: Position,
}

/// Escape routes from the alert area: its top edge leads to the first
/// evacuation point, its right edge to the second.
pub fn evacuation_routes() -> Vec<RouteSegment> {
    let exits = [ALERT_AREA.top_center(), ALERT_AREA.right_middle()];
    exits
        .into_iter()
        .zip(EVACUATION_POINTS.iter())
        .map(|(from, point)| RouteSegment {
            from,
            to: point.position,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{ALERT_AREA, AlertRecord, FALLBACK_ALERT_ID, evacuation_routes, status_tone};
    use crate::navigation::AlertRef;
    use crate::status::BadgeTone;
    use crate::zone::{HazardKind, Position};

    #[test]
    fn record_keeps_route_id_for_labelling() {
        let record = AlertRecord::mock("flood-2");
        assert_eq!(record.id, "flood-2");
        assert_eq!(record.alert_ref(), Some(AlertRef::new(HazardKind::Flood, 2)));
        assert_eq!(record.zone().map(|z| z.name), Some("Centro Histórico"));
        assert_eq!(record.status_tone(), BadgeTone::Destructive);
    }

    #[test]
    fn unknown_ids_still_render_the_record() {
        let record = AlertRecord::mock("evt-42");
        assert_eq!(record.id, "evt-42");
        assert_eq!(record.alert_ref(), None);
        assert_eq!(record.zone(), None);
        assert_eq!(record.title, "Alerta de Inundação - Centro Histórico");
    }

    #[test]
    fn empty_id_falls_back() {
        assert_eq!(AlertRecord::mock("  ").id, FALLBACK_ALERT_ID);
    }

    #[test]
    fn status_tone_reads_color_word() {
        assert_eq!(status_tone("ALERTA VERMELHO"), BadgeTone::Destructive);
        assert_eq!(status_tone("ALERTA AMARELO"), BadgeTone::Secondary);
        assert_eq!(status_tone("MONITORAMENTO"), BadgeTone::Default);
    }

    #[test]
    fn coordinates_label() {
        assert_eq!(
            AlertRecord::mock("x").coordinates_label(),
            "Lat: -23.5505, Lon: -46.6333"
        );
    }

    #[test]
    fn routes_leave_the_alert_area_towards_evacuation_points() {
        let routes = evacuation_routes();
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].from, Position::new(55.0, 45.0));
        assert_eq!(routes[0].to, Position::new(25.0, 25.0));
        assert_eq!(routes[1].from, Position::new(70.0, 57.5));
        assert_eq!(routes[1].to, Position::new(75.0, 20.0));
        assert_eq!(ALERT_AREA.top_center().y, ALERT_AREA.y);
    }
}
