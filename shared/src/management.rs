use chrono::NaiveDateTime;

use crate::config::{DEFAULT_PRECIPITATION_THRESHOLD_MM, DEFAULT_SOIL_MOISTURE_THRESHOLD_PCT};
use crate::time_format::wall_clock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ManagementSection {
    #[default]
    Alerts,
    Areas,
    Reports,
    History,
}

impl ManagementSection {
    pub const ALL: [ManagementSection; 4] =
        [Self::Alerts, Self::Areas, Self::Reports, Self::History];

    pub fn label(self) -> &'static str {
        match self {
            Self::Alerts => "Gerenciamento de Alertas",
            Self::Areas => "Áreas Monitoradas",
            Self::Reports => "Relatórios",
            Self::History => "Histórico",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Alerts => "\u{2699}",
            Self::Areas => "\u{1F4CD}",
            Self::Reports => "\u{1F4C4}",
            Self::History => "\u{1F552}",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdKind {
    Precipitation,
    SoilMoisture,
}

impl ThresholdKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Precipitation => "Precipitação Acumulada (24h)",
            Self::SoilMoisture => "Umidade do Solo (%)",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Self::Precipitation => "mm",
            Self::SoilMoisture => "%",
        }
    }
}

/// Trigger thresholds for automatic alerts. In memory only, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub precipitation_mm: u32,
    pub soil_moisture_pct: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            precipitation_mm: DEFAULT_PRECIPITATION_THRESHOLD_MM,
            soil_moisture_pct: DEFAULT_SOIL_MOISTURE_THRESHOLD_PCT,
        }
    }
}

impl Thresholds {
    pub fn get(&self, kind: ThresholdKind) -> u32 {
        match kind {
            ThresholdKind::Precipitation => self.precipitation_mm,
            ThresholdKind::SoilMoisture => self.soil_moisture_pct,
        }
    }

    /// Apply raw form input. Non-numeric input leaves the value unchanged.
    pub fn set_from_input(&mut self, kind: ThresholdKind, raw: &str) -> Result<u32, String> {
        let value = raw
            .trim()
            .parse::<u32>()
            .map_err(|e| format!("invalid {} threshold {raw:?}: {e}", kind.unit()))?;
        match kind {
            ThresholdKind::Precipitation => self.precipitation_mm = value,
            ThresholdKind::SoilMoisture => self.soil_moisture_pct = value,
        }
        Ok(value)
    }
}

/// Status tone used by the management tables and history cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Red,
    Yellow,
    Green,
}

impl StatusTone {
    /// (text, background, border) CSS colors.
    pub fn colors(self) -> (&'static str, &'static str, &'static str) {
        match self {
            Self::Red => ("#dc2626", "#fef2f2", "#fecaca"),
            Self::Yellow => ("#ca8a04", "#fefce8", "#fef08a"),
            Self::Green => ("#16a34a", "#f0fdf4", "#bbf7d0"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaStatus {
    ActiveAlert,
    Attention,
    Normal,
}

impl AreaStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::ActiveAlert => "Alerta Ativo",
            Self::Attention => "Atenção",
            Self::Normal => "Normal",
        }
    }

    pub fn tone(self) -> StatusTone {
        match self {
            Self::ActiveAlert => StatusTone::Red,
            Self::Attention => StatusTone::Yellow,
            Self::Normal => StatusTone::Green,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonitoredArea {
    pub id: u32,
    pub name: &'static str,
    pub city: &'static str,
    pub status: AreaStatus,
    pub last_update: NaiveDateTime,
}

pub fn monitored_areas() -> Vec<MonitoredArea> {
    vec![
        MonitoredArea {
            id: 1,
            name: "Centro Histórico",
            city: "Cidade A",
            status: AreaStatus::ActiveAlert,
            last_update: wall_clock(2025, 1, 9, 14, 30),
        },
        MonitoredArea {
            id: 2,
            name: "Encosta Leste",
            city: "Cidade A",
            status: AreaStatus::Normal,
            last_update: wall_clock(2025, 1, 9, 14, 25),
        },
        MonitoredArea {
            id: 3,
            name: "Bairro Jardim",
            city: "Cidade B",
            status: AreaStatus::Attention,
            last_update: wall_clock(2025, 1, 9, 14, 20),
        },
        MonitoredArea {
            id: 4,
            name: "Zona Industrial",
            city: "Cidade B",
            status: AreaStatus::Normal,
            last_update: wall_clock(2025, 1, 9, 14, 15),
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyAlerts {
    pub month: &'static str,
    pub alerts: u32,
}

pub const ALERT_STATS: [MonthlyAlerts; 6] = [
    MonthlyAlerts { month: "Jan", alerts: 3 },
    MonthlyAlerts { month: "Fev", alerts: 5 },
    MonthlyAlerts { month: "Mar", alerts: 2 },
    MonthlyAlerts { month: "Abr", alerts: 7 },
    MonthlyAlerts { month: "Mai", alerts: 4 },
    MonthlyAlerts { month: "Jun", alerts: 8 },
];

pub const MAX_BAR_HEIGHT_PX: f64 = 100.0;

/// Bar heights in px, scaled so the busiest month reaches [`MAX_BAR_HEIGHT_PX`].
pub fn bar_heights(stats: &[MonthlyAlerts]) -> Vec<f64> {
    let max = stats.iter().map(|s| s.alerts).max().unwrap_or(0);
    if max == 0 {
        return vec![0.0; stats.len()];
    }
    stats
        .iter()
        .map(|s| s.alerts as f64 / max as f64 * MAX_BAR_HEIGHT_PX)
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub title: &'static str,
    pub at: NaiveDateTime,
    pub summary: &'static str,
    pub outcome: &'static str,
    pub tone: StatusTone,
}

pub fn event_history() -> Vec<HistoryEntry> {
    vec![
        HistoryEntry {
            title: "Alerta de Inundação - Centro Histórico",
            at: wall_clock(2025, 1, 8, 15, 30),
            summary: "Precipitação acumulada de 65mm em 6 horas. Umidade do solo atingiu 92%.",
            outcome: "Resolvido",
            tone: StatusTone::Red,
        },
        HistoryEntry {
            title: "Alerta de Saturação - Encosta Leste",
            at: wall_clock(2025, 1, 7, 9, 45),
            summary: "Umidade do solo mantida acima de 88% por mais de 4 horas consecutivas.",
            outcome: "Resolvido",
            tone: StatusTone::Green,
        },
        HistoryEntry {
            title: "Monitoramento Preventivo - Bairro Jardim",
            at: wall_clock(2025, 1, 6, 22, 15),
            summary: "Precipitação moderada detectada. Acionamento preventivo dos protocolos de monitoramento.",
            outcome: "Arquivo",
            tone: StatusTone::Yellow,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::{
        ALERT_STATS, AreaStatus, ManagementSection, MonthlyAlerts, StatusTone, ThresholdKind,
        Thresholds, bar_heights, event_history, monitored_areas,
    };

    #[test]
    fn default_section_is_alert_thresholds() {
        assert_eq!(ManagementSection::default(), ManagementSection::Alerts);
        assert_eq!(ManagementSection::ALL.len(), 4);
    }

    #[test]
    fn thresholds_start_at_defaults() {
        let thresholds = Thresholds::default();
        assert_eq!(thresholds.get(ThresholdKind::Precipitation), 50);
        assert_eq!(thresholds.get(ThresholdKind::SoilMoisture), 85);
    }

    #[test]
    fn threshold_input_updates_only_its_kind() {
        let mut thresholds = Thresholds::default();
        assert_eq!(thresholds.set_from_input(ThresholdKind::Precipitation, " 65 "), Ok(65));
        assert_eq!(thresholds.precipitation_mm, 65);
        assert_eq!(thresholds.soil_moisture_pct, 85);
    }

    #[test]
    fn non_numeric_threshold_input_is_rejected() {
        let mut thresholds = Thresholds::default();
        assert!(thresholds.set_from_input(ThresholdKind::SoilMoisture, "high").is_err());
        assert!(thresholds.set_from_input(ThresholdKind::SoilMoisture, "-1").is_err());
        assert_eq!(thresholds, Thresholds::default());
    }

    #[test]
    fn area_status_tones() {
        assert_eq!(AreaStatus::ActiveAlert.tone(), StatusTone::Red);
        assert_eq!(AreaStatus::Attention.tone(), StatusTone::Yellow);
        assert_eq!(AreaStatus::Normal.tone(), StatusTone::Green);
        assert_eq!(monitored_areas().len(), 4);
    }

    #[test]
    fn busiest_month_gets_the_full_bar() {
        let heights = bar_heights(&ALERT_STATS);
        assert_eq!(heights.len(), 6);
        assert_eq!(heights[5], 100.0);
        assert_eq!(heights[0], 37.5);
    }

    #[test]
    fn empty_or_silent_stats_have_flat_bars() {
        assert!(bar_heights(&[]).is_empty());
        let quiet = [MonthlyAlerts { month: "Jul", alerts: 0 }];
        assert_eq!(bar_heights(&quiet), vec![0.0]);
    }

    #[test]
    fn history_is_newest_first() {
        let history = event_history();
        assert!(history.windows(2).all(|pair| pair[0].at > pair[1].at));
    }
}
