use crate::alert::AlertLevel;

/// Visual weight of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Default,
    Secondary,
    Destructive,
}

impl BadgeTone {
    /// (background, foreground) CSS colors.
    pub fn colors(self) -> (&'static str, &'static str) {
        match self {
            Self::Default => ("#0f172a", "#f8fafc"),
            Self::Secondary => ("#f1f5f9", "#0f172a"),
            Self::Destructive => ("#dc2626", "#ffffff"),
        }
    }
}

/// Alert summary card shown in the side panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertSummary {
    pub label: &'static str,
    pub tone: BadgeTone,
    pub cause: &'static str,
    pub affected_areas: &'static str,
    /// Flood probability over the next six hours, percent.
    pub flood_probability_pct: u8,
}

impl AlertSummary {
    pub fn for_level(level: AlertLevel) -> Self {
        let (label, tone, cause) = match level {
            AlertLevel::Alert => ("ALERTA", BadgeTone::Destructive, "Chuvas Intensas"),
            AlertLevel::Attention => ("ATENÇÃO", BadgeTone::Secondary, "Saturação do Solo"),
            AlertLevel::Normal => ("NORMAL", BadgeTone::Default, "Monitoramento Ativo"),
        };
        let alerting = level == AlertLevel::Alert;
        Self {
            label,
            tone,
            cause,
            affected_areas: if alerting {
                "Centro Histórico, Zona Norte"
            } else {
                "Nenhuma área em risco imediato"
            },
            flood_probability_pct: if alerting { 85 } else { 15 },
        }
    }
}

/// Latest sensor readings shown under "Dados Recentes".
#[derive(Debug, Clone, PartialEq)]
pub struct RecentReadings {
    pub precipitation_24h_mm: u32,
    pub soil_moisture_pct: u32,
    pub last_deformation_at: &'static str,
    pub last_deformation_mm: f64,
}

pub const RECENT_READINGS: RecentReadings = RecentReadings {
    precipitation_24h_mm: 45,
    soil_moisture_pct: 78,
    last_deformation_at: "Hoje às 14:30",
    last_deformation_mm: 2.3,
};

pub const FOOTER_TEXT: &str = "Plataforma RUI - Resiliência Urbana Inteligente | Monitoramento em tempo real para cidades mais seguras";

#[cfg(test)]
mod tests {
    use super::{AlertSummary, BadgeTone, FOOTER_TEXT};
    use crate::alert::AlertLevel;

    #[test]
    fn alert_level_reports_heavy_rain() {
        let summary = AlertSummary::for_level(AlertLevel::Alert);
        assert_eq!(summary.label, "ALERTA");
        assert_eq!(summary.tone, BadgeTone::Destructive);
        assert_eq!(summary.cause, "Chuvas Intensas");
        assert_eq!(summary.affected_areas, "Centro Histórico, Zona Norte");
        assert_eq!(summary.flood_probability_pct, 85);
    }

    #[test]
    fn attention_reports_soil_saturation_without_affected_areas() {
        let summary = AlertSummary::for_level(AlertLevel::Attention);
        assert_eq!(summary.label, "ATENÇÃO");
        assert_eq!(summary.tone, BadgeTone::Secondary);
        assert_eq!(summary.cause, "Saturação do Solo");
        assert_eq!(summary.affected_areas, "Nenhuma área em risco imediato");
        assert_eq!(summary.flood_probability_pct, 15);
    }

    #[test]
    fn normal_is_routine_monitoring() {
        let summary = AlertSummary::for_level(AlertLevel::Normal);
        assert_eq!(summary.label, "NORMAL");
        assert_eq!(summary.tone, BadgeTone::Default);
        assert_eq!(summary.cause, "Monitoramento Ativo");
    }

    #[test]
    fn footer_names_the_platform() {
        assert!(FOOTER_TEXT.starts_with("Plataforma RUI - Resiliência Urbana Inteligente"));
        assert!(FOOTER_TEXT.ends_with("cidades mais seguras"));
    }
}
