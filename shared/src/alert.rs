//! Session-wide alert level and the transient simulated-alert flag.
//!
//! Two deferred tasks drive the automatic transitions:
//! - `alert-level-reset` returns the level to [`AlertLevel::Normal`] after a
//!   simulated alert has run its course.
//! - `simulated-flag-clear` ends the emphasis window opened whenever the level
//!   enters [`AlertLevel::Alert`].
//!
//! Both are armed together by [`AlertState::simulate_alert`] and tick
//! independently; cancelling one never touches the other.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::AlertTimings;
use crate::deferred::DeferredTasks;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    #[default]
    Normal,
    Attention,
    Alert,
}

impl AlertLevel {
    pub fn name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Attention => "attention",
            Self::Alert => "alert",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "normal" => Some(Self::Normal),
            "attention" => Some(Self::Attention),
            "alert" => Some(Self::Alert),
            _ => None,
        }
    }
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimerKey {
    AlertLevelReset,
    SimulatedFlagClear,
}

impl TimerKey {
    pub const ALL: [TimerKey; 2] = [Self::AlertLevelReset, Self::SimulatedFlagClear];

    pub fn name(self) -> &'static str {
        match self {
            Self::AlertLevelReset => "alert-level-reset",
            Self::SimulatedFlagClear => "simulated-flag-clear",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AlertState {
    level: AlertLevel,
    simulated: bool,
    timings: AlertTimings,
    timers: DeferredTasks<TimerKey>,
}

impl Default for AlertState {
    fn default() -> Self {
        Self::new(AlertLevel::Normal, AlertTimings::default())
    }
}

impl AlertState {
    /// Start a session at `level`. No timers are pending initially, even when
    /// the session starts in `Alert`.
    pub fn new(level: AlertLevel, timings: AlertTimings) -> Self {
        Self {
            level,
            simulated: false,
            timings,
            timers: DeferredTasks::new(),
        }
    }

    pub fn level(&self) -> AlertLevel {
        self.level
    }

    pub fn simulated(&self) -> bool {
        self.simulated
    }

    /// True while either the level is `Alert` or the emphasis window is open.
    pub fn is_active(&self) -> bool {
        self.simulated || self.level == AlertLevel::Alert
    }

    /// The "Simular Alerta" action.
    ///
    /// From `Alert` this is a manual cancel: the level drops to `Normal`, the
    /// emphasis window closes and both pending timers are discarded. From any
    /// other level the alert is raised and both timers are (re)armed.
    pub fn simulate_alert(&mut self, now: f64) {
        if self.level == AlertLevel::Alert {
            self.level = AlertLevel::Normal;
            self.simulated = false;
            self.timers.cancel_all();
            tracing::debug!(level = %self.level, "simulated alert cancelled");
            return;
        }

        self.timers
            .arm(TimerKey::AlertLevelReset, now + self.timings.reset_after_ms);
        self.enter_alert(now);
        tracing::debug!(
            level = %self.level,
            reset_at = now + self.timings.reset_after_ms,
            "simulated alert raised"
        );
    }

    /// Raise the level to `Alert` from an external cause. Entering or
    /// re-entering `Alert` opens the emphasis window afresh.
    pub fn enter_alert(&mut self, now: f64) {
        self.level = AlertLevel::Alert;
        self.simulated = true;
        self.timers
            .arm(TimerKey::SimulatedFlagClear, now + self.timings.flag_window_ms);
    }

    /// Fire every task due at `now`, earliest first. Returns the fired keys.
    pub fn advance_to(&mut self, now: f64) -> Vec<TimerKey> {
        let mut fired = Vec::new();
        while let Some((key, deadline)) = self.timers.pop_due(now) {
            match key {
                TimerKey::AlertLevelReset => self.level = AlertLevel::Normal,
                TimerKey::SimulatedFlagClear => self.simulated = false,
            }
            tracing::debug!(
                timer = key.name(),
                deadline,
                level = %self.level,
                simulated = self.simulated,
                "alert timer fired"
            );
            fired.push(key);
        }
        fired
    }

    /// Cancel all pending timers, leaving level and flag as they are.
    pub fn teardown(&mut self) {
        self.timers.cancel_all();
    }

    pub fn deadline(&self, key: TimerKey) -> Option<f64> {
        self.timers.deadline(key)
    }

    pub fn pending_timers(&self) -> Vec<(TimerKey, f64)> {
        self.timers.snapshot()
    }
}
