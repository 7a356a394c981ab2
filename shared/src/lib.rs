pub mod alert;
pub mod catalog;
pub mod colors;
pub mod config;
pub mod deferred;
pub mod detail;
pub mod layers;
pub mod management;
pub mod map_view;
pub mod navigation;
pub mod status;
pub mod time_format;
pub mod zone;

pub use alert::{AlertLevel, AlertState, TimerKey};
pub use config::{AlertTimings, DashboardConfig};
pub use layers::{LayerId, LayerVisibility};
pub use map_view::{DashboardState, MapScene, ZoneView};
pub use navigation::{AlertRef, NavigationRequest};
pub use zone::*;
