use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use rui_shared::map_view::{ALERT_BANNER_TEXT, Contour};
use rui_shared::{
    DashboardState, DeformationReading, HazardKind, HazardZone, InfrastructurePoint, ZoneView,
};

use crate::app::{Dashboard, Scene};

const RIVER_PATH: &str = "M 0 300 Q 200 250 400 300 Q 600 350 800 300";

/// Route opened by a click on `zone`, or the reason the click stays on the map.
fn zone_click_target(state: &DashboardState, zone: &HazardZone) -> Result<String, String> {
    match state.click_zone(zone) {
        Some(request) => Ok(request.path()),
        None => Err(format!(
            "navigation blocked: {} ({}) level={} simulated={}",
            zone.name,
            zone.severity,
            state.alert.level(),
            state.alert.simulated()
        )),
    }
}

/// Simulated city map: hazard zones per enabled layer plus the alert overlay.
#[component]
pub fn HazardMap() -> impl IntoView {
    let Dashboard(dashboard) = expect_context();
    let Scene(scene) = expect_context();
    let navigate = use_navigate();

    let on_zone_click = move |zone: &'static HazardZone| {
        match dashboard.with_untracked(|state| zone_click_target(state, zone)) {
            Ok(path) => {
                web_sys::console::info_1(&format!("navigating to {path}").into());
                navigate(&path, Default::default());
            }
            Err(reason) => web_sys::console::log_1(&reason.into()),
        }
    };
    let on_flood_click = on_zone_click.clone();
    let on_landslide_click = on_zone_click;

    view! {
        <div style="position: relative; width: 100%; height: 100%; overflow: hidden; border-radius: 8px; background: linear-gradient(135deg, #bbf7d0, #bfdbfe 55%, #e5e7eb);">
            <svg style="position: absolute; inset: 0; width: 100%; height: 100%;">
                <path
                    d=RIVER_PATH
                    stroke="#3b82f6"
                    stroke-width="4"
                    fill="none"
                    style="transition: opacity 0.3s;"
                    opacity=move || if scene.with(|s| s.show_river) { "1" } else { "0" }
                />
            </svg>
            {move || {
                scene
                    .with(|s| s.flood_zones.clone())
                    .into_iter()
                    .map(|view| zone_marker(view, on_flood_click.clone()))
                    .collect_view()
            }}
            {move || {
                scene
                    .with(|s| s.landslide_zones.clone())
                    .into_iter()
                    .map(|view| zone_marker(view, on_landslide_click.clone()))
                    .collect_view()
            }}
            {move || scene.with(|s| s.infrastructure).iter().map(infrastructure_marker).collect_view()}
            {move || contour_overlay(scene.with(|s| s.contours.clone()))}
            {move || scene.with(|s| s.deformation).iter().map(deformation_marker).collect_view()}
            {move || scene.with(|s| s.show_banner).then(alert_banner)}
        </div>
    }
}

fn zone_marker(
    view: ZoneView,
    on_click: impl Fn(&'static HazardZone) + Clone + 'static,
) -> impl IntoView {
    let zone = view.zone;
    let (size, radius, icon) = match zone.kind {
        HazardKind::Flood => ("width: 80px; height: 64px;", "9999px", "\u{1F4A7}"),
        HazardKind::Landslide => ("width: 64px; height: 80px;", "8px", "\u{26F0}"),
    };
    let style = format!(
        "position: absolute; left: {}%; top: {}%; {size} border-radius: {radius}; background-color: {}; border: {}; cursor: pointer; transition: all 0.3s;",
        zone.position.x, zone.position.y, view.fill, view.border
    );
    let title = view.tooltip();

    view! {
        <div
            class="zone"
            class:pulse=view.emphasized
            style=style
            title=title
            on:click=move |_| on_click(zone)
        >
            <div style="position: absolute; top: -24px; left: 50%; transform: translateX(-50%); font-size: 0.75rem; font-weight: 500; color: #374151; white-space: nowrap; text-align: center;">
                <div>{icon}</div>
                {zone.name}
            </div>
        </div>
    }
}

fn infrastructure_marker(point: &'static InfrastructurePoint) -> impl IntoView {
    let style = format!(
        "position: absolute; left: {}%; top: {}%; width: 16px; height: 16px; background: #1f2937; border-radius: 9999px;",
        point.position.x, point.position.y
    );
    view! {
        <div style=style title=point.category.icon()>
            <div style="position: absolute; top: -24px; left: 50%; transform: translateX(-50%); font-size: 0.75rem; font-weight: 500; color: #374151; white-space: nowrap;">
                {point.name}
            </div>
        </div>
    }
}

fn contour_overlay(contours: Vec<Contour>) -> impl IntoView {
    (!contours.is_empty()).then(|| {
        view! {
            <svg style="position: absolute; inset: 0; width: 100%; height: 100%; opacity: 0.3; pointer-events: none;">
                {contours
                    .into_iter()
                    .map(|ring| {
                        view! {
                            <ellipse
                                cx="50%"
                                cy="50%"
                                rx=format!("{}%", ring.rx)
                                ry=format!("{}%", ring.ry)
                                stroke="#8b5cf6"
                                stroke-width="1"
                                fill="none"
                            />
                        }
                    })
                    .collect_view()}
            </svg>
        }
    })
}

fn deformation_marker(reading: &'static DeformationReading) -> impl IntoView {
    let (dot, text) = if reading.is_subsidence() {
        ("#ef4444", "#dc2626")
    } else {
        ("#eab308", "#ca8a04")
    };
    let style = format!(
        "position: absolute; left: {}%; top: {}%; width: 12px; height: 12px; border-radius: 9999px; background: {dot};",
        reading.position.x, reading.position.y
    );
    let label_style = format!(
        "position: absolute; top: -20px; left: 50%; transform: translateX(-50%); font-size: 0.75rem; font-weight: 700; color: {text}; white-space: nowrap;"
    );
    view! {
        <div style=style>
            <div style=label_style>{reading.label()}</div>
        </div>
    }
}

fn alert_banner() -> impl IntoView {
    view! {
        <div
            class="pulse"
            style="position: absolute; inset: 0; background: rgba(239,68,68,0.2); display: flex; align-items: center; justify-content: center; pointer-events: none;"
        >
            <div style="background: #dc2626; color: #fff; padding: 8px 16px; border-radius: 8px; display: flex; align-items: center; gap: 8px; font-weight: 700;">
                <span>"\u{26A0}"</span>
                <span>{ALERT_BANNER_TEXT}</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::zone_click_target;
    use rui_shared::DashboardState;
    use rui_shared::catalog::{FLOOD_ZONES, LANDSLIDE_ZONES};

    #[test]
    fn flood_and_landslide_clicks_share_one_decision() {
        let mut state = DashboardState::default();
        state.simulate_alert(0.0);
        assert_eq!(
            zone_click_target(&state, &FLOOD_ZONES[2]),
            Ok("/alert/flood-3".to_string())
        );
        assert_eq!(
            zone_click_target(&state, &LANDSLIDE_ZONES[1]),
            Ok("/alert/landslide-2".to_string())
        );
    }

    #[test]
    fn high_severity_opens_details_at_normal() {
        let state = DashboardState::default();
        let zone = LANDSLIDE_ZONES.iter().find(|z| z.id == 1).unwrap();
        assert_eq!(
            zone_click_target(&state, zone),
            Ok("/alert/landslide-1".to_string())
        );
    }

    #[test]
    fn low_severity_at_normal_reports_why_it_stays() {
        let state = DashboardState::default();
        let reason = zone_click_target(&state, &FLOOD_ZONES[2]).unwrap_err();
        assert!(reason.starts_with("navigation blocked: Bairro Sul"));
        assert!(reason.ends_with("level=normal simulated=false"));
    }
}
