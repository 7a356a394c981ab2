use leptos::prelude::*;

use rui_shared::LayerId;
use rui_shared::status::{AlertSummary, BadgeTone, RECENT_READINGS};

use crate::app::{Dashboard, simulate_alert, toggle_layer};

const CARD_STYLE: &str = "background: #fff; border: 1px solid #e5e7eb; border-radius: 8px; padding: 16px; display: flex; flex-direction: column; gap: 12px;";
const CARD_TITLE_STYLE: &str = "font-size: 1.125rem; font-weight: 600; display: flex; align-items: center; gap: 8px; margin: 0;";

fn badge_style(tone: BadgeTone) -> String {
    let (background, foreground) = tone.colors();
    format!(
        "display: inline-block; padding: 2px 10px; border-radius: 9999px; font-size: 0.75rem; font-weight: 600; background: {background}; color: {foreground};"
    )
}

#[component]
pub fn SidePanel() -> impl IntoView {
    let Dashboard(dashboard) = expect_context();
    let summary = Memo::new(move |_| dashboard.with(|state| AlertSummary::for_level(state.alert.level())));

    view! {
        <div style="display: flex; flex-direction: column; gap: 16px; overflow-y: auto;">
            <div style=CARD_STYLE>
                <h2 style=CARD_TITLE_STYLE>"\u{26A0} Resumo de Alerta"</h2>
                <div style="display: flex; justify-content: space-between; align-items: center; font-size: 0.875rem;">
                    <span style="font-weight: 500;">"Status:"</span>
                    <span style=move || badge_style(summary.with(|s| s.tone))>
                        {move || summary.with(|s| s.label)}
                    </span>
                </div>
                <div style="display: flex; justify-content: space-between; font-size: 0.875rem;">
                    <span style="font-weight: 500;">"Causa:"</span>
                    <span style="color: #4b5563;">{move || summary.with(|s| s.cause)}</span>
                </div>
                <div style="font-size: 0.875rem;">
                    <span style="font-weight: 500;">"Áreas Afetadas:"</span>
                    <div style="color: #4b5563; margin-top: 4px;">
                        {move || summary.with(|s| s.affected_areas)}
                    </div>
                </div>
                <button
                    style="width: 100%; padding: 8px 12px; background: #f97316; color: #fff; border: none; border-radius: 8px; font-size: 0.875rem; font-weight: 500; cursor: pointer;"
                    on:click=move |_| simulate_alert(dashboard)
                >
                    "Simular Alerta"
                </button>
            </div>

            <div style=CARD_STYLE>
                <h2 style=CARD_TITLE_STYLE>"\u{1F4C8} Dados Recentes"</h2>
                <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 16px;">
                    <div style="text-align: center; padding: 12px; background: #eff6ff; border-radius: 8px;">
                        <div style="font-size: 1.125rem; font-weight: 700; color: #2563eb;">
                            {format!("{}mm", RECENT_READINGS.precipitation_24h_mm)}
                        </div>
                        <div style="font-size: 0.75rem; color: #4b5563;">"Precipitação (24h)"</div>
                    </div>
                    <div style="text-align: center; padding: 12px; background: #fffbeb; border-radius: 8px;">
                        <div style="font-size: 1.125rem; font-weight: 700; color: #d97706;">
                            {format!("{}%", RECENT_READINGS.soil_moisture_pct)}
                        </div>
                        <div style="font-size: 0.75rem; color: #4b5563;">"Umidade Solo"</div>
                    </div>
                </div>
                <div style="padding-top: 8px; border-top: 1px solid #e5e7eb; font-size: 0.875rem;">
                    <div style="font-weight: 500; margin-bottom: 4px;">"Última Detecção Deformação:"</div>
                    <div style="color: #4b5563;">
                        {format!(
                            "{} - Magnitude: {}mm",
                            RECENT_READINGS.last_deformation_at,
                            RECENT_READINGS.last_deformation_mm
                        )}
                    </div>
                </div>
                <div style="padding-top: 8px; border-top: 1px solid #e5e7eb; font-size: 0.875rem;">
                    <div style="font-weight: 500; margin-bottom: 4px;">"Previsão IA:"</div>
                    <div style="color: #4b5563;">
                        "Probabilidade de inundação nas próximas 6h: "
                        {move || format!("{}%", summary.with(|s| s.flood_probability_pct))}
                    </div>
                </div>
            </div>

            <div style=CARD_STYLE>
                <h2 style=CARD_TITLE_STYLE>"\u{1F441} Controles de Camadas"</h2>
                {LayerId::ALL
                    .into_iter()
                    .map(|layer| view! { <LayerSwitch layer=layer /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn LayerSwitch(layer: LayerId) -> impl IntoView {
    let Dashboard(dashboard) = expect_context();
    let active = Memo::new(move |_| dashboard.with(|state| state.layers.is_visible(layer)));

    view! {
        <div
            style="display: flex; align-items: center; justify-content: space-between; cursor: pointer;"
            on:click=move |_| toggle_layer(dashboard, layer)
        >
            <div style="display: flex; align-items: center; gap: 8px; font-size: 0.875rem;">
                <span style=move || {
                    if active.get() { "color: #2563eb;" } else { "color: #9ca3af;" }
                }>{layer.icon()}</span>
                <span style=move || {
                    if active.get() { "font-weight: 500;" } else { "color: #4b5563;" }
                }>{layer.label()}</span>
            </div>
            <span
                role="switch"
                aria-checked=move || if active.get() { "true" } else { "false" }
                style=move || {
                    if active.get() {
                        "position: relative; display: inline-block; width: 36px; height: 20px; border-radius: 9999px; background: #2563eb; transition: background 0.2s;"
                    } else {
                        "position: relative; display: inline-block; width: 36px; height: 20px; border-radius: 9999px; background: #e5e7eb; transition: background 0.2s;"
                    }
                }
            >
                <span style=move || {
                    let left = if active.get() { 18 } else { 2 };
                    format!(
                        "position: absolute; top: 2px; left: {left}px; width: 16px; height: 16px; border-radius: 50%; background: #fff; transition: left 0.2s;"
                    )
                } />
            </span>
        </div>
    }
}
