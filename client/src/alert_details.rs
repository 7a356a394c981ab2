use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use rui_shared::catalog::EVACUATION_POINTS;
use rui_shared::detail::{
    ALERT_AREA, AlertRecord, FOCUSED_INFRASTRUCTURE, RouteSegment, WATER_LEVEL_LABEL,
    WATER_TREND_LABEL, evacuation_routes,
};
use rui_shared::navigation::DASHBOARD_PATH;
use rui_shared::status::BadgeTone;
use rui_shared::time_format::format_day_first;

const SECTION_TITLE_STYLE: &str = "font-size: 1.125rem; font-weight: 600; margin: 0 0 12px 0;";
const DETAIL_RIVER_PATH: &str = "M 0 200 Q 150 180 300 200 Q 450 220 600 200";

fn route_path(route: &RouteSegment) -> String {
    format!(
        "M {}% {}% L {}% {}%",
        route.from.x, route.from.y, route.to.x, route.to.y
    )
}

fn badge_style(tone: BadgeTone) -> String {
    let (background, foreground) = tone.colors();
    format!(
        "padding: 4px 12px; border-radius: 9999px; font-size: 0.875rem; font-weight: 600; background: {background}; color: {foreground};"
    )
}

/// Detail screen for `/alert/:alert_id`. Any id renders the same record;
/// the id only labels it.
#[component]
pub fn AlertDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let record = Memo::new(move |_| {
        let id = params.with(|p| p.get("alert_id")).unwrap_or_default();
        AlertRecord::mock(&id)
    });

    Effect::new(move || {
        record.with(|r| {
            let zone = r.zone().map(|z| z.name).unwrap_or("-");
            web_sys::console::info_1(&format!("alert details: id={} zone={zone}", r.id).into());
        });
    });

    view! {
        <div style="min-height: 100vh; background: #f9fafb;">
            <header style="background: #2563eb; color: #fff; padding: 16px; display: flex; align-items: center; gap: 16px;">
                <A href=DASHBOARD_PATH attr:style="color: #fff; text-decoration: none; padding: 6px 12px; border-radius: 6px; background: rgba(255,255,255,0.1);">
                    "\u{2190} Voltar para Dashboard"
                </A>
                <div>
                    <h1 style="font-size: 1.25rem; font-weight: 700; margin: 0;">"Detalhes do Alerta"</h1>
                    <p style="font-size: 0.875rem; color: #dbeafe; margin: 0;">"Análise Detalhada de Evento"</p>
                </div>
            </header>

            <div style="padding: 24px; display: flex; flex-direction: column; gap: 24px;">
                <div style="background: #fff; border: 1px solid #e5e7eb; border-radius: 8px; padding: 16px;">
                    <h2 style=SECTION_TITLE_STYLE>"\u{1F4CD} Mapa da Área de Interesse"</h2>
                    <div style="height: 320px; border: 1px solid #e5e7eb; border-radius: 8px; overflow: hidden;">
                        <AlertDetailMap />
                    </div>
                </div>
                {move || record.with(|r| record_panel(r.clone()))}
            </div>
        </div>
    }
}

fn record_panel(record: AlertRecord) -> impl IntoView {
    let status_style = badge_style(record.status_tone());
    let started = format_day_first(&record.started_at);
    let updated = format_day_first(&record.updated_at);
    let coordinates = record.coordinates_label();

    view! {
        <div style="background: #fff; border: 1px solid #e5e7eb; border-radius: 8px; padding: 16px; display: flex; flex-direction: column; gap: 24px;">
            <div>
                <div style="display: flex; align-items: center; justify-content: space-between;">
                    <h2 style="font-size: 1.25rem; font-weight: 600; margin: 0;">{record.title}</h2>
                    <span style=status_style>{record.status}</span>
                </div>
                <div style="display: flex; flex-wrap: wrap; gap: 16px; font-size: 0.875rem; color: #4b5563; margin-top: 8px;">
                    <span><strong>"ID: "</strong>{format!("#{}", record.id)}</span>
                    <span>{format!("\u{1F552} Início: {started}")}</span>
                    <span>{format!("Atualizado: {updated}")}</span>
                </div>
                <div style="font-size: 0.875rem; color: #4b5563; margin-top: 4px;">
                    <div>{record.location}</div>
                    <div style="font-size: 0.75rem;">{coordinates}</div>
                </div>
            </div>

            <div>
                <h3 style=SECTION_TITLE_STYLE>"\u{26A0} Detalhes do Evento/Risco"</h3>
                <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 16px;">
                    {fact_card("Causa Provável", record.cause.to_string(), "#fef2f2", "#991b1b")}
                    {fact_card("Umidade do Solo", record.soil_moisture.to_string(), "#fffbeb", "#92400e")}
                    {fact_card("Nível do Rio", record.river_level.to_string(), "#eff6ff", "#1e40af")}
                    {fact_card(
                        "Previsão IA",
                        format!(
                            "Probabilidade de inundação crítica nas próximas 4 horas: {}%",
                            record.ai_prediction_pct
                        ),
                        "#faf5ff",
                        "#6b21a8",
                    )}
                </div>
            </div>

            <div>
                <h3 style=SECTION_TITLE_STYLE>"\u{1F465} Impacto Potencial"</h3>
                <div style="display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px;">
                    <div style="padding: 16px; background: #f9fafb; border-radius: 8px;">
                        <div style="font-weight: 500; margin-bottom: 8px;">"População Afetada"</div>
                        <div style="font-size: 1.5rem; font-weight: 700;">{record.affected_population}</div>
                    </div>
                    {bullet_card("Infraestruturas Críticas", record.critical_infrastructure)}
                    {bullet_card("Áreas Atingidas", record.affected_areas)}
                </div>
            </div>

            <div>
                <h3 style=SECTION_TITLE_STYLE>"Recomendações/Ações Sugeridas"</h3>
                <div style="display: flex; flex-direction: column; gap: 8px;">
                    {record
                        .recommendations
                        .iter()
                        .map(|rec| view! {
                            <div style="display: flex; align-items: flex-start; gap: 8px; padding: 12px; background: #fff7ed; border-radius: 8px; font-size: 0.875rem; color: #9a3412;">
                                <span style="width: 8px; height: 8px; margin-top: 6px; background: #f97316; border-radius: 50%; flex-shrink: 0;" />
                                <span>{*rec}</span>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>

            <div>
                <h3 style=SECTION_TITLE_STYLE>"\u{1F6F0} Registros de Análise (Dados Copernicus)"</h3>
                <div style="display: flex; flex-direction: column; gap: 12px;">
                    {record
                        .satellite_passes
                        .into_iter()
                        .map(|pass| view! {
                            <div style="display: flex; align-items: center; justify-content: space-between; padding: 12px; background: #eff6ff; border-radius: 8px;">
                                <div>
                                    <div style="font-weight: 500; color: #1e40af;">{pass.sensor}</div>
                                    <div style="font-size: 0.875rem; color: #2563eb;">
                                        {format!("{} - {}", format_day_first(&pass.captured_at), pass.description)}
                                    </div>
                                </div>
                                <button style="padding: 4px 10px; border: 1px solid #d1d5db; background: #fff; border-radius: 6px; font-size: 0.8rem;">
                                    "\u{1F4C4} Ver Detalhes"
                                </button>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

fn fact_card(
    title: &'static str,
    body: String,
    background: &'static str,
    color: &'static str,
) -> impl IntoView {
    view! {
        <div style=format!("padding: 12px; background: {background}; border-radius: 8px; color: {color};")>
            <div style="font-weight: 500; margin-bottom: 4px;">{title}</div>
            <div style="font-size: 0.875rem;">{body}</div>
        </div>
    }
}

fn bullet_card(title: &'static str, items: &'static [&'static str]) -> impl IntoView {
    view! {
        <div style="padding: 16px; background: #f9fafb; border-radius: 8px;">
            <div style="font-weight: 500; margin-bottom: 8px;">{title}</div>
            {items
                .iter()
                .map(|item| view! { <div style="font-size: 0.875rem; color: #374151;">{format!("\u{2022} {item}")}</div> })
                .collect_view()}
        </div>
    }
}

/// Focused map around the alert area with escape routes to the evacuation points.
#[component]
fn AlertDetailMap() -> impl IntoView {
    let area_style = format!(
        "position: absolute; left: {}%; top: {}%; width: {}%; height: {}%; border: 4px solid #ef4444; background: rgba(239,68,68,0.3); border-radius: 8px;",
        ALERT_AREA.x, ALERT_AREA.y, ALERT_AREA.width, ALERT_AREA.height
    );

    view! {
        <div style="position: relative; width: 100%; height: 100%; background: linear-gradient(135deg, #bbf7d0, #bfdbfe 55%, #e5e7eb);">
            <svg style="position: absolute; inset: 0; width: 100%; height: 100%;">
                <path d=DETAIL_RIVER_PATH stroke="#3b82f6" stroke-width="6" fill="none" opacity="0.8" />
            </svg>
            <div class="pulse" style=area_style>
                <div style="position: absolute; top: -32px; left: 50%; transform: translateX(-50%); font-size: 0.875rem; font-weight: 700; color: #b91c1c; background: #fff; padding: 4px 8px; border-radius: 4px; white-space: nowrap;">
                    "ZONA DE ALERTA"
                </div>
            </div>
            {FOCUSED_INFRASTRUCTURE
                .iter()
                .map(|point| {
                    let style = format!(
                        "position: absolute; left: {}%; top: {}%; width: 32px; height: 32px; background: #dc2626; border: 2px solid #fff; border-radius: 50%; display: flex; align-items: center; justify-content: center; cursor: pointer;",
                        point.position.x, point.position.y
                    );
                    view! { <div style=style title=point.name>{point.category.icon()}</div> }
                })
                .collect_view()}
            {EVACUATION_POINTS
                .iter()
                .map(|point| {
                    let style = format!(
                        "position: absolute; left: {}%; top: {}%; width: 24px; height: 24px; background: #16a34a; border: 2px solid #fff; border-radius: 50%; display: flex; align-items: center; justify-content: center; color: #fff; font-size: 0.7rem; cursor: pointer;",
                        point.position.x, point.position.y
                    );
                    view! { <div style=style title=point.name>"\u{1F465}"</div> }
                })
                .collect_view()}
            <svg style="position: absolute; inset: 0; width: 100%; height: 100%; pointer-events: none;">
                {evacuation_routes()
                    .iter()
                    .map(|route| view! {
                        <path
                            d=route_path(route)
                            stroke="#22c55e"
                            stroke-width="3"
                            stroke-dasharray="8,4"
                            fill="none"
                            opacity="0.8"
                        />
                    })
                    .collect_view()}
            </svg>
            <div style="position: absolute; bottom: 16px; left: 16px; background: #2563eb; color: #fff; padding: 8px 12px; border-radius: 8px; font-size: 0.875rem;">
                <div style="font-weight: 700;">{WATER_LEVEL_LABEL}</div>
                <div style="font-size: 0.75rem;">{WATER_TREND_LABEL}</div>
            </div>
            <div style="position: absolute; top: 16px; right: 16px; background: rgba(255,255,255,0.95); padding: 12px; border-radius: 8px; font-size: 0.75rem; display: flex; flex-direction: column; gap: 6px;">
                <div style="font-weight: 700; color: #1f2937;">"Legenda"</div>
                <div>"\u{1F534} Infraestrutura Crítica"</div>
                <div>"\u{1F7E2} Ponto de Evacuação"</div>
                <div>"\u{2504} Rota de Fuga"</div>
                <div>"\u{1F7E5} Zona de Alerta"</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::route_path;
    use rui_shared::detail::evacuation_routes;

    #[test]
    fn route_paths_are_percent_lines() {
        let routes = evacuation_routes();
        assert_eq!(route_path(&routes[0]), "M 55% 45% L 25% 25%");
        assert_eq!(route_path(&routes[1]), "M 70% 57.5% L 75% 20%");
    }
}
