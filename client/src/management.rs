use leptos::prelude::*;
use leptos_router::components::A;
use wasm_bindgen::JsCast;

use rui_shared::management::{
    ALERT_STATS, HistoryEntry, ManagementSection, MonitoredArea, StatusTone, ThresholdKind,
    Thresholds, bar_heights, event_history, monitored_areas,
};
use rui_shared::navigation::DASHBOARD_PATH;
use rui_shared::time_format::format_iso_minutes;

use crate::header::Header;

const CARD_STYLE: &str = "background: #fff; border: 1px solid #e5e7eb; border-radius: 8px; padding: 20px; display: flex; flex-direction: column; gap: 16px;";
const CARD_TITLE_STYLE: &str = "font-size: 1.125rem; font-weight: 600; margin: 0;";
const OUTLINE_BUTTON_STYLE: &str = "padding: 6px 12px; border: 1px solid #d1d5db; background: #fff; border-radius: 6px; font-size: 0.85rem; cursor: pointer;";

fn tone_style(tone: StatusTone) -> String {
    let (text, background, border) = tone.colors();
    format!(
        "padding: 2px 8px; border-radius: 9999px; font-size: 0.75rem; font-weight: 500; color: {text}; background: {background}; border: 1px solid {border};"
    )
}

#[component]
pub fn ManagementPage() -> impl IntoView {
    let section = RwSignal::new(ManagementSection::default());
    let thresholds = RwSignal::new(Thresholds::default());

    view! {
        <div style="min-height: 100vh; background: #f9fafb; display: flex; flex-direction: column;">
            <Header />
            <div style="background: #fff; border-bottom: 1px solid #e5e7eb; padding: 16px 24px; display: flex; align-items: center; gap: 16px;">
                <A href=DASHBOARD_PATH attr:style="color: #4b5563; text-decoration: none;">"\u{2190} Voltar para Dashboard"</A>
                <div style="width: 1px; height: 16px; background: #d1d5db;" />
                <h1 style="font-size: 1.25rem; font-weight: 600; color: #111827; margin: 0;">"Configurações e Gerenciamento"</h1>
            </div>
            <div style="flex: 1; display: flex;">
                <nav style="width: 256px; background: #fff; border-right: 1px solid #e5e7eb; padding: 16px; display: flex; flex-direction: column; gap: 8px;">
                    {ManagementSection::ALL
                        .into_iter()
                        .map(|item| {
                            let style = move || {
                                if section.get() == item {
                                    "width: 100%; display: flex; align-items: center; gap: 12px; padding: 8px 12px; border-radius: 8px; text-align: left; background: #eff6ff; color: #1d4ed8; border: 1px solid #bfdbfe; cursor: pointer;"
                                } else {
                                    "width: 100%; display: flex; align-items: center; gap: 12px; padding: 8px 12px; border-radius: 8px; text-align: left; background: transparent; color: #374151; border: 1px solid transparent; cursor: pointer;"
                                }
                            };
                            view! {
                                <button style=style on:click=move |_| section.set(item)>
                                    <span>{item.icon()}</span>
                                    {item.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
                <div style="flex: 1; padding: 24px;">
                    {move || match section.get() {
                        ManagementSection::Alerts => thresholds_section(thresholds).into_any(),
                        ManagementSection::Areas => areas_section(monitored_areas()).into_any(),
                        ManagementSection::Reports => reports_section().into_any(),
                        ManagementSection::History => history_section(event_history()).into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}

fn thresholds_section(thresholds: RwSignal<Thresholds>) -> impl IntoView {
    view! {
        <div style=CARD_STYLE>
            <h2 style=CARD_TITLE_STYLE>"\u{2699} Gerenciamento de Limiares de Alerta"</h2>
            <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 24px;">
                {threshold_input(thresholds, ThresholdKind::Precipitation, "precipitation")}
                {threshold_input(thresholds, ThresholdKind::SoilMoisture, "soilMoisture")}
            </div>
            <div style="padding-top: 16px; border-top: 1px solid #e5e7eb;">
                <p style="font-size: 0.875rem; color: #4b5563; margin: 0;">
                    "Os limiares acima são utilizados para acionar alertas automáticos baseados nos dados coletados pelos sensores e modelos de IA."
                </p>
            </div>
        </div>
    }
}

fn apply_threshold_input(
    current: Thresholds,
    kind: ThresholdKind,
    raw: &str,
) -> Result<Thresholds, String> {
    let mut next = current;
    next.set_from_input(kind, raw)?;
    Ok(next)
}

fn threshold_input(
    thresholds: RwSignal<Thresholds>,
    kind: ThresholdKind,
    id: &'static str,
) -> impl IntoView {
    let on_input = move |e: leptos::ev::Event| {
        let Some(target) = e.target() else {
            return;
        };
        let Ok(input) = target.dyn_into::<web_sys::HtmlInputElement>() else {
            return;
        };
        // Rejected text stays in the field; the signal only moves on a valid number.
        match apply_threshold_input(thresholds.get_untracked(), kind, &input.value()) {
            Ok(next) => thresholds.set(next),
            Err(err) => web_sys::console::warn_1(&err.into()),
        }
    };

    view! {
        <div style="display: flex; flex-direction: column; gap: 8px;">
            <label for=id style="font-size: 0.875rem; font-weight: 500;">{kind.label()}</label>
            <div style="display: flex; align-items: center; gap: 8px;">
                <input
                    id=id
                    type="number"
                    style="flex: 1; padding: 6px 10px; border: 1px solid #d1d5db; border-radius: 6px;"
                    prop:value=move || thresholds.with(|t| t.get(kind).to_string())
                    on:input=on_input
                />
                <span style="font-size: 0.875rem; color: #6b7280;">{kind.unit()}</span>
                <button style=OUTLINE_BUTTON_STYLE>"\u{270E} Alterar"</button>
            </div>
        </div>
    }
}

fn areas_section(areas: Vec<MonitoredArea>) -> impl IntoView {
    view! {
        <div style=CARD_STYLE>
            <div style="display: flex; align-items: center; justify-content: space-between;">
                <h2 style=CARD_TITLE_STYLE>"\u{1F4CD} Áreas Monitoradas"</h2>
                <button style="padding: 8px 14px; background: #0f172a; color: #fff; border: none; border-radius: 6px; cursor: pointer;">
                    "+ Adicionar Nova Área"
                </button>
            </div>
            <table style="width: 100%; border-collapse: collapse; font-size: 0.875rem;">
                <thead>
                    <tr style="text-align: left; color: #6b7280; border-bottom: 1px solid #e5e7eb;">
                        <th style="padding: 8px;">"Área"</th>
                        <th style="padding: 8px;">"Cidade"</th>
                        <th style="padding: 8px;">"Status"</th>
                        <th style="padding: 8px;">"Última Atualização"</th>
                        <th style="padding: 8px;">"Ações"</th>
                    </tr>
                </thead>
                <tbody>
                    {areas
                        .into_iter()
                        .map(|area| view! {
                            <tr style="border-bottom: 1px solid #f3f4f6;">
                                <td style="padding: 8px; font-weight: 500;">{area.name}</td>
                                <td style="padding: 8px;">{area.city}</td>
                                <td style="padding: 8px;">
                                    <span style=tone_style(area.status.tone())>{area.status.label()}</span>
                                </td>
                                <td style="padding: 8px; color: #6b7280;">{format_iso_minutes(&area.last_update)}</td>
                                <td style="padding: 8px;">
                                    <button style=OUTLINE_BUTTON_STYLE>"\u{270E}"</button>
                                </td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

fn reports_section() -> impl IntoView {
    let heights = bar_heights(&ALERT_STATS);

    view! {
        <div style=CARD_STYLE>
            <h2 style=CARD_TITLE_STYLE>"\u{1F4C4} Relatórios de Eventos"</h2>
            <h3 style="font-size: 1.05rem; font-weight: 600; margin: 0;">
                "Frequência de Alertas por Mês (Último Semestre)"
            </h3>
            <div style="display: flex; align-items: flex-end; gap: 16px; height: 160px; border-bottom: 1px solid #e5e7eb; border-left: 1px solid #e5e7eb; padding: 0 0 16px 16px;">
                {ALERT_STATS
                    .iter()
                    .zip(heights)
                    .map(|(stat, height)| view! {
                        <div style="display: flex; flex-direction: column; align-items: center; gap: 8px;">
                            <div style=format!("width: 32px; height: {height}px; background: #3b82f6; border-radius: 4px 4px 0 0;") />
                            <span style="font-size: 0.875rem; color: #4b5563;">{stat.month}</span>
                            <span style="font-size: 0.75rem; font-weight: 500;">{stat.alerts}</span>
                        </div>
                    })
                    .collect_view()}
            </div>
            <div style="display: flex; gap: 16px;">
                <button style="padding: 8px 14px; background: #0f172a; color: #fff; border: none; border-radius: 6px; cursor: pointer;">
                    "\u{2B07} Gerar Relatório Completo de Eventos"
                </button>
                <button style=OUTLINE_BUTTON_STYLE>"\u{1F4C4} Exportar Dados Históricos"</button>
            </div>
        </div>
    }
}

fn history_section(history: Vec<HistoryEntry>) -> impl IntoView {
    view! {
        <div style=CARD_STYLE>
            <h2 style=CARD_TITLE_STYLE>"\u{1F552} Histórico de Eventos"</h2>
            {history
                .into_iter()
                .map(|entry| {
                    let (text, background, _) = entry.tone.colors();
                    view! {
                        <div style="padding: 16px; border: 1px solid #e5e7eb; border-radius: 8px;">
                            <div style="display: flex; justify-content: space-between; align-items: flex-start; margin-bottom: 8px;">
                                <h4 style="font-weight: 600; margin: 0;">{entry.title}</h4>
                                <span style="font-size: 0.875rem; color: #6b7280;">{format_iso_minutes(&entry.at)}</span>
                            </div>
                            <p style="font-size: 0.875rem; color: #4b5563; margin: 0 0 8px 0;">{entry.summary}</p>
                            <span style=format!("font-size: 0.75rem; padding: 2px 8px; border-radius: 4px; color: {text}; background: {background};")>
                                {entry.outcome}
                            </span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
