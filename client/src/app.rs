use leptos::prelude::*;
use leptos_router::components::{A, Route, Router, Routes};
use leptos_router::path;

use std::cell::RefCell;

use rui_shared::navigation::DASHBOARD_PATH;
use rui_shared::status::FOOTER_TEXT;
use rui_shared::{DashboardState, LayerId, MapScene};

use crate::alert_details::AlertDetailsPage;
use crate::alert_timers;
use crate::hazard_map::HazardMap;
use crate::header::Header;
use crate::management::ManagementPage;
use crate::query;
use crate::side_panel::SidePanel;

struct TickIntervalBinding {
    window: web_sys::Window,
    interval_id: i32,
    _callback: wasm_bindgen::closure::Closure<dyn Fn()>,
}

thread_local! {
    static TICK_INTERVAL_BINDING: RefCell<Option<TickIntervalBinding>> = const { RefCell::new(None) };
}

/// Session state shared by every route. Lives for the whole mount so the
/// alert level and layers survive a trip to the detail screen and back.
#[derive(Clone, Copy)]
pub(crate) struct Dashboard(pub RwSignal<DashboardState>);
/// Derived map scene; recomputed only when layers or alert state change.
#[derive(Clone, Copy)]
pub(crate) struct Scene(pub Memo<MapScene>);
/// Epoch seconds, advanced once a minute for the header clock.
#[derive(Clone, Copy)]
pub(crate) struct Tick(pub RwSignal<i64>);

pub(crate) fn simulate_alert(dashboard: RwSignal<DashboardState>) {
    let now = alert_timers::now_ms();
    dashboard.update(|state| state.simulate_alert(now));
    let (level, simulated) =
        dashboard.with_untracked(|state| (state.alert.level(), state.alert.simulated()));
    web_sys::console::info_1(
        &format!("simulate alert: level={level} simulated={simulated}").into(),
    );
    alert_timers::sync(dashboard);
}

pub(crate) fn toggle_layer(dashboard: RwSignal<DashboardState>, layer: LayerId) {
    dashboard.update(|state| state.toggle_layer(layer));
}

#[component]
pub fn App() -> impl IntoView {
    let config = query::config_from_location();
    web_sys::console::info_1(
        &format!(
            "dashboard config: level={} layers={} reset={}ms flag={}ms",
            config.initial_alert_level,
            config.initial_layers.len(),
            config.timings.reset_after_ms,
            config.timings.flag_window_ms
        )
        .into(),
    );

    let dashboard: RwSignal<DashboardState> = RwSignal::new(DashboardState::new(&config));
    let scene = Memo::new(move |_| dashboard.with(DashboardState::scene));
    let tick: RwSignal<i64> = RwSignal::new(chrono::Utc::now().timestamp());

    provide_context(Dashboard(dashboard));
    provide_context(Scene(scene));
    provide_context(Tick(tick));

    // Minute tick for the "last update" clock
    Effect::new(move || {
        use wasm_bindgen::prelude::*;
        let Some(window) = web_sys::window() else {
            return;
        };

        TICK_INTERVAL_BINDING.with(|slot| {
            if let Some(old) = slot.borrow_mut().take() {
                old.window.clear_interval_with_handle(old.interval_id);
            }
        });

        let cb = Closure::<dyn Fn()>::new(move || {
            tick.try_set(chrono::Utc::now().timestamp());
        });
        let Ok(interval_id) = window.set_interval_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            60_000,
        ) else {
            return;
        };
        TICK_INTERVAL_BINDING.with(|slot| {
            *slot.borrow_mut() = Some(TickIntervalBinding {
                window: window.clone(),
                interval_id,
                _callback: cb,
            });
        });
    });

    on_cleanup(move || {
        alert_timers::teardown(dashboard);
        TICK_INTERVAL_BINDING.with(|slot| {
            if let Some(old) = slot.borrow_mut().take() {
                old.window.clear_interval_with_handle(old.interval_id);
            }
        });
    });

    view! {
        <Router>
            <Routes fallback=NotFound>
                <Route path=path!("/") view=DashboardPage />
                <Route path=path!("/alert/:alert_id") view=AlertDetailsPage />
                <Route path=path!("/management") view=ManagementPage />
            </Routes>
        </Router>
    }
}

#[component]
fn DashboardPage() -> impl IntoView {
    view! {
        <div style="min-height: 100vh; background: #f9fafb; display: flex; flex-direction: column;">
            <Header />
            <main style="flex: 1; display: flex; gap: 16px; padding: 16px;">
                <section style="flex: 1; min-height: 600px; background: #fff; border: 1px solid #e5e7eb; border-radius: 8px; padding: 8px;">
                    <HazardMap />
                </section>
                <aside style="width: 320px; flex-shrink: 0;">
                    <SidePanel />
                </aside>
            </main>
            <footer style="background: #1f2937; color: #fff; padding: 16px; text-align: center;">
                <p style="font-size: 0.875rem; margin: 0;">{FOOTER_TEXT}</p>
            </footer>
        </div>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div style="min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 12px;">
            <h1 style="font-size: 2rem; font-weight: 700;">"404"</h1>
            <p style="color: #6b7280;">"Página não encontrada"</p>
            <A href=DASHBOARD_PATH>"Voltar ao Painel"</A>
        </div>
    }
}
