use leptos::prelude::*;
use leptos_router::components::A;

use rui_shared::navigation::MANAGEMENT_PATH;
use rui_shared::time_format::format_clock;

use crate::app::Tick;

fn local_clock(epoch_secs: i64) -> String {
    chrono::DateTime::from_timestamp(epoch_secs, 0)
        .map(|at| format_clock(&at.with_timezone(&chrono::Local).naive_local()))
        .unwrap_or_default()
}

#[component]
pub fn Header() -> impl IntoView {
    let Tick(tick) = expect_context();

    view! {
        <header style="background: #fff; border-bottom: 1px solid #e5e7eb; box-shadow: 0 1px 2px rgba(0,0,0,0.05);">
            <div style="display: flex; align-items: center; justify-content: space-between; padding: 16px 24px;">
                <div style="display: flex; align-items: center; gap: 12px;">
                    <div style="display: flex; align-items: center; justify-content: center; width: 40px; height: 40px; background: #2563eb; border-radius: 8px; color: #fff;">
                        "\u{1F6E1}"
                    </div>
                    <div>
                        <h1 style="font-size: 1.25rem; font-weight: 700; color: #111827; margin: 0;">"RUI Platform"</h1>
                        <p style="font-size: 0.875rem; color: #6b7280; margin: 0;">"Resiliência Urbana Inteligente"</p>
                    </div>
                </div>
                <div style="display: flex; align-items: center; gap: 24px; font-size: 0.875rem; color: #4b5563;">
                    <div style="display: flex; align-items: center; gap: 8px;">
                        <span style="display: inline-block; width: 8px; height: 8px; border-radius: 50%; background: #22c55e;" />
                        <span>"Sistema Online"</span>
                    </div>
                    <A href=MANAGEMENT_PATH attr:style="display: flex; align-items: center; gap: 8px; padding: 8px 16px; color: #4b5563; border-radius: 8px; text-decoration: none;">
                        "\u{2699} Gerenciamento"
                    </A>
                    <span>"Última atualização: " {move || local_clock(tick.get())}</span>
                </div>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::local_clock;

    #[test]
    fn clock_is_hours_and_minutes() {
        let label = local_clock(1_736_433_000);
        assert_eq!(label.len(), 5);
        assert_eq!(label.as_bytes()[2], b':');
    }
}
