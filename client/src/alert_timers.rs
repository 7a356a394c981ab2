//! Browser side of the alert state machine's deferred tasks.
//!
//! The core keeps the authoritative deadlines. After every transition
//! [`sync`] mirrors them onto one browser timeout per [`TimerKey`]; a
//! timeout whose generation no longer matches is stale and does nothing.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use rui_shared::{DashboardState, TimerKey};

struct ArmedTimer {
    deadline: f64,
    generation: u64,
}

thread_local! {
    static ARMED_TIMERS: RefCell<HashMap<TimerKey, ArmedTimer>> = RefCell::new(HashMap::new());
    static NEXT_GENERATION: Cell<u64> = const { Cell::new(0) };
}

pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

fn next_generation() -> u64 {
    NEXT_GENERATION.with(|next| {
        let generation = next.get().wrapping_add(1);
        next.set(generation);
        generation
    })
}

/// Re-arm, keep or cancel browser timeouts so they match the pending tasks.
pub fn sync(dashboard: RwSignal<DashboardState>) {
    let Some(pending) = dashboard.try_with_untracked(|state| state.alert.pending_timers()) else {
        clear_all();
        return;
    };

    for key in TimerKey::ALL {
        let deadline = pending
            .iter()
            .find(|(pending_key, _)| *pending_key == key)
            .map(|(_, deadline)| *deadline);

        let to_spawn = ARMED_TIMERS.with(|slot| {
            let mut armed = slot.borrow_mut();
            match deadline {
                None => {
                    armed.remove(&key);
                    None
                }
                Some(deadline) => {
                    if armed.get(&key).is_some_and(|timer| timer.deadline == deadline) {
                        return None;
                    }
                    let generation = next_generation();
                    armed.insert(
                        key,
                        ArmedTimer {
                            deadline,
                            generation,
                        },
                    );
                    Some((deadline, generation))
                }
            }
        });

        if let Some((deadline, generation)) = to_spawn {
            let delay_ms = (deadline - now_ms()).max(0.0).ceil() as u32;
            spawn_local(async move {
                TimeoutFuture::new(delay_ms).await;
                fire(dashboard, key, generation);
            });
        }
    }
}

fn fire(dashboard: RwSignal<DashboardState>, key: TimerKey, generation: u64) {
    let current = ARMED_TIMERS.with(|slot| {
        let mut armed = slot.borrow_mut();
        if armed.get(&key).is_some_and(|timer| timer.generation == generation) {
            armed.remove(&key);
            true
        } else {
            false
        }
    });
    if !current {
        return;
    }

    let now = now_ms();
    let fired = dashboard
        .try_update(|state| state.advance_to(now))
        .unwrap_or_default();
    for fired_key in fired {
        web_sys::console::info_1(&format!("alert timer fired: {}", fired_key.name()).into());
    }
    // A timeout that woke a little early leaves its task pending; sync re-arms it.
    sync(dashboard);
}

/// Forget every armed timeout. Outstanding futures become stale.
pub fn clear_all() {
    ARMED_TIMERS.with(|slot| slot.borrow_mut().clear());
}

/// Session teardown: drop the core's pending tasks and the browser timeouts.
pub fn teardown(dashboard: RwSignal<DashboardState>) {
    dashboard.try_update(|state| state.alert.teardown());
    clear_all();
}
