use rui_shared::DashboardConfig;

/// Session config from a `?alert_level=attention&layers=inundacao` query
/// string. Values are decoded by the browser, so `%2C` and `+` arrive as
/// `,` and a space.
pub fn config_from_search(search: &str) -> DashboardConfig {
    match web_sys::UrlSearchParams::new_with_str(search) {
        Ok(params) => DashboardConfig::from_lookup(|key| params.get(key)),
        Err(_) => {
            web_sys::console::warn_1(&format!("unreadable query string {search:?}").into());
            DashboardConfig::default()
        }
    }
}

/// Session config from the page URL.
pub fn config_from_location() -> DashboardConfig {
    let search = web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default();
    config_from_search(&search)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::config_from_search;
    use rui_shared::{AlertLevel, LayerId};
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn encoded_comma_still_separates_layers() {
        let config = config_from_search("?layers=inundacao%2Chidrografia&alert_level=attention");
        assert_eq!(
            config.initial_layers.iter().collect::<Vec<_>>(),
            vec![LayerId::Inundacao, LayerId::Hidrografia]
        );
        assert_eq!(config.initial_alert_level, AlertLevel::Attention);
    }

    #[wasm_bindgen_test]
    fn plus_and_percent_escapes_decode() {
        let config = config_from_search("alert_level=%61lert&alert_reset_ms=+7000");
        assert_eq!(config.initial_alert_level, AlertLevel::Alert);
        assert_eq!(config.timings.reset_after_ms, 7000.0);
    }

    #[wasm_bindgen_test]
    fn empty_query_keeps_defaults() {
        let config = config_from_search("");
        assert_eq!(config.initial_alert_level, AlertLevel::Normal);
        assert_eq!(
            config.initial_layers.iter().collect::<Vec<_>>(),
            vec![LayerId::Inundacao, LayerId::Infraestrutura]
        );
    }
}
