use leptos::prelude::*;
use std::collections::HashMap;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

/// Page shown when the URL carries no `?active=` key
pub const DEFAULT_PAGE: &str = "d400_overview";

/// Width below which tables switch to the compact layout
pub const COMPACT_BREAKPOINT_PX: f64 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
    Compact,
    Wide,
}

impl Viewport {
    pub fn from_width(width: f64) -> Self {
        if width < COMPACT_BREAKPOINT_PX {
            Viewport::Compact
        } else {
            Viewport::Wide
        }
    }

    pub fn is_compact(&self) -> bool {
        matches!(self, Viewport::Compact)
    }
}

fn current_viewport() -> Viewport {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(Viewport::from_width)
        .unwrap_or(Viewport::Wide)
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<String>,
    pub left_open: RwSignal<bool>,
    pub viewport: RwSignal<Viewport>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        let viewport = current_viewport();
        Self {
            active: RwSignal::new(DEFAULT_PAGE.to_string()),
            // compact screens start with the sidebar folded away
            left_open: RwSignal::new(!viewport.is_compact()),
            viewport: RwSignal::new(viewport),
        }
    }

    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(active_key) = params.get("active").cloned() {
            self.open_page(&active_key);
        }

        let this = *self;
        Effect::new(move |_| {
            let active_key = this.active.get();
            let query_string =
                serde_qs::to_string(&HashMap::from([("active".to_string(), active_key)]))
                    .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    /// Keep `viewport` in sync with the window width
    pub fn init_viewport_tracking(&self) {
        let viewport = self.viewport;
        let Some(w) = window() else {
            return;
        };
        let on_resize = Closure::wrap(Box::new(move || {
            let next = current_viewport();
            if viewport.get_untracked() != next {
                log::debug!("viewport changed to {:?}", next);
                viewport.set(next);
            }
        }) as Box<dyn Fn()>);
        if w
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("failed to subscribe to window resize");
        }
        // The listener lives for the whole session
        on_resize.forget();
    }

    pub fn open_page(&self, key: &str) {
        leptos::logging::log!("open_page: key='{}'", key);
        if self.active.with_untracked(|active| active != key) {
            self.active.set(key.to_string());
        }
        if self.viewport.get_untracked().is_compact() {
            self.left_open.set(false);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_from_width() {
        assert_eq!(Viewport::from_width(375.0), Viewport::Compact);
        assert_eq!(Viewport::from_width(767.9), Viewport::Compact);
        assert_eq!(Viewport::from_width(768.0), Viewport::Wide);
        assert!(!Viewport::from_width(1440.0).is_compact());
    }
}
