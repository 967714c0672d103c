//! Dismissible success/error notices

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Success(text) | Notice::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }

    fn class(&self) -> &'static str {
        match self {
            Notice::Success(_) => "alert alert--success",
            Notice::Error(_) => "alert alert--error",
        }
    }
}

/// Run `f` once after `ms` milliseconds
pub fn run_after(ms: u32, f: impl FnOnce() + 'static) {
    spawn_local(async move {
        TimeoutFuture::new(ms).await;
        f();
    });
}

#[component]
pub fn NoticeBanner(
    #[prop(into)] notice: Signal<Option<Notice>>,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    move || {
        notice.get().map(|n| {
            view! {
                <div class=n.class() role="alert">
                    <span>{n.text().to_string()}</span>
                    <button class="alert__close" title="Dismiss" on:click=move |_| on_dismiss.run(())>
                        "×"
                    </button>
                </div>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_kind() {
        let ok = Notice::Success("Saved".into());
        let err = Notice::Error("Network error: offline".into());
        assert!(!ok.is_error());
        assert!(err.is_error());
        assert_eq!(err.text(), "Network error: offline");
        assert_eq!(ok.class(), "alert alert--success");
    }
}
