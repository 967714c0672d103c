use crate::shared::icons::icon;
use contracts::domain::common::StatusTone;
use leptos::prelude::*;

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Already formatted value; `None` renders a dash
    #[prop(into)]
    value: Signal<Option<String>>,
    #[prop(optional)] tone: Option<StatusTone>,
) -> impl IntoView {
    let class = match tone {
        Some(StatusTone::Success) => "stat-card stat-card--success",
        Some(StatusTone::Error) => "stat-card stat-card--error",
        Some(StatusTone::Warning) => "stat-card stat-card--warning",
        _ => "stat-card",
    };

    view! {
        <div class=class>
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {move || value.get().unwrap_or_else(|| "-".to_string())}
                </div>
            </div>
        </div>
    }
}
