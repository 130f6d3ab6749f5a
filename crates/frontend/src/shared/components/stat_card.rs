use crate::shared::components::number_format::format_thousands;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Plain counter tile for the dashboard header.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: Signal<String>,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Counter value (None = not loaded yet)
    #[prop(into)]
    value: Signal<Option<u64>>,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => format_thousands(v as f64),
        None => "—".to_string(),
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
            </div>
        </div>
    }
}
