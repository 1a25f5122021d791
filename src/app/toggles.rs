use leptos::prelude::*;

use super::themed;
use crate::state::{UiAction, UiState};

#[component]
pub fn ThemeToggle(ui: RwSignal<UiState>) -> impl IntoView {
    let colors = themed(
        ui.into(),
        "bg-gray-800 hover:bg-gray-700 text-yellow-400",
        "bg-white hover:bg-gray-100 text-gray-800 shadow-lg",
    );
    view! {
        <button
            class=move || {
                format!(
                    "fixed top-6 right-6 z-50 p-3 rounded-full transition-all duration-300 hover:scale-110 text-xl leading-none {}",
                    colors(),
                )
            }
            on:click=move |_| ui.update(|s| s.apply(UiAction::ToggleTheme))
        >
            {move || if ui.get().theme.is_dark() { "☀" } else { "☾" }}
        </button>
    }
}

#[component]
pub fn LanguageToggle(ui: RwSignal<UiState>) -> impl IntoView {
    let colors = themed(
        ui.into(),
        "bg-gray-800 hover:bg-gray-700 text-blue-400",
        "bg-white hover:bg-gray-100 text-gray-800 shadow-lg",
    );
    view! {
        <button
            class=move || {
                format!(
                    "fixed top-20 right-6 z-50 p-3 rounded-full transition-all duration-300 hover:scale-110 text-lg leading-none {}",
                    colors(),
                )
            }
            on:click=move |_| ui.update(|s| s.apply(UiAction::ToggleLanguage))
        >
            "🌐"
            <span class="absolute -bottom-1 -right-1 text-xs font-bold bg-orange-500 text-white rounded-full w-5 h-5 flex items-center justify-center">
                {move || ui.get().language.badge()}
            </span>
        </button>
    }
}
