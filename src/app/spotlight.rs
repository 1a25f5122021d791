use leptos::prelude::*;

use crate::pointer::{spotlight_background, PointerTracker};
use crate::state::UiState;

/// Decorative gradient that follows the pointer. Never intercepts clicks.
#[component]
pub fn Spotlight(
    #[prop(into)] ui: Signal<UiState>,
    #[prop(into)] pointer: Signal<PointerTracker>,
) -> impl IntoView {
    view! {
        <div
            class="fixed inset-0 pointer-events-none z-10"
            style:background=move || spotlight_background(pointer.get().position(), ui.get().theme)
        />
    }
}
