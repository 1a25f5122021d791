use leptos::prelude::*;

use super::themed;
use crate::clock::ClockSnapshot;
use crate::feed::LiveFeeds;
use crate::live_panel::{ClockKind, ClockRow, CoinRow, LivePanel, PanelLayout, Trend};
use crate::state::{PanelCloseSource, UiAction, UiState};

#[component]
pub fn DesktopPanel(
    #[prop(into)] ui: Signal<UiState>,
    #[prop(into)] snapshot: Signal<ClockSnapshot>,
    #[prop(into)] feeds: Signal<LiveFeeds>,
) -> impl IntoView {
    let panel = move || {
        LivePanel::build(
            &ui.get(),
            &snapshot.get(),
            &feeds.get(),
            PanelLayout::Desktop,
        )
    };
    let surface = themed(
        ui,
        "bg-gray-800/90 backdrop-blur-sm",
        "bg-white/90 backdrop-blur-sm shadow-lg",
    );

    view! {
        <div class=move || {
            format!(
                "hidden lg:block fixed top-6 left-6 z-40 p-4 rounded-lg transition-all duration-300 max-w-sm {}",
                surface(),
            )
        }>
            <h3 class="font-semibold mb-3 text-orange-500">
                {move || panel().heading}
            </h3>
            {move || view! { <PanelRows panel=panel() compact=false /> }}
        </div>
    }
}

#[component]
pub fn MobilePanel(
    ui: RwSignal<UiState>,
    #[prop(into)] snapshot: Signal<ClockSnapshot>,
    #[prop(into)] feeds: Signal<LiveFeeds>,
) -> impl IntoView {
    let is_open = move || ui.get().panel_open;
    let dispatch = move |action: UiAction| ui.update(|s| s.apply(action));
    let panel = move || {
        LivePanel::build(
            &ui.get(),
            &snapshot.get(),
            &feeds.get(),
            PanelLayout::Mobile,
        )
    };
    let surface = themed(
        ui.into(),
        "bg-gray-800/95 backdrop-blur-sm",
        "bg-white/95 backdrop-blur-sm shadow-lg",
    );
    let close_hover = themed(ui.into(), "hover:bg-gray-700", "hover:bg-gray-100");

    view! {
        <div class="lg:hidden">
            <div class=move || {
                format!(
                    "fixed top-6 left-4 z-50 transition-all duration-500 ease-in-out transform rounded-lg p-4 max-w-xs overflow-hidden {} {}",
                    if is_open() { "translate-x-0 opacity-100" } else { "-translate-x-full opacity-0" },
                    surface(),
                )
            }>
                <Show when=is_open>
                    <Sparks />
                </Show>
                <div class="flex items-center justify-between mb-3 relative z-10">
                    <h3 class="font-semibold text-orange-500 text-sm">
                        {move || panel().heading}
                    </h3>
                    <button
                        class=move || format!("p-1 rounded text-gray-400 {}", close_hover())
                        on:click=move |_| dispatch(UiAction::ClosePanel(PanelCloseSource::Button))
                    >
                        "‹"
                    </button>
                </div>
                {move || view! { <PanelRows panel=panel() compact=true /> }}
            </div>

            <Show when=move || !is_open()>
                <button
                    class="fixed top-20 left-4 z-40 p-3 rounded-full transition-all duration-300 hover:scale-110 animate-pulse shadow-lg shadow-orange-500/50 bg-gradient-to-r from-orange-500 to-red-500 hover:from-orange-600 hover:to-red-600 text-white"
                    on:click=move |_| dispatch(UiAction::OpenPanel)
                >
                    "⚡"
                </button>
            </Show>

            // click outside the panel closes it
            <Show when=is_open>
                <div
                    class="fixed inset-0 z-30 bg-black/20 lg:hidden"
                    on:click=move |_| dispatch(UiAction::ClosePanel(PanelCloseSource::Overlay))
                />
            </Show>
        </div>
    }
}

#[component]
fn Sparks() -> impl IntoView {
    view! {
        <div class="absolute top-2 left-2 w-1 h-1 bg-orange-400 rounded-full animate-ping"></div>
        <div class="absolute top-4 right-4 w-1 h-1 bg-orange-500 rounded-full animate-ping delay-100"></div>
        <div class="absolute bottom-3 left-6 w-1 h-1 bg-yellow-400 rounded-full animate-ping delay-200"></div>
        <div class="absolute bottom-2 right-2 w-1 h-1 bg-orange-300 rounded-full animate-ping delay-300"></div>
    }
}

#[component]
fn PanelRows(panel: LivePanel, compact: bool) -> impl IntoView {
    let LivePanel {
        clocks,
        weather,
        coins,
        ..
    } = panel;
    let row_class = if compact {
        "flex items-center gap-2 mb-2 text-xs relative z-10"
    } else {
        "flex items-center gap-2 mb-2 text-sm"
    };

    view! {
        {clocks
            .into_iter()
            .map(|row| view! { <ClockLine row row_class /> })
            .collect_view()}
        {weather
            .map(|w| {
                view! {
                    <div class=row_class title=w.details>
                        <span class="text-blue-400">"🌡"</span>
                        <span>{format!("{}: {}", w.place, w.temperature)}</span>
                        <span class="text-gray-400">"💨"</span>
                        <span>{w.wind}</span>
                    </div>
                }
            })}
        {coins
            .map(|coins| {
                view! {
                    <div class="space-y-1 text-xs relative z-10">
                        {coins.into_iter().map(|coin| view! { <CoinLine coin /> }).collect_view()}
                    </div>
                }
            })}
    }
}

#[component]
fn ClockLine(row: ClockRow, row_class: &'static str) -> impl IntoView {
    let icon_class = match row.kind {
        ClockKind::Owner => "text-orange-400",
        ClockKind::Viewer => "text-blue-400",
        ClockKind::Shared => "text-green-400",
    };
    view! {
        <div class=row_class>
            <span class=icon_class>"🕒"</span>
            <div class="flex flex-col">
                <span class="text-xs text-gray-400">{row.label}</span>
                <span>{row.time}</span>
            </div>
        </div>
    }
}

#[component]
fn CoinLine(coin: CoinRow) -> impl IntoView {
    let trend_class = match coin.trend {
        Trend::Up => "text-green-400",
        Trend::Down => "text-red-400",
    };
    view! {
        <div class="flex justify-between gap-2">
            <span>{coin.name}</span>
            <span class=trend_class>{format!("{} {}", coin.price, coin.change)}</span>
        </div>
    }
}
