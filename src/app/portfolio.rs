use leptos::{ev, prelude::*, task::spawn_local};
use leptos_meta::{Html, Title};

use super::feeds::ServerFeed;
use super::panels::{DesktopPanel, MobilePanel};
use super::sections::{About, Contact, Experience, Footer, Hero, Projects, Skills};
use super::spotlight::Spotlight;
use super::toggles::{LanguageToggle, ThemeToggle};
use crate::clock::{default_resolver, ClockService};
use crate::config::SITE;
use crate::feed::LiveFeeds;
use crate::lifecycle::Disposer;
use crate::pointer::PointerTracker;
use crate::state::UiState;

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let ui = RwSignal::new(UiState::default());
    let snapshot = RwSignal::new(ClockService::new(default_resolver()).now());
    let feeds = RwSignal::new(LiveFeeds::default());
    let pointer = RwSignal::new(PointerTracker::default());

    // clock tick, browser only
    Effect::new(move |_| {
        let clock = ClockService::new(default_resolver());
        snapshot.set(clock.now());
        match set_interval_with_handle(move || snapshot.set(clock.now()), SITE.clock_tick) {
            Ok(handle) => {
                let disposer = Disposer::new("clock tick", move || handle.clear());
                on_cleanup(move || {
                    disposer.dispose();
                });
            }
            Err(_) => log::warn!("couldn't start the clock tick"),
        }
    });

    Effect::new(move |_| {
        let handle = window_event_listener(ev::mousemove, move |ev| {
            pointer.update(|p| p.track(ev.client_x() as f64, ev.client_y() as f64));
        });
        let disposer = Disposer::new("pointer listener", move || handle.remove());
        on_cleanup(move || {
            disposer.dispose();
        });
    });

    // one-shot fetch on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let mut next = feeds.get_untracked();
            next.refresh(&ServerFeed).await;
            feeds.set(next);
        });
    });

    let theme_classes = move || {
        if ui.get().theme.is_dark() {
            "min-h-screen transition-all duration-500 relative overflow-hidden bg-gray-900 text-white"
        } else {
            "min-h-screen transition-all duration-500 relative overflow-hidden bg-gray-50 text-gray-900"
        }
    };

    view! {
        <Title text="Portfolio" />
        <Html attr:lang=move || ui.get().language.code() />
        <div class=theme_classes>
            <ThemeToggle ui />
            <LanguageToggle ui />
            <DesktopPanel ui snapshot feeds />
            <MobilePanel ui snapshot feeds />
            <Spotlight ui pointer />
            <Hero ui />
            <About ui />
            <Skills ui />
            <Experience ui />
            <Projects ui />
            <Contact ui />
            <Footer ui />
        </div>
    }
}
