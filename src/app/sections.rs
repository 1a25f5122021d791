use leptos::prelude::*;

use super::themed;
use crate::config::SITE;
use crate::content::{PROJECTS, SKILLS};
use crate::state::UiState;

const HEADING: &str = "text-4xl font-bold mb-12 text-center bg-gradient-to-r from-orange-500 to-yellow-400 bg-clip-text text-transparent";
const CARD_DARK: &str = "bg-gray-800 hover:bg-gray-700 border border-orange-500/20 hover:border-orange-500/40";
const CARD_LIGHT: &str = "bg-white hover:bg-gray-50 border border-orange-500/30 hover:border-orange-500/60 shadow-lg hover:shadow-xl";

#[component]
pub fn Hero(#[prop(into)] ui: Signal<UiState>) -> impl IntoView {
    let body_text = themed(ui, "text-gray-300", "text-gray-600");
    let github = themed(ui, CARD_DARK, CARD_LIGHT);
    let contact_text = themed(ui, "text-gray-900", "text-white");
    let chevron = themed(ui, "mx-auto text-gray-400", "mx-auto text-gray-600");

    view! {
        <section class="relative min-h-screen flex items-center justify-center md:pt-0">
            <div class="max-w-4xl mx-auto text-center z-20">
                <div class="mb-8 flex justify-center">
                    <img
                        src=SITE.logo_path
                        alt=SITE.logo_alt
                        class="w-32 h-32 md:w-40 md:h-40 object-contain hover:scale-105 transition-transform duration-300"
                    />
                </div>
                <h1 class="text-6xl md:text-8xl font-bold mb-6 bg-gradient-to-r from-red-500 via-orange-500 to-yellow-400 bg-clip-text text-transparent">
                    {SITE.owner_name}
                </h1>
                <p class=move || {
                    format!("text-xl md:text-2xl mb-8 max-w-3xl mx-auto leading-relaxed {}", body_text())
                }>{move || ui.get().content().title}</p>
                <div class="flex flex-wrap justify-center gap-6 mb-12">
                    <a
                        href=SITE.github_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class=move || {
                            format!(
                                "flex items-center gap-2 px-6 py-3 rounded-full transition-all duration-300 hover:scale-105 {}",
                                github(),
                            )
                        }
                    >
                        <i class="devicon-github-plain" />
                        "GitHub"
                    </a>
                    <a
                        href=SITE.linkedin_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex items-center gap-2 bg-gradient-to-r from-orange-500 to-red-500 hover:from-orange-600 hover:to-red-600 px-6 py-3 rounded-full transition-all duration-300 hover:scale-105 text-white"
                    >
                        <i class="devicon-linkedin-plain" />
                        "LinkedIn"
                    </a>
                    <a
                        href=SITE.mailto()
                        class=move || {
                            format!(
                                "flex items-center gap-2 bg-gradient-to-r from-yellow-500 to-orange-500 hover:from-yellow-600 hover:to-orange-600 px-6 py-3 rounded-full transition-all duration-300 hover:scale-105 font-medium {}",
                                contact_text(),
                            )
                        }
                    >
                        "✉ "
                        {move || ui.get().content().contact_button}
                    </a>
                </div>
                <div class="animate-bounce">
                    <div class=chevron>"⌄"</div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn About(#[prop(into)] ui: Signal<UiState>) -> impl IntoView {
    let body_text = themed(
        ui,
        "text-lg mb-6 leading-relaxed text-gray-300",
        "text-lg mb-6 leading-relaxed text-gray-600",
    );
    let accents = ["text-orange-500", "text-yellow-400", "text-red-500", "text-orange-400"];

    view! {
        <section class="py-20 px-4 relative z-20">
            <div class="max-w-4xl mx-auto">
                <h2 class=HEADING>{move || ui.get().content().about}</h2>
                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <div>
                        <p class=body_text>{move || ui.get().content().about_text1}</p>
                        <p class=body_text>{move || ui.get().content().about_text2}</p>
                        <p class=body_text>{move || ui.get().content().about_text3}</p>
                    </div>
                    <div class="space-y-6">
                        {move || {
                            ui.get()
                                .content()
                                .highlights()
                                .into_iter()
                                .zip(accents)
                                .map(|(label, accent)| {
                                    view! {
                                        <div class="flex items-center gap-4">
                                            <span class=accent>"◆"</span>
                                            <span class="text-lg">{label}</span>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Skills(#[prop(into)] ui: Signal<UiState>) -> impl IntoView {
    let band = themed(
        ui,
        "py-20 px-4 relative z-20 bg-gray-800/50",
        "py-20 px-4 relative z-20 bg-gray-100/50",
    );
    let card = themed(ui, CARD_DARK, CARD_LIGHT);
    let item_text = themed(ui, "text-gray-300", "text-gray-600");

    view! {
        <section class=band>
            <div class="max-w-6xl mx-auto">
                <h2 class=HEADING>{move || ui.get().content().skills}</h2>
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {SKILLS
                        .iter()
                        .map(|group| {
                            view! {
                                <div class=move || {
                                    format!(
                                        "p-6 rounded-lg hover:scale-105 transition-all duration-300 {}",
                                        card(),
                                    )
                                }>
                                    <h3 class="text-xl font-semibold mb-4 text-orange-400">
                                        {group.category}
                                    </h3>
                                    <ul class="space-y-2">
                                        {group
                                            .items
                                            .iter()
                                            .map(|skill| view! { <li class=item_text>{*skill}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Experience(#[prop(into)] ui: Signal<UiState>) -> impl IntoView {
    let card = themed(
        ui,
        "p-8 rounded-lg border transition-all duration-300 bg-gray-800/30 border-gray-700 hover:border-orange-500",
        "p-8 rounded-lg border transition-all duration-300 bg-white border-gray-200 hover:border-orange-500 shadow-lg hover:shadow-xl",
    );
    let period = themed(ui, "md:text-right text-gray-400", "md:text-right text-gray-500");
    let body_text = themed(ui, "mb-4 leading-relaxed text-gray-300", "mb-4 leading-relaxed text-gray-600");

    view! {
        <section class="py-20 px-4 relative z-20">
            <div class="max-w-4xl mx-auto">
                <h2 class=HEADING>{move || ui.get().content().experience}</h2>
                <div class="space-y-8">
                    {move || {
                        ui.get()
                            .content()
                            .experience_entries
                            .iter()
                            .map(|entry| {
                                view! {
                                    <div class=card>
                                        <div class="flex flex-col md:flex-row md:items-center md:justify-between mb-4">
                                            <h3 class="text-2xl font-semibold text-orange-400">
                                                {entry.title}
                                            </h3>
                                            <span class=period>{entry.period}</span>
                                        </div>
                                        <p class=body_text>{entry.description}</p>
                                        <div class="flex flex-wrap gap-2">
                                            {entry
                                                .highlights
                                                .iter()
                                                .map(|highlight| {
                                                    view! {
                                                        <span class="bg-gradient-to-r from-orange-500/20 to-red-500/20 border border-orange-500/30 px-3 py-1 rounded-full text-sm text-orange-300">
                                                            {*highlight}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Projects(#[prop(into)] ui: Signal<UiState>) -> impl IntoView {
    let band = themed(
        ui,
        "py-20 px-4 relative z-20 bg-gray-800/50",
        "py-20 px-4 relative z-20 bg-gray-100/50",
    );
    let card = themed(ui, CARD_DARK, CARD_LIGHT);
    let body_text = themed(ui, "mb-4 leading-relaxed text-gray-300", "mb-4 leading-relaxed text-gray-600");

    view! {
        <section class=band>
            <div class="max-w-6xl mx-auto">
                <h2 class=HEADING>{move || ui.get().content().projects}</h2>
                <div class="grid md:grid-cols-2 gap-8">
                    {PROJECTS
                        .iter()
                        .map(|project| {
                            let project = *project;
                            view! {
                                <div class=move || {
                                    format!(
                                        "p-6 rounded-lg transition-all duration-300 group hover:scale-105 {}",
                                        card(),
                                    )
                                }>
                                    <h3 class="text-xl font-semibold mb-3 text-orange-400 group-hover:text-orange-300">
                                        {move || project.title(ui.get().language)}
                                    </h3>
                                    <p class=body_text>
                                        {move || project.description(ui.get().language)}
                                    </p>
                                    <div class="flex flex-wrap gap-2">
                                        {project
                                            .tech
                                            .iter()
                                            .map(|tech| {
                                                view! {
                                                    <span class="bg-gradient-to-r from-red-500/20 to-orange-500/20 border border-red-500/30 px-3 py-1 rounded-full text-sm text-red-300">
                                                        {*tech}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Contact(#[prop(into)] ui: Signal<UiState>) -> impl IntoView {
    let body_text = themed(
        ui,
        "text-xl mb-12 max-w-2xl mx-auto text-gray-300",
        "text-xl mb-12 max-w-2xl mx-auto text-gray-600",
    );
    let github = themed(ui, CARD_DARK, CARD_LIGHT);

    view! {
        <section class="py-20 px-4 relative z-20">
            <div class="max-w-4xl mx-auto text-center">
                <h2 class="text-4xl font-bold mb-8 bg-gradient-to-r from-orange-500 to-yellow-400 bg-clip-text text-transparent">
                    {move || ui.get().content().contact}
                </h2>
                <p class=body_text>{move || ui.get().content().contact_text}</p>
                <div class="flex flex-wrap justify-center gap-6">
                    <a
                        href=SITE.github_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class=move || {
                            format!(
                                "flex items-center gap-2 px-8 py-4 rounded-full transition-all duration-300 hover:scale-105 {}",
                                github(),
                            )
                        }
                    >
                        <i class="devicon-github-plain" />
                        {move || ui.get().content().view_code}
                        " ↗"
                    </a>
                    <a
                        href=SITE.linkedin_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex items-center gap-2 bg-gradient-to-r from-orange-500 to-red-500 hover:from-orange-600 hover:to-red-600 px-8 py-4 rounded-full transition-all duration-300 hover:scale-105 text-white"
                    >
                        <i class="devicon-linkedin-plain" />
                        {move || ui.get().content().connect}
                        " ↗"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Footer(#[prop(into)] ui: Signal<UiState>) -> impl IntoView {
    let surface = themed(
        ui,
        "py-8 px-4 border-t relative z-20 bg-gray-900 border-gray-800",
        "py-8 px-4 border-t relative z-20 bg-gray-50 border-gray-200",
    );
    let text = themed(ui, "text-gray-400", "text-gray-600");

    view! {
        <footer class=surface>
            <div class="max-w-4xl mx-auto text-center">
                <p class=text>
                    {format!("© {} {}. ", SITE.build_year(), SITE.owner_name)}
                    {move || ui.get().content().footer}
                </p>
            </div>
        </footer>
    }
}
