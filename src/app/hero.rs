use leptos::prelude::*;

use crate::content::{Icon, HERO_BADGES, IDENTITY, STATS};
use crate::nav::{NavState, Section};

use super::avatar::Avatar;
use super::scroll_to_section;

#[component]
pub fn Hero() -> impl IntoView {
    let state = expect_context::<RwSignal<NavState>>();

    view! {
        <section
            id=Section::Home.id()
            class="min-h-screen flex items-center justify-center px-4 pt-20 relative overflow-hidden"
        >
            <div class="absolute inset-0 overflow-hidden">
                <div class="absolute w-96 h-96 -top-48 -left-48 bg-blue-500/10 rounded-full blur-3xl animate-pulse"></div>
                <div class="absolute w-96 h-96 -bottom-48 -right-48 bg-cyan-500/10 rounded-full blur-3xl animate-pulse [animation-delay:1s]"></div>
            </div>
            <div class=move || {
                if state.with(|s| s.loaded) {
                    "text-center max-w-4xl relative z-10 transition-all duration-1000 opacity-100 translate-y-0"
                } else {
                    "text-center max-w-4xl relative z-10 transition-all duration-1000 opacity-0 translate-y-10"
                }
            }>
                <div class="mb-8">
                    <Avatar />
                </div>
                <h1 class="text-6xl md:text-8xl font-bold mb-6 bg-gradient-to-r from-blue-400 via-cyan-400 to-blue-400 bg-clip-text text-transparent">
                    {IDENTITY.name}
                </h1>
                <p class="text-2xl md:text-3xl text-gray-300 mb-4 font-light">
                    {IDENTITY.role}
                    <span class="text-blue-400 font-semibold">{IDENTITY.role_highlight}</span>
                </p>
                <div class="flex flex-wrap gap-3 justify-center text-sm md:text-base mb-8">
                    {HERO_BADGES
                        .iter()
                        .map(|badge| {
                            view! {
                                <span class=format!(
                                    "px-4 py-2 border rounded-full {}",
                                    badge.theme.badge(),
                                )>{badge.label}</span>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="text-lg text-blue-400 mb-12 flex items-center justify-center gap-2">
                    <i class=Icon::GraduationCap.class() />
                    {IDENTITY.degree}
                </p>
                <div class="flex flex-wrap gap-4 justify-center mb-12">
                    <button
                        on:click=move |_| scroll_to_section(state, Section::Projects.id())
                        class="group bg-gradient-to-r from-blue-600 to-cyan-600 hover:from-blue-700 hover:to-cyan-700 px-8 py-4 rounded-full font-semibold transition-all transform hover:scale-105 shadow-xl shadow-blue-500/30 flex items-center gap-2"
                    >
                        "Voir mes projets"
                        <i class=format!(
                            "{} group-hover:translate-y-1 transition-transform",
                            Icon::ChevronDown.class(),
                        ) />
                    </button>
                    <button
                        on:click=move |_| scroll_to_section(state, Section::Contact.id())
                        class="border-2 border-blue-400 hover:bg-blue-400/10 px-8 py-4 rounded-full font-semibold transition-all hover:border-cyan-400 flex items-center gap-2"
                    >
                        <i class=Icon::Mail.class() />
                        "Me contacter"
                    </button>
                </div>
                <div class="grid grid-cols-3 gap-4 max-w-2xl mx-auto mb-12">
                    {STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class=format!(
                                    "bg-gray-800/30 backdrop-blur-sm p-4 rounded-xl border {}",
                                    stat.theme.border(),
                                )>
                                    <div class=format!(
                                        "text-3xl font-bold {}",
                                        stat.theme.text(),
                                    )>{stat.value}</div>
                                    <div class="text-sm text-gray-400">{stat.label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <button
                    on:click=move |_| scroll_to_section(state, Section::About.id())
                    class="animate-bounce hover:text-blue-400 transition-colors"
                    aria-label="Défiler vers la section suivante"
                >
                    <i class=format!("{} text-4xl text-blue-400", Icon::ChevronDown.class()) />
                </button>
            </div>
        </section>
    }
}
