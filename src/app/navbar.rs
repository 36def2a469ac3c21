use leptos::prelude::*;

use crate::content::{Icon, IDENTITY};
use crate::nav::{NavState, Section};

use super::scroll_to_section;

#[component]
pub fn NavBar() -> impl IntoView {
    let state = expect_context::<RwSignal<NavState>>();
    let menu_open = move || state.with(|s| s.menu_open);

    view! {
        <nav class=move || {
            if state.with(|s| s.scrolled) {
                "fixed w-full z-50 transition-all duration-300 bg-gray-900/95 backdrop-blur-md shadow-2xl border-b border-blue-500/20"
            } else {
                "fixed w-full z-50 transition-all duration-300 bg-transparent border-b border-blue-500/20"
            }
        }>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-20">
                    <button
                        on:click=move |_| scroll_to_section(state, Section::Home.id())
                        class="text-2xl font-bold bg-gradient-to-r from-blue-400 to-cyan-400 bg-clip-text text-transparent hover:scale-110 transition-transform"
                    >
                        {IDENTITY.short_name}
                    </button>
                    <div class="hidden md:flex space-x-8">
                        {Section::ALL
                            .into_iter()
                            .map(|section| view! { <DesktopEntry section /> })
                            .collect_view()}
                    </div>
                    <button
                        class="md:hidden hover:bg-gray-800 p-2 rounded-lg transition-colors"
                        aria-label="Menu"
                        on:click=move |_| state.update(NavState::toggle_menu)
                    >
                        <i class=move || {
                            if menu_open() { Icon::Close.class() } else { Icon::Menu.class() }
                        } />
                    </button>
                </div>
            </div>
            <Show when=menu_open>
                <div class="md:hidden bg-gray-900/98 backdrop-blur-lg border-t border-blue-500/20">
                    <div class="px-4 pt-4 pb-6 space-y-2">
                        {Section::ALL
                            .into_iter()
                            .map(|section| view! { <MobileEntry section /> })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </nav>
    }
}

#[component]
fn DesktopEntry(section: Section) -> impl IntoView {
    let state = expect_context::<RwSignal<NavState>>();
    let active = move || state.with(|s| s.is_active(section));

    view! {
        <button
            on:click=move |_| scroll_to_section(state, section.id())
            class=move || {
                if active() {
                    "capitalize hover:text-blue-400 transition-all relative group text-blue-400"
                } else {
                    "capitalize hover:text-blue-400 transition-all relative group"
                }
            }
        >
            {section.label()}
            <span class=move || {
                if active() {
                    "absolute -bottom-1 left-0 w-full h-0.5 bg-blue-400 transform transition-transform scale-x-100"
                } else {
                    "absolute -bottom-1 left-0 w-full h-0.5 bg-blue-400 transform transition-transform scale-x-0 group-hover:scale-x-100"
                }
            }></span>
        </button>
    }
}

#[component]
fn MobileEntry(section: Section) -> impl IntoView {
    let state = expect_context::<RwSignal<NavState>>();

    view! {
        <button
            on:click=move |_| scroll_to_section(state, section.id())
            class=move || {
                if state.with(|s| s.is_active(section)) {
                    "block w-full text-left px-4 py-3 hover:bg-gray-800 rounded-lg capitalize transition-all bg-blue-900/30 text-blue-400"
                } else {
                    "block w-full text-left px-4 py-3 hover:bg-gray-800 rounded-lg capitalize transition-all"
                }
            }
        >
            {section.label()}
        </button>
    }
}
