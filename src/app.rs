mod about;
mod avatar;
mod contact;
mod footer;
mod hero;
mod navbar;
mod projects;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{FAVICON, IDENTITY};
use crate::nav::{NavState, Section};
#[cfg(feature = "hydrate")]
use crate::nav::{ScrollConfig, SectionBounds};

use about::About;
use contact::Contact;
use footer::Footer;
use hero::Hero;
use navbar::NavBar;
use projects::Projects;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="fr">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="icon" type="image/svg+xml" href=FAVICON />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/moctar-portfolio.css" />
                <MetaTags />
            </head>
            <body class="scroll-smooth">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title text=IDENTITY.name />
        <Meta name="description" content="Portfolio de Moctar Cherif Bichara, développeur Full-Stack" />

        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=Portfolio />
            </Routes>
        </Router>
    }
}

/// The whole one-page site. Owns the navigation state shared by every region.
#[component]
fn Portfolio() -> impl IntoView {
    let state = RwSignal::new(NavState::default());
    provide_context(state);

    #[cfg(feature = "hydrate")]
    {
        let config = ScrollConfig::DEFAULT;
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            track_scroll(state, &config);
        });
        on_cleanup(move || handle.remove());
    }

    // effects only run in the browser, so this flips once hydration is done
    Effect::new(move |_| state.update(NavState::mark_loaded));

    view! {
        <div class="min-h-screen bg-gradient-to-br from-gray-900 via-blue-900 to-gray-900 text-white">
            <NavBar />
            <Hero />
            <About />
            <Skills />
            <Projects />
            <Contact />
            <Footer />
        </div>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Title text="Page introuvable" />
        <div class="min-h-screen flex flex-col items-center justify-center bg-gray-900 text-white gap-6">
            <h1 class="text-4xl font-bold text-blue-400">"404"</h1>
            <a href="/" class="text-cyan-400 hover:text-cyan-300">
                "Retour à l'accueil"
            </a>
        </div>
    }
}

/// Recomputes the scroll-derived part of `NavState` from the live page layout.
#[cfg(feature = "hydrate")]
fn track_scroll(state: RwSignal<NavState>, config: &ScrollConfig) {
    let offset_y = window().scroll_y().unwrap_or_default();
    let doc = document();
    let locate = |section: Section| {
        doc.get_element_by_id(section.id()).map(|el| {
            let rect = el.get_bounding_client_rect();
            SectionBounds {
                top: rect.top(),
                bottom: rect.bottom(),
            }
        })
    };

    let mut next = state.get_untracked();
    next.on_scroll(offset_y, config, locate);
    // skip notifying subscribers when nothing changed
    if next != state.get_untracked() {
        state.set(next);
    }
}

/// Smooth-scrolls to the section with anchor `id` and marks it active.
/// Unknown ids and missing anchors leave the state untouched.
pub fn scroll_to_section(state: RwSignal<NavState>, id: &str) {
    let mut next = state.get_untracked();
    match next.request(id, scroll_into_view) {
        Ok(Some(_)) => state.set(next),
        Ok(None) => log::debug!("no anchor for section {id}"),
        Err(e) => log::debug!("ignoring navigation request: {e}"),
    }
}

#[cfg(feature = "hydrate")]
fn scroll_into_view(section: Section) -> bool {
    let Some(el) = document().get_element_by_id(section.id()) else {
        return false;
    };
    let opts = web_sys::ScrollIntoViewOptions::new();
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
    true
}

#[cfg(not(feature = "hydrate"))]
fn scroll_into_view(_section: Section) -> bool {
    // nothing to scroll while rendering on the server
    false
}
