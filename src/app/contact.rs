use leptos::{either::Either, prelude::*};

use crate::content::{
    ContactMethod, ContactTarget, AVAILABILITY, AVAILABILITY_DETAIL, CONTACT_METHODS, LINKEDIN,
};
use crate::nav::Section;

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section
            id=Section::Contact.id()
            class="min-h-screen flex items-center py-20 px-4 bg-gray-900/50"
        >
            <div class="max-w-4xl mx-auto w-full">
                <h2 class="text-5xl md:text-6xl font-bold mb-16 text-center bg-gradient-to-r from-blue-400 to-cyan-400 bg-clip-text text-transparent">
                    "Contactez-moi"
                </h2>
                <div class="bg-gradient-to-br from-gray-800/80 to-gray-900/80 backdrop-blur-sm p-8 md:p-12 rounded-3xl border border-blue-500/20">
                    <div class="grid md:grid-cols-2 gap-6 mb-8">
                        {CONTACT_METHODS
                            .iter()
                            .map(|method| view! { <ContactCard method /> })
                            .collect_view()}
                        <ContactCard method=&LINKEDIN wide=true />
                    </div>
                    <div class="text-center pt-8 border-t border-blue-500/20">
                        <p class="text-xl text-blue-400 font-semibold mb-2">{AVAILABILITY}</p>
                        <p class="text-gray-300">{AVAILABILITY_DETAIL}</p>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// A contact entry: a link for reachable methods, a plain label otherwise.
#[component]
fn ContactCard(method: &'static ContactMethod, #[prop(optional)] wide: bool) -> impl IntoView {
    let theme = method.theme;
    let span = if wide { " col-span-full" } else { "" };
    let body = move |linked: bool| {
        view! {
            <div class=format!(
                "{} p-3 rounded-xl mr-4 transition-colors",
                theme.icon_tile(linked),
            )>
                <i class=format!(
                    "{} {} text-3xl group-hover:scale-110 transition-transform",
                    method.icon.class(),
                    theme.text(),
                ) />
            </div>
            <div>
                <p class="text-sm text-gray-400 mb-1">{method.label}</p>
                <p class="text-white font-semibold break-all">{method.value}</p>
            </div>
        }
    };

    match method.target {
        ContactTarget::Link(href) => {
            let new_tab = method.target.opens_new_tab();
            Either::Left(view! {
                <a
                    href=href
                    target=new_tab.then_some("_blank")
                    rel=new_tab.then_some("noopener noreferrer")
                    class=format!(
                        "flex items-center p-5 rounded-2xl transition-all group hover:scale-105 {}{}",
                        theme.tile(true),
                        span,
                    )
                >
                    {body(true)}
                </a>
            })
        }
        ContactTarget::DisplayOnly => Either::Right(view! {
            <div class=format!(
                "flex items-center p-5 rounded-2xl {}{}",
                theme.tile(false),
                span,
            )>{body(false)}</div>
        }),
    }
}
