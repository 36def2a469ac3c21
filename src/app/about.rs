use leptos::prelude::*;

use crate::content::{
    Icon, TimelineEntry, APPRENTICESHIP, EDUCATION, EXPERIENCE, INTERNSHIP, PROFILE_CLOSING,
    PROFILE_SUMMARY,
};
use crate::nav::Section;
use crate::theme::Theme;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=Section::About.id() class="min-h-screen flex items-center py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-5xl md:text-6xl font-bold mb-16 text-center bg-gradient-to-r from-blue-400 to-cyan-400 bg-clip-text text-transparent">
                    "À propos de moi"
                </h2>
                <div class="grid md:grid-cols-2 gap-8 mb-8">
                    <Timeline
                        title="Formation"
                        icon=Icon::GraduationCap
                        theme=Theme::Blue
                        entries=EDUCATION
                    />
                    <Timeline
                        title="Expérience"
                        icon=Icon::Briefcase
                        theme=Theme::Cyan
                        entries=EXPERIENCE
                    />
                </div>
                <div class="relative bg-gradient-to-r from-blue-900/30 via-purple-900/30 to-cyan-900/30 backdrop-blur-sm p-10 rounded-3xl border border-blue-500/20 overflow-hidden">
                    <div class="absolute top-0 right-0 w-64 h-64 bg-blue-500/5 rounded-full blur-3xl"></div>
                    <div class="relative z-10 flex items-start gap-4">
                        <div class="text-4xl">"💡"</div>
                        <div>
                            <h4 class="text-2xl font-bold mb-4 text-blue-400">"Mon profil"</h4>
                            <p class="text-lg text-gray-300 leading-relaxed">
                                {PROFILE_SUMMARY}
                                <span class="text-blue-400 font-semibold">{INTERNSHIP}</span>
                                " et ouvert à "
                                <span class="text-cyan-400 font-semibold">{APPRENTICESHIP}</span>
                                {PROFILE_CLOSING}
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Timeline(
    title: &'static str,
    icon: Icon,
    theme: Theme,
    entries: &'static [TimelineEntry],
) -> impl IntoView {
    view! {
        <div class=format!(
            "bg-gradient-to-br from-gray-800/50 to-gray-900/50 backdrop-blur-sm p-8 rounded-3xl border {} transition-all transform hover:-translate-y-2 duration-300",
            theme.border(),
        )>
            <div class="flex items-center mb-6">
                <div class=format!("{} p-3 rounded-xl mr-4", theme.icon_tile(false))>
                    <i class=format!("{} {} text-3xl", icon.class(), theme.text()) />
                </div>
                <h3 class="text-2xl font-bold">{title}</h3>
            </div>
            <div class="space-y-6">
                {entries
                    .iter()
                    .map(|entry| {
                        view! {
                            <div class="relative pl-6 border-l-2 border-gray-500/30">
                                <p class=format!(
                                    "{} font-semibold text-lg",
                                    theme.text(),
                                )>{entry.title}</p>
                                <p class="text-gray-400">
                                    {format!("{} | {}", entry.place, entry.period)}
                                </p>
                                {entry
                                    .detail
                                    .map(|detail| {
                                        view! { <p class="text-sm text-gray-500 mt-2">{detail}</p> }
                                    })}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
