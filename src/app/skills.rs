use leptos::prelude::*;

use crate::content::{SkillCategory, PRACTICES, SKILL_CATEGORIES};
use crate::nav::Section;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section
            id=Section::Skills.id()
            class="min-h-screen flex items-center py-20 px-4 bg-gray-900/50"
        >
            <div class="max-w-6xl mx-auto w-full">
                <h2 class="text-5xl md:text-6xl font-bold mb-16 text-center bg-gradient-to-r from-blue-400 to-cyan-400 bg-clip-text text-transparent">
                    "Compétences Techniques"
                </h2>
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6 mb-12">
                    {SKILL_CATEGORIES
                        .iter()
                        .map(|category| view! { <CategoryCard category /> })
                        .collect_view()}
                </div>
                <div class="grid md:grid-cols-3 gap-6">
                    {PRACTICES
                        .iter()
                        .map(|practice| {
                            view! {
                                <div class=format!(
                                    "bg-gray-800/50 p-6 rounded-2xl border {} text-center transition-all",
                                    practice.theme.border(),
                                )>
                                    <h4 class=format!(
                                        "text-lg font-bold mb-2 {}",
                                        practice.theme.text(),
                                    )>{practice.title}</h4>
                                    <p class="text-gray-300">{practice.items.join(" • ")}</p>
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
fn CategoryCard(category: &'static SkillCategory) -> impl IntoView {
    let theme = category.theme;
    view! {
        <div class=format!(
            "p-6 rounded-2xl border transition-all transform hover:scale-105 hover:shadow-2xl {}",
            theme.card(),
        )>
            <div class="flex items-center mb-4">
                <i class=format!("{} {} mr-3 text-2xl", category.icon.class(), theme.text()) />
                <h3 class="text-xl font-bold">{category.name}</h3>
            </div>
            <div class="flex flex-wrap gap-2">
                {category
                    .skills
                    .iter()
                    .map(|skill| {
                        view! {
                            <span class=format!(
                                "px-3 py-1 rounded-full text-sm transition-colors cursor-default {}",
                                theme.chip(),
                            )>{*skill}</span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
