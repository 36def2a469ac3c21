use leptos::prelude::*;

use crate::content::{Icon, Project, PROJECTS};
use crate::nav::Section;

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="min-h-screen flex items-center py-20 px-4">
            <div class="max-w-6xl mx-auto w-full">
                <h2 class="text-5xl md:text-6xl font-bold mb-16 text-center bg-gradient-to-r from-blue-400 to-cyan-400 bg-clip-text text-transparent">
                    "Projets Réalisés"
                </h2>
                <div class="grid md:grid-cols-2 gap-8">
                    {PROJECTS
                        .iter()
                        .map(|project| view! { <ProjectCard project /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <div class="group bg-gradient-to-br from-gray-800/80 to-gray-900/80 backdrop-blur-sm p-8 rounded-3xl border border-blue-500/20 hover:border-blue-500/50 transition-all transform hover:-translate-y-2 duration-300 hover:shadow-2xl hover:shadow-blue-500/20">
            <div class="text-6xl mb-6 transform group-hover:scale-110 transition-transform">
                {project.icon}
            </div>
            <h3 class="text-2xl font-bold mb-3 text-blue-400 group-hover:text-cyan-400 transition-colors">
                {project.title}
            </h3>
            <p class="text-sm text-cyan-400 mb-4 font-mono bg-gray-900/50 px-3 py-1 rounded-lg inline-block">
                {project.tech}
            </p>
            <p class="text-gray-300 mb-6 leading-relaxed">{project.description}</p>
            {project
                .links()
                .into_iter()
                .map(|href| {
                    view! {
                        <a
                            href=href
                            target="_blank"
                            rel="noopener noreferrer"
                            class="inline-flex items-center gap-2 text-blue-400 hover:text-blue-300 transition-colors font-semibold group-hover:gap-3"
                        >
                            <i class=Icon::Github.class() />
                            <span>"Voir le code"</span>
                            <i class=format!(
                                "{} group-hover:translate-x-1 transition-transform",
                                Icon::ExternalLink.class(),
                            ) />
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}
