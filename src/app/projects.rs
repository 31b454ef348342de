use leptos::prelude::*;
use leptos_meta::Title;

use super::icon::IconView;
use crate::content::{Icon, Project, PROJECTS};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <Title text="Projects" />
        <section class="relative z-10 py-20 px-6 fade-in">
            <div class="max-w-4xl mx-auto text-center rise-in">
                <h2 class="text-3xl md:text-5xl font-bold mb-8 text-white">"My Projects"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
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
        <div class="project-card bg-gray-900/50 rounded-lg overflow-hidden shadow-lg text-left">
            <div class="relative h-48 overflow-hidden">
                <img src=project.image alt=project.title class="w-full h-full object-cover" />
                <div class="project-card-tint absolute inset-0 bg-blue-600 mix-blend-overlay"></div>
            </div>
            <div class="p-6 rise-in" style="animation-delay: 200ms">
                <h3 class="text-xl font-bold mb-2 text-white">{project.title}</h3>
                <p class="text-gray-400 mb-4">{project.description}</p>
                <div class="flex justify-between">
                    <a
                        href=project.github_link
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-blue-400 hover:text-blue-300 hover-tilt-right"
                        aria-label=format!("{} source", project.title)
                    >
                        <IconView icon=Icon::GitHub class="text-2xl" />
                    </a>
                    <a
                        href=project.live_link
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-blue-400 hover:text-blue-300 hover-tilt-left"
                        aria-label=format!("{} demo", project.title)
                    >
                        <IconView icon=Icon::ExternalLink class="text-2xl" />
                    </a>
                </div>
            </div>
        </div>
    }
}
