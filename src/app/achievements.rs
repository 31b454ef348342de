use leptos::prelude::*;
use leptos_meta::Title;

use super::icon::IconView;
use crate::content::{Icon, ACHIEVEMENTS, RESUME_URL};

#[component]
pub fn AchievementsSection() -> impl IntoView {
    view! {
        <Title text="Achievements" />
        <section class="relative z-10 py-20 px-6 fade-in">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-4xl md:text-5xl font-bold mb-12 text-white text-center rise-in">
                    "Achievements"
                </h2>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    {ACHIEVEMENTS
                        .iter()
                        .enumerate()
                        .map(|(i, achievement)| {
                            view! {
                                <div
                                    class="bg-gray-800 rounded-lg p-6 flex items-start rise-in"
                                    style=format!("animation-delay: {}ms", i * 100)
                                >
                                    <div class="text-blue-400 mr-4 mt-1">
                                        <IconView icon=achievement.icon class="text-xl" />
                                    </div>
                                    <div>
                                        <h3 class="text-xl font-semibold mb-2">{achievement.title}</h3>
                                        <p class="text-gray-400">{achievement.description}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="mt-12 text-center rise-in" style="animation-delay: 400ms">
                    <h3 class="text-2xl font-semibold mb-6 text-white">"View My Full Resume"</h3>
                    <a
                        href=RESUME_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center bg-blue-600 text-white px-6 py-3 rounded-full font-semibold hover:bg-blue-700 transition-colors hover-pop"
                    >
                        <IconView icon=Icon::FileText class="mr-2" />
                        "Download Resume"
                    </a>
                </div>
            </div>
        </section>
    }
}
