use leptos::prelude::*;
use leptos_meta::Title;

use super::icon::{IconView, SocialLinks};
use crate::content::{Skill, BIO, OWNER_NAME, PROFILE_IMAGE, SKILLS};

#[component]
pub fn AboutSection(
    #[prop(into)] active_skill: Signal<Option<usize>>,
    on_toggle: Callback<usize>,
) -> impl IntoView {
    view! {
        <Title text="About Me" />
        <section class="relative z-10 py-20 px-6 fade-in">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-4xl md:text-5xl font-bold mb-12 text-white text-center rise-in">
                    "About Me"
                </h2>
                <div class="flex flex-col md:flex-row items-center md:items-start space-y-8 md:space-y-0 md:space-x-12">
                    <div class="md:w-1/3 rise-in" style="animation-delay: 200ms">
                        <img
                            src=PROFILE_IMAGE
                            alt=OWNER_NAME
                            class="rounded-lg shadow-lg w-full max-w-sm mx-auto object-cover"
                        />
                    </div>
                    <div class="md:w-2/3">
                        {BIO
                            .iter()
                            .enumerate()
                            .map(|(i, paragraph)| {
                                view! {
                                    <p
                                        class="text-lg mb-6 rise-in"
                                        style=format!("animation-delay: {}ms", 300 + i * 100)
                                    >
                                        {*paragraph}
                                    </p>
                                }
                            })
                            .collect_view()}
                        <div class="flex justify-center md:justify-start rise-in" style="animation-delay: 600ms">
                            <SocialLinks />
                        </div>
                    </div>
                </div>
                <div class="mt-16 rise-in" style="animation-delay: 700ms">
                    <h3 class="text-2xl font-semibold mb-8 text-white text-center">"My Skills"</h3>
                    <div class="grid grid-cols-2 md:grid-cols-3 gap-6">
                        {SKILLS
                            .iter()
                            .enumerate()
                            .map(|(index, skill)| {
                                let expanded = Signal::derive(move || active_skill.get() == Some(index));
                                view! { <SkillCard skill index expanded on_toggle /> }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(
    skill: &'static Skill,
    index: usize,
    expanded: Signal<bool>,
    on_toggle: Callback<usize>,
) -> impl IntoView {
    view! {
        <div
            class="bg-gray-800 rounded-lg p-6 cursor-pointer transition-all duration-300 ease-in-out hover:scale-105 hover:bg-[#2a4365]"
            on:click=move |_| on_toggle.run(index)
        >
            <div class="flex items-center mb-4">
                <div class="text-blue-400 mr-4">
                    <IconView icon=skill.icon class="text-xl" />
                </div>
                <h4 class="text-lg font-semibold">{skill.name}</h4>
            </div>
            {move || {
                expanded
                    .get()
                    .then(|| {
                        view! { <p class="text-sm text-gray-400 expand-in">{skill.description}</p> }
                    })
            }}
        </div>
    }
}
