use leptos::prelude::*;
use leptos_meta::Title;

use super::{icon::IconView, typed::Typed};
use crate::{
    content::{Icon, FEATURED_TECH, HERO_PHRASES, HERO_TAGLINE, OWNER_NAME, PROFILE_IMAGE},
    state::Section,
    typewriter::TypeSpeed,
};

#[component]
pub fn HomeSection(on_navigate: Callback<Section>) -> impl IntoView {
    view! {
        <Title text="Home" />
        <section class="relative z-10 flex flex-col items-center justify-center min-h-screen px-6 py-20 fade-in">
            <div class="flex flex-col md:flex-row items-center justify-between w-full max-w-6xl">
                <div class="md:w-1/2 text-center md:text-left mb-12 md:mb-0 rise-in">
                    <h1 class="text-5xl md:text-7xl font-bold mb-4 text-white">
                        "Hey, I'm "
                        <Typed
                            phrases=HERO_PHRASES
                            speed=TypeSpeed::new(80, 50)
                            class="text-blue-400 block"
                        />
                    </h1>
                    <p class="text-xl mb-8 text-gray-400">{HERO_TAGLINE}</p>
                    <div class="flex flex-col sm:flex-row justify-center md:justify-start space-y-4 sm:space-y-0 sm:space-x-4">
                        <button
                            class="bg-blue-600 text-white px-8 py-3 rounded-full font-semibold hover:bg-blue-700 transition-colors hover-pop"
                            on:click=move |_| on_navigate.run(Section::Projects)
                        >
                            "View My Work"
                        </button>
                        <button
                            class="bg-transparent border-2 border-blue-400 text-blue-400 px-8 py-3 rounded-full font-semibold hover:bg-blue-400 hover:text-white transition-colors hover-pop"
                            on:click=move |_| on_navigate.run(Section::Contact)
                        >
                            "Get in Touch"
                        </button>
                    </div>
                </div>
                <div class="md:w-1/2 relative rise-in" style="animation-delay: 200ms">
                    <img
                        src=PROFILE_IMAGE
                        alt=OWNER_NAME
                        class="rounded-full border-4 border-blue-600 shadow-lg w-64 h-64 md:w-80 md:h-80 object-cover mx-auto"
                    />
                    <div class="absolute -bottom-4 -right-4 bg-blue-600 text-white p-4 rounded-full shadow-lg hover-pop">
                        <IconView icon=Icon::Mail class="text-2xl" />
                    </div>
                    <div class="absolute -top-4 -left-4 bg-green-500 text-white p-4 rounded-full shadow-lg hover-pop">
                        <IconView icon=Icon::Calendar class="text-2xl" />
                    </div>
                </div>
            </div>
            <div class="mt-20 text-center rise-in" style="animation-delay: 400ms">
                <h2 class="text-2xl font-semibold mb-6 text-white">"Featured Technologies"</h2>
                <div class="flex justify-center space-x-8">
                    {FEATURED_TECH
                        .iter()
                        .enumerate()
                        .map(|(i, tech)| {
                            view! {
                                <div
                                    class="text-blue-400 font-semibold rise-in"
                                    style=format!("animation-delay: {}ms", 600 + i * 100)
                                >
                                    {*tech}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="absolute bottom-8 left-1/2 -translate-x-1/2 text-blue-400 bob">
                <IconView icon=Icon::ChevronDown class="text-2xl" />
            </div>
        </section>
    }
}
