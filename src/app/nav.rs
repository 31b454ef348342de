use leptos::prelude::*;

use crate::state::Section;

#[component]
pub fn NavBar(#[prop(into)] active: Signal<Section>, on_select: Callback<Section>) -> impl IntoView {
    view! {
        <nav class="relative z-10 flex justify-between items-center p-6">
            <div class="text-2xl font-bold text-white rise-in">"Logo"</div>
            <div class="flex space-x-4 rise-in" style="animation-delay: 200ms">
                {Section::ALL
                    .into_iter()
                    .map(|section| {
                        view! {
                            <a
                                class=move || {
                                    if active.get() == section {
                                        "cursor-pointer text-white transition-colors"
                                    } else {
                                        "cursor-pointer hover:text-white transition-colors"
                                    }
                                }
                                on:click=move |_| on_select.run(section)
                            >
                                {section.label()}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
