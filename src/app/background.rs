use leptos::prelude::*;
use leptos_use::{use_raf_fn, UseRafFnCallbackArgs};

use crate::particles::{scatter, PARTICLE_COUNT, PARTICLE_SEED};

/// Gradient plus drifting particles. The animation frame loop is paused
/// automatically when the component is cleaned up.
#[component]
pub fn Background() -> impl IntoView {
    let particles = scatter(PARTICLE_COUNT, PARTICLE_SEED);
    let (elapsed, set_elapsed) = signal(0.0_f64);

    let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        set_elapsed.update(|t| *t += args.delta / 1000.0);
    });

    view! {
        <div class="fixed inset-0 z-0 pointer-events-none" aria-hidden="true">
            <div class="absolute inset-0 bg-gradient-to-br from-gray-900 to-black opacity-70"></div>
            {particles
                .into_iter()
                .map(|particle| {
                    view! {
                        <div
                            class="absolute bg-white rounded-full"
                            style=move || particle.style(elapsed.get())
                        ></div>
                    }
                })
                .collect_view()}
        </div>
    }
}
