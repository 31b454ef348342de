use leptos::prelude::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::typewriter::{Frame, TypeSpeed, Typewriter};

/// Typewriter text. The timer is re-armed after every frame and stopped
/// when the component's owner is cleaned up.
#[component]
pub fn Typed(
    phrases: &'static [&'static str],
    speed: TypeSpeed,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let typewriter = StoredValue::new(Typewriter::new(phrases, speed));
    let (frame, set_frame) = signal(Frame::default());
    let hold_ms = Signal::derive(move || frame.with(|f| f.hold.as_secs_f64() * 1000.0));

    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |_: ()| {
            if let Some(next) = typewriter.try_update_value(|t| t.next()).flatten() {
                set_frame.set(next);
            }
        },
        hold_ms,
    );

    Effect::new(move |_| {
        frame.track();
        start(());
    });

    view! {
        <span class=class>
            {move || frame.with(|f| f.text.clone())}
            <span class="typed-cursor">"|"</span>
        </span>
    }
}
