use leptos::{either::Either, prelude::*};

use crate::content::Icon;

#[component]
pub fn IconView(icon: Icon, #[prop(optional)] class: &'static str) -> impl IntoView {
    match icon.class() {
        Some(font_class) => Either::Left(view! { <i class=format!("{font_class} {class}")></i> }),
        None => Either::Right(view! {
            <span class=format!("inline-block leading-none {class}") aria-hidden="true">
                {icon.glyph()}
            </span>
        }),
    }
}

#[component]
pub fn SocialLinks(#[prop(default = "text-2xl")] size: &'static str) -> impl IntoView {
    view! {
        <div class="flex space-x-4">
            {crate::content::SOCIAL_LINKS
                .iter()
                .map(|link| {
                    view! {
                        <a
                            href=link.href
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-blue-400 hover:text-blue-300 hover-pop"
                            aria-label=link.label
                        >
                            <IconView icon=link.icon class=size />
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}
