mod about;
mod achievements;
mod background;
mod contact;
mod home;
mod icon;
mod nav;
mod projects;
mod typed;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{
    contact::{delivery_outcome, ContactMessage, Field},
    content::{BACKGROUND_SNIPPETS, FAVICON, OWNER_NAME},
    state::{Section, ViewState},
    typewriter::TypeSpeed,
};

use about::AboutSection;
use achievements::AchievementsSection;
use background::Background;
use contact::{ContactSection, DeliverMessage};
use home::HomeSection;
use nav::NavBar;
use projects::ProjectsSection;
use typed::Typed;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title text=OWNER_NAME />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=Portfolio />
            </Routes>
        </Router>
    }
}

/// Owns the page state. Children get read-only signals and callbacks.
#[component]
fn Portfolio() -> impl IntoView {
    let state = RwSignal::new(ViewState::default());

    // memos, so typing into the form doesn't re-render the whole section
    let section = Memo::new(move |_| state.with(|s| s.section()));
    let active_skill = Memo::new(move |_| state.with(|s| s.active_skill()));
    let form = Memo::new(move |_| state.with(|s| s.contact().clone()));
    let status = Memo::new(move |_| state.with(|s| s.status().clone()));

    let select_section = Callback::new(move |section: Section| {
        log::debug!("showing section {section}");
        state.update(|s| s.select_section(section));
    });
    let toggle_skill = Callback::new(move |index: usize| {
        log::debug!("toggling skill {index}");
        state.update(|s| s.toggle_skill(index));
    });
    let update_field = Callback::new(move |(field, value): (Field, String)| {
        state.update(|s| s.update_field(field, value));
    });

    let deliver = ServerAction::<DeliverMessage>::new();
    let submit = Callback::new(move |_: ()| {
        match state.try_update(|s| s.begin_submission()) {
            Some(Ok(ContactMessage {
                name,
                email,
                message,
            })) => {
                deliver.dispatch(DeliverMessage {
                    name,
                    email,
                    message,
                });
            }
            Some(Err(e)) => log::warn!("contact form not sent: {e}"),
            None => {}
        }
    });
    Effect::new(move |_| {
        let Some(res) = deliver.value().get() else {
            return;
        };
        let res = delivery_outcome(res);
        if let Err(e) = &res {
            log::warn!("{e}");
        }
        state.update(|s| s.settle_submission(res));
    });

    view! {
        <div class="relative min-h-screen bg-black text-gray-300 overflow-hidden">
            <Background />
            <NavBar active=section on_select=select_section />
            {move || match section.get() {
                Section::Home => view! { <HomeSection on_navigate=select_section /> }.into_any(),
                Section::About => {
                    view! { <AboutSection active_skill on_toggle=toggle_skill /> }.into_any()
                }
                Section::Projects => view! { <ProjectsSection /> }.into_any(),
                Section::Achievements => view! { <AchievementsSection /> }.into_any(),
                Section::Contact => {
                    view! {
                        <ContactSection
                            form
                            status
                            on_input=update_field
                            on_submit=submit
                        />
                    }
                        .into_any()
                }
            }}
            <div class="fixed bottom-0 left-0 right-0 z-0 p-4 text-sm font-bold text-gray-600 overflow-hidden whitespace-nowrap flex justify-center pointer-events-none">
                <code>
                    <Typed phrases=BACKGROUND_SNIPPETS speed=TypeSpeed::new(40, 20) />
                </code>
            </div>
            <Footer />
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let year = env!("BUILD_YEAR");
    view! {
        <footer class="relative z-10 bg-gray-900 py-6 mb-14 text-center">
            <p class="text-gray-400">{format!("© {year} {OWNER_NAME}. All rights reserved.")}</p>
        </footer>
    }
}
