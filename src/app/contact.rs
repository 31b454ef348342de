use leptos::{either::Either, prelude::*, server_fn::ServerFn};
use leptos_meta::Title;

use super::icon::{IconView, SocialLinks};
use crate::{
    contact::{ContactFormData, Field},
    content::{Icon, EMAIL, LOCATION},
    state::SubmissionStatus,
};

/// Hands a contact message to the courier configured on the server.
#[server]
pub async fn deliver_message(
    name: String,
    email: String,
    message: String,
) -> Result<(), ServerFnError> {
    use crate::contact::{ContactError, ContactMessage, CourierHandle};

    let message = ContactMessage::new(name, email, message).map_err(ServerFnError::new)?;
    let courier = use_context::<CourierHandle>()
        .ok_or_else(|| ServerFnError::new("contact delivery is not configured"))?;
    // couriers do blocking io
    let outcome = tokio::task::spawn_blocking(move || courier.deliver(&message))
        .await
        .map_err(|e| ServerFnError::new(format!("contact delivery task failed: {e}")))?;
    outcome.map_err(|e| {
        tracing::error!(error = %e, "contact message delivery failed");
        match e {
            ContactError::Delivery(reason) => ServerFnError::new(reason),
            other => ServerFnError::new(other),
        }
    })
}

#[component]
pub fn ContactSection(
    #[prop(into)] form: Signal<ContactFormData>,
    #[prop(into)] status: Signal<SubmissionStatus>,
    on_input: Callback<(Field, String)>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <Title text="Contact" />
        <section class="relative z-10 py-20 px-6 fade-in">
            <div class="max-w-4xl mx-auto">
                <h2 class="text-4xl md:text-5xl font-bold mb-12 text-white text-center rise-in">
                    "Get in Touch"
                </h2>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-12">
                    <div class="slide-in-left" style="animation-delay: 200ms">
                        <h3 class="text-2xl font-semibold mb-6 text-white">"Contact Information"</h3>
                        <div class="space-y-4">
                            <div class="flex items-center">
                                <IconView icon=Icon::Mail class="text-blue-400 mr-4 text-2xl" />
                                <span>{EMAIL}</span>
                            </div>
                            <div class="flex items-center">
                                <IconView icon=Icon::MapPin class="text-blue-400 mr-4 text-2xl" />
                                <span>{LOCATION}</span>
                            </div>
                        </div>
                        <div class="mt-8">
                            <SocialLinks size="text-3xl" />
                        </div>
                    </div>
                    <div class="slide-in-right" style="animation-delay: 400ms">
                        <h3 class="text-2xl font-semibold mb-6 text-white">"Send a Message"</h3>
                        <ContactForm form status on_input on_submit />
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Posts to the server function when submitted before hydration; afterwards
/// the submit is handled in the page.
#[component]
fn ContactForm(
    form: Signal<ContactFormData>,
    status: Signal<SubmissionStatus>,
    on_input: Callback<(Field, String)>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let sending = move || status.get() == SubmissionStatus::Sending;

    view! {
        <form
            class="space-y-4"
            method="post"
            action=DeliverMessage::url()
            on:submit=move |ev| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            {Field::ALL
                .into_iter()
                .map(|field| view! { <FormField field form on_input /> })
                .collect_view()}
            <button
                type="submit"
                disabled=sending
                class="w-full bg-blue-600 text-white px-6 py-3 rounded-md font-semibold hover:bg-blue-700 disabled:opacity-60 transition-colors flex items-center justify-center hover-pop"
            >
                <IconView icon=Icon::Send class="mr-2" />
                {move || if sending() { "Sending..." } else { "Send Message" }}
            </button>
            <StatusNotice status />
        </form>
    }
}

const INPUT_CLASS: &str = "w-full px-4 py-2 bg-gray-800 border border-gray-700 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500 text-white";

#[component]
fn FormField(
    field: Field,
    form: Signal<ContactFormData>,
    on_input: Callback<(Field, String)>,
) -> impl IntoView {
    let value = move || form.with(|f| f.get(field).to_string());
    let input_type = if field == Field::Email { "email" } else { "text" };

    let control = match field {
        Field::Message => Either::Left(view! {
            <textarea
                id=field.id()
                name=field.id()
                rows="4"
                required=true
                class=INPUT_CLASS
                prop:value=value
                on:input=move |ev| on_input.run((field, event_target_value(&ev)))
            ></textarea>
        }),
        Field::Name | Field::Email => Either::Right(view! {
            <input
                type=input_type
                id=field.id()
                name=field.id()
                required=true
                class=INPUT_CLASS
                prop:value=value
                on:input=move |ev| on_input.run((field, event_target_value(&ev)))
            />
        }),
    };

    view! {
        <div>
            <label for=field.id() class="block text-sm font-medium text-gray-400 mb-1">
                {field.label()}
            </label>
            {control}
        </div>
    }
}

#[component]
fn StatusNotice(status: Signal<SubmissionStatus>) -> impl IntoView {
    move || match status.get() {
        SubmissionStatus::Idle | SubmissionStatus::Sending => None,
        SubmissionStatus::Sent => Some(Either::Left(view! {
            <p class="p-3 rounded-md bg-green-900/40 border border-green-600/40 text-green-300" role="status">
                "Thanks! Your message is on its way."
            </p>
        })),
        SubmissionStatus::Failed(reason) => Some(Either::Right(view! {
            <p class="p-3 rounded-md bg-red-900/40 border border-red-600/40 text-red-300" role="alert">
                {format!("Your message wasn't sent: {reason}. Please try again.")}
            </p>
        })),
    }
}
