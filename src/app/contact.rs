use leptos::{prelude::*, task::spawn_local};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::{
    api::FetchOutcome,
    config::SiteConfig,
    contact::{
        resolve_recipient, submit, ContactForm, EmailJsRelay, MailtoLink, SubmitStatus,
        FALLBACK_DELAY,
    },
    model::PersonalInfo,
};

use super::components::{use_api_client, SectionHeading, Skeleton};

const INPUT_CLASS: &str = "w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-600 focus:border-transparent transition-all duration-200";

fn open_mail_client(uri: &str) {
    log::debug!("opening mail client");
    if let Err(e) = window().location().set_href(uri) {
        log::error!("Couldn't open mail client: {e:?}");
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let client = use_api_client();
    let info = LocalResource::new(move || {
        let client = client.clone();
        async move { FetchOutcome::from_result(client.personal_info().await, "personal info") }
    });

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let status = RwSignal::new(SubmitStatus::default());

    // one pending mailto handoff at most; a new submission cancels it
    let UseTimeoutFnReturn {
        start: schedule_fallback,
        stop: cancel_fallback,
        ..
    } = use_timeout_fn(
        |uri: String| open_mail_client(&uri),
        FALLBACK_DELAY.as_millis() as f64,
    );

    let current_form = move || ContactForm {
        name: name.get_untracked(),
        email: email.get_untracked(),
        subject: subject.get_untracked(),
        message: message.get_untracked(),
    };
    let recipient = {
        let config = config.clone();
        move || {
            let info: Option<PersonalInfo> = info.get_untracked().and_then(FetchOutcome::loaded);
            resolve_recipient(info.as_ref(), &config)
        }
    };

    let on_submit = {
        let recipient = recipient.clone();
        let relay_config = config.relay.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let mut next = status.get_untracked();
            if !next.begin() {
                return;
            }
            cancel_fallback();
            status.set(next);

            let form = current_form();
            let recipient = recipient();
            let relay_config = relay_config.clone();
            let schedule_fallback = schedule_fallback.clone();
            spawn_local(async move {
                let outcome = submit(&EmailJsRelay::default(), &relay_config, &recipient, &form).await;
                status.set(outcome.status());
                if outcome.clears_form() {
                    for field in [name, email, subject, message] {
                        field.set(String::new());
                    }
                }
                if let Some(link) = outcome.fallback() {
                    schedule_fallback(link.to_string());
                }
            });
        }
    };

    let on_mailto = move |_| {
        let link = MailtoLink::new(&recipient(), &current_form());
        open_mail_client(&link.to_string());
    };

    view! {
        <section id="contact" class="py-20 bg-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    title="Get In Touch"
                    subtitle="I'm always interested in new opportunities and collaborations. Let's discuss how we can work together!"
                />
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12">
                    <div class="bg-gray-50 rounded-2xl p-8">
                        <h3 class="text-2xl font-bold text-gray-900 mb-6">"Send me a message"</h3>
                        <form on:submit=on_submit class="space-y-6">
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                                <Field label="Name *" id="name">
                                    <input
                                        type="text"
                                        id="name"
                                        name="from_name"
                                        required
                                        placeholder="Your name"
                                        class=INPUT_CLASS
                                        prop:value=move || name.get()
                                        on:input=move |ev| name.set(event_target_value(&ev))
                                    />
                                </Field>
                                <Field label="Email *" id="email">
                                    <input
                                        type="email"
                                        id="email"
                                        name="from_email"
                                        required
                                        placeholder="you@example.com"
                                        class=INPUT_CLASS
                                        prop:value=move || email.get()
                                        on:input=move |ev| email.set(event_target_value(&ev))
                                    />
                                </Field>
                            </div>
                            <Field label="Subject *" id="subject">
                                <input
                                    type="text"
                                    id="subject"
                                    name="subject"
                                    required
                                    placeholder="What's this about?"
                                    class=INPUT_CLASS
                                    prop:value=move || subject.get()
                                    on:input=move |ev| subject.set(event_target_value(&ev))
                                />
                            </Field>
                            <Field label="Message *" id="message">
                                <textarea
                                    id="message"
                                    name="message"
                                    required
                                    rows="5"
                                    placeholder="Tell me about your project or just say hello!"
                                    class=format!("{INPUT_CLASS} resize-none")
                                    prop:value=move || message.get()
                                    on:input=move |ev| message.set(event_target_value(&ev))
                                ></textarea>
                            </Field>
                            <button
                                type="submit"
                                disabled=move || status.get().is_submitting()
                                class=move || {
                                    if status.get().is_submitting() {
                                        "w-full py-3 px-6 rounded-lg font-medium bg-gray-400 cursor-not-allowed"
                                    } else {
                                        "w-full py-3 px-6 rounded-lg font-medium bg-blue-600 hover:bg-blue-700 text-white shadow-lg"
                                    }
                                }
                            >
                                {move || {
                                    if status.get().is_submitting() { "Sending..." } else { "Send Message" }
                                }}
                            </button>
                            <div class="text-center">
                                <button
                                    type="button"
                                    on:click=on_mailto
                                    class="text-blue-600 hover:text-blue-700 text-sm font-medium underline transition-colors"
                                >
                                    "Or send email directly with your email client"
                                </button>
                            </div>
                            <StatusMessage status />
                        </form>
                    </div>
                    <Suspense fallback=|| view! { <Skeleton rows=3 /> }>
                        {move || Suspend::new(async move {
                            let info = info.await.loaded();
                            view! { <ContactDetails info /> }
                        })}
                    </Suspense>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Field(label: &'static str, id: &'static str, children: Children) -> impl IntoView {
    view! {
        <div>
            <label for=id class="block text-sm font-medium text-gray-700 mb-2">
                {label}
            </label>
            {children()}
        </div>
    }
}

#[component]
fn StatusMessage(status: RwSignal<SubmitStatus>) -> impl IntoView {
    move || {
        let status = status.get();
        if status == SubmitStatus::Success {
            return Some(
                view! {
                    <div class="p-4 bg-green-100 border border-green-400 text-green-700 rounded-lg">
                        "✅ Message sent successfully! I'll get back to you soon."
                    </div>
                }
                .into_any(),
            );
        }
        status.error_message().map(|message| {
            view! {
                <div class="p-4 bg-red-100 border border-red-400 text-red-700 rounded-lg">
                    "❌ " {message.to_string()}
                </div>
            }
            .into_any()
        })
    }
}

#[component]
fn ContactDetails(info: Option<PersonalInfo>) -> impl IntoView {
    let email = info.as_ref().map(|i| i.email.clone()).unwrap_or_default();
    let phone = info.as_ref().and_then(|i| i.phone.clone());
    let location = info
        .as_ref()
        .and_then(|i| i.location.clone())
        .unwrap_or_else(|| "Remote".to_string());
    let socials = info
        .as_ref()
        .map(|i| {
            [
                ("GitHub", i.github_url.clone()),
                ("LinkedIn", i.linkedin_url.clone()),
                ("Twitter", i.twitter_url.clone()),
            ]
            .into_iter()
            .filter_map(|(label, url)| url.map(|url| (label, url)))
            .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    view! {
        <div class="space-y-8">
            <div>
                <h3 class="text-2xl font-bold text-gray-900 mb-6">"Contact Information"</h3>
                <p class="text-gray-600">
                    "Feel free to reach out through any of these channels. I typically respond within 24 hours."
                </p>
            </div>
            <div class="space-y-6">
                <Detail label="Email">
                    <a
                        href=format!("mailto:{email}")
                        class="text-gray-600 hover:text-blue-600 transition-colors"
                    >
                        {email.clone()}
                    </a>
                </Detail>
                {phone
                    .map(|phone| {
                        view! {
                            <Detail label="Phone">
                                <a
                                    href=format!("tel:{phone}")
                                    class="text-gray-600 hover:text-green-600 transition-colors"
                                >
                                    {phone.clone()}
                                </a>
                            </Detail>
                        }
                    })}
                <Detail label="Location">
                    <p class="text-gray-600">{location}</p>
                </Detail>
            </div>
            {(!socials.is_empty())
                .then(|| {
                    view! {
                        <div class="pt-8 border-t border-gray-200">
                            <h4 class="font-semibold text-gray-900 mb-4">"Connect with me"</h4>
                            <div class="flex space-x-4">
                                {socials
                                    .into_iter()
                                    .map(|(label, href)| {
                                        view! {
                                            <a
                                                href=href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                aria-label=label
                                                class="px-4 py-2 bg-gray-100 rounded-lg text-gray-600 hover:text-gray-900 hover:bg-gray-200 transition-all duration-200"
                                            >
                                                {label}
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })}
        </div>
    }
}

#[component]
fn Detail(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div>
            <h4 class="font-semibold text-gray-900">{label}</h4>
            {children()}
        </div>
    }
}
