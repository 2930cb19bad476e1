use leptos::{either::Either, prelude::*};

use crate::{api::FetchOutcome, model::PersonalInfo};

use super::components::{use_api_client, SectionHeading, Skeleton};

const DEFAULT_SUMMARY: &str =
    "I'm a passionate software developer with a love for creating innovative solutions that make a difference.";

#[component]
pub fn About() -> impl IntoView {
    let client = use_api_client();
    let info = LocalResource::new(move || {
        let client = client.clone();
        async move { FetchOutcome::from_result(client.personal_info().await, "personal info") }
    });

    view! {
        <section id="about" class="py-20 bg-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading title="About Me" />
                <Suspense fallback=|| view! { <Skeleton rows=4 /> }>
                    {move || Suspend::new(async move {
                        let info = info.await.loaded();
                        view! { <AboutContent info /> }
                    })}
                </Suspense>
            </div>
        </section>
    }
}

#[component]
fn AboutContent(info: Option<PersonalInfo>) -> impl IntoView {
    let summary = info
        .as_ref()
        .map(|i| i.summary.clone())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_SUMMARY.to_string());
    let name = info.as_ref().map(|i| i.full_name.clone()).unwrap_or_default();
    let title = info
        .as_ref()
        .map(|i| i.title.clone())
        .unwrap_or_else(|| "Software Developer".to_string());
    let location = info
        .as_ref()
        .and_then(|i| i.location.clone())
        .unwrap_or_else(|| "Remote".to_string());
    let email = info.as_ref().map(|i| i.email.clone()).unwrap_or_default();
    let resume_url = info.as_ref().and_then(|i| i.resume_url.clone());
    let image_url = info.as_ref().and_then(|i| i.profile_image_url.clone());

    view! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
            <div class="space-y-6">
                <p class="text-xl leading-relaxed text-gray-700">{summary}</p>
                <div class="space-y-3">
                    <InfoRow label="Name:" value=name.clone() />
                    <InfoRow label="Role:" value=title />
                    <InfoRow label="Location:" value=location />
                    <div class="flex items-center">
                        <span class="font-semibold text-gray-900 w-24">"Email:"</span>
                        <a
                            href=format!("mailto:{email}")
                            class="text-blue-600 hover:text-blue-700 transition-colors"
                        >
                            {email.clone()}
                        </a>
                    </div>
                </div>
                <div class="flex flex-wrap gap-4 pt-4">
                    {resume_url
                        .map(|url| {
                            view! {
                                <a
                                    href=url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="inline-flex items-center px-6 py-3 bg-blue-600 text-white rounded-lg font-medium hover:bg-blue-700 transition-all duration-200"
                                >
                                    "Download Resume"
                                </a>
                            }
                        })}
                    <a
                        href="#contact"
                        class="inline-flex items-center px-6 py-3 border-2 border-gray-300 text-gray-700 rounded-lg font-medium hover:border-blue-600 hover:text-blue-600 transition-all duration-200"
                    >
                        "Get In Touch"
                    </a>
                </div>
            </div>
            <div class="relative">
                {match image_url {
                    Some(src) => {
                        Either::Left(
                            view! {
                                <img
                                    src=src
                                    alt=format!("{name} - Professional headshot")
                                    class="w-full max-w-md mx-auto rounded-2xl shadow-2xl object-cover"
                                />
                            },
                        )
                    }
                    None => {
                        Either::Right(
                            view! {
                                <div class="w-full max-w-md mx-auto aspect-square rounded-2xl bg-blue-50 flex items-center justify-center">
                                    <p class="text-blue-600 font-medium">"Profile Image"</p>
                                </div>
                            },
                        )
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn InfoRow(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="flex items-center">
            <span class="font-semibold text-gray-900 w-24">{label}</span>
            <span class="text-gray-600">{value}</span>
        </div>
    }
}
