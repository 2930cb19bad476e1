use leptos::{either::Either, prelude::*};

use crate::{
    api::FetchOutcome,
    model::Experience as ExperienceEntry,
    portfolio::{date_range, sort_experiences},
};

use super::components::{use_api_client, EmptyState, SectionHeading, Skeleton, TechBadge};

#[component]
pub fn Experience() -> impl IntoView {
    let client = use_api_client();
    let experiences = LocalResource::new(move || {
        let client = client.clone();
        async move {
            FetchOutcome::from_list(client.experiences().await, "experiences")
                .map(sort_experiences)
                .into_items()
        }
    });

    view! {
        <section id="experience" class="py-20 bg-white">
            <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    title="Work Experience"
                    subtitle="Where I've worked and what I've built along the way."
                />
                <Suspense fallback=|| view! { <Skeleton rows=3 row_class="h-40" /> }>
                    {move || Suspend::new(async move {
                        let experiences = experiences.await;
                        if experiences.is_empty() {
                            Either::Left(
                                view! {
                                    <EmptyState
                                        title="No Experience Listed"
                                        message="Work history will appear here once it's added to the portfolio."
                                    />
                                },
                            )
                        } else {
                            Either::Right(
                                view! {
                                    <div class="relative border-l-2 border-blue-200 ml-4 space-y-12">
                                        {experiences
                                            .into_iter()
                                            .map(|entry| view! { <TimelineEntry entry /> })
                                            .collect_view()}
                                    </div>
                                },
                            )
                        }
                    })}
                </Suspense>
            </div>
        </section>
    }
}

#[component]
fn TimelineEntry(entry: ExperienceEntry) -> impl IntoView {
    let dates = date_range(&entry);
    let company = match entry.company_url.clone() {
        Some(href) => Either::Left(
            view! {
                <a
                    href=href
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-blue-600 hover:text-blue-700"
                >
                    {entry.company.clone()}
                </a>
            },
        ),
        None => Either::Right(view! { <span class="text-blue-600">{entry.company.clone()}</span> }),
    };

    view! {
        <div class="relative pl-8">
            <span class="absolute -left-[9px] top-2 w-4 h-4 rounded-full bg-blue-600 border-4 border-white"></span>
            <div class="bg-gray-50 rounded-xl p-6 shadow-sm">
                <div class="flex flex-wrap items-start justify-between gap-2 mb-2">
                    <div>
                        <h3 class="text-xl font-bold text-gray-900">{entry.position.clone()}</h3>
                        <div class="font-medium">{company}</div>
                    </div>
                    {entry
                        .is_current
                        .then(|| {
                            view! {
                                <span class="px-3 py-1 bg-green-100 text-green-700 text-xs font-semibold rounded-full">
                                    "Current"
                                </span>
                            }
                        })}
                </div>
                <p class="text-sm text-gray-500 mb-4">
                    {dates}
                    {entry.location.clone().map(|l| format!(" · {l}"))}
                </p>
                <p class="text-gray-700 mb-4">{entry.description.clone()}</p>
                {(!entry.responsibilities.is_empty())
                    .then(|| {
                        view! {
                            <ul class="list-disc list-inside space-y-1 text-gray-600 mb-4">
                                {entry
                                    .responsibilities
                                    .iter()
                                    .map(|r| view! { <li>{r.clone()}</li> })
                                    .collect_view()}
                            </ul>
                        }
                    })}
                {(!entry.technologies.is_empty())
                    .then(|| {
                        view! {
                            <div class="flex flex-wrap gap-2">
                                {entry
                                    .technologies
                                    .iter()
                                    .cloned()
                                    .map(|name| view! { <TechBadge name /> })
                                    .collect_view()}
                            </div>
                        }
                    })}
            </div>
        </div>
    }
}
