use chrono::Datelike;
use leptos::{either::Either, prelude::*};

use crate::{
    model::Project,
    portfolio::{load_showcase_projects, projects::tech_preview, ProjectWindow},
};

use super::components::{use_api_client, EmptyState, SectionHeading, Skeleton, TechBadge};

#[component]
pub fn Projects() -> impl IntoView {
    let client = use_api_client();
    let projects = LocalResource::new(move || {
        let client = client.clone();
        async move { load_showcase_projects(&client).await.into_items() }
    });
    let window = RwSignal::new(ProjectWindow::default());

    view! {
        <section id="projects" class="py-20 bg-gray-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    title="Featured Projects"
                    subtitle="A selection of things I've built, from side projects to production systems."
                />
                <Suspense fallback=|| view! { <Skeleton rows=6 row_class="h-64" /> }>
                    {move || Suspend::new(async move {
                        let projects = projects.await;
                        if projects.is_empty() {
                            return Either::Left(
                                view! {
                                    <EmptyState
                                        title="No Projects Yet"
                                        message="Projects will appear here once they're added to the portfolio."
                                    />
                                },
                            );
                        }
                        let total = projects.len();
                        Either::Right(
                            view! {
                                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                                    {move || {
                                        window
                                            .get()
                                            .displayed(&projects)
                                            .iter()
                                            .cloned()
                                            .map(|project| view! { <ProjectCard project /> })
                                            .collect_view()
                                    }}
                                </div>
                                {ProjectWindow::has_overflow(total)
                                    .then(|| {
                                        view! {
                                            <div class="text-center mt-12">
                                                <button
                                                    class="px-8 py-3 bg-blue-600 text-white rounded-lg font-medium hover:bg-blue-700 transition-all duration-200"
                                                    aria-expanded=move || window.get().show_all().to_string()
                                                    on:click=move |_| window.update(|w| w.toggle())
                                                >
                                                    {move || window.get().toggle_label(total)}
                                                </button>
                                            </div>
                                        }
                                    })}
                            },
                        )
                    })}
                </Suspense>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let (techs, remaining) = tech_preview(&project);
    let techs = techs.to_vec();
    let year = project.start_date.year();
    let ongoing = project.is_ongoing();

    view! {
        <div class="bg-white rounded-xl shadow-lg overflow-hidden hover:shadow-xl transition-all duration-300">
            <div class="relative h-48 bg-gradient-to-br from-blue-100 to-purple-100">
                {project
                    .image_url
                    .clone()
                    .map(|src| {
                        view! {
                            <img src=src alt=project.title.clone() class="w-full h-full object-cover" />
                        }
                    })}
                {project
                    .is_featured
                    .then(|| {
                        view! {
                            <span class="absolute top-4 right-4 px-3 py-1 bg-yellow-400 text-yellow-900 text-xs font-semibold rounded-full">
                                "Featured"
                            </span>
                        }
                    })}
            </div>
            <div class="p-6">
                <h3 class="text-xl font-bold text-gray-900 mb-2">{project.title.clone()}</h3>
                <p class="text-gray-600 mb-4 line-clamp-3">{project.blurb().to_string()}</p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {techs.into_iter().map(|name| view! { <TechBadge name /> }).collect_view()}
                    {(remaining > 0)
                        .then(|| {
                            view! {
                                <span class="px-3 py-1 bg-gray-100 text-gray-500 text-xs rounded-full">
                                    {format!("+{remaining} more")}
                                </span>
                            }
                        })}
                </div>
                <div class="flex items-center justify-between">
                    <div class="flex gap-4">
                        {project
                            .github_url
                            .clone()
                            .map(|href| {
                                view! {
                                    <a
                                        href=href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="text-gray-600 hover:text-gray-900 text-sm font-medium"
                                    >
                                        "Code"
                                    </a>
                                }
                            })}
                        {project
                            .live_url
                            .clone()
                            .map(|href| {
                                view! {
                                    <a
                                        href=href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="text-blue-600 hover:text-blue-700 text-sm font-medium"
                                    >
                                        "Live Demo"
                                    </a>
                                }
                            })}
                    </div>
                    <span class="text-sm text-gray-500">
                        {year} {ongoing.then_some(" · Ongoing")}
                    </span>
                </div>
            </div>
        </div>
    }
}
