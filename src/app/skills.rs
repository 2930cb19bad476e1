use leptos::{either::Either, prelude::*};

use crate::{
    api::FetchOutcome,
    model::Skill,
    portfolio::{skills::bar_width_percent, CategoryFilter, SkillGroups, SkillLevel, SkillSummary},
};

use super::components::{use_api_client, EmptyState, SectionHeading, Skeleton};

#[component]
pub fn Skills() -> impl IntoView {
    let client = use_api_client();
    let skills = LocalResource::new(move || {
        let client = client.clone();
        async move { FetchOutcome::from_list(client.skills().await, "skills").into_items() }
    });
    let selected = RwSignal::new(CategoryFilter::default());

    view! {
        <section id="skills" class="py-20 bg-gray-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    title="Skills & Technologies"
                    subtitle="The technologies and tools I use to bring ideas to life."
                />
                <Suspense fallback=|| view! { <Skeleton rows=4 row_class="h-24" /> }>
                    {move || Suspend::new(async move {
                        let skills = skills.await;
                        let groups = SkillGroups::from_skills(&skills);
                        let summary = SkillSummary::from_skills(&skills);
                        view! {
                            <div class="flex flex-wrap justify-center gap-2 mb-12">
                                {groups
                                    .filters()
                                    .into_iter()
                                    .map(|filter| view! { <FilterButton filter selected /> })
                                    .collect_view()}
                            </div>
                            {move || {
                                let shown = groups.filtered(&skills, selected.get());
                                if shown.is_empty() {
                                    Either::Left(
                                        view! {
                                            <EmptyState
                                                title="No Skills Found"
                                                message="Skills will appear here once they're added to the portfolio."
                                            />
                                        },
                                    )
                                } else {
                                    Either::Right(
                                        view! {
                                            <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6">
                                                {shown
                                                    .iter()
                                                    .cloned()
                                                    .map(|skill| view! { <SkillCard skill /> })
                                                    .collect_view()}
                                            </div>
                                        },
                                    )
                                }
                            }}
                            {(summary.total > 0).then(|| view! { <SkillsOverview summary /> })}
                        }
                    })}
                </Suspense>
            </div>
        </section>
    }
}

#[component]
fn FilterButton(filter: CategoryFilter, selected: RwSignal<CategoryFilter>) -> impl IntoView {
    view! {
        <button
            class=move || {
                if selected.get() == filter {
                    "px-4 py-2 rounded-md text-sm font-medium capitalize bg-blue-600 text-white shadow"
                } else {
                    "px-4 py-2 rounded-md text-sm font-medium capitalize bg-white text-gray-600 hover:text-blue-600"
                }
            }
            on:click=move |_| selected.set(filter)
        >
            {filter.to_string().to_lowercase()}
        </button>
    }
}

#[component]
fn SkillCard(skill: Skill) -> impl IntoView {
    let level = SkillLevel::from_level(skill.proficiency_level);
    let width = format!("width: {}%", bar_width_percent(skill.proficiency_level));

    view! {
        <div class="bg-white rounded-xl p-6 shadow-lg hover:shadow-xl transition-all duration-300">
            <div class="flex items-start justify-between mb-4">
                <div>
                    <h3 class="text-lg font-semibold text-gray-900 mb-1">{skill.name.clone()}</h3>
                    <span class="text-xs text-gray-500 capitalize">
                        {skill.category.as_str().to_lowercase()}
                    </span>
                </div>
                {skill
                    .is_featured
                    .then(|| {
                        view! {
                            <span class="px-2 py-1 bg-yellow-100 text-yellow-800 text-xs rounded-full">
                                "⭐ Featured"
                            </span>
                        }
                    })}
            </div>
            <div class="flex items-center justify-between mb-2">
                <span class=format!("text-sm font-medium {}", level.text_class())>{level.label()}</span>
                <span class="text-sm text-gray-500">{format!("{}/10", skill.proficiency_level)}</span>
            </div>
            <div class="w-full bg-gray-200 rounded-full h-2">
                <div class=format!("h-2 rounded-full {}", level.bar_class()) style=width></div>
            </div>
            {skill
                .years_of_experience
                .map(|years| {
                    view! {
                        <p class="mt-3 text-xs text-gray-500">
                            {format!("{years} yr{} experience", if years == 1 { "" } else { "s" })}
                        </p>
                    }
                })}
        </div>
    }
}

#[component]
fn SkillsOverview(summary: SkillSummary) -> impl IntoView {
    let stats = [
        (summary.total, "Total Skills", "text-blue-600"),
        (summary.expert_count, "Expert Level", "text-green-600"),
        (summary.category_count, "Categories", "text-purple-600"),
        (summary.featured_count, "Featured", "text-yellow-600"),
    ];
    view! {
        <div class="mt-16 text-center">
            <h3 class="text-2xl font-bold text-gray-900 mb-6">"Skills Overview"</h3>
            <div class="grid grid-cols-2 md:grid-cols-4 gap-6 max-w-3xl mx-auto">
                {stats
                    .into_iter()
                    .map(|(count, label, color)| {
                        view! {
                            <div class="bg-white rounded-xl p-6 shadow">
                                <div class=format!("text-3xl font-bold {color}")>{count}</div>
                                <div class="text-sm text-gray-600">{label}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
