use leptos::prelude::*;

use crate::{api::ApiClient, config::SiteConfig};

/// Client for the backend configured in context.
pub fn use_api_client() -> ApiClient {
    let config = expect_context::<SiteConfig>();
    ApiClient::new(&config.api_base_url)
}

#[component]
pub fn SectionHeading(title: &'static str, #[prop(optional)] subtitle: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <h2 class="text-4xl md:text-5xl font-bold text-gray-900 mb-4">{title}</h2>
            <div class="w-20 h-1 bg-blue-600 mx-auto mb-6"></div>
            {subtitle
                .map(|s| {
                    view! { <p class="text-xl text-gray-600 max-w-3xl mx-auto">{s}</p> }
                })}
        </div>
    }
}

/// Pulsing placeholder rows shown while a section loads.
#[component]
pub fn Skeleton(rows: usize, #[prop(default = "h-12")] row_class: &'static str) -> impl IntoView {
    view! {
        <div class="animate-pulse space-y-6">
            {(0..rows)
                .map(|_| view! { <div class=format!("{row_class} bg-gray-200 rounded")></div> })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn EmptyState(title: &'static str, message: &'static str) -> impl IntoView {
    view! {
        <div class="text-center py-12">
            <h3 class="text-xl font-medium text-gray-900 mb-2">{title}</h3>
            <p class="text-gray-600">{message}</p>
        </div>
    }
}

#[component]
pub fn TechBadge(name: String) -> impl IntoView {
    view! {
        <span class="px-3 py-1 bg-gray-100 text-gray-700 text-xs rounded-full font-medium">
            {name}
        </span>
    }
}
