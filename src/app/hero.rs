use leptos::prelude::*;

use crate::{api::FetchOutcome, model::PersonalInfo, portfolio::Headline};

use super::components::{use_api_client, Skeleton};

#[component]
pub fn Hero() -> impl IntoView {
    let client = use_api_client();
    let info = LocalResource::new(move || {
        let client = client.clone();
        async move { FetchOutcome::from_result(client.personal_info().await, "personal info") }
    });

    view! {
        <section
            id="home"
            class="min-h-[80vh] flex items-center bg-gradient-to-br from-blue-50 via-white to-purple-50"
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-24 text-center">
                <Suspense fallback=|| view! { <Skeleton rows=2 row_class="h-16 max-w-2xl mx-auto" /> }>
                    {move || Suspend::new(async move {
                        let info = info.await.loaded();
                        view! { <Greeting info /> }
                    })}
                </Suspense>
                <div class="mt-10 flex flex-wrap justify-center gap-4">
                    <a
                        href="#projects"
                        class="px-8 py-3 bg-blue-600 text-white rounded-lg font-medium hover:bg-blue-700 shadow-lg transition-all duration-200"
                    >
                        "View My Work"
                    </a>
                    <a
                        href="#contact"
                        class="px-8 py-3 border-2 border-blue-600 text-blue-600 rounded-lg font-medium hover:bg-blue-600 hover:text-white transition-all duration-200"
                    >
                        "Get In Touch"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Greeting(info: Option<PersonalInfo>) -> impl IntoView {
    let Headline { name, title } = Headline::from_info(info.as_ref());

    view! {
        <h1 class="text-5xl md:text-7xl font-bold text-gray-900 mb-6">
            "Hi, I'm " <span class="text-blue-600">{name}</span>
        </h1>
        <p class="text-2xl md:text-3xl text-gray-600">{title}</p>
    }
}
