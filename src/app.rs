mod about;
mod components;
mod contact;
mod experience;
mod hero;
mod navigation;
mod projects;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::config::SiteConfig;

use about::About;
use contact::Contact;
use experience::Experience;
use hero::Hero;
use navigation::Navigation;
use projects::Projects;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    // every section reads its backend URL and relay settings from here
    provide_context(SiteConfig::from_build_env());

    view! {
        <Title formatter=|title| format!("Portfolio - {title}") />

        <Router>
            <Navigation />
            <main class="bg-white">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

/// Single page: each section fetches and fails on its own.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home" />
        <Hero />
        <About />
        <Projects />
        <Experience />
        <Skills />
        <Contact />
    }
}

#[component]
fn Footer() -> impl IntoView {
    let built = env!("BUILD_TIME")
        .parse::<chrono::DateTime<chrono::Utc>>()
        .map(|t| t.format("%b %e, %Y").to_string())
        .unwrap_or_default();
    view! {
        <footer class="bg-gray-900 text-gray-400 py-8">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center text-sm">
                "Built with Rust & Leptos"
                {(!built.is_empty()).then(|| view! { <span>" · last deployed " {built}</span> })}
            </div>
        </footer>
    }
}
