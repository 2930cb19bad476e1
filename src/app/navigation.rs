use leptos::prelude::*;

const SECTIONS: [(&str, &str); 5] = [
    ("About", "#about"),
    ("Projects", "#projects"),
    ("Experience", "#experience"),
    ("Skills", "#skills"),
    ("Contact", "#contact"),
];

#[component]
pub fn Navigation() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    let links = move |class: &'static str| {
        SECTIONS
            .into_iter()
            .map(|(label, href)| {
                view! {
                    <a href=href class=class on:click=move |_| set_menu_open(false)>
                        {label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class="sticky top-0 z-50 bg-white/90 backdrop-blur shadow-sm">
            <nav class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <a href="#home" class="text-xl font-bold text-gray-900">
                        "Portfolio"
                    </a>
                    <div class="hidden md:flex space-x-8">
                        {links("text-gray-600 hover:text-blue-600 font-medium transition-colors")}
                    </div>
                    <button
                        class="md:hidden text-gray-600 hover:text-gray-900"
                        aria-label="Toggle navigation"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
                {move || {
                    menu_open
                        .get()
                        .then(|| {
                            view! {
                                <div class="md:hidden flex flex-col space-y-2 pb-4">
                                    {links("block px-2 py-2 text-gray-600 hover:text-blue-600")}
                                </div>
                            }
                        })
                }}
            </nav>
        </header>
    }
}
