pub mod car_ops;
pub mod detailing;
pub mod landing;
pub mod predictive_maintenance;

use leptos::prelude::*;

/// Shared hero block for the feature pages.
#[component]
pub fn Hero(
    eyebrow: &'static str,
    title: &'static str,
    blurb: &'static str,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <section class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-20 md:py-28">
            <p class="text-sm uppercase tracking-widest text-yellow-300/80 mb-4">{ eyebrow }</p>
            <h1 class="text-4xl sm:text-6xl font-bold leading-tight mb-6">{ title }</h1>
            <p class="max-w-2xl text-lg text-gray-300 mb-10">{ blurb }</p>
            { children.map(|c| c()) }
        </section>
    }
}

#[component]
pub fn FeatureGrid(features: &'static [(&'static str, &'static str)]) -> impl IntoView {
    view! {
        <section class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 pb-16">
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                { features.iter().map(|(name, text)| view! {
                    <article class="rounded-2xl border border-yellow-300/20 bg-zinc-900/60 backdrop-blur-xl p-6">
                        <h3 class="text-lg font-semibold text-yellow-300 mb-2">{ *name }</h3>
                        <p class="text-sm text-gray-400">{ *text }</p>
                    </article>
                }).collect_view() }
            </div>
        </section>
    }
}
