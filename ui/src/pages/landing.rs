use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::toaster::{ToastVariant, use_toaster};
use crate::nav::NAV_ITEMS;
use crate::pages::Hero;
use crate::routes::page_title;

#[component]
pub fn Landing() -> impl IntoView {
    let toasts = use_toaster();

    let notify = move |_| {
        toasts.push(
            "You're on the list",
            Some("We'll ping you when Vroomie opens in your city.".to_owned()),
            ToastVariant::Default,
        );
    };

    view! {
        <Title text=page_title("Landing")/>
        <Hero
            eyebrow="Next-gen car care"
            title="Predict, control, and beautify your ride."
            blurb="Vroomie watches your car's health, books the work, and finds the best detailers around you."
        >
            <div class="flex flex-wrap gap-3">
                <button
                    class="glow-animation px-6 py-3 rounded-full bg-yellow-300 text-zinc-900 font-semibold hover:bg-yellow-400 transition-colors"
                    on:click=notify
                >
                    "Join the waitlist"
                </button>
                <a href="#services" class="px-6 py-3 rounded-full border border-yellow-300/40 text-yellow-300 hover:bg-yellow-300/10">
                    "Explore services"
                </a>
            </div>
        </Hero>

        <section id="services" class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 pb-16">
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                // skip Home itself
                { NAV_ITEMS.iter().skip(1).map(|item| view! {
                    <a href=item.href() class="group rounded-2xl border border-yellow-300/20 bg-zinc-900/60 backdrop-blur-xl p-6 hover:border-yellow-300/50 transition-colors">
                        <div class="text-yellow-300 mb-4">{ item.icon.view("w-8 h-8") }</div>
                        <h3 class="text-lg font-semibold group-hover:text-yellow-300">{ item.name }</h3>
                    </a>
                }).collect_view() }
            </div>
        </section>
    }
}
