use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::logo::{LogoCue, LogoSize, VroomieLogo};
use crate::config::AppConfig;
use crate::nav::{MenuState, NAV_ITEMS, NavItem};
use crate::routes::create_page_url;
use crate::scroll::{ScrollWatch, WindowScroll};

const GLOBAL_STYLES: &str = r#"
:root {
  --vroomie-yellow: #FCD34D;
  --vroomie-yellow-dark: #F59E0B;
  --vroomie-black: #18181B;
  --vroomie-black-light: #27272A;
}

::-webkit-scrollbar { width: 8px; }
::-webkit-scrollbar-track { background: #18181B; }
::-webkit-scrollbar-thumb { background: #FCD34D; border-radius: 4px; }
::-webkit-scrollbar-thumb:hover { background: #F59E0B; }

@keyframes glow {
  0%, 100% { box-shadow: 0 0 20px rgba(252, 211, 77, 0.3); }
  50% { box-shadow: 0 0 40px rgba(252, 211, 77, 0.5); }
}
.glow-animation { animation: glow 3s ease-in-out infinite; }

@keyframes vroomie-logo-enter {
  0% { transform: translateX(-12px) scale(0.8); opacity: 0; }
  60% { transform: translateX(3px) scale(1.05); opacity: 1; }
  100% { transform: translateX(0) scale(1); opacity: 1; }
}
.vroomie-logo-enter { animation: vroomie-logo-enter 0.7s ease-out both; }
"#;

fn nav_bar_class(scrolled: bool) -> &'static str {
    if scrolled {
        "fixed top-0 left-0 right-0 z-50 transition-all duration-300 \
         backdrop-blur-xl bg-zinc-900/80 border-b border-yellow-300/20 shadow-lg shadow-yellow-300/10"
    } else {
        "fixed top-0 left-0 right-0 z-50 transition-all duration-300 \
         backdrop-blur-md bg-zinc-900/40"
    }
}

/// Persistent chrome around every page: nav bar, mobile menu, footer.
#[component]
pub fn Layout(
    #[prop(into)] current_page_name: Signal<String>,
    children: Children,
) -> impl IntoView {
    let location = use_location();
    let scrolled = RwSignal::new(false);
    let menu = RwSignal::new(MenuState::default());
    let logo_cue = RwSignal::new(LogoCue::default());

    Effect::new(move |_| {
        let path = location.pathname.get();
        logo_cue.update(|cue| cue.route_changed(&path));
    });

    let watch = ScrollWatch::attach(WindowScroll, move |s| {
        if scrolled.get_untracked() != s {
            scrolled.set(s);
        }
    });
    on_cleanup(move || drop(watch));

    let pathname = location.pathname;

    view! {
        <div
            class="min-h-screen bg-gradient-to-br from-zinc-950 via-zinc-900 to-black text-white"
            data-page=move || current_page_name.get()
        >
            <style>{ GLOBAL_STYLES }</style>

            <nav class=move || nav_bar_class(scrolled.get())>
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex justify-between items-center h-16 md:h-20">
                        <a href=create_page_url("Landing") class="flex items-center gap-3 group">
                            <div class="relative">
                                <div class="absolute inset-0 bg-gradient-to-br from-yellow-300 to-yellow-500 rounded-xl blur-md opacity-50 group-hover:opacity-75 transition-opacity"/>
                                <div class="relative bg-gradient-to-br from-yellow-300/20 to-yellow-500/20 p-2 rounded-xl border border-yellow-300/30">
                                    <VroomieLogo size=LogoSize::Md replay=logo_cue />
                                </div>
                            </div>
                            <span class="text-2xl font-bold bg-gradient-to-r from-yellow-300 to-yellow-500 bg-clip-text text-transparent">
                                "Vroomie"
                            </span>
                        </a>

                        <div class="hidden md:flex items-center gap-1">
                            { NAV_ITEMS.iter().map(|item| view! { <DesktopLink item pathname /> }).collect_view() }
                        </div>

                        <button
                            class="md:hidden p-2 rounded-lg bg-white/5 hover:bg-white/10 transition-colors"
                            aria-label="Toggle menu"
                            aria-expanded=move || menu.get().is_open().to_string()
                            on:click=move |_| menu.update(MenuState::tap)
                        >
                            { move || menu.get().toggle_icon().view("w-6 h-6 text-yellow-300") }
                        </button>
                    </div>
                </div>

                <Show when=move || menu.get().is_open()>
                    <div class="md:hidden backdrop-blur-xl bg-zinc-900/95 border-t border-yellow-300/20">
                        <div class="px-4 py-4 space-y-2">
                            { NAV_ITEMS.iter().map(|item| view! { <MobileLink item pathname menu /> }).collect_view() }
                        </div>
                    </div>
                </Show>
            </nav>

            <main class="pt-16 md:pt-20">{ children() }</main>

            <Footer/>
        </div>
    }
}

#[component]
fn DesktopLink(item: &'static NavItem, pathname: Memo<String>) -> impl IntoView {
    let active = move || pathname.with(|p| item.is_active(p));

    view! {
        <a
            href=item.href()
            aria-current=move || active().then_some("page")
            class=move || format!(
                "flex items-center gap-2 px-4 py-2 rounded-lg transition-all duration-200 {}",
                if active() {
                    "bg-yellow-300/20 text-yellow-300 shadow-lg shadow-yellow-300/20"
                } else {
                    "text-gray-300 hover:bg-white/5 hover:text-yellow-300"
                }
            )
        >
            { item.icon.view("w-4 h-4") }
            <span class="font-medium">{ item.name }</span>
        </a>
    }
}

#[component]
fn MobileLink(
    item: &'static NavItem,
    pathname: Memo<String>,
    menu: RwSignal<MenuState>,
) -> impl IntoView {
    let active = move || pathname.with(|p| item.is_active(p));

    view! {
        <a
            href=item.href()
            aria-current=move || active().then_some("page")
            on:click=move |_| menu.update(MenuState::select_link)
            class=move || format!(
                "flex items-center gap-3 px-4 py-3 rounded-lg transition-all duration-200 {}",
                if active() { "bg-yellow-300/20 text-yellow-300" } else { "text-gray-300 hover:bg-white/5" }
            )
        >
            { item.icon.view("w-5 h-5") }
            <span class="font-medium">{ item.name }</span>
        </a>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let config = AppConfig::from_build_env();

    view! {
        <footer class="relative mt-20 backdrop-blur-xl bg-zinc-900/80 border-t border-yellow-300/20">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    <div>
                        <div class="flex items-center gap-3 mb-4">
                            <div class="bg-gradient-to-br from-yellow-300/20 to-yellow-500/20 p-2 rounded-xl border border-yellow-300/30">
                                <VroomieLogo size=LogoSize::Sm />
                            </div>
                            <span class="text-xl font-bold text-yellow-300">"Vroomie"</span>
                        </div>
                        <p class="text-gray-400 text-sm">
                            "Next-gen car care powered by AI. Predict, control, and beautify your ride."
                        </p>
                    </div>

                    <div>
                        <h3 class="text-yellow-300 font-semibold mb-4">"Quick Links"</h3>
                        <ul class="space-y-2">
                            { NAV_ITEMS.iter().map(|item| view! {
                                <li>
                                    <a href=item.href() class="text-gray-400 hover:text-yellow-300 transition-colors text-sm">
                                        { item.name }
                                    </a>
                                </li>
                            }).collect_view() }
                        </ul>
                    </div>

                    <div>
                        <h3 class="text-yellow-300 font-semibold mb-4">"Connect"</h3>
                        <a href=format!("mailto:{}", config.support_email) class="block text-gray-400 hover:text-yellow-300 text-sm mb-2">
                            { config.support_email }
                        </a>
                        <p class="text-gray-400 text-sm">"© 2025 Vroomie. All rights reserved."</p>
                    </div>
                </div>
            </div>

            // glow line
            <div class="absolute bottom-0 left-1/2 -translate-x-1/2 w-1/2 h-px bg-gradient-to-r from-transparent via-yellow-300/50 to-transparent"/>
        </footer>
    }
}
