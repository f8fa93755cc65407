use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::components::Router;
use leptos_router::hooks::use_location;

use crate::components::layout::Layout;
use crate::components::toaster::{Toaster, provide_toaster};
use crate::routes::{RoutesMenu, page_name_for_path};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_toaster();

    view! {
      <Router>
        <Pages/>
      </Router>
      <Toaster/>
    }
}

/// Matched page inside the shell; needs the router context, hence its own component.
#[component]
fn Pages() -> impl IntoView {
    let location = use_location();
    let current_page = Signal::derive(move || {
        location.pathname.with(|p| page_name_for_path(p).to_owned())
    });

    view! {
      <Layout current_page_name=current_page>
        <RoutesMenu/>
      </Layout>
    }
}
