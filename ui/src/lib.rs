pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod nav;
pub mod pages;
pub mod routes;
pub mod scroll;

pub use crate::app::App;

#[cfg(feature = "web")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    use leptos::mount::mount_to_body;
    use leptos::view;

    console_error_panic_hook::set_once();
    auth::maybe_redirect_to_login();
    mount_to_body(|| view! { <App/> });
}
