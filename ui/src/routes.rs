// ui/src/routes.rs
use leptos::IntoView;
use leptos::component;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::view;
use leptos_router::components::Route;
use leptos_router::components::Routes;
use leptos_router::path;

use crate::pages::{
    car_ops::CarOps, detailing::DetailingMarketplace, landing::Landing,
    predictive_maintenance::PredictiveMaintenance,
};

/// A routable page: the name doubles as its URL segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub name: &'static str,
    pub title: &'static str,
}

/// Every page the router knows about. The first entry is the default page.
pub const PAGES: &[Page] = &[
    Page { name: "Landing", title: "Home" },
    Page { name: "PredictiveMaintenance", title: "Predictive Maintenance" },
    Page { name: "CarOps", title: "CarOps" },
    Page { name: "DetailingMarketplace", title: "Detailing Marketplace" },
];

/// Resolves a page name to the path it is served under.
pub fn create_page_url(page: &str) -> String {
    format!("/{}", page.replace(' ', "-"))
}

/// Picks the page a pathname belongs to, falling back to the default page.
pub fn page_name_for_path(path: &str) -> &'static str {
    let segment = path
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default();

    PAGES
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(segment))
        .unwrap_or(&PAGES[0])
        .name
}

pub fn page_title(name: &str) -> String {
    let title = PAGES
        .iter()
        .find(|p| p.name == name)
        .map(|p| p.title)
        .unwrap_or(name);
    format!("{title} | Vroomie")
}

#[component]
pub fn RoutesMenu() -> impl IntoView {
    view! {
      <Routes fallback=|| view! { <p class="p-8 text-gray-400">"404 – not found"</p> }>
        <Route path=path!("")                       view=Landing               />
        <Route path=path!("/Landing")               view=Landing               />
        <Route path=path!("/PredictiveMaintenance") view=PredictiveMaintenance />
        <Route path=path!("/CarOps")                view=CarOps                />
        <Route path=path!("/DetailingMarketplace")  view=DetailingMarketplace  />
      </Routes>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_url_is_slash_plus_name() {
        assert_eq!(create_page_url("Landing"), "/Landing");
        assert_eq!(create_page_url("CarOps"), "/CarOps");
        assert_eq!(create_page_url("Car Ops Hub"), "/Car-Ops-Hub");
    }

    #[test]
    fn page_url_is_deterministic() {
        assert_eq!(create_page_url("CarOps"), create_page_url("CarOps"));
    }

    #[test]
    fn every_page_has_a_matching_route_path() {
        // keep in step with the <Route> list above
        let routed = [
            "/Landing",
            "/PredictiveMaintenance",
            "/CarOps",
            "/DetailingMarketplace",
        ];
        for page in PAGES {
            assert!(routed.contains(&create_page_url(page.name).as_str()));
        }
    }

    #[test]
    fn root_and_unknown_paths_fall_back_to_landing() {
        assert_eq!(page_name_for_path("/"), "Landing");
        assert_eq!(page_name_for_path(""), "Landing");
        assert_eq!(page_name_for_path("/Garage"), "Landing");
    }

    #[test]
    fn page_lookup_uses_the_last_segment() {
        assert_eq!(page_name_for_path("/CarOps"), "CarOps");
        assert_eq!(page_name_for_path("/CarOps/"), "CarOps");
        assert_eq!(page_name_for_path("/carops"), "CarOps");
        assert_eq!(page_name_for_path("/a/b/DetailingMarketplace"), "DetailingMarketplace");
    }

    #[test]
    fn titles_carry_the_brand() {
        assert_eq!(page_title("Landing"), "Home | Vroomie");
        assert_eq!(page_title("Unknown"), "Unknown | Vroomie");
    }
}
