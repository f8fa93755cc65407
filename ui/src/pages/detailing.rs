use leptos::prelude::*;
use leptos_meta::Title;

use crate::pages::{FeatureGrid, Hero};
use crate::routes::page_title;

const FEATURES: &[(&str, &str)] = &[
    ("Vetted pros", "Every detailer is reviewed and rated by Vroomie drivers."),
    ("At your door", "Mobile detailing that comes to your driveway or office."),
    ("Fair prices", "Compare packages side by side before you book."),
];

#[component]
pub fn DetailingMarketplace() -> impl IntoView {
    view! {
        <Title text=page_title("DetailingMarketplace")/>
        <Hero
            eyebrow="Detailing Marketplace"
            title="Showroom shine, on demand."
            blurb="Find and book top-rated detailers near you."
        />
        <FeatureGrid features=FEATURES />
    }
}
