use leptos::prelude::*;
use leptos_meta::Title;

use crate::pages::{FeatureGrid, Hero};
use crate::routes::page_title;

const FEATURES: &[(&str, &str)] = &[
    ("Health score", "One number for engine, brakes, battery and tyres, updated every drive."),
    ("Early warnings", "Catch wear trends weeks before a dashboard light comes on."),
    ("Service plans", "Book the right job at the right time, not on a fixed calendar."),
];

#[component]
pub fn PredictiveMaintenance() -> impl IntoView {
    view! {
        <Title text=page_title("PredictiveMaintenance")/>
        <Hero
            eyebrow="Predictive Maintenance"
            title="Fix it before it breaks."
            blurb="Vroomie reads your car's signals and tells you what needs attention next."
        />
        <FeatureGrid features=FEATURES />
    }
}
