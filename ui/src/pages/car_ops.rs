use leptos::prelude::*;
use leptos_meta::Title;

use crate::pages::{FeatureGrid, Hero};
use crate::routes::page_title;

const FEATURES: &[(&str, &str)] = &[
    ("Fluids", "Oil, coolant and washer levels tracked with reminders when they run low."),
    ("Fuel & charge", "Log fill-ups and charging sessions, see real running costs."),
    ("Paperwork", "Insurance, registration and inspection dates in one place."),
];

#[component]
pub fn CarOps() -> impl IntoView {
    view! {
        <Title text=page_title("CarOps")/>
        <Hero
            eyebrow="CarOps"
            title="Your car's day-to-day, handled."
            blurb="Everything it takes to keep a car on the road, tracked without the spreadsheet."
        />
        <FeatureGrid features=FEATURES />
    }
}
