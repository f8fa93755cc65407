use leptos::prelude::*;

/// Entrance-animation cue for the nav logo.
///
/// Every route change starts the animation, including the first render.
/// The logo ends it from `animationend` so the next navigation replays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoCue {
    playing: bool,
    last_route: Option<String>,
}

impl Default for LogoCue {
    fn default() -> Self {
        Self {
            playing: true,
            last_route: None,
        }
    }
}

impl LogoCue {
    pub fn route_changed(&mut self, path: &str) {
        self.playing = true;
        self.last_route = Some(path.to_owned());
    }

    pub fn animation_ended(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn last_route(&self) -> Option<&str> {
        self.last_route.as_deref()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogoSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl LogoSize {
    fn class(self) -> &'static str {
        match self {
            LogoSize::Sm => "w-6 h-6",
            LogoSize::Md => "w-8 h-8",
            LogoSize::Lg => "w-12 h-12",
        }
    }
}

#[component]
pub fn VroomieLogo(
    #[prop(optional)] size: LogoSize,
    #[prop(optional)] replay: Option<RwSignal<LogoCue>>,
) -> impl IntoView {
    let playing = move || replay.is_some_and(|cue| cue.with(LogoCue::is_playing));

    let class = move || {
        format!(
            "{} text-yellow-300 {}",
            size.class(),
            if playing() { "vroomie-logo-enter" } else { "" }
        )
    };

    view! {
        <svg
            class=class
            viewBox="0 0 32 32"
            fill="none"
            stroke="currentColor"
            stroke-width="2.5"
            stroke-linecap="round"
            stroke-linejoin="round"
            role="img"
            aria-label="Vroomie"
            on:animationend=move |_| {
                if let Some(cue) = replay {
                    cue.update(LogoCue::animation_ended);
                }
            }
        >
            <path d="M5 8 L16 26 L27 8"/>
            <path d="M10 8 L16 18 L22 8" stroke-width="1.5" opacity="0.6"/>
        </svg>
    }
}
