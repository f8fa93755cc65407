use leptos::prelude::*;

/// The handful of lucide glyphs the shell draws, inlined as SVG.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Zap,
    Activity,
    Droplets,
    Sparkles,
    Menu,
    X,
}

impl Icon {
    fn markup(self) -> &'static str {
        match self {
            Icon::Zap => r#"<polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2"/>"#,
            Icon::Activity => r#"<polyline points="22 12 18 12 15 21 9 3 6 12 2 12"/>"#,
            Icon::Droplets => concat!(
                r#"<path d="M7 16.3c2.2 0 4-1.83 4-4.05 0-1.16-.57-2.26-1.71-3.19S7.29 6.75 7 5.3c-.29 1.45-1.14 2.84-2.29 3.76S3 11.1 3 12.25c0 2.22 1.8 4.05 4 4.05z"/>"#,
                r#"<path d="M12.56 6.6A10.97 10.97 0 0 0 14 3.02c.5 2.5 2 4.9 4 6.5s3 3.5 3 5.5a6.98 6.98 0 0 1-11.91 4.97"/>"#,
            ),
            Icon::Sparkles => concat!(
                r#"<path d="m12 3-1.9 5.8a2 2 0 0 1-1.3 1.3L3 12l5.8 1.9a2 2 0 0 1 1.3 1.3L12 21l1.9-5.8a2 2 0 0 1 1.3-1.3L21 12l-5.8-1.9a2 2 0 0 1-1.3-1.3Z"/>"#,
                r#"<path d="M5 3v4"/><path d="M19 17v4"/><path d="M3 5h4"/><path d="M17 19h4"/>"#,
            ),
            Icon::Menu => concat!(
                r#"<line x1="4" x2="20" y1="12" y2="12"/>"#,
                r#"<line x1="4" x2="20" y1="6" y2="6"/>"#,
                r#"<line x1="4" x2="20" y1="18" y2="18"/>"#,
            ),
            Icon::X => r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#,
        }
    }

    /// `class` carries the size, e.g. `"w-4 h-4"`.
    pub fn view(self, class: &'static str) -> impl IntoView {
        view! {
            <svg
                class=class
                xmlns="http://www.w3.org/2000/svg"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                aria-hidden="true"
                inner_html=self.markup()
            ></svg>
        }
    }
}
