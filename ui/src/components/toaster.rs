use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::components::icons::Icon;

pub const TOAST_LIMIT: usize = 1;
pub const TOAST_DURATION_MS: u32 = 5_000;

pub type ToastId = u64;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub title: String,
    pub description: Option<String>,
    pub variant: ToastVariant,
}

/// Newest-first list of visible toasts, capped at `limit`.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    next_id: ToastId,
    limit: usize,
    items: Vec<Toast>,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::with_limit(TOAST_LIMIT)
    }
}

impl ToastQueue {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            next_id: 1,
            limit: limit.max(1),
            items: Vec::new(),
        }
    }

    pub fn push(
        &mut self,
        title: impl Into<String>,
        description: Option<String>,
        variant: ToastVariant,
    ) -> ToastId {
        let id = self.next_id;
        self.next_id += 1;

        self.items.insert(
            0,
            Toast {
                id,
                title: title.into(),
                description,
                variant,
            },
        );
        self.items.truncate(self.limit);
        id
    }

    pub fn dismiss(&mut self, id: ToastId) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Handle to the app-wide toast queue.
#[derive(Clone, Copy)]
pub struct Toasts(RwSignal<ToastQueue>);

impl Toasts {
    pub fn push(
        &self,
        title: impl Into<String>,
        description: Option<String>,
        variant: ToastVariant,
    ) -> ToastId {
        let queue = self.0;
        let id = queue
            .try_update(|q| q.push(title, description, variant))
            .unwrap_or_default();

        // the queue may be gone by the time this fires
        Timeout::new(TOAST_DURATION_MS, move || {
            queue.try_update(|q| q.dismiss(id));
        })
        .forget();

        id
    }

    pub fn dismiss(&self, id: ToastId) {
        self.0.try_update(|q| q.dismiss(id));
    }
}

pub fn provide_toaster() -> Toasts {
    let toasts = Toasts(RwSignal::new(ToastQueue::default()));
    provide_context(toasts);
    toasts
}

pub fn use_toaster() -> Toasts {
    use_context::<Toasts>().unwrap_or_else(provide_toaster)
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toaster();

    let card = move |t: Toast| {
        let tone = match t.variant {
            ToastVariant::Default => "bg-zinc-900/95 border-yellow-300/30 text-white",
            ToastVariant::Destructive => "bg-red-900/95 border-red-400/40 text-red-50",
        };
        let id = t.id;

        view! {
            <li
                role="status"
                class=format!(
                    "pointer-events-auto relative flex w-full items-start gap-3 rounded-xl \
                     border p-4 pr-10 shadow-lg backdrop-blur-xl {}", tone)
            >
                <div class="grid gap-1">
                    <p class="text-sm font-semibold">{ t.title }</p>
                    { t.description.map(|d| view! { <p class="text-sm opacity-90">{ d }</p> }) }
                </div>
                <button
                    class="absolute right-2 top-2 rounded-md p-1 opacity-70 hover:opacity-100"
                    aria-label="Close"
                    on:click=move |_| toasts.dismiss(id)
                >
                    { Icon::X.view("w-4 h-4") }
                </button>
            </li>
        }
    };

    view! {
        <ol class="pointer-events-none fixed top-0 z-[100] flex max-h-screen w-full flex-col-reverse p-4 sm:bottom-0 sm:right-0 sm:top-auto sm:flex-col md:max-w-[420px]">
            <For
                each=move || toasts.0.with(|q| q.items().to_vec())
                key=|t| t.id
                children=card
            />
        </ol>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_toast_wins_at_default_limit() {
        let mut q = ToastQueue::default();
        let first = q.push("Saved", None, ToastVariant::Default);
        let second = q.push("Oops", Some("try again".into()), ToastVariant::Destructive);

        assert!(second > first);
        assert_eq!(q.items().len(), 1);
        assert_eq!(q.items()[0].title, "Oops");
        assert_eq!(q.items()[0].variant, ToastVariant::Destructive);
    }

    #[test]
    fn larger_limit_keeps_newest_first() {
        let mut q = ToastQueue::with_limit(3);
        for title in ["a", "b", "c", "d"] {
            q.push(title, None, ToastVariant::Default);
        }
        let titles: Vec<_> = q.items().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["d", "c", "b"]);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let mut q = ToastQueue::with_limit(2);
        let a = q.push("a", None, ToastVariant::Default);
        let b = q.push("b", None, ToastVariant::Default);

        q.dismiss(a);
        assert_eq!(q.items().len(), 1);
        assert_eq!(q.items()[0].id, b);

        q.dismiss(999);
        assert_eq!(q.items().len(), 1);

        q.dismiss(b);
        assert!(q.is_empty());
    }

    #[test]
    fn zero_limit_is_clamped() {
        let mut q = ToastQueue::with_limit(0);
        q.push("a", None, ToastVariant::Default);
        assert_eq!(q.items().len(), 1);
    }
}
