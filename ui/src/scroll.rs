//! Window scroll tracking for the nav bar.
//!
//! The listener is held by a [`ScrollWatch`] guard: attaching registers it
//! once, dropping the guard removes it once. The browser side goes through
//! [`ScrollHost`] so the lifecycle can be exercised without a DOM.

/// Offset in CSS pixels past which the nav bar counts as scrolled.
pub const SCROLL_THRESHOLD: f64 = 20.0;

pub fn is_scrolled(offset_y: f64) -> bool {
    offset_y > SCROLL_THRESHOLD
}

pub trait ScrollHost {
    type Listener;

    fn scroll_y(&self) -> f64;
    fn listen(&self, on_scroll: Box<dyn FnMut()>) -> Self::Listener;
    fn unlisten(&self, listener: Self::Listener);
}

pub struct ScrollWatch<H: ScrollHost> {
    host: H,
    listener: Option<H::Listener>,
}

impl<H> ScrollWatch<H>
where
    H: ScrollHost + Clone + 'static,
{
    /// `on_change` receives the derived scrolled flag on every scroll event.
    pub fn attach(host: H, mut on_change: impl FnMut(bool) + 'static) -> Self {
        let probe = host.clone();
        let listener = host.listen(Box::new(move || on_change(is_scrolled(probe.scroll_y()))));
        Self {
            host,
            listener: Some(listener),
        }
    }
}

impl<H: ScrollHost> Drop for ScrollWatch<H> {
    fn drop(&mut self) {
        if let Some(listener) = self.listener.take() {
            self.host.unlisten(listener);
        }
    }
}

/// The browser window, listened to through `leptos-use`.
#[derive(Clone, Copy, Default)]
pub struct WindowScroll;

impl ScrollHost for WindowScroll {
    type Listener = Box<dyn Fn() + Send + Sync>;

    fn scroll_y(&self) -> f64 {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or_default()
    }

    fn listen(&self, mut on_scroll: Box<dyn FnMut()>) -> Self::Listener {
        use leptos::ev;
        use leptos_use::{use_event_listener, use_window};

        let stop = use_event_listener(use_window(), ev::scroll, move |_| on_scroll());
        Box::new(stop)
    }

    fn unlisten(&self, listener: Self::Listener) {
        listener();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Default)]
    struct Page {
        offset: Cell<f64>,
        added: Cell<usize>,
        removed: Cell<usize>,
        handlers: RefCell<Vec<(usize, Box<dyn FnMut()>)>>,
    }

    #[derive(Clone, Default)]
    struct FakeWindow(Rc<Page>);

    impl FakeWindow {
        fn scroll_to(&self, y: f64) {
            self.0.offset.set(y);
            for (_, handler) in self.0.handlers.borrow_mut().iter_mut() {
                handler();
            }
        }

        fn live(&self) -> usize {
            self.0.handlers.borrow().len()
        }
    }

    impl ScrollHost for FakeWindow {
        type Listener = usize;

        fn scroll_y(&self) -> f64 {
            self.0.offset.get()
        }

        fn listen(&self, on_scroll: Box<dyn FnMut()>) -> usize {
            let id = self.0.added.get();
            self.0.added.set(id + 1);
            self.0.handlers.borrow_mut().push((id, on_scroll));
            id
        }

        fn unlisten(&self, listener: usize) {
            self.0.removed.set(self.0.removed.get() + 1);
            self.0.handlers.borrow_mut().retain(|(id, _)| *id != listener);
        }
    }

    #[test]
    fn threshold_is_strict() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(20.0));
        assert!(is_scrolled(20.5));
        assert!(is_scrolled(400.0));
    }

    #[test]
    fn watch_reports_each_scroll_event() {
        let window = FakeWindow::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();

        let _watch = ScrollWatch::attach(window.clone(), move |s| sink.borrow_mut().push(s));

        window.scroll_to(0.0);
        window.scroll_to(21.0);
        window.scroll_to(20.0);
        window.scroll_to(300.0);

        assert_eq!(*seen.borrow(), vec![false, true, false, true]);
    }

    #[test]
    fn one_listener_per_mount_and_none_left_after() {
        let window = FakeWindow::default();

        for round in 1..=3 {
            let watch = ScrollWatch::attach(window.clone(), |_| {});
            assert_eq!(window.0.added.get(), round);
            assert_eq!(window.live(), 1);

            drop(watch);
            assert_eq!(window.0.removed.get(), round);
            assert_eq!(window.live(), 0);
        }
    }

    #[test]
    fn detached_watch_stops_reporting() {
        let window = FakeWindow::default();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();

        let watch = ScrollWatch::attach(window.clone(), move |_| counter.set(counter.get() + 1));
        window.scroll_to(50.0);
        drop(watch);
        window.scroll_to(60.0);

        assert_eq!(hits.get(), 1);
    }
}
