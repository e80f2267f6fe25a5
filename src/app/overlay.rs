use leptos::{ev, prelude::*};
use leptos_use::{use_document, use_event_listener};

use crate::contact::scroll_lock::{BodyScroll, ScrollLock, ScrollTarget};

/// Locks page scrolling until the current reactive owner is cleaned up.
pub fn hold_scroll_lock<T: ScrollTarget + 'static>(target: Option<T>) {
    let lock = StoredValue::new_local(target.map(ScrollLock::acquire));
    on_cleanup(move || {
        lock.try_update_value(|lock| {
            lock.take();
        });
    });
}

/// Modal shell: dimmed backdrop, close button and Escape key all call `on_close`.
/// Body scrolling stays locked while it is mounted.
#[component]
pub fn Overlay(
    on_close: Callback<()>,
    #[prop(default = "max-w-3xl")] width: &'static str,
    children: Children,
) -> impl IntoView {
    hold_scroll_lock(BodyScroll::current());

    let _ = use_event_listener(use_document(), ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    });

    view! {
        <div
            class="fixed inset-0 z-50 flex items-start justify-center overflow-y-auto bg-black/70 backdrop-blur-sm p-4"
            on:click=move |_| on_close.run(())
        >
            <div
                class={format!(
                    "relative w-full {width} my-8 p-6 rounded-lg bg-background border border-muted/30 shadow-2xl",
                )}
                role="dialog"
                aria-modal="true"
                on:click=|ev| ev.stop_propagation()
            >
                <button
                    class="absolute top-4 right-4 text-muted hover:text-foreground"
                    aria-label="Close"
                    on:click=move |_| on_close.run(())
                >
                    "✕"
                </button>
                {children()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Clone, Default)]
    struct FakeBody(Rc<RefCell<String>>);

    impl ScrollTarget for FakeBody {
        fn overflow(&self) -> String {
            self.0.borrow().clone()
        }

        fn set_overflow(&self, value: &str) {
            *self.0.borrow_mut() = value.to_string();
        }
    }

    #[test]
    fn test_scroll_released_when_owner_cleaned_up() {
        let body = FakeBody::default();
        body.set_overflow("auto");

        let owner = Owner::new();
        owner.with(|| hold_scroll_lock(Some(body.clone())));
        assert_eq!(body.overflow(), "hidden");

        owner.cleanup();
        assert_eq!(body.overflow(), "auto");
    }

    #[test]
    fn test_sibling_owners_release_independently() {
        let body = FakeBody::default();
        let quote = Owner::new();
        quote.with(|| hold_scroll_lock(Some(body.clone())));
        quote.cleanup();
        assert_eq!(body.overflow(), "");

        let certificate = Owner::new();
        certificate.with(|| hold_scroll_lock(Some(body.clone())));
        assert_eq!(body.overflow(), "hidden");
        certificate.cleanup();
        assert_eq!(body.overflow(), "");
    }

    #[test]
    fn test_missing_body_is_a_no_op() {
        let owner = Owner::new();
        owner.with(|| hold_scroll_lock(None::<FakeBody>));
        owner.cleanup();
    }
}
