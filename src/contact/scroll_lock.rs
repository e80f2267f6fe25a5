/// Something whose scrolling can be switched off through its `overflow` style.
pub trait ScrollTarget {
    fn overflow(&self) -> String;
    fn set_overflow(&self, value: &str);
}

/// Keeps the page from scrolling while held; the previous `overflow` comes back on drop.
pub struct ScrollLock<T: ScrollTarget> {
    target: T,
    previous: String,
}

impl<T: ScrollTarget> ScrollLock<T> {
    pub fn acquire(target: T) -> Self {
        let previous = target.overflow();
        target.set_overflow("hidden");
        Self { target, previous }
    }
}

impl<T: ScrollTarget> Drop for ScrollLock<T> {
    fn drop(&mut self) {
        self.target.set_overflow(&self.previous);
    }
}

/// The document body of the current page.
pub struct BodyScroll(web_sys::HtmlElement);

impl BodyScroll {
    pub fn current() -> Option<Self> {
        web_sys::window()?.document()?.body().map(Self)
    }
}

impl ScrollTarget for BodyScroll {
    fn overflow(&self) -> String {
        self.0
            .style()
            .get_property_value("overflow")
            .unwrap_or_default()
    }

    fn set_overflow(&self, value: &str) {
        let style = self.0.style();
        let res = if value.is_empty() {
            style.remove_property("overflow").map(|_| ())
        } else {
            style.set_property("overflow", value)
        };
        if let Err(err) = res {
            log::warn!("couldn't update body overflow: {err:?}");
        }
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
    fn test_lock_hides_overflow_until_dropped() {
        let body = FakeBody::default();
        let lock = ScrollLock::acquire(body.clone());
        assert_eq!(body.overflow(), "hidden");
        drop(lock);
        assert_eq!(body.overflow(), "");
    }

    #[test]
    fn test_previous_value_restored() {
        let body = FakeBody::default();
        body.set_overflow("auto");
        {
            let _lock = ScrollLock::acquire(body.clone());
            assert_eq!(body.overflow(), "hidden");
        }
        assert_eq!(body.overflow(), "auto");
    }

    #[test]
    fn test_option_take_releases() {
        let body = FakeBody::default();
        let mut held = Some(ScrollLock::acquire(body.clone()));
        held.take();
        assert_eq!(body.overflow(), "");
        assert!(held.is_none());
    }
}
