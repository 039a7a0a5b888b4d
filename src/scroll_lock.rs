//! Page scroll lock held while a viewer overlay is open.
//!
//! The lock is a guard: acquiring it locks the surface, dropping it unlocks
//! it. Components keep the guard in state and drop it when the overlay
//! closes or the page unmounts.

pub trait ScrollSurface {
    fn set_scroll_locked(&self, locked: bool);
}

#[derive(Debug)]
pub struct ScrollLockGuard<S: ScrollSurface> {
    surface: S,
}

impl<S: ScrollSurface> ScrollLockGuard<S> {
    pub fn acquire(surface: S) -> Self {
        tracing::debug!("scroll-lock: acquire");
        surface.set_scroll_locked(true);
        Self { surface }
    }
}

impl<S: ScrollSurface> Drop for ScrollLockGuard<S> {
    fn drop(&mut self) {
        tracing::debug!("scroll-lock: release");
        self.surface.set_scroll_locked(false);
    }
}

/// Brings `slot` in line with `wants_lock`. An already held guard is kept.
pub fn sync_scroll_lock<S, F>(slot: &mut Option<ScrollLockGuard<S>>, wants_lock: bool, surface: F)
where
    S: ScrollSurface,
    F: FnOnce() -> S,
{
    match (wants_lock, slot.is_some()) {
        (true, false) => *slot = Some(ScrollLockGuard::acquire(surface())),
        (false, true) => *slot = None,
        _ => {}
    }
}

/// The document body of the current page.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentBody;

impl ScrollSurface for DocumentBody {
    fn set_scroll_locked(&self, locked: bool) {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(body) = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.body())
            else {
                return;
            };
            let value = if locked { "hidden" } else { "" };
            let _ = body.style().set_property("overflow", value);
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = locked;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<bool>>>);

    impl ScrollSurface for Recorder {
        fn set_scroll_locked(&self, locked: bool) {
            self.0.borrow_mut().push(locked);
        }
    }

    #[test]
    fn guard_unlocks_on_drop() {
        let recorder = Recorder::default();
        let guard = ScrollLockGuard::acquire(recorder.clone());
        assert_eq!(*recorder.0.borrow(), vec![true]);
        drop(guard);
        assert_eq!(*recorder.0.borrow(), vec![true, false]);
    }

    #[test]
    fn reopening_does_not_acquire_twice() {
        let recorder = Recorder::default();
        let mut slot = None;
        sync_scroll_lock(&mut slot, true, || recorder.clone());
        sync_scroll_lock(&mut slot, true, || recorder.clone());
        assert_eq!(*recorder.0.borrow(), vec![true]);

        sync_scroll_lock(&mut slot, false, || recorder.clone());
        sync_scroll_lock(&mut slot, false, || recorder.clone());
        assert!(slot.is_none());
        assert_eq!(*recorder.0.borrow(), vec![true, false]);
    }

    #[test]
    fn clearing_a_held_slot_unlocks_once() {
        let recorder = Recorder::default();
        let mut slot = None;
        sync_scroll_lock(&mut slot, true, || recorder.clone());
        slot = None;
        assert!(slot.is_none());
        assert_eq!(*recorder.0.borrow(), vec![true, false]);
    }
}
