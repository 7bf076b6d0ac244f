//! Shared magnifier context.
//!
//! One `LoupeContext` exists per page. It tracks the viewport size, the active
//! contact list and the registry of magnifiers, and fans global events
//! (touch end, resize, asset load) out to every registered instance.
//!
//! Borrow discipline: the context borrow is always released before any
//! magnifier is borrowed, so surface callbacks may read the context freely.

use crate::cancellation::GestureToken;
use crate::config::LoupeOptions;
use crate::contacts::ContactList;
use crate::geometry::ViewportSize;
use crate::magnifier::{DispatchOutcome, Magnifier};
use crate::registry::{InstanceId, Registry};
use crate::surface::Surface;
use std::cell::RefCell;
use std::rc::Rc;

struct ContextInner {
    viewport: ViewportSize,
    contacts: Option<ContactList>,
    listened: bool,
    registry: Registry,
}

#[derive(Clone)]
pub struct LoupeContext {
    inner: Rc<RefCell<ContextInner>>,
}

impl LoupeContext {
    pub fn new(viewport: ViewportSize) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ContextInner {
                viewport,
                contacts: None,
                listened: false,
                registry: Registry::new(),
            })),
        }
    }

    pub fn current_size(&self) -> ViewportSize {
        self.inner.borrow().viewport
    }

    pub fn contacts(&self) -> Option<ContactList> {
        self.inner.borrow().contacts.clone()
    }

    pub fn set_contacts(&self, contacts: Option<ContactList>) {
        self.inner.borrow_mut().contacts = contacts;
    }

    /// Returns true exactly once, for the caller that should install the
    /// page-wide resize subscription.
    pub fn claim_resize_listener(&self) -> bool {
        let mut inner = self.inner.borrow_mut();
        !std::mem::replace(&mut inner.listened, true)
    }

    pub fn instance_count(&self) -> usize {
        self.inner.borrow_mut().registry.live().len()
    }

    pub fn register(&self, options: LoupeOptions, surface: Box<dyn Surface>) -> MagnifierHandle {
        let magnifier = Rc::new(RefCell::new(Magnifier::new(options, surface)));
        let id = self.inner.borrow_mut().registry.insert(&magnifier);
        log::debug!("Registered {id}");
        MagnifierHandle {
            id,
            magnifier,
            context: self.clone(),
        }
    }

    /// Store the contacts and start a gesture on the touched instance.
    ///
    /// Returns the token for a new dispatch loop, or `None` when the instance
    /// is still loading or already has a loop running.
    pub fn touch_start(
        &self,
        handle: &MagnifierHandle,
        contacts: ContactList,
    ) -> Option<GestureToken> {
        self.set_contacts(Some(contacts));
        handle.magnifier.borrow_mut().begin_gesture()
    }

    pub fn touch_move(&self, contacts: ContactList) {
        self.set_contacts(Some(contacts));
    }

    /// Touch end and touch cancel: clear contacts and end every gesture.
    pub fn touch_end(&self) {
        self.set_contacts(None);
        for magnifier in self.live_instances() {
            magnifier.borrow_mut().end_gesture();
        }
    }

    /// Store the new size and recenter every instance.
    pub fn resize(&self, viewport: ViewportSize) {
        self.inner.borrow_mut().viewport = viewport;
        for magnifier in self.live_instances() {
            if let Err(e) = magnifier.borrow_mut().reset_position(viewport) {
                if e.is_deferred() {
                    log::debug!("Layout deferred: {e}");
                } else {
                    log::warn!("Layout failed: {e}");
                }
            }
        }
    }

    /// Mark `handle`'s asset decoded and run a full resize cycle.
    pub fn asset_loaded(&self, handle: &MagnifierHandle) {
        handle.magnifier.borrow_mut().mark_asset_loaded();
        log::debug!("{} decoded", handle.id);
        self.resize(self.current_size());
    }

    fn unregister(&self, id: InstanceId) -> bool {
        self.inner.borrow_mut().registry.remove(id)
    }

    fn live_instances(&self) -> Vec<Rc<RefCell<Magnifier>>> {
        self.inner.borrow_mut().registry.live()
    }
}

/// Owning handle to one registered magnifier
#[derive(Clone)]
pub struct MagnifierHandle {
    id: InstanceId,
    magnifier: Rc<RefCell<Magnifier>>,
    context: LoupeContext,
}

impl MagnifierHandle {
    pub fn id(&self) -> InstanceId {
        self.id
    }

    /// One dispatch tick against the shared contact list.
    pub fn tick(&self) -> DispatchOutcome {
        let contacts = self.context.contacts();
        self.magnifier.borrow_mut().dispatch(contacts.as_ref())
    }

    pub fn with<R>(&self, f: impl FnOnce(&Magnifier) -> R) -> R {
        f(&self.magnifier.borrow())
    }

    pub fn context(&self) -> &LoupeContext {
        &self.context
    }

    /// End any running gesture and remove this instance from the registry.
    pub fn destroy(self) {
        self.magnifier.borrow_mut().end_gesture();
        if self.context.unregister(self.id) {
            log::debug!("Destroyed {}", self.id);
        }
    }
}
