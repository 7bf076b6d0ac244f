use crate::magnifier::Magnifier;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Identifier handed out when a magnifier is registered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(u64);

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "loupe#{}", self.0)
    }
}

struct Entry {
    id: InstanceId,
    instance: Weak<RefCell<Magnifier>>,
}

/// Non-owning collection of every registered magnifier
///
/// Holds weak references, so dropping the last handle frees the instance even
/// if nobody unregistered it. Dead entries are pruned on the next `live()`.
#[derive(Default)]
pub struct Registry {
    entries: Vec<Entry>,
    next_id: u64,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, instance: &Rc<RefCell<Magnifier>>) -> InstanceId {
        let id = InstanceId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            instance: Rc::downgrade(instance),
        });
        id
    }

    /// Remove the entry for `id`. Returns false if it was already gone.
    pub fn remove(&mut self, id: InstanceId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Strong references to every instance still alive, in registration order.
    pub fn live(&mut self) -> Vec<Rc<RefCell<Magnifier>>> {
        self.entries.retain(|entry| entry.instance.strong_count() > 0);
        self.entries
            .iter()
            .filter_map(|entry| entry.instance.upgrade())
            .collect()
    }
}
