use std::cell::Cell;
use std::rc::Rc;

/// Cancellation flag shared between a magnifier and its dispatch loop
///
/// Clones observe the same flag. The loop checks `is_cancelled` before each
/// tick and stops rescheduling once it returns true.
#[derive(Clone, Debug, Default)]
pub struct GestureToken {
    flag: Rc<Cell<bool>>,
}

impl GestureToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.get()
    }

    pub fn cancel(&self) {
        self.flag.set(true);
    }
}
