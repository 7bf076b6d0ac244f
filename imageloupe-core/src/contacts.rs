use crate::error::LoupeError;
use crate::geometry::Contact;
use crate::rounding::round_half_up;
use serde::{Deserialize, Serialize};

/// Gesture selected by the number of fingers on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    None,
    Pan,
    Pinch,
}

impl GestureKind {
    pub fn from_count(count: usize) -> Self {
        match count {
            0 => GestureKind::None,
            1 => GestureKind::Pan,
            _ => GestureKind::Pinch,
        }
    }
}

/// Ordered snapshot of the active touch points
///
/// Order matches the browser's `TouchEvent.touches` list: index 0 is the
/// oldest finger still down.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContactList {
    contacts: Vec<Contact>,
}

impl ContactList {
    pub fn new(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Contact> {
        self.contacts.get(index)
    }

    pub fn primary(&self) -> Option<&Contact> {
        self.get(0)
    }

    pub fn gesture(&self) -> GestureKind {
        GestureKind::from_count(self.len())
    }

    /// Distance between contacts 0 and 1, rounded to a whole pixel.
    pub fn pinch_distance(&self) -> Result<f64, LoupeError> {
        let first = self.get(0).ok_or(LoupeError::MissingContact { index: 0 })?;
        let second = self.get(1).ok_or(LoupeError::MissingContact { index: 1 })?;
        Ok(round_half_up(first.distance_to(second)))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }
}

impl FromIterator<Contact> for ContactList {
    fn from_iter<I: IntoIterator<Item = Contact>>(iter: I) -> Self {
        Self {
            contacts: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Contact>> for ContactList {
    fn from(contacts: Vec<Contact>) -> Self {
        Self::new(contacts)
    }
}
