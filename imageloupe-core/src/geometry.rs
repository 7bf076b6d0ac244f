use serde::{Deserialize, Serialize};

/// Browser viewport dimensions in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when either side is zero, negative or not a number.
    pub fn is_degenerate(&self) -> bool {
        is_degenerate(self.width, self.height)
    }
}

/// Rendered size of the image element at scale 1
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ContentSize {
    pub width: f64,
    pub height: f64,
}

impl ContentSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True until the element can be measured (both sides positive and finite).
    pub fn is_degenerate(&self) -> bool {
        is_degenerate(self.width, self.height)
    }
}

fn is_degenerate(width: f64, height: f64) -> bool {
    !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0)
}

/// One finger's page coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub x: f64,
    pub y: f64,
}

impl Contact {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Contact) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}
