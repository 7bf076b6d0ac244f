use serde::{Deserialize, Serialize};

/// Affine transform applied to the image element
///
/// Uniform scale plus translation. Offsets are relative to the centered
/// position, so (0, 0) means the image sits in the middle of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        scale: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
    };

    pub fn new(scale: f64, offset_x: f64, offset_y: f64) -> Self {
        Self {
            scale,
            offset_x,
            offset_y,
        }
    }

    /// Matrix coefficients in CSS `matrix(a, b, c, d, e, f)` order.
    pub fn matrix(&self) -> [f64; 6] {
        [
            self.scale,
            0.0,
            0.0,
            self.scale,
            self.offset_x,
            self.offset_y,
        ]
    }

    pub fn to_css(&self) -> String {
        let m = self.matrix();
        format!(
            "matrix({}, {}, {}, {}, {}, {})",
            m[0], m[1], m[2], m[3], m[4], m[5]
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Container sizing and centering margin emitted on every reset
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Layout {
    /// Container width, always the viewport width
    pub container_width: f64,
    /// Container height, always the viewport height
    pub container_height: f64,
    pub margin_top: f64,
    pub margin_left: f64,
}

impl Layout {
    /// CSS `margin` shorthand: top, right, bottom, left.
    pub fn margin_css(&self) -> String {
        format!("{}px 0px 0px {}px", self.margin_top, self.margin_left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_matrix() {
        assert_eq!(Transform::IDENTITY.matrix(), [1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
        assert_eq!(Transform::default(), Transform::IDENTITY);
    }

    #[test]
    fn matrix_places_scale_on_diagonal() {
        let t = Transform::new(1.5, -20.0, 30.0);
        assert_eq!(t.matrix(), [1.5, 0.0, 0.0, 1.5, -20.0, 30.0]);
    }

    #[test]
    fn css_matrix_string() {
        let t = Transform::new(1.25, -20.0, 30.0);
        assert_eq!(t.to_css(), "matrix(1.25, 0, 0, 1.25, -20, 30)");
    }

    #[test]
    fn css_is_stable_across_calls() {
        let t = Transform::new(0.33, 4.0, -7.0);
        assert_eq!(t.to_css(), t.to_css());
    }

    #[test]
    fn margin_shorthand_puts_offsets_top_and_left() {
        let layout = Layout {
            container_width: 375.0,
            container_height: 667.0,
            margin_top: -32.0,
            margin_left: -15.0,
        };
        assert_eq!(layout.margin_css(), "-32px 0px 0px -15px");
    }
}
