use crate::geometry::ContentSize;
use crate::transform::{Layout, Transform};

/// Rendering collaborator for one magnified image
///
/// Every method must be safe to call repeatedly with identical values.
pub trait Surface {
    /// Rendered size of the image at scale 1.
    fn content_size(&self) -> ContentSize;

    /// Switch the element into its active visual state.
    fn activate(&self);

    fn apply_layout(&self, layout: &Layout);

    fn apply_transform(&self, transform: &Transform);
}
