pub mod cancellation;
pub mod config;
pub mod contacts;
pub mod context;
pub mod error;
pub mod geometry;
pub mod magnifier;
pub mod registry;
pub mod rounding;
pub mod surface;
pub mod transform;

pub use cancellation::GestureToken;
pub use config::{LoupeConfig, LoupeOptions, DEFAULT_CONFIG};
pub use contacts::{ContactList, GestureKind};
pub use context::{LoupeContext, MagnifierHandle};
pub use error::LoupeError;
pub use geometry::{Contact, ContentSize, ViewportSize};
pub use magnifier::{
    centering_offset, compute_min_scale, DispatchOutcome, LifecycleState, Magnifier,
    PinchBaseline,
};
pub use registry::{InstanceId, Registry};
pub use rounding::{round_half_up, round_to};
pub use surface::Surface;
pub use transform::{Layout, Transform};
