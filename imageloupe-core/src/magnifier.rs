//! Per-image pan/zoom state machine.
//!
//! A `Magnifier` owns the scale and offset of one image and turns contact
//! snapshots into transforms. It never reads shared state directly: the
//! context hands it the current contact list on each dispatch tick.

use crate::cancellation::GestureToken;
use crate::config::{LoupeOptions, DEFAULT_CONFIG};
use crate::contacts::{ContactList, GestureKind};
use crate::error::LoupeError;
use crate::geometry::{Contact, ContentSize, ViewportSize};
use crate::rounding::{round_half_up, round_to};
use crate::surface::Surface;
use crate::transform::{Layout, Transform};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// Waiting for the image to decode or become measurable
    Loading,
    /// Laid out, no gesture in progress
    Idle,
    /// A touch sequence started on this image; the dispatch loop is running
    Gesturing,
}

/// Result of one dispatch tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DispatchOutcome {
    /// Nothing to do: not gesturing, or no contacts on screen
    Skipped,
    /// First tick of a pan or pinch; the baseline was recorded
    Baselined,
    Panned(Transform),
    Zoomed(Transform),
    /// Contacts did not move enough to change the transform
    Unchanged,
}

/// Distance and scale captured when a pinch begins
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchBaseline {
    pub distance: f64,
    pub scale: f64,
}

pub struct Magnifier {
    options: LoupeOptions,
    surface: Box<dyn Surface>,
    state: LifecycleState,
    asset_ready: bool,
    viewport: ViewportSize,
    content: ContentSize,
    scale: f64,
    min_scale: f64,
    offset_x: f64,
    offset_y: f64,
    max_abs_x: f64,
    max_abs_y: f64,
    last_touch: Option<Contact>,
    pinch: Option<PinchBaseline>,
    token: Option<GestureToken>,
}

impl Magnifier {
    pub fn new(options: LoupeOptions, surface: Box<dyn Surface>) -> Self {
        Self {
            options,
            surface,
            state: LifecycleState::Loading,
            asset_ready: false,
            viewport: ViewportSize::default(),
            content: ContentSize::default(),
            scale: 1.0,
            min_scale: DEFAULT_CONFIG.initial_min_scale,
            offset_x: 0.0,
            offset_y: 0.0,
            max_abs_x: 0.0,
            max_abs_y: 0.0,
            last_touch: None,
            pinch: None,
            token: None,
        }
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn options(&self) -> &LoupeOptions {
        &self.options
    }

    pub fn is_asset_ready(&self) -> bool {
        self.asset_ready
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    pub fn offset(&self) -> (f64, f64) {
        (self.offset_x, self.offset_y)
    }

    pub fn max_abs_offset(&self) -> (f64, f64) {
        (self.max_abs_x, self.max_abs_y)
    }

    pub fn content_size(&self) -> ContentSize {
        self.content
    }

    pub fn last_touch(&self) -> Option<Contact> {
        self.last_touch
    }

    pub fn pinch_baseline(&self) -> Option<PinchBaseline> {
        self.pinch
    }

    pub fn current_transform(&self) -> Transform {
        Transform::new(self.scale, self.offset_x, self.offset_y)
    }

    /// Record that the image finished decoding. Layout waits for the next reset.
    pub fn mark_asset_loaded(&mut self) {
        self.asset_ready = true;
    }

    /// Measure, recompute bounds and center the image in `viewport`.
    ///
    /// Fails without touching the layout while the asset is still decoding or
    /// while either the viewport or the image measures zero.
    pub fn reset_position(&mut self, viewport: ViewportSize) -> Result<Transform, LoupeError> {
        if !self.asset_ready {
            return Err(LoupeError::AssetLoadIncomplete);
        }

        // Active styling can change the rendered size, so it goes on before measuring
        self.surface.activate();

        let content = self.surface.content_size();
        let min_scale = compute_min_scale(viewport, content)?;

        self.viewport = viewport;
        self.content = content;
        self.min_scale = min_scale;
        self.scale = min_scale.max(DEFAULT_CONFIG.min_scale_floor);

        let (margin_left, margin_top) = centering_offset(viewport, content, self.scale);
        self.max_abs_x = margin_left.abs();
        self.max_abs_y = margin_top.abs();

        self.surface.apply_layout(&Layout {
            container_width: viewport.width,
            container_height: viewport.height,
            margin_top,
            margin_left,
        });

        if self.state == LifecycleState::Loading {
            self.state = LifecycleState::Idle;
            log::debug!(
                "Magnifier ready: content={}x{}, min_scale={}, scale={}",
                content.width,
                content.height,
                self.min_scale,
                self.scale
            );
        }

        Ok(self.set_position(0.0, 0.0))
    }

    /// Move to `(x, y)`, clamped so no empty space shows past the image edges.
    pub fn set_position(&mut self, x: f64, y: f64) -> Transform {
        let (bound_x, bound_y) = centering_offset(self.viewport, self.content, self.scale);
        self.max_abs_x = bound_x.abs();
        self.max_abs_y = bound_y.abs();

        self.offset_x = clamp_abs(round_half_up(x), self.max_abs_x);
        self.offset_y = clamp_abs(round_half_up(y), self.max_abs_y);

        let transform = self.current_transform();
        self.surface.apply_transform(&transform);
        transform
    }

    /// Enter `Gesturing` and hand out the token the dispatch loop should watch.
    ///
    /// Returns `None` while loading or when a gesture is already running, so a
    /// second finger landing does not start a second loop.
    pub fn begin_gesture(&mut self) -> Option<GestureToken> {
        if self.state != LifecycleState::Idle {
            return None;
        }
        let token = GestureToken::new();
        self.token = Some(token.clone());
        self.state = LifecycleState::Gesturing;
        Some(token)
    }

    /// Drop every gesture baseline and stop the dispatch loop.
    pub fn end_gesture(&mut self) {
        self.last_touch = None;
        self.pinch = None;
        if let Some(token) = self.token.take() {
            token.cancel();
        }
        if self.state == LifecycleState::Gesturing {
            self.state = LifecycleState::Idle;
        }
    }

    /// Run one tick against the current contact snapshot.
    pub fn dispatch(&mut self, contacts: Option<&ContactList>) -> DispatchOutcome {
        if self.state != LifecycleState::Gesturing {
            return DispatchOutcome::Skipped;
        }
        let Some(contacts) = contacts else {
            return DispatchOutcome::Skipped;
        };

        let outcome = match contacts.gesture() {
            GestureKind::None => DispatchOutcome::Skipped,
            GestureKind::Pan => self.pan_primary(contacts),
            GestureKind::Pinch => self.zoom(contacts),
        };
        log::trace!("dispatch: {} contacts -> {:?}", contacts.len(), outcome);
        outcome
    }

    /// Single-finger pan toward `current`.
    pub fn pan(&mut self, current: Contact) -> DispatchOutcome {
        let Some(last) = self.last_touch else {
            self.last_touch = Some(current);
            return DispatchOutcome::Baselined;
        };
        if last == current {
            return DispatchOutcome::Unchanged;
        }

        let transform = self.set_position(
            self.offset_x + (current.x - last.x),
            self.offset_y + (current.y - last.y),
        );
        self.last_touch = Some(current);
        DispatchOutcome::Panned(transform)
    }

    /// Two-finger zoom relative to the distance at pinch start.
    pub fn zoom(&mut self, contacts: &ContactList) -> DispatchOutcome {
        let distance = match contacts.pinch_distance() {
            Ok(distance) => distance,
            Err(e) => {
                log::debug!("Pinch fell back to pan: {e}");
                return self.pan_primary(contacts);
            }
        };

        let baseline = match self.pinch {
            Some(baseline) if baseline.distance > 0.0 => baseline,
            _ => {
                self.pinch = Some(PinchBaseline {
                    distance,
                    scale: self.scale,
                });
                return DispatchOutcome::Baselined;
            }
        };

        let proposed = round_to(
            distance / baseline.distance * baseline.scale,
            DEFAULT_CONFIG.scale_steps,
        );
        let scale = proposed.min(DEFAULT_CONFIG.max_scale).max(self.min_scale);
        if scale == self.scale {
            return DispatchOutcome::Unchanged;
        }

        self.scale = scale;
        DispatchOutcome::Zoomed(self.set_position(self.offset_x, self.offset_y))
    }

    fn pan_primary(&mut self, contacts: &ContactList) -> DispatchOutcome {
        match contacts.primary() {
            Some(contact) => self.pan(*contact),
            None => DispatchOutcome::Skipped,
        }
    }
}

/// Smallest scale at which the image still covers the viewport on both axes.
pub fn compute_min_scale(viewport: ViewportSize, content: ContentSize) -> Result<f64, LoupeError> {
    if viewport.is_degenerate() || content.is_degenerate() {
        return Err(LoupeError::DegenerateGeometry { viewport, content });
    }
    let steps = DEFAULT_CONFIG.scale_steps;
    Ok(round_to(viewport.width / content.width, steps)
        .max(round_to(viewport.height / content.height, steps)))
}

/// Offset that centers `content` at `scale`, per axis, in whole pixels.
/// Its magnitude is also the furthest the image may be panned.
pub fn centering_offset(viewport: ViewportSize, content: ContentSize, scale: f64) -> (f64, f64) {
    (
        round_half_up((viewport.width - content.width * scale) / 2.0),
        round_half_up((viewport.height - content.height * scale) / 2.0),
    )
}

fn clamp_abs(value: f64, max_abs: f64) -> f64 {
    value.min(max_abs).max(-max_abs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Activate,
        Layout(Layout),
        Transform(Transform),
    }

    #[derive(Clone, Default)]
    struct RecordingSurface {
        content: Rc<Cell<ContentSize>>,
        calls: Rc<RefCell<Vec<Call>>>,
    }

    impl RecordingSurface {
        fn sized(width: f64, height: f64) -> Self {
            let surface = Self::default();
            surface.content.set(ContentSize::new(width, height));
            surface
        }

        fn transforms(&self) -> Vec<Transform> {
            self.calls
                .borrow()
                .iter()
                .filter_map(|c| match c {
                    Call::Transform(t) => Some(*t),
                    _ => None,
                })
                .collect()
        }
    }

    impl Surface for RecordingSurface {
        fn content_size(&self) -> ContentSize {
            self.content.get()
        }

        fn activate(&self) {
            self.calls.borrow_mut().push(Call::Activate);
        }

        fn apply_layout(&self, layout: &Layout) {
            self.calls.borrow_mut().push(Call::Layout(*layout));
        }

        fn apply_transform(&self, transform: &Transform) {
            self.calls.borrow_mut().push(Call::Transform(*transform));
        }
    }

    const PHONE: ViewportSize = ViewportSize {
        width: 375.0,
        height: 667.0,
    };

    fn ready_magnifier(surface: &RecordingSurface) -> Magnifier {
        let mut magnifier = Magnifier::new(LoupeOptions::default(), Box::new(surface.clone()));
        magnifier.mark_asset_loaded();
        magnifier.reset_position(PHONE).unwrap();
        magnifier
    }

    fn contacts(points: &[(f64, f64)]) -> ContactList {
        points.iter().map(|&(x, y)| Contact::new(x, y)).collect()
    }

    // ============================================================================
    // Lifecycle
    // ============================================================================

    #[test]
    fn new_magnifier_is_loading() {
        let magnifier = Magnifier::new(LoupeOptions::default(), Box::new(RecordingSurface::default()));
        assert_eq!(magnifier.state(), LifecycleState::Loading);
        assert_eq!(magnifier.scale(), 1.0);
        assert_eq!(magnifier.min_scale(), 0.5);
        assert_eq!(magnifier.offset(), (0.0, 0.0));
    }

    #[test]
    fn reset_before_decode_is_deferred() {
        let surface = RecordingSurface::sized(1125.0, 2001.0);
        let mut magnifier = Magnifier::new(LoupeOptions::default(), Box::new(surface.clone()));

        let result = magnifier.reset_position(PHONE);

        assert!(matches!(result, Err(LoupeError::AssetLoadIncomplete)));
        assert_eq!(magnifier.state(), LifecycleState::Loading);
        assert!(surface.calls.borrow().is_empty());
    }

    #[test]
    fn zero_sized_content_stays_loading() {
        let surface = RecordingSurface::sized(0.0, 0.0);
        let mut magnifier = Magnifier::new(LoupeOptions::default(), Box::new(surface.clone()));
        magnifier.mark_asset_loaded();

        let result = magnifier.reset_position(PHONE);

        assert!(matches!(result, Err(LoupeError::DegenerateGeometry { .. })));
        assert_eq!(magnifier.state(), LifecycleState::Loading);
        assert!(magnifier.begin_gesture().is_none());
        assert!(surface.transforms().is_empty());
        // Styled before measuring, even when the measurement then fails
        assert_eq!(*surface.calls.borrow(), vec![Call::Activate]);
    }

    #[test]
    fn zero_sized_viewport_stays_loading() {
        let surface = RecordingSurface::sized(1125.0, 2001.0);
        let mut magnifier = Magnifier::new(LoupeOptions::default(), Box::new(surface));
        magnifier.mark_asset_loaded();

        let result = magnifier.reset_position(ViewportSize::new(0.0, 0.0));

        assert!(matches!(result, Err(LoupeError::DegenerateGeometry { .. })));
        assert_eq!(magnifier.state(), LifecycleState::Loading);
    }

    #[test]
    fn reset_lays_out_and_centers() {
        let surface = RecordingSurface::sized(1125.0, 2001.0);
        let magnifier = ready_magnifier(&surface);

        assert_eq!(magnifier.state(), LifecycleState::Idle);
        assert_eq!(magnifier.min_scale(), 0.33);
        assert_eq!(magnifier.scale(), 1.0);
        assert_eq!(magnifier.max_abs_offset(), (375.0, 667.0));

        let calls = surface.calls.borrow();
        assert_eq!(calls[0], Call::Activate);
        assert_eq!(
            calls[1],
            Call::Layout(Layout {
                container_width: 375.0,
                container_height: 667.0,
                margin_top: -667.0,
                margin_left: -375.0,
            })
        );
        assert_eq!(calls[2], Call::Transform(Transform::IDENTITY));
    }

    #[test]
    fn small_image_scales_up_to_cover() {
        // 375 / 250 = 1.5, 667 / 500 = 1.334 -> 1.33
        let surface = RecordingSurface::sized(250.0, 500.0);
        let magnifier = ready_magnifier(&surface);

        assert_eq!(magnifier.min_scale(), 1.5);
        assert_eq!(magnifier.scale(), 1.5);
    }

    // ============================================================================
    // Pan
    // ============================================================================

    #[test]
    fn first_pan_tick_only_baselines() {
        let surface = RecordingSurface::sized(1125.0, 2001.0);
        let mut magnifier = ready_magnifier(&surface);
        magnifier.begin_gesture().unwrap();

        let outcome = magnifier.dispatch(Some(&contacts(&[(100.0, 200.0)])));

        assert_eq!(outcome, DispatchOutcome::Baselined);
        assert_eq!(magnifier.offset(), (0.0, 0.0));
        assert_eq!(magnifier.last_touch(), Some(Contact::new(100.0, 200.0)));
    }

    #[test]
    fn pan_adds_touch_delta_to_offset() {
        let surface = RecordingSurface::sized(1125.0, 2001.0);
        let mut magnifier = ready_magnifier(&surface);
        magnifier.begin_gesture().unwrap();

        magnifier.dispatch(Some(&contacts(&[(100.0, 200.0)])));
        let outcome = magnifier.dispatch(Some(&contacts(&[(120.0, 230.0)])));

        assert_eq!(
            outcome,
            DispatchOutcome::Panned(Transform::new(1.0, 20.0, 30.0))
        );
        assert_eq!(magnifier.last_touch(), Some(Contact::new(120.0, 230.0)));
    }

    #[test]
    fn stationary_finger_emits_nothing() {
        let surface = RecordingSurface::sized(1125.0, 2001.0);
        let mut magnifier = ready_magnifier(&surface);
        magnifier.begin_gesture().unwrap();
        let before = surface.transforms().len();

        magnifier.dispatch(Some(&contacts(&[(50.0, 50.0)])));
        let outcome = magnifier.dispatch(Some(&contacts(&[(50.0, 50.0)])));

        assert_eq!(outcome, DispatchOutcome::Unchanged);
        assert_eq!(surface.transforms().len(), before);
    }

    #[test]
    fn pan_past_edge_clamps_to_bound() {
        let surface = RecordingSurface::sized(1125.0, 2001.0);
        let mut magnifier = ready_magnifier(&surface);
        magnifier.begin_gesture().unwrap();

        magnifier.dispatch(Some(&contacts(&[(0.0, 0.0)])));
        magnifier.dispatch(Some(&contacts(&[(-5000.0, 5000.0)])));

        assert_eq!(magnifier.offset(), (-375.0, 667.0));
    }

    #[test]
    fn pan_rounds_fractional_touches() {
        let surface = RecordingSurface::sized(1125.0, 2001.0);
        let mut magnifier = ready_magnifier(&surface);
        magnifier.begin_gesture().unwrap();

        magnifier.dispatch(Some(&contacts(&[(0.0, 0.0)])));
        magnifier.dispatch(Some(&contacts(&[(10.5, -10.5)])));

        assert_eq!(magnifier.offset(), (11.0, -10.0));
    }

    // ============================================================================
    // Zoom
    // ============================================================================

    #[test]
    fn first_pinch_tick_only_baselines() {
        let surface = RecordingSurface::sized(1125.0, 2001.0);
        let mut magnifier = ready_magnifier(&surface);
        magnifier.begin_gesture().unwrap();

        let outcome = magnifier.dispatch(Some(&contacts(&[(0.0, 0.0), (100.0, 0.0)])));

        assert_eq!(outcome, DispatchOutcome::Baselined);
        assert_eq!(
            magnifier.pinch_baseline(),
            Some(PinchBaseline {
                distance: 100.0,
                scale: 1.0
            })
        );
        assert_eq!(magnifier.scale(), 1.0);
    }

    #[test]
    fn pinch_scales_relative_to_baseline() {
        let surface = RecordingSurface::sized(1125.0, 2001.0);
        let mut magnifier = ready_magnifier(&surface);
        magnifier.begin_gesture().unwrap();

        magnifier.dispatch(Some(&contacts(&[(0.0, 0.0), (100.0, 0.0)])));
        let outcome = magnifier.dispatch(Some(&contacts(&[(0.0, 0.0), (150.0, 0.0)])));

        assert_eq!(outcome, DispatchOutcome::Zoomed(Transform::new(1.5, 0.0, 0.0)));
        // (375 - 1687.5) / 2 = -656.25, (667 - 3001.5) / 2 = -1167.25
        assert_eq!(magnifier.max_abs_offset(), (656.0, 1167.0));
    }

    #[test]
    fn zoom_without_second_contact_pans_instead() {
        let surface = RecordingSurface::sized(1125.0, 2001.0);
        let mut magnifier = ready_magnifier(&surface);
        magnifier.begin_gesture().unwrap();

        assert_eq!(
            magnifier.zoom(&contacts(&[(10.0, 10.0)])),
            DispatchOutcome::Baselined
        );
        let outcome = magnifier.zoom(&contacts(&[(30.0, 40.0)]));

        assert_eq!(outcome, DispatchOutcome::Panned(Transform::new(1.0, 20.0, 30.0)));
        assert_eq!(magnifier.pinch_baseline(), None);
        assert_eq!(magnifier.scale(), 1.0);
    }

    #[test]
    fn pinch_is_capped_at_max_scale() {
        let surface = RecordingSurface::sized(1125.0, 2001.0);
        let mut magnifier = ready_magnifier(&surface);
        magnifier.begin_gesture().unwrap();

        magnifier.dispatch(Some(&contacts(&[(0.0, 0.0), (100.0, 0.0)])));
        magnifier.dispatch(Some(&contacts(&[(0.0, 0.0), (400.0, 0.0)])));
        assert_eq!(magnifier.scale(), 2.0);

        // Spreading further cannot change anything
        let outcome = magnifier.dispatch(Some(&contacts(&[(0.0, 0.0), (800.0, 0.0)])));
        assert_eq!(outcome, DispatchOutcome::Unchanged);
    }

    #[test]
    fn pinch_is_floored_at_min_scale() {
        let surface = RecordingSurface::sized(1125.0, 2001.0);
        let mut magnifier = ready_magnifier(&surface);
        magnifier.begin_gesture().unwrap();

        magnifier.dispatch(Some(&contacts(&[(0.0, 0.0), (100.0, 0.0)])));
        magnifier.dispatch(Some(&contacts(&[(0.0, 0.0), (20.0, 0.0)])));

        assert_eq!(magnifier.scale(), 0.33);
    }

    #[test]
    fn zoom_out_pulls_offset_back_inside_bounds() {
        let surface = RecordingSurface::sized(1125.0, 2001.0);
        let mut magnifier = ready_magnifier(&surface);
        magnifier.begin_gesture().unwrap();

        magnifier.dispatch(Some(&contacts(&[(0.0, 0.0)])));
        magnifier.dispatch(Some(&contacts(&[(400.0, 700.0)])));
        assert_eq!(magnifier.offset(), (375.0, 667.0));

        magnifier.dispatch(Some(&contacts(&[(0.0, 0.0), (100.0, 0.0)])));
        magnifier.dispatch(Some(&contacts(&[(0.0, 0.0), (50.0, 0.0)])));

        // At 0.5: (375 - 562.5) / 2 = -93.75, (667 - 1000.5) / 2 = -166.75
        assert_eq!(magnifier.scale(), 0.5);
        assert_eq!(magnifier.offset(), (94.0, 167.0));
    }

    #[test]
    fn coincident_fingers_rebaseline_instead_of_dividing_by_zero() {
        let surface = RecordingSurface::sized(1125.0, 2001.0);
        let mut magnifier = ready_magnifier(&surface);
        magnifier.begin_gesture().unwrap();

        magnifier.dispatch(Some(&contacts(&[(10.0, 10.0), (10.0, 10.0)])));
        let outcome = magnifier.dispatch(Some(&contacts(&[(0.0, 0.0), (100.0, 0.0)])));

        assert_eq!(outcome, DispatchOutcome::Baselined);
        assert!(magnifier.scale().is_finite());
        assert_eq!(magnifier.pinch_baseline().unwrap().distance, 100.0);
    }

    // ============================================================================
    // Dispatch gating
    // ============================================================================

    #[test]
    fn dispatch_outside_gesture_is_skipped() {
        let surface = RecordingSurface::sized(1125.0, 2001.0);
        let mut magnifier = ready_magnifier(&surface);

        let outcome = magnifier.dispatch(Some(&contacts(&[(0.0, 0.0)])));

        assert_eq!(outcome, DispatchOutcome::Skipped);
        assert_eq!(magnifier.last_touch(), None);
    }

    #[test]
    fn empty_contact_list_idles() {
        let surface = RecordingSurface::sized(1125.0, 2001.0);
        let mut magnifier = ready_magnifier(&surface);
        magnifier.begin_gesture().unwrap();

        assert_eq!(magnifier.dispatch(None), DispatchOutcome::Skipped);
        assert_eq!(
            magnifier.dispatch(Some(&ContactList::default())),
            DispatchOutcome::Skipped
        );
        assert_eq!(magnifier.state(), LifecycleState::Gesturing);
    }

    #[test]
    fn second_begin_does_not_start_another_loop() {
        let surface = RecordingSurface::sized(1125.0, 2001.0);
        let mut magnifier = ready_magnifier(&surface);

        let token = magnifier.begin_gesture();
        assert!(token.is_some());
        assert!(magnifier.begin_gesture().is_none());
    }

    #[test]
    fn end_gesture_clears_baselines_and_cancels_token() {
        let surface = RecordingSurface::sized(1125.0, 2001.0);
        let mut magnifier = ready_magnifier(&surface);
        let token = magnifier.begin_gesture().unwrap();
        magnifier.dispatch(Some(&contacts(&[(1.0, 1.0)])));
        magnifier.dispatch(Some(&contacts(&[(0.0, 0.0), (100.0, 0.0)])));

        magnifier.end_gesture();

        assert!(token.is_cancelled());
        assert_eq!(magnifier.state(), LifecycleState::Idle);
        assert_eq!(magnifier.last_touch(), None);
        assert_eq!(magnifier.pinch_baseline(), None);
    }

    // ============================================================================
    // Output
    // ============================================================================

    #[test]
    fn current_transform_is_pure() {
        let surface = RecordingSurface::sized(1125.0, 2001.0);
        let magnifier = ready_magnifier(&surface);
        let emitted = surface.calls.borrow().len();

        assert_eq!(magnifier.current_transform(), magnifier.current_transform());
        assert_eq!(surface.calls.borrow().len(), emitted);
    }

    #[test]
    fn reapplying_position_emits_identical_transform() {
        let surface = RecordingSurface::sized(1125.0, 2001.0);
        let mut magnifier = ready_magnifier(&surface);

        let first = magnifier.set_position(12.0, -40.0);
        let second = magnifier.set_position(12.0, -40.0);

        assert_eq!(first, second);
        let transforms = surface.transforms();
        assert_eq!(transforms[transforms.len() - 1], transforms[transforms.len() - 2]);
    }

    #[test]
    fn compute_min_scale_rejects_zero_content() {
        let result = compute_min_scale(PHONE, ContentSize::new(0.0, 100.0));
        assert!(matches!(result, Err(LoupeError::DegenerateGeometry { .. })));
    }

    #[test]
    fn centering_offset_is_negative_for_oversized_content() {
        assert_eq!(
            centering_offset(PHONE, ContentSize::new(1125.0, 2001.0), 1.0),
            (-375.0, -667.0)
        );
    }
}
