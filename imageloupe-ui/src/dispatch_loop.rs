use gloo_timers::callback::Timeout;
use imageloupe_core::{GestureToken, MagnifierHandle, DEFAULT_CONFIG};

/// Run one dispatch tick now, then keep ticking every frame until `token`
/// is cancelled by touch end, touch cancel or destroy.
pub fn run_dispatch_loop(handle: MagnifierHandle, token: GestureToken) {
    if token.is_cancelled() {
        log::trace!("Dispatch loop for {} stopped", handle.id());
        return;
    }

    handle.tick();

    Timeout::new(DEFAULT_CONFIG.frame_interval_ms, move || {
        run_dispatch_loop(handle, token);
    })
    .forget();
}
