use winit::event::WindowEvent;
use winit::window::WindowId;

use super::ctx::FrameCtx;

/// Whether the runtime should keep the loop going after a callback.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// The program driven by [`crate::window::Runtime`].
///
/// The runtime owns the window and GPU context; the app owns everything it
/// draws and measures, and sees the GPU only through [`FrameCtx`].
pub trait App {
    /// Sees every window event before the runtime handles it.
    ///
    /// Closing the window exits regardless of the return value.
    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> AppControl {
        let _ = (window_id, event);
        AppControl::Continue
    }

    /// Called once per redraw, right after the frame clock ticks.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
