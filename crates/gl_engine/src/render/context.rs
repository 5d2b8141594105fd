//! Shared OpenGL context handle

use std::rc::Rc;

/// Handle to the OpenGL function table for one context
///
/// Cloning is cheap (reference-counted). Every GPU wrapper in this crate
/// stores a clone so it can issue calls without a process-global, and so its
/// `Drop` impl can release the underlying GL object.
///
/// OpenGL contexts are bound to the thread that created them, so this handle
/// is deliberately not `Send`: all rendering happens on the window's thread.
#[derive(Clone)]
pub struct GlContext {
    raw: Rc<glow::Context>,
}

impl GlContext {
    /// Wrap a loaded glow context
    pub(crate) fn new(gl: glow::Context) -> Self {
        Self { raw: Rc::new(gl) }
    }

    /// Access the raw glow context for issuing GL calls
    pub fn raw(&self) -> &glow::Context {
        &self.raw
    }
}

impl std::fmt::Debug for GlContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlContext").finish_non_exhaustive()
    }
}
