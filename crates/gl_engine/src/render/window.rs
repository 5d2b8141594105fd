//! GLFW-based window and OpenGL context management
//!
//! Owns the GLFW handle, the window, and the loaded [`GlContext`]. Events
//! are polled once per frame; framebuffer resizes update the GL viewport
//! here so applications only deal with input.

use crate::config::WindowConfig;
use crate::render::{GlContext, RenderError};
use glfw::Context as _;
use glow::HasContext;

/// GLFW window wrapper with an OpenGL 3.3 core context
pub struct Window {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
    ctx: GlContext,
}

impl Window {
    /// Create the window, the GL context, and load the function table
    pub fn new(config: &WindowConfig) -> Result<Self, RenderError> {
        let mut glfw = glfw::init(glfw::fail_on_errors)
            .map_err(|e| RenderError::GlfwInit(e.to_string()))?;

        glfw.window_hint(glfw::WindowHint::ContextVersion(3, 3));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(
            glfw::OpenGlProfileHint::Core,
        ));
        #[cfg(target_os = "macos")]
        glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));
        glfw.window_hint(glfw::WindowHint::Resizable(true));

        let (mut window, events) = glfw
            .create_window(
                config.width,
                config.height,
                &config.title,
                glfw::WindowMode::Windowed,
            )
            .ok_or(RenderError::WindowCreation)?;

        window.make_current();
        window.set_key_polling(true);
        window.set_close_polling(true);
        window.set_framebuffer_size_polling(true);

        glfw.set_swap_interval(if config.vsync {
            glfw::SwapInterval::Sync(1)
        } else {
            glfw::SwapInterval::None
        });

        // Load the GL function table through GLFW's proc loader.
        let gl = unsafe {
            glow::Context::from_loader_function(|name| window.get_proc_address(name) as *const _)
        };
        let ctx = GlContext::new(gl);

        log::info!(
            "Created {}x{} window with OpenGL 3.3 core context",
            config.width,
            config.height
        );

        Ok(Self {
            glfw,
            window,
            events,
            ctx,
        })
    }

    /// Handle to the GL context for creating GPU resources
    pub fn context(&self) -> GlContext {
        self.ctx.clone()
    }

    /// Whether a close has been requested
    pub fn should_close(&self) -> bool {
        self.window.should_close()
    }

    /// Request the window to close
    pub fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    /// Poll window system events
    ///
    /// Framebuffer resize notifications update the GL viewport immediately.
    /// Key state is not consumed here; query it with [`Window::key_pressed`].
    pub fn poll_events(&mut self) {
        self.glfw.poll_events();
        for (_, event) in glfw::flush_messages(&self.events) {
            match event {
                glfw::WindowEvent::FramebufferSize(width, height) => {
                    log::debug!("Framebuffer resized to {width}x{height}");
                    unsafe {
                        self.ctx.raw().viewport(0, 0, width, height);
                    }
                }
                glfw::WindowEvent::Close => {
                    self.window.set_should_close(true);
                }
                _ => {}
            }
        }
    }

    /// Whether a key is currently held down
    pub fn key_pressed(&self, key: glfw::Key) -> bool {
        self.window.get_key(key) == glfw::Action::Press
    }

    /// Present the rendered frame
    pub fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    /// Framebuffer size in pixels
    pub fn framebuffer_size(&self) -> (u32, u32) {
        let (width, height) = self.window.get_framebuffer_size();
        (width as u32, height as u32)
    }

    /// Framebuffer aspect ratio (width / height)
    pub fn aspect_ratio(&self) -> f32 {
        let (width, height) = self.framebuffer_size();
        width as f32 / height.max(1) as f32
    }

    /// Seconds elapsed since GLFW initialization
    pub fn time(&self) -> f32 {
        self.glfw.get_time() as f32
    }
}
