//! Lit cube demo application
//!
//! Renders a rotating, textured, Phong-lit cube plus a small marker cube at
//! the light's position. A keyboard-driven Euler camera controls the view:
//! W/S pitch, A/D yaw, arrow keys move and strafe, Esc closes.

mod geometry;

use gl_engine::prelude::*;
use glow::HasContext;
use std::error::Error;
use std::path::{Path, PathBuf};

/// Uniform locations for the lit cube pass
///
/// The transform and lighting uniforms are required; a missing name is a
/// startup error. The sampler locations stay optional; a shader variant
/// without one of the textures still renders.
struct CubeUniforms {
    model: glow::UniformLocation,
    view: glow::UniformLocation,
    projection: glow::UniformLocation,
    ambient_strength: glow::UniformLocation,
    light_position: glow::UniformLocation,
    cam_pos: glow::UniformLocation,
    diffuse_sampler: Option<glow::UniformLocation>,
    specular_sampler: Option<glow::UniformLocation>,
}

/// Uniform locations for the light marker pass (none required)
struct LightUniforms {
    model: Option<glow::UniformLocation>,
    view: Option<glow::UniformLocation>,
    projection: Option<glow::UniformLocation>,
}

struct DemoApp {
    // GPU resources are declared before the window so they drop first,
    // while the GL context is still alive.
    cube_program: ShaderProgram,
    light_program: ShaderProgram,
    cube_binding: VertexAttributeBinding,
    light_binding: VertexAttributeBinding,
    // Buffers are shared between the two bindings; kept alive here.
    _positions: VertexBuffer,
    _tex_coords: VertexBuffer,
    _normals: VertexBuffer,
    diffuse_texture: Texture,
    specular_texture: Texture,
    cube_uniforms: CubeUniforms,
    light_uniforms: LightUniforms,
    camera: Camera,
    light_position: Vec3,
    ambient_strength: f32,
    ctx: GlContext,
    window: Window,
}

impl DemoApp {
    fn new() -> Result<Self, Box<dyn Error>> {
        let config = WindowConfig {
            title: "Lit Cube".to_string(),
            ..WindowConfig::default()
        };
        let window = Window::new(&config)?;
        let ctx = window.context();

        unsafe {
            ctx.raw().enable(glow::DEPTH_TEST);
        }

        // Shader programs: lit cube and light marker.
        let cube_program = ShaderProgram::link(
            &ctx,
            &load_shader_source(asset_path("shaders/cube.vert"))?,
            &load_shader_source(asset_path("shaders/cube.frag"))?,
        )?;
        let light_program = ShaderProgram::link(
            &ctx,
            &load_shader_source(asset_path("shaders/light.vert"))?,
            &load_shader_source(asset_path("shaders/light.frag"))?,
        )?;

        // One buffer per attribute, shared across both bindings.
        let positions = VertexBuffer::new(&ctx, &geometry::POSITIONS, 3)?;
        let tex_coords = VertexBuffer::new(&ctx, &geometry::TEX_COORDS, 2)?;
        let normals = VertexBuffer::new(&ctx, &geometry::NORMALS, 3)?;

        let mut cube_binding = VertexAttributeBinding::new(&ctx)?;
        cube_binding.bind_attribute("aPos", &cube_program, &positions)?;
        cube_binding.bind_attribute("textPos", &cube_program, &tex_coords)?;
        cube_binding.bind_attribute("aNormal", &cube_program, &normals)?;
        cube_binding.set_index_buffer(&geometry::QUAD_INDICES)?;

        let light_binding = VertexAttributeBinding::new(&ctx)?;
        light_binding.bind_attribute("aPos", &light_program, &positions)?;

        let diffuse_texture =
            load_texture_or_fallback(&ctx, &asset_path("resources/container2.png"))?;
        let specular_texture =
            load_texture_or_fallback(&ctx, &asset_path("resources/container2_specular.png"))?;

        let cube_uniforms = CubeUniforms {
            model: require_uniform(&cube_program, "model")?,
            view: require_uniform(&cube_program, "view")?,
            projection: require_uniform(&cube_program, "projection")?,
            ambient_strength: require_uniform(&cube_program, "ambientStrength")?,
            light_position: require_uniform(&cube_program, "lightPosition")?,
            cam_pos: require_uniform(&cube_program, "camPos")?,
            diffuse_sampler: cube_program.uniform_location("ourTexture"),
            specular_sampler: cube_program.uniform_location("refleTexture"),
        };
        let light_uniforms = LightUniforms {
            model: light_program.uniform_location("model"),
            view: light_program.uniform_location("view"),
            projection: light_program.uniform_location("projection"),
        };

        let camera = Camera::euler(Vec3::new(0.0, 0.0, 3.0), Vec3::new(0.0, 1.0, 0.0));

        Ok(Self {
            window,
            ctx,
            cube_program,
            light_program,
            cube_binding,
            light_binding,
            _positions: positions,
            _tex_coords: tex_coords,
            _normals: normals,
            diffuse_texture,
            specular_texture,
            cube_uniforms,
            light_uniforms,
            camera,
            light_position: Vec3::new(3.0, 0.0, -3.0),
            ambient_strength: 0.2,
        })
    }

    fn run(&mut self) -> Result<(), Box<dyn Error>> {
        log::info!("Entering render loop");
        while !self.window.should_close() {
            self.window.poll_events();
            self.process_input();
            self.render_frame();
            self.window.swap_buffers();
        }
        log::info!("Close requested, shutting down");
        Ok(())
    }

    /// Keyboard state poll, once per frame
    ///
    /// Esc closes; W/S pitch; A/D yaw; Up/Down move along the view
    /// direction; Right/Left strafe.
    fn process_input(&mut self) {
        if self.window.key_pressed(glfw::Key::Escape) {
            self.window.set_should_close(true);
        }
        if self.window.key_pressed(glfw::Key::W) {
            self.camera.pitch_up();
        }
        if self.window.key_pressed(glfw::Key::S) {
            self.camera.pitch_down();
        }
        if self.window.key_pressed(glfw::Key::A) {
            self.camera.yaw_left();
        }
        if self.window.key_pressed(glfw::Key::D) {
            self.camera.yaw_right();
        }
        if self.window.key_pressed(glfw::Key::Up) {
            self.camera.move_front();
        }
        if self.window.key_pressed(glfw::Key::Down) {
            self.camera.move_back();
        }
        if self.window.key_pressed(glfw::Key::Right) {
            self.camera.strafe_right();
        }
        if self.window.key_pressed(glfw::Key::Left) {
            self.camera.strafe_left();
        }
    }

    fn render_frame(&mut self) {
        let gl = self.ctx.raw();
        unsafe {
            gl.clear_color(0.2, 0.3, 0.3, 1.0);
            gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }

        let time = self.window.time();
        let view = self.camera.view_matrix();
        let projection = Mat4::perspective(
            45.0_f32.to_radians(),
            self.window.aspect_ratio(),
            0.1,
            100.0,
        );

        // Lit cube pass.
        self.cube_program.bind();
        self.diffuse_texture
            .bind_to_unit(0, self.cube_uniforms.diffuse_sampler.as_ref());
        self.specular_texture
            .bind_to_unit(1, self.cube_uniforms.specular_sampler.as_ref());
        self.cube_binding.bind();

        let model = Mat4::rotation_x(time);
        self.cube_program
            .set_mat4(Some(&self.cube_uniforms.model), &model);
        self.cube_program
            .set_mat4(Some(&self.cube_uniforms.view), &view);
        self.cube_program
            .set_mat4(Some(&self.cube_uniforms.projection), &projection);
        self.cube_program
            .set_vec3(Some(&self.cube_uniforms.cam_pos), self.camera.position());
        self.cube_program.set_f32(
            Some(&self.cube_uniforms.ambient_strength),
            self.ambient_strength,
        );
        self.cube_program
            .set_vec3(Some(&self.cube_uniforms.light_position), self.light_position);

        unsafe {
            // Array-mode draw: 36 vertices, 12 triangles, index buffer unused.
            gl.draw_arrays(glow::TRIANGLES, 0, geometry::VERTEX_COUNT);
        }

        // Light marker pass: small cube at the light's position.
        self.light_binding.bind();
        self.light_program.bind();
        let light_model = Mat4::new_translation(&self.light_position) * Mat4::new_scaling(0.2);
        self.light_program
            .set_mat4(self.light_uniforms.model.as_ref(), &light_model);
        self.light_program
            .set_mat4(self.light_uniforms.view.as_ref(), &view);
        self.light_program
            .set_mat4(self.light_uniforms.projection.as_ref(), &projection);

        unsafe {
            gl.draw_arrays(glow::TRIANGLES, 0, geometry::VERTEX_COUNT);
        }
    }
}

/// Resolve a demo asset path
///
/// Tries the working directory first, then falls back to the crate root so
/// `cargo run` works from anywhere in the workspace.
fn asset_path(relative: &str) -> PathBuf {
    let direct = PathBuf::from(relative);
    if direct.exists() {
        direct
    } else {
        Path::new(env!("CARGO_MANIFEST_DIR")).join(relative)
    }
}

fn require_uniform(
    program: &ShaderProgram,
    name: &str,
) -> Result<glow::UniformLocation, Box<dyn Error>> {
    program
        .uniform_location(name)
        .ok_or_else(|| format!("required uniform '{name}' missing from shader program").into())
}

/// Load a texture from disk, substituting a checkerboard when the asset is
/// missing so the demo runs from a clean checkout
fn load_texture_or_fallback(ctx: &GlContext, path: &Path) -> Result<Texture, Box<dyn Error>> {
    let image = match ImageData::from_file(path) {
        Ok(image) => image,
        Err(err) => {
            log::warn!("Falling back to generated texture for {path:?}: {err}");
            ImageData::checkerboard(64, 64, 8, [200, 120, 60, 255], [40, 30, 25, 255])
        }
    };
    Ok(Texture::from_image(ctx, &image)?)
}

fn main() {
    gl_engine::foundation::logging::init();

    let mut app = match DemoApp::new() {
        Ok(app) => app,
        Err(err) => {
            log::error!("Failed to initialize demo: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = app.run() {
        log::error!("Demo terminated with error: {err}");
        std::process::exit(1);
    }
}
