//! GPU rendering subsystem.
//!
//! Renderers own their GPU resources (pipelines, buffers) and record into a
//! `RenderTarget` handed out by the frame loop.
//!
//! Convention:
//! - world space is right-handed, +Y up, camera looking down -Z
//! - matrices are column-major (`glam::Mat4`), uploaded as `[[f32; 4]; 4]`

mod ctx;
pub mod cube;
pub mod mesh;
pub mod shader;
pub mod transform;

pub use ctx::{RenderCtx, RenderTarget};
pub use cube::CubeRenderer;
pub use shader::ShaderSources;
