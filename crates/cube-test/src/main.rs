use std::path::PathBuf;

use anyhow::Result;
use winit::dpi::LogicalSize;

use cube_engine::core::{App, AppControl, FrameCtx};
use cube_engine::device::GpuInit;
use cube_engine::logging::{init_logging, LoggingConfig};
use cube_engine::render::{transform, CubeRenderer, ShaderSources};
use cube_engine::time::FrameTimings;
use cube_engine::window::{Runtime, RuntimeConfig};

const VERTEX_SHADER: &str = "cube_vertex.wgsl";
const FRAGMENT_SHADER: &str = "cube_fragment.wgsl";

const CLEAR: wgpu::Color = wgpu::Color { r: 0.2, g: 0.2, b: 0.2, a: 1.0 };

/// Spins the cube and prints frame timings to stdout every frame.
struct CubeTest {
    renderer: CubeRenderer,
    timings: FrameTimings,
}

impl App for CubeTest {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let model = transform::spin(ctx.time.elapsed);

        let renderer = &mut self.renderer;
        let control = ctx.render(CLEAR, |rctx, target| renderer.render(rctx, target, model));

        self.timings.record(ctx.time.raw_dt_ms());
        println!("{}", self.timings.report());

        control
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let sources = ShaderSources::load_from_dirs(&shader_dirs(), VERTEX_SHADER, FRAGMENT_SHADER)?;
    log::info!("shaders loaded; opening window");

    let app = CubeTest {
        renderer: CubeRenderer::new(sources),
        timings: FrameTimings::new(),
    };

    Runtime::run(
        RuntimeConfig {
            title: "Cube Test".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
            resizable: false,
        },
        GpuInit {
            // Raw framebuffer writes, so the 0.2 grey clear stays 0.2.
            prefer_srgb: false,
            depth_format: Some(wgpu::TextureFormat::Depth32Float),
            ..GpuInit::default()
        },
        app,
    )
}

/// `resources/` under the working directory, then the one shipped with this crate.
fn shader_dirs() -> Vec<PathBuf> {
    vec![
        PathBuf::from("resources"),
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resources"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use cube_engine::render::shader::{FRAGMENT_ENTRY, VERTEX_ENTRY};
    use wgpu::naga;

    fn shipped() -> ShaderSources {
        ShaderSources::load_from_dirs(&shader_dirs(), VERTEX_SHADER, FRAGMENT_SHADER).unwrap()
    }

    fn validate(src: &str) -> naga::Module {
        let module = naga::front::wgsl::parse_str(src).unwrap();
        naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::empty(),
        )
        .validate(&module)
        .unwrap();
        module
    }

    #[test]
    fn shipped_shaders_are_found() {
        let s = shipped();
        assert!(!s.vertex.is_empty());
        assert!(!s.fragment.is_empty());
    }

    #[test]
    fn vertex_shader_validates_and_exports_entry() {
        let module = validate(&shipped().vertex);
        assert!(module.entry_points.iter().any(|ep| ep.name == VERTEX_ENTRY
            && ep.stage == naga::ShaderStage::Vertex));
    }

    #[test]
    fn fragment_shader_validates_and_exports_entry() {
        let module = validate(&shipped().fragment);
        assert!(module.entry_points.iter().any(|ep| ep.name == FRAGMENT_ENTRY
            && ep.stage == naga::ShaderStage::Fragment));
    }
}
