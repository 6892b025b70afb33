/// Everything `Gpu::new` needs besides the window.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Pick an sRGB swapchain format if the surface offers one; otherwise
    /// prefer a linear format so clear colors are written unconverted.
    pub prefer_srgb: bool,

    /// Swap behavior. `Fifo` (vsync) is the only mode every backend supports.
    pub present_mode: wgpu::PresentMode,

    /// Requested compositing alpha mode; replaced by a supported one if needed.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    pub required_features: wgpu::Features,
    pub required_limits: wgpu::Limits,

    /// Hint only; backends may clamp it.
    pub desired_maximum_frame_latency: u32,

    /// Depth buffer format. `None` renders without a depth attachment.
    pub depth_format: Option<wgpu::TextureFormat>,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
            depth_format: None,
        }
    }
}
