/// Initialization parameters for the GPU layer.
///
/// Sketches generally take the defaults; the struct exists so a sample with
/// a concrete requirement (uncapped present mode, extra latency) can state it
/// without touching the acquisition code.
#[derive(Debug, Clone)]
pub struct GpuConfig {
    /// Prefer an sRGB surface format when the surface offers one.
    pub prefer_srgb: bool,

    /// Present mode (swap behavior). FIFO is vsync and works everywhere.
    pub present_mode: wgpu::PresentMode,

    /// Required wgpu features. Empty keeps sketches portable.
    pub required_features: wgpu::Features,

    /// Limits requested from the adapter/device.
    pub required_limits: wgpu::Limits,

    /// Desired maximum frame latency hint for the surface.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuConfig {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}
