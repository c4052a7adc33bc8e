/// Surface and adapter preferences for [`Gpu::new`](super::Gpu::new).
///
/// Every preference falls back to something the surface supports, so the
/// defaults work everywhere.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Pick an sRGB surface format if one exists. Sprite colors are linear,
    /// so an sRGB target does the encoding.
    pub prefer_srgb: bool,
    /// FIFO paces presentation to the display and is always available.
    pub present_mode: wgpu::PresentMode,
    /// Used only if the surface supports it.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,
    /// A handful of flat cards never needs a discrete GPU.
    pub power_preference: wgpu::PowerPreference,
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            power_preference: wgpu::PowerPreference::LowPower,
            desired_maximum_frame_latency: 2,
        }
    }
}
