use winit::dpi::PhysicalSize;

use super::SurfaceErrorAction;

/// Picks a surface format from the adapter's capability list.
///
/// With `prefer_srgb` set, the first sRGB-capable format wins; otherwise (or
/// when no sRGB format exists) the surface's first listed format is used,
/// which wgpu orders by preference.
pub(crate) fn choose_surface_format(
    formats: &[wgpu::TextureFormat],
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    if prefer_srgb {
        if let Some(f) = formats.iter().find(|f| f.is_srgb()) {
            return Some(*f);
        }
    }
    formats.first().copied()
}

/// Applies a resize to the surface configuration.
///
/// wgpu cannot configure a 0x0 surface (minimized window); in that case only
/// the bookkeeping size is updated and reconfiguration is deferred until a
/// non-zero size arrives.
pub(crate) fn apply_resize(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &mut wgpu::SurfaceConfiguration,
    size: &mut PhysicalSize<u32>,
    new_size: PhysicalSize<u32>,
) {
    *size = new_size;
    if new_size.width == 0 || new_size.height == 0 {
        return;
    }

    config.width = new_size.width;
    config.height = new_size.height;
    surface.configure(device, config);
}

/// Maps a `SurfaceError` to the action the frame loop should take,
/// reconfiguring the surface where that can recover it.
pub(crate) fn map_surface_error(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    size: PhysicalSize<u32>,
    err: wgpu::SurfaceError,
) -> SurfaceErrorAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
            if size.width > 0 && size.height > 0 {
                surface.configure(device, config);
            }
            SurfaceErrorAction::Reconfigured
        }
        wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        wgpu::SurfaceError::Timeout => SurfaceErrorAction::SkipFrame,
        wgpu::SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::TextureFormat::{Bgra8Unorm, Bgra8UnormSrgb, Rgba8Unorm, Rgba8UnormSrgb};

    #[test]
    fn srgb_preferred_when_available() {
        let formats = [Bgra8Unorm, Bgra8UnormSrgb, Rgba8UnormSrgb];
        assert_eq!(choose_surface_format(&formats, true), Some(Bgra8UnormSrgb));
    }

    #[test]
    fn falls_back_to_first_format_without_srgb() {
        let formats = [Bgra8Unorm, Rgba8Unorm];
        assert_eq!(choose_surface_format(&formats, true), Some(Bgra8Unorm));
    }

    #[test]
    fn srgb_preference_disabled_takes_first() {
        let formats = [Bgra8Unorm, Bgra8UnormSrgb];
        assert_eq!(choose_surface_format(&formats, false), Some(Bgra8Unorm));
    }

    #[test]
    fn empty_capability_list_yields_none() {
        assert_eq!(choose_surface_format(&[], true), None);
    }
}
