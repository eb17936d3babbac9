use std::sync::Arc;

use anyhow::Result;
use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;
use winit::dpi::PhysicalSize;
use winit::window::Window;

use sketchbook_engine::device::{Gpu, SurfaceErrorAction};
use sketchbook_engine::time::FrameTime;

use crate::meshes::cube;
use crate::sample::{self, Sample};

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

/// One 4x4 matrix.
const UNIFORM_SIZE: u64 = 4 * 16;

/// Vertical field of view, matching a 72-degree lens.
const FOV_Y: f32 = std::f32::consts::TAU / 5.0;
const Z_NEAR: f32 = 1.0;
const Z_FAR: f32 = 100.0;

/// A vertex-colored cube tumbling about a time-varying axis.
///
/// The MVP uniform is rewritten every frame from wall-clock seconds; the
/// mesh itself is uploaded once at setup and never touched again.
struct RotatingCube {
    gpu: Gpu,
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    depth_view: wgpu::TextureView,
    projection: Mat4,
}

pub fn setup(window: Arc<Window>) -> Result<Box<dyn Sample>> {
    let gpu = sample::acquire_gpu(window)?;
    let device = gpu.device();

    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("cube vertex buffer"),
        contents: bytemuck::cast_slice(&cube::VERTICES),
        usage: wgpu::BufferUsages::VERTEX,
    });

    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("cube mvp ubo"),
        size: UNIFORM_SIZE,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("cube bgl"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: std::num::NonZeroU64::new(UNIFORM_SIZE),
            },
            count: None,
        }],
    });

    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("cube bind group"),
        layout: &bind_group_layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });

    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("cube pipeline layout"),
        bind_group_layouts: &[&bind_group_layout],
        immediate_size: 0,
    });

    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("cube shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("shaders/cube.wgsl").into()),
    });

    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("cube pipeline"),
        layout: Some(&pipeline_layout),

        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            compilation_options: Default::default(),
            buffers: &[vertex_layout()],
        },

        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: gpu.surface_format(),
                blend: None,
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),

        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            // The cube is solid; faces pointing away from the camera are
            // always occluded.
            cull_mode: Some(wgpu::Face::Back),
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },

        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),

        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    });

    let depth_view = create_depth_view(device, gpu.size());
    let projection = Mat4::perspective_rh(FOV_Y, gpu.aspect_ratio(), Z_NEAR, Z_FAR);

    Ok(Box::new(RotatingCube {
        gpu,
        pipeline,
        vertex_buffer,
        uniform_buffer,
        bind_group,
        depth_view,
        projection,
    }))
}

impl Sample for RotatingCube {
    fn frame(&mut self, time: FrameTime) -> Result<()> {
        let mvp = self.projection * view_matrix(time.elapsed);
        self.gpu.queue().write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::cast_slice(&mvp.to_cols_array()),
        );

        let mut frame = match self.gpu.begin_frame() {
            Ok(frame) => frame,
            Err(err) => {
                return match self.gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Fatal => Err(anyhow::anyhow!("surface out of memory")),
                    _ => Ok(()),
                };
            }
        };

        {
            let mut rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("cube pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            rpass.draw(0..cube::VERTEX_COUNT, 0..1);
        }

        self.gpu.present(frame);
        Ok(())
    }

    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.gpu.resize(new_size);
        // Depth attachment must track the surface size exactly.
        self.depth_view = create_depth_view(self.gpu.device(), self.gpu.size());
        self.projection = Mat4::perspective_rh(FOV_Y, self.gpu.aspect_ratio(), Z_NEAR, Z_FAR);
    }

    fn cleanup(self: Box<Self>) {
        self.gpu.release();
    }
}

/// Only position and uv feed the shader; the interleaved color floats ride
/// along in the stride unused.
fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] = [
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x4,
            offset: cube::POSITION_OFFSET,
            shader_location: 0,
        },
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x2,
            offset: cube::UV_OFFSET,
            shader_location: 1,
        },
    ];

    wgpu::VertexBufferLayout {
        array_stride: cube::VERTEX_STRIDE,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &ATTRIBUTES,
    }
}

/// Camera four units back, model tumbling one radian about an axis that
/// itself sweeps with time.
fn view_matrix(seconds: f32) -> Mat4 {
    // (sin t, cos t, 0) is unit length for any t.
    let axis = Vec3::new(seconds.sin(), seconds.cos(), 0.0);
    Mat4::from_translation(Vec3::new(0.0, 0.0, -4.0)) * Mat4::from_axis_angle(axis, 1.0)
}

fn create_depth_view(device: &wgpu::Device, size: PhysicalSize<u32>) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("cube depth texture"),
        size: wgpu::Extent3d {
            width: size.width.max(1),
            height: size.height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });

    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn view_matrix_places_origin_four_units_in_front_of_camera() {
        for t in [0.0_f32, 0.7, 3.2, 100.0] {
            let p = view_matrix(t) * Vec4::new(0.0, 0.0, 0.0, 1.0);
            assert!((p.x).abs() < 1e-5);
            assert!((p.y).abs() < 1e-5);
            assert!((p.z + 4.0).abs() < 1e-5);
            assert!((p.w - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn view_matrix_preserves_distances() {
        // Rigid transform: a cube corner stays sqrt(3) from the cube center.
        let center = view_matrix(1.3) * Vec4::new(0.0, 0.0, 0.0, 1.0);
        let corner = view_matrix(1.3) * Vec4::new(1.0, 1.0, 1.0, 1.0);
        let d = (corner - center).truncate().length();
        assert!((d - 3.0_f32.sqrt()).abs() < 1e-4);
    }

    #[test]
    fn projection_maps_near_and_far_planes_to_wgpu_depth_range() {
        let proj = Mat4::perspective_rh(FOV_Y, 1.0, Z_NEAR, Z_FAR);

        let near = proj.project_point3(glam::Vec3::new(0.0, 0.0, -Z_NEAR));
        let far = proj.project_point3(glam::Vec3::new(0.0, 0.0, -Z_FAR));

        assert!(near.z.abs() < 1e-5);
        assert!((far.z - 1.0).abs() < 1e-4);
    }

    #[test]
    fn mvp_keeps_visible_cube_inside_clip_volume() {
        let proj = Mat4::perspective_rh(FOV_Y, 1.0, Z_NEAR, Z_FAR);
        let mvp = proj * view_matrix(0.4);

        let clip = mvp * Vec4::new(1.0, -1.0, 1.0, 1.0);
        assert!(clip.w > 0.0, "cube corners sit in front of the camera");
        assert!(clip.z >= 0.0 && clip.z <= clip.w);
    }
}
