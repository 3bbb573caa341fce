//! Stereo camera and per-eye uniforms.
//!
//! The head tracker and the eye parameters are supplied by the host VR
//! framework. This module only combines them with the scene's fixed camera,
//! the terrain's model matrix and the light into the values a terrain shader
//! consumes, once per eye and frame. Mesh generation never depends on them.

use cgmath::{Deg, EuclideanSpace, Matrix4, Point3, SquareMatrix, Vector3, Vector4};

pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;
/// Distance of the camera behind the origin.
pub const CAMERA_Z: f32 = 0.01;
/// How far the terrain sits below the viewer.
pub const FLOOR_DEPTH: f32 = 20.0;
/// The light stays just above the user.
pub const LIGHT_POS_IN_WORLD_SPACE: [f32; 4] = [0.0, 2.0, 0.0, 1.0];

/// The fixed look-at camera the eye transforms are applied to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub eye: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Point3::new(0.0, 0.0, CAMERA_Z),
            target: Point3::origin(),
            up: Vector3::unit_y(),
        }
    }
}

impl Camera {
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// Placement of the terrain and the light in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scene {
    pub terrain_model: Matrix4<f32>,
    pub light_position: Vector4<f32>,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            terrain_model: Matrix4::from_translation(Vector3::new(0.0, -FLOOR_DEPTH, 0.0)),
            light_position: LIGHT_POS_IN_WORLD_SPACE.into(),
        }
    }
}

/// One eye's view transform and projection, as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Eye {
    pub view: Matrix4<f32>,
    pub projection: Matrix4<f32>,
}

impl Eye {
    /// An eye with the given view matrix and a symmetric perspective over
    /// `[Z_NEAR, Z_FAR]`.
    pub fn new(view: Matrix4<f32>, fov_y: Deg<f32>, aspect: f32) -> Self {
        Self {
            view,
            projection: Self::perspective(fov_y, aspect),
        }
    }

    pub fn perspective(fov_y: Deg<f32>, aspect: f32) -> Matrix4<f32> {
        cgmath::perspective(fov_y, aspect, Z_NEAR, Z_FAR)
    }

    /// Both eyes of a head pose, separated by `ipd` along the head's X axis.
    pub fn stereo_pair(head_view: Matrix4<f32>, ipd: f32, fov_y: Deg<f32>, aspect: f32) -> [Eye; 2] {
        let half = ipd / 2.0;
        // moving the eye left shifts the world right
        let left = Matrix4::from_translation(Vector3::new(half, 0.0, 0.0)) * head_view;
        let right = Matrix4::from_translation(Vector3::new(-half, 0.0, 0.0)) * head_view;
        [Eye::new(left, fov_y, aspect), Eye::new(right, fov_y, aspect)]
    }
}

/**
 * Uniform block of the terrain shader for one eye.
 *
 * Four matrices followed by the eye-space light position; the trailing float
 * pads the block to a 16 byte multiple.
 */
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct EyeUniform {
    pub model: [[f32; 4]; 4],
    pub model_view: [[f32; 4]; 4],
    pub model_view_projection: [[f32; 4]; 4],
    pub light_pos: [f32; 3],
    _padding: f32,
}

impl EyeUniform {
    pub fn new(scene: &Scene, camera: &Camera, eye: &Eye) -> Self {
        let view = eye.view * camera.view_matrix();
        let light = view * scene.light_position;
        let model_view = view * scene.terrain_model;
        let model_view_projection = eye.projection * model_view;
        Self {
            model: scene.terrain_model.into(),
            model_view: model_view.into(),
            model_view_projection: model_view_projection.into(),
            light_pos: light.truncate().into(),
            _padding: 0.0,
        }
    }

    /// Uniforms for an eye that sees exactly what the camera sees.
    pub fn centered(scene: &Scene, camera: &Camera) -> Self {
        let eye = Eye {
            view: Matrix4::identity(),
            projection: Matrix4::identity(),
        };
        Self::new(scene, camera, &eye)
    }
}
