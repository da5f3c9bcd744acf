//! Scene camera and the two timed camera transitions (intro and fly-in).
//!
//! Transitions never hold on to the camera. Each tick receives the camera as a
//! [`CameraRig`] and writes the pose for that frame; whoever owns the
//! transition decides whether it keeps ticking.

use super::constants::*;
use super::easing::{self, ease_in_out_cubic, ease_in_out_quad, lerp, normalized_exp_out};
use glam::{EulerRot, Mat4, Quat, Vec3};

/// The mutable camera surface the transitions need.
pub trait CameraRig {
    fn position(&self) -> Vec3;
    fn set_position(&mut self, position: Vec3);
    /// Set orientation from XYZ Euler angles in radians.
    fn set_rotation(&mut self, euler: Vec3);
    /// Orient the camera so that -Z points at `target` with +Y up.
    fn look_at(&mut self, target: Vec3);
    fn far(&self) -> f32;
    /// Set the far plane and refresh the projection.
    fn set_far(&mut self, far: f32);
}

/// Right-handed perspective camera with a quaternion orientation.
#[derive(Clone, Debug)]
pub struct SceneCamera {
    pub position: Vec3,
    pub rotation: Quat,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for SceneCamera {
    fn default() -> Self {
        let mut cam = Self {
            position: CAMERA_START_POSITION,
            rotation: Quat::IDENTITY,
            aspect: 16.0 / 9.0,
            fovy_radians: CAMERA_FOV_Y_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        };
        cam.set_rotation(CAMERA_START_ROTATION);
        cam
    }
}

impl SceneCamera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position).inverse()
    }
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// World-space ray through a point in normalized device coordinates
    /// (`x`, `y` in `[-1, 1]`, +y up). Returns `(origin, direction)`.
    pub fn ray_through(&self, ndc_x: f32, ndc_y: f32) -> (Vec3, Vec3) {
        let tan_half = (self.fovy_radians * 0.5).tan();
        let dir = self.forward()
            + self.right() * (ndc_x * tan_half * self.aspect)
            + self.up() * (ndc_y * tan_half);
        (self.position, dir.normalize_or_zero())
    }
}

impl CameraRig for SceneCamera {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn set_rotation(&mut self, euler: Vec3) {
        self.rotation = Quat::from_euler(EulerRot::XYZ, euler.x, euler.y, euler.z);
    }

    fn look_at(&mut self, target: Vec3) {
        let dir = target - self.position;
        if dir.length_squared() <= f32::EPSILON {
            return;
        }
        // looking straight up/down needs a different up vector
        let up = if dir.normalize().cross(Vec3::Y).length_squared() < 1e-8 {
            Vec3::Z
        } else {
            Vec3::Y
        };
        let view = Mat4::look_at_rh(self.position, target, up);
        let (_, rotation, _) = view.inverse().to_scale_rotation_translation();
        self.rotation = rotation.normalize();
    }

    fn far(&self) -> f32 {
        self.zfar
    }

    fn set_far(&mut self, far: f32) {
        self.zfar = far;
    }
}

/// How a camera pose expresses its orientation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Orientation {
    Euler(Vec3),
    LookAt(Vec3),
}

/// Camera position and orientation for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub orientation: Orientation,
}

impl CameraPose {
    /// Write the pose: position first, then orientation, so a look-at uses
    /// this frame's position.
    pub fn apply(&self, camera: &mut impl CameraRig) {
        camera.set_position(self.position);
        match self.orientation {
            Orientation::Euler(euler) => camera.set_rotation(euler),
            Orientation::LookAt(target) => camera.look_at(target),
        }
    }
}

/// Result of advancing a transition by one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not started or already completed; nothing was written.
    Idle,
    Running,
    /// Reached progress 1.0 on this tick. Reported exactly once.
    Completed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct IntroParams {
    pub start_position: Vec3,
    pub end_position: Vec3,
    pub start_rotation: Vec3,
    pub end_rotation: Vec3,
    pub duration: f32,
}

impl Default for IntroParams {
    fn default() -> Self {
        Self {
            start_position: INTRO_START_POSITION,
            end_position: INTRO_END_POSITION,
            start_rotation: INTRO_START_ROTATION,
            end_rotation: INTRO_END_ROTATION,
            duration: INTRO_DURATION_SEC,
        }
    }
}

/// Scripted "drop then glide forward" move from a fixed start to a fixed end.
#[derive(Clone, Debug)]
pub struct IntroTransition {
    params: IntroParams,
    started_at: Option<f64>,
    completed: bool,
}

impl IntroTransition {
    pub fn new(params: IntroParams) -> Self {
        Self {
            params,
            started_at: None,
            completed: false,
        }
    }

    pub fn params(&self) -> &IntroParams {
        &self.params
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Place the camera at the start pose, widening the far plane first if the
    /// start point would otherwise be clipped.
    pub fn begin(&mut self, camera: &mut impl CameraRig, now: f64) {
        let reach = self.params.start_position.abs().max_element() * 2.0;
        if reach > camera.far() {
            camera.set_far(reach);
        }
        camera.set_position(self.params.start_position);
        camera.set_rotation(self.params.start_rotation);
        self.started_at = Some(now);
        self.completed = false;
        log::info!(
            "[intro] start=({:.1},{:.1},{:.1}) duration={:.2}s",
            self.params.start_position.x,
            self.params.start_position.y,
            self.params.start_position.z,
            self.params.duration
        );
    }

    /// Pose at `elapsed` seconds into the transition.
    pub fn sample(&self, elapsed: f32) -> CameraPose {
        let p = easing::progress(elapsed, self.params.duration);
        if p >= 1.0 {
            return CameraPose {
                position: self.params.end_position,
                orientation: Orientation::Euler(self.params.end_rotation),
            };
        }
        let (from, to) = (self.params.start_position, self.params.end_position);
        let y_t = normalized_exp_out(p, INTRO_Y_DECAY);
        let z_t = p.powf(INTRO_Z_POWER);
        let position = Vec3::new(
            lerp(from.x, to.x, p),
            lerp(from.y, to.y, y_t),
            lerp(from.z, to.z, z_t),
        );
        let rot_t = ease_in_out_cubic(p);
        let rotation = self.params.start_rotation.lerp(self.params.end_rotation, rot_t);
        CameraPose {
            position,
            orientation: Orientation::Euler(rotation),
        }
    }

    pub fn tick(&mut self, now: f64, camera: &mut impl CameraRig) -> TickOutcome {
        let Some(started_at) = self.started_at else {
            return TickOutcome::Idle;
        };
        if self.completed {
            return TickOutcome::Idle;
        }
        let elapsed = (now - started_at).max(0.0) as f32;
        self.sample(elapsed).apply(camera);
        if easing::progress(elapsed, self.params.duration) >= 1.0 {
            self.completed = true;
            log::info!("[intro] complete");
            TickOutcome::Completed
        } else {
            TickOutcome::Running
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FlyInParams {
    pub duration: f32,
    pub delay: f32,
    pub offset: f32,
}

impl Default for FlyInParams {
    fn default() -> Self {
        Self {
            duration: FLY_IN_DURATION_SEC,
            delay: FLY_IN_DELAY_SEC,
            offset: FLY_IN_OFFSET,
        }
    }
}

/// Both outputs of a fly-in for one frame: the camera pose and the fade.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlyInFrame {
    pub position: Vec3,
    /// `None` while the start delay holds the camera still.
    pub look_at: Option<Vec3>,
    /// Linear progress after the delay, `None` during the delay.
    pub progress: Option<f32>,
    /// Full-screen fade opacity in `[0, 1]`.
    pub fade: f32,
}

/// Camera move toward a world point, stopping short by `offset` along the
/// approach direction while looking at the point.
#[derive(Clone, Debug)]
pub struct FlyInTransition {
    start: Vec3,
    target: Vec3,
    params: FlyInParams,
    started_at: Option<f64>,
    completed: bool,
    fade: f32,
}

impl FlyInTransition {
    pub fn new(start: Vec3, target: Vec3, params: FlyInParams) -> Self {
        Self {
            start,
            target,
            params,
            started_at: None,
            completed: false,
            fade: 0.0,
        }
    }

    pub fn start(&self) -> Vec3 {
        self.start
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn fade(&self) -> f32 {
        self.fade
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Where the camera stops: the target pulled back along start→target.
    /// A zero-length approach has no direction, so no back-off is applied.
    pub fn destination(&self) -> Vec3 {
        let dir = (self.target - self.start).normalize_or_zero();
        self.target - dir * self.params.offset
    }

    pub fn sample(&self, elapsed: f32) -> FlyInFrame {
        if elapsed < self.params.delay {
            return FlyInFrame {
                position: self.start,
                look_at: None,
                progress: None,
                fade: 0.0,
            };
        }
        let p = easing::progress(elapsed - self.params.delay, self.params.duration);
        let position = self.start.lerp(self.destination(), ease_in_out_quad(p));
        FlyInFrame {
            position,
            look_at: Some(self.target),
            progress: Some(p),
            fade: ease_in_out_cubic(p),
        }
    }

    /// Advance one frame. The clock starts on the first tick.
    pub fn tick(&mut self, now: f64, camera: &mut impl CameraRig) -> TickOutcome {
        if self.completed {
            return TickOutcome::Idle;
        }
        let started_at = *self.started_at.get_or_insert(now);
        let elapsed = (now - started_at).max(0.0) as f32;
        let frame = self.sample(elapsed);
        camera.set_position(frame.position);
        if let Some(target) = frame.look_at {
            camera.look_at(target);
        }
        self.fade = frame.fade;
        if frame.progress == Some(1.0) {
            self.completed = true;
            log::info!("[flyin] complete");
            TickOutcome::Completed
        } else {
            TickOutcome::Running
        }
    }
}
