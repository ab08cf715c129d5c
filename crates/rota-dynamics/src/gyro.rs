use crate::integrator::{self, Dynamics};
use rota::{Mat4, Quat, Vec3};

/// Homogeneous rectangular box with edge lengths `a`, `b`, `c` along the
/// body x, y, z axes.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cuboid {
    pub mass: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl Cuboid {
    pub fn new(mass: f32, a: f32, b: f32, c: f32) -> Self {
        Self { mass, a, b, c }
    }

    /// Principal moments of inertia `[I1, I2, I3]` about the box center.
    pub fn inertia(&self) -> [f32; 3] {
        let k = self.mass / 12.0;
        let (a2, b2, c2) = (self.a * self.a, self.b * self.b, self.c * self.c);
        [k * (b2 + c2), k * (a2 + c2), k * (a2 + b2)]
    }
}

impl Default for Cuboid {
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }
}

/// Torque-free rigid body spinning about its center of mass.
///
/// Phase vector layout: `[w1, w2, w3, q0, q1, q2, q3]`, body angular
/// velocity followed by the orientation quaternion with its scalar part
/// first. Euler's equations drive the angular velocity and the quaternion
/// kinematics `q' = q * (0, w) / 2` drive the orientation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GyroDynamics {
    inertia: [f64; 3],
    state: [f64; 7],
}

const AT_REST: [f64; 7] = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0];

impl GyroDynamics {
    pub fn new(i1: f64, i2: f64, i3: f64) -> Self {
        Self { inertia: [i1, i2, i3], state: AT_REST }
    }

    pub fn from_cuboid(mass: f32, a: f32, b: f32, c: f32) -> Self {
        Self::from(&Cuboid::new(mass, a, b, c))
    }

    /// Replaces the moments of inertia, keeping the current state.
    pub fn set_cuboid(&mut self, mass: f32, a: f32, b: f32, c: f32) {
        self.inertia = Cuboid::new(mass, a, b, c).inertia().map(f64::from);
    }

    #[inline]
    pub fn inertia(&self) -> [f64; 3] {
        self.inertia
    }

    /// Sets angular velocity `(w1, w2, w3)` and an orientation of `angle`
    /// degrees about the axis `(x, y, z)`. The axis is normalized here.
    #[allow(clippy::too_many_arguments)]
    pub fn set_state(&mut self, w1: f64, w2: f64, w3: f64, angle: f64, x: f64, y: f64, z: f64) {
        let axis = Vec3::new(x, y, z).normalize();
        let (s, c) = (angle.to_radians() * 0.5).sin_cos();
        self.state = [w1, w2, w3, c, s * axis.x, s * axis.y, s * axis.z];
        tracing::debug!(state = ?self.state, "gyro state set");
    }

    /// Builder form of [`set_state`](Self::set_state).
    #[allow(clippy::too_many_arguments)]
    pub fn init_state(mut self, w1: f64, w2: f64, w3: f64, angle: f64, x: f64, y: f64, z: f64) -> Self {
        self.set_state(w1, w2, w3, angle, x, y, z);
        self
    }

    /// Replaces the whole phase vector.
    pub fn set_phase(&mut self, phase: [f64; 7]) {
        self.state = phase;
    }

    /// Raw phase vector `[w1, w2, w3, q0, q1, q2, q3]`.
    #[inline]
    pub fn phase(&self) -> [f64; 7] {
        self.state
    }

    /// `[w1, w2, w3, angle, q1, q2, q3]` with the rotation angle in degrees.
    ///
    /// The vector part is the unnormalized `(q1, q2, q3)`, which is enough
    /// as an axis for [`Mat4::rotate`].
    pub fn state(&self) -> [f64; 7] {
        let [w1, w2, w3, q0, q1, q2, q3] = self.state;
        // integration drift can push |q0| slightly past one
        let angle = 2.0 * q0.clamp(-1.0, 1.0).acos();
        [w1, w2, w3, angle.to_degrees(), q1, q2, q3]
    }

    pub fn angular_velocity(&self) -> Vec3<f64> {
        Vec3::new(self.state[0], self.state[1], self.state[2])
    }

    pub fn orientation(&self) -> Quat<f64> {
        let [_, _, _, q0, q1, q2, q3] = self.state;
        Quat::new(q1, q2, q3, q0)
    }

    /// Rotation matrix for the current orientation.
    pub fn rotation_matrix(&self) -> Mat4<f64> {
        Mat4::from(self.orientation())
    }

    /// Moves the body forward by `dt` with one RK4 step.
    pub fn advance(&mut self, dt: f64) {
        self.state = integrator::runge_kutta4(&*self, &self.state, dt);
    }
}

impl Default for GyroDynamics {
    fn default() -> Self {
        Self::from(&Cuboid::default())
    }
}

impl From<&Cuboid> for GyroDynamics {
    fn from(cuboid: &Cuboid) -> Self {
        let [i1, i2, i3] = cuboid.inertia().map(f64::from);
        Self::new(i1, i2, i3)
    }
}

impl Dynamics<7> for GyroDynamics {
    fn derivative(&self, x: &[f64; 7]) -> [f64; 7] {
        let [i1, i2, i3] = self.inertia;
        let [w1, w2, w3, q0, q1, q2, q3] = *x;
        [
            (i2 - i3) / i1 * w2 * w3,
            (i3 - i1) / i2 * w3 * w1,
            (i1 - i2) / i3 * w1 * w2,
            -0.5 * (q1 * w1 + q2 * w2 + q3 * w3),
            0.5 * (q0 * w1 + q2 * w3 - q3 * w2),
            0.5 * (q0 * w2 + q3 * w1 - q1 * w3),
            0.5 * (q0 * w3 + q1 * w2 - q2 * w1),
        ]
    }
}
