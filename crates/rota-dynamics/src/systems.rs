//! Small reference systems for exercising the integrators.

use crate::integrator::Dynamics;

/// Lorenz attractor, `x = [x1, x2, x3]`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lorenz {
    pub sigma: f64,
    pub rho: f64,
    pub beta: f64,
}

impl Default for Lorenz {
    fn default() -> Self {
        Self { sigma: 10.0, rho: 28.0, beta: 8.0 / 3.0 }
    }
}

impl Dynamics<3> for Lorenz {
    fn derivative(&self, x: &[f64; 3]) -> [f64; 3] {
        let [x1, x2, x3] = *x;
        [
            self.sigma * (x2 - x1),
            self.rho * x1 - x2 - x1 * x3,
            x1 * x2 - self.beta * x3,
        ]
    }
}

/// Uniform board hinged at one end, swinging under gravity.
///
/// State is `[phi, omega]`: the angle against the horizontal in radians and
/// its rate.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pendulum {
    pub length: f64,
    pub mass: f64,
    pub gravity: f64,
}

impl Pendulum {
    /// Moment of inertia about the hinge.
    pub fn inertia(&self) -> f64 {
        self.mass * self.length * self.length / 3.0
    }
}

impl Default for Pendulum {
    fn default() -> Self {
        Self { length: 1.1, mass: 1.0, gravity: 9.81 }
    }
}

impl Dynamics<2> for Pendulum {
    fn derivative(&self, x: &[f64; 2]) -> [f64; 2] {
        let [phi, omega] = *x;
        let torque = 0.5 * self.length * self.mass * self.gravity * phi.cos();
        [omega, -torque / self.inertia()]
    }
}

/// Steady potential flow of unit speed along +x past a cylinder of `radius`
/// centered on the z axis.
///
/// State is `[x, y, z]`; integrating it traces a streamline. Undefined on the
/// z axis itself.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CylinderFlow {
    pub radius: f64,
}

impl Default for CylinderFlow {
    fn default() -> Self {
        Self { radius: 15.0 }
    }
}

impl Dynamics<3> for CylinderFlow {
    fn derivative(&self, x: &[f64; 3]) -> [f64; 3] {
        let [x1, x2, _] = *x;
        let r2 = self.radius * self.radius;
        let d2 = x1 * x1 + x2 * x2;
        let d4 = d2 * d2;
        [
            1.0 + r2 / d2 - 2.0 * r2 * x1 * x1 / d4,
            -2.0 * r2 * x1 * x2 / d4,
            0.0,
        ]
    }
}
