//! Explicit ODE stepping for small fixed-size systems.
//!
//! [`Dynamics`] is the capability "give me dx/dt at x"; [`euler`] and
//! [`runge_kutta4`] turn it into one step of size `dt`. [`GyroDynamics`]
//! integrates a torque-free rigid body and exposes its orientation as
//! [`rota::Quat`] / [`rota::Mat4`] for rendering.
//!
//! ```
//! use rota_dynamics::{GyroDynamics, Method, Lorenz};
//!
//! let mut top = GyroDynamics::from_cuboid(1.0, 0.2, 1.0, 3.0)
//!     .init_state(0.1, 2.0, 0.1, 0.0, 0.0, 0.0, 1.0);
//! for _ in 0..100 {
//!     top.advance(0.01);
//! }
//! let _m = top.rotation_matrix();
//!
//! let orbit: Vec<[f64; 3]> = Method::RungeKutta4
//!     .trajectory(&Lorenz::default(), [1.0, 1.0, 1.0], 0.01)
//!     .take(500)
//!     .collect();
//! assert_eq!(orbit.len(), 500);
//! ```

pub mod gyro;
pub mod integrator;
pub mod systems;

pub use gyro::{Cuboid, GyroDynamics};
pub use integrator::{euler, integrate, runge_kutta4, Dynamics, Method, Trajectory};
pub use systems::{CylinderFlow, Lorenz, Pendulum};
