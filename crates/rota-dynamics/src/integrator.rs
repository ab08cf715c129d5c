//! Explicit one-step ODE integrators over fixed-size `f64` state vectors.
//!
//! Every step returns a fresh state; nothing is updated in place.

use core::array;

/// A first-order system `x' = f(x)` over an `N`-dimensional phase space.
///
/// Any `Fn(&[f64; N]) -> [f64; N]` closure is a `Dynamics<N>`.
pub trait Dynamics<const N: usize> {
    fn derivative(&self, x: &[f64; N]) -> [f64; N];
}

impl<F, const N: usize> Dynamics<N> for F
where
    F: Fn(&[f64; N]) -> [f64; N],
{
    #[inline]
    fn derivative(&self, x: &[f64; N]) -> [f64; N] {
        self(x)
    }
}

// x + k * y
#[inline]
fn axpy<const N: usize>(x: &[f64; N], k: f64, y: &[f64; N]) -> [f64; N] {
    array::from_fn(|i| x[i] + k * y[i])
}

/// One explicit Euler step: `x + f(x) * dt`.
pub fn euler<D, const N: usize>(f: &D, x: &[f64; N], dt: f64) -> [f64; N]
where
    D: Dynamics<N> + ?Sized,
{
    tracing::trace!(dt, dim = N, "euler step");
    axpy(x, dt, &f.derivative(x))
}

/// One classical fourth-order Runge-Kutta step.
pub fn runge_kutta4<D, const N: usize>(f: &D, x: &[f64; N], dt: f64) -> [f64; N]
where
    D: Dynamics<N> + ?Sized,
{
    tracing::trace!(dt, dim = N, "rk4 step");
    let y1 = f.derivative(x);
    let y2 = f.derivative(&axpy(x, 0.5 * dt, &y1));
    let y3 = f.derivative(&axpy(x, 0.5 * dt, &y2));
    let y4 = f.derivative(&axpy(x, dt, &y3));
    array::from_fn(|i| x[i] + dt * (y1[i] + 2.0 * y2[i] + 2.0 * y3[i] + y4[i]) / 6.0)
}

/// Advances `state` by `dt` with one RK4 step.
pub fn integrate<D, const N: usize>(state: &[f64; N], dt: f64, f: &D) -> [f64; N]
where
    D: Dynamics<N> + ?Sized,
{
    runge_kutta4(f, state, dt)
}

/// Step strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    Euler,
    #[default]
    RungeKutta4,
}

impl Method {
    pub fn step<D, const N: usize>(self, f: &D, x: &[f64; N], dt: f64) -> [f64; N]
    where
        D: Dynamics<N> + ?Sized,
    {
        match self {
            Method::Euler => euler(f, x, dt),
            Method::RungeKutta4 => runge_kutta4(f, x, dt),
        }
    }

    /// Applies `steps` consecutive steps of size `dt`.
    pub fn integrate_steps<D, const N: usize>(
        self,
        f: &D,
        x: &[f64; N],
        dt: f64,
        steps: usize,
    ) -> [f64; N]
    where
        D: Dynamics<N> + ?Sized,
    {
        (0..steps).fold(*x, |state, _| self.step(f, &state, dt))
    }

    /// Endless sequence of states starting with `x` itself, each one step of
    /// size `dt` after the previous. Use `take(n)` for an n-point orbit.
    pub fn trajectory<D, const N: usize>(self, f: &D, x: [f64; N], dt: f64) -> Trajectory<'_, D, N>
    where
        D: Dynamics<N> + ?Sized,
    {
        Trajectory { dynamics: f, method: self, state: x, dt }
    }
}

/// Iterator returned by [`Method::trajectory`].
#[derive(Debug)]
pub struct Trajectory<'a, D: ?Sized, const N: usize> {
    dynamics: &'a D,
    method: Method,
    state: [f64; N],
    dt: f64,
}

impl<D, const N: usize> Iterator for Trajectory<'_, D, N>
where
    D: Dynamics<N> + ?Sized,
{
    type Item = [f64; N];

    fn next(&mut self) -> Option<[f64; N]> {
        let current = self.state;
        self.state = self.method.step(self.dynamics, &current, self.dt);
        Some(current)
    }
}
