use nalgebra::Vector3;

/// A point in the three-dimensional phase space of an attractor.
pub type State = Vector3<f64>;

/// The right-hand side of an autonomous three-dimensional ODE.
///
/// Implementations must be pure: the same state always yields the same derivative.
pub trait VectorField {
    /// Evaluates dx/dt at `state`.
    fn derivative(&self, state: &State) -> State;

    /// Some systems run on a slower internal clock; a caller step `dt` becomes
    /// `dt / time_divisor()` in the system's own time.
    fn time_divisor(&self) -> f64 {
        1.0
    }

    /// One explicit Euler step of size `dt` (caller time).
    fn advance(&self, state: &State, dt: f64) -> State {
        let dt = dt / self.time_divisor();
        state + self.derivative(state) * dt
    }
}

/// A trait for solvers that can step a state forward.
pub trait Steppable {
    /// Performs one step of size dt.
    /// state: current state (updated after step)
    fn step(&mut self, field: &impl VectorField, state: &mut State, dt: f64);
}
