use crate::traits::{State, Steppable, VectorField};

/// First-order explicit Euler stepper: `x <- x + f(x) * dt`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExplicitEuler;

impl Steppable for ExplicitEuler {
    fn step(&mut self, field: &impl VectorField, state: &mut State, dt: f64) {
        *state = field.advance(state, dt);
    }
}

/// Runs `steps` discarded steps so the state settles onto the attractor.
pub fn warm_up<S: Steppable>(
    stepper: &mut S,
    field: &impl VectorField,
    state: &mut State,
    steps: usize,
    dt: f64,
) {
    for _ in 0..steps {
        stepper.step(field, state, dt);
    }
}
