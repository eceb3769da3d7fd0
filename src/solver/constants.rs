// Tolerances for floating-point comparisons in the solver
pub const EPSILON: f64 = 1e-9;
