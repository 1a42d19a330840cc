use crate::lp::LinearProgram;
use ndarray::Array1;

/// Absolute tolerance used everywhere a relaxation value is compared against
/// an integer or a constraint bound.
pub const INTEGER_TOLERANCE: f64 = 1e-6;

/// Rounds a near-integral relaxation vector to the nearest integers. Only
/// meaningful for vectors already validated to sit inside the widened unit
/// box.
pub fn round_solution(solution: &Array1<f64>) -> Array1<usize> {
    solution.mapv(|value| value.round() as usize)
}

/// Checks a candidate integer assignment against every original constraint
/// row of the program.
///
/// Rounding a solution that sits exactly on a constraint boundary can push
/// it over; this check is the authoritative guard before any candidate is
/// accepted as the incumbent.
pub fn check_constraint_feasibility(lp: &LinearProgram, candidate: &Array1<usize>) -> bool {
    for (row, row_vec) in lp.a.outer_iterator().enumerate() {
        let mut lhs = 0.0;
        for (col, &coefficient) in row_vec.iter() {
            lhs += coefficient * candidate[col] as f64;
        }
        if lhs > lp.b[row] + INTEGER_TOLERANCE {
            return false;
        }
    }
    true
}
