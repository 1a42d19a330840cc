use crate::branchbound_utils::INTEGER_TOLERANCE;
use ndarray::Array1;

/// Classification of a solved relaxation's primal vector.
pub enum SolutionStatus {
    /// At least one coordinate is fractional; branch on this variable.
    Fractional(usize),
    /// Every coordinate is 0 or 1 up to tolerance.
    Integral,
    /// Some coordinate lies outside [-tol, 1+tol]; the node must not be
    /// branched or accepted.
    Infeasible,
}

/// Selects the fractional variable whose value is closest to 0.5, or `None`
/// when there is nothing to branch on.
///
/// `None` covers two distinct situations: every coordinate is integral up to
/// tolerance, or some coordinate escaped the [0, 1] box entirely. Callers
/// that need to tell them apart go through `solution_status`.
pub fn select_branching_variable(solution: &Array1<f64>) -> Option<usize> {
    // a coordinate outside the widened unit box invalidates the whole vector
    for &value in solution.iter() {
        if value < -INTEGER_TOLERANCE || value > 1.0 + INTEGER_TOLERANCE {
            return None;
        }
    }

    // strict < keeps the lowest index among equally fractional variables
    let mut fractional_var = None;
    let mut min_dist = 0.5;

    for (i, &value) in solution.iter().enumerate() {
        let dist = (value - 0.5).abs();
        if dist < min_dist && value > INTEGER_TOLERANCE && value < 1.0 - INTEGER_TOLERANCE {
            min_dist = dist;
            fractional_var = Some(i);
        }
    }

    fractional_var
}

/// Resolves the two `None` cases of `select_branching_variable` by
/// re-validating the vector against the widened unit box.
pub fn solution_status(solution: &Array1<f64>) -> SolutionStatus {
    match select_branching_variable(solution) {
        Some(index) => SolutionStatus::Fractional(index),
        None => {
            for &value in solution.iter() {
                if value < -INTEGER_TOLERANCE || value > 1.0 + INTEGER_TOLERANCE {
                    return SolutionStatus::Infeasible;
                }
            }
            SolutionStatus::Integral
        }
    }
}
