use crate::lp::LinearProgram;
use crate::subproblemsolvers::clarabel_lp::ClarabelRelaxationSolver;
use ndarray::Array1;

/// Outcome classification of one relaxation solve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelaxationStatus {
    Optimal,
    Infeasible,
    Unbounded,
    SolverError,
}

/// The answer an LP relaxation backend hands back to the engine. The primal
/// vector and objective are only meaningful when `status` is `Optimal`, and
/// the engine never mutates them.
pub struct RelaxationResult {
    pub status: RelaxationStatus,
    pub solution: Array1<f64>,
    pub objective: f64,
}

impl RelaxationResult {
    pub fn failed(status: RelaxationStatus, num_x: usize) -> Self {
        Self {
            status,
            solution: Array1::zeros(num_x),
            objective: f64::NEG_INFINITY,
        }
    }
}

/// Boundary to the external LP solver. Implementations receive a program
/// whose bounds already reflect every fixed variable and solve it with
/// integrality relaxed; the call blocks until a definite status is known.
pub trait RelaxationSolver {
    fn new() -> Self;

    fn solve_relaxation(&self, lp: &LinearProgram) -> RelaxationResult;
}

pub enum SubProblemSelection {
    Clarabel,
}

pub fn get_relaxation_solver(
    sub_problem_selection: &SubProblemSelection,
) -> ClarabelRelaxationSolver {
    match sub_problem_selection {
        SubProblemSelection::Clarabel => ClarabelRelaxationSolver::new(),
    }
}
