use thiserror::Error;

/// Failures that can surface from reading a problem or from a full solve.
///
/// Per-node conditions (an infeasible or unbounded relaxation) are absorbed
/// by the search loop and never appear here; only a structurally unusable
/// problem or an exhausted search does.
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("failed to read the problem file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid problem format: {0}")]
    InvalidFormat(String),

    #[error("number of variables and constraints must both be positive")]
    EmptyProblem,

    #[error("no feasible integer solution exists")]
    NoFeasibleSolution,
}
