use crate::branch_subproblem::{RelaxationResult, RelaxationSolver, RelaxationStatus};
use crate::lp::LinearProgram;
use clarabel::algebra::CscMatrix;
use clarabel::solver::{
    DefaultSettings, DefaultSolver, IPSolver, NonnegativeConeT, SolverStatus, ZeroConeT,
};
use ndarray::Array1;
use sprs::{CsMat, TriMat};

/// LP relaxation backend built on Clarabel.
///
/// The program maximizes c^T x, Clarabel minimizes, so the objective is
/// negated on the way in and the optimal value negated on the way out.
/// Fixed variables become equality rows in the zero cone; the original
/// inequality rows and the box bounds land in the nonnegative cone.
#[derive(Clone)]
pub struct ClarabelRelaxationSolver;

impl ClarabelRelaxationSolver {
    pub fn make_cb_form(p0: &CsMat<f64>) -> CscMatrix {
        let (t, y, u) = p0.to_csc().into_raw_storage();
        CscMatrix::new(p0.rows(), p0.cols(), t, y, u)
    }
}

impl RelaxationSolver for ClarabelRelaxationSolver {
    fn new() -> Self {
        Self
    }

    fn solve_relaxation(&self, lp: &LinearProgram) -> RelaxationResult {
        let num_x = lp.num_x();
        let num_rows = lp.num_constraints();

        let settings = DefaultSettings {
            verbose: false,
            ..Default::default()
        };

        let fixed: Vec<usize> = (0..num_x).filter(|&j| lp.is_fixed(j)).collect();

        // constraint block: equality rows for the fixed variables, then the
        // inequality rows of the program, then two box rows per variable
        let a_size = fixed.len() + num_rows + 2 * num_x;
        let mut a = TriMat::new((a_size, num_x));
        let mut b = Array1::<f64>::zeros(a_size);

        for (index, &j) in fixed.iter().enumerate() {
            a.add_triplet(index, j, 1.0);
            b[index] = lp.lower[j];
        }

        for (row, row_vec) in lp.a.outer_iterator().enumerate() {
            let offset = fixed.len() + row;
            for (col, &coefficient) in row_vec.iter() {
                a.add_triplet(offset, col, coefficient);
            }
            b[offset] = lp.b[row];
        }

        for j in 0..num_x {
            let offset = fixed.len() + num_rows + 2 * j;
            a.add_triplet(offset, j, 1.0);
            a.add_triplet(offset + 1, j, -1.0);
            b[offset] = lp.upper[j];
            b[offset + 1] = -lp.lower[j];
        }

        // convert the matrix to CSC format and then Clarabel format
        let a_csc = a.to_csc();
        let a_clara = Self::make_cb_form(&a_csc);

        let cones = [
            ZeroConeT(fixed.len()),
            NonnegativeConeT(num_rows + 2 * num_x),
        ];

        // linear objective: zero quadratic term, negated linear term
        let p_zero = TriMat::<f64>::new((num_x, num_x)).to_csc();
        let p_clara = Self::make_cb_form(&p_zero);
        let q: Vec<f64> = lp.c.iter().map(|value| -value).collect();

        let mut solver = DefaultSolver::new(
            &p_clara,
            &q,
            &a_clara,
            b.as_slice().unwrap(),
            &cones,
            settings,
        );

        solver.solve();

        let status = match solver.solution.status {
            SolverStatus::Solved => RelaxationStatus::Optimal,
            SolverStatus::PrimalInfeasible | SolverStatus::AlmostPrimalInfeasible => {
                RelaxationStatus::Infeasible
            }
            SolverStatus::DualInfeasible | SolverStatus::AlmostDualInfeasible => {
                RelaxationStatus::Unbounded
            }
            _ => RelaxationStatus::SolverError,
        };

        if status != RelaxationStatus::Optimal {
            return RelaxationResult::failed(status, num_x);
        }

        RelaxationResult {
            status,
            solution: Array1::from(solver.solution.x),
            objective: -solver.solution.obj_val,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::branch_subproblem::{RelaxationSolver, RelaxationStatus};
    use crate::lp::LinearProgram;
    use crate::subproblemsolvers::clarabel_lp::ClarabelRelaxationSolver;
    use ndarray::array;
    use sprs::TriMat;

    fn make_single_var_lp(rhs: f64) -> LinearProgram {
        let mut a = TriMat::new((1, 1));
        a.add_triplet(0, 0, 1.0);
        LinearProgram::new(a.to_csr(), array![rhs], array![1.0])
    }

    #[test]
    fn solves_a_trivial_relaxation() {
        let lp = make_single_var_lp(1.0);
        let result = ClarabelRelaxationSolver::new().solve_relaxation(&lp);

        assert_eq!(result.status, RelaxationStatus::Optimal);
        assert!((result.objective - 1.0).abs() < 1e-6);
        assert!((result.solution[0] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn honors_an_equality_bound() {
        let mut lp = make_single_var_lp(1.0);
        lp.fix_variable(0, 0.0);

        let result = ClarabelRelaxationSolver::new().solve_relaxation(&lp);

        assert_eq!(result.status, RelaxationStatus::Optimal);
        assert!(result.objective.abs() < 1e-6);
        assert!(result.solution[0].abs() < 1e-6);
    }

    #[test]
    fn reports_an_infeasible_relaxation() {
        // x >= 0 from the box and x <= -0.5 from the row cannot both hold
        let lp = make_single_var_lp(-0.5);
        let result = ClarabelRelaxationSolver::new().solve_relaxation(&lp);

        assert_eq!(result.status, RelaxationStatus::Infeasible);
    }

    #[test]
    fn splits_a_shared_row_fractionally() {
        // max x1 + x2 with x1 + x2 <= 1: any optimum has objective 1
        let mut a = TriMat::new((1, 2));
        a.add_triplet(0, 0, 1.0);
        a.add_triplet(0, 1, 1.0);
        let lp = LinearProgram::new(a.to_csr(), array![1.0], array![1.0, 1.0]);

        let result = ClarabelRelaxationSolver::new().solve_relaxation(&lp);

        assert_eq!(result.status, RelaxationStatus::Optimal);
        assert!((result.objective - 1.0).abs() < 1e-6);
    }
}
