use ndarray::Array1;
use sprs::{CsMat, TriMat};

use smolprng::Algorithm;
use smolprng::PRNG;

/// A 0-1 linear program of the form max c^T x subject to Ax <= b, with every
/// variable boxed to [lower, upper].
///
/// The structure of the program is frozen at creation. The only mutation
/// allowed afterwards is tightening a variable's box to an equality bound via
/// `fix_variable`, which is how branching decisions are realized.
#[derive(Clone)]
pub struct LinearProgram {
    pub a: CsMat<f64>,
    pub b: Array1<f64>,
    pub c: Array1<f64>,
    pub lower: Array1<f64>,
    pub upper: Array1<f64>,
}

impl LinearProgram {
    /// Wraps a constraint matrix, right-hand side and objective into a
    /// program with every variable bounded to [0, 1].
    pub fn new(a: CsMat<f64>, b: Array1<f64>, c: Array1<f64>) -> Self {
        let num_vars = a.cols();
        Self {
            a,
            b,
            c,
            lower: Array1::<f64>::zeros(num_vars),
            upper: Array1::<f64>::ones(num_vars),
        }
    }

    pub fn num_x(&self) -> usize {
        self.a.cols()
    }

    pub fn num_constraints(&self) -> usize {
        self.a.rows()
    }

    /// Pins a variable to a constant by collapsing its box to an equality
    /// bound, the same way glp_set_col_bnds(GLP_FX, ..) does.
    pub fn fix_variable(&mut self, index: usize, value: f64) {
        self.lower[index] = value;
        self.upper[index] = value;
    }

    pub fn is_fixed(&self, index: usize) -> bool {
        self.lower[index] == self.upper[index]
    }

    pub fn eval(&self, x: &Array1<f64>) -> f64 {
        self.c.dot(x)
    }

    /// Generates a random knapsack-like instance, used for testing. Each row
    /// gets a right-hand side of half its coefficient sum so that the root
    /// relaxation is usually fractional.
    pub fn make_random_lp<T: Algorithm>(
        num_x: usize,
        num_constraints: usize,
        prng: &mut PRNG<T>,
        density: f64,
    ) -> Self {
        let mut a = TriMat::<f64>::new((num_constraints, num_x));
        let mut b = Array1::<f64>::zeros(num_constraints);

        for i in 0..num_constraints {
            let mut row_sum = 0.0f64;
            for j in 0..num_x {
                if prng.gen_f64() < density {
                    let value = prng.gen_f64();
                    a.add_triplet(i, j, value);
                    row_sum += value;
                }
            }
            b[i] = 0.5 * row_sum;
        }

        let mut c = Array1::<f64>::zeros(num_x);
        for j in 0..num_x {
            c[j] = prng.gen_f64();
        }

        Self::new(a.to_csr(), b, c)
    }
}

#[cfg(test)]
mod tests {
    use crate::lp::LinearProgram;
    use crate::tests::make_test_prng;
    use ndarray::Array1;
    use sprs::TriMat;

    fn make_single_var_lp() -> LinearProgram {
        let mut a = TriMat::new((1, 1));
        a.add_triplet(0, 0, 1.0);
        LinearProgram::new(
            a.to_csr(),
            Array1::from_vec(vec![1.0]),
            Array1::from_vec(vec![1.0]),
        )
    }

    #[test]
    fn new_boxes_variables_to_unit_interval() {
        let lp = make_single_var_lp();

        assert_eq!(lp.num_x(), 1);
        assert_eq!(lp.num_constraints(), 1);
        assert_eq!(lp.lower[0], 0.0);
        assert_eq!(lp.upper[0], 1.0);
        assert!(!lp.is_fixed(0));
    }

    #[test]
    fn fix_variable_collapses_the_box() {
        let mut lp = make_single_var_lp();

        lp.fix_variable(0, 1.0);

        assert!(lp.is_fixed(0));
        assert_eq!(lp.lower[0], 1.0);
        assert_eq!(lp.upper[0], 1.0);
    }

    #[test]
    fn clone_is_an_independent_copy() {
        let mut lp = make_single_var_lp();
        let copy = lp.clone();

        lp.fix_variable(0, 0.0);

        assert!(lp.is_fixed(0));
        assert!(!copy.is_fixed(0));
    }

    #[test]
    fn eval_is_the_objective_value() {
        let lp = make_single_var_lp();
        assert_eq!(lp.eval(&Array1::from_vec(vec![0.75])), 0.75);
    }

    #[test]
    fn random_lp_has_requested_shape() {
        let mut prng = make_test_prng();
        let lp = LinearProgram::make_random_lp(25, 10, &mut prng, 0.3);

        assert_eq!(lp.num_x(), 25);
        assert_eq!(lp.num_constraints(), 10);
        for j in 0..lp.num_x() {
            assert_eq!(lp.lower[j], 0.0);
            assert_eq!(lp.upper[j], 1.0);
        }
    }
}
