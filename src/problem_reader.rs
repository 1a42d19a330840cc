use crate::error::SolverError;
use crate::lp::LinearProgram;
use ndarray::Array1;
use sprs::TriMat;
use std::fs;
use std::path::Path;

/// Reads a 0-1 maximization problem from a text file.
///
/// Format:
/// - line 1: `num_vars num_constraints`, both positive integers
/// - line 2: `num_vars` objective coefficients
/// - one line per constraint: `num_vars` coefficients followed by the
///   right-hand side, read as `coefficients . x <= rhs`
///
/// Every variable ends up boxed to [0, 1]. Malformed input is rejected,
/// never defaulted.
pub fn read_problem(path: &Path) -> Result<LinearProgram, SolverError> {
    let contents = fs::read_to_string(path)?;
    parse_problem(&contents)
}

/// Parses the problem text format. See `read_problem`.
pub fn parse_problem(text: &str) -> Result<LinearProgram, SolverError> {
    let mut lines = text.lines();

    let size_line = lines
        .next()
        .ok_or_else(|| SolverError::InvalidFormat("missing the size line".to_string()))?;
    let mut size_tokens = size_line.split_whitespace();
    let num_vars = next_count(&mut size_tokens, "the size line")?;
    let num_constraints = next_count(&mut size_tokens, "the size line")?;

    let objective_line = lines
        .next()
        .ok_or_else(|| SolverError::InvalidFormat("missing the objective line".to_string()))?;
    let mut objective_tokens = objective_line.split_whitespace();
    let mut c = Array1::<f64>::zeros(num_vars);
    for j in 0..num_vars {
        c[j] = next_coefficient(&mut objective_tokens, "the objective line")?;
    }

    let mut a = TriMat::<f64>::new((num_constraints, num_vars));
    let mut b = Array1::<f64>::zeros(num_constraints);

    for i in 0..num_constraints {
        let row_line = lines.next().ok_or_else(|| {
            SolverError::InvalidFormat(format!("missing constraint line {}", i + 1))
        })?;
        let context = format!("constraint line {}", i + 1);
        let mut row_tokens = row_line.split_whitespace();

        for j in 0..num_vars {
            let coefficient = next_coefficient(&mut row_tokens, &context)?;
            if coefficient != 0.0 {
                a.add_triplet(i, j, coefficient);
            }
        }
        b[i] = next_coefficient(&mut row_tokens, &context)?;
    }

    Ok(LinearProgram::new(a.to_csr(), b, c))
}

/// Pulls one positive integer off a line, rejecting non-numeric tokens and
/// out-of-range counts.
fn next_count<'a, I>(tokens: &mut I, context: &str) -> Result<usize, SolverError>
where
    I: Iterator<Item = &'a str>,
{
    let token = tokens
        .next()
        .ok_or_else(|| SolverError::InvalidFormat(format!("missing a count in {context}")))?;
    let count = token
        .parse::<i64>()
        .map_err(|_| SolverError::InvalidFormat(format!("invalid count '{token}' in {context}")))?;
    if count <= 0 {
        return Err(SolverError::EmptyProblem);
    }
    Ok(count as usize)
}

fn next_coefficient<'a, I>(tokens: &mut I, context: &str) -> Result<f64, SolverError>
where
    I: Iterator<Item = &'a str>,
{
    let token = tokens
        .next()
        .ok_or_else(|| SolverError::InvalidFormat(format!("missing a coefficient in {context}")))?;
    token.parse::<f64>().map_err(|_| {
        SolverError::InvalidFormat(format!("invalid coefficient '{token}' in {context}"))
    })
}

#[cfg(test)]
mod tests {
    use crate::error::SolverError;
    use crate::problem_reader::parse_problem;
    use ndarray::array;

    #[test]
    fn parses_a_well_formed_problem() {
        let text = "2 2\n3.0 1.0\n1.0 1.0 1.5\n1.0 0.0 1.0\n";

        let lp = parse_problem(text).unwrap();

        assert_eq!(lp.num_x(), 2);
        assert_eq!(lp.num_constraints(), 2);
        assert_eq!(lp.c, array![3.0, 1.0]);
        assert_eq!(lp.b, array![1.5, 1.0]);
        assert_eq!(lp.a.to_dense(), ndarray::arr2(&[[1.0, 1.0], [1.0, 0.0]]));
        assert_eq!(lp.lower, array![0.0, 0.0]);
        assert_eq!(lp.upper, array![1.0, 1.0]);
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(
            parse_problem(""),
            Err(SolverError::InvalidFormat(_))
        ));
    }

    #[test]
    fn rejects_non_positive_counts() {
        assert!(matches!(
            parse_problem("0 2\n1.0\n"),
            Err(SolverError::EmptyProblem)
        ));
        assert!(matches!(
            parse_problem("2 -1\n1.0 1.0\n"),
            Err(SolverError::EmptyProblem)
        ));
    }

    #[test]
    fn rejects_non_numeric_counts() {
        assert!(matches!(
            parse_problem("two 2\n1.0 1.0\n"),
            Err(SolverError::InvalidFormat(_))
        ));
    }

    #[test]
    fn rejects_a_short_objective_line() {
        assert!(matches!(
            parse_problem("2 1\n1.0\n1.0 1.0 1.0\n"),
            Err(SolverError::InvalidFormat(_))
        ));
    }

    #[test]
    fn rejects_a_constraint_line_without_rhs() {
        assert!(matches!(
            parse_problem("2 1\n1.0 1.0\n1.0 1.0\n"),
            Err(SolverError::InvalidFormat(_))
        ));
    }

    #[test]
    fn rejects_a_missing_constraint_line() {
        assert!(matches!(
            parse_problem("2 2\n1.0 1.0\n1.0 1.0 2.0\n"),
            Err(SolverError::InvalidFormat(_))
        ));
    }

    #[test]
    fn rejects_non_numeric_coefficients() {
        assert!(matches!(
            parse_problem("1 1\nabc\n1.0 1.0\n"),
            Err(SolverError::InvalidFormat(_))
        ));
    }
}
