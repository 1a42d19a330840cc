use crate::branch_subproblem::SubProblemSelection;
use crate::frontier::SearchOrder;

/// Options for the B&B solver for run time
pub struct SolverOptions {
    pub search_order: SearchOrder,
    pub sub_problem_solver: SubProblemSelection,
    pub verbose: usize,
}

impl SolverOptions {
    pub fn new() -> Self {
        Self {
            search_order: SearchOrder::DepthFirst,
            sub_problem_solver: SubProblemSelection::Clarabel,
            verbose: 1,
        }
    }

    pub fn set_search_order(&mut self, order: Option<String>) {
        if let Some(s) = order {
            match s.as_str() {
                "DepthFirst" => self.search_order = SearchOrder::DepthFirst,
                "BreadthFirst" => self.search_order = SearchOrder::BreadthFirst,
                _ => {}
            }
        }
    }
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::frontier::SearchOrder;
    use crate::solver_options::SolverOptions;

    #[test]
    fn defaults_to_depth_first() {
        let options = SolverOptions::new();
        assert_eq!(options.search_order, SearchOrder::DepthFirst);
        assert_eq!(options.verbose, 1);
    }

    #[test]
    fn set_search_order_ignores_unknown_names() {
        let mut options = SolverOptions::new();

        options.set_search_order(Some("BreadthFirst".to_string()));
        assert_eq!(options.search_order, SearchOrder::BreadthFirst);

        options.set_search_order(Some("Sideways".to_string()));
        assert_eq!(options.search_order, SearchOrder::BreadthFirst);

        options.set_search_order(None);
        assert_eq!(options.search_order, SearchOrder::BreadthFirst);
    }
}
