use crate::branch_node::{LpBBNode, NodeRole};
use crate::branch_strategy::{solution_status, SolutionStatus};
use crate::branch_subproblem::{get_relaxation_solver, RelaxationSolver, RelaxationStatus};
use crate::branchbound_utils::{check_constraint_feasibility, round_solution};
use crate::branchboundlogger::SolverOutputLogger;
use crate::error::SolverError;
use crate::frontier::Frontier;
use crate::lp::LinearProgram;
use crate::solver_options::SolverOptions;
use crate::subproblemsolvers::clarabel_lp::ClarabelRelaxationSolver;
use ndarray::Array1;
use std::time::Instant;

/// Struct for the B&B Solver
pub struct BBSolver {
    pub lp: LinearProgram,
    pub best_solution: Option<Array1<usize>>,
    pub best_objective: f64,
    pub frontier: Frontier,
    pub nodes_visited: usize,
    pub nodes_solved: usize,
    pub nodes_pruned: usize,
    pub time_start: Instant,
    pub subproblem_solver: ClarabelRelaxationSolver,
    pub options: SolverOptions,
    pub solver_logger: SolverOutputLogger,
}

impl BBSolver {
    /// Creates a new B&B solver
    pub fn new(lp: LinearProgram, options: SolverOptions) -> Self {
        let subproblem_solver = get_relaxation_solver(&options.sub_problem_solver);
        let frontier = Frontier::new(options.search_order);
        let output_level = options.verbose;

        Self {
            lp,
            best_solution: None,
            best_objective: f64::NEG_INFINITY,
            frontier,
            nodes_visited: 0,
            nodes_solved: 0,
            nodes_pruned: 0,
            time_start: Instant::now(),
            subproblem_solver,
            options,
            solver_logger: SolverOutputLogger { output_level },
        }
    }

    /// The main solve function of the B&B algorithm.
    ///
    /// Explores the tree as one work-list loop: pop a node, solve its
    /// relaxation, then prune it, accept it as the new incumbent, or split it
    /// on the most fractional variable. The frontier policy fixed at
    /// construction decides depth-first vs breadth-first; it can change how
    /// much work happens, never the reported optimum.
    pub fn solve(&mut self) -> Result<(Array1<usize>, f64), SolverError> {
        if self.lp.num_x() == 0 || self.lp.num_constraints() == 0 {
            return Err(SolverError::EmptyProblem);
        }

        self.best_solution = None;
        self.best_objective = f64::NEG_INFINITY;

        // a fresh frontier per invocation, seeded with the root node
        self.frontier = Frontier::new(self.options.search_order);
        self.frontier.push(LpBBNode::root(self.lp.clone()));

        // reset start time as it can be different from the time we created
        // the solver instance
        self.time_start = Instant::now();

        self.solver_logger.output_header(self);

        while let Some(node) = self.frontier.pop() {
            self.process_node(node);
        }

        self.solver_logger.generate_exit_line(self);

        match &self.best_solution {
            Some(solution) => Ok((solution.clone(), self.best_objective)),
            None => Err(SolverError::NoFeasibleSolution),
        }
    }

    /// Processes a single node of the tree, consuming it.
    fn process_node(&mut self, mut node: LpBBNode) {
        self.nodes_visited += 1;

        // realize the accumulated branching decisions as equality bounds on
        // this node's own copy of the program
        Self::apply_fixed_bounds(&mut node);

        let result = self.subproblem_solver.solve_relaxation(&node.lp);

        // a failed relaxation, or one that cannot beat the incumbent, kills
        // the whole subtree
        if result.status != RelaxationStatus::Optimal || result.objective <= self.best_objective {
            self.nodes_pruned += 1;
            return;
        }

        self.nodes_solved += 1;
        self.solver_logger
            .output_node_line(self, &node, result.objective);

        match solution_status(&result.solution) {
            SolutionStatus::Infeasible => {
                self.nodes_pruned += 1;
            }
            SolutionStatus::Integral => {
                let candidate = round_solution(&result.solution);

                // rounding can break a constraint the fractional point
                // satisfied at its boundary, so verify before accepting
                if check_constraint_feasibility(&node.lp, &candidate) {
                    self.update_solution_if_better(&candidate, result.objective);
                }
            }
            SolutionStatus::Fractional(branch_id) => {
                let (zero_branch, one_branch) = Self::branch(node, branch_id);
                self.frontier.push(zero_branch);
                self.frontier.push(one_branch);
            }
        }
    }

    /// Applies every (variable, value) decision on the path from the root as
    /// an equality bound.
    fn apply_fixed_bounds(node: &mut LpBBNode) {
        for &(index, value) in &node.fixed_variables {
            node.lp.fix_variable(index, value as f64);
        }
    }

    /// update the best solution if better than the current best solution
    pub fn update_solution_if_better(&mut self, solution: &Array1<usize>, solution_value: f64) {
        if solution_value > self.best_objective {
            self.best_solution = Some(solution.clone());
            self.best_objective = solution_value;
            self.solver_logger.output_new_incumbent(self);
        }
    }

    /// Actually branches the node into two new nodes, consuming the parent.
    ///
    /// The zero child gets an independent deep copy of the parent's program
    /// and decision list; the one child takes over the parent's. Both carry
    /// the parent's bound unchanged.
    pub fn branch(node: LpBBNode, branch_id: usize) -> (LpBBNode, LpBBNode) {
        let mut zero_branch = node.clone();
        let mut one_branch = node;

        zero_branch.fixed_variables.push((branch_id, 0));
        one_branch.fixed_variables.push((branch_id, 1));

        zero_branch.role = NodeRole::ZeroBranch;
        one_branch.role = NodeRole::OneBranch;

        (zero_branch, one_branch)
    }
}
