pub mod branch_node;
pub mod branch_strategy;
pub mod branch_subproblem;
pub mod branchbound;
pub mod branchbound_utils;
pub mod branchboundlogger;
pub mod error;
pub mod frontier;
pub mod lp;
pub mod problem_reader;
pub mod solver_options;
pub mod subproblemsolvers;
