use clap::Parser;
use ramify::branchbound::BBSolver;
use ramify::frontier::SearchOrder;
use ramify::problem_reader::read_problem;
use ramify::solver_options::SolverOptions;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "ramify")]
#[command(about = "Branch and bound solver for 0-1 linear programs")]
struct Cmd {
    /// Path to the problem file
    problem: PathBuf,

    /// Explore the tree breadth-first instead of depth-first
    #[arg(long)]
    breadth_first: bool,

    /// Output level: 0 silent, 1 summary, 2 per-node trace
    #[arg(long, default_value_t = 1)]
    verbose: usize,
}

fn main() -> ExitCode {
    let cmd = Cmd::parse();

    let lp = match read_problem(&cmd.problem) {
        Ok(lp) => lp,
        Err(error) => {
            eprintln!("Error: {error}");
            return ExitCode::FAILURE;
        }
    };

    let mut options = SolverOptions::new();
    options.verbose = cmd.verbose;
    if cmd.breadth_first {
        options.search_order = SearchOrder::BreadthFirst;
    }

    let mut solver = BBSolver::new(lp, options);

    match solver.solve() {
        Ok((solution, objective_value)) => {
            println!("Optimal solution found: z = {objective_value}");
            for (i, value) in solution.iter().enumerate() {
                println!("x{} = {}", i + 1, value);
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("Failed to solve the problem: {error}");
            ExitCode::FAILURE
        }
    }
}
