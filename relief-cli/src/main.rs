//! A command line interface to plan *disaster relief distribution*.
//!
//! ## Usage
//!
//! - plan a request specified in **pragmatic** json format with physics-only travel estimations
//!
//!     `relief-cli plan request.json --log`
//!
//! - plan a request with precomputed routing matrix writing the plan to the file specified
//!
//!     `relief-cli plan request.json -m matrix.json -o plan.json --max-time 30`
//!
//! - check that a plan is feasible for its request
//!
//!     `relief-cli check -r request.json -s plan.json`
//!
//! For more details, simply run
//!
//!     relief-cli --help

mod commands;

fn main() {
    let matches = cli::get_app().get_matches();

    cli::run_subcommand(matches);
}

mod cli {
    use super::commands::check::{get_check_app, run_check};
    use super::commands::plan::{get_plan_app, run_plan};
    use super::commands::create_write_buffer;
    use clap::{ArgMatches, Command};
    use std::process;

    pub fn get_app() -> Command {
        Command::new("Disaster Relief Planner")
            .version(env!("CARGO_PKG_VERSION"))
            .about("A command line interface to plan multi-vehicle disaster relief distribution")
            .subcommand(get_plan_app())
            .subcommand(get_check_app())
    }

    pub fn run_subcommand(matches: ArgMatches) {
        let result = match matches.subcommand() {
            Some(("plan", plan_matches)) => run_plan(plan_matches, create_write_buffer),
            Some(("check", check_matches)) => run_check(check_matches),
            _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
        };

        if let Err(err) = result {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}
