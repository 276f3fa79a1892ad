#[cfg(test)]
#[path = "../../tests/unit/commands/check_test.rs"]
mod check_test;

use super::*;
use clap::{Arg, Command};
use relief_cli::extensions::check::check_pragmatic_solution;
use std::io::BufReader;

const REQUEST_ARG_NAME: &str = "request-file";
const SOLUTION_ARG_NAME: &str = "solution-file";

pub fn get_check_app() -> Command {
    Command::new("check")
        .about("Provides the way to check plan feasibility")
        .arg(
            Arg::new(REQUEST_ARG_NAME)
                .help("Sets input file which contains a request")
                .short('r')
                .long(REQUEST_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(SOLUTION_ARG_NAME)
                .help("Sets plan file")
                .short('s')
                .long(SOLUTION_ARG_NAME)
                .required(true),
        )
}

pub fn run_check(matches: &ArgMatches) -> Result<(), String> {
    let request_path = matches.get_one::<String>(REQUEST_ARG_NAME).ok_or("request file is not specified")?;
    let solution_path = matches.get_one::<String>(SOLUTION_ARG_NAME).ok_or("plan file is not specified")?;

    let request_file = BufReader::new(open_file(request_path, "request")?);
    let solution_file = BufReader::new(open_file(solution_path, "plan")?);

    check_pragmatic_solution(request_file, solution_file)
        .map_err(|errors| format!("checker found {} errors:\n{}", errors.len(), errors.join("\n")))
}
