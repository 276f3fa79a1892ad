#[cfg(test)]
#[path = "../../tests/unit/commands/plan_test.rs"]
mod plan_test;

use super::*;
use clap::{Arg, ArgAction, Command};
use relief_cli::extensions::plan::config::{Config, read_config};
use relief_cli::extensions::plan::plan_pragmatic;
use relief_core::utils::Environment;
use relief_pragmatic::checker::CheckerContext;
use relief_pragmatic::format::problem::{deserialize_matrix, deserialize_request};
use relief_pragmatic::format::solution::serialize_solution;
use std::io::BufReader;
use std::sync::Arc;

const REQUEST_ARG_NAME: &str = "REQUEST";
const MATRIX_ARG_NAME: &str = "matrix";
const CONFIG_ARG_NAME: &str = "config";
const TIME_ARG_NAME: &str = "max-time";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const LOG_ARG_NAME: &str = "log";
const CHECK_ARG_NAME: &str = "check";

pub fn get_plan_app() -> Command {
    Command::new("plan")
        .about("Plans relief distribution for a request in pragmatic format")
        .arg(Arg::new(REQUEST_ARG_NAME).help("Sets the request file to use").required(true).index(1))
        .arg(
            Arg::new(MATRIX_ARG_NAME)
                .help("Specifies path to file with routing matrix for depot and locations")
                .short('m')
                .long(MATRIX_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to planning configuration file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(TIME_ARG_NAME)
                .help("Specifies max time of routing search in seconds, overrides request value")
                .short('t')
                .long(TIME_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether planning progress should be logged")
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue)
                .required(false),
        )
        .arg(
            Arg::new(CHECK_ARG_NAME)
                .help("Specifies whether final plan should be checked for feasibility")
                .long(CHECK_ARG_NAME)
                .action(ArgAction::SetTrue)
                .required(false),
        )
}

pub fn run_plan(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), String> {
    let request_path = matches.get_one::<String>(REQUEST_ARG_NAME).ok_or("request file is not specified")?;
    let mut request = deserialize_request(BufReader::new(open_file(request_path, "request")?))
        .map_err(|errors| errors.to_json())?;

    let matrix = matches
        .get_one::<String>(MATRIX_ARG_NAME)
        .map(|path| open_file(path, "routing matrix"))
        .transpose()?
        .map(|file| deserialize_matrix(BufReader::new(file)))
        .transpose()
        .map_err(|errors| errors.to_json())?;

    let config = matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| open_file(path, "config").and_then(|file| read_config(BufReader::new(file))))
        .transpose()?
        .unwrap_or_else(Config::default);

    if let Some(max_time) = parse_float_value::<f64>(matches, TIME_ARG_NAME, "max time in seconds")? {
        request.time_limit_seconds = Some(max_time);
    }

    let environment = if matches.get_flag(LOG_ARG_NAME) {
        Environment::new_with_stdout_logger()
    } else {
        Environment::default()
    };

    let out_result =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;

    let solution = plan_pragmatic(request.clone(), matrix, &config, Arc::new(environment))?;

    if matches.get_flag(CHECK_ARG_NAME) {
        CheckerContext::new(request, solution.clone())
            .check()
            .map_err(|errors| format!("checker found {} errors:\n{}", errors.len(), errors.join("\n")))?;
    }

    serialize_solution(out_writer_func(out_result), &solution).map_err(|err| format!("cannot write plan: '{err}'"))
}
