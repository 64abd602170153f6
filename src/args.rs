use crate::export::DEFAULT_FILE_NAME;
use crate::ua_error::UaError;
use crate::ua_error::UaError::CliArgumentError;
use clap::{crate_authors, crate_description, crate_version, Arg, ArgAction, ArgMatches, Command};
use std::path::{Path, PathBuf};

fn command() -> Command {
    Command::new("iphone-ua")
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .arg(
            Arg::new("count")
                .help("number of User-Agents to generate")
                .long("count")
                .short('n')
                .num_args(1)
                .allow_negative_numbers(true)
                .default_value("5"),
        )
        .arg(
            Arg::new("output")
                .help("file receiving the User-Agents, one per line, instead of stdout")
                .long("output")
                .short('o')
                .num_args(0..=1)
                .default_missing_value(DEFAULT_FILE_NAME)
                .required(false),
        )
        .arg(
            Arg::new("seed")
                .help("seed for reproducible output")
                .long("seed")
                .short('s')
                .num_args(1)
                .allow_negative_numbers(true)
                .required(false),
        )
        .arg(
            Arg::new("check")
                .help("parse every generated User-Agent back and fail on any inconsistency")
                .long("check")
                .action(ArgAction::SetTrue),
        )
}

#[derive(Debug)]
pub struct Arguments {
    pub count: usize,
    pub output: Option<PathBuf>,
    pub seed: Option<u64>,
    pub check: bool,
}

pub fn get_args() -> Result<Arguments, UaError> {
    let command = command();
    let matches = command.get_matches();
    parse_matches(&matches)
}

fn parse_matches(matches: &ArgMatches) -> Result<Arguments, UaError> {
    // safe unwrap because of default value
    let count = matches
        .get_one::<String>("count")
        .expect("impossible")
        .parse::<usize>()
        .map_err(|_| CliArgumentError {
            message: "'count' was not a non-negative integer".to_string(),
        })?;

    let output = match matches.get_one::<String>("output") {
        Some(output) => {
            let path = PathBuf::from(output);
            if path.is_dir() {
                return Err(CliArgumentError {
                    message: "'output' is a directory".to_string(),
                });
            }
            let parent_exists = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.is_dir(),
                _ => Path::new(".").is_dir(),
            };
            if !parent_exists {
                return Err(CliArgumentError {
                    message: "'output' parent directory does not exist".to_string(),
                });
            }
            Some(path)
        }
        None => None,
    };

    let seed = match matches.get_one::<String>("seed") {
        Some(seed) => Some(seed.parse::<u64>().map_err(|_| CliArgumentError {
            message: "'seed' was not an unsigned integer".to_string(),
        })?),
        None => None,
    };

    let check = matches.get_flag("check");

    Ok(Arguments {
        count,
        output,
        seed,
        check,
    })
}
