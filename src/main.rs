use std::{env, fs::read_to_string, path::PathBuf, process::exit, time::Instant};

use paskenzie::{
    analyze,
    config::{Config, IdentifierPolicy},
    display_error,
};

const USAGE: &str = "Usage: paskenzie <file.pzk> [--quiet] [--truncate-identifiers]";

struct Arguments {
    file: PathBuf,
    config: Config,
    quiet: bool,
}

fn parse_arguments(args: &[String]) -> Result<Arguments, String> {
    let mut file = None;
    let mut quiet = false;
    let mut policy = IdentifierPolicy::Reject;

    for arg in args {
        match arg.as_str() {
            "--quiet" => quiet = true,
            "--truncate-identifiers" => policy = IdentifierPolicy::Truncate,
            flag if flag.starts_with("--") => return Err(format!("Unknown option `{}`", flag)),
            path if file.is_none() => file = Some(PathBuf::from(path)),
            _ => return Err(String::from("Only one source file can be analyzed per run")),
        }
    }

    let Some(file) = file else {
        return Err(String::from("Missing source file"));
    };

    Ok(Arguments {
        file,
        config: Config::default()
            .with_identifier_policy(policy)
            .with_echo_trace(!quiet),
        quiet,
    })
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let arguments = match parse_arguments(&args) {
        Ok(arguments) => arguments,
        Err(message) => {
            eprintln!("{}\n{}", message, USAGE);
            exit(2);
        }
    };

    let file_name = arguments
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| arguments.file.to_string_lossy().into_owned());

    let source = match read_to_string(&arguments.file) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", arguments.file.display(), error);
            exit(1);
        }
    };

    let start = Instant::now();
    let analysis = analyze(&source, Some(file_name), arguments.config);

    match analysis.result {
        Ok(summary) => {
            println!("{}", summary);
            if !arguments.quiet {
                println!("Analyzed {} tokens in {:?}", summary.tokens, start.elapsed());
            }
        }
        Err(error) => {
            display_error(&error, &source);
            exit(1);
        }
    }
}
