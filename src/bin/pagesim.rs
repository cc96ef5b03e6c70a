use std::io;
use std::process;

use clap::{Arg, ArgAction, ArgMatches};
use log::info;

use pagesim::common::config::{Overrides, Settings};
use pagesim::input::{parse_capacity, parse_references, read_references};
use pagesim::sim::{compare, ComparisonTable};
use pagesim::{Error, Policy, Result, Simulator, TextRenderer};

fn main() {
    let args = clap::command!()
        .about("Animate page replacement over a reference string")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Configuration file path")
                .default_value(""),
        )
        .arg(
            Arg::new("frames")
                .short('f')
                .long("frames")
                .help("Number of frames"),
        )
        .arg(
            Arg::new("reference")
                .short('r')
                .long("reference")
                .help("Reference string, e.g. \"7 0 1 2 0 3\" or \"7,0,1,2\"")
                .conflicts_with("input"),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .help("File holding the reference string"),
        )
        .arg(
            Arg::new("policy")
                .short('p')
                .long("policy")
                .help("fifo, lru, optimal, second-chance, lfu or mfu"),
        )
        .arg(
            Arg::new("label")
                .long("label")
                .help("Algorithm name shown in the step log header"),
        )
        .arg(
            Arg::new("delay-ms")
                .long("delay-ms")
                .value_parser(clap::value_parser!(u64))
                .help("Pause between animated steps"),
        )
        .arg(
            Arg::new("no-animate")
                .long("no-animate")
                .action(ArgAction::SetTrue)
                .help("Print only the summary"),
        )
        .arg(
            Arg::new("compare")
                .long("compare")
                .action(ArgAction::SetTrue)
                .help("Run every policy and print a comparison table"),
        )
        .get_matches();

    if let Err(err) = run(&args) {
        eprintln!("error: {}", err);
        let code = match err {
            Error::InvalidInput(_) => 2,
            _ => 1,
        };
        process::exit(code);
    }
}

fn run(args: &ArgMatches) -> Result<()> {
    let config_file = args.get_one::<String>("config").map_or("", String::as_str);
    let settings = Settings::new(config_file)?;

    env_logger::Builder::new()
        .parse_filters(&settings.log_level)
        .parse_default_env()
        .init();

    let overrides = Overrides {
        frames: args
            .get_one::<String>("frames")
            .map(String::as_str)
            .map(parse_capacity)
            .transpose()?,
        policy: args
            .get_one::<String>("policy")
            .map(|name| name.parse::<Policy>())
            .transpose()?,
        label: args.get_one::<String>("label").cloned(),
        step_delay_ms: args.get_one::<u64>("delay-ms").copied(),
    };
    let references = match (
        args.get_one::<String>("reference"),
        args.get_one::<String>("input"),
    ) {
        (Some(text), _) => parse_references(text)?,
        (None, Some(path)) => read_references(path)?,
        (None, None) => Vec::new(),
    };
    let input = settings.resolve(&overrides, references)?;
    info!(
        "{} references, {} frames, policy {}",
        input.references.len(),
        input.capacity,
        input.policy
    );

    let stdout = io::stdout();
    if args.get_flag("compare") {
        let rows = compare(&input.references, input.capacity)?;
        print!("{}", ComparisonTable(&rows));
        return Ok(());
    }

    let mut renderer = TextRenderer::new(stdout.lock(), settings.step_delay(&overrides))
        .with_animation(!args.get_flag("no-animate"));

    Simulator::new(input)?.run_with(&mut renderer)?;
    Ok(())
}
