use std::fs;

use clap::Parser;
use log::{LevelFilter, info};
use revpol::{Expression, Variables};

/// revpol compiles a math statement to reverse-Polish form and evaluates it.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells revpol to read statements from a file, one per line, instead
    /// of taking the statement itself.
    #[arg(short, long)]
    file: bool,

    /// Binds a variable, as `NAME=VALUE`. May be repeated.
    #[arg(short, long = "var", value_name = "NAME=VALUE", value_parser = parse_binding)]
    vars: Vec<(String, f64)>,

    /// Prints the compiled postfix program instead of evaluating it.
    #[arg(short, long)]
    postfix: bool,

    /// Logs compilation and evaluation details.
    #[arg(long)]
    verbose: bool,

    /// The statement, or the path of a statement file with `--file`.
    #[arg(allow_hyphen_values = true)]
    contents: String,
}

fn parse_binding(raw: &str) -> Result<(String, f64), String> {
    let (name, value) = raw.split_once('=')
                           .ok_or_else(|| format!("expected NAME=VALUE, found '{raw}'"))?;
    let value = value.trim()
                     .parse()
                     .map_err(|_| format!("'{value}' is not a number"))?;
    Ok((name.trim().to_string(), value))
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let variables = Variables::from_pairs(args.vars)?;

    let statements = if args.file {
        fs::read_to_string(&args.contents).map_err(|e| {
                                               format!("Failed to read the input file '{}': {e}",
                                                       &args.contents)
                                           })?
    } else {
        args.contents
    };

    for statement in statements.lines()
                               .map(str::trim)
                               .filter(|l| !l.is_empty() && !l.starts_with("//"))
    {
        let expression = Expression::parse(statement)?;
        if args.postfix {
            println!("{expression}");
        } else {
            let value = expression.evaluate(&variables)?;
            info!("{statement} = {value}");
            println!("{value}");
        }
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new().filter_level(level)
                              .parse_default_env()
                              .init();

    if let Err(e) = run(args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
