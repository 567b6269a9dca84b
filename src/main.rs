use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use clap::Subcommand;
use env_logger::Builder;
use log::{debug, info};

use narlang::ast::RootNode;
use narlang::ast_printer::AstPrinter;
use narlang::environment::Environment;
use narlang::error::NarError;
use narlang::interpreter::Outcome;

#[derive(ClapParser, Debug)]
#[command(version, about = "Narlang syntax tree evaluator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    commands: Commands,

    /// Enable logging to app.log
    #[arg(long, global = true)]
    log: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Runs a JSON-encoded syntax tree as a program
    Run { filename: Option<PathBuf> },

    /// Runs a JSON-encoded syntax tree and prints the resulting value
    Evaluate { filename: Option<PathBuf> },

    /// Prints a JSON-encoded syntax tree in prefix form
    Dump { filename: Option<PathBuf> },
}

/// Reads and decodes the tree, exiting with code 65 when the document is
/// malformed
fn load_or_exit(filename: PathBuf) -> Result<RootNode> {
    match narlang::read_tree(&filename) {
        Ok(root) => {
            debug!("Decoded tree rooted at {}", root.node().kind());
            Ok(root)
        }

        Err(NarError::Json(e)) => {
            debug!("Decode debug: {}", e);
            eprintln!("{}", NarError::Json(e));
            std::process::exit(65);
        }

        Err(e) => Err(e).context(format!("Failed to load {:?}", filename)),
    }
}

/// Runs the tree, exiting with code 70 on a runtime failure
fn run_or_exit(root: &RootNode) -> narlang::Value {
    let mut environment = Environment::new();

    match root.run(&mut environment) {
        Outcome::Success(value) => {
            info!("Program executed successfully");
            value
        }

        Outcome::Failure(e) => {
            debug!("Runtime debug: {}", e);
            eprintln!("{}", e);
            std::process::exit(70);
        }
    }
}

fn init_logger() -> Result<()> {
    // Create or open the log file
    let log_file = File::create("app.log").context("Failed to create app.log")?;

    Builder::new()
        .format(|buf, record| {
            let module = record
                .module_path()
                .unwrap_or("<unnamed>")
                .strip_prefix("narlang::")
                .unwrap_or(record.module_path().unwrap_or("<unnamed>"));
            writeln!(
                buf,
                "[{}:{}] - {}",
                module,
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .filter(None, log::LevelFilter::Debug)
        .parse_default_env()
        .init();

    info!("Logger initialized, writing to app.log");
    Ok(())
}

fn missing_input(command: &str) {
    info!("No filepath provided for {}", command);
    println!("No input filepath was provided. Exiting...");
    std::process::exit(0);
}

fn main() -> Result<()> {
    let args: Cli = Cli::parse();

    // Initialize logger only if --log flag is provided
    if args.log {
        init_logger()?;
    } else {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Off)
            .init();
    }

    info!("CLI arguments: {:?}", args);

    match args.commands {
        Commands::Run { filename } => match filename {
            Some(filename) => {
                info!("Running Run subcommand");
                let root = load_or_exit(filename)?;
                run_or_exit(&root);
            }

            None => missing_input("Run"),
        },

        Commands::Evaluate { filename } => match filename {
            Some(filename) => {
                info!("Running Evaluate subcommand");
                let root = load_or_exit(filename)?;
                let value = run_or_exit(&root);

                debug!("Evaluated to: {}", value);
                println!("{}", value);
            }

            None => missing_input("Evaluate"),
        },

        Commands::Dump { filename } => match filename {
            Some(filename) => {
                info!("Running Dump subcommand");
                let root = load_or_exit(filename)?;
                let tree = AstPrinter::print(root.node());

                debug!("AST: {}", tree);
                println!("{}", tree);
            }

            None => missing_input("Dump"),
        },
    }

    Ok(())
}
