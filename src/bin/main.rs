use std::io;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::LevelFilter;

use tableau_simplex::algorithm::simplex::{DegenerateError, optimize_with_rule, Pivot};
use tableau_simplex::algorithm::simplex::strategy::pivot_rule::{FirstProfitable, SteepestDescentAlongVariable};
use tableau_simplex::data::tableau::Tableau;
use tableau_simplex::io::{DEFAULT_INPUT_FILE, import};
use tableau_simplex::io::render::{Emphasis, RenderOptions, Renderer};

/// Solve a linear program in tableau form with the Simplex method.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Opts {
    /// File containing the number of rows and columns, followed by the tableau values
    #[arg(value_name = "FILE", default_value = DEFAULT_INPUT_FILE)]
    problem_file: PathBuf,

    /// How to select the column entering the basis
    #[arg(long, value_enum, default_value_t = Rule::Steepest)]
    pivot_rule: Rule,

    /// Number of decimals of printed values
    #[arg(long, default_value_t = 2)]
    precision: usize,

    /// Don't color the pivot row and the solution column
    #[arg(long)]
    no_color: bool,

    /// Only print the optimal tableau
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Rule {
    /// Most negative relative cost
    Steepest,
    /// First negative relative cost
    First,
}

const EXIT_INPUT: u8 = 1;
const EXIT_DEGENERATE: u8 = 2;

fn main() -> ExitCode {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or("SIMPLEX_LOG", "warn"))
        .init();

    let opts = Opts::parse();
    let renderer = Renderer::new(RenderOptions {
        precision: opts.precision,
        colored: !opts.no_color,
    });

    match run(&opts, &renderer) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}", renderer.error(&format!("{:#}", error)));
            if error.downcast_ref::<DegenerateError<f64>>().is_some() {
                ExitCode::from(EXIT_DEGENERATE)
            } else {
                ExitCode::from(EXIT_INPUT)
            }
        },
    }
}

fn run(opts: &Opts, renderer: &Renderer) -> anyhow::Result<()> {
    let tableau = import::<f64>(&opts.problem_file)?;

    let mut stdout = io::stdout().lock();
    if !opts.quiet {
        renderer.write(&mut stdout, &tableau, Emphasis::Nothing)?;
    }

    let mut write_error = None;
    let observer = |pivot: Pivot, tableau: &Tableau<f64>| {
        if opts.quiet || write_error.is_some() {
            return;
        }
        if let Err(error) = renderer.write(&mut stdout, tableau, Emphasis::Row(pivot.row)) {
            write_error = Some(error);
        }
    };
    let result = match opts.pivot_rule {
        Rule::Steepest => optimize_with_rule::<SteepestDescentAlongVariable, _>(tableau, observer),
        Rule::First => optimize_with_rule::<FirstProfitable, _>(tableau, observer),
    };
    if let Some(error) = write_error {
        return Err(error.into());
    }
    let optimal = result.context("optimization aborted")?;

    renderer.write(&mut stdout, &optimal, Emphasis::SolutionColumn)?;
    writeln!(stdout, "Objective value: {:.*}", opts.precision, optimal.objective_value())?;

    Ok(())
}
