use clap::{Parser, Subcommand};
use eyre::{bail, Result};
use itertools::Itertools;
use log::debug;

use intseries::{add_value, has, overlap, remove_value, IntSeries, IntSet};

/// Manage compact integer series notation ('1,3,5-10', 'ALL', 'NONE')
#[derive(Parser, Debug)]
#[command(name = "iser", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fold a series into its canonical compact form
    Fold { series: String },
    /// List every value of a series
    Expand {
        series: String,
        /// Largest value 'ALL' expands to
        #[arg(short, long)]
        max_value: Option<u32>,
    },
    /// Count the values of a series
    Count {
        series: String,
        /// Largest value 'ALL' expands to
        #[arg(short, long)]
        max_value: Option<u32>,
    },
    /// Add a value to a series
    Add { series: String, value: u32 },
    /// Remove a value from a series
    Remove {
        series: String,
        value: u32,
        /// Largest value 'ALL' expands to
        #[arg(short, long)]
        max_value: Option<u32>,
    },
    /// Test whether a series contains a value
    Has { series: String, value: u32 },
    /// Test whether two series share a value
    Overlap { first: String, second: String },
}

/// Expands a series to its values, requiring a bound for 'ALL'
fn materialize(series: &str, max_value: Option<u32>) -> Result<IntSet> {
    let parsed: IntSeries = series.parse()?;
    match max_value {
        Some(max) => Ok(parsed.materialize(max)),
        None if parsed == IntSeries::All => bail!("'ALL' requires --max-value"),
        None => Ok(parsed.materialize(0)),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    debug!("running {:?}", cli.command);

    match &cli.command {
        Command::Fold { series } => {
            let parsed: IntSeries = series.parse()?;
            println!("{}", parsed);
        }
        Command::Expand { series, max_value } => {
            println!("{}", materialize(series, *max_value)?.iter().join(" "));
        }
        Command::Count { series, max_value } => {
            println!("{}", materialize(series, *max_value)?.len());
        }
        Command::Add { series, value } => {
            println!("{}", add_value(series, *value)?);
        }
        Command::Remove {
            series,
            value,
            max_value,
        } => {
            if series.eq_ignore_ascii_case("all") && max_value.is_none() {
                bail!("removing from 'ALL' requires --max-value");
            }
            println!(
                "{}",
                remove_value(max_value.unwrap_or(0), Some(series), *value)?
            );
        }
        Command::Has { series, value } => {
            println!("{}", has(series, *value)?);
        }
        Command::Overlap { first, second } => {
            println!("{}", overlap(first, second)?);
        }
    }

    Ok(())
}
