use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use fuzzydate::{FuzzyDate, FuzzyDateError, Precision};
use tracing::info;

mod logging;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    LibraryError(#[from] FuzzyDateError),
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum, Debug)]
enum PrecisionArg {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
}

impl PrecisionArg {
    fn to_precision(self) -> Precision {
        match self {
            PrecisionArg::Year => Precision::Year,
            PrecisionArg::Month => Precision::Month,
            PrecisionArg::Day => Precision::Day,
            PrecisionArg::Hour => Precision::Hour,
            PrecisionArg::Minute => Precision::Minute,
            PrecisionArg::Second => Precision::Second,
            PrecisionArg::Millisecond => Precision::Millisecond,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log output. Repeat for more (`-vv`, `-vvv`). `RUST_LOG` overrides this.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Prints the canonical form, precision, and earliest and latest instants of a fuzzy date
    Inspect {
        /// The fuzzy date, e.g. `2023-05` or `2023-05-15T10:30`
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Prints `true` and exits 0 if the value is a valid fuzzy date. Otherwise, prints `false` and
    /// exits 1.
    Valid {
        /// The fuzzy date to check
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Drops every field of a fuzzy date finer than `PRECISION`.
    ///
    /// Unset fields are taken at their earliest, so truncating `2023` to `day` gives `2023-01-01`.
    Truncate {
        /// The fuzzy date to truncate
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// The finest field to keep
        #[arg(short, long, value_enum)]
        precision: PrecisionArg,
    },
}

type Output = (String, i32);

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match do_work(cli) {
        Ok((output, exit_code)) => {
            println!("{output}");
            std::process::exit(exit_code);
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn do_work(cli: Cli) -> Result<Output, CliError> {
    match cli.command {
        Commands::Inspect { value } => {
            let date = FuzzyDate::parse(&value)?;
            info!(%date, "inspecting");
            let output = [
                format!("value: {date}"),
                format!("precision: {}", date.precision()),
                format!("earliest: {}", date.earliest_padding()),
                format!("latest: {}", date.latest_padding()),
            ]
            .join("\n");
            Ok((output, 0))
        }
        Commands::Valid { value } => Ok(match FuzzyDate::parse(&value) {
            Ok(_) => ("true".to_string(), 0),
            Err(e) => {
                info!(%value, %e, "not a valid fuzzy date");
                ("false".to_string(), 1)
            }
        }),
        Commands::Truncate { value, precision } => {
            let date = FuzzyDate::parse(&value)?;
            let truncated = FuzzyDate::from_date_time(date.earliest(), precision.to_precision())?;
            Ok((truncated.to_string(), 0))
        }
    }
}
