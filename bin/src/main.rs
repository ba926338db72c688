//! quoteline CLI - daily stock prices over HTTP.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use quoteline_lib::Period;
use std::path::PathBuf;

mod commands;
mod display;
mod logging;

use display::Format;

#[derive(Parser)]
#[command(name = "quoteline")]
#[command(about = "Serve and export cleaned daily stock prices", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (errors only, no progress output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Provider request timeout in seconds
    #[arg(long, env = "QUOTELINE_TIMEOUT_SECS", default_value = "30", global = true)]
    timeout_secs: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP price API
    Serve {
        /// Address to bind
        #[arg(long, env = "QUOTELINE_HOST", default_value = "127.0.0.1")]
        host: String,

        /// Port to bind
        #[arg(short, long, env = "QUOTELINE_PORT", default_value = "8000")]
        port: u16,

        /// Do not send CORS headers
        #[arg(long)]
        no_cors: bool,
    },

    /// Fetch the daily series for a symbol
    Prices {
        /// Ticker symbol (e.g., AAPL, msft)
        symbol: String,

        /// Calendar year. Defaults to the trailing year.
        #[arg(short, long, conflicts_with = "period")]
        year: Option<i32>,

        /// Trailing period (1d, 5d, 1mo, 3mo, 6mo, 1y, 2y, 5y, 10y, ytd, max)
        #[arg(long)]
        period: Option<Period>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: Format,

        /// Output file path. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show the date range a year resolves to
    Range {
        /// Calendar year
        year: i32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.quiet)?;

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Serve {
            host,
            port,
            no_cors,
        } => commands::serve::serve(host, port, !no_cors, cli.timeout_secs).await,
        Commands::Prices {
            symbol,
            year,
            period,
            format,
            output,
            pretty,
        } => {
            commands::prices::prices(
                &symbol,
                year,
                period,
                format,
                output,
                pretty,
                cli.timeout_secs,
                cli.quiet,
            )
            .await
        }
        Commands::Range { year } => {
            commands::range::show_range(year);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_prices() {
        let cli = Cli::try_parse_from([
            "quoteline", "prices", "aapl", "--year", "2023", "-f", "csv", "-vv",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Commands::Prices {
                symbol,
                year,
                period,
                format,
                ..
            }) => {
                assert_eq!(symbol, "aapl");
                assert_eq!(year, Some(2023));
                assert_eq!(period, None);
                assert!(matches!(format, Format::Csv));
            }
            _ => panic!("expected prices command"),
        }
    }

    #[test]
    fn test_parse_period() {
        let cli = Cli::try_parse_from(["quoteline", "prices", "msft", "--period", "ytd"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Prices {
                period: Some(Period::YearToDate),
                ..
            })
        ));
    }

    #[test]
    fn test_year_conflicts_with_period() {
        let result = Cli::try_parse_from([
            "quoteline", "prices", "msft", "--year", "2020", "--period", "1y",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["quoteline", "serve"]).unwrap();
        match cli.command {
            Some(Commands::Serve {
                host,
                port,
                no_cors,
            }) => {
                assert_eq!(host, "127.0.0.1");
                assert_eq!(port, 8000);
                assert!(!no_cors);
            }
            _ => panic!("expected serve command"),
        }
    }
}
