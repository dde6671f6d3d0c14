use clap::{Parser, ValueEnum};
use reqwest::Client;
use tracing::{debug, error};

use kantor::api::nbp;
use kantor::app::{App, Converter, Theme};
use kantor::log::init_logging;
use kantor::models::{BASE_CODE, RateTable};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Service URL the rate table is fetched from
    #[arg(long, default_value = nbp::DEFAULT_BASE_URL)]
    base_url: String,

    /// Currency the amount is entered in
    #[arg(long, default_value = BASE_CODE)]
    from: String,

    /// Currency the amount is converted into
    #[arg(long, default_value = "EUR")]
    to: String,

    /// Initial appearance; F8 toggles it at runtime
    #[arg(long, value_enum, default_value = "dark")]
    theme: ThemeArg,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Theme {
        match arg {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // The table is fetched exactly once per session, before the
    // terminal enters the alternate screen. A failed fetch leaves the
    // screen running without rates.
    let client = Client::new();
    let rates = match nbp::get_rate_table(&client, &cli.base_url).await {
        Ok(dto) => {
            let table = dto.to_rate_table();
            debug!(currencies = table.len(), "loaded exchange rate table");
            table
        }
        Err(err) => {
            error!(error = %err, "exchange rate fetch failed, starting without rates");
            RateTable::default()
        }
    };

    let converter = Converter::new(rates, &cli.from, &cli.to);
    let mut app = App::new(converter, cli.theme.into());
    app.run()?;

    Ok(())
}
