use anyhow::Result;
use clap::{Parser, Subcommand};
use common::Language;

pub mod commands;

use crate::config::AppConfig;
use commands::{forecast, orders, serve};

#[derive(Parser)]
#[command(name = "econcast")]
#[command(about = "Economic indicator forecast dashboard with CLI tools and web server")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub config: AppConfig,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the data, fit the models and start the web server
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS", default_value = "0.0.0.0:3000")]
        bind_address: String,
    },
    /// Print the forecast for every indicator
    Forecast {
        /// Number of years to forecast
        #[arg(short = 'n', long, default_value_t = 5, allow_negative_numbers = true)]
        horizon: i64,

        /// Language of the table headings and year labels (EN or AR)
        #[arg(short, long, default_value = "EN")]
        language: Language,
    },
    /// Print the ARIMA order selected for every indicator
    Orders,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { bind_address } => {
                serve(&self.config, &bind_address).await?;
            }
            Commands::Forecast { horizon, language } => {
                forecast(&self.config, horizon, language)?;
            }
            Commands::Orders => {
                orders(&self.config)?;
            }
        }
        Ok(())
    }
}
