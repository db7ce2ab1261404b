use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use japan_budget::{City, TravelStyle};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "japan-budget", version, about = "Japan trip budget estimator")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "JAPAN_BUDGET_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the HTTP API
    Serve {
        /// Bind address, overrides the configured host
        #[arg(long)]
        host: Option<String>,

        /// Port, overrides the configured port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Estimate a trip budget and print it
    Estimate {
        /// Comma-separated destination cities
        #[arg(long, value_delimiter = ',', required = true)]
        cities: Vec<City>,

        /// Number of travelers (1-20)
        #[arg(short, long, default_value = "2")]
        travelers: u32,

        /// budget, midrange or luxury
        #[arg(short, long, default_value = "midrange")]
        style: TravelStyle,

        /// Departure date (YYYY-MM-DD)
        #[arg(long)]
        depart: Option<NaiveDate>,

        /// Return date (YYYY-MM-DD)
        #[arg(long = "return")]
        return_date: Option<NaiveDate>,

        /// SGD per JPY; the live rate is used when omitted
        #[arg(long)]
        rate: Option<f64>,

        /// Print the breakdown as JSON
        #[arg(long, conflicts_with = "html")]
        json: bool,

        /// Print the HTML summary
        #[arg(long)]
        html: bool,
    },

    /// Print money-saving tips, or the guide for one city
    Tips {
        /// budget, midrange or luxury
        #[arg(short, long, default_value = "midrange")]
        style: TravelStyle,

        /// Show recommendations for this city instead
        #[arg(long)]
        city: Option<City>,
    },

    /// Show the season and price multiplier for a departure date
    Season {
        /// Date (YYYY-MM-DD)
        date: NaiveDate,
    },
}
