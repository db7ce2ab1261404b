use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use japan_budget::{
    BudgetConfig, City, ExchangeRateProvider, PricingTable, SelectionState, TravelStyle,
    TripConfig,
    api::AppState,
    calculator::compute_breakdown,
    currency::{format_sgd, format_yen},
    exchange_rate::{FixedExchangeRate, LiveExchangeRates},
    export::render_html_summary,
    init_tracing,
    models::BudgetEvent,
    pricing::load_pricing,
    season::Season,
    tips::{city_guide, travel_tips},
    web,
};

mod cli;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let config = BudgetConfig::load_from_path(args.config.clone())?;
    init_tracing(&config.logging, args.verbose);

    match args.command {
        Commands::Serve { host, port } => {
            let mut server = config.server.clone();
            if let Some(host) = host {
                server.host = host;
            }
            if let Some(port) = port {
                server.port = port;
            }
            let state = AppState::live(&config)?;
            web::run(&server, state).await?;
        }
        Commands::Estimate {
            cities,
            travelers,
            style,
            depart,
            return_date,
            rate,
            json,
            html,
        } => {
            let trip = TripConfig {
                departure_date: depart,
                return_date,
                travelers,
                cities,
                travel_style: style,
            };
            let pricing = load_pricing(&config.pricing)?;
            let provider: Arc<dyn ExchangeRateProvider> = match rate {
                Some(rate) => Arc::new(FixedExchangeRate(rate)),
                None => Arc::new(LiveExchangeRates::new(&config.exchange_rate)),
            };
            let output = Output::from_flags(json, html);
            estimate(trip, &pricing, provider.as_ref(), output).await?;
        }
        Commands::Tips { style, city } => print_tips(style, city),
        Commands::Season { date } => print_season(date),
    }

    Ok(())
}

#[derive(Debug, Clone, Copy)]
enum Output {
    Table,
    Json,
    Html,
}

impl Output {
    fn from_flags(json: bool, html: bool) -> Self {
        match (json, html) {
            (true, _) => Output::Json,
            (_, true) => Output::Html,
            _ => Output::Table,
        }
    }
}

async fn estimate(
    trip: TripConfig,
    pricing: &PricingTable,
    rates: &dyn ExchangeRateProvider,
    output: Output,
) -> Result<()> {
    trip.validate()?;
    let mut selection = SelectionState::for_style(trip.travel_style, pricing);
    selection.normalize(&trip.cities, pricing);

    let rate = rates.current_rate().await;
    let breakdown = compute_breakdown(&trip, &selection, pricing, rate.rate);
    BudgetEvent::new(&trip, &breakdown, rate.rate).emit();

    match output {
        Output::Json => println!("{}", serde_json::to_string_pretty(&breakdown)?),
        Output::Html => println!("{}", render_html_summary(&trip, &breakdown, rate.rate)),
        Output::Table => {
            let route = trip
                .cities
                .iter()
                .map(|city| city.as_str())
                .collect::<Vec<_>>()
                .join(" → ");
            println!("Singapore → {route}");
            println!(
                "{} nights, {} traveler(s), {} ({})",
                trip.nights(),
                trip.travelers,
                trip.travel_style.label(),
                trip.season().label()
            );
            println!(
                "{}",
                selection.effective_destination(&trip.cities).flight_route()
            );
            println!();
            for (category, amount) in breakdown.categories() {
                println!("  {:<18}{:>12}", category.label(), format_sgd(amount));
            }
            println!("  {:<18}{:>12}", "Total", format_sgd(breakdown.total));
            println!("  {:<18}{:>12}", "Per person", format_sgd(breakdown.per_person));
            println!("  {:<18}{:>12}", "Daily average", format_sgd(breakdown.daily_average));
            println!(
                "  {:<18}{:>12}",
                "Total (JPY)",
                format_yen(breakdown.total_jpy)
            );
        }
    }
    Ok(())
}

fn print_tips(style: TravelStyle, city: Option<City>) {
    if let Some(city) = city {
        let guide = city_guide(city);
        for (heading, items) in [
            ("Must see", guide.must_see),
            ("Hidden gems", guide.hidden_gems),
            ("Food spots", guide.food_spots),
            ("Local food", guide.local_foods),
        ] {
            if items.is_empty() {
                continue;
            }
            println!("{heading}:");
            for item in items {
                println!("  - {item}");
            }
        }
        return;
    }

    for tip in travel_tips(style) {
        println!("[{}] {} ({})", tip.category, tip.title, tip.savings);
        println!("  {}", tip.description);
    }
}

fn print_season(date: NaiveDate) {
    let season = Season::from_date(date);
    println!(
        "{date}: {} (x{:.2} on flights and accommodation)",
        season.label(),
        season.multiplier()
    );
}
