use chrono::{Duration, NaiveDate, Utc};
use tracing_subscriber::EnvFilter;

use flight_filter::domain::Iata;
use flight_filter::pipeline::run_search;
use flight_filter::present::{PresenterConfig, render};
use flight_filter::provider::{FlightClient, ProviderConfig, SearchQuery};
use flight_filter::rules::ConstraintRules;

/// Default lead time for the outbound date when none is given.
const DEFAULT_LEAD_DAYS: i64 = 30;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Get credentials from environment
    let api_key = match std::env::var("SERPAPI_KEY") {
        Ok(key) if !key.is_empty() => key,
        _ => {
            eprintln!("ERROR: SERPAPI_KEY environment variable is not set.");
            eprintln!("Get a free API key at https://serpapi.com/ (100 searches/month)");
            eprintln!("Set it with: export SERPAPI_KEY='your_key_here'");
            std::process::exit(2);
        }
    };

    // Usage: flight-filter [ORIGIN] [DESTINATION] [OUTBOUND_DATE]
    let mut args = std::env::args().skip(1);
    let origin = parse_airport(args.next().as_deref().unwrap_or("WRO"));
    let destination = parse_airport(args.next().as_deref().unwrap_or("TLV"));
    let outbound_date = match args.next() {
        Some(arg) => NaiveDate::parse_from_str(&arg, "%Y-%m-%d").unwrap_or_else(|_| {
            eprintln!("Invalid date '{arg}': expected YYYY-MM-DD");
            std::process::exit(2);
        }),
        None => Utc::now().date_naive() + Duration::days(DEFAULT_LEAD_DAYS),
    };

    let rules = ConstraintRules::default();
    let query = SearchQuery::one_way(origin, destination, outbound_date);

    let client = FlightClient::new(ProviderConfig::new(api_key))
        .expect("Failed to create search client");

    println!("Searching flights: {origin} -> {destination} on {outbound_date}");
    println!("Applying constraints:");
    println!(
        "  Departure window: {} - {}",
        rules.min_departure, rules.max_departure
    );
    println!(
        "  Arrival window:   {} - {}",
        rules.min_arrival, rules.max_arrival
    );
    println!("  Max duration:     {} minutes", rules.max_trip_mins);
    println!(
        "  Connections:      {}min within area / {}min border exit",
        rules.min_connection_within, rules.min_connection_exit
    );
    println!();

    match run_search(&client, &rules, &query).await {
        Ok(outcome) => {
            println!("Found {} total flight options", outcome.total_found);
            if outcome.survivors.is_empty() {
                println!("No flights found matching all constraints.");
                println!("Try different dates, a different destination, or relaxed time windows.");
            } else {
                println!("{} flights meet all constraints\n", outcome.survivors.len());
                print!("{}", render(&PresenterConfig::default(), &outcome.survivors));
            }
        }
        Err(e) => {
            eprintln!("Error searching flights: {e}");
            std::process::exit(1);
        }
    }
}

fn parse_airport(arg: &str) -> Iata {
    Iata::parse(arg).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(2);
    })
}
