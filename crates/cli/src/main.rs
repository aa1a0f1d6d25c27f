//! Demo CLI for the nearbite engine.
//!
//! Seeds an in-memory store from a JSON fixture and answers nearby,
//! search and menu queries against it. This is glue for poking at the
//! engine, not a transport layer.

mod logging;
mod seed;

use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use chrono::NaiveTime;
use clap::{Parser, Subcommand};
use engine::{FixedClock, Nearbite, SearchOutcome, SystemClock};
use nearbite_core::{Config, QueryPoint};
use store::MokaCache;
use tracing::warn;

#[derive(Parser)]
#[command(name = "nearbite", about = "Find open restaurants near a point")]
struct Cli {
  /// Path to a JSON seed file (defaults to the bundled sample catalog)
  #[arg(long, global = true)]
  data: Option<PathBuf>,

  /// Path to a nearbite.toml config file
  #[arg(long, global = true)]
  config: Option<PathBuf>,

  /// Evaluate open-hours at this time of day (HH:MM) instead of now
  #[arg(long, global = true)]
  time: Option<String>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// List open restaurants within the serving radius
  Nearby {
    #[arg(long)]
    lat: f64,
    #[arg(long)]
    lon: f64,
  },
  /// Search restaurants by name, cuisine, item name and item attribute
  Search {
    #[arg(long)]
    lat: f64,
    #[arg(long)]
    lon: f64,
    /// Free-text search query
    text: String,
    /// Run the four sub-searches sequentially instead of fanned out
    #[arg(long)]
    sequential: bool,
  },
  /// Print a restaurant's menu
  Menu {
    /// Restaurant id from the seed data
    restaurant_id: String,
  },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  logging::init_cli_logging();
  let cli = Cli::parse();

  let config = match &cli.config {
    Some(path) => Config::load(path).with_context(|| format!("loading {}", path.display()))?,
    None => Config::default(),
  };

  let store = Arc::new(seed::load_store(cli.data.as_deref()).await?);
  let service = match parse_time(cli.time.as_deref())? {
    Some(time) => Nearbite::with_clock(
      store.clone(),
      store,
      Arc::new(MokaCache::new()),
      Arc::new(FixedClock(time)),
      config,
    ),
    None => Nearbite::with_clock(
      store.clone(),
      store,
      Arc::new(MokaCache::new()),
      Arc::new(SystemClock),
      config,
    ),
  };

  match cli.command {
    Command::Nearby { lat, lon } => {
      let restaurants = service.find_nearby(QueryPoint::new(lat, lon)).await?;
      println!("{}", serde_json::to_string_pretty(&restaurants)?);
    }
    Command::Search {
      lat,
      lon,
      text,
      sequential,
    } => {
      let point = QueryPoint::new(lat, lon);
      let outcome = if sequential {
        service.search(point, &text).await
      } else {
        service.search_concurrent(point, &text).await
      };
      print_outcome(&outcome)?;
    }
    Command::Menu { restaurant_id } => match service.menu(&restaurant_id).await? {
      Some(menu) => println!("{}", serde_json::to_string_pretty(&menu)?),
      None => println!("No menu for restaurant {restaurant_id}"),
    },
  }

  Ok(())
}

fn parse_time(raw: Option<&str>) -> anyhow::Result<Option<NaiveTime>> {
  let Some(raw) = raw else { return Ok(None) };
  let time = NaiveTime::parse_from_str(raw, "%H:%M").with_context(|| format!("invalid --time {raw:?}, want HH:MM"))?;
  Ok(Some(time))
}

fn print_outcome(outcome: &SearchOutcome) -> anyhow::Result<()> {
  for failure in &outcome.failed_sources {
    warn!(source = %failure.source, error = %failure.error, "Search source failed; results may be incomplete");
  }
  println!("{}", serde_json::to_string_pretty(&outcome.restaurants)?);
  Ok(())
}
