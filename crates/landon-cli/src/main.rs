//! Landon CLI
//!
//! Runs the room, opening and booking services against an in-memory store
//! seeded with the demo hotel, and prints results as JSON.

mod cli;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

use landon_availability::SlotCalendar;
use landon_core::config::{AppConfig, HotelConfig, LoggingConfig};
use landon_core::{Clock, SystemClock};
use landon_models::BookingForm;
use landon_services::{BookingService, InMemoryHotelStore, OpeningService, RoomService};

use cli::{Cli, Commands};

struct Services {
    hotel: HotelConfig,
    rooms: RoomService,
    openings: OpeningService,
    bookings: BookingService,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = AppConfig::load_from(&cli.config).context("loading configuration")?;
    if cli.json_logs {
        config.logging.json = true;
    }
    init_tracing(&config.logging);

    let services = build_services(&config)?;
    run(cli.command, &services).await
}

/// Initialize tracing/logging. `RUST_LOG` overrides the configured filter.
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| logging.filter.as_str().into());
    let registry = tracing_subscriber::registry().with(filter);

    if logging.json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

fn build_services(config: &AppConfig) -> Result<Services> {
    let calendar = SlotCalendar::from_config(&config.booking)?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let store = InMemoryHotelStore::with_demo_data(&calendar, clock.now()).shared();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        hotel = %config.hotel.title,
        minimum_stay_hours = calendar.minimum_stay_hours(),
        horizon_days = calendar.horizon().num_days(),
        "demo hotel ready"
    );

    Ok(Services {
        hotel: config.hotel.clone(),
        rooms: RoomService::new(store.clone(), config.paging.clone()),
        openings: OpeningService::new(
            store.clone(),
            store.clone(),
            calendar,
            clock.clone(),
            config.paging.clone(),
        ),
        bookings: BookingService::new(store.clone(), store, calendar, clock, config.paging.clone()),
    })
}

async fn run(command: Commands, services: &Services) -> Result<()> {
    match command {
        Commands::Info => print_json(&services.hotel),
        Commands::Rooms(list) => print_json(&services.rooms.list_rooms(&list.to_params()).await?),
        Commands::Room { id } => print_json(&services.rooms.get_room(id).await?),
        Commands::Openings { room, list } => {
            let params = list.to_params();
            let page = match room {
                Some(room_id) => services.openings.list_openings_for_room(room_id, &params).await?,
                None => services.openings.list_openings(&params).await?,
            };
            print_json(&page)
        }
        Commands::Conflicts(window) => {
            let slots = services
                .openings
                .conflicting_slots(
                    window.room,
                    window.start.with_timezone(&chrono::Utc),
                    window.end.with_timezone(&chrono::Utc),
                )
                .await?;
            print_json(&slots)
        }
        Commands::Book { window, user } => {
            let user_id = user.unwrap_or_else(Uuid::new_v4);
            let form = BookingForm::new(window.start, window.end);
            let booking = services
                .bookings
                .create_booking(user_id, window.room, form)
                .await?;
            print_json(&booking)
        }
        Commands::Bookings { user, list } => {
            let params = list.to_params();
            let page = match user {
                Some(user_id) => services.bookings.list_bookings_for_user(user_id, &params).await?,
                None => services.bookings.list_bookings(&params).await?,
            };
            print_json(&page)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
