use chrono::{DateTime, FixedOffset};
use clap::{Args, Parser, Subcommand};
use landon_queries::QueryParams;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "landon")]
#[command(about = "Landon hotel: rooms, openings and bookings over a demo in-memory store")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file stem (`landon` reads landon.toml, landon.yaml, ...)
    #[arg(short, long, global = true, env = "LANDON_CONFIG", default_value = "landon")]
    pub config: String,

    /// Emit JSON log lines on stderr
    #[arg(long, global = true)]
    pub json_logs: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the hotel's public details
    Info,
    /// List rooms
    Rooms(ListArgs),
    /// Show one room
    Room {
        id: Uuid,
    },
    /// List open slots, for every room or one
    Openings {
        /// Only this room
        #[arg(long)]
        room: Option<Uuid>,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Show the booked slots of a room that overlap a window
    Conflicts(WindowArgs),
    /// Book a room
    Book {
        #[command(flatten)]
        window: WindowArgs,
        /// Booking user; a fresh id when omitted
        #[arg(long)]
        user: Option<Uuid>,
    },
    /// List bookings
    Bookings {
        /// Only this user's bookings
        #[arg(long)]
        user: Option<Uuid>,
        #[command(flatten)]
        list: ListArgs,
    },
}

/// The common list parameters
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// `<field>[ desc]`, repeatable
    #[arg(long = "order-by")]
    pub order_by: Vec<String>,
    /// `<field> <op> <value>`, repeatable
    #[arg(long)]
    pub search: Vec<String>,
    #[arg(long, allow_negative_numbers = true)]
    pub offset: Option<i64>,
    #[arg(long, allow_negative_numbers = true)]
    pub limit: Option<i64>,
}

impl ListArgs {
    pub fn to_params(&self) -> QueryParams {
        QueryParams {
            offset: self.offset,
            limit: self.limit,
            order_by: self.order_by.clone(),
            search: self.search.clone(),
        }
    }
}

#[derive(Args, Debug)]
pub struct WindowArgs {
    #[arg(long)]
    pub room: Uuid,
    /// RFC 3339 start, e.g. 2024-03-01T12:00:00Z
    #[arg(long)]
    pub start: DateTime<FixedOffset>,
    /// RFC 3339 end
    #[arg(long)]
    pub end: DateTime<FixedOffset>,
}
