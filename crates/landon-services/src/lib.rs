//! # landon-services
//!
//! Business services for the Landon hotel API.
//!
//! Services own the request-level flow: resolve paging, compile the
//! resource query, ask the availability engine for a decision and commit
//! through a repository. Storage sits behind the async repository traits in
//! [`repository`]; [`memory::InMemoryHotelStore`] is the bundled backend.

pub mod repository;
pub mod memory;
pub mod listing;
pub mod rooms;
pub mod openings;
pub mod bookings;

pub use repository::{BookingRepository, RoomRepository};
pub use memory::InMemoryHotelStore;
pub use rooms::RoomService;
pub use openings::OpeningService;
pub use bookings::BookingService;
