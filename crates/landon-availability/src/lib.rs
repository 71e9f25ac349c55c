//! # landon-availability
//!
//! Availability engine for the Landon hotel API.
//!
//! A room's calendar from "now" to the furthest bookable instant is cut
//! into fixed-length slots of the configured minimum stay. A slot is either
//! open or conflicted by an existing booking. The engine is a pure decision
//! function over the bookings snapshot it is handed: it never caches
//! calendar state and never writes. Whoever commits a booking is
//! responsible for re-validating against a fresh snapshot atomically.

pub mod slot;
pub mod calendar;
pub mod conflicts;
pub mod rules;

pub use slot::{BookingRange, TimeSlot};
pub use calendar::SlotCalendar;
