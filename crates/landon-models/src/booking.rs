//! Booking model
//!
//! A confirmed reservation of one room for a half-open window
//! `[start_at, end_at)`. Instants are stored in UTC.

use chrono::{DateTime, FixedOffset, Utc};
use landon_core::traits::{Entity, Id, Identifiable};
use landon_queries::{FieldDescriptor, FieldRegistry, FieldValue, OperatorProvider, Resource};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Booking entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Id,
    pub room_id: Id,
    pub user_id: Id,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,

    /// Price of the whole stay, in cents
    pub total: i64,

    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

static BOOKING_FIELDS: Lazy<FieldRegistry> = Lazy::new(|| {
    FieldRegistry::new(
        Booking::TYPE_NAME,
        vec![
            FieldDescriptor::new("startAt")
                .sortable()
                .searchable_with(OperatorProvider::OrderedTemporal),
            FieldDescriptor::new("endAt")
                .sortable()
                .searchable_with(OperatorProvider::OrderedTemporal),
            FieldDescriptor::new("total")
                .sortable()
                .searchable_with(OperatorProvider::OrderedDecimal),
        ],
    )
});

impl Booking {
    /// A new booking stamped with `now`
    pub fn new(
        room_id: Id,
        user_id: Id,
        start_at: DateTime<Utc>,
        end_at: DateTime<Utc>,
        total: i64,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            room_id,
            user_id,
            start_at,
            end_at,
            total,
            created_at: now,
            modified_at: now,
        }
    }

    /// Whether this booking shares any instant with `[start, end)`
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.start_at < end && start < self.end_at
    }
}

impl Identifiable for Booking {
    fn id(&self) -> Id {
        self.id
    }
}

impl Entity for Booking {
    const TYPE_NAME: &'static str = "Booking";
}

impl Resource for Booking {
    fn registry() -> &'static FieldRegistry {
        &BOOKING_FIELDS
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "startAt" => Some(FieldValue::DateTime(self.start_at)),
            "endAt" => Some(FieldValue::DateTime(self.end_at)),
            "total" => Some(FieldValue::Integer(self.total)),
            _ => None,
        }
    }
}

/// Request body for creating a booking. Offsets are accepted and
/// normalized to UTC.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_booking_window"))]
pub struct BookingForm {
    pub start_at: DateTime<FixedOffset>,
    pub end_at: DateTime<FixedOffset>,
}

fn validate_booking_window(form: &BookingForm) -> Result<(), ValidationError> {
    if form.end_at <= form.start_at {
        let mut error = ValidationError::new("booking_window");
        error.message = Some("End time must be after start time.".into());
        return Err(error);
    }
    Ok(())
}

impl BookingForm {
    pub fn new(start_at: DateTime<FixedOffset>, end_at: DateTime<FixedOffset>) -> Self {
        Self { start_at, end_at }
    }

    /// Form for a window already in UTC
    pub fn utc(start_at: DateTime<Utc>, end_at: DateTime<Utc>) -> Self {
        Self::new(start_at.fixed_offset(), end_at.fixed_offset())
    }

    pub fn start_utc(&self) -> DateTime<Utc> {
        self.start_at.with_timezone(&Utc)
    }

    pub fn end_utc(&self) -> DateTime<Utc> {
        self.end_at.with_timezone(&Utc)
    }
}
