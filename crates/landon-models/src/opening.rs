//! Opening model
//!
//! An open slot on one room's calendar, priced at the room's rate. Openings
//! are computed, never stored.

use chrono::{DateTime, Utc};
use landon_core::traits::{Entity, Id};
use landon_queries::{FieldDescriptor, FieldRegistry, FieldValue, OperatorProvider, Resource};
use once_cell::sync::Lazy;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Opening {
    pub room_id: Id,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    /// Room rate in cents
    pub rate: i64,
}

static OPENING_FIELDS: Lazy<FieldRegistry> = Lazy::new(|| {
    FieldRegistry::new(
        Opening::TYPE_NAME,
        vec![
            FieldDescriptor::new("startAt")
                .sortable()
                .searchable_with(OperatorProvider::OrderedTemporal),
            FieldDescriptor::new("endAt")
                .sortable()
                .searchable_with(OperatorProvider::OrderedTemporal),
            FieldDescriptor::new("rate")
                .sortable()
                .searchable_with(OperatorProvider::OrderedDecimal),
        ],
    )
});

impl Opening {
    pub fn new(room_id: Id, rate: i64, start_at: DateTime<Utc>, end_at: DateTime<Utc>) -> Self {
        Self {
            room_id,
            start_at,
            end_at,
            rate,
        }
    }
}

impl Entity for Opening {
    const TYPE_NAME: &'static str = "Opening";
}

impl Resource for Opening {
    fn registry() -> &'static FieldRegistry {
        &OPENING_FIELDS
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "startAt" => Some(FieldValue::DateTime(self.start_at)),
            "endAt" => Some(FieldValue::DateTime(self.end_at)),
            "rate" => Some(FieldValue::Integer(self.rate)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use landon_queries::ResourceQuery;
    use uuid::Uuid;

    #[test]
    fn test_openings_search_by_time() {
        let room = Uuid::new_v4();
        let at = |h| Utc.with_ymd_and_hms(2024, 3, 1, h, 0, 0).unwrap();
        let openings = vec![
            Opening::new(room, 10119, at(0), at(12)),
            Opening::new(room, 10119, at(12), at(23)),
        ];

        let query =
            ResourceQuery::<Opening>::compile(&["startAt desc"], &["startAt gte 2024-03-01T06:00:00Z"])
                .unwrap();
        let found = query.apply(openings);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].start_at, at(12));
    }

    #[test]
    fn test_opening_serializes_camel_case() {
        let opening = Opening::new(Uuid::nil(), 100, Utc::now(), Utc::now());
        let json = serde_json::to_value(&opening).unwrap();
        assert!(json.get("startAt").is_some());
        assert!(json.get("roomId").is_some());
    }
}
