//! Room model

use landon_core::traits::{Entity, Id, Identifiable};
use landon_queries::{FieldDescriptor, FieldRegistry, FieldValue, OperatorProvider, Resource};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A bookable room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: Id,

    /// Display name
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    /// Price per minimum stay, in cents
    #[validate(range(min = 0))]
    pub rate: i64,
}

static ROOM_FIELDS: Lazy<FieldRegistry> = Lazy::new(|| {
    FieldRegistry::new(
        Room::TYPE_NAME,
        vec![
            FieldDescriptor::new("name").sortable().searchable(),
            FieldDescriptor::new("rate")
                .sortable()
                .searchable_with(OperatorProvider::OrderedDecimal),
        ],
    )
});

impl Room {
    pub fn new(name: impl Into<String>, rate: i64) -> Self {
        Self::with_id(Uuid::new_v4(), name, rate)
    }

    pub fn with_id(id: Id, name: impl Into<String>, rate: i64) -> Self {
        Self {
            id,
            name: name.into(),
            rate,
        }
    }
}

impl Identifiable for Room {
    fn id(&self) -> Id {
        self.id
    }
}

impl Entity for Room {
    const TYPE_NAME: &'static str = "Room";
}

impl Resource for Room {
    fn registry() -> &'static FieldRegistry {
        &ROOM_FIELDS
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "name" => Some(FieldValue::Text(self.name.clone())),
            "rate" => Some(FieldValue::Integer(self.rate)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use landon_core::ValidationErrors;

    #[test]
    fn test_room_fields() {
        let registry = Room::registry();
        assert_eq!(registry.sortable_fields(), vec!["name", "rate"]);
        assert_eq!(registry.searchable_fields(), vec!["name", "rate"]);
        assert_eq!(
            registry.operator_provider_for("Rate"),
            Some(OperatorProvider::OrderedDecimal)
        );
    }

    #[test]
    fn test_room_validation() {
        assert!(Room::new("Oxford Suite", 10119).validate().is_ok());
        assert!(Room::new("", 10119).validate().is_err());
        assert!(Room::new("Broom Closet", -1).validate().is_err());
    }

    #[test]
    fn test_room_validation_errors_by_field() {
        let errors: ValidationErrors = Room::new("", -1).validate().unwrap_err().into();
        assert!(errors.get("name").is_some());
        assert!(errors.get("rate").is_some());
        assert!(errors.get("id").is_none());
    }

    #[test]
    fn test_room_serializes_camel_case() {
        let room = Room::new("Oxford Suite", 10119);
        let json = serde_json::to_value(&room).unwrap();
        assert_eq!(json["name"], "Oxford Suite");
        assert_eq!(json["rate"], 10119);
        assert_eq!(json["id"], room.id.to_string());
    }
}
