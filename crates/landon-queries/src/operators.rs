//! Operator Providers
//!
//! A searchable field carries one [`OperatorProvider`]. The provider decides
//! which operator tokens the field accepts, how the raw literal is parsed,
//! and produces the [`Comparison`] the filter evaluates.
//!
//! - `Equality`: `eq` only, literal compared as text
//! - `OrderedTemporal`: `eq gt gte lt lte`, literal is an RFC 3339 instant
//!   or a `YYYY-MM-DD` date, normalized to UTC
//! - `OrderedDecimal`: `eq gt gte lt lte`, literal is an amount in major
//!   units ("101.19") compared against a field held in minor units

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use landon_core::{LandonError, LandonResult};

use crate::fields::FieldValue;
use crate::filters::Comparison;

/// Comparison operators accepted in `search` terms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOp {
    /// eq
    Eq,
    /// gt
    Gt,
    /// gte
    Gte,
    /// lt
    Lt,
    /// lte
    Lte,
}

impl ComparisonOp {
    /// Parse an operator token, ignoring case
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "eq" => Some(Self::Eq),
            "gt" => Some(Self::Gt),
            "gte" => Some(Self::Gte),
            "lt" => Some(Self::Lt),
            "lte" => Some(Self::Lte),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Gt => "gt",
            Self::Gte => "gte",
            Self::Lt => "lt",
            Self::Lte => "lte",
        }
    }

    /// Whether `field.cmp(literal)` satisfies this operator
    pub fn accepts(&self, ordering: Ordering) -> bool {
        match self {
            Self::Eq => ordering == Ordering::Equal,
            Self::Gt => ordering == Ordering::Greater,
            Self::Gte => ordering != Ordering::Less,
            Self::Lt => ordering == Ordering::Less,
            Self::Lte => ordering != Ordering::Greater,
        }
    }
}

const EQUALITY_OPERATORS: &[ComparisonOp] = &[ComparisonOp::Eq];

const ORDERED_OPERATORS: &[ComparisonOp] = &[
    ComparisonOp::Eq,
    ComparisonOp::Gt,
    ComparisonOp::Gte,
    ComparisonOp::Lt,
    ComparisonOp::Lte,
];

/// How a searchable field compares against a literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperatorProvider {
    #[default]
    Equality,
    OrderedTemporal,
    OrderedDecimal,
}

impl OperatorProvider {
    pub fn supported_operators(&self) -> &'static [ComparisonOp] {
        match self {
            Self::Equality => EQUALITY_OPERATORS,
            Self::OrderedTemporal | Self::OrderedDecimal => ORDERED_OPERATORS,
        }
    }

    /// Resolve an operator token this provider accepts
    pub fn operator(&self, token: &str) -> Option<ComparisonOp> {
        ComparisonOp::from_token(token).filter(|op| self.supported_operators().contains(op))
    }

    pub fn supports(&self, token: &str) -> bool {
        self.operator(token).is_some()
    }

    /// Parse a raw literal into the value kind this provider compares
    pub fn parse_literal(&self, raw: &str) -> Option<FieldValue> {
        match self {
            Self::Equality => Some(FieldValue::Text(raw.to_string())),
            Self::OrderedTemporal => parse_instant(raw).map(FieldValue::DateTime),
            Self::OrderedDecimal => parse_minor_units(raw).map(FieldValue::Integer),
        }
    }

    /// Build the comparison for `field <operator> <literal>`.
    ///
    /// An operator outside [`Self::supported_operators`] is a contract
    /// violation: the binder is expected to have filtered it out already.
    pub fn build_comparison(
        &self,
        field: &'static str,
        operator: &str,
        literal: &str,
    ) -> LandonResult<Comparison> {
        let op = self.operator(operator).ok_or_else(|| LandonError::InvalidOperator {
            field: field.to_string(),
            operator: operator.to_string(),
        })?;
        let value = self
            .parse_literal(literal)
            .ok_or_else(|| LandonError::InvalidLiteral {
                field: field.to_string(),
                value: literal.to_string(),
            })?;

        Ok(Comparison::new(field, op, value))
    }
}

fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Utc));
    }

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight))
}

fn parse_minor_units(raw: &str) -> Option<i64> {
    let amount: f64 = raw.trim().parse().ok()?;
    if !amount.is_finite() {
        return None;
    }

    let minor = (amount * 100.0).round();
    if minor.abs() > i64::MAX as f64 {
        return None;
    }
    Some(minor as i64)
}
