use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// Longest accepted event name or category, in characters.
pub const MAX_LABEL_LEN: usize = 64;

/// Usage event as posted by the front end.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnalyticsEventInput {
    pub session_id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
}

/// A validated usage event, stamped on receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnalyticsEvent {
    pub session_id: Uuid,
    pub name: String,
    pub category: Option<String>,
    pub recorded_at: jiff::Timestamp,
}

impl AnalyticsEvent {
    pub fn from_input(
        input: AnalyticsEventInput,
        recorded_at: jiff::Timestamp,
    ) -> Result<Self, CoreError> {
        let session_id = Uuid::parse_str(input.session_id.trim())?;
        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(CoreError::MissingField("name".to_string()));
        }
        check_label_len("name", &name)?;
        let category = input
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        if let Some(category) = &category {
            check_label_len("category", category)?;
        }

        Ok(Self {
            session_id,
            name,
            category,
            recorded_at,
        })
    }
}

fn check_label_len(field: &str, value: &str) -> Result<(), CoreError> {
    if value.chars().count() > MAX_LABEL_LEN {
        return Err(CoreError::FieldTooLong {
            field: field.to_string(),
            max: MAX_LABEL_LEN,
        });
    }
    Ok(())
}

/// Aggregate counts over every recorded event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnalyticsSummary {
    pub total_events: u64,
    pub distinct_sessions: u64,
    pub by_name: BTreeMap<String, u64>,
    pub by_category: BTreeMap<String, u64>,
    pub first_event_at: Option<jiff::Timestamp>,
    pub last_event_at: Option<jiff::Timestamp>,
}
