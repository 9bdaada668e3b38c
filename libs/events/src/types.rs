//! Event record and its metadata enums.

use serde::{Deserialize, Serialize};

use crate::EventError;

// =============================================================================
// Metadata Enums
// =============================================================================

/// Kind of activity an event represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    #[default]
    Study,
    Workout,
    Meeting,
    #[serde(other)]
    Other,
}

/// Rough time-of-day preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Study => "study",
            Self::Workout => "workout",
            Self::Meeting => "meeting",
            Self::Other => "other",
        };
        f.write_str(s)
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
        };
        f.write_str(s)
    }
}

// =============================================================================
// Event
// =============================================================================

/// Default priority for events that do not set one.
pub const DEFAULT_PRIORITY: u32 = 1;

fn default_priority() -> u32 {
    DEFAULT_PRIORITY
}

/// Something to schedule, such as a study session or a workout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Human-readable label.
    pub name: String,

    /// Number of contiguous blocks required.
    pub duration_blocks: usize,

    /// Last day (zero-based) the event may occupy.
    pub deadline_day: usize,

    /// Higher is more important. Advisory only.
    #[serde(default = "default_priority")]
    pub priority: u32,

    #[serde(default)]
    pub event_type: EventKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_time: Option<TimeOfDay>,
}

impl Event {
    /// Creates a study event with default metadata.
    pub fn new(name: impl Into<String>, duration_blocks: usize, deadline_day: usize) -> Self {
        Self {
            name: name.into(),
            duration_blocks,
            deadline_day,
            priority: DEFAULT_PRIORITY,
            event_type: EventKind::default(),
            preferred_time: None,
        }
    }

    /// Checks the event against a week of `days_per_week` days.
    pub fn validate(&self, days_per_week: usize) -> Result<(), EventError> {
        if self.name.trim().is_empty() {
            return Err(EventError::EmptyName);
        }
        if self.duration_blocks == 0 {
            return Err(EventError::ZeroDuration {
                name: self.name.clone(),
            });
        }
        if self.deadline_day >= days_per_week {
            return Err(EventError::DeadlineOutOfRange {
                name: self.name.clone(),
                deadline_day: self.deadline_day,
                days_per_week,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_defaults() {
        let event = Event::new("Linear algebra", 2, 3);
        assert_eq!(event.priority, DEFAULT_PRIORITY);
        assert_eq!(event.event_type, EventKind::Study);
        assert_eq!(event.preferred_time, None);
    }

    #[test]
    fn test_validate_ok() {
        let event = Event {
            event_type: EventKind::Workout,
            ..Event::new("Run", 1, 6)
        };
        assert!(event.validate(7).is_ok());
    }

    #[test]
    fn test_validate_empty_name() {
        let event = Event::new("  ", 1, 0);
        assert_eq!(event.validate(7), Err(EventError::EmptyName));
    }

    #[test]
    fn test_validate_zero_duration() {
        let event = Event::new("Nothing", 0, 0);
        assert!(matches!(
            event.validate(7),
            Err(EventError::ZeroDuration { .. })
        ));
    }

    #[test]
    fn test_validate_deadline_out_of_range() {
        let event = Event::new("Late", 1, 7);
        assert_eq!(
            event.validate(7),
            Err(EventError::DeadlineOutOfRange {
                name: "Late".to_string(),
                deadline_day: 7,
                days_per_week: 7,
            })
        );
    }

    #[test]
    fn test_deserialize_minimal_toml() {
        let event: Event = toml::from_str(
            r#"
name = "Standup"
duration_blocks = 1
deadline_day = 0
"#,
        )
        .unwrap();
        assert_eq!(event, Event::new("Standup", 1, 0));
    }

    #[test]
    fn test_deserialize_full_toml() {
        let event: Event = toml::from_str(
            r#"
name = "Team sync"
duration_blocks = 2
deadline_day = 4
priority = 5
event_type = "meeting"
preferred_time = "afternoon"
"#,
        )
        .unwrap();
        assert_eq!(event.priority, 5);
        assert_eq!(event.event_type, EventKind::Meeting);
        assert_eq!(event.preferred_time, Some(TimeOfDay::Afternoon));
    }

    #[test]
    fn test_unknown_kind_is_other() {
        let kind: EventKind = serde_json::from_str(r#""yoga""#).unwrap();
        assert_eq!(kind, EventKind::Other);
    }

    #[test]
    fn test_json_omits_missing_preference() {
        let json = serde_json::to_value(Event::new("Read", 1, 0)).unwrap();
        assert!(json.get("preferred_time").is_none());
        assert_eq!(json["event_type"], "study");
    }
}
