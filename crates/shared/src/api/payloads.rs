use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

use crate::{
    api::error::ValidationError,
    model::{ExerciseLog, User, ValidateModel},
    types::Uuid,
};

/// Day-granularity human-readable date, e.g. "Mon Jan 01 2024". Matches the
/// format the original API produced with JavaScript's `Date.toDateString()`.
pub const CALENDAR_FORMAT: &str = "%a %b %d %Y";

pub fn calendar_string(date: NaiveDate) -> String {
    date.format(CALENDAR_FORMAT).to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    #[serde(default)]
    pub username: String,
}

impl ValidateModel for CreateUser {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.username.is_empty() {
            return Err(ValidationError {
                error_messages: vec!["username is required".to_owned()],
            });
        }
        Ok(())
    }
}

/// Body of `POST /api/users/:id/exercises`. `duration` arrives as either a
/// JSON number or a numeric string; no positivity check is applied to it.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
pub struct CreateExercise {
    #[serde(default)]
    pub description: String,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(default)]
    pub duration: Option<i64>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl ValidateModel for CreateExercise {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut error_messages = Vec::new();
        if self.description.is_empty() {
            error_messages.push("description is required".to_owned());
        }
        if self.duration.is_none() {
            error_messages.push("duration is required".to_owned());
        }
        if !error_messages.is_empty() {
            return Err(ValidationError { error_messages });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LogsQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub limit: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseResponse {
    pub id: Uuid,
    pub username: String,
    pub description: String,
    pub duration: i64,
    pub date: String,
}

impl ExerciseResponse {
    pub fn new(user: User, log: ExerciseLog) -> Self {
        Self {
            id: user.id,
            username: user.username,
            description: log.description,
            duration: log.duration,
            date: calendar_string(log.date),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: i64,
    pub date: String,
}

impl From<ExerciseLog> for LogEntry {
    fn from(log: ExerciseLog) -> Self {
        Self {
            description: log.description,
            duration: log.duration,
            date: calendar_string(log.date),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogsResponse {
    pub id: Uuid,
    pub username: String,
    pub count: usize,
    pub log: Vec<LogEntry>,
    // Echoed back only when the caller supplied them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

impl LogsResponse {
    pub fn new(
        user: User,
        logs: Vec<ExerciseLog>,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: user.id,
            username: user.username,
            count: logs.len(),
            log: logs.into_iter().map(LogEntry::from).collect(),
            from: from.map(calendar_string),
            to: to.map(calendar_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn calendar_string_matches_js_to_date_string() {
        assert_eq!(calendar_string(date(2024, 1, 1)), "Mon Jan 01 2024");
        assert_eq!(calendar_string(date(2023, 12, 31)), "Sun Dec 31 2023");
    }

    #[test]
    fn duration_accepts_number_or_numeric_string() {
        let n: CreateExercise = serde_json::from_str(r#"{"description":"run","duration":30}"#).unwrap();
        assert_eq!(n.duration, Some(30));

        let s: CreateExercise =
            serde_json::from_str(r#"{"description":"run","duration":"30"}"#).unwrap();
        assert_eq!(s.duration, Some(30));
    }

    #[test]
    fn negative_duration_passes_through() {
        let e: CreateExercise =
            serde_json::from_str(r#"{"description":"run","duration":-5}"#).unwrap();
        assert_eq!(e.duration, Some(-5));
        assert!(e.validate().is_ok());
    }

    #[test]
    fn missing_username_fails_validation() {
        let empty: CreateUser = serde_json::from_str("{}").unwrap();
        assert!(empty.validate().is_err());

        let blank: CreateUser = serde_json::from_str(r#"{"username":""}"#).unwrap();
        assert!(blank.validate().is_err());

        let ok: CreateUser = serde_json::from_str(r#"{"username":"fcc_test"}"#).unwrap();
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn missing_exercise_fields_fail_validation() {
        let e: CreateExercise = serde_json::from_str("{}").unwrap();
        let err = e.validate().unwrap_err();
        assert_eq!(err.error_messages.len(), 2);
    }

    #[test]
    fn exercise_date_parses_as_calendar_day() {
        let e: CreateExercise =
            serde_json::from_str(r#"{"description":"run","duration":1,"date":"2023-06-15"}"#)
                .unwrap();
        assert_eq!(e.date, Some(date(2023, 6, 15)));
    }

    #[test]
    fn logs_response_counts_and_echoes_range() {
        let user = User {
            id: Uuid::new_v4(),
            username: "fcc_test".to_owned(),
        };
        let log = ExerciseLog {
            id: Uuid::new_v4(),
            user_id: user.id,
            description: "run".to_owned(),
            duration: 30,
            date: date(2023, 6, 15),
        };

        let res = LogsResponse::new(user, vec![log], Some(date(2023, 1, 1)), None);
        assert_eq!(res.count, 1);
        assert_eq!(res.log[0].date, "Thu Jun 15 2023");
        assert_eq!(res.from.as_deref(), Some("Sun Jan 01 2023"));
        assert_eq!(res.to, None);

        // A response without a range must not serialize the echo fields at all
        let value = serde_json::to_value(LogsResponse {
            from: None,
            to: None,
            ..res
        })
        .unwrap();
        assert!(value.get("from").is_none());
        assert!(value.get("to").is_none());
    }
}
