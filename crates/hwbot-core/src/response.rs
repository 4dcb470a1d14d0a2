use serde_json::Value;

use crate::error::{CycleError, Result};
use crate::homework::Homework;

/// Validated answer from the status endpoint.
///
/// Transient: built once per cycle and discarded after interpretation.
#[derive(Debug, Clone)]
pub struct PollResponse {
    /// Homework entries, most recent first.
    pub homeworks: Vec<Homework>,
    /// Server-side upper bound of the answered poll window.
    pub current_date: i64,
}

/// Check a decoded payload against the documented shape.
///
/// Both fields are mandatory: `homeworks` must be a list of objects and
/// `current_date` an integer. Entry order is preserved; an empty list is
/// valid.
pub fn validate(raw: &Value) -> Result<PollResponse> {
    let object = raw.as_object().ok_or(CycleError::NotAnObject)?;

    let homeworks = object
        .get("homeworks")
        .ok_or(CycleError::MissingField("homeworks"))?;
    let homeworks = homeworks.as_array().ok_or(CycleError::WrongType {
        field: "homeworks",
        expected: "a list",
    })?;

    let current_date = object
        .get("current_date")
        .ok_or(CycleError::MissingField("current_date"))?;
    let current_date = current_date.as_i64().ok_or(CycleError::WrongType {
        field: "current_date",
        expected: "an integer timestamp",
    })?;

    let homeworks = homeworks
        .iter()
        .map(|entry| {
            serde_json::from_value(entry.clone()).map_err(|_| CycleError::WrongType {
                field: "homeworks",
                expected: "a list of homework objects",
            })
        })
        .collect::<Result<Vec<Homework>>>()?;

    Ok(PollResponse {
        homeworks,
        current_date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_well_formed_payload() {
        let raw = json!({
            "homeworks": [{"homework_name": "hw1", "status": "approved"}],
            "current_date": 1_700_000_000,
        });
        let response = validate(&raw).unwrap();
        assert_eq!(response.current_date, 1_700_000_000);
        assert_eq!(response.homeworks.len(), 1);
        assert_eq!(response.homeworks[0].name.as_deref(), Some("hw1"));
    }

    #[test]
    fn accepts_empty_homework_list() {
        let raw = json!({"homeworks": [], "current_date": 5});
        let response = validate(&raw).unwrap();
        assert!(response.homeworks.is_empty());
        assert_eq!(response.current_date, 5);
    }

    #[test]
    fn preserves_entry_order() {
        let raw = json!({
            "homeworks": [
                {"homework_name": "newest", "status": "approved"},
                {"homework_name": "older", "status": "rejected"},
            ],
            "current_date": 9,
        });
        let response = validate(&raw).unwrap();
        assert_eq!(response.homeworks[0].name.as_deref(), Some("newest"));
        assert_eq!(response.homeworks[1].name.as_deref(), Some("older"));
    }

    #[test]
    fn rejects_non_object_payload() {
        assert!(matches!(
            validate(&json!(["not", "an", "object"])),
            Err(CycleError::NotAnObject)
        ));
    }

    #[test]
    fn rejects_missing_homeworks() {
        assert!(matches!(
            validate(&json!({"current_date": 1})),
            Err(CycleError::MissingField("homeworks"))
        ));
    }

    #[test]
    fn rejects_missing_current_date() {
        assert!(matches!(
            validate(&json!({"homeworks": []})),
            Err(CycleError::MissingField("current_date"))
        ));
    }

    #[test]
    fn rejects_homeworks_of_the_wrong_type() {
        let err = validate(&json!({"homeworks": "oops", "current_date": 1})).unwrap_err();
        assert!(matches!(
            err,
            CycleError::WrongType {
                field: "homeworks",
                ..
            }
        ));
    }

    #[test]
    fn rejects_non_integer_current_date() {
        let err = validate(&json!({"homeworks": [], "current_date": "soon"})).unwrap_err();
        assert!(matches!(
            err,
            CycleError::WrongType {
                field: "current_date",
                ..
            }
        ));
    }

    #[test]
    fn rejects_non_object_entries() {
        let err = validate(&json!({"homeworks": [42], "current_date": 1})).unwrap_err();
        assert!(matches!(
            err,
            CycleError::WrongType {
                field: "homeworks",
                ..
            }
        ));
    }
}
