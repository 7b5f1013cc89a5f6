use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Entity;
use crate::error::{ApiError, FieldError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicHoliday {
    pub holiday_id: String,
    pub holiday_name: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
}

impl Entity for PublicHoliday {
    fn entity_id(&self) -> &str {
        &self.holiday_id
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicHolidayDraft {
    pub holiday_name: String,
    pub date: Option<NaiveDate>,
    pub description: String,
}

impl PublicHolidayDraft {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut fields = Vec::new();

        if self.holiday_name.trim().is_empty() {
            fields.push(FieldError::new("name", "Holiday name is required"));
        }
        if self.date.is_none() {
            fields.push(FieldError::new("date", "Holiday date is required"));
        }

        if fields.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Validation { fields })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_and_date_are_mandatory() {
        let err = PublicHolidayDraft::default().validate().unwrap_err();
        assert_eq!(err.field_errors().len(), 2);
    }

    #[test]
    fn description_is_optional() {
        let draft = PublicHolidayDraft {
            holiday_name: "May Day".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 5, 1),
            description: String::new(),
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn entity_decodes_wire_shape() {
        let holiday: PublicHoliday = serde_json::from_value(serde_json::json!({
            "holidayId": "h1",
            "holidayName": "May Day",
            "date": "2026-05-01"
        }))
        .unwrap();

        assert_eq!(holiday.entity_id(), "h1");
        assert_eq!(holiday.date, NaiveDate::from_ymd_opt(2026, 5, 1).unwrap());
        assert_eq!(holiday.description, "");
    }
}
