use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use super::Entity;
use crate::error::{ApiError, FieldError};

/// How a leave balance accrues over the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum AccrualPeriod {
    Monthly,
    Quarterly,
    Annually,
    OnRequest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveType {
    pub leave_type_id: String,
    pub leave_type_name: String,
    pub accrual_period: AccrualPeriod,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub allowed_in_probation_period: bool,
    #[serde(default)]
    pub allowed_in_notice_period: bool,
    #[serde(default)]
    pub can_be_carried_forward: bool,
}

impl Entity for LeaveType {
    fn entity_id(&self) -> &str {
        &self.leave_type_id
    }
}

/// User-submitted leave type payload, not yet persisted.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveTypeDraft {
    pub leave_type_name: String,
    pub accrual_period: Option<AccrualPeriod>,
    pub description: String,
    pub allowed_in_probation_period: bool,
    pub allowed_in_notice_period: bool,
    pub can_be_carried_forward: bool,
}

impl LeaveTypeDraft {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut fields = Vec::new();

        if self.leave_type_name.trim().is_empty() {
            fields.push(FieldError::new("name", "Leave type name is required"));
        }
        if self.accrual_period.is_none() {
            fields.push(FieldError::new("accrual", "Accrual period is required"));
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

    fn valid_draft() -> LeaveTypeDraft {
        LeaveTypeDraft {
            leave_type_name: "Sick Leave".to_string(),
            accrual_period: Some(AccrualPeriod::Monthly),
            ..LeaveTypeDraft::default()
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(valid_draft().validate().is_ok());
    }

    #[test]
    fn empty_name_is_rejected() {
        let draft = LeaveTypeDraft {
            leave_type_name: "  ".to_string(),
            ..valid_draft()
        };
        let err = draft.validate().unwrap_err();
        assert_eq!(err.field_errors().len(), 1);
        assert_eq!(err.field_errors()[0].field, "name");
    }

    #[test]
    fn missing_accrual_is_rejected() {
        let draft = LeaveTypeDraft {
            accrual_period: None,
            ..valid_draft()
        };
        let err = draft.validate().unwrap_err();
        assert_eq!(err.field_errors()[0].field, "accrual");
    }

    #[test]
    fn both_required_fields_reported_together() {
        let draft = LeaveTypeDraft::default();
        let err = draft.validate().unwrap_err();
        assert_eq!(err.field_errors().len(), 2);
    }

    #[test]
    fn entity_decodes_wire_shape() {
        let entity: LeaveType = serde_json::from_value(serde_json::json!({
            "leaveTypeId": "lt-1",
            "leaveTypeName": "Sick Leave",
            "accrualPeriod": "Monthly"
        }))
        .unwrap();

        assert_eq!(entity.entity_id(), "lt-1");
        assert_eq!(entity.accrual_period, AccrualPeriod::Monthly);
        assert!(!entity.can_be_carried_forward);
    }

    #[test]
    fn draft_serializes_camel_case() {
        let value = serde_json::to_value(valid_draft()).unwrap();
        assert_eq!(value["leaveTypeName"], "Sick Leave");
        assert_eq!(value["accrualPeriod"], "Monthly");
        assert_eq!(value["allowedInProbationPeriod"], false);
    }

    #[test]
    fn accrual_period_parses_from_str() {
        use std::str::FromStr;
        assert_eq!(
            AccrualPeriod::from_str("OnRequest").unwrap(),
            AccrualPeriod::OnRequest
        );
        assert!(AccrualPeriod::from_str("Weekly").is_err());
    }
}
