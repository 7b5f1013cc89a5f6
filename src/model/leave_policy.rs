use serde::{Deserialize, Serialize};

use super::Entity;
use crate::error::{ApiError, FieldError};

/// Quota granted for one leave type inside a policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveAllocation {
    pub leave_type_id: String,
    pub days_per_year: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeavePolicy {
    pub leave_policy_id: String,
    pub name: String,
    #[serde(default)]
    pub leave_allocations: Vec<LeaveAllocation>,
}

impl Entity for LeavePolicy {
    fn entity_id(&self) -> &str {
        &self.leave_policy_id
    }
}

/// One allocation row as it comes off the form; quota may still be blank.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveAllocationDraft {
    pub leave_type_id: String,
    pub days_per_year: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeavePolicyDraft {
    pub name: String,
    pub leave_allocations: Vec<LeaveAllocationDraft>,
}

impl LeavePolicyDraft {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut fields = Vec::new();

        if self.name.trim().is_empty() {
            fields.push(FieldError::new("policyName", "Policy name is required"));
        }
        if self.leave_allocations.is_empty() {
            fields.push(FieldError::new(
                "leaveAllocation",
                "At least one leave allocation is required",
            ));
        } else if self
            .leave_allocations
            .iter()
            .any(|item| item.leave_type_id.is_empty() || item.days_per_year.is_none())
        {
            fields.push(FieldError::new(
                "leaveAllocation",
                "All leave types and quotas must be filled",
            ));
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

    fn valid_draft() -> LeavePolicyDraft {
        LeavePolicyDraft {
            name: "Standard".to_string(),
            leave_allocations: vec![LeaveAllocationDraft {
                leave_type_id: "lt-1".to_string(),
                days_per_year: Some(12),
            }],
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(valid_draft().validate().is_ok());
    }

    #[test]
    fn blank_leave_type_id_is_rejected() {
        let draft = LeavePolicyDraft {
            leave_allocations: vec![LeaveAllocationDraft {
                leave_type_id: String::new(),
                days_per_year: Some(12),
            }],
            ..valid_draft()
        };
        let err = draft.validate().unwrap_err();
        assert_eq!(err.field_errors()[0].field, "leaveAllocation");
    }

    #[test]
    fn blank_quota_is_rejected() {
        let draft = LeavePolicyDraft {
            leave_allocations: vec![LeaveAllocationDraft {
                leave_type_id: "lt-1".to_string(),
                days_per_year: None,
            }],
            ..valid_draft()
        };
        assert!(draft.validate().is_err());
    }

    #[test]
    fn empty_allocation_list_is_rejected() {
        let draft = LeavePolicyDraft {
            leave_allocations: Vec::new(),
            ..valid_draft()
        };
        let err = draft.validate().unwrap_err();
        assert_eq!(
            err.field_errors()[0].message,
            "At least one leave allocation is required"
        );
    }

    #[test]
    fn entity_decodes_wire_shape() {
        let policy: LeavePolicy = serde_json::from_value(serde_json::json!({
            "leavePolicyId": "lp-1",
            "name": "Standard",
            "leaveAllocations": [{"leaveTypeId": "lt-1", "daysPerYear": 12}]
        }))
        .unwrap();

        assert_eq!(policy.entity_id(), "lp-1");
        assert_eq!(policy.leave_allocations[0].days_per_year, 12);
    }
}
