use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Entity;

/// Employee row as the overview dashboard lists it. Read-only on the
/// console side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub employee_id: String,
    pub employee_code: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Entity for Employee {
    fn entity_id(&self) -> &str {
        &self.employee_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_minimal_wire_shape() {
        let employee: Employee = serde_json::from_value(serde_json::json!({
            "employeeId": "e1",
            "employeeCode": "EMP-001",
            "firstName": "John",
            "lastName": "Doe",
            "email": "john.doe@company.com"
        }))
        .unwrap();

        assert_eq!(employee.entity_id(), "e1");
        assert_eq!(employee.phone, None);
        assert_eq!(employee.hire_date, None);
    }
}
