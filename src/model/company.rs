use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Entity;

/// Superadmin-scope company record. The profile is schemaless on the
/// client; everything besides the id passes through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

impl Entity for Company {
    fn entity_id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn profile_fields_are_preserved() {
        let company: Company = serde_json::from_value(json!({
            "_id": "c1",
            "name": "Acme",
            "gstin": "29ABCDE1234F2Z5"
        }))
        .unwrap();

        assert_eq!(company.entity_id(), "c1");
        assert_eq!(company.profile["name"], "Acme");

        let back = serde_json::to_value(&company).unwrap();
        assert_eq!(back["gstin"], "29ABCDE1234F2Z5");
    }
}
