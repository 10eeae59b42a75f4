//! Roster models: nurses, internal staff, and client companies.
//!
//! Rosters are reference data owned by the store. The engine reads them by
//! identifier for attribution (names on exports, client grouping, staff
//! salary totals) and never mutates them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A nurse available for placement with client companies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nurse {
    /// Unique identifier for the nurse.
    pub id: String,
    /// The nurse's display name.
    pub name: String,
    /// Default monthly salary offered when creating a new placement.
    pub default_salary: Decimal,
    /// Default monthly transportation allowance for new placements.
    pub default_transportation: Decimal,
}

/// An internal staff member paid a flat monthly salary.
///
/// Staff are not assignment-based, so their cost is never prorated; the
/// monthly aggregation subtracts the full roster salary every month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    /// Unique identifier for the staff member.
    pub id: String,
    /// The staff member's display name.
    pub name: String,
    /// Job title, e.g. "Operations Manager".
    pub designation: String,
    /// Flat monthly salary.
    pub monthly_salary: Decimal,
}

/// A client company that nurses are placed with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientCompany {
    /// Unique identifier for the client.
    pub id: String,
    /// The client's display name.
    pub name: String,
    /// Tax registration number, when the client has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trn: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_nurse_deserialization() {
        let json = r#"{
            "id": "nurse_001",
            "name": "Amira Hassan",
            "default_salary": "2600",
            "default_transportation": "300"
        }"#;

        let nurse: Nurse = serde_json::from_str(json).unwrap();
        assert_eq!(nurse.id, "nurse_001");
        assert_eq!(nurse.name, "Amira Hassan");
        assert_eq!(nurse.default_salary, dec("2600"));
        assert_eq!(nurse.default_transportation, dec("300"));
    }

    #[test]
    fn test_staff_member_deserialization() {
        let json = r#"{
            "id": "staff_001",
            "name": "Omar Farouk",
            "designation": "Operations Manager",
            "monthly_salary": "7000"
        }"#;

        let staff: StaffMember = serde_json::from_str(json).unwrap();
        assert_eq!(staff.designation, "Operations Manager");
        assert_eq!(staff.monthly_salary, dec("7000"));
    }

    #[test]
    fn test_client_trn_is_optional() {
        let json = r#"{ "id": "client_001", "name": "Dubai Care Clinic" }"#;
        let client: ClientCompany = serde_json::from_str(json).unwrap();
        assert_eq!(client.trn, None);

        let json = r#"{ "id": "client_002", "name": "Gulf Medical", "trn": "100123456700003" }"#;
        let client: ClientCompany = serde_json::from_str(json).unwrap();
        assert_eq!(client.trn.as_deref(), Some("100123456700003"));
    }

    #[test]
    fn test_client_without_trn_omits_field() {
        let client = ClientCompany {
            id: "client_001".to_string(),
            name: "Dubai Care Clinic".to_string(),
            trn: None,
        };
        let json = serde_json::to_string(&client).unwrap();
        assert!(!json.contains("trn"));
    }
}
