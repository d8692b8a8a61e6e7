//! Member model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Full member record from the database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Member {
    pub member_id: i32,
    pub first_name: String,
    pub last_name: String,
    /// Email address, unique across members
    pub email: String,
    /// ISO 8601 calendar date
    pub join_date: NaiveDate,
    pub phone: Option<String>,
}

/// Create/update member request body
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct MemberPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub join_date: NaiveDate,
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_parses_iso_join_date() {
        let payload: MemberPayload = serde_json::from_str(
            r#"{"first_name":"Ada","last_name":"Lovelace","email":"ada@example.org","join_date":"2024-05-01"}"#,
        )
        .unwrap();
        assert_eq!(
            payload.join_date,
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
        );
        assert_eq!(payload.phone, None);
    }

    #[test]
    fn member_round_trips_through_json() {
        let member = Member {
            member_id: 3,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.org".to_string(),
            join_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            phone: Some("555-0100".to_string()),
        };
        let json = serde_json::to_string(&member).unwrap();
        assert!(json.contains(r#""join_date":"2024-05-01""#));
        let back: Member = serde_json::from_str(&json).unwrap();
        assert_eq!(back, member);
    }
}
