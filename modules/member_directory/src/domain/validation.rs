//! Registration input validation

use crate::contract::{MemberError, NewMember};
use super::repository::NewMemberRecord;
use chrono::{DateTime, NaiveDate, Utc};

/// Wire names of the required registration fields, in check order
pub const REQUIRED_FIELDS: [&str; 10] = [
    "idNumber",
    "fullName",
    "phoneNumber",
    "email",
    "department",
    "dateOfBirth",
    "stateOfOrigin",
    "interests",
    "hobbies",
    "bestEngineeringQuote",
];

/// Check every required field and build the record to persist.
///
/// Fails on the first missing field in [`REQUIRED_FIELDS`] order.
pub fn validate_registration(
    input: &NewMember,
    submitted_at: DateTime<Utc>,
) -> Result<NewMemberRecord, MemberError> {
    let values = [
        &input.id_number,
        &input.full_name,
        &input.phone_number,
        &input.email,
        &input.department,
        &input.date_of_birth,
        &input.state_of_origin,
        &input.interests,
        &input.hobbies,
        &input.best_engineering_quote,
    ];

    for (field, value) in REQUIRED_FIELDS.iter().zip(values) {
        if value.trim().is_empty() {
            return Err(MemberError::missing_field(field));
        }
    }

    let date_of_birth = parse_date_of_birth(&input.date_of_birth)?;

    Ok(NewMemberRecord {
        id_number: input.id_number.trim().to_string(),
        full_name: input.full_name.trim().to_string(),
        phone_number: input.phone_number.trim().to_string(),
        email: input.email.trim().to_string(),
        department: input.department.trim().to_string(),
        date_of_birth,
        state_of_origin: input.state_of_origin.trim().to_string(),
        interests: input.interests.trim().to_string(),
        hobbies: input.hobbies.trim().to_string(),
        best_engineering_quote: input.best_engineering_quote.trim().to_string(),
        submitted_at,
    })
}

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp (date part kept)
pub fn parse_date_of_birth(raw: &str) -> Result<NaiveDate, MemberError> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .map_err(|_| MemberError::invalid_field("dateOfBirth", "expected a YYYY-MM-DD date"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> NewMember {
        NewMember {
            id_number: "22/05/04/0011".into(),
            full_name: "Jane Doe".into(),
            phone_number: "08012345678".into(),
            email: "jane@example.com".into(),
            department: "Mechanical Engineering".into(),
            date_of_birth: "1999-07-04".into(),
            state_of_origin: "Lagos".into(),
            interests: "Robotics".into(),
            hobbies: "Chess".into(),
            best_engineering_quote: "Measure twice, cut once".into(),
        }
    }

    #[test]
    fn complete_input_is_accepted() {
        let record = validate_registration(&complete(), Utc::now()).unwrap();
        assert_eq!(record.date_of_birth, NaiveDate::from_ymd_opt(1999, 7, 4).unwrap());
        assert_eq!(record.full_name, "Jane Doe");
    }

    #[test]
    fn first_missing_field_is_reported() {
        let mut input = complete();
        input.email.clear();
        input.hobbies.clear();

        let err = validate_registration(&input, Utc::now()).unwrap_err();
        assert_eq!(err, MemberError::missing_field("email"));
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut input = complete();
        input.best_engineering_quote = "   ".into();

        let err = validate_registration(&input, Utc::now()).unwrap_err();
        assert_eq!(err, MemberError::missing_field("bestEngineeringQuote"));
    }

    #[test]
    fn rfc3339_birth_date_keeps_date_part() {
        let date = parse_date_of_birth("2000-03-15T00:00:00.000Z").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2000, 3, 15).unwrap());
    }

    #[test]
    fn garbage_birth_date_is_rejected() {
        let err = parse_date_of_birth("15th of March").unwrap_err();
        assert!(matches!(err, MemberError::Validation { ref field, .. } if field == "dateOfBirth"));
    }
}
