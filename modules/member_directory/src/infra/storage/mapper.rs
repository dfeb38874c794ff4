//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use crate::contract::Member;
use crate::domain::NewMemberRecord;
use super::entity;

impl From<entity::Model> for Member {
    fn from(entity: entity::Model) -> Self {
        Self {
            id: entity.id,
            id_number: entity.id_number,
            full_name: entity.full_name,
            phone_number: entity.phone_number,
            email: entity.email,
            department: entity.department,
            date_of_birth: entity.date_of_birth,
            state_of_origin: entity.state_of_origin,
            interests: entity.interests,
            hobbies: entity.hobbies,
            best_engineering_quote: entity.best_engineering_quote,
            submitted_at: entity.submitted_at,
        }
    }
}

impl From<&NewMemberRecord> for entity::ActiveModel {
    fn from(record: &NewMemberRecord) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: NotSet,
            id_number: Set(record.id_number.clone()),
            full_name: Set(record.full_name.clone()),
            full_name_search: Set(search_key(&record.full_name)),
            phone_number: Set(record.phone_number.clone()),
            email: Set(record.email.clone()),
            department: Set(record.department.clone()),
            date_of_birth: Set(record.date_of_birth),
            state_of_origin: Set(record.state_of_origin.clone()),
            interests: Set(record.interests.clone()),
            hobbies: Set(record.hobbies.clone()),
            best_engineering_quote: Set(record.best_engineering_quote.clone()),
            submitted_at: Set(record.submitted_at),
        }
    }
}

/// Normalized form of a name for case-insensitive matching.
///
/// Final sigma folds to `σ` so the result does not depend on word position.
pub fn search_key(text: &str) -> String {
    text.to_lowercase().replace('ς', "σ")
}

#[cfg(test)]
mod tests {
    use super::search_key;

    #[test]
    fn search_key_folds_non_ascii_capitals() {
        assert_eq!(search_key("Ángela Ñwosu"), "ángela ñwosu");
        assert_eq!(search_key("HANNAH"), "hannah");
    }

    #[test]
    fn search_key_folds_final_sigma() {
        assert_eq!(search_key("ΑΡΗΣ Doe"), "αρησ doe");
        assert_eq!(search_key("Σ"), "σ");
        assert_eq!(search_key("άρης"), search_key("ΆΡΗΣ"));
    }
}
