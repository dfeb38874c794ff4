//! Public projections of member records

use crate::contract::{Member, PublicMember, PublicProfile};
use chrono::NaiveDate;

/// Birthday without the year, e.g. "March 15"
pub fn day_month(date: NaiveDate) -> String {
    date.format("%B %-d").to_string()
}

impl From<Member> for PublicMember {
    fn from(member: Member) -> Self {
        Self {
            day_month: day_month(member.date_of_birth),
            id_number: member.id_number,
            full_name: member.full_name,
            department: member.department,
            interests: member.interests,
            hobbies: member.hobbies,
            best_engineering_quote: member.best_engineering_quote,
        }
    }
}

impl From<Member> for PublicProfile {
    fn from(member: Member) -> Self {
        Self {
            day_month: day_month(member.date_of_birth),
            id_number: member.id_number,
            full_name: member.full_name,
            department: member.department,
            interests: member.interests,
            hobbies: member.hobbies,
            state_of_origin: member.state_of_origin,
            best_engineering_quote: member.best_engineering_quote,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_month_drops_year_and_padding() {
        let date = NaiveDate::from_ymd_opt(1999, 7, 4).unwrap();
        assert_eq!(day_month(date), "July 4");

        let date = NaiveDate::from_ymd_opt(2000, 3, 15).unwrap();
        assert_eq!(day_month(date), "March 15");
    }

    #[test]
    fn leap_day() {
        let date = NaiveDate::from_ymd_opt(2004, 2, 29).unwrap();
        assert_eq!(day_month(date), "February 29");
    }
}
