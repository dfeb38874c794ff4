//! Mapper implementations for converting between DTOs and contract models

use super::dto::*;
use crate::contract;
use serde_json::Value;

// ===== Member conversions =====

impl From<contract::Member> for MemberDto {
    fn from(member: contract::Member) -> Self {
        Self {
            id: member.id,
            id_number: member.id_number,
            full_name: member.full_name,
            phone_number: member.phone_number,
            email: member.email,
            department: member.department,
            date_of_birth: member.date_of_birth,
            state_of_origin: member.state_of_origin,
            interests: member.interests,
            hobbies: member.hobbies,
            best_engineering_quote: member.best_engineering_quote,
            submitted_at: member.submitted_at,
        }
    }
}

impl TryFrom<RegisterMemberRequest> for contract::NewMember {
    type Error = contract::MemberError;

    fn try_from(req: RegisterMemberRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            id_number: form_text("idNumber", req.id_number)?,
            full_name: form_text("fullName", req.full_name)?,
            phone_number: form_text("phoneNumber", req.phone_number)?,
            email: form_text("email", req.email)?,
            department: form_text("department", req.department)?,
            date_of_birth: form_text("dateOfBirth", req.date_of_birth)?,
            state_of_origin: form_text("stateOfOrigin", req.state_of_origin)?,
            interests: form_text("interests", req.interests)?,
            hobbies: form_text("hobbies", req.hobbies)?,
            best_engineering_quote: form_text("bestEngineeringQuote", req.best_engineering_quote)?,
        })
    }
}

/// Absent and `null` become empty; anything but a string is rejected
fn form_text(field: &str, value: Option<Value>) -> Result<String, contract::MemberError> {
    match value {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(text)) => Ok(text),
        Some(_) => Err(contract::MemberError::invalid_field(field, "expected a string")),
    }
}

// ===== Public projections =====

impl From<contract::PublicMember> for PublicMemberDto {
    fn from(member: contract::PublicMember) -> Self {
        Self {
            id_number: member.id_number,
            full_name: member.full_name,
            department: member.department,
            interests: member.interests,
            hobbies: member.hobbies,
            best_engineering_quote: member.best_engineering_quote,
            day_month: member.day_month,
        }
    }
}

impl From<contract::PublicProfile> for PublicProfileDto {
    fn from(profile: contract::PublicProfile) -> Self {
        Self {
            id_number: profile.id_number,
            full_name: profile.full_name,
            department: profile.department,
            interests: profile.interests,
            hobbies: profile.hobbies,
            state_of_origin: profile.state_of_origin,
            best_engineering_quote: profile.best_engineering_quote,
            day_month: profile.day_month,
        }
    }
}

// ===== Lists =====

impl From<contract::Pagination> for PaginationDto {
    fn from(p: contract::Pagination) -> Self {
        Self {
            page: p.page,
            limit: p.limit,
            total: p.total,
            pages: p.pages,
            has_next: p.has_next,
            has_prev: p.has_prev,
        }
    }
}

impl From<contract::Page<contract::PublicMember>> for PublicMemberListResponse {
    fn from(page: contract::Page<contract::PublicMember>) -> Self {
        Self {
            members: page.items.into_iter().map(Into::into).collect(),
            pagination: page.pagination.into(),
        }
    }
}

impl From<contract::Page<contract::Member>> for AdminMemberListResponse {
    fn from(page: contract::Page<contract::Member>) -> Self {
        Self {
            members: page.items.into_iter().map(Into::into).collect(),
            pagination: page.pagination.into(),
        }
    }
}

// ===== Queries =====

/// Lenient page-number parsing: anything but a positive integer is "absent"
pub fn parse_positive(raw: Option<&str>) -> Option<u32> {
    raw.and_then(|v| v.trim().parse::<u32>().ok()).filter(|v| *v > 0)
}

impl PublicListQuery {
    pub fn page_request(&self) -> contract::PageRequest {
        contract::PageRequest {
            page: parse_positive(self.page.as_deref()),
            limit: parse_positive(self.limit.as_deref()),
        }
    }

    pub fn filter(&self) -> contract::MemberFilter {
        contract::MemberFilter::new(self.search.clone(), self.department.clone(), None)
    }
}

impl AdminListQuery {
    pub fn page_request(&self) -> contract::PageRequest {
        contract::PageRequest {
            page: parse_positive(self.page.as_deref()),
            limit: parse_positive(self.limit.as_deref()),
        }
    }

    pub fn filter(&self) -> contract::MemberFilter {
        contract::MemberFilter::new(
            self.search.clone(),
            self.department.clone(),
            self.state.clone(),
        )
    }
}

// ===== Auth =====

impl From<contract::AdminSession> for LoginResponse {
    fn from(session: contract::AdminSession) -> Self {
        Self {
            token: session.token,
            user: SessionUserDto { role: session.role },
        }
    }
}
