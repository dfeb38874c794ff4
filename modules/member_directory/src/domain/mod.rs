//! Domain layer - business logic and services

pub mod auth;
pub mod export;
pub mod projection;
pub mod repository;
pub mod service;
pub mod validation;

pub use auth::{AuthGate, Claims};
pub use repository::{MemberField, MemberRepository, NewMemberRecord};
pub use service::{Service, ServiceConfig};
