//! Domain layer containing business entities and store contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Mapping record and visit event data structures
//! - [`repositories`] - Store trait implemented by the infrastructure layer
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - The store trait defines the contract implemented by PostgreSQL and the
//!   in-memory store alike
//! - Business rules live in services (see [`crate::application::services`])
//!
//! # Visit Flow
//!
//! 1. HTTP handler receives a redirect request
//! 2. [`crate::application::services::RedirectService`] checks the identifier
//! 3. [`repositories::LinkRepository::record_visit`] finds the record, stamps
//!    the visit and appends it in one store operation
//! 4. The handler redirects to the returned target URL

pub mod entities;
pub mod repositories;
