//! Core business logic - framework-agnostic bill types, formatting, receipt validation
//! and the store seam.

/// Bill, draft, status and category types
pub mod bill;
/// Date/status formatting and list ordering
pub mod format;
/// Receipt file validation
pub mod receipt;
/// Store collaborator trait and its errors
pub mod store;
/// Signed-in user context
pub mod session;
