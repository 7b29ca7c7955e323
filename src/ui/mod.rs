//! UI seams - elements, events and collaborators the controllers are given explicitly.

/// File picker, generic element and form event types
pub mod dom;
/// Receipt preview modal and its host
pub mod modal;
/// Route keys and the navigation seam
pub mod navigator;
/// Blocking alerts
pub mod notify;
/// Navigator implementation that renders the employee pages
pub mod router;
