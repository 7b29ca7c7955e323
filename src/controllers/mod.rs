//! Page controllers - the logic behind the bills list and the new-bill form.

/// Bills list: fetch, sort, new-bill navigation, receipt preview
pub mod bills;
/// New-bill form: receipt validation and submission
pub mod new_bill;
