//! Navigation seam between controllers and the view-switching host.

use std::fmt;

/// Logical destinations the controllers can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// List of the employee's bills
    Bills,
    /// New-bill form
    NewBill,
}

impl Route {
    /// Path key understood by the host.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Bills => "#employee/bills",
            Self::NewBill => "#employee/bill/new",
        }
    }

    /// `data-testid` of the layout icon highlighted while this route is shown.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Bills => "icon-window",
            Self::NewBill => "icon-mail",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Swaps the displayed view. Synchronous: the target view is current once this returns.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    /// Shows the view for `route`.
    fn navigate(&self, route: Route);
}
