use crate::analytics::analytics_model::{MonthlyTotals, PendingPayment};
use crate::errors::Result;
use crate::expenses::MonthlyExpense;
use crate::utils::MonthWindow;

/// Read-only queries backing the dashboard.
pub trait AnalyticsRepositoryTrait: Send + Sync {
    /// Rows whose reference month falls in `[window.start, window.end)`.
    fn list_expenses_in_window(&self, window: &MonthWindow) -> Result<Vec<MonthlyExpense>>;

    /// Rows in the window with the given status, ordered by reference month
    /// then category name.
    fn list_expenses_with_status(
        &self,
        window: &MonthWindow,
        status_id: &str,
    ) -> Result<Vec<PendingPayment>>;
}

pub trait AnalyticsServiceTrait: Send + Sync {
    /// Totals for a `YYYY-MM` month, or the current month when absent.
    fn get_totals(&self, month: Option<&str>) -> Result<MonthlyTotals>;
    fn get_pending_payments(&self, month: Option<&str>) -> Result<Vec<PendingPayment>>;
}
