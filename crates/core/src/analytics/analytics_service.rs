use crate::analytics::analytics_model::{MonthlyTotals, PendingPayment};
use crate::analytics::analytics_traits::{AnalyticsRepositoryTrait, AnalyticsServiceTrait};
use crate::errors::Result;
use crate::statuses::KnownStatus;
use crate::utils::MonthWindow;
use log::debug;
use std::sync::Arc;

pub struct AnalyticsService {
    repository: Arc<dyn AnalyticsRepositoryTrait>,
}

impl AnalyticsService {
    pub fn new(repository: Arc<dyn AnalyticsRepositoryTrait>) -> Self {
        AnalyticsService { repository }
    }
}

impl AnalyticsServiceTrait for AnalyticsService {
    fn get_totals(&self, month: Option<&str>) -> Result<MonthlyTotals> {
        let window = MonthWindow::resolve(month)?;
        let expenses = self.repository.list_expenses_in_window(&window)?;
        debug!(
            "Aggregating {} expense rows for {}",
            expenses.len(),
            window.label()
        );
        Ok(MonthlyTotals::aggregate(&window, &expenses))
    }

    fn get_pending_payments(&self, month: Option<&str>) -> Result<Vec<PendingPayment>> {
        let window = MonthWindow::resolve(month)?;
        self.repository
            .list_expenses_with_status(&window, KnownStatus::Pending.id())
    }
}
