//! Monthly budget usage derived from the expense total and the cap.

/// Percentage of the cap at which the tracker raises a budget alert.
pub const BUDGET_ALERT_THRESHOLD: f64 = 90.0;

/// Where current spending sits relative to the monthly cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    /// No positive cap is configured, so there is nothing to measure.
    Unset,
    OnTrack,
    NearLimit,
    OverBudget,
}

/// Snapshot of budget consumption for the current month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetUsage {
    pub spent: f64,
    pub budget: f64,
    /// Percent of the cap consumed; `None` without a positive cap.
    pub percent_used: Option<f64>,
    pub status: BudgetStatus,
    /// True once spending reaches [`BUDGET_ALERT_THRESHOLD`] percent.
    pub alert: bool,
}

impl BudgetUsage {
    pub fn from_parts(spent: f64, budget: f64) -> Self {
        if budget <= 0.0 {
            return Self {
                spent,
                budget,
                percent_used: None,
                status: BudgetStatus::Unset,
                alert: false,
            };
        }
        let percent = spent / budget * 100.0;
        let status = if percent >= 100.0 {
            BudgetStatus::OverBudget
        } else if percent >= BUDGET_ALERT_THRESHOLD {
            BudgetStatus::NearLimit
        } else {
            BudgetStatus::OnTrack
        };
        Self {
            spent,
            budget,
            percent_used: Some(percent),
            status,
            alert: percent >= BUDGET_ALERT_THRESHOLD,
        }
    }
}

/// Computes usage of `budget` given the month's expense total so far.
pub fn budget_usage(spent: f64, budget: f64) -> BudgetUsage {
    BudgetUsage::from_parts(spent, budget)
}
