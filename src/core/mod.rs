pub mod analytics;
pub mod budget;
pub mod ledger_store;
pub mod settings_store;

pub use analytics::{CategoryShare, SeriesPoint, SpendWindow};
pub use budget::{budget_usage, BudgetStatus, BudgetUsage, BUDGET_ALERT_THRESHOLD};
pub use ledger_store::{LedgerSnapshot, LedgerStore, NEXT_ID_KEY, TRANSACTIONS_KEY};
pub use settings_store::{Settings, SettingsStore, BUDGET_KEY, CURRENCY_KEY};
