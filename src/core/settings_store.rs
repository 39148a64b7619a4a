//! The process-wide settings record and its persistence wrapper.

use crate::currency::Currency;
use crate::errors::{LedgerError, Result};
use crate::storage::KeyValueBackend;

/// Key holding the monthly budget cap.
pub const BUDGET_KEY: &str = "budget";
/// Key holding the display currency code.
pub const CURRENCY_KEY: &str = "currency";

/// User preferences: the monthly budget cap and display currency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub budget: f64,
    pub currency: Currency,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            budget: 0.0,
            currency: Currency::default(),
        }
    }
}

impl Settings {
    /// Boundary validation run by callers before `set`; the store itself
    /// accepts what it is given.
    pub fn validate(&self) -> Result<()> {
        if self.budget < 0.0 {
            return Err(LedgerError::Validation {
                field: "budget",
                reason: format!("must not be negative, got {}", self.budget),
            });
        }
        Ok(())
    }
}

/// Loads settings once at open and persists every change immediately.
///
/// Unknown persisted currency codes fall back to the default rather than
/// failing the load.
pub struct SettingsStore {
    backend: Box<dyn KeyValueBackend>,
    settings: Settings,
}

impl SettingsStore {
    pub fn open(backend: Box<dyn KeyValueBackend>) -> Result<Self> {
        let budget = backend
            .get(BUDGET_KEY)?
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(0.0);
        let currency = backend
            .get(CURRENCY_KEY)?
            .as_deref()
            .and_then(Currency::from_code)
            .unwrap_or_default();
        Ok(Self {
            backend,
            settings: Settings { budget, currency },
        })
    }

    pub fn get(&self) -> Settings {
        self.settings
    }

    /// Replaces both fields and persists them in one step.
    pub fn set(&mut self, budget: f64, currency: Currency) -> Result<()> {
        self.settings = Settings { budget, currency };
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        self.backend
            .put(BUDGET_KEY, &self.settings.budget.to_string())?;
        self.backend.put(CURRENCY_KEY, self.settings.currency.code())?;
        Ok(())
    }
}
