use std::fmt;

use serde::{Deserialize, Serialize};

/// Currency codes the tracker can denominate amounts in.
///
/// Amounts are currency-agnostic magnitudes; the code only affects display,
/// so no conversion support exists or is planned.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Currency {
    USD,
    EUR,
    LKR,
    INR,
}

impl Currency {
    /// Every supported code, in the order the settings screen offers them.
    pub const ALL: [Currency; 4] = [Currency::USD, Currency::EUR, Currency::LKR, Currency::INR];

    /// Parses a stored code, returning `None` for anything outside the set.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "LKR" => Some(Currency::LKR),
            "INR" => Some(Currency::INR),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::LKR => "LKR",
            Currency::INR => "INR",
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::LKR
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
