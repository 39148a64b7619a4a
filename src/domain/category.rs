//! The fixed category set used for entry and breakdown legends.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Spending categories offered by the tracker.
///
/// Stored transactions keep their category as the raw label so that data
/// written by older builds survives unchanged; this enum is the display-side
/// view of that label. `Health` only appears in breakdown legends, never in
/// the entry form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Transport,
    Bills,
    Entertainment,
    Shopping,
    Subscription,
    Health,
    Others,
}

impl Category {
    /// Every category, in legend order.
    pub const ALL: [Category; 8] = [
        Category::Food,
        Category::Transport,
        Category::Bills,
        Category::Entertainment,
        Category::Shopping,
        Category::Subscription,
        Category::Health,
        Category::Others,
    ];

    /// Resolves a stored label for display. Unknown labels map to `Others`;
    /// the stored string itself is never rewritten.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Food" => Category::Food,
            "Transport" => Category::Transport,
            "Bills" => Category::Bills,
            "Entertainment" => Category::Entertainment,
            "Shopping" => Category::Shopping,
            "Subscription" => Category::Subscription,
            "Health" => Category::Health,
            _ => Category::Others,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Bills => "Bills",
            Category::Entertainment => "Entertainment",
            Category::Shopping => "Shopping",
            Category::Subscription => "Subscription",
            Category::Health => "Health",
            Category::Others => "Others",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
