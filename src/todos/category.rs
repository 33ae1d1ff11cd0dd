use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Time bucket a task is filed under, derived from its due date.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Today,
    Week,
    Later,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 3] = [Category::Today, Category::Week, Category::Later];

    /// Stable string id, identical to the serialized form.
    pub fn id(&self) -> &'static str {
        match self {
            Category::Today => "today",
            Category::Week => "week",
            Category::Later => "later",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Today => "Today",
            Category::Week => "This Week",
            Category::Later => "Later",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Today => "📅",
            Category::Week => "📆",
            Category::Later => "⏰",
        }
    }
}

/// Bucket a due date relative to the current local calendar day.
pub fn classify(due_date: Option<NaiveDate>) -> Category {
    classify_on(due_date, Local::now().date_naive())
}

/// Bucket a due date relative to an explicit calendar day.
///
/// No due date means `Later`. Otherwise the signed difference in whole
/// calendar days decides: 0 is `Today`, 1 through 6 is `Week`, and
/// everything else, overdue dates included, is `Later`.
pub fn classify_on(due_date: Option<NaiveDate>, today: NaiveDate) -> Category {
    let Some(due) = due_date else {
        return Category::Later;
    };

    match (due - today).num_days() {
        0 => Category::Today,
        1..=6 => Category::Week,
        _ => Category::Later,
    }
}
