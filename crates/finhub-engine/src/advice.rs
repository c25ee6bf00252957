//! Display-text adapter for day recommendations and weekly checklists.
//!
//! The numeric passes stay free of presentation strings; swapping the
//! recommender never changes a single total.

use finhub_domain::DayStatus;

/// Produces the human-readable strings attached to projection records.
pub trait Recommender {
    /// Recommendation lines for a single day.
    fn for_day(&self, status: DayStatus, week_of_month: u32) -> Vec<String>;

    /// Fixed action checklist attached to a weekly summary card.
    fn weekly_actions(&self, week_index: u32) -> Vec<String>;
}

/// Default fixed-text recommender. Week-of-month picks the surplus
/// destination hint; danger overrides everything with a spending warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRecommender;

impl Recommender for StandardRecommender {
    fn for_day(&self, status: DayStatus, week_of_month: u32) -> Vec<String> {
        if status == DayStatus::Danger {
            return vec!["Balance is below the safe minimum. Pause non-essential spending.".into()];
        }
        if week_of_month <= 2 {
            vec!["Route any weekly surplus to the next-month pot.".into()]
        } else {
            vec!["Route any weekly surplus to the buffer pot.".into()]
        }
    }

    fn weekly_actions(&self, _week_index: u32) -> Vec<String> {
        vec![
            "Confirm every scheduled bill cleared".into(),
            "Move this week's surplus into its pot".into(),
            "Review pot progress against goals".into(),
        ]
    }
}
