//! Static dashboard content: stat cards and the recent activity list.

use chrono::NaiveDate;

pub const WELCOME_TEXT: &str = "Welcome to Dashboard!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub title: &'static str,
    pub date: NaiveDate,
}

impl Activity {
    pub fn date_label(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

pub fn stat_cards() -> [StatCard; 2] {
    [
        StatCard { title: "Tasks", value: 12 },
        StatCard { title: "Completed", value: 8 },
    ]
}

pub fn recent_activity() -> Vec<Activity> {
    let date = NaiveDate::from_ymd_opt(2025, 8, 18).unwrap_or_default();
    [
        "ATM Simulator Completed",
        "Library System Milestone",
        "HelloWorld Compose Pushed",
        "Navigation Added",
        "UI Test Passed",
    ]
    .into_iter()
    .map(|title| Activity { title, date })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_cards() {
        let cards = stat_cards();
        assert_eq!(cards[0], StatCard { title: "Tasks", value: 12 });
        assert_eq!(cards[1], StatCard { title: "Completed", value: 8 });
    }

    #[test]
    fn test_recent_activity() {
        let items = recent_activity();
        assert_eq!(items.len(), 5);
        assert_eq!(items[0].title, "ATM Simulator Completed");
        assert_eq!(items[4].title, "UI Test Passed");
        assert!(items.iter().all(|a| a.date_label() == "2025-08-18"));
    }
}
