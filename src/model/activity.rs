//! Recent activity feed and header notifications

/// Outcome class of an activity entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityStatus {
    Success,
    Warning,
    Error,
    Info,
}

/// One entry in the recent activity panel
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub action: String,
    pub vendor: String,
    pub time: String,
    pub status: ActivityStatus,
}

impl Activity {
    pub fn new(action: &str, vendor: &str, time: &str, status: ActivityStatus) -> Self {
        Self {
            action: action.to_string(),
            vendor: vendor.to_string(),
            time: time.to_string(),
            status,
        }
    }
}

/// Severity of a header notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Critical,
    Warning,
    Info,
}

impl NotificationLevel {
    pub fn label(&self) -> &'static str {
        match self {
            NotificationLevel::Critical => "Critical",
            NotificationLevel::Warning => "Warning",
            NotificationLevel::Info => "Info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub age: String,
    pub title: String,
    pub detail: String,
}

impl Notification {
    pub fn new(level: NotificationLevel, age: &str, title: &str, detail: &str) -> Self {
        Self {
            level,
            age: age.to_string(),
            title: title.to_string(),
            detail: detail.to_string(),
        }
    }
}

/// Activity feed capped at a fixed length, newest first
#[derive(Debug, Clone, Default)]
pub struct ActivityFeed {
    entries: Vec<Activity>,
}

impl ActivityFeed {
    pub const CAPACITY: usize = 5;

    pub fn new(entries: Vec<Activity>) -> Self {
        let mut feed = Self { entries };
        feed.entries.truncate(Self::CAPACITY);
        feed
    }

    /// Record a new event at the top, dropping the oldest past capacity
    pub fn push(&mut self, activity: Activity) {
        self.entries.insert(0, activity);
        self.entries.truncate(Self::CAPACITY);
    }

    pub fn entries(&self) -> &[Activity] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_keeps_newest_entries() {
        let mut feed = ActivityFeed::default();
        for i in 0..7 {
            feed.push(Activity::new(
                &format!("event {}", i),
                "Vendor",
                "just now",
                ActivityStatus::Info,
            ));
        }

        assert_eq!(feed.entries().len(), ActivityFeed::CAPACITY);
        assert_eq!(feed.entries()[0].action, "event 6");
        assert_eq!(feed.entries()[4].action, "event 2");
    }
}
