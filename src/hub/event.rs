use std::fmt;

use serde::{Deserialize, Serialize};
use time::{Date, macros::{date, format_description}};

pub const DEFAULT_TITLE: &str = "New Event";
pub const DEFAULT_LOCATION: &str = "TBD";
pub const DEFAULT_DATE: Date = date!(2025 - 01 - 01);
pub const ADMIN_ORGANIZER: &str = "Group 25 Admin";
pub const DEFAULT_CAPACITY: u32 = 50;
pub const DEFAULT_ICON: &str = "🗓️";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub u32);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventStatus {
    Open,
    Full,
    Completed,
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub location: String,
    pub date: Date,
    pub organizer: String,
    pub description: String,
    pub participants: u32,
    pub capacity: u32,
    pub status: EventStatus,
    pub icon: String,
}

impl Event {
    pub fn has_room(&self) -> bool {
        self.participants < self.capacity
    }

    /// Only open events with a free seat take new participants.
    pub fn is_joinable(&self) -> bool {
        self.status == EventStatus::Open && self.has_room()
    }

    pub fn progress_percent(&self) -> u32 {
        if self.capacity == 0 {
            return 100;
        }
        (self.participants.min(self.capacity) * 100) / self.capacity
    }

    pub fn date_string(&self) -> String {
        format_date(self.date)
    }

    pub(crate) fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.location.to_lowercase().contains(needle)
    }

    /// Adds one participant and flips the status to `Full` once the last seat is taken.
    pub(crate) fn take_seat(&mut self) {
        self.participants += 1;
        if self.participants >= self.capacity {
            self.status = EventStatus::Full;
        }
    }
}

/// Sparse input for `Catalog::create`. Anything left `None` falls back to a default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewEvent {
    pub title: Option<String>,
    pub location: Option<String>,
    pub date: Option<Date>,
    pub description: Option<String>,
}

pub fn parse_date(s: &str) -> Option<Date> {
    Date::parse(s.trim(), format_description!("[year]-[month]-[day]")).ok()
}

pub fn format_date(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| date.to_string())
}
