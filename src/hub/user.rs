use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Volunteer,
    Organizer,
}

impl Role {
    pub fn id(&self) -> &str {
        use Role::*;
        match self {
            Volunteer => "volunteer",
            Organizer => "organizer",
        }
    }

    pub fn mode_label(&self) -> &str {
        use Role::*;
        match self {
            Volunteer => "Volunteer Mode",
            Organizer => "Organizer Mode",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub badges: Vec<String>,
    pub events_joined: u32,
}

impl User {
    pub fn has_badge(&self, badge: &str) -> bool {
        self.badges.iter().any(|b| b == badge)
    }

    /// Returns `false` when the badge was already held.
    pub fn award_badge(&mut self, badge: &str) -> bool {
        if self.has_badge(badge) {
            return false;
        }
        self.badges.push(badge.to_owned());
        true
    }
}
