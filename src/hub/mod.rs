//! Everything one browser session knows: who is logged in, the event
//! catalog and which events they joined. Views only ever read from a `Hub`;
//! the four methods taking `&mut self` are the whole mutation surface.

pub mod badges;
pub mod catalog;
pub mod event;
pub mod participation;
pub mod seed;
pub mod user;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub use catalog::Catalog;
pub use event::{Event, EventId, EventStatus, NewEvent};
pub use participation::{JoinOutcome, Participation};
pub use user::{Role, User};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hub {
    role: Option<Role>,
    user: User,
    catalog: Catalog,
    joined: Participation,
}

impl Hub {
    pub fn seeded() -> Self {
        Self::new(seed::user(), seed::events())
    }

    pub fn new(user: User, catalog: Catalog) -> Self {
        Self {
            role: None,
            user,
            catalog,
            joined: Participation::default(),
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn joined(&self) -> &Participation {
        &self.joined
    }

    pub fn has_joined(&self, id: EventId) -> bool {
        self.joined.contains(id)
    }

    pub fn search(&self, query: &str) -> Vec<&Event> {
        self.catalog.search(query)
    }

    pub fn login(&mut self, role: Role) {
        self.role = Some(role);
        self.user.role = role;
        info!(user = %self.user.id, %role, "logged in");
    }

    /// Drops the active role only; the profile, catalog and joins survive.
    pub fn logout(&mut self) {
        if let Some(role) = self.role.take() {
            info!(user = %self.user.id, %role, "logged out");
        }
    }

    pub fn create_event(&mut self, new: NewEvent) -> Event {
        let event = self.catalog.create(new);
        info!(event = %event.id, title = %event.title, "event created");
        event
    }

    pub fn join_event(&mut self, id: EventId) -> JoinOutcome {
        let outcome = participation::join(&mut self.catalog, &mut self.user, &mut self.joined, id);
        match &outcome {
            JoinOutcome::Joined { event, badge } => {
                info!(
                    user = %self.user.id,
                    event = %event.id,
                    participants = event.participants,
                    capacity = event.capacity,
                    "joined event"
                );
                if let Some(badge) = badge {
                    info!(user = %self.user.id, badge, "badge awarded");
                }
            }
            other => debug!(user = %self.user.id, event = %id, outcome = other.as_str(), "join refused"),
        }
        outcome
    }
}
