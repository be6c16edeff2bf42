use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{
    badges,
    catalog::Catalog,
    event::{Event, EventId, EventStatus},
    user::User,
};

/// The events the current user has joined. Joins are never undone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Participation {
    joined: BTreeSet<EventId>,
}

impl Participation {
    pub fn contains(&self, id: EventId) -> bool {
        self.joined.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.joined.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joined.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = EventId> + '_ {
        self.joined.iter().copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinOutcome {
    Joined {
        event: Event,
        /// Set on the one join that crossed a badge milestone.
        badge: Option<&'static str>,
    },
    AlreadyJoined,
    NotFound,
    Closed,
    AtCapacity,
}

impl JoinOutcome {
    pub fn is_joined(&self) -> bool {
        matches!(self, JoinOutcome::Joined { .. })
    }

    pub fn as_str(&self) -> &'static str {
        use JoinOutcome::*;
        match self {
            Joined { .. } => "joined",
            AlreadyJoined => "already_joined",
            NotFound => "not_found",
            Closed => "closed",
            AtCapacity => "at_capacity",
        }
    }
}

pub fn join(catalog: &mut Catalog, user: &mut User, joined: &mut Participation, id: EventId) -> JoinOutcome {
    if joined.contains(id) {
        return JoinOutcome::AlreadyJoined;
    }

    let Some(event) = catalog.get_mut(id) else {
        return JoinOutcome::NotFound;
    };
    if event.status == EventStatus::Completed {
        return JoinOutcome::Closed;
    }
    if !event.is_joinable() {
        return JoinOutcome::AtCapacity;
    }

    event.take_seat();
    joined.joined.insert(id);
    user.events_joined += 1;

    let badge = badges::earned(user.events_joined, &user.badges);
    if let Some(badge) = badge {
        user.award_badge(badge);
    }

    JoinOutcome::Joined { event: event.clone(), badge }
}
