use time::macros::date;

use super::{
    catalog::Catalog,
    event::{Event, EventId, EventStatus},
    user::{Role, User},
};

pub fn user() -> User {
    User {
        id: "user_123".to_owned(),
        name: "Volunteer Alex".to_owned(),
        role: Role::Volunteer,
        badges: vec!["Newbie".to_owned(), "Green Hero".to_owned()],
        events_joined: 4,
    }
}

pub fn events() -> Catalog {
    Catalog::new(vec![
        Event {
            id: EventId(1),
            title: "Urban Garden Cleanup (SDG 11)".to_owned(),
            location: "KK12 Hall Area".to_owned(),
            date: date!(2025 - 11 - 25),
            organizer: "UM Eco Club".to_owned(),
            description: "Help us maintain the community garden. Tools provided. Snacks included!".to_owned(),
            participants: 12,
            capacity: 20,
            status: EventStatus::Open,
            icon: "🌱".to_owned(),
        },
        Event {
            id: EventId(2),
            title: "Recycling Drive 2025".to_owned(),
            location: "Student Union Building".to_owned(),
            date: date!(2025 - 12 - 01),
            organizer: "Student Council".to_owned(),
            description: "Collecting e-waste and paper for sustainable disposal.".to_owned(),
            participants: 45,
            capacity: 100,
            status: EventStatus::Open,
            icon: "♻️".to_owned(),
        },
        Event {
            id: EventId(3),
            title: "Food Bank Sorting".to_owned(),
            location: "Community Center".to_owned(),
            date: date!(2025 - 11 - 28),
            organizer: "Food Aid Foundation".to_owned(),
            description: "Sorting donated goods for distribution to urban poor.".to_owned(),
            participants: 15,
            capacity: 15,
            status: EventStatus::Full,
            icon: "🍱".to_owned(),
        },
    ])
}
