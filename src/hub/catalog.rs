use serde::{Deserialize, Serialize};

use super::event::{
    ADMIN_ORGANIZER, DEFAULT_CAPACITY, DEFAULT_DATE, DEFAULT_ICON, DEFAULT_LOCATION, DEFAULT_TITLE,
    Event, EventId, EventStatus, NewEvent,
};

/// Every known event, most recently created first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    events: Vec<Event>,
}

impl Catalog {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: EventId) -> Option<&mut Event> {
        self.events.iter_mut().find(|e| e.id == id)
    }

    pub fn total_participants(&self) -> u64 {
        self.events.iter().map(|e| u64::from(e.participants)).sum()
    }

    /// Never fails; blank or missing fields fall back to defaults and any
    /// caller idea of organizer or capacity is ignored.
    pub fn create(&mut self, new: NewEvent) -> Event {
        let NewEvent { title, location, date, description } = new;
        let next_id = u32::try_from(self.events.len()).map_or(u32::MAX, |n| n.saturating_add(1));

        let event = Event {
            id: EventId(next_id),
            title: non_blank(title).unwrap_or_else(|| DEFAULT_TITLE.to_owned()),
            location: non_blank(location).unwrap_or_else(|| DEFAULT_LOCATION.to_owned()),
            date: date.unwrap_or(DEFAULT_DATE),
            organizer: ADMIN_ORGANIZER.to_owned(),
            description: description.unwrap_or_default(),
            participants: 0,
            capacity: DEFAULT_CAPACITY,
            status: EventStatus::Open,
            icon: DEFAULT_ICON.to_owned(),
        };

        self.events.insert(0, event.clone());
        event
    }

    /// Case-insensitive substring match on title or location, in catalog order.
    pub fn search(&self, query: &str) -> Vec<&Event> {
        let needle = query.trim().to_lowercase();
        self.events
            .iter()
            .filter(|e| needle.is_empty() || e.matches(&needle))
            .collect()
    }
}

fn non_blank(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};
    use time::macros::date;

    use super::*;
    use crate::hub::seed;

    #[fixture]
    fn catalog() -> Catalog {
        seed::events()
    }

    #[rstest]
    fn empty_create_fills_defaults(mut catalog: Catalog) {
        let before = catalog.len();
        let ev = catalog.create(NewEvent::default());

        assert_eq!(ev.id, EventId(before as u32 + 1));
        assert_eq!(ev.title, "New Event");
        assert_eq!(ev.location, "TBD");
        assert_eq!(ev.date, date!(2025 - 01 - 01));
        assert_eq!(ev.organizer, "Group 25 Admin");
        assert_eq!(ev.description, "");
        assert_eq!(ev.participants, 0);
        assert_eq!(ev.capacity, 50);
        assert_eq!(ev.status, EventStatus::Open);
    }

    #[rstest]
    fn created_events_go_first(mut catalog: Catalog) {
        catalog.create(NewEvent {
            title: Some("Beach Cleanup".to_owned()),
            location: Some("Pantai Dalam".to_owned()),
            date: Some(date!(2026 - 03 - 14)),
            description: Some("Bring gloves".to_owned()),
        });
        catalog.create(NewEvent::default());

        let ids: Vec<u32> = catalog.iter().map(|e| e.id.0).collect();
        assert_eq!(ids, [5, 4, 1, 2, 3]);

        let beach = catalog.get(EventId(4)).unwrap();
        assert_eq!(beach.title, "Beach Cleanup");
        assert_eq!(beach.location, "Pantai Dalam");
        assert_eq!(beach.description, "Bring gloves");
    }

    #[rstest]
    fn blank_title_counts_as_missing(mut catalog: Catalog) {
        let ev = catalog.create(NewEvent {
            title: Some("   ".to_owned()),
            location: Some(String::new()),
            ..NewEvent::default()
        });
        assert_eq!(ev.title, "New Event");
        assert_eq!(ev.location, "TBD");
    }

    #[rstest]
    #[case("garden", &[1])]
    #[case("RECYCLING", &[2])]
    #[case("community", &[3])]
    #[case("hall", &[1])]
    #[case("n", &[1, 2, 3])]
    #[case("", &[1, 2, 3])]
    #[case("marathon", &[])]
    fn search_matches_title_or_location(catalog: Catalog, #[case] query: &str, #[case] expected: &[u32]) {
        let ids: Vec<u32> = catalog.search(query).iter().map(|e| e.id.0).collect();
        assert_eq!(ids, expected);
    }

    #[rstest]
    fn search_leaves_catalog_untouched(catalog: Catalog) {
        let before = catalog.clone();
        let _ = catalog.search("food");
        let _ = catalog.search("nothing here");
        assert_eq!(catalog, before);
    }

    #[rstest]
    fn total_participants_sums_every_event(catalog: Catalog) {
        assert_eq!(catalog.total_participants(), 12 + 45 + 15);
    }
}
