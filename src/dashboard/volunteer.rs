use crate::{hub::{Event, EventStatus, Hub}, include_res, res};

pub(crate) fn render(hub: &Hub, query: &str) -> String {
    let user = hub.user();

    let badges: String = user.badges
        .iter()
        .map(|badge| include_res!(str, "/pages/dashboard/badge.html").replace("{badge}", &res::escape(badge)))
        .collect();

    let events = hub.search(query);
    let event_cards: String = if events.is_empty() {
        include_res!(str, "/pages/dashboard/no_events.html").to_owned()
    } else {
        events.into_iter().map(|ev| event_card(ev, hub.has_joined(ev.id))).collect()
    };

    include_res!(str, "/pages/dashboard/volunteer.html")
        .replace("{user_id}", &res::escape(&user.id))
        .replace("{events_joined}", &user.events_joined.to_string())
        .replace("{badges}", &badges)
        .replace("{query}", &res::escape_attr(query))
        .replace("{event_cards}", &event_cards)
        .replace("{user_name}", &res::escape(&user.name))
}

fn event_card(ev: &Event, joined: bool) -> String {
    let action = match (joined, ev.status) {
        (true, _) => disabled("Joined"),
        (false, EventStatus::Full) => disabled("Event Full"),
        (false, EventStatus::Completed) => disabled("Completed"),
        (false, EventStatus::Open) if !ev.has_room() => disabled("Event Full"),
        (false, EventStatus::Open) => include_res!(str, "/pages/dashboard/join_button.html")
            .replace("{id}", &ev.id.to_string()),
    };

    include_res!(str, "/pages/dashboard/event_card.html")
        .replace("{id}", &ev.id.to_string())
        .replace("{icon}", &res::escape(&ev.icon))
        .replace("{date}", &ev.date_string())
        .replace("{action}", &action)
        .replace("{organizer}", &res::escape(&ev.organizer))
        .replace("{title}", &res::escape(&ev.title))
        .replace("{location}", &res::escape(&ev.location))
        .replace("{description}", &res::markdown(&ev.description))
}

fn disabled(label: &str) -> String {
    include_res!(str, "/pages/dashboard/disabled_button.html").replace("{label}", label)
}
