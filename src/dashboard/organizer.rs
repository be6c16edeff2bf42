use crate::{hub::{EventStatus, Hub}, include_res, res};

pub(crate) fn render(hub: &Hub) -> String {
    let catalog = hub.catalog();

    let event_rows: String = if catalog.is_empty() {
        include_res!(str, "/pages/dashboard/no_managed_events.html").to_owned()
    } else {
        catalog
            .iter()
            .map(|ev| {
                let status_class = match ev.status {
                    EventStatus::Full => "full",
                    EventStatus::Open | EventStatus::Completed => "open",
                };
                include_res!(str, "/pages/dashboard/event_row.html")
                    .replace("{id}", &ev.id.to_string())
                    .replace("{date}", &ev.date_string())
                    .replace("{percent}", &ev.progress_percent().to_string())
                    .replace("{participants}", &ev.participants.to_string())
                    .replace("{capacity}", &ev.capacity.to_string())
                    .replace("{status_class}", status_class)
                    .replace("{status}", &ev.status.to_string())
                    .replace("{title}", &res::escape(&ev.title))
            })
            .collect()
    };

    include_res!(str, "/pages/dashboard/organizer.html")
        .replace("{active_events}", &catalog.len().to_string())
        .replace("{total_impact}", &catalog.total_participants().to_string())
        .replace("{event_rows}", &event_rows)
}
