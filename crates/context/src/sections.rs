//! HTML section formatters, one per entity type.
//!
//! Each formatter is pure: an empty slice yields that section's fixed
//! sentence, otherwise one fragment per record concatenated in order.

use alumnet_core::records::{
    AlumniProfile, Campaign, Event, Internship, MentorshipOffer, Notification,
};

pub const NO_EVENTS: &str = "No upcoming events found.";
pub const NO_CAMPAIGNS: &str = "No active fundraising campaigns.";
pub const NO_INTERNSHIPS: &str = "No internship opportunities available.";
pub const NO_NOTIFICATIONS: &str = "No notifications at the moment.";
pub const NO_MENTORSHIP: &str = "No mentorship offers available.";
pub const NO_ALUMNI: &str = "No alumni profiles found.";

const TEXT_PLACEHOLDER: &str = "-";
const AMOUNT_PLACEHOLDER: &str = "0";

pub fn format_events(events: &[Event]) -> String {
    render(events, NO_EVENTS, |e| {
        format!(
            "<div class=\"event\"><h4>{}</h4><p><b>Type:</b> {} | <b>Date:</b> {} | <b>Organizer:</b> {}</p><p>{}</p></div>",
            text(&e.title),
            text(&e.kind),
            text(&e.date),
            text(&e.organizer),
            text(&e.description),
        )
    })
}

pub fn format_campaigns(campaigns: &[Campaign]) -> String {
    render(campaigns, NO_CAMPAIGNS, |c| {
        format!(
            "<div class=\"campaign\"><h4>{}</h4><p><b>Raised:</b> {} / <b>Goal:</b> {}</p><p><b>Purpose:</b> {}</p><p><b>Deadline:</b> {}</p></div>",
            text(&c.title),
            amount(&c.raised),
            amount(&c.goal),
            text(&c.purpose),
            text(&c.deadline),
        )
    })
}

pub fn format_internships(internships: &[Internship]) -> String {
    render(internships, NO_INTERNSHIPS, |i| {
        format!(
            "<div class=\"internship\"><h4>{}</h4><p><b>Company:</b> {} | <b>Duration:</b> {}</p><p>{}</p></div>",
            text(&i.title),
            text(&i.company),
            text(&i.duration),
            text(&i.description),
        )
    })
}

pub fn format_notifications(notifications: &[Notification]) -> String {
    render(notifications, NO_NOTIFICATIONS, |n| {
        format!(
            "<div class=\"notification\"><h4>{}</h4><p>{}</p><small>{}</small></div>",
            text(&n.title),
            text(&n.message),
            text(&n.date),
        )
    })
}

pub fn format_mentorship(offers: &[MentorshipOffer]) -> String {
    render(offers, NO_MENTORSHIP, |m| {
        format!(
            "<div class=\"mentorship\"><h4>{}</h4><p><b>Expertise:</b> {}</p><p><b>Contact:</b> {}</p></div>",
            text(&m.mentor_name),
            text(&m.expertise),
            text(&m.contact),
        )
    })
}

pub fn format_alumni(alumni: &[AlumniProfile]) -> String {
    render(alumni, NO_ALUMNI, |a| {
        format!(
            "<div class=\"alumni\"><h4>{}</h4><p><b>Role:</b> {} | <b>College:</b> {} | <b>Profession:</b> {}</p><p><b>Batch:</b> {} | <b>Graduation Year:</b> {}</p><p><b>Company:</b> {} | <b>City:</b> {} | <b>Email:</b> {}</p></div>",
            text(&a.name),
            text(&a.role),
            text(&a.college),
            text(&a.profession),
            text(&a.batch),
            text(&a.grad_year),
            text(&a.company),
            text(&a.city),
            text(&a.email),
        )
    })
}

fn render<T>(items: &[T], empty: &str, fragment: impl Fn(&T) -> String) -> String {
    if items.is_empty() {
        return empty.to_string();
    }
    let mut out = String::new();
    for item in items {
        out.push_str(&fragment(item));
    }
    out
}

fn text(value: &Option<String>) -> String {
    field_or(value, TEXT_PLACEHOLDER)
}

fn amount(value: &Option<String>) -> String {
    field_or(value, AMOUNT_PLACEHOLDER)
}

fn field_or(value: &Option<String>, placeholder: &str) -> String {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => escape_html(v),
        _ => placeholder.to_string(),
    }
}

/// Escape the five HTML-significant characters.
fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn empty_inputs_yield_fixed_sentences() {
        assert_eq!(format_events(&[]), "No upcoming events found.");
        assert_eq!(format_campaigns(&[]), "No active fundraising campaigns.");
        assert_eq!(format_internships(&[]), "No internship opportunities available.");
        assert_eq!(format_notifications(&[]), "No notifications at the moment.");
        assert_eq!(format_mentorship(&[]), "No mentorship offers available.");
        assert_eq!(format_alumni(&[]), "No alumni profiles found.");
    }

    #[test]
    fn event_fragment() {
        let event = Event {
            title: some("Reunion"),
            kind: some("Social"),
            date: some("2025-01-01"),
            organizer: some("Alumni Office"),
            description: some("Annual meetup"),
            ..Event::default()
        };
        assert_eq!(
            format_events(&[event]),
            "<div class=\"event\"><h4>Reunion</h4><p><b>Type:</b> Social | <b>Date:</b> 2025-01-01 | <b>Organizer:</b> Alumni Office</p><p>Annual meetup</p></div>"
        );
    }

    #[test]
    fn missing_fields_render_placeholders() {
        let html = format_events(&[Event {
            title: some("Reunion"),
            ..Event::default()
        }]);
        assert!(html.contains("<b>Type:</b> - |"));
        assert!(html.contains("<p>-</p>"));

        let html = format_campaigns(&[Campaign::default()]);
        assert!(html.contains("<b>Raised:</b> 0 / <b>Goal:</b> 0"));
        assert!(html.contains("<b>Purpose:</b> -"));

        for html in [
            format_internships(&[Internship::default()]),
            format_notifications(&[Notification::default()]),
            format_mentorship(&[MentorshipOffer::default()]),
            format_alumni(&[AlumniProfile::default()]),
        ] {
            assert!(!html.contains("null"));
            assert!(!html.contains("undefined"));
            assert!(html.contains("<h4>-</h4>"));
        }
    }

    #[test]
    fn blank_text_counts_as_missing() {
        let html = format_mentorship(&[MentorshipOffer {
            mentor_name: some("   "),
            expertise: some(""),
            contact: some("rao@example.edu"),
            ..MentorshipOffer::default()
        }]);
        assert!(html.contains("<h4>-</h4>"));
        assert!(html.contains("<b>Expertise:</b> -"));
        assert!(html.contains("rao@example.edu"));
    }

    #[test]
    fn zero_amount_is_shown() {
        let html = format_campaigns(&[Campaign {
            raised: some("0"),
            goal: some("2500"),
            ..Campaign::default()
        }]);
        assert!(html.contains("<b>Raised:</b> 0 / <b>Goal:</b> 2500"));
    }

    #[test]
    fn fragments_keep_input_order_without_separator() {
        let names = ["Asha", "Ben", "Chen"];
        let alumni: Vec<AlumniProfile> = names
            .iter()
            .map(|n| AlumniProfile {
                name: some(n),
                ..AlumniProfile::default()
            })
            .collect();
        let html = format_alumni(&alumni);

        let positions: Vec<usize> = names.iter().map(|n| html.find(n).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains("</div><div class=\"alumni\">"));
        assert_eq!(html.matches("<div class=\"alumni\">").count(), 3);
    }

    #[test]
    fn alumni_fragment_projects_every_attribute() {
        let html = format_alumni(&[AlumniProfile {
            name: some("Asha"),
            role: some("Alumni"),
            college: some("Engineering"),
            profession: some("Data Scientist"),
            batch: some("2014"),
            grad_year: some("2018"),
            company: some("Acme"),
            city: some("Pune"),
            email: some("asha@example.com"),
            ..AlumniProfile::default()
        }]);
        for expected in [
            "<b>Role:</b> Alumni",
            "<b>College:</b> Engineering",
            "<b>Profession:</b> Data Scientist",
            "<b>Batch:</b> 2014",
            "<b>Graduation Year:</b> 2018",
            "<b>Company:</b> Acme",
            "<b>City:</b> Pune",
            "<b>Email:</b> asha@example.com",
        ] {
            assert!(html.contains(expected), "missing {expected}");
        }
    }

    #[test]
    fn values_are_escaped() {
        let html = format_notifications(&[Notification {
            title: some("<script>alert('x')</script>"),
            message: some("Tom & Jerry say \"hi\""),
            ..Notification::default()
        }]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(html.contains("Tom &amp; Jerry say &quot;hi&quot;"));
        assert!(html.contains("<small>-</small>"));
    }
}
