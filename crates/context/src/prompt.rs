//! Prompt construction: persona plus the formatted alumni database.

use crate::aggregator::ContextBundle;
use crate::sections;
use alumnet_core::message::Message;
use alumnet_core::provider::ProviderRequest;

/// System instruction sent ahead of every question.
pub const PERSONA: &str = "You are the Alumni Network assistant, a friendly and helpful guide for \
students and alumni. Answer only from the alumni database provided in the user message. \
Respond in concise, well-structured HTML fragments (headings, paragraphs, lists, bold text) \
and never include <html>, <head> or <body> tags. When the database does not contain the \
answer, say so politely and suggest contacting the alumni office.";

/// Render the six labeled sections in their fixed order.
pub fn build_document(bundle: &ContextBundle) -> String {
    let parts = [
        ("Upcoming Events", sections::format_events(&bundle.events)),
        ("Fundraising Campaigns", sections::format_campaigns(&bundle.fundraising)),
        ("Internship Opportunities", sections::format_internships(&bundle.internships)),
        ("Notifications", sections::format_notifications(&bundle.notifications)),
        ("Mentorship Offers", sections::format_mentorship(&bundle.mentorship)),
        ("Alumni Directory", sections::format_alumni(&bundle.users)),
    ];

    parts
        .iter()
        .map(|(heading, body)| format!("<h3>{heading}</h3>\n{body}"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// System message followed by the user message carrying database and question.
pub fn build_messages(bundle: &ContextBundle, question: &str) -> Vec<Message> {
    let document = build_document(bundle);
    vec![
        Message::system(PERSONA),
        Message::user(format!(
            "Alumni database:\n{document}\n\nUser question: {question}"
        )),
    ]
}

pub fn build_request(model: &str, bundle: &ContextBundle, question: &str) -> ProviderRequest {
    ProviderRequest::new(model, build_messages(bundle, question))
}
