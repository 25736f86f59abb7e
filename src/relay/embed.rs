use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Value, json};

use crate::models::Inquiry;

pub const EMBED_TITLE: &str = "🚀 New Project Inquiry";
pub const EMBED_COLOR: u32 = 0x00d4ff;
pub const FOOTER_TEXT: &str = "Portfolio Contact Form";

/// Build the webhook payload for one inquiry: a single embed with fixed
/// Client Info / Project Details / Description sections.
pub fn notification(inquiry: &Inquiry, at: DateTime<Utc>) -> Value {
    let client_info = format!(
        "**Name:** {}\n**Email:** {}\n**Company:** {}",
        inquiry.name,
        inquiry.email,
        inquiry.company_display()
    );
    let project_details = format!(
        "**Type:** {}\n**Budget:** {}\n**Timeline:** {}",
        inquiry.project_type, inquiry.budget, inquiry.timeline
    );

    json!({
        "embeds": [{
            "title": EMBED_TITLE,
            "color": EMBED_COLOR,
            "fields": [
                { "name": "👤 Client Info", "value": client_info, "inline": false },
                { "name": "📋 Project Details", "value": project_details, "inline": false },
                { "name": "📝 Description", "value": &inquiry.description, "inline": false }
            ],
            // Millisecond precision matches the chat system's own timestamps.
            "timestamp": at.to_rfc3339_opts(SecondsFormat::Millis, true),
            "footer": { "text": FOOTER_TEXT }
        }]
    })
}
