use crate::types::FetchResult;

const SECTION_RULE: &str =
    "============================================================";
const EMAIL_RULE: &str = "----------------------------------------";
const PREVIEW_CHAR_LIMIT: usize = 100;

fn section(lines: &mut Vec<String>, title: &str) {
    lines.push(SECTION_RULE.to_string());
    lines.push(title.to_string());
    lines.push(SECTION_RULE.to_string());
}

fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let kept: String = chars.by_ref().take(PREVIEW_CHAR_LIMIT).collect();
    if chars.next().is_some() {
        format!("{}...", kept)
    } else {
        kept
    }
}

/// Render one fetched snapshot as a plain-text report.
pub fn render_report(data: &FetchResult) -> String {
    let mut lines = Vec::new();

    let profile = &data.profile;
    section(&mut lines, "USER PROFILE");
    lines.push(format!(
        "Email Address: {}",
        profile.email_address.as_deref().unwrap_or("N/A")
    ));
    lines.push(format!(
        "Messages Total: {}",
        profile
            .messages_total
            .map(|n| n.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    ));
    lines.push(format!(
        "Threads Total: {}",
        profile
            .threads_total
            .map(|n| n.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    ));
    lines.push(format!(
        "History ID: {}",
        profile.history_id.as_deref().unwrap_or("N/A")
    ));
    lines.push(String::new());

    section(&mut lines, "LABELS");
    for label in &data.labels {
        lines.push(format!(
            "- {} ({})",
            label.name.as_deref().unwrap_or("(unnamed)"),
            label.label_type.as_deref().unwrap_or("user")
        ));
    }
    lines.push(String::new());

    section(&mut lines, &format!("LAST {} EMAILS", data.emails.len()));
    for (i, email) in data.emails.iter().enumerate() {
        lines.push(String::new());
        lines.push(format!("EMAIL #{}", i + 1));
        lines.push(EMAIL_RULE.to_string());
        lines.push(format!("Message ID: {}", email.message_id));
        lines.push(format!("Thread ID: {}", email.thread_id));
        lines.push(format!("Timestamp: {}", email.timestamp));
        lines.push(format!("From: {}", email.sender));
        lines.push(format!("Subject: {}", email.subject));
        lines.push(format!(
            "Labels: {}",
            if email.label_ids.is_empty() {
                "None".to_string()
            } else {
                email.label_ids.join(", ")
            }
        ));
        lines.push(format!("Preview: {}", preview(&email.body_text)));
        lines.push(String::new());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EmailSummary, Label, Profile};

    #[test]
    fn test_report_contains_all_sections() {
        let data = FetchResult {
            labels: vec![Label {
                id: Some("INBOX".to_string()),
                name: Some("Inbox".to_string()),
                label_type: Some("system".to_string()),
            }],
            profile: Profile {
                email_address: Some("user@example.com".to_string()),
                messages_total: Some(42),
                threads_total: Some(40),
                history_id: Some("98765".to_string()),
            },
            emails: vec![EmailSummary {
                message_id: "m1".to_string(),
                thread_id: "t1".to_string(),
                timestamp: "2023-01-01 00:00:00".to_string(),
                label_ids: vec![],
                sender: "a@b.com".to_string(),
                subject: "Hi".to_string(),
                body_text: "hi".to_string(),
            }],
        };

        let report = render_report(&data);
        assert!(report.contains("USER PROFILE"));
        assert!(report.contains("Email Address: user@example.com"));
        assert!(report.contains("Messages Total: 42"));
        assert!(report.contains("LABELS"));
        assert!(report.contains("- Inbox (system)"));
        assert!(report.contains("LAST 1 EMAILS"));
        assert!(report.contains("Message ID: m1"));
        assert!(report.contains("Labels: None"));
        assert!(report.contains("Preview: hi"));
    }

    #[test]
    fn test_preview_truncates_long_bodies() {
        let long = "y".repeat(150);
        assert_eq!(preview(&long), format!("{}...", "y".repeat(100)));
        assert_eq!(preview("short"), "short");
    }
}
