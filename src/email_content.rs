use base64::engine::general_purpose::URL_SAFE;
use base64::engine::Engine;
use chrono::{DateTime, Utc};

use crate::types::{EmailSummary, Header, Message, MessagePart};

const BODY_CHAR_LIMIT: usize = 500;
const TRUNCATION_MARKER: &str = "...";

/// Shape of a message payload, decided once before text extraction.
enum PayloadShape<'a> {
    Multipart(&'a [MessagePart]),
    Simple(&'a MessagePart),
    Empty,
}

fn classify_payload(payload: Option<&MessagePart>) -> PayloadShape<'_> {
    match payload {
        Some(part) => match part.parts.as_deref() {
            Some(parts) => PayloadShape::Multipart(parts),
            None => PayloadShape::Simple(part),
        },
        None => PayloadShape::Empty,
    }
}

/// Decode Gmail's unpadded base64url body data. Gmail omits the `=`
/// padding, so pad back to a multiple of 4 before decoding. Any failure
/// yields None; callers degrade the fragment instead of propagating.
fn decode_body_data(data: &str) -> Option<String> {
    let mut padded = data.to_string();
    while padded.len() % 4 != 0 {
        padded.push('=');
    }
    let bytes = URL_SAFE.decode(padded.as_bytes()).ok()?;
    String::from_utf8(bytes).ok()
}

/// Case-insensitive header lookup; first match wins.
fn header_value(headers: &[Header], name: &str) -> String {
    headers
        .iter()
        .find(|h| {
            h.name
                .as_deref()
                .is_some_and(|n| n.eq_ignore_ascii_case(name))
        })
        .and_then(|h| h.value.clone())
        .unwrap_or_default()
}

fn decoded_part_text(part: &MessagePart) -> Option<String> {
    let data = part.body.as_ref()?.data.as_deref()?;
    if data.is_empty() {
        return None;
    }
    decode_body_data(data)
}

/// Extract the plain-text body. For multipart payloads, every top-level
/// `text/plain` part is decoded and the results are joined by newline;
/// parts that fail to decode contribute nothing. A simple payload is
/// decoded only if it is itself `text/plain`. Everything else yields an
/// empty string.
fn extract_text(payload: Option<&MessagePart>) -> String {
    match classify_payload(payload) {
        PayloadShape::Multipart(parts) => parts
            .iter()
            .filter(|p| p.mime_type.as_deref() == Some("text/plain"))
            .filter_map(decoded_part_text)
            .collect::<Vec<_>>()
            .join("\n"),
        PayloadShape::Simple(part) => {
            if part.mime_type.as_deref() == Some("text/plain") {
                decoded_part_text(part).unwrap_or_default()
            } else {
                String::new()
            }
        }
        PayloadShape::Empty => String::new(),
    }
}

fn format_timestamp(internal_date: Option<&str>) -> String {
    internal_date
        .and_then(|raw| raw.parse::<i64>().ok())
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}

fn truncate_body(text: String) -> String {
    let mut chars = text.chars();
    let kept: String = chars.by_ref().take(BODY_CHAR_LIMIT).collect();
    if chars.next().is_some() {
        format!("{}{}", kept, TRUNCATION_MARKER)
    } else {
        kept
    }
}

/// Map one raw API message to its normalized record.
///
/// Never fails: every malformed or missing field degrades to its
/// documented default, so one odd message cannot take down a whole fetch.
pub fn summarize_message(message: &Message) -> EmailSummary {
    let headers = message
        .payload
        .as_ref()
        .and_then(|p| p.headers.as_deref())
        .unwrap_or_default();

    EmailSummary {
        message_id: message.id.clone().unwrap_or_default(),
        thread_id: message.thread_id.clone().unwrap_or_default(),
        timestamp: format_timestamp(message.internal_date.as_deref()),
        label_ids: message.label_ids.clone().unwrap_or_default(),
        sender: header_value(headers, "From"),
        subject: header_value(headers, "Subject"),
        body_text: truncate_body(extract_text(message.payload.as_ref())),
    }
}
