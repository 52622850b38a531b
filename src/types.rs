use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LabelsResponse {
    pub labels: Option<Vec<Label>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Label {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub label_type: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Profile {
    #[serde(rename = "emailAddress")]
    pub email_address: Option<String>,
    #[serde(rename = "messagesTotal")]
    pub messages_total: Option<u64>,
    #[serde(rename = "threadsTotal")]
    pub threads_total: Option<u64>,
    #[serde(rename = "historyId")]
    pub history_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MessagesResponse {
    pub messages: Option<Vec<MessageRef>>,
}

#[derive(Debug, Deserialize)]
pub struct MessageRef {
    pub id: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Message {
    pub id: Option<String>,
    #[serde(rename = "threadId")]
    pub thread_id: Option<String>,
    #[serde(rename = "labelIds")]
    pub label_ids: Option<Vec<String>>,
    #[serde(rename = "internalDate")]
    pub internal_date: Option<String>,
    pub payload: Option<MessagePart>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct MessagePart {
    #[serde(rename = "mimeType")]
    pub mime_type: Option<String>,
    pub headers: Option<Vec<Header>>,
    pub body: Option<MessagePartBody>,
    pub parts: Option<Vec<MessagePart>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Header {
    pub name: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MessagePartBody {
    pub data: Option<String>,
}

/// One normalized email record. Every field is always present; missing
/// source data degrades to an empty string or empty list, never to an
/// absent value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailSummary {
    pub message_id: String,
    pub thread_id: String,
    /// `YYYY-MM-DD HH:MM:SS` in UTC, or empty when the message carries no
    /// usable internalDate.
    pub timestamp: String,
    pub label_ids: Vec<String>,
    pub sender: String,
    pub subject: String,
    /// Plain-text body, truncated to 500 characters with a trailing `...`
    /// when the original was longer.
    pub body_text: String,
}

/// Aggregated result of one snapshot fetch. Email order matches the
/// message-ID list order returned by the server, not completion order.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub labels: Vec<Label>,
    pub profile: Profile,
    pub emails: Vec<EmailSummary>,
}
