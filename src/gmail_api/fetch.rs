use futures::future::try_join_all;
use log::debug;

use crate::email_content::summarize_message;
use crate::error::ApiError;
use crate::gmail_api::client::GmailClient;
use crate::types::FetchResult;

pub const DEFAULT_MESSAGE_LIMIT: u32 = 10;

/// Fetch labels, profile, and the most recent messages in two concurrent
/// waves and assemble them into one [`FetchResult`].
///
/// Phase 1 runs the three account-level requests concurrently; phase 2
/// fans out one detail request per message ID. Both phases are
/// all-or-nothing: the first failure aborts the whole call and no partial
/// result is returned. Output email order follows the phase-1 ID list,
/// not completion order.
pub async fn fetch_snapshot(client: &GmailClient, limit: u32) -> Result<FetchResult, ApiError> {
    let (labels, profile, message_ids) = tokio::try_join!(
        client.get_labels(),
        client.get_profile(),
        client.list_message_ids(limit),
    )?;
    debug!(
        "phase 1 complete: {} labels, {} message ids",
        labels.len(),
        message_ids.len()
    );

    let messages = try_join_all(message_ids.iter().map(|id| client.get_message(id))).await?;
    debug!("phase 2 complete: {} messages fetched", messages.len());

    let emails = messages.iter().map(summarize_message).collect();

    Ok(FetchResult {
        labels,
        profile,
        emails,
    })
}
