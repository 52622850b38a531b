use clap::Parser;
use keyring::Entry;

use crate::error::AuthError;
use crate::gmail_api::{DEFAULT_MESSAGE_LIMIT, KEYRING_SERVICE_NAME, KEYRING_USERNAME};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    /// Clear the stored credentials from the system keyring and exit.
    #[clap(long)]
    pub clear_keyring: bool,

    /// Maximum number of recent messages to fetch.
    #[clap(long, default_value_t = DEFAULT_MESSAGE_LIMIT, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_messages: u32,
}

pub fn handle_keyring_clear() -> Result<(), AuthError> {
    let credentials_keyring = Entry::new(KEYRING_SERVICE_NAME, KEYRING_USERNAME)?;

    if let Err(e) = credentials_keyring.delete_password() {
        eprintln!("Failed to delete credentials from keyring: {}", e);
    } else {
        println!("Credentials removed from keyring. Exiting.");
    }
    Ok(())
}
