use std::io::Read;

use anyhow::Result;
use clap::Parser;
use log::debug;

use crate::input::read_message;
use crate::webhook::dispatch;

/// Post standard input to a chat webhook.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Webhook URL the message is posted to
    pub destination: String,
}

/// Reads the message from `input` and posts it to the destination.
pub fn run<R: Read>(cli: &Cli, input: R) -> Result<()> {
    let message = read_message(input)?;
    debug!("Read {} bytes from input", message.len());

    dispatch(&cli.destination, &message)
}
