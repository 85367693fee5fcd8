use crate::{
    libs::{intention::parse, messages::Message},
    msg_info, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct IntentionArgs {
    /// Free-text description of the planned activities
    text: String,
}

pub fn cmd(args: IntentionArgs) -> Result<()> {
    let intentions = parse(&args.text);
    if intentions.is_empty() {
        msg_warning!(Message::IntentionsEmpty);
    } else {
        msg_info!(Message::IntentionsSet(intentions.to_string()));
    }
    Ok(())
}
