use std::fs;

use clap::Args;
use remapkit::client::FileClient;
use remapkit::config::KeymapConfig;
use remapkit::session::EditSession;
use remapkit::snapshot::JoinPolicy;
use remapkit::RkResult;

use crate::reports;

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Replace the device config with the contents of this JSON file
    #[arg(long)]
    pub load: Option<String>,
}

pub fn run(args: &ConfigArgs, client: FileClient) -> RkResult<()> {
    let mut session = EditSession::connect(client, JoinPolicy::SkipUnmatched)?;

    match &args.load {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            let config: KeymapConfig = serde_json::from_str(&content)?;
            session.update_keymap_config(&config)?;
            println!("✅ Keymap config updated");
        }
        None => {
            let config = session.keymap_config()?;
            reports::print_config(&config);
        }
    }
    session.disconnect()
}
