use clap::Args;
use remapkit::client::FileClient;
use remapkit::session::EditSession;
use remapkit::snapshot::JoinPolicy;
use remapkit::RkResult;

use crate::reports;

#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// JSON file of staged edits ({row, col, layer, action} entries)
    #[arg(short, long)]
    pub edits: String,
}

pub fn run(args: &ApplyArgs, client: FileClient) -> RkResult<()> {
    let mut session = EditSession::connect(client, JoinPolicy::SkipUnmatched)?;
    for warning in session.warnings() {
        println!("⚠️  {warning}");
    }

    super::stage_edits(&mut session, &args.edits)?;
    let writes = session.pending_writes();
    if writes.is_empty() {
        println!("Nothing to apply — staged actions all match the device.");
        return session.disconnect();
    }
    reports::print_pending_writes(&writes);

    let written = session.commit()?;
    println!("✅ Updated {written} key(s)");
    session.disconnect()
}
