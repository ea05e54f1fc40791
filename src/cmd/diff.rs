use std::fs::File;

use clap::Args;
use remapkit::client::FileClient;
use remapkit::planner;
use remapkit::session::EditSession;
use remapkit::snapshot::JoinPolicy;
use remapkit::RkResult;

use crate::reports;

#[derive(Args, Debug)]
pub struct DiffArgs {
    /// JSON file of staged edits ({row, col, layer, action} entries)
    #[arg(short, long)]
    pub edits: String,

    /// Export the pending set as CSV to this path
    #[arg(long)]
    pub export: Option<String>,
}

pub fn run(args: &DiffArgs, client: FileClient) -> RkResult<()> {
    let mut session = EditSession::connect(client, JoinPolicy::SkipUnmatched)?;
    for warning in session.warnings() {
        println!("⚠️  {warning}");
    }

    super::stage_edits(&mut session, &args.edits)?;
    let writes = session.pending_writes();
    reports::print_pending_writes(&writes);

    if let Some(path) = &args.export {
        let out = File::create(path)?;
        planner::export_csv(&writes, out)?;
        println!("💾 Exported {} pending write(s) to {}", writes.len(), path);
    }
    session.disconnect()
}
