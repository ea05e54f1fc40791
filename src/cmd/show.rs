use clap::Args;
use remapkit::client::FileClient;
use remapkit::session::EditSession;
use remapkit::snapshot::JoinPolicy;
use remapkit::RkResult;

use crate::reports;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Only render this layer
    #[arg(short, long)]
    pub layer: Option<u8>,
}

pub fn run(args: &ShowArgs, client: FileClient) -> RkResult<()> {
    let session = EditSession::connect(client, JoinPolicy::SkipUnmatched)?;
    for warning in session.warnings() {
        println!("⚠️  {warning}");
    }

    let layers: Vec<u8> = match args.layer {
        Some(layer) => vec![layer],
        None => (0..session.layer_count()).collect(),
    };
    for layer in layers {
        reports::print_layer_grid(session.buffer(), layer);
    }
    session.disconnect()
}
