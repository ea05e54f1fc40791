use clap::Args;
use remapkit::RkResult;

use crate::reports;

#[derive(Args, Debug)]
pub struct KeysArgs {
    /// Filter by name substring (case-insensitive)
    #[arg(short, long)]
    pub filter: Option<String>,
}

pub fn run(args: &KeysArgs) -> RkResult<()> {
    reports::print_key_catalog(args.filter.as_deref());
    Ok(())
}
