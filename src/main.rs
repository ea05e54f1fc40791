use clap::{Parser, Subcommand};
use remapkit::client::FileClient;
use std::process;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Recorded device dump to operate on
    #[arg(global = true, short, long, default_value = "data/device.json")]
    device: String,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the device keymap, layer by layer
    Show(cmd::show::ShowArgs),
    /// Stage edits and print the pending writes without applying them
    Diff(cmd::diff::DiffArgs),
    /// Stage edits and write them back to the device
    Apply(cmd::apply::ApplyArgs),
    /// Inspect or replace the runtime keymap config
    Config(cmd::config::ConfigArgs),
    /// List the key catalog this build understands
    Keys(cmd::keys::KeysArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    // `keys` is pure catalog output; everything else needs the device dump.
    let result = match &cli.command {
        Commands::Keys(args) => cmd::keys::run(args),
        command => {
            println!("📂 Opening device dump: {}", cli.device);
            match FileClient::open(&cli.device) {
                Ok(client) => match command {
                    Commands::Show(args) => cmd::show::run(args, client),
                    Commands::Diff(args) => cmd::diff::run(args, client),
                    Commands::Apply(args) => cmd::apply::run(args, client),
                    Commands::Config(args) => cmd::config::run(args, client),
                    Commands::Keys(_) => unreachable!(),
                },
                Err(err) => Err(err),
            }
        }
    };

    if let Err(err) = result {
        eprintln!("❌ {err}");
        process::exit(1);
    }
}
