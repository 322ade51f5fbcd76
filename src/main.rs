use anyhow::Result;
use clap::Parser;

/// Zero-argument run: everything (size, colors, output path) is a build-time
/// constant. Parsing still rejects stray arguments and answers --help.
#[derive(Debug, Parser)]
#[clap(
    name = "lock-icon",
    about = "Render the padlock application icon to assets/icon.png"
)]
struct Args {}

fn main() -> Result<()> {
    let _args = Args::parse();

    lock_icon::generate_icon()
}
