use anyhow::Result;
use clap::Parser;
use lightbulb_icon::icon_gen;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "lightbulb-icon",
    about = "Draw the lightbulb icon at 16, 32, 48 and 128 pixels"
)]
struct Args {
    /// Output directory. Existing <size>.png files are overwritten.
    #[clap(short, long, value_name = "DIR", default_value = ".")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    icon_gen::generate_icons(icon_gen::Args {
        output: args.output,
    })
}
