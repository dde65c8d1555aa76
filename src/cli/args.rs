use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "colpad",
    version,
    about = "Pad column_1.png..column_8.png to 515 px tall with white borders"
)]
pub struct CliArgs {
    /// Run as if started in this directory
    #[arg(short = 'C', long, default_value = ".")]
    pub dir: PathBuf,

    /// Enable logging (RUST_LOG overrides the default debug level)
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
