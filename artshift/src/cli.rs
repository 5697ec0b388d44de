use clap::Parser;
use std::path::PathBuf;

/// Slice an image into shifted stripes and save the result as artShift.png.
#[derive(Parser, Debug)]
#[command(name = "artshift", version, about)]
pub struct Args {
    /// Image to process (any format the image decoder understands)
    pub input: PathBuf,

    /// TOML settings file. Command line flags win over its values.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory artShift.png is written to
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    #[arg(long, value_name = "PX")]
    pub min_height: Option<u32>,

    #[arg(long, value_name = "PX")]
    pub max_height: Option<u32>,

    #[arg(long, value_name = "PX")]
    pub min_shift: Option<u32>,

    #[arg(long, value_name = "PX")]
    pub max_shift: Option<u32>,

    /// Allow stripes to be mirrored left to right
    #[arg(long, overrides_with = "no_horizontal_mirror")]
    pub horizontal_mirror: bool,

    #[arg(long, overrides_with = "horizontal_mirror")]
    pub no_horizontal_mirror: bool,

    /// Allow stripes to be mirrored top to bottom
    #[arg(long, overrides_with = "no_vertical_mirror")]
    pub vertical_mirror: bool,

    #[arg(long, overrides_with = "vertical_mirror")]
    pub no_vertical_mirror: bool,

    /// Ignore the stripe settings and pick random ones sized to the image
    #[arg(short, long, overrides_with = "no_randomize")]
    pub randomize: bool,

    #[arg(long, overrides_with = "randomize")]
    pub no_randomize: bool,

    /// Seed for repeatable output
    #[arg(long)]
    pub seed: Option<u64>,
}
