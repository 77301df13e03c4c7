use super::*;

#[derive(Debug, Default, Parser)]
#[command(
  name = "mirror",
  version,
  about = "Render pushed weather and Hacker News events into a live page"
)]
pub(crate) struct Arguments {
  /// Read frames from this file instead of stdin
  #[arg(long, short)]
  pub(crate) input: Option<PathBuf>,
  /// Open the rendered page in the default browser
  #[arg(long)]
  pub(crate) open: bool,
  /// Write the rendered page to this path
  #[arg(long, short)]
  pub(crate) output: Option<PathBuf>,
  /// Clock refresh interval in milliseconds
  #[arg(long, default_value_t = 100)]
  pub(crate) tick_interval: u64,
  /// Format times in UTC instead of the local time zone
  #[arg(long)]
  pub(crate) utc: bool,
}
