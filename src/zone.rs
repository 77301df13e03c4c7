use super::*;

/// The time zone instants are shown in. Local time is resolved per instant,
/// so a daylight saving change shows up without a restart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Zone {
  Local,
  Utc,
}

impl Zone {
  pub(crate) fn format(self, instant: DateTime<Utc>, format: &str) -> String {
    match self {
      Self::Local => instant.with_timezone(&Local).format(format).to_string(),
      Self::Utc => instant.format(format).to_string(),
    }
  }

  pub(crate) fn offset_at(self, instant: DateTime<Utc>) -> FixedOffset {
    match self {
      Self::Local => instant.with_timezone(&Local).offset().fix(),
      Self::Utc => Utc.fix(),
    }
  }
}
