use super::*;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) enum Channel {
  Text,
  TopComment,
  TopStories,
  Weather,
}

impl Channel {
  pub(crate) fn all() -> &'static [Channel] {
    &[
      Channel::Text,
      Channel::TopComment,
      Channel::TopStories,
      Channel::Weather,
    ]
  }

  /// Whether payloads on this channel carry JSON after URL-decoding.
  pub(crate) fn carries_json(self) -> bool {
    !matches!(self, Channel::Text)
  }

  pub(crate) fn name(self) -> &'static str {
    match self {
      Channel::Text => "text",
      Channel::TopComment => "hn-topcomment",
      Channel::TopStories => "hn-topstories",
      Channel::Weather => "weather",
    }
  }
}

impl Display for Channel {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for Channel {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Channel::all()
      .iter()
      .copied()
      .find(|channel| channel.name() == s)
      .ok_or_else(|| format!("unknown channel `{s}`"))
  }
}
