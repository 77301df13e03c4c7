/// One frame from the real-time channel: a channel name and its still
/// URL-encoded payload.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Message {
  pub(crate) channel: String,
  pub(crate) payload: String,
}

impl Message {
  /// Parses `<channel> <payload>`. The payload may be empty; a line with no
  /// channel is not a frame.
  pub(crate) fn parse(line: &str) -> Option<Self> {
    let line = line.trim();

    if line.is_empty() {
      return None;
    }

    let (channel, payload) = line
      .split_once(char::is_whitespace)
      .unwrap_or((line, ""));

    Some(Self {
      channel: channel.to_string(),
      payload: payload.trim_start().to_string(),
    })
  }
}
