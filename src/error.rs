use super::*;

#[derive(Debug, Error)]
pub(crate) enum BridgeError {
  #[error("could not decode `{channel}` message")]
  Decode {
    channel: Channel,
    #[source]
    source: DecodeError,
  },
  #[error("could not render `{channel}` message")]
  Render {
    channel: Channel,
    #[source]
    source: RenderInputError,
  },
}

#[derive(Debug, Error)]
pub(crate) enum DecodeError {
  #[error("malformed escape sequence at byte {position}")]
  InvalidEscape { position: usize },
  #[error("payload is not valid JSON")]
  Json(#[source] serde_json::Error),
  #[error("decoded payload is not valid UTF-8")]
  Utf8(#[from] FromUtf8Error),
}

#[derive(Debug, Error)]
pub(crate) enum RenderInputError {
  #[error("story {rank} has no score")]
  MissingScore { rank: usize },
  #[error("weather report has no hourly samples")]
  NoSamples,
  #[error("payload does not have the expected shape")]
  Shape(#[from] serde_json::Error),
}
