use super::*;

/// URL-decodes `raw` the way `decodeURIComponent` does: every `%` must start
/// a two-digit hex escape and the result must be valid UTF-8. `+` is kept
/// literally.
fn decode_component(raw: &str) -> Result<String, DecodeError> {
  fn hex_value(byte: u8) -> Option<u8> {
    match byte {
      b'0'..=b'9' => Some(byte - b'0'),
      b'a'..=b'f' => Some(byte - b'a' + 10),
      b'A'..=b'F' => Some(byte - b'A' + 10),
      _ => None,
    }
  }

  let bytes = raw.as_bytes();

  let mut decoded = Vec::with_capacity(bytes.len());

  let mut position = 0;

  while position < bytes.len() {
    if bytes[position] != b'%' {
      decoded.push(bytes[position]);
      position += 1;
      continue;
    }

    let escape = bytes
      .get(position + 1)
      .copied()
      .and_then(hex_value)
      .zip(bytes.get(position + 2).copied().and_then(hex_value));

    let Some((high, low)) = escape else {
      return Err(DecodeError::InvalidEscape { position });
    };

    decoded.push((high << 4) | low);
    position += 3;
  }

  Ok(String::from_utf8(decoded)?)
}

pub(crate) fn decode_payload(raw: &str) -> Result<Value, DecodeError> {
  serde_json::from_str(&decode_component(raw)?).map_err(DecodeError::Json)
}
