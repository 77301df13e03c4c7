use super::*;

pub(crate) fn deserialize_probability<'de, D>(
  deserializer: D,
) -> Result<f64, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Option::<Value>::deserialize(deserializer)?;

  let probability = match value {
    None | Some(Value::Null) => 0.0,
    Some(Value::Number(n)) => n.as_f64().ok_or_else(|| {
      de::Error::invalid_value(Unexpected::Other("number"), &"a float")
    })?,
    Some(Value::String(s)) if s.trim().is_empty() => 0.0,
    Some(Value::String(s)) => s.trim().parse::<f64>().map_err(|_| {
      de::Error::invalid_value(Unexpected::Str(&s), &"a numeric string")
    })?,
    Some(Value::Bool(b)) => {
      return Err(de::Error::invalid_type(
        Unexpected::Bool(b),
        &"number or numeric string",
      ));
    }
    Some(Value::Array(_)) => {
      return Err(de::Error::invalid_type(
        Unexpected::Seq,
        &"number or numeric string",
      ));
    }
    Some(Value::Object(_)) => {
      return Err(de::Error::invalid_type(
        Unexpected::Map,
        &"number or numeric string",
      ));
    }
  };

  if probability.is_finite() {
    Ok(probability)
  } else {
    Err(de::Error::invalid_value(
      Unexpected::Float(probability),
      &"a finite probability",
    ))
  }
}

pub(crate) fn pluralize(count: u64, singular: &str, plural: &str) -> String {
  match count {
    1 => format!("1 {singular}"),
    _ => format!("{count} {plural}"),
  }
}

pub(crate) fn sanitize_comment(text: &str) -> String {
  let mut cleaned = String::with_capacity(text.len());
  let mut inside_tag = false;
  let mut last_was_space = false;

  for ch in text.chars() {
    match ch {
      '<' => {
        inside_tag = true;

        if !last_was_space {
          cleaned.push(' ');
          last_was_space = true;
        }
      }
      '>' => {
        inside_tag = false;
      }
      _ if inside_tag => {}
      _ if ch.is_whitespace() => {
        if !last_was_space {
          cleaned.push(' ');
          last_was_space = true;
        }
      }
      _ => {
        cleaned.push(ch);
        last_was_space = false;
      }
    }
  }

  let decoded = html_escape::decode_html_entities(cleaned.trim());

  decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
  if text.chars().count() <= max_chars {
    return text.to_string();
  }

  let mut result = String::new();

  for (idx, ch) in text.chars().enumerate() {
    if idx >= max_chars {
      result.push_str("...");
      break;
    }

    result.push(ch);
  }

  result.trim_end().to_string()
}
