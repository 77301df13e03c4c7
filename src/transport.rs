use super::*;

/// Reads newline-delimited frames and forwards them as events.
pub(crate) struct Transport<R> {
  reader: R,
}

impl<R> Transport<R>
where
  R: AsyncBufRead + Unpin + Send + 'static,
{
  pub(crate) fn new(reader: R) -> Self {
    Self { reader }
  }

  pub(crate) async fn run(self, sender: UnboundedSender<Event>) {
    if sender.send(Event::Connected).is_err() {
      return;
    }

    let mut lines = self.reader.lines();

    loop {
      match lines.next_line().await {
        Ok(Some(line)) => {
          let Some(message) = Message::parse(&line) else {
            continue;
          };

          debug!(
            channel = %message.channel,
            payload = %truncate(&message.payload, 80),
            "received frame"
          );

          if sender.send(Event::Message(message)).is_err() {
            return;
          }
        }
        Ok(None) => {
          info!("input closed");
          break;
        }
        Err(error) => {
          warn!(%error, "could not read frame");
          break;
        }
      }
    }

    let _ = sender.send(Event::Disconnected);
  }

  pub(crate) fn spawn(self, sender: UnboundedSender<Event>) -> JoinHandle<()> {
    tokio::spawn(self.run(sender))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  async fn collect(input: &'static str) -> Vec<Event> {
    let (sender, mut receiver) = mpsc::unbounded_channel();

    Transport::new(input.as_bytes()).run(sender).await;

    let mut events = Vec::new();

    while let Ok(event) = receiver.try_recv() {
      events.push(event);
    }

    events
  }

  #[tokio::test]
  async fn run_brackets_frames_with_connection_events() {
    let events = collect("text hello\nweather %7B%7D\n").await;

    assert_eq!(events.len(), 4);
    assert!(matches!(events[0], Event::Connected));
    assert!(matches!(&events[1], Event::Message(message) if message.channel == "text"));
    assert!(matches!(&events[2], Event::Message(message) if message.payload == "%7B%7D"));
    assert!(matches!(events[3], Event::Disconnected));
  }

  #[tokio::test]
  async fn run_skips_blank_lines() {
    let events = collect("\n\ntext a\n   \n").await;

    assert_eq!(events.len(), 3);
  }

  #[tokio::test]
  async fn run_handles_missing_trailing_newline() {
    let events = collect("hn-topstories %5B%5D").await;

    assert!(matches!(&events[1], Event::Message(message) if message.channel == "hn-topstories"));
  }
}
