use super::*;

#[derive(Debug)]
pub(crate) enum Event {
  Connected,
  Disconnected,
  Interrupted,
  Message(Message),
  Tick(String),
}
