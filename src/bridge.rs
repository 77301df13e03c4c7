use super::*;

/// Leading hourly samples the weather chart receives.
const HOURLY_LIMIT: usize = 24;

type Handler = Box<dyn Fn(Value) -> Result<Option<Node>, RenderInputError>>;

/// Routes decoded channel payloads to renderers.
pub(crate) struct EventBridge {
  handlers: BTreeMap<Channel, Handler>,
}

impl EventBridge {
  /// A bridge with a handler registered for every channel.
  pub(crate) fn connected(chart: WeatherChart) -> Self {
    let mut bridge = Self::new();

    bridge.on(Channel::Text, |value| {
      let text = value.as_str().unwrap_or_default();
      info!(text = %truncate(text, 80), "socket connected");
      Ok(None)
    });

    bridge.on(Channel::TopComment, |value| {
      let top = serde_json::from_value::<TopComment>(value)?;
      Ok(Some(TopCommentView::render(&top)))
    });

    bridge.on(Channel::TopStories, |value| {
      let stories = serde_json::from_value::<Vec<Story>>(value)?;
      StoryListView::render(&stories).map(Some)
    });

    bridge.on(Channel::Weather, move |value| {
      let report = serde_json::from_value::<WeatherReport>(value)?;
      chart.render(&report.into_samples(HOURLY_LIMIT)).map(Some)
    });

    bridge
  }

  /// Handles `message`, logging and dropping it on failure.
  pub(crate) fn dispatch(&self, message: &Message) -> Option<Node> {
    match self.handle(message) {
      Ok(node) => node,
      Err(error) => {
        let error = anyhow::Error::from(error);
        warn!("dropping message: {error:#}");
        None
      }
    }
  }

  pub(crate) fn handle(
    &self,
    message: &Message,
  ) -> Result<Option<Node>, BridgeError> {
    let handler = message
      .channel
      .parse::<Channel>()
      .ok()
      .and_then(|channel| Some((channel, self.handlers.get(&channel)?)));

    let Some((channel, handler)) = handler else {
      debug!(channel = %message.channel, "no handler for channel");
      return Ok(None);
    };

    let value = if channel.carries_json() {
      decode_payload(&message.payload)
        .map_err(|source| BridgeError::Decode { channel, source })?
    } else {
      Value::String(message.payload.clone())
    };

    debug!(%channel, payload = %value, "decoded message");

    handler(value).map_err(|source| BridgeError::Render { channel, source })
  }

  fn new() -> Self {
    Self {
      handlers: BTreeMap::new(),
    }
  }

  /// Registers `handler` for `channel`, replacing any previous one.
  pub(crate) fn on<F>(&mut self, channel: Channel, handler: F)
  where
    F: Fn(Value) -> Result<Option<Node>, RenderInputError> + 'static,
  {
    self.handlers.insert(channel, Box::new(handler));
  }
}
