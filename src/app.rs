use super::*;

pub(crate) struct App {
  bridge: Option<EventBridge>,
  chart: WeatherChart,
  clock: Clock,
  config: Config,
  document: Document,
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  opened: bool,
}

impl App {
  async fn event_loop(&mut self) -> Result {
    while let Some(event) = self.event_rx.recv().await {
      if self.handle_event(event)? {
        break;
      }
    }

    Ok(())
  }

  /// Applies one event, returning whether the app should exit.
  fn handle_event(&mut self, event: Event) -> Result<bool> {
    match event {
      Event::Connected => {
        info!("connected");
        self.bridge = Some(EventBridge::connected(self.chart));
      }
      Event::Disconnected => {
        info!("disconnected");
        return Ok(true);
      }
      Event::Interrupted => {
        info!("interrupted");
        return Ok(true);
      }
      Event::Message(message) => {
        let Some(bridge) = &self.bridge else {
          warn!(channel = %message.channel, "dropping message received before connect");
          return Ok(false);
        };

        if let Some(node) = bridge.dispatch(&message) {
          self.document.append(node);
          self.persist()?;
        }
      }
      Event::Tick(clock) => {
        if self.document.set_clock(clock) {
          self.persist()?;
        }
      }
    }

    Ok(false)
  }

  pub(crate) fn new(config: Config) -> Self {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    Self {
      bridge: None,
      chart: WeatherChart::new(config.zone),
      clock: Clock::new(config.zone),
      config,
      document: Document::new(),
      event_rx,
      event_tx,
      opened: false,
    }
  }

  fn persist(&mut self) -> Result {
    let path = &self.config.output;

    self
      .document
      .write(path)
      .with_context(|| format!("could not write page to `{}`", path.display()))?;

    if self.config.open && !self.opened {
      self.opened = true;

      match webbrowser::open(&path.to_string_lossy()) {
        Ok(()) => info!(path = %path.display(), "opened page in browser"),
        Err(error) => warn!(%error, "could not open page in browser"),
      }
    }

    Ok(())
  }

  async fn reader(&self) -> Result<Box<dyn AsyncBufRead + Unpin + Send>> {
    Ok(match &self.config.input {
      Some(path) => Box::new(BufReader::new(
        tokio::fs::File::open(path)
          .await
          .with_context(|| format!("could not open `{}`", path.display()))?,
      )),
      None => Box::new(BufReader::new(tokio::io::stdin())),
    })
  }

  pub(crate) async fn run(self) -> Result {
    let reader = self.reader().await?;
    self.serve(reader).await
  }

  /// Drives the page from `reader` until the input ends or the process is
  /// interrupted, then stops every task it started.
  async fn serve<R>(mut self, reader: R) -> Result
  where
    R: AsyncBufRead + Unpin + Send + 'static,
  {
    info!(output = %self.config.output.display(), "rendering page");

    let ticker = ClockTicker::start(
      self.clock,
      self.config.tick_interval,
      self.event_tx.clone(),
    );

    let transport = Transport::new(reader).spawn(self.event_tx.clone());

    let interrupt = {
      let sender = self.event_tx.clone();

      tokio::spawn(async move {
        if signal::ctrl_c().await.is_ok() {
          let _ = sender.send(Event::Interrupted);
        }
      })
    };

    let result = self.event_loop().await;

    ticker.stop();
    transport.abort();
    interrupt.abort();

    result
  }
}
