use super::*;

const CLOCK_FORMAT: &str = "%-I:%M %P";

#[derive(Clone, Copy, Debug)]
pub(crate) struct Clock {
  zone: Zone,
}

impl Clock {
  pub(crate) fn format(&self, instant: DateTime<Utc>) -> String {
    self.zone.format(instant, CLOCK_FORMAT)
  }

  pub(crate) fn new(zone: Zone) -> Self {
    Self { zone }
  }

  pub(crate) fn now(&self) -> String {
    self.format(Utc::now())
  }
}

/// Handle to the repeating clock refresh. Dropping it without calling
/// [`ClockTicker::stop`] also cancels the task.
pub(crate) struct ClockTicker {
  handle: JoinHandle<()>,
}

impl ClockTicker {
  pub(crate) fn start(
    clock: Clock,
    period: Duration,
    sender: UnboundedSender<Event>,
  ) -> Self {
    let _ = sender.send(Event::Tick(clock.now()));

    let handle = tokio::spawn(async move {
      let mut interval = time::interval_at(time::Instant::now() + period, period);

      interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

      loop {
        interval.tick().await;

        if sender.send(Event::Tick(clock.now())).is_err() {
          break;
        }
      }
    });

    Self { handle }
  }

  pub(crate) fn stop(self) {
    self.handle.abort();
  }
}

impl Drop for ClockTicker {
  fn drop(&mut self) {
    self.handle.abort();
  }
}
