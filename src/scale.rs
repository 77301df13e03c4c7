use super::*;

const SECOND: i64 = 1_000;
const MINUTE: i64 = 60 * SECOND;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;

/// Candidate tick spacings in milliseconds, paired with how ticks are laid
/// out for each.
const TIME_STEPS: [(i64, TimeInterval); 18] = [
  (SECOND, TimeInterval::Fixed(SECOND)),
  (5 * SECOND, TimeInterval::Fixed(5 * SECOND)),
  (15 * SECOND, TimeInterval::Fixed(15 * SECOND)),
  (30 * SECOND, TimeInterval::Fixed(30 * SECOND)),
  (MINUTE, TimeInterval::Fixed(MINUTE)),
  (5 * MINUTE, TimeInterval::Fixed(5 * MINUTE)),
  (15 * MINUTE, TimeInterval::Fixed(15 * MINUTE)),
  (30 * MINUTE, TimeInterval::Fixed(30 * MINUTE)),
  (HOUR, TimeInterval::Fixed(HOUR)),
  (3 * HOUR, TimeInterval::Fixed(3 * HOUR)),
  (6 * HOUR, TimeInterval::Fixed(6 * HOUR)),
  (12 * HOUR, TimeInterval::Fixed(12 * HOUR)),
  (DAY, TimeInterval::Fixed(DAY)),
  (2 * DAY, TimeInterval::Fixed(2 * DAY)),
  (WEEK, TimeInterval::Week),
  (30 * DAY, TimeInterval::Months(1)),
  (90 * DAY, TimeInterval::Months(3)),
  (365 * DAY, TimeInterval::Months(12)),
];

#[derive(Clone, Copy, Debug, PartialEq)]
enum TimeInterval {
  Fixed(i64),
  Months(u32),
  Week,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct LinearScale {
  domain: (f64, f64),
  range: (f64, f64),
}

impl LinearScale {
  pub(crate) fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
    Self { domain, range }
  }

  pub(crate) fn scale(&self, value: f64) -> f64 {
    interpolate(self.domain, self.range, value)
  }

  pub(crate) fn ticks(&self, count: usize) -> Vec<f64> {
    linear_ticks(self.domain.0, self.domain.1, count)
  }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct TimeScale {
  domain: (i64, i64),
  offset: FixedOffset,
  range: (f64, f64),
}

impl TimeScale {
  pub(crate) fn domain(&self) -> (i64, i64) {
    self.domain
  }

  /// Builds a scale whose domain is the extent of `times`, or `None` when
  /// there are no times.
  pub(crate) fn from_extent(
    times: impl IntoIterator<Item = i64>,
    range: (f64, f64),
    offset: FixedOffset,
  ) -> Option<Self> {
    let domain = times.into_iter().fold(None, |extent, time| match extent {
      None => Some((time, time)),
      Some((low, high)) => Some((min(low, time), max(high, time))),
    })?;

    Some(Self {
      domain,
      offset,
      range,
    })
  }

  #[allow(clippy::cast_precision_loss)]
  fn interval(&self, count: usize) -> Option<TimeInterval> {
    let target = (self.domain.1 - self.domain.0) as f64 / count.max(1) as f64;

    let index = TIME_STEPS.partition_point(|(step, _)| *step as f64 <= target);

    if index == 0 {
      return None;
    }

    if index == TIME_STEPS.len() {
      return Some(TIME_STEPS[index - 1].1);
    }

    let (below, below_interval) = TIME_STEPS[index - 1];
    let (above, above_interval) = TIME_STEPS[index];

    let closer_below = target / (below as f64) < (above as f64) / target;

    Some(if closer_below {
      below_interval
    } else {
      above_interval
    })
  }

  #[allow(clippy::cast_precision_loss)]
  pub(crate) fn scale(&self, time: i64) -> f64 {
    let domain = (self.domain.0 as f64, self.domain.1 as f64);

    interpolate(domain, self.range, time as f64)
  }

  /// Roughly `count` ticks at calendar-friendly instants inside the domain.
  #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
  pub(crate) fn ticks(&self, count: usize) -> Vec<i64> {
    let (start, end) = self.domain;

    match self.interval(count) {
      None => {
        linear_ticks(start as f64, end as f64, count)
          .into_iter()
          .map(|tick| tick.round() as i64)
          .collect()
      }
      Some(TimeInterval::Fixed(step)) => self.fixed_ticks(step, 0),
      Some(TimeInterval::Week) => self.fixed_ticks(WEEK, 3 * DAY),
      Some(TimeInterval::Months(months)) => self.month_ticks(months),
    }
  }

  /// Ticks every `step` ms, aligned so that local time minus `phase` is a
  /// multiple of `step`. The epoch fell on a Thursday, so a three day phase
  /// lines weeks up on Sundays.
  fn fixed_ticks(&self, step: i64, phase: i64) -> Vec<i64> {
    let shift = i64::from(self.offset.local_minus_utc()) * SECOND - phase;

    let (start, end) = (self.domain.0 + shift, self.domain.1 + shift);

    let first = start.div_euclid(step) * step
      + if start.rem_euclid(step) == 0 { 0 } else { step };

    (0..)
      .map(|index| first + index * step)
      .take_while(|tick| *tick <= end)
      .map(|tick| tick - shift)
      .collect()
  }

  fn month_ticks(&self, months: u32) -> Vec<i64> {
    let to_local = |millis: i64| {
      DateTime::from_timestamp_millis(millis)
        .map(|instant| instant.with_timezone(&self.offset).date_naive())
    };

    let (Some(start), Some(end)) =
      (to_local(self.domain.0), to_local(self.domain.1))
    else {
      return Vec::new();
    };

    let Some(mut month) = start.with_day(1) else {
      return Vec::new();
    };

    while month.month0() % months != 0 {
      let Some(previous) = month.checked_sub_months(Months::new(1)) else {
        return Vec::new();
      };

      month = previous;
    }

    let mut ticks = Vec::new();

    while month <= end {
      if let Some(tick) = month
        .and_hms_opt(0, 0, 0)
        .and_then(|midnight| midnight.and_local_timezone(self.offset).single())
        .map(|local| local.timestamp_millis())
        .filter(|tick| (self.domain.0..=self.domain.1).contains(tick))
      {
        ticks.push(tick);
      }

      let Some(next) = month.checked_add_months(Months::new(months)) else {
        break;
      };

      month = next;
    }

    ticks
  }
}

fn interpolate(domain: (f64, f64), range: (f64, f64), value: f64) -> f64 {
  let span = domain.1 - domain.0;

  if span == 0.0 {
    return range.0;
  }

  range.0 + (value - domain.0) / span * (range.1 - range.0)
}

/// Evenly spaced ticks on a 1, 2 or 5 × 10ⁿ step. Ticks are built from
/// integer multiples so that values like `0.3` come out exact.
pub(crate) fn linear_ticks(start: f64, end: f64, count: usize) -> Vec<f64> {
  let (low, high) = if start <= end {
    (start, end)
  } else {
    (end, start)
  };

  let span = high - low;

  if count == 0 || !span.is_finite() {
    return Vec::new();
  }

  if span == 0.0 {
    return vec![low];
  }

  #[allow(clippy::cast_precision_loss)]
  let count = count as f64;

  #[allow(clippy::cast_possible_truncation)]
  let exponent = (span / count).log10().floor() as i32;

  let error = count / span * 10f64.powi(exponent);

  let (multiplier, exponent) = if error <= 0.15 {
    (1.0, exponent + 1)
  } else if error <= 0.35 {
    (5.0, exponent)
  } else if error <= 0.75 {
    (2.0, exponent)
  } else {
    (1.0, exponent)
  };

  let step = multiplier * 10f64.powi(exponent);

  let first = (low / step).ceil();
  let last = (high / step).floor();

  #[allow(clippy::cast_possible_truncation)]
  let (first, last) = (first as i64, last as i64);

  (first..=last)
    .map(|index| {
      #[allow(clippy::cast_precision_loss)]
      let index = index as f64;

      if exponent < 0 {
        index * multiplier / 10f64.powi(-exponent)
      } else {
        index * step
      }
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn utc() -> FixedOffset {
    Utc.fix()
  }

  #[test]
  fn linear_scale_maps_domain_onto_range() {
    let scale = LinearScale::new((0.0, 1.0), (350.0, 0.0));

    assert_eq!(scale.scale(0.0), 350.0);
    assert_eq!(scale.scale(1.0), 0.0);
    assert_eq!(scale.scale(0.5), 175.0);
  }

  #[test]
  fn linear_ticks_for_unit_interval_are_tenths() {
    assert_eq!(
      linear_ticks(0.0, 1.0, 10),
      vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0]
    );
  }

  #[test]
  fn linear_ticks_pick_nice_steps() {
    assert_eq!(linear_ticks(0.0, 100.0, 5), vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    assert_eq!(linear_ticks(0.0, 10.0, 10), (0..=10).map(f64::from).collect::<Vec<f64>>());
    assert_eq!(linear_ticks(3.0, 3.0, 10), vec![3.0]);
    assert!(linear_ticks(0.0, 1.0, 0).is_empty());
  }

  #[test]
  fn from_extent_uses_min_and_max() {
    let scale =
      TimeScale::from_extent([3_600_000, 0, 7_200_000], (0.0, 530.0), utc())
        .unwrap();

    assert_eq!(scale.domain(), (0, 7_200_000));
    assert_eq!(scale.scale(0), 0.0);
    assert_eq!(scale.scale(7_200_000), 530.0);
    assert_eq!(scale.scale(3_600_000), 265.0);
  }

  #[test]
  fn from_extent_is_none_without_times() {
    assert!(TimeScale::from_extent([], (0.0, 530.0), utc()).is_none());
  }

  #[test]
  fn zero_width_domain_maps_to_range_start() {
    let scale = TimeScale::from_extent([5_000], (0.0, 530.0), utc()).unwrap();

    assert_eq!(scale.scale(5_000), 0.0);
  }

  #[test]
  fn day_long_domain_ticks_every_three_hours() {
    let scale =
      TimeScale::from_extent([0, 23 * HOUR], (0.0, 530.0), utc()).unwrap();

    assert_eq!(
      scale.ticks(10),
      (0..8).map(|index| index * 3 * HOUR).collect::<Vec<i64>>()
    );
  }

  #[test]
  fn two_hour_domain_ticks_every_quarter_hour() {
    let scale =
      TimeScale::from_extent([0, 2 * HOUR], (0.0, 530.0), utc()).unwrap();

    let ticks = scale.ticks(10);

    assert_eq!(ticks.len(), 9);
    assert_eq!(ticks[1], 15 * MINUTE);
  }

  #[test]
  fn hour_ticks_align_to_local_time() {
    let offset = FixedOffset::east_opt(3600).unwrap();

    let scale =
      TimeScale::from_extent([0, 23 * HOUR], (0.0, 530.0), offset).unwrap();

    let ticks = scale.ticks(10);

    assert_eq!(ticks[0], 2 * HOUR);
    assert!(ticks.iter().all(|tick| (tick + HOUR) % (3 * HOUR) == 0));
  }

  #[test]
  fn week_ticks_fall_on_sundays() {
    let scale =
      TimeScale::from_extent([0, 70 * DAY], (0.0, 530.0), utc()).unwrap();

    let ticks = scale.ticks(10);

    assert_eq!(ticks[0], 3 * DAY);
    assert!(ticks.windows(2).all(|pair| pair[1] - pair[0] == WEEK));
  }

  #[test]
  fn month_ticks_fall_on_first_of_month() {
    let scale =
      TimeScale::from_extent([0, 300 * DAY], (0.0, 530.0), utc()).unwrap();

    let ticks = scale.ticks(10);

    assert!(!ticks.is_empty());

    for tick in ticks {
      let date = DateTime::from_timestamp_millis(tick).unwrap();
      assert_eq!(date.day(), 1);
    }
  }

  #[test]
  fn sub_second_domains_use_linear_ticks() {
    let scale = TimeScale::from_extent([0, 500], (0.0, 530.0), utc()).unwrap();

    assert_eq!(
      scale.ticks(10),
      (0..=10).map(|index| index * 50).collect::<Vec<i64>>()
    );
  }
}
