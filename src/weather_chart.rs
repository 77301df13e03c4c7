use super::*;

const CANVAS_HEIGHT: f64 = 400.0;
const CANVAS_WIDTH: f64 = 600.0;

const MARGIN_BOTTOM: f64 = 30.0;
const MARGIN_LEFT: f64 = 50.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;

const HEIGHT: f64 = CANVAS_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
const WIDTH: f64 = CANVAS_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;

const TICK_COUNT: usize = 10;

const TIME_FORMAT: &str = "%_I:%M %p";

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Point {
  pub(crate) probability: f64,
  pub(crate) time: i64,
}

impl From<&HourlySample> for Point {
  fn from(sample: &HourlySample) -> Self {
    Self {
      probability: sample.precip_probability,
      time: sample.time.saturating_mul(1000),
    }
  }
}

/// Precipitation probability over time as an SVG line chart.
#[derive(Clone, Copy, Debug)]
pub(crate) struct WeatherChart {
  zone: Zone,
}

impl WeatherChart {
  pub(crate) fn new(zone: Zone) -> Self {
    Self { zone }
  }

  pub(crate) fn normalize(samples: &[HourlySample]) -> Vec<Point> {
    samples.iter().map(Point::from).collect()
  }

  pub(crate) fn percent_label(value: f64) -> String {
    format!("{}%", (100.0 * value).floor())
  }

  pub(crate) fn render(
    &self,
    samples: &[HourlySample],
  ) -> Result<Node, RenderInputError> {
    let points = Self::normalize(samples);

    let x = self.time_scale(&points).ok_or(RenderInputError::NoSamples)?;

    let y = LinearScale::new((0.0, 1.0), (HEIGHT, 0.0));

    let x_axis = Axis::bottom((0.0, WIDTH)).with_ticks(
      x.ticks(TICK_COUNT)
        .into_iter()
        .map(|tick| (x.scale(tick), self.time_label(tick))),
    );

    let y_axis = Axis::left((HEIGHT, 0.0)).with_ticks(
      y.ticks(TICK_COUNT)
        .into_iter()
        .map(|tick| (y.scale(tick), Self::percent_label(tick))),
    );

    let coordinates = points
      .iter()
      .map(|point| (x.scale(point.time), y.scale(point.probability)))
      .collect::<Vec<(f64, f64)>>();

    let mut plot = Element::new("g")
      .attr("transform", format!("translate({MARGIN_LEFT},{MARGIN_TOP})"))
      .child(x_axis.render(
        Element::new("g")
          .class("x axis")
          .attr("transform", format!("translate(0,{HEIGHT})")),
      ))
      .child(
        y_axis.render(Element::new("g").class("y axis")).child(
          Element::new("text")
            .attr("transform", "rotate(-90)")
            .attr("y", 6)
            .attr("dy", ".71em")
            .attr("style", "text-anchor: end;")
            .text("% Precip"),
        ),
      );

    if let Some(path) = basis_path(&coordinates) {
      plot = plot.child(Element::new("path").class("line").attr("d", path));
    }

    Ok(
      Element::new("svg")
        .attr("width", CANVAS_WIDTH)
        .attr("height", CANVAS_HEIGHT)
        .child(plot)
        .into(),
    )
  }

  fn time_label(&self, millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
      .map(|instant| self.zone.format(instant, TIME_FORMAT))
      .unwrap_or_default()
  }

  /// Ticks are aligned to the offset in effect at the first sample.
  fn time_scale(&self, points: &[Point]) -> Option<TimeScale> {
    let offset = points
      .iter()
      .map(|point| point.time)
      .min()
      .and_then(DateTime::from_timestamp_millis)
      .map(|instant| self.zone.offset_at(instant))?;

    TimeScale::from_extent(points.iter().map(|point| point.time), (0.0, WIDTH), offset)
  }
}
