use super::*;

const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Orientation {
  Bottom,
  Left,
}

pub(crate) struct Axis {
  extent: (f64, f64),
  orientation: Orientation,
  ticks: Vec<(f64, String)>,
}

impl Axis {
  pub(crate) fn bottom(extent: (f64, f64)) -> Self {
    Self::new(Orientation::Bottom, extent)
  }

  fn domain_path(&self) -> String {
    let (start, end) = self.extent;

    match self.orientation {
      Orientation::Bottom => {
        format!("M{start},{TICK_SIZE}V0H{end}V{TICK_SIZE}")
      }
      Orientation::Left => {
        format!("M{},{start}H0V{end}H{}", -TICK_SIZE, -TICK_SIZE)
      }
    }
  }

  pub(crate) fn left(extent: (f64, f64)) -> Self {
    Self::new(Orientation::Left, extent)
  }

  fn new(orientation: Orientation, (start, end): (f64, f64)) -> Self {
    Self {
      extent: (start.min(end), start.max(end)),
      orientation,
      ticks: Vec::new(),
    }
  }

  /// Appends `axis` group children for every tick plus the domain line.
  pub(crate) fn render(&self, group: Element) -> Element {
    let ticks = self.ticks.iter().map(|(position, label)| self.tick(*position, label));

    group
      .extend(ticks)
      .child(Element::new("path").class("domain").attr("d", self.domain_path()))
  }

  fn tick(&self, position: f64, label: &str) -> Element {
    let offset = TICK_SIZE + TICK_PADDING;

    let (transform, line, text) = match self.orientation {
      Orientation::Bottom => (
        format!("translate({position},0)"),
        Element::new("line").attr("y2", TICK_SIZE).attr("x2", 0),
        Element::new("text")
          .attr("dy", ".71em")
          .attr("y", offset)
          .attr("x", 0)
          .attr("style", "text-anchor: middle;"),
      ),
      Orientation::Left => (
        format!("translate(0,{position})"),
        Element::new("line").attr("x2", -TICK_SIZE).attr("y2", 0),
        Element::new("text")
          .attr("dy", ".32em")
          .attr("x", -offset)
          .attr("y", 0)
          .attr("style", "text-anchor: end;"),
      ),
    };

    Element::new("g")
      .class("tick")
      .attr("transform", transform)
      .child(line)
      .child(text.text(label))
  }

  pub(crate) fn with_ticks<I>(mut self, ticks: I) -> Self
  where
    I: IntoIterator<Item = (f64, String)>,
  {
    self.ticks.extend(ticks);
    self
  }
}
