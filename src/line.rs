use super::*;

/// SVG path data for a basis-interpolated line through `points`, or `None`
/// when there is nothing to draw. Fewer than three points are joined with
/// straight segments.
pub(crate) fn basis_path(points: &[(f64, f64)]) -> Option<String> {
  match points.len() {
    0 => None,
    1 | 2 => Some(linear(points)),
    _ => Some(basis(points)),
  }
}

/// Uniform cubic B-spline, emitted as Bézier segments. The curve starts and
/// ends on the first and last points but only approaches the ones between.
fn basis(points: &[(f64, f64)]) -> String {
  fn control(window: [f64; 4]) -> [f64; 3] {
    let [_, a, b, c] = window;
    [(2.0 * a + b) / 3.0, (a + 2.0 * b) / 3.0, (a + 4.0 * b + c) / 6.0]
  }

  let (x0, y0) = points[0];
  let (x1, y1) = points[1];

  let mut xs = [x0, x0, x0, x1];
  let mut ys = [y0, y0, y0, y1];

  let mut path = format!(
    "M{x0},{y0}L{},{}",
    (x0 + 4.0 * x0 + x1) / 6.0,
    (y0 + 4.0 * y0 + y1) / 6.0
  );

  let last = points[points.len() - 1];

  for &(x, y) in points[2..].iter().chain(once(&last)) {
    xs.rotate_left(1);
    xs[3] = x;
    ys.rotate_left(1);
    ys[3] = y;

    let [cx1, cx2, cx3] = control(xs);
    let [cy1, cy2, cy3] = control(ys);

    path.push_str(&format!("C{cx1},{cy1},{cx2},{cy2},{cx3},{cy3}"));
  }

  path.push_str(&format!("L{},{}", last.0, last.1));

  path
}

fn linear(points: &[(f64, f64)]) -> String {
  let mut path = String::new();

  for (index, (x, y)) in points.iter().enumerate() {
    path.push(if index == 0 { 'M' } else { 'L' });
    path.push_str(&format!("{x},{y}"));
  }

  path
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_input_has_no_path() {
    assert_eq!(basis_path(&[]), None);
  }

  #[test]
  fn linear_joins_points() {
    assert_eq!(
      linear(&[(0.0, 0.0), (10.0, 5.0), (20.0, 2.5)]),
      "M0,0L10,5L20,2.5"
    );
  }

  #[test]
  fn basis_falls_back_to_linear_for_short_input() {
    assert_eq!(basis_path(&[(1.0, 2.0)]).unwrap(), "M1,2");
    assert_eq!(basis_path(&[(0.0, 0.0), (12.0, 0.0)]).unwrap(), "M0,0L12,0");
  }

  #[test]
  fn basis_emits_bezier_segments_between_endpoints() {
    assert_eq!(
      basis_path(&[(0.0, 0.0), (6.0, 6.0), (12.0, 0.0)]).unwrap(),
      "M0,0L1,1C2,2,4,4,6,4C8,4,10,2,11,1L12,0"
    );
  }

  #[test]
  fn basis_has_one_segment_per_point_after_the_first() {
    let points = (0..24)
      .map(|index| (f64::from(index) * 10.0, f64::from(index % 3)))
      .collect::<Vec<(f64, f64)>>();

    let path = basis_path(&points).unwrap();

    assert!(path.starts_with("M0,0L"));
    assert!(path.ends_with("L230,2"));
    assert_eq!(path.matches('C').count(), 23);
  }
}
