use super::*;

const STYLESHEET: &str = "\
body { background: #000; color: #fff; font-family: sans-serif; margin: 2em; }
.current-time { font-size: 4em; font-weight: 200; }
.hn-top-stories { list-style: none; padding: 0; }
.hn-top-stories li { display: flex; margin: 0.5em 0; }
.story-number { color: #888; font-size: 1.5em; width: 2em; }
.story-block span { display: block; }
.story-comments, .story-votes { color: #888; font-size: 0.8em; }
.hn-top-comment p { color: #ccc; }
svg { font: 10px sans-serif; }
.axis path, .axis line { fill: none; shape-rendering: crispEdges; stroke: #fff; }
.axis text { fill: #fff; }
.line { fill: none; stroke: steelblue; stroke-width: 1.5px; }
";

/// The page every renderer appends to. Nodes are never replaced; a second
/// story list shows up below the first.
#[derive(Default)]
pub(crate) struct Document {
  clock: String,
  nodes: Vec<Node>,
}

impl Document {
  pub(crate) fn append(&mut self, node: Node) {
    self.nodes.push(node);
  }

  #[cfg(test)]
  pub(crate) fn len(&self) -> usize {
    self.nodes.len()
  }

  pub(crate) fn new() -> Self {
    Self::default()
  }

  /// Updates the displayed time, returning whether it changed.
  pub(crate) fn set_clock(&mut self, clock: String) -> bool {
    if self.clock == clock {
      return false;
    }

    self.clock = clock;

    true
  }

  pub(crate) fn to_html(&self) -> String {
    let mut html = String::from(
      "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
       <meta http-equiv=\"refresh\" content=\"1\">\n<title>mirror</title>\n\
       <style>\n",
    );

    html.push_str(STYLESHEET);
    html.push_str("</style>\n</head>\n<body>\n");

    Node::from(Element::new("div").class("current-time").text(self.clock.as_str()))
      .write_html(&mut html);

    for node in &self.nodes {
      html.push('\n');
      node.write_html(&mut html);
    }

    html.push_str("\n</body>\n</html>\n");

    html
  }

  pub(crate) fn write(&self, path: &Path) -> Result {
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent)?;
    }

    let staging = path.with_extension("html.tmp");

    fs::write(&staging, self.to_html())?;

    fs::rename(&staging, path)?;

    Ok(())
  }
}
