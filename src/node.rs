/// A typed view node. Text is always escaped on output, so renderers never
/// splice upstream strings into markup.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Node {
  Element(Element),
  Text(String),
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Element {
  attributes: Vec<(&'static str, String)>,
  children: Vec<Node>,
  name: &'static str,
}

impl Element {
  pub(crate) fn attr(
    mut self,
    name: &'static str,
    value: impl ToString,
  ) -> Self {
    let value = value.to_string();

    match self.attributes.iter_mut().find(|(key, _)| *key == name) {
      Some((_, existing)) => *existing = value,
      None => self.attributes.push((name, value)),
    }

    self
  }

  #[cfg(test)]
  pub(crate) fn attribute(&self, name: &str) -> Option<&str> {
    self
      .attributes
      .iter()
      .find(|(key, _)| *key == name)
      .map(|(_, value)| value.as_str())
  }

  pub(crate) fn child(mut self, node: impl Into<Node>) -> Self {
    self.children.push(node.into());
    self
  }

  #[cfg(test)]
  pub(crate) fn children(&self) -> &[Node] {
    &self.children
  }

  pub(crate) fn class(self, value: &str) -> Self {
    self.attr("class", value)
  }

  pub(crate) fn extend<I>(mut self, nodes: I) -> Self
  where
    I: IntoIterator,
    I::Item: Into<Node>,
  {
    self.children.extend(nodes.into_iter().map(Into::into));
    self
  }

  #[cfg(test)]
  pub(crate) fn name(&self) -> &'static str {
    self.name
  }

  pub(crate) fn new(name: &'static str) -> Self {
    Self {
      attributes: Vec::new(),
      children: Vec::new(),
      name,
    }
  }

  pub(crate) fn text(self, text: impl Into<String>) -> Self {
    self.child(Node::Text(text.into()))
  }
}

impl From<Element> for Node {
  fn from(element: Element) -> Self {
    Node::Element(element)
  }
}

impl Node {
  /// Every element named `name` in document order, including `self`.
  #[cfg(test)]
  pub(crate) fn find_all(&self, name: &str) -> Vec<&Element> {
    let mut found = Vec::new();
    self.collect(name, &mut found);
    found
  }

  #[cfg(test)]
  fn collect<'a>(&'a self, name: &str, found: &mut Vec<&'a Element>) {
    if let Node::Element(element) = self {
      if element.name == name {
        found.push(element);
      }

      for child in &element.children {
        child.collect(name, found);
      }
    }
  }

  #[cfg(test)]
  pub(crate) fn text_content(&self) -> String {
    match self {
      Node::Text(text) => text.clone(),
      Node::Element(element) => element
        .children
        .iter()
        .map(Node::text_content)
        .collect(),
    }
  }

  pub(crate) fn to_html(&self) -> String {
    let mut html = String::new();
    self.write_html(&mut html);
    html
  }

  pub(crate) fn write_html(&self, out: &mut String) {
    match self {
      Node::Text(text) => {
        html_escape::encode_text_to_string(text, out);
      }
      Node::Element(element) => {
        out.push('<');
        out.push_str(element.name);

        for (key, value) in &element.attributes {
          out.push(' ');
          out.push_str(key);
          out.push_str("=\"");
          html_escape::encode_double_quoted_attribute_to_string(value, out);
          out.push('"');
        }

        out.push('>');

        for child in &element.children {
          child.write_html(out);
        }

        out.push_str("</");
        out.push_str(element.name);
        out.push('>');
      }
    }
  }
}
