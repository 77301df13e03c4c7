use super::*;

pub(crate) struct TopCommentView;

impl TopCommentView {
  pub(crate) fn render(top: &TopComment) -> Node {
    Element::new("div")
      .class("hn-top-comment")
      .child(Element::new("h2").text(top.story.title.as_str()))
      .child(Element::new("p").text(sanitize_comment(&top.comment.text)))
      .into()
  }
}

#[cfg(test)]
mod tests {
  use {super::*, serde_json::json};

  fn render(value: Value) -> Node {
    TopCommentView::render(&serde_json::from_value(value).unwrap())
  }

  #[test]
  fn renders_heading_and_paragraph() {
    let node = render(json!({
      "story": { "title": "T" },
      "comment": { "text": "C" },
    }));

    let headings = node.find_all("h2");
    let paragraphs = node.find_all("p");

    assert_eq!(headings.len(), 1);
    assert_eq!(paragraphs.len(), 1);
    assert!(Node::from(headings[0].clone()).text_content().contains('T'));
    assert!(Node::from(paragraphs[0].clone()).text_content().contains('C'));
  }

  #[test]
  fn comment_markup_is_flattened_to_text() {
    let node = render(json!({
      "story": { "title": "Ask HN", "score": 40, "kids": [1] },
      "comment": { "text": "<p>I&#x27;d say <i>yes</i>" },
    }));

    assert_eq!(
      node.to_html(),
      r#"<div class="hn-top-comment"><h2>Ask HN</h2><p>I'd say yes</p></div>"#
    );
  }
}
