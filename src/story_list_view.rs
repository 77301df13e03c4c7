use super::*;

pub(crate) struct StoryListView;

impl StoryListView {
  fn entry(rank: usize, story: &Story) -> Result<Element, RenderInputError> {
    let score = story.score.ok_or(RenderInputError::MissingScore { rank })?;

    let comments = u64::try_from(story.comment_count()).unwrap_or(u64::MAX);

    let block = Element::new("div")
      .class("story-block")
      .child(
        Element::new("span")
          .class("story-title")
          .text(story.title.as_str()),
      )
      .child(
        Element::new("span")
          .class("story-comments")
          .text(pluralize(comments, "comment", "comments")),
      )
      .child(
        Element::new("span")
          .class("story-votes")
          .text(pluralize(score, "vote", "votes")),
      );

    Ok(
      Element::new("li")
        .child(Element::new("div").class("story-number").text(rank.to_string()))
        .child(block),
    )
  }

  pub(crate) fn render(stories: &[Story]) -> Result<Node, RenderInputError> {
    let entries = stories
      .iter()
      .enumerate()
      .map(|(index, story)| Self::entry(index + 1, story))
      .collect::<Result<Vec<Element>, RenderInputError>>()?;

    Ok(Element::new("ol").class("hn-top-stories").extend(entries).into())
  }
}

#[cfg(test)]
mod tests {
  use {super::*, serde_json::json};

  fn stories(value: Value) -> Vec<Story> {
    serde_json::from_value(value).unwrap()
  }

  fn texts(node: &Node, class: &str) -> Vec<String> {
    node
      .find_all("span")
      .into_iter()
      .chain(node.find_all("div"))
      .filter(|element| element.attribute("class") == Some(class))
      .map(|element| Node::from(element.clone()).text_content())
      .collect()
  }

  #[test]
  fn renders_one_item_per_story_in_order() {
    let node = StoryListView::render(&stories(json!([
      { "title": "First", "score": 10, "kids": [1, 2] },
      { "title": "Second", "score": 5 },
      { "title": "Third", "score": 1, "kids": [7] },
    ])))
    .unwrap();

    assert_eq!(node.find_all("ol").len(), 1);
    assert_eq!(node.find_all("li").len(), 3);
    assert_eq!(texts(&node, "story-number"), vec!["1", "2", "3"]);
    assert_eq!(texts(&node, "story-title"), vec!["First", "Second", "Third"]);
  }

  #[test]
  fn labels_follow_singular_and_plural_rules() {
    let node = StoryListView::render(&stories(json!([
      { "title": "a", "score": 1, "kids": [1] },
      { "title": "b", "score": 0, "kids": [] },
      { "title": "c", "score": 2, "kids": [1, 2] },
      { "title": "d", "score": 12 },
    ])))
    .unwrap();

    assert_eq!(
      texts(&node, "story-comments"),
      vec!["1 comment", "0 comments", "2 comments", "0 comments"]
    );

    assert_eq!(
      texts(&node, "story-votes"),
      vec!["1 vote", "0 votes", "2 votes", "12 votes"]
    );
  }

  #[test]
  fn titles_are_rendered_as_text() {
    let node = StoryListView::render(&stories(json!([
      { "title": "<img src=x onerror=alert(1)>", "score": 3 },
    ])))
    .unwrap();

    let html = node.to_html();

    assert!(!html.contains("<img"));
    assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
  }

  #[test]
  fn empty_input_renders_an_empty_list() {
    let node = StoryListView::render(&[]).unwrap();

    assert_eq!(node.to_html(), r#"<ol class="hn-top-stories"></ol>"#);
  }

  #[test]
  fn missing_score_is_a_render_input_error() {
    let result = StoryListView::render(&stories(json!([
      { "title": "a", "score": 1 },
      { "title": "b" },
    ])));

    assert!(matches!(
      result,
      Err(RenderInputError::MissingScore { rank: 2 })
    ));
  }
}
