use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct CommentBody {
  pub(crate) text: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TopComment {
  pub(crate) comment: CommentBody,
  pub(crate) story: Story,
}
