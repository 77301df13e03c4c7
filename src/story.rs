use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct Story {
  pub(crate) kids: Option<Vec<u64>>,
  pub(crate) score: Option<u64>,
  pub(crate) title: String,
}

impl Story {
  pub(crate) fn comment_count(&self) -> usize {
    self.kids.as_ref().map_or(0, Vec::len)
  }
}
