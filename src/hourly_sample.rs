use super::*;

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct HourlySample {
  #[serde(
    default,
    deserialize_with = "deserialize_probability",
    rename = "precipProbability"
  )]
  pub(crate) precip_probability: f64,
  pub(crate) time: i64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Hourly {
  pub(crate) data: Vec<HourlySample>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WeatherReport {
  pub(crate) hourly: Hourly,
}

impl WeatherReport {
  pub(crate) fn into_samples(self, limit: usize) -> Vec<HourlySample> {
    let mut samples = self.hourly.data;
    samples.truncate(limit);
    samples
  }
}
