use super::*;

#[derive(Debug)]
pub(crate) struct Config {
  pub(crate) input: Option<PathBuf>,
  pub(crate) open: bool,
  pub(crate) output: PathBuf,
  pub(crate) tick_interval: Duration,
  pub(crate) zone: Zone,
}

impl Config {
  pub(crate) fn from_arguments(arguments: Arguments) -> Result<Self> {
    if arguments.tick_interval == 0 {
      bail!("tick interval must be greater than zero");
    }

    let output = match arguments.output {
      Some(path) => path,
      None => Self::output_path().context("could not resolve output path")?,
    };

    Ok(Self {
      input: arguments.input,
      open: arguments.open,
      output,
      tick_interval: Duration::from_millis(arguments.tick_interval),
      zone: if arguments.utc { Zone::Utc } else { Zone::Local },
    })
  }

  fn output_path() -> Result<PathBuf> {
    if let Ok(path) = env::var("MIRROR_OUTPUT_FILE") {
      return Ok(PathBuf::from(path));
    }

    let base_dir = if let Ok(dir) = env::var("XDG_DATA_HOME") {
      PathBuf::from(dir)
    } else if let Ok(home) = env::var("HOME") {
      PathBuf::from(home).join(".local").join("share")
    } else {
      env::current_dir()?.join(".local").join("share")
    };

    Ok(base_dir.join("mirror").join("index.html"))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn explicit_output_wins() {
    let config = Config::from_arguments(Arguments {
      output: Some(PathBuf::from("/tmp/page.html")),
      tick_interval: 100,
      utc: true,
      ..Arguments::default()
    })
    .unwrap();

    assert_eq!(config.output, PathBuf::from("/tmp/page.html"));
    assert_eq!(config.zone, Zone::Utc);
    assert_eq!(config.tick_interval, Duration::from_millis(100));
  }

  #[test]
  fn environment_overrides_default_location() {
    let path = env::temp_dir().join("mirror_config_test.html");

    // SAFETY: This is the only test that touches MIRROR_OUTPUT_FILE.
    unsafe {
      env::set_var("MIRROR_OUTPUT_FILE", &path);
    }

    let config = Config::from_arguments(Arguments {
      tick_interval: 100,
      ..Arguments::default()
    });

    // SAFETY: Restores the environment modified above.
    unsafe {
      env::remove_var("MIRROR_OUTPUT_FILE");
    }

    assert_eq!(config.unwrap().output, path);
  }

  #[test]
  fn zero_tick_interval_is_rejected() {
    let error = Config::from_arguments(Arguments {
      output: Some(PathBuf::from("page.html")),
      tick_interval: 0,
      ..Arguments::default()
    })
    .unwrap_err();

    assert_eq!(error.to_string(), "tick interval must be greater than zero");
  }
}
