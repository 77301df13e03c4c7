use {
  anyhow::{Context, bail},
  app::App,
  arguments::Arguments,
  axis::Axis,
  bridge::EventBridge,
  channel::Channel,
  chrono::{DateTime, Datelike, FixedOffset, Local, Months, Offset, Utc},
  clap::Parser,
  clock::{Clock, ClockTicker},
  config::Config,
  crossterm::style::Stylize,
  decode::decode_payload,
  document::Document,
  error::{BridgeError, DecodeError, RenderInputError},
  event::Event,
  hourly_sample::{HourlySample, WeatherReport},
  line::basis_path,
  message::Message,
  node::{Element, Node},
  scale::{LinearScale, TimeScale},
  serde::{
    Deserialize, Deserializer,
    de::{self, Unexpected},
  },
  serde_json::Value,
  std::{
    backtrace::BacktraceStatus,
    cmp::{max, min},
    collections::BTreeMap,
    env,
    fmt::{self, Display, Formatter},
    fs,
    io::{self, IsTerminal},
    iter::once,
    path::{Path, PathBuf},
    process,
    str::FromStr,
    string::FromUtf8Error,
    time::Duration,
  },
  story::Story,
  story_list_view::StoryListView,
  thiserror::Error,
  tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, BufReader},
    signal,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
    task::JoinHandle,
    time::{self, MissedTickBehavior},
  },
  top_comment::TopComment,
  top_comment_view::TopCommentView,
  tracing::{debug, info, warn},
  tracing_subscriber::EnvFilter,
  transport::Transport,
  utils::{deserialize_probability, pluralize, sanitize_comment, truncate},
  weather_chart::WeatherChart,
  zone::Zone,
};

mod app;
mod arguments;
mod axis;
mod bridge;
mod channel;
mod clock;
mod config;
mod decode;
mod document;
mod error;
mod event;
mod hourly_sample;
mod line;
mod message;
mod node;
mod scale;
mod story;
mod story_list_view;
mod top_comment;
mod top_comment_view;
mod transport;
mod utils;
mod weather_chart;
mod zone;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_logging() {
  let filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .init();
}

async fn run() -> Result {
  initialize_logging();

  let config = Config::from_arguments(Arguments::parse())
    .context("invalid configuration")?;

  App::new(config).run().await
}

/// Runs `future` on a current-thread runtime. Blocking reads such as stdin
/// can't be cancelled, so shutdown does not wait for them.
fn block_on<F: Future>(future: F) -> Result<F::Output> {
  let runtime = tokio::runtime::Builder::new_current_thread()
    .enable_all()
    .build()
    .context("could not start runtime")?;

  let output = runtime.block_on(future);

  runtime.shutdown_background();

  Ok(output)
}

fn main() {
  if let Err(error) = block_on(run()).and_then(|result| result) {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}

#[cfg(test)]
mod tests {
  use {super::*, std::time::Instant};

  #[test]
  fn block_on_does_not_wait_for_blocked_readers() {
    let started = Instant::now();

    let (_sender, receiver) = std::sync::mpsc::channel::<()>();

    let output = block_on(async move {
      let _reader = tokio::task::spawn_blocking(move || {
        receiver.recv_timeout(Duration::from_secs(30))
      });

      time::sleep(Duration::from_millis(10)).await;

      "done"
    })
    .unwrap();

    assert_eq!(output, "done");
    assert!(started.elapsed() < Duration::from_secs(10));
  }
}
