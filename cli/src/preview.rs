//! Real-time headless preview.
//!
//! Drives the page's virtual timers from the tokio clock and prints each
//! system log line as it is appended. Ctrl+C unloads the page.

use anyhow::{Context, Result};
use folio_core::{ContentStore, SiteConfig};
use folio_runtime::{Page, Viewport};
use std::future::Future;
use std::time::Duration;
use tokio::time::{Instant, sleep_until};

pub async fn run_preview(
    config: SiteConfig,
    content: ContentStore,
    seconds: Option<u64>,
    width: f64,
) -> Result<()> {
    let mut page = Page::with_shell(content, config).with_viewport(Viewport::new(width, 800.0));
    page.bootstrap().context("Failed to bootstrap page")?;

    println!("🚀 Previewing portfolio (width {width})");
    println!("   Press Ctrl+C to stop");
    println!();

    let feed = drive(
        &mut page,
        seconds.map(Duration::from_secs),
        tokio::signal::ctrl_c(),
    )
    .await;

    page.unload();
    println!();
    println!(
        "Stopped after {} line(s), log cleared {} time(s)",
        feed.printed, feed.clears
    );
    Ok(())
}

/// Runs the page's timers in real time until `limit` elapses, the timer
/// table empties or `shutdown` resolves.
async fn drive<F: Future>(page: &mut Page, limit: Option<Duration>, shutdown: F) -> LineFeed {
    let started = Instant::now();
    let mut feed = LineFeed::default();
    tokio::pin!(shutdown);

    loop {
        let Some(next) = page.scheduler().next_due() else {
            println!("Nothing left to run.");
            break;
        };
        let wake = match limit {
            Some(limit) => next.min(limit),
            None => next,
        };

        tokio::select! {
            _ = sleep_until(started + wake) => {}
            _ = &mut shutdown => {
                println!();
                println!("Interrupted.");
                break;
            }
        }
        if wake < next {
            break;
        }

        page.advance(next.saturating_sub(page.scheduler().now()));
        let lines = page.log_lines();
        let (cleared, fresh) = feed.take_new(&lines);
        if cleared {
            println!("   -- log cleared --");
        }
        for line in fresh {
            println!("   {line}");
        }
    }

    feed
}

/// Tracks how much of the log has been printed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct LineFeed {
    shown: usize,
    printed: usize,
    clears: usize,
}

impl LineFeed {
    /// Lines appended since the last call. A log shorter than last time was
    /// cleared in between; the flag reports it.
    fn take_new<'a>(&mut self, lines: &'a [String]) -> (bool, &'a [String]) {
        let cleared = lines.len() < self.shown;
        if cleared {
            self.shown = 0;
            self.clears += 1;
        }
        let fresh = &lines[self.shown..];
        self.shown = lines.len();
        self.printed += fresh.len();
        (cleared, fresh)
    }
}
