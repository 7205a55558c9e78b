use std::io::Write;
use std::time::Duration;

use tracing::debug;

use crate::display::Display;
use crate::errors::Result;
use crate::pipeline::Pipeline;
use crate::provider::PriceProvider;
use crate::time_utils;

/// Print once, or redraw on a fixed interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    OneShot,
    Watch(Duration),
}

impl Mode {
    /// A zero interval means print once
    pub fn from_interval(interval: Duration) -> Self {
        if interval.is_zero() {
            Mode::OneShot
        } else {
            Mode::Watch(interval)
        }
    }
}

pub struct Driver<P, W: Write> {
    pipeline: Pipeline<P>,
    out: W,
}

impl<P: PriceProvider, W: Write> Driver<P, W> {
    pub fn new(pipeline: Pipeline<P>, out: W) -> Self {
        Self { pipeline, out }
    }

    pub async fn run(&mut self, mode: Mode) -> Result<()> {
        match mode {
            Mode::OneShot => self.run_once().await,
            Mode::Watch(interval) => self.run_watch(interval).await,
        }
    }

    /// Print a single ticker line followed by a newline
    pub async fn run_once(&mut self) -> Result<()> {
        let line = self.pipeline.pass().await?;
        writeln!(self.out, "{line}")?;
        self.out.flush()?;
        Ok(())
    }

    /// Clear the screen and redraw after every `interval`; only returns on error
    pub async fn run_watch(&mut self, interval: Duration) -> Result<()> {
        let mut drawn = 0usize;

        loop {
            self.draw_frame().await?;
            drawn += 1;

            debug!("Frame {drawn} drawn, next in {interval:?}");
            tokio::time::sleep(interval).await;
        }
    }

    /// Run one pass and replace the screen with a timestamp and the ticker line
    pub async fn draw_frame(&mut self) -> Result<()> {
        // Fetch before touching the screen so a fatal error leaves the last frame intact
        let line = self.pipeline.pass().await?;

        let mut display = Display::new(&mut self.out);
        display.clear();
        display.move_cursor(1, 1);
        display.println(&time_utils::now_timestamp());
        display.print(&line);
        display.flush()?;
        Ok(())
    }

    pub fn pipeline(&self) -> &Pipeline<P> {
        &self.pipeline
    }

    pub fn into_output(self) -> W {
        self.out
    }
}
