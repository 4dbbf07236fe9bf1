//! The interactive demo: menu loop and animated runs.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use sortviz_core::seed::{resolve_seed, rng_for};
use sortviz_core::{
    DelayConfig, RunController, RunSpec, Selection, SequenceGenerator, SortStats, SortvizConfig,
    Step, StepControl, StepSink,
};
use tracing::{debug, info, warn};

use crate::color::ColorMode;
use crate::error::TuiError;
use crate::input::{Input, LineInput};
use crate::screen::{MenuView, Screen};
use crate::terminal::TerminalBackend;
use crate::theme::Theme;

/// How a run ended, from the app's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEnd {
    /// Completed, or stopped with `q`/`Esc`: back to the menu.
    Menu,
    /// `Ctrl+C`: leave the program.
    Exit,
}

/// Demo state: data, settings and the off-screen frame.
pub struct App {
    controller: RunController<i32>,
    generator: SequenceGenerator<i32>,
    rng: StdRng,
    delays: DelayConfig,
    screen: Screen,
    header: String,
    line: LineInput,
    message: Option<String>,
    last_run: Option<(RunSpec, SortStats)>,
}

impl App {
    /// Build from a loaded configuration. Fails on an invalid range or
    /// theme color.
    pub fn new(config: &SortvizConfig, color_mode: ColorMode) -> Result<Self, TuiError> {
        let generator = config.generator()?;
        let theme = Theme::from_config(&config.theme)?;
        let seed = resolve_seed(config.sequence.seed);
        let mut rng = rng_for(seed);
        let data = generator.generate(&mut rng);
        info!(len = data.len(), ?seed, ?color_mode, "generated sequence");

        let (low, high) = generator.bounds();
        let seed_note = seed.map(|s| format!("  seed {s}")).unwrap_or_default();
        let header = format!(
            " sortviz  {} values in {low}..={high}{seed_note}  [r] new data  [q] quit",
            generator.len()
        );

        Ok(Self {
            controller: RunController::new(data),
            generator,
            rng,
            delays: config.delays,
            screen: Screen::new(0, 0, color_mode, theme),
            header,
            line: LineInput::default(),
            message: None,
            last_run: None,
        })
    }

    /// The data every run starts from.
    #[must_use]
    pub fn data(&self) -> &[i32] {
        self.controller.original()
    }

    /// Statistics of the most recent run.
    #[must_use]
    pub const fn last_run(&self) -> Option<(RunSpec, SortStats)> {
        self.last_run
    }

    /// The frame as last painted.
    #[must_use]
    pub const fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Menu loop: prompt, run, repeat until quit.
    pub fn run_menu<B: TerminalBackend>(&mut self, backend: &mut B) -> Result<(), TuiError> {
        loop {
            self.screen.sync_size(&*backend)?;
            let view = MenuView {
                header: &self.header,
                data: self.controller.original(),
                input: self.line.as_str(),
                message: self.message.as_deref(),
                last_run: self.last_run,
            };
            self.screen.paint_menu(&view);
            self.screen.present(&mut *backend)?;

            match Input::from_event(backend.read_event()?) {
                Input::Text(text) => self.line.push_str(&text),
                Input::Backspace => self.line.backspace(),
                Input::Regenerate => {
                    self.controller.regenerate(&self.generator, &mut self.rng);
                    self.message = None;
                }
                Input::Quit | Input::Interrupt => return Ok(()),
                Input::Submit => {
                    let typed = self.line.take();
                    match typed.parse::<Selection>() {
                        Ok(Selection::Quit) => return Ok(()),
                        Ok(Selection::Run(spec)) => {
                            self.message = None;
                            if self.run(&mut *backend, spec)? == RunEnd::Exit {
                                return Ok(());
                            }
                        }
                        Err(err) => {
                            warn!(%err, "rejected menu input");
                            self.message = Some(format!(
                                "{err}. Enter a number from 0 to {}.",
                                Selection::MAX_OPTION
                            ));
                        }
                    }
                }
                Input::Resize | Input::Ignore => {}
            }
        }
    }

    /// Animate one run. The working data is reset before and after.
    pub fn run<B: TerminalBackend>(
        &mut self,
        backend: &mut B,
        spec: RunSpec,
    ) -> Result<RunEnd, TuiError> {
        let mut sink = FrameSink {
            backend,
            screen: &mut self.screen,
            spec,
            delay: self.delays.for_algorithm(spec.algorithm),
            steps: 0,
            end: RunEnd::Menu,
            error: None,
        };
        let report = self.controller.run(spec, &mut sink);
        if let Some(err) = sink.error {
            return Err(err);
        }
        let end = sink.end;
        debug!(%spec, ?end, sorted = spec.order.is_sorted(&report.result), "run returned");
        self.last_run = Some((spec, report.stats));
        Ok(end)
    }
}

/// Draws each step and paces the animation.
struct FrameSink<'a, B> {
    backend: &'a mut B,
    screen: &'a mut Screen,
    spec: RunSpec,
    delay: Duration,
    steps: usize,
    end: RunEnd,
    /// First terminal error; the run is stopped when one occurs.
    error: Option<TuiError>,
}

impl<B: TerminalBackend> FrameSink<'_, B> {
    fn frame(&mut self, step: Step<'_, i32>) -> Result<StepControl, TuiError> {
        self.steps += 1;
        self.screen.sync_size(&*self.backend)?;
        self.screen.paint_step(self.spec, step, self.steps);
        self.screen.present(&mut *self.backend)?;
        self.pause()
    }

    /// Wait out the step delay while watching for stop keys.
    fn pause(&mut self) -> Result<StepControl, TuiError> {
        let deadline = Instant::now() + self.delay;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if !self.backend.poll(remaining)? {
                return Ok(StepControl::Continue);
            }
            let input = Input::from_event(self.backend.read_event()?);
            if input.stops_run() {
                if input == Input::Interrupt {
                    self.end = RunEnd::Exit;
                }
                info!(spec = %self.spec, steps = self.steps, ?input, "run stopped");
                return Ok(StepControl::Stop);
            }
            // Resizes and other keys are picked up by the next frame.
        }
    }
}

impl<B: TerminalBackend> StepSink<i32> for FrameSink<'_, B> {
    fn step(&mut self, step: Step<'_, i32>) -> StepControl {
        match self.frame(step) {
            Ok(control) => control,
            Err(err) => {
                self.error = Some(err);
                StepControl::Stop
            }
        }
    }
}
