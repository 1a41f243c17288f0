//! The frame loop: clear, draw every face, present, wait.

use std::thread;
use std::time::Duration;

use tracing::{debug, error, info};

use crate::{ColorTheme, Grid, RenderError, Renderer};

/// What the loop should do after waiting for the next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pace {
    Continue,
    /// The surface asked to close.
    Stop,
}

/// Paces the loop between frames.
pub trait FramePacer {
    /// Block for about `delay` and report whether to keep rendering.
    fn wait(&mut self, delay: Duration) -> Result<Pace, RenderError>;
}

/// Pacer that sleeps the thread and never stops.
#[derive(Debug, Default, Clone, Copy)]
pub struct SleepPacer;

impl FramePacer for SleepPacer {
    fn wait(&mut self, delay: Duration) -> Result<Pace, RenderError> {
        thread::sleep(delay);
        Ok(Pace::Continue)
    }
}

/// Lifecycle of a [`RenderLoop`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopState {
    /// Created, no frame drawn yet.
    Initializing,
    Running,
    /// Ended by the surface's close request.
    Stopped,
    /// Ended by a render error, holding its message.
    Terminated(String),
}

/// Draws a [`Grid`] onto a [`Renderer`] once per frame.
#[derive(Debug)]
pub struct RenderLoop<'g> {
    grid: &'g Grid,
    theme: ColorTheme,
    state: LoopState,
    frames: u64,
}

impl<'g> RenderLoop<'g> {
    pub fn new(grid: &'g Grid, theme: ColorTheme) -> Self {
        Self {
            grid,
            theme,
            state: LoopState::Initializing,
            frames: 0,
        }
    }

    pub fn state(&self) -> &LoopState {
        &self.state
    }

    /// Frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Render one complete frame.
    pub fn frame<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> Result<(), RenderError> {
        renderer.set_draw_color(self.theme.background());
        renderer.clear()?;
        self.grid.draw(renderer, self.theme.face_color())?;
        renderer.present()?;
        self.frames += 1;
        Ok(())
    }

    /// Render a single frame and leave the loop in `Stopped`.
    pub fn render_once<R: Renderer + ?Sized>(
        &mut self,
        renderer: &mut R,
    ) -> Result<(), RenderError> {
        self.state = LoopState::Running;
        match self.frame(renderer) {
            Ok(()) => {
                self.state = LoopState::Stopped;
                Ok(())
            }
            Err(err) => Err(self.terminate(err)),
        }
    }

    /// Render frames until the pacer stops the loop or a frame fails.
    pub fn run<R, P>(&mut self, renderer: &mut R, pacer: &mut P) -> Result<(), RenderError>
    where
        R: Renderer + ?Sized,
        P: FramePacer + ?Sized,
    {
        let delay = self.grid.layout().frame_delay();
        self.state = LoopState::Running;
        info!(
            columns = self.grid.columns(),
            rows = self.grid.rows(),
            ?delay,
            "render loop running"
        );

        loop {
            if let Err(err) = self.frame(renderer) {
                return Err(self.terminate(err));
            }
            match pacer.wait(delay) {
                Ok(Pace::Continue) => {}
                Ok(Pace::Stop) => {
                    debug!(frames = self.frames, "render loop stopped");
                    self.state = LoopState::Stopped;
                    return Ok(());
                }
                Err(err) => return Err(self.terminate(err)),
            }
        }
    }

    fn terminate(&mut self, err: RenderError) -> RenderError {
        error!(frames = self.frames, %err, "render loop terminated");
        self.state = LoopState::Terminated(err.to_string());
        err
    }
}
