//! Wiring between configuration, drivers and the render loop.

use clockwall_animation::{SystemClock, spawn_wave, start_continuous};
use clockwall_config::{Config, Mode};
use clockwall_core::{FramePacer, Grid, RenderError, RenderLoop, Renderer};
use tracing::{debug, info};

use crate::terminal::{CrosstermEvents, TerminalPacer, TerminalRenderer};

/// Run clockwall on the terminal until it is closed or fails.
///
/// The terminal is restored before this returns, on success or error.
pub fn run(config: &Config) -> color_eyre::Result<()> {
    let grid = Grid::new(config.layout());
    let mut renderer = TerminalRenderer::create(config.surface.width, config.surface.height)?;
    drive(config, &grid, &mut renderer, &mut TerminalPacer::new(CrosstermEvents))?;
    info!("clockwall finished");
    Ok(())
}

/// Start the drivers for `config.mode` and render `grid` until done.
pub fn drive<R, P>(
    config: &Config,
    grid: &Grid,
    renderer: &mut R,
    pacer: &mut P,
) -> Result<(), RenderError>
where
    R: Renderer + ?Sized,
    P: FramePacer + ?Sized,
{
    let mut render_loop = RenderLoop::new(grid, config.theme);
    match config.mode {
        Mode::Static => {
            for writer in grid.writers() {
                writer.show(config.tween.target_minute, config.tween.target_hour);
            }
            render_loop.render_once(renderer)?;
            pacer.wait(config.static_display())?;
            Ok(())
        }
        Mode::Tween => {
            let drivers = spawn_wave(grid, config.tween.target_minute, config.tween.target_hour);
            debug!(drivers = drivers.len(), "tween wave started");
            render_loop.run(renderer, pacer)
        }
        Mode::Continuous => {
            start_continuous(grid, SystemClock);
            render_loop.run(renderer, pacer)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use clockwall_core::{Pace, Point, Rgba, hour_angle, minute_angle};

    use super::*;

    /// Renderer that counts frames and can reject every circle.
    #[derive(Default)]
    struct CountingRenderer {
        frames: usize,
        circles: usize,
        reject: bool,
    }

    impl Renderer for CountingRenderer {
        fn set_draw_color(&mut self, _color: Rgba) {}

        fn clear(&mut self) -> Result<(), RenderError> {
            Ok(())
        }

        fn draw_aa_circle(&mut self, _center: Point, _radius: i32, _color: Rgba) -> bool {
            self.circles += 1;
            !self.reject
        }

        fn draw_aa_line(&mut self, _from: Point, _to: Point, _color: Rgba) -> bool {
            true
        }

        fn present(&mut self) -> Result<(), RenderError> {
            self.frames += 1;
            Ok(())
        }

        fn last_error(&self) -> String {
            "rejected".to_string()
        }
    }

    /// Pacer that records waits and stops after `frames` of them.
    struct StopAfter {
        frames: usize,
        waits: Vec<Duration>,
    }

    impl FramePacer for StopAfter {
        fn wait(&mut self, delay: Duration) -> Result<Pace, RenderError> {
            self.waits.push(delay);
            if self.waits.len() >= self.frames {
                Ok(Pace::Stop)
            } else {
                Ok(Pace::Continue)
            }
        }
    }

    fn config(mode: Mode) -> Config {
        let mut config = Config {
            mode,
            ..Config::default()
        };
        config.grid.columns = 3;
        config.grid.rows = 2;
        config
    }

    #[test]
    fn test_static_mode_renders_one_frame_and_holds_it() {
        let config = config(Mode::Static);
        let grid = Grid::new(config.layout());
        let mut renderer = CountingRenderer::default();
        let mut pacer = StopAfter {
            frames: 100,
            waits: Vec::new(),
        };
        drive(&config, &grid, &mut renderer, &mut pacer).unwrap();

        assert_eq!(renderer.frames, 1);
        assert_eq!(pacer.waits, vec![config.static_display()]);
        let angles = grid.cell(2, 1).unwrap().angles();
        assert_eq!(angles.minute, minute_angle(240.0));
        assert_eq!(angles.hour, hour_angle(9.0));
    }

    #[test]
    fn test_tween_mode_sets_targets_and_renders_until_stopped() {
        let config = config(Mode::Tween);
        let grid = Grid::new(config.layout());
        let mut renderer = CountingRenderer::default();
        let mut pacer = StopAfter {
            frames: 3,
            waits: Vec::new(),
        };
        drive(&config, &grid, &mut renderer, &mut pacer).unwrap();

        assert_eq!(renderer.frames, 3);
        assert_eq!(renderer.circles, 3 * 6);
        for (column, row) in grid.positions() {
            let cell = grid.cell(column, row).unwrap();
            assert_eq!(cell.minute(), 240.0);
            assert_eq!(cell.hour(), 9.0);
        }
    }

    #[test]
    fn test_continuous_mode_claims_every_cell() {
        let config = config(Mode::Continuous);
        let grid = Grid::new(config.layout());
        let mut renderer = CountingRenderer::default();
        let mut pacer = StopAfter {
            frames: 1,
            waits: Vec::new(),
        };
        drive(&config, &grid, &mut renderer, &mut pacer).unwrap();

        assert_eq!(renderer.frames, 1);
        assert!(grid.writers().is_empty());
    }

    #[test]
    fn test_rejected_primitive_aborts_first_frame() {
        let config = config(Mode::Tween);
        let grid = Grid::new(config.layout());
        let mut renderer = CountingRenderer {
            reject: true,
            ..Default::default()
        };
        let mut pacer = StopAfter {
            frames: 10,
            waits: Vec::new(),
        };
        let err = drive(&config, &grid, &mut renderer, &mut pacer).unwrap_err();

        assert_eq!(renderer.frames, 0);
        assert_eq!(renderer.circles, 1);
        assert!(pacer.waits.is_empty());
        assert_eq!(
            err.to_string(),
            "could not draw clock at (0, 0): could not draw circle: rejected"
        );
    }
}
