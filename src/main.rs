//! Astro Invaders entry point
//!
//! Runs the simulation headless at a fixed timestep with the built-in demo
//! pilot at the controls. The display layer is whatever `Renderer` gets
//! installed here; by default the null renderer, with a periodic log line
//! standing in for a HUD.

use std::path::Path;
use std::time::{Duration, Instant};

use astro_invaders::consts::*;
use astro_invaders::platform::{EventSource, InputEvent, ScriptedEvents};
use astro_invaders::renderer::{Frame, NullRenderer, Renderer};
use astro_invaders::settings::Settings;
use astro_invaders::sim::{GameWorld, TickInput, tick};

/// Everything the driver owns between ticks
struct Game<R: Renderer> {
    world: GameWorld,
    input: TickInput,
    renderer: R,
    running: bool,
}

impl<R: Renderer> Game<R> {
    fn new(world: GameWorld, renderer: R) -> Self {
        Self {
            world,
            input: TickInput::default(),
            renderer,
            running: true,
        }
    }

    /// Drain pending events into the tick input. A quit event ends the
    /// loop instead of killing the process, so shutdown stays orderly.
    fn drain_events(&mut self, source: &mut impl EventSource) {
        while let Some(event) = source.poll() {
            if self.input.apply_event(event) {
                self.running = false;
            }
        }
    }

    /// One tick: update the world, hand the frame off, clear one-shots.
    fn step(&mut self) {
        tick(&mut self.world, &self.input, SIM_DT);
        let frame = Frame::capture(&self.world);
        self.renderer.present(&frame);
        self.input.clear_one_shot();
    }
}

struct DemoOptions {
    ticks: u64,
    fast: bool,
    screen: Option<(f32, f32)>,
}

fn parse_args() -> Result<DemoOptions, String> {
    let mut options = DemoOptions {
        ticks: 30 * TICK_RATE as u64,
        fast: false,
        screen: None,
    };

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--ticks" => {
                i += 1;
                let value = args.get(i).ok_or_else(|| "--ticks needs a value".to_string())?;
                options.ticks = value.parse().map_err(|_| format!("bad tick count: {value}"))?;
            }
            "--fast" => options.fast = true,
            "--screen" => {
                i += 1;
                let value = args.get(i).ok_or_else(|| "--screen needs WxH".to_string())?;
                let (w, h) = value
                    .split_once('x')
                    .ok_or_else(|| format!("bad screen size: {value}"))?;
                options.screen = Some((
                    w.parse().map_err(|_| format!("bad width: {w}"))?,
                    h.parse().map_err(|_| format!("bad height: {h}"))?,
                ));
            }
            other => return Err(format!("unknown argument: {other}")),
        }
        i += 1;
    }
    Ok(options)
}

fn main() {
    env_logger::init();

    let options = match parse_args() {
        Ok(options) => options,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("usage: astro-invaders [--ticks N] [--fast] [--screen WxH]");
            std::process::exit(2);
        }
    };

    let mut settings = Settings::load(Path::new("tuning.json"));
    if let Some((width, height)) = options.screen {
        settings.screen_width = width;
        settings.screen_height = height;
    }

    let world = GameWorld::new(settings);

    // Start the run the way a player would: a click on the Play button.
    // After that the demo pilot takes over, restarts included.
    let play_click = world.play_button.rect.center();
    let mut events = ScriptedEvents::new([(0, InputEvent::PointerClick(play_click))]);

    let mut game = Game::new(world, NullRenderer);
    game.input.autopilot = true;

    let tick_duration = Duration::from_secs_f32(SIM_DT);
    let mut ticks = 0u64;
    while game.running && ticks < options.ticks {
        let started = Instant::now();

        game.drain_events(&mut events);
        game.step();
        events.advance_tick();
        ticks += 1;

        if ticks % (5 * TICK_RATE as u64) == 0 {
            let stats = &game.world.stats;
            log::info!(
                "tick {}: score {} level {} ships {}",
                ticks,
                stats.score,
                stats.level,
                stats.ships_left
            );
        }

        if !options.fast {
            if let Some(remaining) = tick_duration.checked_sub(started.elapsed()) {
                std::thread::sleep(remaining);
            }
        }
    }

    let stats = &game.world.stats;
    println!(
        "demo finished after {} ticks: score {} (high {}), level {}",
        ticks, stats.score, stats.high_score, stats.level
    );
    if let Some(top) = game.world.highscores.top_score() {
        println!("best finished run this session: {top}");
    }
}
