// What you SEE:
// • A white page. Hold Left Mouse to paint with the current tool.
// • Tab cycles tools, Up/Down resizes the brush, Q/E cycles colors (or click a swatch).
// • Delete clears, Z undoes (press again to redo), U hides the bars, H shows help. ESC quits.

use sketchpad::canvas::Canvas;
use sketchpad::config::CanvasConfig;
use sketchpad::draw::{Command, Drawer, PointerTracker};
use sketchpad::error::Error;
use sketchpad::logging;
use sketchpad::present::{self, PresentationSink, Texture};
use sketchpad::ui::Ui;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

fn main() -> Result<(), Error> {
    let config = CanvasConfig::from_args()?;
    logging::init(config.debug_logging);

    if let Err(e) = run(&config) {
        error!("{e}");
        return Err(e);
    }
    Ok(())
}

fn run(config: &CanvasConfig) -> Result<(), Error> {
    /* --- Canvas + window setup ---
       Visual: window opens showing a blank page. */
    let mut canvas = Canvas::new(config)?;
    let mut drawer = Drawer::new(&config.window_title, config.width, config.height)?;
    info!(width = config.width, height = config.height, "canvas ready");

    /* --- Reusable screen texture ---
       Visual: this is the image you actually see each frame (canvas + overlays). */
    let mut frame = Texture::packed(config.width, config.height)?;

    let mut ui = Ui::new(config.width, config.height);
    ui.set_status("Welcome to Sketchpad!");
    let mut pointer = PointerTracker::default();

    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;

    /* ------------------------------ Main loop ------------------------------ */
    'frames: while drawer.is_open() {
        /* 1) Keys */
        let commands = drawer.commands();
        for &cmd in &commands {
            match cmd {
                Command::Quit => break 'frames,
                Command::ToggleHelp => ui.show_help = !ui.show_help,
                _ => {}
            }
        }

        // While help is open no key or click reaches the canvas. The pointer still ticks,
        // so a gesture held when help opened is released here and never resumes later.
        let contact = drawer.contact();
        if ui.show_help {
            if let Some(notice) = ui.pointer_frame(&mut canvas, &mut pointer, contact)? {
                ui.set_status(notice.to_string());
            }
            present::sync(canvas.surface(), &mut frame)?;
            ui.render_toolbar(&mut frame, canvas.tools());
            ui.render_palette(&mut frame, canvas.palette());
            ui.render_help(&mut frame);
            drawer.present(&frame)?;
            continue;
        }

        for cmd in commands {
            match cmd {
                Command::Canvas(event) => {
                    if let Some(notice) = canvas.handle(event)? {
                        ui.set_status(notice.to_string());
                    }
                }
                Command::ToggleUi => ui.toggle_bars(),
                Command::Quit | Command::ToggleHelp => {}
            }
        }

        /* 2) Pointer: palette pick, toolbar, or paint.
           Visual: strokes appear under the mouse; shapes wait for release. */
        if let Some(notice) = ui.pointer_frame(&mut canvas, &mut pointer, contact)? {
            ui.set_status(notice.to_string());
        }
        ui.tick();

        /* 3) Publish the page, then overlays on top of the copy. */
        present::sync(canvas.surface(), &mut frame)?;
        if let Some(p) = contact {
            ui.render_preview(&mut frame, canvas.tools(), p);
            ui.render_cursor(&mut frame, p, canvas.tools());
        }
        ui.render_toolbar(&mut frame, canvas.tools());
        ui.render_palette(&mut frame, canvas.palette());

        /* 4) Present (this is when the on-screen image updates). */
        drawer.present(&frame)?;

        /* 5) FPS once per second */
        frames_this_second += 1;
        let now = Instant::now();
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            debug!(fps = frames_this_second as f32 / secs, "frame rate");
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    info!("window closed");
    Ok(())
}
