//! A walk through the first OpenGL exercises: a triangle from a vertex
//! buffer, a rectangle through an index buffer, per-vertex colors, and a
//! uniform-driven color animation. Switch exercises with the number keys,
//! quit with Escape.

use std::time::Instant;

use glow::HasContext;

use crate::abs::App;
use crate::config::Config;
use crate::other::{KeyboardState, UpdateContext};
use crate::scenes::SceneManager;

mod abs;
mod config;
mod other;
mod scenes;

fn init_logging() {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(std::io::stdout())
        .apply()
        .unwrap();
}

fn main() {
    init_logging();
    log::info!("glstarter {}", env!("CARGO_PKG_VERSION"));

    let config = Config::load_or_default("config.json");

    let mut app = App::new(
        &config.window.title,
        config.window.width,
        config.window.height,
        config.window.fullscreen,
        config.window.vsync,
    );

    let (width, height) = app.window.drawable_size();
    unsafe {
        app.gl.viewport(0, 0, width as i32, height as i32);
    }

    let initial_scene = scenes::make_exercise(&app.gl, config.exercise, &config.shaders_dir)
        .unwrap_or_else(|err| {
            log::error!("Failed to load exercise {}: {err}", config.exercise);
            std::process::exit(1);
        });
    let mut scene_manager = SceneManager::new(initial_scene);

    let mut keyboard_state = KeyboardState::default();
    let mut last_frame_time = Instant::now();

    'running: loop {
        let now = Instant::now();
        let delta_time = now.duration_since(last_frame_time).as_secs_f32();
        last_frame_time = now;

        keyboard_state.begin_frame();

        for event in app.event_pump.poll_iter() {
            match event {
                sdl2::event::Event::Quit { .. } => break 'running,
                sdl2::event::Event::Window {
                    win_event: sdl2::event::WindowEvent::Resized(width, height),
                    ..
                } => unsafe {
                    app.gl.viewport(0, 0, width, height);
                },
                sdl2::event::Event::KeyDown {
                    keycode: Some(keycode),
                    repeat: false,
                    ..
                } => {
                    keyboard_state.down.insert(keycode);
                    keyboard_state.pressed.insert(keycode);
                }
                sdl2::event::Event::KeyUp {
                    keycode: Some(keycode),
                    repeat: false,
                    ..
                } => {
                    keyboard_state.down.remove(&keycode);
                    keyboard_state.released.insert(keycode);
                }
                _ => {}
            }
        }

        let update_ctx = UpdateContext::new(&keyboard_state, delta_time);
        if !scene_manager.update(&app.gl, &update_ctx) {
            break 'running;
        }

        let [r, g, b, a] = config.clear_color;
        unsafe {
            app.gl.clear_color(r, g, b, a);
            app.gl.clear(glow::COLOR_BUFFER_BIT);
        }
        scene_manager.render(&app.gl);

        app.window.gl_swap_window();
    }
}
