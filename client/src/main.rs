use std::path::Path;
use std::process;
use std::time::{Duration, Instant};

use sdl2::mixer::{AUDIO_S16LSB, DEFAULT_CHANNELS};

use crate::scenes::scene::{SceneManager, SceneType};
use crate::state::AppState;

mod filepaths;
mod music;
mod scenes;
mod settings;
mod state;

fn main() -> Result<(), String> {
    fh_core::init_logging(
        log::LevelFilter::Info,
        Some(Path::new("farhaven_client.log")),
    )
    .unwrap_or_else(|e| {
        eprintln!("Failed to initialize logger: {}. Exiting.", e);
        process::exit(1);
    });

    let client_settings = settings::load_settings();

    log::info!("Initializing SDL2 contexts...");
    let sdl_context = sdl2::init()?;
    let _audio_subsystem = sdl_context.audio()?;

    let frequency = 44_100;
    let format = AUDIO_S16LSB;
    let channels = DEFAULT_CHANNELS; // Stereo
    let chunk_size = 1_024;
    sdl2::mixer::open_audio(frequency, format, channels, chunk_size)?;
    sdl2::mixer::init(sdl2::mixer::InitFlag::OGG)?;

    log::info!("Creating window and event pump...");
    let video = sdl_context.video()?;
    let mut window = video
        .window("Farhaven", 800, 600)
        .position_centered()
        .allow_highdpi()
        .resizable()
        .build()
        .map_err(|e| e.to_string())?;

    let _ = window.set_minimum_size(800, 600);
    log::info!("Current video driver: {}", video.current_video_driver());

    let mut event_pump = sdl_context.event_pump()?;

    log::info!("Initializing canvas...");
    let mut egui = egui_sdl2::EguiCanvas::new(window);

    let background_music = music::MusicPlayer::new(
        filepaths::get_music_file(),
        client_settings.music_enabled,
    );
    let mut app_state = AppState::new(client_settings, background_music);

    let mut scene_manager = SceneManager::new();
    let mut last_frame = Instant::now();

    'running: loop {
        let now = Instant::now();
        let dt = now.duration_since(last_frame);
        last_frame = now;

        // Poll events once, handle quit and forward to egui
        for event in event_pump.poll_iter() {
            if let sdl2::event::Event::Quit { .. } = event {
                scene_manager.request_scene_change(SceneType::Exit, &mut app_state);
            }

            let _ = egui.on_event(&event);

            scene_manager.handle_event(&mut app_state, &event);

            if scene_manager.get_scene() == SceneType::Exit {
                break 'running;
            }
        }

        scene_manager.update(&mut app_state, dt);
        scene_manager.render_world(&mut app_state, &mut egui.painter.canvas);

        egui.run(|ctx| {
            scene_manager.render_ui(&mut app_state, ctx);
        });

        if scene_manager.get_scene() == SceneType::Exit {
            break 'running;
        }

        egui.paint();
        egui.present();

        std::thread::sleep(Duration::from_millis(16));
    }

    Ok(())
}
