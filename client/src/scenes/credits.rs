use std::time::Duration;

use egui_sdl2::egui::{self, Pos2};
use sdl2::{event::Event, pixels::Color, render::Canvas, video::Window};

use crate::{
    scenes::scene::{Scene, SceneType},
    state::AppState,
};

const LINKS: &[(&str, &str)] = &[
    ("Facebook", "https://facebook.com/lordtsarcasm"),
    (
        "Spotify",
        "https://open.spotify.com/artist/0tIXtsoLoRKrNEMiwvIkdw",
    ),
    (
        "Apple Music",
        "https://music.apple.com/us/artist/lord-tsarcasm/1719674552",
    ),
    ("YouTube", "https://www.youtube.com/@lordtsarcasm"),
    ("Suno", "https://suno.com/@lordtsarcasm"),
];

/// Attribution panel.
pub struct CreditsScene {}

impl CreditsScene {
    pub fn new() -> Self {
        Self {}
    }
}

impl Scene for CreditsScene {
    fn handle_event(&mut self, _app_state: &mut AppState, _event: &Event) -> Option<SceneType> {
        None
    }

    fn update(&mut self, _app_state: &mut AppState, _dt: Duration) -> Option<SceneType> {
        None
    }

    fn render_world(
        &mut self,
        _app_state: &mut AppState,
        canvas: &mut Canvas<Window>,
    ) -> Result<(), String> {
        canvas.set_draw_color(Color::RGB(18, 18, 18));
        canvas.clear();
        Ok(())
    }

    fn render_ui(&mut self, _app_state: &mut AppState, ctx: &egui::Context) -> Option<SceneType> {
        let mut next = None;

        egui::Window::new("Credits")
            .default_width(340.0)
            .fixed_pos(Pos2::new(230.0, 140.0))
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.heading("Built by Lord Tsarcasm");
                ui.add_space(8.0);

                egui::ScrollArea::vertical().max_height(220.0).show(ui, |ui| {
                    for (label, url) in LINKS {
                        ui.hyperlink_to(*label, *url);
                    }
                    ui.add_space(10.0);
                    ui.label(
                        "Special thanks to suno.ai, websim.ai, Claude, Claude-desktop, \
                         Windsurf, and ChatGPT for being the tools used to build this project.",
                    );
                });

                ui.add_space(10.0);
                if ui
                    .add(egui::Button::new("Back").min_size([120.0, 32.0].into()))
                    .clicked()
                {
                    next = Some(SceneType::Menu);
                }
            });

        next
    }
}
