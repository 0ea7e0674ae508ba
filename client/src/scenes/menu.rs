use std::time::Duration;

use egui_sdl2::egui::{self, Pos2};
use sdl2::{event::Event, pixels::Color, render::Canvas, video::Window};

use crate::{
    scenes::scene::{Scene, SceneType},
    state::AppState,
};

/// Entry scene: links to the minigame, the faction archives, and the
/// credits panel, and owns the background-music toggle.
pub struct MenuScene {}

impl MenuScene {
    pub fn new() -> Self {
        Self {}
    }
}

impl Scene for MenuScene {
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
        canvas.set_draw_color(Color::RGB(20, 20, 28));
        canvas.clear();
        Ok(())
    }

    fn render_ui(&mut self, app_state: &mut AppState, ctx: &egui::Context) -> Option<SceneType> {
        let mut next = None;

        egui::Window::new("Farhaven")
            .default_width(320.0)
            .fixed_pos(Pos2::new(240.0, 120.0))
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.heading("Farhaven");
                ui.label("Exploration terminal");
                ui.add_space(12.0);

                if ui
                    .add(egui::Button::new("Pattern matrix").min_size([200.0, 32.0].into()))
                    .clicked()
                {
                    next = Some(SceneType::Pattern);
                }

                ui.add_space(6.0);

                if ui
                    .add(egui::Button::new("Faction archives").min_size([200.0, 32.0].into()))
                    .clicked()
                {
                    next = Some(SceneType::Factions);
                }

                ui.add_space(6.0);

                if ui
                    .add(egui::Button::new("Credits").min_size([200.0, 32.0].into()))
                    .clicked()
                {
                    next = Some(SceneType::Credits);
                }

                ui.add_space(12.0);
                ui.separator();

                let mut music_on = app_state.music.is_enabled();
                let toggle = ui.add_enabled(
                    app_state.music.is_available(),
                    egui::Checkbox::new(&mut music_on, "Background music"),
                );
                if toggle.changed() {
                    app_state.music.set_enabled(music_on);
                }

                ui.add_space(6.0);

                if ui
                    .add(egui::Button::new("Quit").min_size([200.0, 32.0].into()))
                    .clicked()
                {
                    next = Some(SceneType::Exit);
                }
            });

        next
    }
}
