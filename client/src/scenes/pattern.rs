use std::time::Duration;

use egui_sdl2::egui::{self, Color32, Pos2};
use sdl2::{event::Event, pixels::Color, render::Canvas, video::Window};

use fh_core::pattern::{FlashStyle, PatternGame, SessionState, StatusTone};

use crate::{
    scenes::scene::{Scene, SceneType},
    state::AppState,
};

const CELL_SIZE: f32 = 56.0;
const CELL_SPACING: f32 = 6.0;

const CELL_IDLE: Color32 = Color32::from_rgb(40, 44, 58);
const CELL_SEQUENCE: Color32 = Color32::from_rgb(240, 196, 25);
const CELL_PRESS: Color32 = Color32::from_rgb(84, 158, 227);
const CELL_ERROR: Color32 = Color32::from_rgb(204, 51, 51);

/// The pattern-matrix minigame scene.
///
/// All game state lives in [`PatternGame`]; this scene only forwards presses
/// and the frame delta, then draws whatever the accessors report.
pub struct PatternScene {
    game: PatternGame,
}

impl PatternScene {
    pub fn new() -> Self {
        Self {
            game: PatternGame::new(fh_core::constants::DEFAULT_DIMENSION),
        }
    }

    fn cell_color(&self, node: usize) -> Color32 {
        match self.game.flash(node) {
            Some(FlashStyle::Sequence) => CELL_SEQUENCE,
            Some(FlashStyle::Press) => CELL_PRESS,
            Some(FlashStyle::Error) => CELL_ERROR,
            None => CELL_IDLE,
        }
    }
}

impl Scene for PatternScene {
    fn on_enter(&mut self, app_state: &mut AppState) {
        // A fresh idle session every time the player walks in.
        self.game = PatternGame::new(app_state.settings.pattern_dimension());
    }

    fn handle_event(&mut self, _app_state: &mut AppState, _event: &Event) -> Option<SceneType> {
        None
    }

    fn update(&mut self, _app_state: &mut AppState, dt: Duration) -> Option<SceneType> {
        self.game.tick(dt);
        None
    }

    fn render_world(
        &mut self,
        _app_state: &mut AppState,
        canvas: &mut Canvas<Window>,
    ) -> Result<(), String> {
        canvas.set_draw_color(Color::RGB(16, 16, 24));
        canvas.clear();
        Ok(())
    }

    fn render_ui(&mut self, _app_state: &mut AppState, ctx: &egui::Context) -> Option<SceneType> {
        let mut next = None;

        egui::Window::new("Pattern matrix")
            .fixed_pos(Pos2::new(200.0, 60.0))
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.heading("Pattern matrix");
                ui.label(format!("Level: {}", self.game.level()));

                let status = self.game.status();
                let status_color = match status.tone() {
                    StatusTone::Success => Color32::LIGHT_GREEN,
                    StatusTone::Error => Color32::LIGHT_RED,
                    StatusTone::Neutral => Color32::GRAY,
                };
                ui.colored_label(status_color, status.message());
                ui.add_space(10.0);

                let dimension = self.game.dimension() as usize;
                egui::Grid::new("pattern_matrix_grid")
                    .spacing([CELL_SPACING, CELL_SPACING])
                    .show(ui, |ui| {
                        for row in 0..dimension {
                            for col in 0..dimension {
                                let node = row * dimension + col;
                                let cell = egui::Button::new("")
                                    .min_size([CELL_SIZE, CELL_SIZE].into())
                                    .fill(self.cell_color(node));
                                let response = ui.add_enabled(self.game.input_allowed(), cell);
                                if response.clicked() {
                                    self.game.node_pressed(node);
                                }
                            }
                            ui.end_row();
                        }
                    });

                ui.add_space(10.0);

                let start_label = match self.game.state() {
                    SessionState::Idle | SessionState::GameOver => "Start",
                    _ => "Restart",
                };
                ui.horizontal(|ui| {
                    let start = ui.add_enabled(
                        self.game.start_allowed(),
                        egui::Button::new(start_label).min_size([120.0, 32.0].into()),
                    );
                    if start.clicked() {
                        self.game.start();
                    }

                    if ui
                        .add(egui::Button::new("Back").min_size([120.0, 32.0].into()))
                        .clicked()
                    {
                        next = Some(SceneType::Menu);
                    }
                });
            });

        next
    }
}
