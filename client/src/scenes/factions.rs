use std::time::Duration;

use egui_sdl2::egui::{self, Color32, Pos2};
use sdl2::{event::Event, pixels::Color, render::Canvas, video::Window};

use fh_core::cipher;
use fh_core::modals::{FactionRoster, ModalCard, ModalRegistry, load_rosters};

use crate::{
    scenes::scene::{Scene, SceneType},
    state::AppState,
};

const ARCHIVE_JSON: &str = include_str!("../../assets/units.json");

/// Faction archive browser: a roster list per faction, unit-details modals
/// through the [`ModalRegistry`], and the Skree translation toggle.
///
/// Failing to parse the embedded archive asset is fatal to this scene only;
/// the rest of the client keeps running.
pub struct FactionsScene {
    rosters: Option<Vec<FactionRoster>>,
    registry: ModalRegistry,
    selected: usize,
    skree_mode: bool,
}

impl FactionsScene {
    pub fn new() -> Self {
        let rosters = match load_rosters(ARCHIVE_JSON) {
            Ok(rosters) => Some(rosters),
            Err(e) => {
                log::error!("Faction archive data failed to load: {:#}", e);
                None
            }
        };

        Self {
            rosters,
            registry: ModalRegistry::new(),
            selected: 0,
            skree_mode: false,
        }
    }
}

impl Scene for FactionsScene {
    fn on_exit(&mut self, _app_state: &mut AppState) {
        // Explicit end of the registry lifecycle: cached cards do not
        // outlive a visit to the archives.
        self.registry.clear();
        self.skree_mode = false;
    }

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
        canvas.set_draw_color(Color::RGB(24, 18, 28));
        canvas.clear();
        Ok(())
    }

    fn render_ui(&mut self, _app_state: &mut AppState, ctx: &egui::Context) -> Option<SceneType> {
        let mut next = None;

        egui::Window::new("Faction archives")
            .default_width(360.0)
            .fixed_pos(Pos2::new(40.0, 40.0))
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.heading("Faction archives");

                let Some(rosters) = &self.rosters else {
                    ui.colored_label(Color32::LIGHT_RED, "Faction archives are unavailable.");
                    if ui.button("Back").clicked() {
                        next = Some(SceneType::Menu);
                    }
                    return;
                };

                if rosters.is_empty() {
                    ui.label("No factions on record.");
                    if ui.button("Back").clicked() {
                        next = Some(SceneType::Menu);
                    }
                    return;
                }
                self.selected = self.selected.min(rosters.len() - 1);

                ui.horizontal(|ui| {
                    for (index, roster) in rosters.iter().enumerate() {
                        ui.selectable_value(&mut self.selected, index, &roster.name);
                    }
                });

                ui.checkbox(&mut self.skree_mode, "Skree translation");
                ui.separator();

                let roster = &rosters[self.selected];
                for unit in &roster.units {
                    let label = if self.skree_mode {
                        cipher::encode(&unit.name)
                    } else {
                        unit.name.clone()
                    };
                    if ui
                        .add(egui::Button::new(label).min_size([220.0, 26.0].into()))
                        .clicked()
                    {
                        self.registry.open(&roster.key, unit);
                    }
                }

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Close all").clicked() {
                        self.registry.close_all(&roster.key);
                    }
                    if ui.button("Back").clicked() {
                        next = Some(SceneType::Menu);
                    }
                });
            });

        let tr = |text: &str| -> String {
            if self.skree_mode {
                cipher::encode(text)
            } else {
                text.to_string()
            }
        };

        // Render the open unit-details modals; close requests are applied
        // after the borrow on the registry ends.
        let mut to_close: Vec<(String, String)> = Vec::new();
        for card in self.registry.visible_cards() {
            egui::Window::new(tr(&card.title))
                .id(egui::Id::new(format!("{}-{}", card.faction, card.unit_key)))
                .default_width(300.0)
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(tr(&card.description));

                    if !card.abilities.is_empty() {
                        ui.separator();
                        ui.label(tr("Abilities"));
                        for ability in &card.abilities {
                            ui.label(format!("- {}", tr(ability)));
                        }
                    }

                    if !card.stats.is_empty() {
                        ui.separator();
                        ui.label(tr("Stats"));
                        for (stat, value) in &card.stats {
                            ui.add(
                                egui::ProgressBar::new(ModalCard::stat_fill(*value))
                                    .text(format!("{} {}", tr(stat), value)),
                            );
                        }
                    }

                    ui.add_space(6.0);
                    if ui.button("Close").clicked() {
                        to_close.push((card.faction.clone(), card.unit_key.clone()));
                    }
                });
        }
        for (faction, unit_key) in to_close {
            self.registry.close(&faction, &unit_key);
        }

        next
    }
}
