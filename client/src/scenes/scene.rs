use std::{collections::HashMap, time::Duration};

use egui_sdl2::egui;
use sdl2::{event::Event, render::Canvas, video::Window};

use crate::state::AppState;

/// Trait implemented by each client scene (menu, pattern game, archives,
/// credits, exit).
///
/// The scene manager drives the lifecycle: `on_enter` → frame loop
/// (`handle_event`, `update`, `render_world`, `render_ui`) → `on_exit`.
/// Returning `Some(SceneType)` from any frame method requests a transition.
pub trait Scene {
    /// Called once when the scene becomes active.
    fn on_enter(&mut self, _app_state: &mut AppState) {}

    /// Called once when the scene is about to be replaced by another.
    fn on_exit(&mut self, _app_state: &mut AppState) {}

    /// Processes a single SDL event.
    fn handle_event(&mut self, app_state: &mut AppState, event: &Event) -> Option<SceneType>;

    /// Per-frame logic update. `dt` is the time elapsed since the last frame.
    fn update(&mut self, app_state: &mut AppState, dt: Duration) -> Option<SceneType>;

    /// Renders non-UI elements onto the SDL canvas.
    fn render_world(
        &mut self,
        app_state: &mut AppState,
        canvas: &mut Canvas<Window>,
    ) -> Result<(), String>;

    /// Renders the egui immediate-mode UI overlay.
    fn render_ui(&mut self, app_state: &mut AppState, ctx: &egui::Context) -> Option<SceneType>;
}

/// Identifies which scene is active.
#[derive(Hash, Eq, PartialEq, Debug, Copy, Clone)]
pub enum SceneType {
    Menu,
    Pattern,
    Factions,
    Credits,
    Exit,
}

/// Owns all scene instances and drives the scene lifecycle.
///
/// Exactly one scene is active at a time. `SceneType::Exit` is the shutdown
/// sentinel checked by the main loop.
pub struct SceneManager {
    active_scene: SceneType,
    scenes: HashMap<SceneType, Box<dyn Scene>>,
}

impl SceneManager {
    /// Creates a manager pre-populated with all known scenes, starting at
    /// the menu.
    pub fn new() -> Self {
        let mut scene_map: HashMap<SceneType, Box<dyn Scene>> = HashMap::new();

        scene_map.insert(
            SceneType::Menu,
            Box::new(crate::scenes::menu::MenuScene::new()),
        );

        scene_map.insert(
            SceneType::Pattern,
            Box::new(crate::scenes::pattern::PatternScene::new()),
        );

        scene_map.insert(
            SceneType::Factions,
            Box::new(crate::scenes::factions::FactionsScene::new()),
        );

        scene_map.insert(
            SceneType::Credits,
            Box::new(crate::scenes::credits::CreditsScene::new()),
        );

        scene_map.insert(
            SceneType::Exit,
            Box::new(crate::scenes::exit::ExitScene::new()),
        );

        SceneManager {
            active_scene: SceneType::Menu,
            scenes: scene_map,
        }
    }

    /// Returns the currently active scene type.
    pub fn get_scene(&self) -> SceneType {
        self.active_scene
    }

    /// Forwards an SDL event to the active scene and applies any resulting
    /// scene change.
    pub fn handle_event(&mut self, app_state: &mut AppState, event: &Event) {
        if self.active_scene == SceneType::Exit {
            return;
        }

        let Some(scene) = self.scenes.get_mut(&self.active_scene) else {
            return;
        };

        let possible_next_scene = scene.handle_event(app_state, event);
        self.apply_scene_change(possible_next_scene, app_state);
    }

    /// Runs the active scene's per-frame update.
    pub fn update(&mut self, app_state: &mut AppState, dt: Duration) {
        if self.active_scene == SceneType::Exit {
            return;
        }

        let Some(scene) = self.scenes.get_mut(&self.active_scene) else {
            return;
        };

        let possible_next_scene = scene.update(app_state, dt);
        self.apply_scene_change(possible_next_scene, app_state);
    }

    /// Delegates canvas rendering to the active scene.
    pub fn render_world(&mut self, app_state: &mut AppState, canvas: &mut Canvas<Window>) {
        if self.active_scene == SceneType::Exit {
            return;
        }

        let Some(scene) = self.scenes.get_mut(&self.active_scene) else {
            return;
        };

        scene
            .render_world(app_state, canvas)
            .unwrap_or_else(|err| log::error!("Error rendering world: {}", err));
    }

    /// Delegates UI rendering to the active scene.
    pub fn render_ui(&mut self, app_state: &mut AppState, ctx: &egui::Context) {
        if self.active_scene == SceneType::Exit {
            return;
        }

        let Some(scene) = self.scenes.get_mut(&self.active_scene) else {
            return;
        };

        let possible_next_scene = scene.render_ui(app_state, ctx);
        self.apply_scene_change(possible_next_scene, app_state);
    }

    /// Externally requests a scene transition (e.g. from the main loop on
    /// quit).
    pub fn request_scene_change(&mut self, scene_type: SceneType, app_state: &mut AppState) {
        self.apply_scene_change(Some(scene_type), app_state);
    }

    /// Performs the actual scene switch: `on_exit` on the current scene,
    /// swap, `on_enter` on the new one.
    fn set_scene(&mut self, scene_type: SceneType, app_state: &mut AppState) {
        if scene_type == self.active_scene {
            return;
        }

        if !self.scenes.contains_key(&scene_type) {
            log::error!("Attempted to switch to unknown scene: {:?}", scene_type);
            return;
        }

        log::info!("Switching to scene: {:?}", scene_type);

        if let Some(current_scene) = self.scenes.get_mut(&self.active_scene) {
            current_scene.on_exit(app_state);
        }

        self.active_scene = scene_type;

        if let Some(next_scene) = self.scenes.get_mut(&self.active_scene) {
            next_scene.on_enter(app_state);
        }
    }

    fn apply_scene_change(&mut self, next_scene: Option<SceneType>, app_state: &mut AppState) {
        let Some(scene) = next_scene else {
            return;
        };

        self.set_scene(scene, app_state);
    }
}
