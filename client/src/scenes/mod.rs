pub mod credits;
pub mod exit;
pub mod factions;
pub mod menu;
pub mod pattern;
pub mod scene;
