use std::path::Path;

use engine::{
    discover_level_files, load_level_doc, Frame, InputAction, InputSnapshot, LevelDoc, RectPx,
    Scene,
};
use tracing::info;

const PLAYER_SPEED_TILES_PER_SEC: f32 = 15.0;
const PLAYER_WIDTH_TILES: u32 = 1;
const PLAYER_HEIGHT_TILES: u32 = 2;
const PLAYER_COLOR: [u8; 4] = [0, 0, 0, 255];

const WHITE_RGBA: [u8; 4] = [236, 239, 241, 255];
const BLUE_RGBA: [u8; 4] = [41, 121, 255, 255];
const GREEN_RGBA: [u8; 4] = [46, 204, 64, 255];
const RED_RGBA: [u8; 4] = [229, 57, 53, 255];
const GRAY_RGBA: [u8; 4] = [96, 100, 105, 255];
const ORANGE_RGBA: [u8; 4] = [255, 145, 0, 255];

include!("types.rs");
include!("systems.rs");
include!("scene_impl.rs");

pub(crate) fn load_levels(levels_dir: &Path) -> Result<Vec<Level>, String> {
    let files = discover_level_files(levels_dir).map_err(|err| err.to_string())?;
    let mut levels = Vec::with_capacity(files.len());
    for path in &files {
        let doc = load_level_doc(path).map_err(|err| err.to_string())?;
        let level = Level::from_doc(&doc)
            .map_err(|reason| format!("invalid level {}: {reason}", path.display()))?;
        levels.push(level);
    }
    Ok(levels)
}

pub(crate) fn build_scene(levels: Vec<Level>) -> Box<dyn Scene> {
    Box::new(StroopScene::new(levels))
}
