use engine::{resolve_app_paths, LoopConfig, Scene};
use tracing::info;
use tracing_subscriber::EnvFilter;

use super::gameplay;

pub(crate) struct AppWiring {
    pub(crate) config: LoopConfig,
    pub(crate) scene: Box<dyn Scene>,
}

pub(crate) fn build_app() -> Result<AppWiring, String> {
    init_tracing();
    info!("=== Stroop Startup ===");

    let paths = resolve_app_paths().map_err(|err| err.to_string())?;
    info!(
        root = %paths.root.display(),
        levels_dir = %paths.levels_dir.display(),
        "resolved_app_paths"
    );

    let levels = gameplay::load_levels(&paths.levels_dir)?;
    info!(level_count = levels.len(), "levels_loaded");

    let scene = gameplay::build_scene(levels);
    let config = LoopConfig::default();

    Ok(AppWiring { config, scene })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}
