struct StroopScene {
    levels: Vec<Level>,
    level_index: usize,
    player: Player,
    filter: ColorblindFilter,
}

impl StroopScene {
    /// `levels` must be non-empty; level discovery fails before a scene is
    /// ever constructed from an empty set.
    fn new(levels: Vec<Level>) -> Self {
        let player = levels[0].spawn_player();
        Self {
            levels,
            level_index: 0,
            player,
            filter: ColorblindFilter::default(),
        }
    }

    fn current_level(&self) -> &Level {
        &self.levels[self.level_index]
    }

    fn apply_filter_toggles(&mut self, input: &InputSnapshot) {
        let mut requested = None;
        if input.digit1_pressed() {
            requested = Some(ColorblindFilter::Red);
        }
        if input.digit2_pressed() {
            requested = Some(ColorblindFilter::Green);
        }
        if input.digit3_pressed() {
            requested = Some(ColorblindFilter::Blue);
        }
        if let Some(requested) = requested {
            self.filter = self.filter.toggled(requested);
            info!(filter = self.filter.label(), "filter_changed");
        }
    }

    fn advance_level(&mut self) {
        self.level_index = (self.level_index + 1) % self.levels.len();
        self.player = self.current_level().spawn_player();
        self.filter = ColorblindFilter::None;
        info!(level_index = self.level_index, "level_advanced");
    }

    fn standing_on_goal(&self) -> bool {
        let row = self.player.position.row.floor() as i64;
        let col = self.player.position.col.floor() as i64;
        self.current_level().tile_at(row, col) == Some(TileColor::Orange)
    }
}

impl Scene for StroopScene {
    fn load(&mut self) {
        self.level_index = 0;
        self.player = self.levels[0].spawn_player();
        self.filter = ColorblindFilter::default();
        info!(level_count = self.levels.len(), "scene_loaded");
    }

    fn update(&mut self, fixed_dt_seconds: f32, input: &InputSnapshot) {
        self.apply_filter_toggles(input);
        self.player = step_player(
            &self.player,
            self.current_level(),
            self.filter,
            input,
            fixed_dt_seconds,
        );
        if self.standing_on_goal() {
            self.advance_level();
        }
    }

    fn compose_frame(&self, frame: &mut Frame) {
        let level = self.current_level();
        let tile_size = level.tile_size_px;

        for row in 0..level.height {
            for col in 0..level.width {
                let Some(tile) = level.tile_at(i64::from(row), i64::from(col)) else {
                    continue;
                };
                // Tiles hidden by the active filter are drawn as plain
                // white; the level data itself is untouched.
                let drawn = if self.filter.matches(tile) {
                    TileColor::White
                } else {
                    tile
                };
                frame.push_rect(RectPx {
                    x_px: (col * tile_size) as i32,
                    y_px: (row * tile_size) as i32,
                    width_px: tile_size,
                    height_px: tile_size,
                    color: drawn.rgba(),
                });
            }
        }

        let tile_size_f = tile_size as f32;
        let x_px = (self.player.position.col * tile_size_f).round() as i32;
        let feet_px = ((self.player.position.row + 1.0) * tile_size_f).round() as i32;
        frame.push_rect(RectPx {
            x_px,
            y_px: feet_px - self.player.height_px as i32,
            width_px: self.player.width_px,
            height_px: self.player.height_px,
            color: PLAYER_COLOR,
        });
    }

    fn debug_title(&self) -> Option<String> {
        Some(format!(
            "Stroop | level {}/{} | filter: {}",
            self.level_index + 1,
            self.levels.len(),
            self.filter.label()
        ))
    }
}
