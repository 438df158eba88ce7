fn can_enter(tile: Option<TileColor>, filter: ColorblindFilter) -> bool {
    match tile {
        None => false,
        Some(TileColor::White) | Some(TileColor::Orange) => true,
        Some(TileColor::Gray) => false,
        Some(color) => filter.matches(color),
    }
}

fn horizontal_intent(input: &InputSnapshot) -> i8 {
    let mut intent = 0;
    if input.is_down(InputAction::MoveLeft) {
        intent -= 1;
    }
    if input.is_down(InputAction::MoveRight) {
        intent += 1;
    }
    intent
}

fn step_player(
    player: &Player,
    level: &Level,
    filter: ColorblindFilter,
    input: &InputSnapshot,
    dt_seconds: f32,
) -> Player {
    let intent = horizontal_intent(input);
    let mut next = *player;
    next.horizontal_direction = intent;
    if intent == 0 || dt_seconds <= 0.0 {
        return next;
    }

    let dx = f32::from(intent) * PLAYER_SPEED_TILES_PER_SEC * dt_seconds;
    next.position.col = resolve_column(level, filter, player.position.row, player.position.col, dx);
    next
}

/// Walks the cells the player's leading edge would sweep through and stops
/// flush against the first one it cannot enter. Scanning starts at the cell
/// adjacent to the player's own, so a player already overlapping a cell that
/// just became solid snaps back out of it.
fn resolve_column(level: &Level, filter: ColorblindFilter, row: f32, col: f32, dx: f32) -> f32 {
    let tile_row = row.floor() as i64;
    let target = col + dx;

    if dx > 0.0 {
        let first = col.floor() as i64 + 1;
        let last = target.ceil() as i64;
        for cell in first..=last {
            if !can_enter(level.tile_at(tile_row, cell), filter) {
                return (cell - 1) as f32;
            }
        }
    } else {
        let first = col.ceil() as i64 - 1;
        let last = target.floor() as i64;
        let mut cell = first;
        while cell >= last {
            if !can_enter(level.tile_at(tile_row, cell), filter) {
                return (cell + 1) as f32;
            }
            cell -= 1;
        }
    }

    target
}
