    use super::*;

    const W: u16 = 0; // white
    const B: u16 = 1; // blue
    const G: u16 = 2; // green
    const R: u16 = 3; // red
    const S: u16 = 4; // solid gray
    const O: u16 = 6; // orange goal

    fn make_level(width: u32, height: u32, ids: &[u16], start_row: u32, start_col: u32) -> Level {
        assert_eq!(ids.len(), (width * height) as usize);
        let tiles = ids
            .iter()
            .map(|&id| TileColor::from_tile_id(id).expect("known tile id"))
            .collect();
        Level {
            width,
            height,
            tile_size_px: 32,
            tiles,
            start: Position {
                row: start_row as f32,
                col: start_col as f32,
            },
        }
    }

    /// A single playable row at row 1 with gray padding above and below.
    fn corridor(row_ids: &[u16], start_col: u32) -> Level {
        let width = row_ids.len() as u32;
        let mut ids = vec![S; row_ids.len()];
        ids.extend_from_slice(row_ids);
        ids.extend(std::iter::repeat(S).take(row_ids.len()));
        make_level(width, 3, &ids, 1, start_col)
    }

    fn move_right() -> InputSnapshot {
        InputSnapshot::empty().with_action_down(InputAction::MoveRight, true)
    }

    fn move_left() -> InputSnapshot {
        InputSnapshot::empty().with_action_down(InputAction::MoveLeft, true)
    }

    fn loaded_scene(levels: Vec<Level>) -> StroopScene {
        let mut scene = StroopScene::new(levels);
        scene.load();
        scene
    }

    #[test]
    fn white_and_orange_tiles_are_always_enterable() {
        for filter in [
            ColorblindFilter::None,
            ColorblindFilter::Red,
            ColorblindFilter::Green,
            ColorblindFilter::Blue,
        ] {
            assert!(can_enter(Some(TileColor::White), filter));
            assert!(can_enter(Some(TileColor::Orange), filter));
        }
    }

    #[test]
    fn gray_tiles_block_under_every_filter() {
        for filter in [
            ColorblindFilter::None,
            ColorblindFilter::Red,
            ColorblindFilter::Green,
            ColorblindFilter::Blue,
        ] {
            assert!(!can_enter(Some(TileColor::Gray), filter));
        }
    }

    #[test]
    fn colored_tiles_require_the_matching_filter() {
        assert!(!can_enter(Some(TileColor::Red), ColorblindFilter::None));
        assert!(can_enter(Some(TileColor::Red), ColorblindFilter::Red));
        assert!(!can_enter(Some(TileColor::Red), ColorblindFilter::Blue));

        assert!(can_enter(Some(TileColor::Green), ColorblindFilter::Green));
        assert!(!can_enter(Some(TileColor::Green), ColorblindFilter::Red));

        assert!(can_enter(Some(TileColor::Blue), ColorblindFilter::Blue));
        assert!(!can_enter(Some(TileColor::Blue), ColorblindFilter::Green));
    }

    #[test]
    fn out_of_bounds_cells_are_never_enterable() {
        assert!(!can_enter(None, ColorblindFilter::None));
        assert!(!can_enter(None, ColorblindFilter::Red));
    }

    #[test]
    fn toggling_the_active_filter_turns_it_off() {
        let filter = ColorblindFilter::None.toggled(ColorblindFilter::Red);
        assert_eq!(filter, ColorblindFilter::Red);
        assert_eq!(filter.toggled(ColorblindFilter::Red), ColorblindFilter::None);
    }

    #[test]
    fn toggling_a_different_filter_replaces_the_active_one() {
        let filter = ColorblindFilter::Red.toggled(ColorblindFilter::Blue);
        assert_eq!(filter, ColorblindFilter::Blue);
        assert!(!filter.matches(TileColor::Red));
        assert!(filter.matches(TileColor::Blue));
    }

    #[test]
    fn unknown_tile_ids_have_no_color() {
        assert_eq!(TileColor::from_tile_id(7), None);
        assert_eq!(TileColor::from_tile_id(99), None);
    }

    #[test]
    fn spawn_marker_id_maps_to_white() {
        assert_eq!(TileColor::from_tile_id(5), Some(TileColor::White));
        assert_eq!(TileColor::from_tile_id(0), Some(TileColor::White));
    }

    #[test]
    fn tile_lookup_outside_the_grid_returns_none() {
        let level = corridor(&[W, W, W], 1);
        assert_eq!(level.tile_at(-1, 0), None);
        assert_eq!(level.tile_at(0, -1), None);
        assert_eq!(level.tile_at(3, 0), None);
        assert_eq!(level.tile_at(1, 3), None);
        assert_eq!(level.tile_at(1, 1), Some(TileColor::White));
    }

    #[test]
    fn player_stops_flush_against_a_blocked_neighbor() {
        let level = corridor(&[W, W, R, W, W], 1);
        let player = level.spawn_player();
        let next = step_player(&player, &level, ColorblindFilter::None, &move_right(), 1.0);
        assert_eq!(next.position.col, 1.0);
        assert_eq!(next.horizontal_direction, 1);
    }

    #[test]
    fn matching_filter_lets_the_player_pass_through_colored_tiles() {
        let level = corridor(&[W, W, G, W, S], 1);
        let player = level.spawn_player();
        let next = step_player(&player, &level, ColorblindFilter::Green, &move_right(), 1.0);
        // One second at full speed overshoots the corridor; the gray tile
        // at column 4 is what finally stops the player.
        assert_eq!(next.position.col, 3.0);
    }

    #[test]
    fn level_edge_acts_as_a_wall() {
        let level = corridor(&[W, W, W, W, W], 1);
        let player = level.spawn_player();
        let next = step_player(&player, &level, ColorblindFilter::None, &move_right(), 1.0);
        assert_eq!(next.position.col, 4.0);

        let next = step_player(&player, &level, ColorblindFilter::None, &move_left(), 1.0);
        assert_eq!(next.position.col, 0.0);
    }

    #[test]
    fn moving_left_stops_flush_against_a_blocked_neighbor() {
        let level = corridor(&[W, B, W, W, W], 3);
        let player = level.spawn_player();
        let next = step_player(&player, &level, ColorblindFilter::None, &move_left(), 1.0);
        assert_eq!(next.position.col, 2.0);
        assert_eq!(next.horizontal_direction, -1);
    }

    #[test]
    fn player_snaps_out_of_an_overlapped_solid_cell() {
        let level = corridor(&[W, W, W, R, W], 1);
        let mut player = level.spawn_player();
        // Leading edge already inside the red tile when the filter is off;
        // the player lands flush on the trailing boundary of cell 2.
        player.position.col = 2.4;
        let next = step_player(&player, &level, ColorblindFilter::None, &move_right(), 0.001);
        assert_eq!(next.position.col, 2.0);
    }

    #[test]
    fn opposite_movement_keys_cancel_out() {
        let level = corridor(&[W, W, W], 1);
        let player = level.spawn_player();
        let both = move_right().with_action_down(InputAction::MoveLeft, true);
        let next = step_player(&player, &level, ColorblindFilter::None, &both, 1.0);
        assert_eq!(next.position.col, 1.0);
        assert_eq!(next.horizontal_direction, 0);
    }

    #[test]
    fn zero_dt_leaves_the_player_in_place() {
        let level = corridor(&[W, W, W], 1);
        let player = level.spawn_player();
        let next = step_player(&player, &level, ColorblindFilter::None, &move_right(), 0.0);
        assert_eq!(next.position.col, 1.0);
    }

    #[test]
    fn free_movement_advances_by_speed_times_dt() {
        let level = corridor(&[W, W, W, W, W], 1);
        let player = level.spawn_player();
        let dt = 0.1;
        let next = step_player(&player, &level, ColorblindFilter::None, &move_right(), dt);
        let expected = 1.0 + PLAYER_SPEED_TILES_PER_SEC * dt;
        assert!((next.position.col - expected).abs() < 1e-5);
    }

    #[test]
    fn digit_keys_toggle_the_red_green_blue_filters() {
        let mut scene = loaded_scene(vec![corridor(&[W, W, W], 1)]);

        scene.update(0.0, &InputSnapshot::empty().with_digit1_pressed(true));
        assert_eq!(scene.filter, ColorblindFilter::Red);

        scene.update(0.0, &InputSnapshot::empty().with_digit2_pressed(true));
        assert_eq!(scene.filter, ColorblindFilter::Green);

        scene.update(0.0, &InputSnapshot::empty().with_digit3_pressed(true));
        assert_eq!(scene.filter, ColorblindFilter::Blue);

        scene.update(0.0, &InputSnapshot::empty().with_digit3_pressed(true));
        assert_eq!(scene.filter, ColorblindFilter::None);
    }

    #[test]
    fn reaching_the_goal_advances_to_the_next_level() {
        let first = corridor(&[W, W, O, S, S], 1);
        let second = corridor(&[W, W, W, W, W], 3);
        let mut scene = loaded_scene(vec![first, second]);
        scene.filter = ColorblindFilter::Red;

        scene.update(0.1, &move_right());

        assert_eq!(scene.level_index, 1);
        assert_eq!(scene.filter, ColorblindFilter::None);
        assert_eq!(scene.player.position.col, 3.0);
        assert_eq!(scene.player.position.row, 1.0);
    }

    #[test]
    fn goal_advance_wraps_back_to_the_first_level() {
        let only = corridor(&[W, W, O, S, S], 1);
        let mut scene = loaded_scene(vec![only]);

        scene.update(0.1, &move_right());

        assert_eq!(scene.level_index, 0);
        assert_eq!(scene.player.position.col, 1.0);
    }

    #[test]
    fn frame_recolors_filtered_tiles_white() {
        let level = corridor(&[W, R, W], 1);
        let mut scene = loaded_scene(vec![level]);
        scene.filter = ColorblindFilter::Red;

        let mut frame = Frame::new([0, 0, 0, 255]);
        scene.compose_frame(&mut frame);

        // Row-major tile order; the red tile sits at row 1, col 1.
        let red_tile = &frame.rects()[3 + 1];
        assert_eq!(red_tile.x_px, 32);
        assert_eq!(red_tile.y_px, 32);
        assert_eq!(red_tile.color, WHITE_RGBA);
    }

    #[test]
    fn frame_contains_every_tile_and_a_bottom_aligned_player() {
        let level = corridor(&[W, W, W], 1);
        let mut scene = loaded_scene(vec![level]);

        let mut frame = Frame::new([0, 0, 0, 255]);
        scene.compose_frame(&mut frame);

        assert_eq!(frame.rects().len(), 3 * 3 + 1);
        let player_rect = frame.rects().last().expect("player rect");
        assert_eq!(player_rect.color, PLAYER_COLOR);
        assert_eq!(player_rect.width_px, 32);
        assert_eq!(player_rect.height_px, 64);
        assert_eq!(player_rect.x_px, 32);
        // Feet rest on the bottom of row 1, so the sprite spans rows 0..=1.
        assert_eq!(player_rect.y_px, 0);
    }

    #[test]
    fn level_from_doc_rejects_unknown_tile_ids() {
        let doc = LevelDoc::from_parts(3, 1, 32, vec![0, 9, 0], 0, 0);
        let err = Level::from_doc(&doc).expect_err("unknown id must fail");
        assert!(err.contains("unknown tile id 9"));
        assert!(err.contains("row 0"));
        assert!(err.contains("col 1"));
    }

    #[test]
    fn level_from_doc_maps_ids_and_spawn() {
        let doc = LevelDoc::from_parts(3, 1, 16, vec![4, 5, 6], 0, 1);
        let level = Level::from_doc(&doc).expect("valid doc");
        assert_eq!(level.tile_at(0, 0), Some(TileColor::Gray));
        assert_eq!(level.tile_at(0, 1), Some(TileColor::White));
        assert_eq!(level.tile_at(0, 2), Some(TileColor::Orange));
        assert_eq!(level.start, Position { row: 0.0, col: 1.0 });
        assert_eq!(level.spawn_player().height_px, 32);
    }
