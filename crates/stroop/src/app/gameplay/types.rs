#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TileColor {
    White,
    Blue,
    Green,
    Red,
    Gray,
    Orange,
}

impl TileColor {
    /// Id 5 marks the spawn cell in level documents; it renders and
    /// collides as a plain white tile.
    fn from_tile_id(id: u16) -> Option<Self> {
        match id {
            0 | 5 => Some(Self::White),
            1 => Some(Self::Blue),
            2 => Some(Self::Green),
            3 => Some(Self::Red),
            4 => Some(Self::Gray),
            6 => Some(Self::Orange),
            _ => None,
        }
    }

    fn rgba(self) -> [u8; 4] {
        match self {
            Self::White => WHITE_RGBA,
            Self::Blue => BLUE_RGBA,
            Self::Green => GREEN_RGBA,
            Self::Red => RED_RGBA,
            Self::Gray => GRAY_RGBA,
            Self::Orange => ORANGE_RGBA,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ColorblindFilter {
    #[default]
    None,
    Red,
    Green,
    Blue,
}

impl ColorblindFilter {
    /// Pressing the key for the active filter turns it off; pressing any
    /// other filter key replaces the active filter outright.
    fn toggled(self, requested: Self) -> Self {
        if self == requested {
            Self::None
        } else {
            requested
        }
    }

    fn matches(self, tile: TileColor) -> bool {
        match self {
            Self::None => false,
            Self::Red => tile == TileColor::Red,
            Self::Green => tile == TileColor::Green,
            Self::Blue => tile == TileColor::Blue,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::None => "off",
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Position {
    row: f32,
    col: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Player {
    position: Position,
    width_px: u32,
    height_px: u32,
    horizontal_direction: i8,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Level {
    width: u32,
    height: u32,
    tile_size_px: u32,
    tiles: Vec<TileColor>,
    start: Position,
}

impl Level {
    fn from_doc(doc: &LevelDoc) -> Result<Self, String> {
        let mut tiles = Vec::with_capacity(doc.tile_ids().len());
        for (index, &id) in doc.tile_ids().iter().enumerate() {
            let tile = TileColor::from_tile_id(id).ok_or_else(|| {
                let row = index as u32 / doc.width();
                let col = index as u32 % doc.width();
                format!("unknown tile id {id} at row {row}, col {col}")
            })?;
            tiles.push(tile);
        }
        Ok(Self {
            width: doc.width(),
            height: doc.height(),
            tile_size_px: doc.tile_size_px(),
            tiles,
            start: Position {
                row: doc.start_row() as f32,
                col: doc.start_col() as f32,
            },
        })
    }

    /// Returns `None` for any cell outside the grid. Callers treat that
    /// the same as a solid tile, so the level edge acts as a wall.
    fn tile_at(&self, row: i64, col: i64) -> Option<TileColor> {
        if row < 0 || col < 0 || row >= i64::from(self.height) || col >= i64::from(self.width) {
            return None;
        }
        let index = row as usize * self.width as usize + col as usize;
        self.tiles.get(index).copied()
    }

    fn spawn_player(&self) -> Player {
        Player {
            position: self.start,
            width_px: self.tile_size_px * PLAYER_WIDTH_TILES,
            height_px: self.tile_size_px * PLAYER_HEIGHT_TILES,
            horizontal_direction: 0,
        }
    }
}
