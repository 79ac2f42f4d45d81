/// Pixel edge length of one grid cell unless configured otherwise.
pub const DEFAULT_CELL_SIZE: i32 = 40;

/// Largest board edge in pixels; keeps layout arithmetic inside `i32`.
pub const MAX_BOARD_PIXELS: i32 = 1_000_000;

/// Largest number of cells along one axis a terminal frame can address.
pub const MAX_BOARD_CELLS: i32 = 16_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Where a freshly grown segment waits until the next advance places it.
    pub const OFF_BOARD: Position = Position { x: -1, y: -1 };

    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Position::new(self.x + dx, self.y + dy)
    }
}

/// The playing field in pixels, split into square cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
    cell_size: i32,
}

impl Board {
    pub fn new(width: i32, height: i32, cell_size: i32) -> Self {
        Board { width, height, cell_size }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    /// Number of whole cells along each axis.
    pub fn whole_cells(&self) -> (i32, i32) {
        (self.width / self.cell_size, self.height / self.cell_size)
    }

    /// Number of cells needed to cover the board, counting a trailing partial cell.
    pub fn span(&self) -> (i32, i32) {
        let cell = i64::from(self.cell_size);
        let div_ceil = |n: i32| ((i64::from(n) + cell - 1) / cell) as i32;
        (div_ceil(self.width), div_ceil(self.height))
    }

    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Strict, non-wrapping bounds test.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// True when `a` lies inside the cell whose top-left corner is `b`.
    pub fn overlaps(&self, a: Position, b: Position) -> bool {
        a.x >= b.x && a.x < b.x + self.cell_size && a.y >= b.y && a.y < b.y + self.cell_size
    }

    /// Grid-aligned positions strictly inside the one-cell margin.
    pub fn inner_cells(&self) -> impl Iterator<Item = Position> + '_ {
        let (cols, rows) = self.whole_cells();
        (1..=rows - 2).flat_map(move |y| {
            (1..=cols - 2).map(move |x| Position::new(x * self.cell_size, y * self.cell_size))
        })
    }
}
