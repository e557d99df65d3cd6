use log::trace;

use crate::{BoardError, Cell, Occupant};

/// Side length of the standard game
pub const STANDARD_SIZE: usize = 8;

/// Lines through a cell: horizontal, vertical, main diagonal, anti-diagonal.
/// Each entry points toward the lower row (the lower column on a row), the
/// side that is searched first for a closing disk.
const AXES: [(isize, isize); 4] = [(-1, 0), (0, -1), (-1, -1), (1, -1)];

/// The eight scan directions, the first-searched half of each axis first
fn directions() -> impl Iterator<Item = (isize, isize)> {
    AXES.iter().flat_map(|&(dx, dy)| [(dx, dy), (-dx, -dy)])
}

/// Full copy of the occupant grid, indexed `[row][col]`
#[derive(Debug, Clone, PartialEq, Eq)]
struct Snapshot {
    occupants: Vec<Vec<Occupant>>,
}

/// Square game board with undo history
///
/// The board does not validate moves on `place`: targets must come from
/// [`Board::available_moves`].
#[derive(Debug)]
pub struct Board {
    size: usize,
    cells: Vec<Vec<Cell>>,
    history: Vec<Snapshot>,
    undo_enabled: bool,
}

impl Board {
    /// Create an empty `size` x `size` board
    ///
    /// Call [`Board::initialize`] to put the four starting disks down.
    pub fn new(size: usize, undo_enabled: bool) -> Result<Self, BoardError> {
        if size < 2 {
            return Err(BoardError::InvalidSize(size));
        }
        Ok(Self::blank(size, undo_enabled))
    }

    /// Build a position from text rows: `D` dark, `L` light, anything else
    /// empty
    ///
    /// The board is `rows.len()` wide; a longer row is out of range. Undo is
    /// enabled and the history starts empty.
    pub fn from_rows(rows: &[&str]) -> Result<Self, BoardError> {
        let mut board = Board::new(rows.len(), true)?;
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let occupant = match ch {
                    'D' => Occupant::Dark,
                    'L' => Occupant::Light,
                    _ => Occupant::Empty,
                };
                board.set_occupant(x, y, occupant)?;
            }
        }
        Ok(board)
    }

    fn blank(size: usize, undo_enabled: bool) -> Self {
        let cells = (0..size)
            .map(|y| (0..size).map(|x| Cell::new(x, y, Occupant::Empty)).collect())
            .collect();

        Board {
            size,
            cells,
            history: Vec::new(),
            undo_enabled,
        }
    }

    /// Put the four starting disks in the center, light on the main diagonal
    pub fn initialize(&mut self) {
        let hi = self.size / 2;
        let lo = hi - 1;

        self.cells[hi][hi].occupant = Occupant::Light;
        self.cells[lo][hi].occupant = Occupant::Dark;
        self.cells[hi][lo].occupant = Occupant::Dark;
        self.cells[lo][lo].occupant = Occupant::Light;
    }

    /// Replace the whole position with a fresh start; history is dropped
    pub fn reset(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            cell.occupant = Occupant::Empty;
        }
        self.history.clear();
        self.initialize();
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_undo_enabled(&self) -> bool {
        self.undo_enabled
    }

    pub fn set_undo_enabled(&mut self, enabled: bool) {
        self.undo_enabled = enabled;
    }

    /// Number of snapshots waiting to be restored
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<(), BoardError> {
        if x >= self.size || y >= self.size {
            return Err(BoardError::OutOfRange {
                x,
                y,
                size: self.size,
            });
        }
        Ok(())
    }

    pub fn cell_at(&self, x: usize, y: usize) -> Result<&Cell, BoardError> {
        self.check_bounds(x, y)?;
        Ok(&self.cells[y][x])
    }

    /// Overwrite one position directly. No snapshot is taken and no captures
    /// are resolved; meant for setting up positions.
    pub fn set_occupant(&mut self, x: usize, y: usize, occupant: Occupant) -> Result<(), BoardError> {
        self.check_bounds(x, y)?;
        self.cells[y][x].occupant = occupant;
        Ok(())
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }

    /// Copy of the occupant grid, indexed `[row][col]`
    pub fn occupants(&self) -> Vec<Vec<Occupant>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|cell| cell.occupant).collect())
            .collect()
    }

    /// Position `distance` steps from `(x, y)` along `(dx, dy)`, if on the board
    fn offset(&self, x: usize, y: usize, (dx, dy): (isize, isize), distance: usize) -> Option<(usize, usize)> {
        let cx = x as isize + dx * distance as isize;
        let cy = y as isize + dy * distance as isize;
        if cx < 0 || cy < 0 || cx >= self.size as isize || cy >= self.size as isize {
            return None;
        }
        Some((cx as usize, cy as usize))
    }

    /// Distance from `(x, y)` to the cell of `color` closing an unbroken run
    /// of opposing disks along `direction`
    ///
    /// Returns `None` when the run is broken by an empty cell, reaches the
    /// edge, or `color` sits right next to the origin.
    fn closing_distance(&self, x: usize, y: usize, direction: (isize, isize), color: Occupant) -> Option<usize> {
        let mut distance = 1;
        while let Some((cx, cy)) = self.offset(x, y, direction, distance) {
            match self.cells[cy][cx].occupant {
                Occupant::Empty => return None,
                occupant if occupant == color => {
                    return if distance > 1 { Some(distance) } else { None };
                }
                _ => distance += 1,
            }
        }
        None
    }

    fn is_possible_step(&self, x: usize, y: usize, color: Occupant) -> bool {
        directions().any(|direction| self.closing_distance(x, y, direction, color).is_some())
    }

    /// Check if `color` may put a disk at `(x, y)`
    pub fn is_legal_move(&self, x: usize, y: usize, color: Occupant) -> bool {
        color.is_disk()
            && x < self.size
            && y < self.size
            && self.cells[y][x].is_empty()
            && self.is_possible_step(x, y, color)
    }

    /// Legal moves for `color`, in row-major order
    pub fn available_moves(&self, color: Occupant) -> Vec<Cell> {
        if !color.is_disk() {
            return Vec::new();
        }

        self.cells()
            .filter(|cell| cell.is_empty() && self.is_possible_step(cell.x(), cell.y(), color))
            .copied()
            .collect()
    }

    pub fn has_moves(&self, color: Occupant) -> bool {
        color.is_disk()
            && self
                .cells()
                .any(|cell| cell.is_empty() && self.is_possible_step(cell.x(), cell.y(), color))
    }

    /// Closed run on one axis as `(direction, distance)`
    ///
    /// The `axis` side wins when both sides close; the opposite side is only
    /// searched when `axis` closes nothing.
    fn closing_run(&self, x: usize, y: usize, (dx, dy): (isize, isize), color: Occupant) -> Option<((isize, isize), usize)> {
        [(dx, dy), (-dx, -dy)]
            .into_iter()
            .find_map(|direction| Some((direction, self.closing_distance(x, y, direction, color)?)))
    }

    /// Positions `color` captures by playing `(x, y)`, at most one run per axis
    fn captured_positions(&self, x: usize, y: usize, color: Occupant) -> Vec<(usize, usize)> {
        let mut captured = Vec::new();
        if !color.is_disk() {
            return captured;
        }

        for &axis in AXES.iter() {
            if let Some((direction, distance)) = self.closing_run(x, y, axis, color) {
                captured.extend((1..distance).filter_map(|step| self.offset(x, y, direction, step)));
            }
        }
        captured
    }

    /// Cells that would flip if `color` were placed on `cell`; the board is
    /// left untouched
    pub fn closed_cells(&self, cell: &Cell, color: Occupant) -> Vec<Cell> {
        if self.check_bounds(cell.x(), cell.y()).is_err() {
            return Vec::new();
        }

        self.captured_positions(cell.x(), cell.y(), color)
            .into_iter()
            .map(|(cx, cy)| self.cells[cy][cx])
            .collect()
    }

    fn push_snapshot(&mut self) {
        self.history.push(Snapshot {
            occupants: self.occupants(),
        });
    }

    /// Put a `color` disk at `(x, y)` and flip the closed run on each axis
    /// through it
    ///
    /// A snapshot of the previous position is pushed first. Legality is not
    /// checked: a cell that closes no line still receives the disk, with no
    /// captures. Returns the number of flipped disks.
    pub fn place(&mut self, x: usize, y: usize, color: Occupant) -> Result<usize, BoardError> {
        self.check_bounds(x, y)?;
        self.push_snapshot();
        let captured = self.captured_positions(x, y, color);
        self.cells[y][x].occupant = color;
        for &(cx, cy) in &captured {
            self.cells[cy][cx].occupant = color;
        }
        let flipped = captured.len();

        trace!("{} placed at ({}, {}), {} flipped", color.name(), x, y, flipped);
        Ok(flipped)
    }

    /// Revert the most recent placement
    ///
    /// Each call undoes exactly one `place`. Does nothing when undo is
    /// disabled or there is no history. Returns whether a step was restored.
    pub fn restore_previous_step(&mut self) -> bool {
        if !self.undo_enabled {
            return false;
        }
        let Some(snapshot) = self.history.pop() else {
            return false;
        };

        for (row, occupants) in self.cells.iter_mut().zip(snapshot.occupants) {
            for (cell, occupant) in row.iter_mut().zip(occupants) {
                cell.occupant = occupant;
            }
        }

        trace!("restored previous step, {} left in history", self.history.len());
        true
    }

    /// Independent clone of the position
    ///
    /// The copy starts with an empty history and the same undo flag; it can
    /// be changed on the copy without touching this board.
    pub fn copy(&self) -> Board {
        let mut board = Board::blank(self.size, self.undo_enabled);
        for (target, source) in board.cells.iter_mut().flatten().zip(self.cells()) {
            target.occupant = source.occupant;
        }
        board
    }

    pub fn disk_count(&self, color: Occupant) -> usize {
        self.cells().filter(|cell| cell.occupant == color).count()
    }

    /// Game is over when the board is full, one color is wiped out, or
    /// neither side can move
    pub fn is_game_over(&self) -> bool {
        let dark = self.disk_count(Occupant::Dark);
        let light = self.disk_count(Occupant::Light);

        dark + light == self.size * self.size
            || dark.min(light) == 0
            || (!self.has_moves(Occupant::Dark) && !self.has_moves(Occupant::Light))
    }

    /// Color with more disks once the game is over
    /// Returns None while the game is running or on a draw
    pub fn winner(&self) -> Option<Occupant> {
        if !self.is_game_over() {
            return None;
        }

        let dark = self.disk_count(Occupant::Dark);
        let light = self.disk_count(Occupant::Light);
        if dark > light {
            Some(Occupant::Dark)
        } else if light > dark {
            Some(Occupant::Light)
        } else {
            None
        }
    }
}

impl Default for Board {
    /// Standard 8x8 starting position with undo enabled
    fn default() -> Self {
        let mut board = Board::blank(STANDARD_SIZE, true);
        board.initialize();
        board
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    /// Play out a game from the opening, picking moves by index
    fn arbitrary_board_state() -> impl Strategy<Value = (Board, Occupant)> {
        (prop::sample::select(vec![4usize, 6, 8]), prop::collection::vec(0usize..64, 0..40)).prop_map(
            |(size, picks)| {
                let mut board = Board::new(size, true).unwrap();
                board.initialize();
                let mut color = Occupant::Dark;

                for pick in picks {
                    if board.is_game_over() {
                        break;
                    }
                    let moves = board.available_moves(color);
                    if let Some(cell) = moves.get(pick % moves.len().max(1)) {
                        board.place(cell.x(), cell.y(), color).unwrap();
                    }
                    color = color.opponent();
                }

                (board, color)
            },
        )
    }

    proptest! {
        /// Every legal move is on an empty cell and captures something
        #[test]
        fn prop_available_moves_capture((board, color) in arbitrary_board_state()) {
            for cell in board.available_moves(color) {
                prop_assert!(cell.is_empty());
                prop_assert!(!board.closed_cells(&cell, color).is_empty());
            }
            prop_assert_eq!(board.has_moves(color), !board.available_moves(color).is_empty());
        }

        /// Flipped cells lie on a line through the placed disk, over an
        /// unbroken opposing run that ends at the first own disk, and only
        /// one side of each line flips
        #[test]
        fn prop_place_only_flips_closed_runs((board, color) in arbitrary_board_state(), pick in 0usize..64) {
            let moves = board.available_moves(color);
            prop_assume!(!moves.is_empty());
            let target = moves[pick % moves.len()];
            let before = board.occupants();

            let mut after = board.copy();
            let flipped = after.place(target.x(), target.y(), color).unwrap();
            let after_grid = after.occupants();

            let mut changed = 0;
            let mut sides = Vec::new();
            for y in 0..board.size() {
                for x in 0..board.size() {
                    if before[y][x] == after_grid[y][x] || (x, y) == (target.x(), target.y()) {
                        continue;
                    }
                    changed += 1;
                    prop_assert_eq!(before[y][x], color.opponent());
                    prop_assert_eq!(after_grid[y][x], color);

                    let dx = x as isize - target.x() as isize;
                    let dy = y as isize - target.y() as isize;
                    prop_assert!(dx == 0 || dy == 0 || dx.abs() == dy.abs(), "({}, {}) is off-axis", x, y);

                    // Walk from the placed disk: opposing disks up to here,
                    // then more opposing disks until the closing own disk
                    let step = (dx.signum(), dy.signum());
                    prop_assert!(!sides.contains(&(-step.0, -step.1)), "both sides of an axis flipped");
                    sides.push(step);
                    let mut cx = target.x() as isize + step.0;
                    let mut cy = target.y() as isize + step.1;
                    let mut passed = false;
                    loop {
                        let occupant = before[cy as usize][cx as usize];
                        if occupant == color {
                            break;
                        }
                        passed |= (cx, cy) == (x as isize, y as isize);
                        prop_assert_eq!(occupant, color.opponent());
                        cx += step.0;
                        cy += step.1;
                        prop_assert!(cx >= 0 && cy >= 0 && (cx as usize) < board.size() && (cy as usize) < board.size());
                    }
                    prop_assert!(passed, "({}, {}) lies past the closing disk", x, y);
                }
            }
            prop_assert_eq!(changed, flipped);
        }

        #[test]
        fn prop_disk_count_conservation((board, color) in arbitrary_board_state(), pick in 0usize..64) {
            let moves = board.available_moves(color);
            prop_assume!(!moves.is_empty());
            let target = moves[pick % moves.len()];

            let own = board.disk_count(color);
            let other = board.disk_count(color.opponent());
            let mut after = board.copy();
            let flipped = after.place(target.x(), target.y(), color).unwrap();

            prop_assert_eq!(after.disk_count(color), own + flipped + 1);
            prop_assert_eq!(after.disk_count(color.opponent()), other - flipped);
        }

        #[test]
        fn prop_place_then_restore_round_trip((board, color) in arbitrary_board_state(), pick in 0usize..64) {
            let moves = board.available_moves(color);
            prop_assume!(!moves.is_empty());
            let target = moves[pick % moves.len()];

            let mut copy = board.copy();
            copy.set_undo_enabled(true);
            let before = copy.occupants();
            copy.place(target.x(), target.y(), color).unwrap();
            prop_assert_eq!(copy.history_len(), 1);
            prop_assert!(copy.restore_previous_step());
            prop_assert_eq!(copy.occupants(), before);
        }

        #[test]
        fn prop_closed_cells_predicts_place((board, color) in arbitrary_board_state(), pick in 0usize..64) {
            let moves = board.available_moves(color);
            prop_assume!(!moves.is_empty());
            let target = moves[pick % moves.len()];

            let closed = board.closed_cells(&target, color);
            let mut after = board.copy();
            let flipped = after.place(target.x(), target.y(), color).unwrap();

            prop_assert_eq!(closed.len(), flipped);
            for cell in closed {
                prop_assert_eq!(after.cell_at(cell.x(), cell.y()).unwrap().occupant(), color);
            }
        }
    }
}
