//! Game module - the command/tick driven state machine
//!
//! Ties together board, shape catalog, RNG and scoring. The engine accepts
//! discrete commands (move, rotate, drops) plus a tick carrying elapsed real
//! time; it never reads a clock itself. There are two states: running and
//! game over. Game over is terminal and silently absorbs every command
//! except restart.

use crate::core::{
    pieces::{self, PieceShape},
    rng::PiecePicker,
    scoring::{next_drop_interval_ms, score_for},
    snapshot::{ActiveSnapshot, GameSnapshot},
    Board,
};
use crate::types::{
    GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, DROP_INTERVAL_START_MS,
    SPEED_RAMP_PERIOD_MS,
};

/// The currently falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    /// Rotation state index, always reduced modulo the kind's state count
    pub rotation: u8,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Create a piece at its spawn position: first rotation state,
    /// horizontally centered, top row.
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: 0,
            x: pieces::spawn_x(kind),
            y: 0,
        }
    }

    /// Mino offsets for the current rotation state
    pub fn shape(&self) -> PieceShape {
        pieces::shape(self.kind, self.rotation)
    }

    /// Absolute board coordinates of the four minos
    pub fn cells(&self) -> [(i8, i8); 4] {
        let mut cells = self.shape();
        for cell in &mut cells {
            cell.0 += self.x;
            cell.1 += self.y;
        }
        cells
    }

    /// Check if all minos land on vacant in-bounds cells
    pub fn fits(&self, board: &Board) -> bool {
        board.can_place(&self.cells())
    }

    fn translated(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    fn rotated(&self) -> Self {
        let count = pieces::rotation_count(self.kind) as u8;
        Self {
            rotation: (self.rotation + 1) % count,
            ..*self
        }
    }
}

/// Complete game state: board, falling piece, score and gravity clock.
///
/// Owned by the driver as a plain value; every command mutates it in place
/// and the driver polls [`Game::snapshot`] to render. No hidden globals.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    /// None exactly when the game is over
    active: Option<ActivePiece>,
    picker: PiecePicker,
    score: u32,
    game_over: bool,
    drop_interval_ms: u32,
    drop_timer_ms: u32,
    session_timer_ms: u32,
}

impl Game {
    /// Create a new game with the given RNG seed and a freshly spawned piece
    pub fn new(seed: u32) -> Self {
        let mut game = Self {
            board: Board::new(),
            active: None,
            picker: PiecePicker::new(seed),
            score: 0,
            game_over: false,
            drop_interval_ms: DROP_INTERVAL_START_MS,
            drop_timer_ms: 0,
            session_timer_ms: 0,
        };
        game.spawn_piece();
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub fn set_active(&mut self, piece: ActivePiece) {
        self.active = Some(piece);
    }

    /// Spawn the next piece from the picker. A spawn collision is the game
    /// over condition; the board is left untouched by the rejected spawn.
    fn spawn_piece(&mut self) -> bool {
        let piece = ActivePiece::spawn(self.picker.next());
        if !piece.fits(&self.board) {
            self.game_over = true;
            self.active = None;
            return false;
        }
        self.active = Some(piece);
        true
    }

    /// Commit `candidate` as the active piece if it fits, else ignore
    fn try_apply(&mut self, candidate: ActivePiece) -> bool {
        if candidate.fits(&self.board) {
            self.active = Some(candidate);
            true
        } else {
            false
        }
    }

    /// Move the active piece one column left. Advisory: returns false and
    /// changes nothing when blocked.
    pub fn move_left(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        self.try_apply(active.translated(-1, 0))
    }

    /// Move the active piece one column right
    pub fn move_right(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        self.try_apply(active.translated(1, 0))
    }

    /// Advance to the next rotation state at the same origin. No wall-kick
    /// search: near walls or the stack the rotation may simply fail.
    /// Rotating O is a committed no-op (single rotation state).
    pub fn rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        self.try_apply(active.rotated())
    }

    /// One gravity step: descend one row, or lock if the piece cannot.
    /// Returns true if the piece locked.
    pub fn soft_drop(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        if self.try_apply(active.translated(0, 1)) {
            return false;
        }
        self.lock_active();
        true
    }

    /// Drop straight to the resting surface and lock in a single command.
    /// Equivalent to repeated `soft_drop` until a lock occurs.
    pub fn hard_drop(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        let mut resting = active;
        while resting.translated(0, 1).fits(&self.board) {
            resting = resting.translated(0, 1);
        }
        self.active = Some(resting);
        self.lock_active();
        true
    }

    /// The lock sequence: write the piece into the board, clear full rows,
    /// score the clear, spawn the next piece (which may end the game).
    fn lock_active(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };
        self.board.lock(&active.cells(), pieces::color(active.kind));
        let cleared = self.board.clear_full_rows();
        self.score += score_for(cleared.len());
        self.spawn_piece();
    }

    /// Advance the gravity clock by `elapsed_ms` of real time.
    ///
    /// Performs one soft-drop step per full drop interval accumulated,
    /// consuming exactly one interval from the accumulator each time so
    /// timing never drifts. Independently, every 180 seconds of session
    /// time the drop interval shortens by one step down to its floor.
    /// Returns true if at least one gravity step fired.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.game_over {
            return false;
        }

        self.session_timer_ms += elapsed_ms;
        while self.session_timer_ms >= SPEED_RAMP_PERIOD_MS {
            self.session_timer_ms -= SPEED_RAMP_PERIOD_MS;
            self.drop_interval_ms = next_drop_interval_ms(self.drop_interval_ms);
        }

        self.drop_timer_ms += elapsed_ms;
        let mut stepped = false;
        while self.drop_timer_ms >= self.drop_interval_ms {
            self.drop_timer_ms -= self.drop_interval_ms;
            self.soft_drop();
            stepped = true;
            if self.game_over {
                break;
            }
        }
        stepped
    }

    /// Reinitialize: empty board, score 0, default interval, fresh piece.
    /// The RNG sequence continues from its current state so a restarted
    /// session does not replay the previous piece order.
    pub fn restart(&mut self) {
        let seed = self.picker.seed();
        *self = Self::new(seed);
    }

    /// Apply a driver command. Returns true if the command changed state.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::Rotate => self.rotate(),
            GameAction::SoftDrop => {
                let had_active = self.active.is_some();
                self.soft_drop();
                had_active
            }
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Fill `out` with the current read-only view, reusing its storage
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);

        if let Some(active) = self.active {
            let color = pieces::color(active.kind);
            for (x, y) in active.cells() {
                // Active cells are in bounds by invariant; guard anyway
                if (0..BOARD_WIDTH as i8).contains(&x) && (0..BOARD_HEIGHT as i8).contains(&y) {
                    out.board[y as usize][x as usize] = Some(color);
                }
            }
        }

        out.active = self.active.map(ActiveSnapshot::from);
        out.score = self.score;
        out.game_over = self.game_over;
        out.drop_interval_ms = self.drop_interval_ms;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(1)
    }
}
