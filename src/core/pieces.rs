//! Pieces module - static tetromino shape catalog
//!
//! Each kind has an ordered list of rotation states; the list length varies
//! per kind (I and the skew pieces only need two states, O needs one). A
//! rotation state is four mino offsets from the piece-local origin. There is
//! no kick table: a rotation either fits at the current origin or is
//! rejected outright by the caller.

use crate::types::{Color, PieceKind, BOARD_WIDTH};

/// Offset of a single mino relative to piece origin
pub type MinoOffset = (i8, i8);

/// Shape of a piece in one rotation state - 4 mino offsets
pub type PieceShape = [MinoOffset; 4];

const I_STATES: [PieceShape; 2] = [
    [(0, 0), (1, 0), (2, 0), (3, 0)],
    [(0, 0), (0, 1), (0, 2), (0, 3)],
];

const O_STATES: [PieceShape; 1] = [[(0, 0), (1, 0), (0, 1), (1, 1)]];

const T_STATES: [PieceShape; 4] = [
    [(1, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (2, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (1, 2)],
    [(1, 0), (0, 1), (1, 1), (1, 2)],
];

const S_STATES: [PieceShape; 2] = [
    [(1, 0), (2, 0), (0, 1), (1, 1)],
    [(0, 0), (0, 1), (1, 1), (1, 2)],
];

const Z_STATES: [PieceShape; 2] = [
    [(0, 0), (1, 0), (1, 1), (2, 1)],
    [(1, 0), (0, 1), (1, 1), (0, 2)],
];

const J_STATES: [PieceShape; 4] = [
    [(0, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (2, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (2, 2)],
    [(1, 0), (1, 1), (0, 2), (1, 2)],
];

const L_STATES: [PieceShape; 4] = [
    [(2, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (1, 2), (2, 2)],
    [(0, 1), (1, 1), (2, 1), (0, 2)],
    [(0, 0), (1, 0), (1, 1), (1, 2)],
];

/// Ordered rotation states for a piece kind
pub fn rotation_states(kind: PieceKind) -> &'static [PieceShape] {
    match kind {
        PieceKind::I => &I_STATES,
        PieceKind::O => &O_STATES,
        PieceKind::T => &T_STATES,
        PieceKind::S => &S_STATES,
        PieceKind::Z => &Z_STATES,
        PieceKind::J => &J_STATES,
        PieceKind::L => &L_STATES,
    }
}

/// Number of rotation states for a piece kind (rotation wraps modulo this)
pub fn rotation_count(kind: PieceKind) -> usize {
    rotation_states(kind).len()
}

/// Mino offsets for `kind` in rotation state `rotation`.
///
/// `rotation` must already be reduced modulo `rotation_count(kind)`; an
/// out-of-range index is an engine bug and panics.
pub fn shape(kind: PieceKind, rotation: u8) -> PieceShape {
    let states = rotation_states(kind);
    debug_assert!((rotation as usize) < states.len());
    states[rotation as usize]
}

/// Display color for a piece kind
pub fn color(kind: PieceKind) -> Color {
    match kind {
        PieceKind::I => Color::Cyan,
        PieceKind::O => Color::Yellow,
        PieceKind::T => Color::Purple,
        PieceKind::S => Color::Green,
        PieceKind::Z => Color::Red,
        PieceKind::J => Color::Blue,
        PieceKind::L => Color::Orange,
    }
}

/// Horizontal spawn origin: the first rotation state's bounding width,
/// centered on the board via integer floor division.
pub fn spawn_x(kind: PieceKind) -> i8 {
    let state = rotation_states(kind)[0];
    let width = state.iter().map(|&(x, _)| x).max().unwrap_or(0) + 1;
    (BOARD_WIDTH as i8 - width) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_counts() {
        assert_eq!(rotation_count(PieceKind::I), 2);
        assert_eq!(rotation_count(PieceKind::O), 1);
        assert_eq!(rotation_count(PieceKind::T), 4);
        assert_eq!(rotation_count(PieceKind::S), 2);
        assert_eq!(rotation_count(PieceKind::Z), 2);
        assert_eq!(rotation_count(PieceKind::J), 4);
        assert_eq!(rotation_count(PieceKind::L), 4);
    }

    #[test]
    fn test_shapes_have_four_minos_in_local_box() {
        for kind in PieceKind::ALL {
            for state in rotation_states(kind) {
                assert_eq!(state.len(), 4);
                for &(x, y) in state {
                    assert!((0..4).contains(&x), "{:?} offset x {} out of box", kind, x);
                    assert!((0..4).contains(&y), "{:?} offset y {} out of box", kind, y);
                }
            }
        }
    }

    #[test]
    fn test_shapes_have_distinct_minos() {
        for kind in PieceKind::ALL {
            for state in rotation_states(kind) {
                for i in 0..4 {
                    for j in (i + 1)..4 {
                        assert_ne!(state[i], state[j], "{:?} has duplicate mino", kind);
                    }
                }
            }
        }
    }

    #[test]
    fn test_spawn_x_centers_pieces() {
        // I is 4 wide: (10 - 4) / 2 = 3
        assert_eq!(spawn_x(PieceKind::I), 3);
        // O is 2 wide: (10 - 2) / 2 = 4
        assert_eq!(spawn_x(PieceKind::O), 4);
        // T, S, Z, J, L are 3 wide: (10 - 3) / 2 = 3
        for kind in [
            PieceKind::T,
            PieceKind::S,
            PieceKind::Z,
            PieceKind::J,
            PieceKind::L,
        ] {
            assert_eq!(spawn_x(kind), 3);
        }
    }

    #[test]
    fn test_colors_are_distinct() {
        for (i, a) in PieceKind::ALL.iter().enumerate() {
            for b in &PieceKind::ALL[i + 1..] {
                assert_ne!(color(*a), color(*b));
            }
        }
    }
}
