//! Scoring module - line-clear points and the drop-interval ramp
//!
//! The score table is deliberately non-linear so multi-line clears pay
//! disproportionately more than clearing the same rows one at a time.

use crate::types::{DROP_INTERVAL_FLOOR_MS, DROP_INTERVAL_STEP_MS, LINE_SCORES};

/// Points awarded for clearing `lines` rows at once.
///
/// `lines` is at most 4 (no piece is taller than 4 rows); a larger value
/// is an engine bug and panics.
pub fn score_for(lines: usize) -> u32 {
    LINE_SCORES[lines]
}

/// Next drop interval after a speed-ramp step: one fixed step faster,
/// floored at the minimum interval.
pub fn next_drop_interval_ms(current_ms: u32) -> u32 {
    current_ms
        .saturating_sub(DROP_INTERVAL_STEP_MS)
        .max(DROP_INTERVAL_FLOOR_MS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DROP_INTERVAL_START_MS;

    #[test]
    fn test_score_table() {
        assert_eq!(score_for(0), 0);
        assert_eq!(score_for(1), 10);
        assert_eq!(score_for(2), 20);
        assert_eq!(score_for(3), 50);
        assert_eq!(score_for(4), 100);
    }

    #[test]
    #[should_panic]
    fn test_score_for_panics_past_table() {
        score_for(5);
    }

    #[test]
    fn test_interval_ramp_steps_down() {
        assert_eq!(next_drop_interval_ms(DROP_INTERVAL_START_MS), 900);
        assert_eq!(next_drop_interval_ms(900), 800);
        assert_eq!(next_drop_interval_ms(200), 100);
    }

    #[test]
    fn test_interval_ramp_floors() {
        assert_eq!(next_drop_interval_ms(100), 100);
        assert_eq!(next_drop_interval_ms(150), 100);
        assert_eq!(next_drop_interval_ms(0), 100);
    }

    #[test]
    fn test_interval_ramp_monotone() {
        let mut interval = DROP_INTERVAL_START_MS;
        for _ in 0..20 {
            let next = next_drop_interval_ms(interval);
            assert!(next <= interval);
            assert!(next >= 100);
            interval = next;
        }
        assert_eq!(interval, 100);
    }
}
