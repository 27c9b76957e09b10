//! Question module - multiplication facts and answer options
//!
//! Distractors are chosen to be *plausible* mistakes: off by one or two, off by
//! one row/column of the table (`±num1`), or off by three / `±num2`. The exact
//! offset pools define the difficulty of the quiz, so they are kept as-is.

use arrayvec::ArrayVec;

use crate::rng::SimpleRng;
use crate::types::{QuizMode, GLYPHS, MAX_MULTIPLIER, MAX_TABLE, MIN_MULTIPLIER, MIN_TABLE, OPTION_COUNT};

/// One multiplication fact on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Question {
    /// Multiplicand (the table), 2..=9; also the number of grid rows
    pub num1: u8,
    /// Multiplier, 1..=9; also the number of grid columns
    pub num2: u8,
    pub correct: i32,
    /// Display order; exactly one equals `correct`
    pub options: [i32; OPTION_COUNT],
    pub glyph: char,
}

impl Question {
    /// Draw a fresh question for `mode`.
    pub fn draw(mode: QuizMode, rng: &mut SimpleRng) -> Self {
        let num1 = match mode.fixed_table() {
            Some(n) => n,
            None => rng.next_inclusive(MIN_TABLE as i32, MAX_TABLE as i32) as u8,
        };
        let num2 = rng.next_inclusive(MIN_MULTIPLIER as i32, MAX_MULTIPLIER as i32) as u8;
        let correct = num1 as i32 * num2 as i32;

        let (wrong1, wrong2) = draw_distractors(num1, num2, correct, rng);
        let mut options = build_options(correct, wrong1, wrong2);
        rng.shuffle(&mut options);

        let glyph = rng.choose(&GLYPHS);

        Self {
            num1,
            num2,
            correct,
            options,
            glyph,
        }
    }

    pub fn is_correct(&self, value: i32) -> bool {
        value == self.correct
    }

    /// Option at display index, if in range.
    pub fn option(&self, index: usize) -> Option<i32> {
        self.options.get(index).copied()
    }

    /// Display index of the correct option.
    pub fn correct_index(&self) -> usize {
        self.options
            .iter()
            .position(|&v| v == self.correct)
            .unwrap_or(0)
    }
}

/// Draw the two raw distractors for a fact.
///
/// `wrong1` is never equal to `correct` and always positive. `wrong2` is
/// always positive and distinct from `wrong1`, except when its replacement
/// draw happens to land on `wrong1` again; [`build_options`] absorbs that.
pub fn draw_distractors(num1: u8, num2: u8, correct: i32, rng: &mut SimpleRng) -> (i32, i32) {
    let n1 = num1 as i32;
    let n2 = num2 as i32;

    let mut wrong1 = correct + rng.choose(&[-1, 1, -2, 2, n1, -n1]);
    if wrong1 <= 0 {
        wrong1 = correct + rng.next_inclusive(3, 5);
    }

    let mut wrong2 = correct + rng.choose(&[-3, 3, -n2, n2]);
    if wrong2 <= 0 || wrong2 == wrong1 {
        wrong2 = correct + rng.next_inclusive(6, 10);
    }

    (wrong1, wrong2)
}

/// Assemble `[correct, first wrong, second wrong]` before shuffling.
///
/// Candidates are taken in order `wrong1`, `wrong2`, `wrong1 + 1`; a candidate
/// is skipped when it is not positive or already present. If fewer than three
/// distinct values survive, [`fallback_options`] is used instead.
pub fn build_options(correct: i32, wrong1: i32, wrong2: i32) -> [i32; OPTION_COUNT] {
    let mut opts: ArrayVec<i32, OPTION_COUNT> = ArrayVec::new();
    opts.push(correct);

    for candidate in [wrong1, wrong2, wrong1 + 1] {
        if opts.is_full() {
            break;
        }
        if candidate > 0 && !opts.contains(&candidate) {
            opts.push(candidate);
        }
    }

    opts.into_inner()
        .unwrap_or_else(|_| fallback_options(correct))
}

/// Deterministic option set used when distractor generation collides.
///
/// # Examples
///
/// ```
/// use times_quiz_core::question::fallback_options;
///
/// assert_eq!(fallback_options(4), [4, 9, 1]);
/// assert_eq!(fallback_options(3), [3, 8, 10]);
/// ```
pub fn fallback_options(correct: i32) -> [i32; OPTION_COUNT] {
    let third = if correct > 3 { correct - 3 } else { correct + 7 };
    [correct, correct + 5, third]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_valid(q: &Question) {
        assert!(q.options.contains(&q.correct), "{:?}", q);
        assert!(q.options.iter().all(|&v| v > 0), "{:?}", q);
        assert_ne!(q.options[0], q.options[1], "{:?}", q);
        assert_ne!(q.options[0], q.options[2], "{:?}", q);
        assert_ne!(q.options[1], q.options[2], "{:?}", q);
    }

    #[test]
    fn test_draw_random_mode_ranges() {
        let mut rng = SimpleRng::new(2024);
        for _ in 0..5000 {
            let q = Question::draw(QuizMode::Random, &mut rng);
            assert!((2..=9).contains(&q.num1));
            assert!((1..=9).contains(&q.num2));
            assert_eq!(q.correct, q.num1 as i32 * q.num2 as i32);
            assert!(GLYPHS.contains(&q.glyph));
            assert_valid(&q);
        }
    }

    #[test]
    fn test_draw_fixed_table_mode() {
        for n in 2..=9u8 {
            let mut rng = SimpleRng::new(n as u32);
            for _ in 0..500 {
                let q = Question::draw(QuizMode::Table(n), &mut rng);
                assert_eq!(q.num1, n);
                assert_valid(&q);
            }
        }
    }

    #[test]
    fn test_distractors_never_equal_correct() {
        let mut rng = SimpleRng::new(77);
        for num1 in 2..=9u8 {
            for num2 in 1..=9u8 {
                let correct = num1 as i32 * num2 as i32;
                for _ in 0..50 {
                    let (w1, w2) = draw_distractors(num1, num2, correct, &mut rng);
                    assert!(w1 > 0 && w1 != correct);
                    assert!(w2 > 0 && w2 != correct);
                }
            }
        }
    }

    #[test]
    fn test_build_options_keeps_order_before_shuffle() {
        assert_eq!(build_options(12, 11, 15), [12, 11, 15]);
    }

    #[test]
    fn test_build_options_uses_wrong1_plus_one_on_collision() {
        // wrong2 collided with wrong1.
        assert_eq!(build_options(12, 14, 14), [12, 14, 15]);
    }

    #[test]
    fn test_build_options_skips_non_positive() {
        assert_eq!(build_options(2, 3, 0), [2, 3, 4]);
    }

    #[test]
    fn test_build_options_falls_back_when_exhausted() {
        // wrong1 + 1 == correct and wrong2 == wrong1: only two distinct values.
        assert_eq!(build_options(4, 3, 3), fallback_options(4));
        assert_eq!(build_options(4, 3, 3), [4, 9, 1]);
    }

    #[test]
    fn test_fallback_options_small_answers() {
        for c in 1..=3 {
            assert_eq!(fallback_options(c), [c, c + 5, c + 7]);
        }
        assert_eq!(fallback_options(81), [81, 86, 78]);
    }

    #[test]
    fn test_correct_index() {
        let q = Question {
            num1: 3,
            num2: 4,
            correct: 12,
            options: [11, 15, 12],
            glyph: '🍎',
        };
        assert_eq!(q.correct_index(), 2);
        assert_eq!(q.option(1), Some(15));
        assert_eq!(q.option(3), None);
    }
}
