//! Seven-segment digit table.
//!
//! Each panel is one string of addressable LEDs wired as a 7-segment digit,
//! two LEDs per segment:
//! ```text
//!      0 1
//!   11     2
//!   10     3
//!     12 13
//!    9     4
//!    8     5
//!      7 6
//! ```
//! LED 14 (after the digit) is the status LED, see [`crate::config::STATUS_LED`].

/// One segment of the digit, i.e. a pair of adjacent LEDs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Segment {
    Top,
    TopLeft,
    TopRight,
    Mid,
    Bot,
    BotLeft,
    BotRight,
}

impl Segment {
    /// String positions of the two LEDs that make up this segment.
    pub const fn leds(self) -> (usize, usize) {
        match self {
            Segment::Top => (0, 1),
            Segment::TopRight => (2, 3),
            Segment::BotRight => (4, 5),
            Segment::Bot => (6, 7),
            Segment::BotLeft => (8, 9),
            Segment::TopLeft => (10, 11),
            Segment::Mid => (12, 13),
        }
    }
}

/// Segment slots of one digit, in the order
/// top, top-left, top-right, mid, bot, bot-left, bot-right.
/// `None` marks a segment that stays dark for this digit.
pub type SegmentMap = [Option<Segment>; 7];

/// A decimal digit, 0..=9.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Digit(u8);

impl Digit {
    pub const ZERO: Digit = Digit(0);
    /// Lights every segment; its map doubles as the "whole panel" set.
    pub const EIGHT: Digit = Digit(8);

    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Digit(value))
        } else {
            None
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

use Segment::*;

const T: Option<Segment> = Some(Top);
const TL: Option<Segment> = Some(TopLeft);
const TR: Option<Segment> = Some(TopRight);
const M: Option<Segment> = Some(Mid);
const B: Option<Segment> = Some(Bot);
const BL: Option<Segment> = Some(BotLeft);
const BR: Option<Segment> = Some(BotRight);
const OFF: Option<Segment> = None;

static DIGITS: [SegmentMap; 10] = [
    [T, TL, TR, OFF, B, BL, BR], // 0
    [OFF, OFF, TR, OFF, OFF, OFF, BR], // 1
    [T, OFF, TR, M, B, BL, OFF], // 2
    [T, OFF, TR, M, B, OFF, BR], // 3
    [OFF, TL, TR, M, OFF, OFF, BR], // 4
    [T, TL, OFF, M, B, OFF, BR], // 5
    [T, TL, OFF, M, B, BL, BR], // 6
    [T, OFF, TR, OFF, OFF, OFF, BR], // 7
    [T, TL, TR, M, B, BL, BR], // 8
    [T, TL, TR, M, B, OFF, BR], // 9
];

/// Segments lit for `digit`.
pub fn segments_for(digit: Digit) -> &'static SegmentMap {
    &DIGITS[usize::from(digit.0)]
}

/// LED positions lit for `digit`, both LEDs of each lit segment.
pub fn lit_leds(digit: Digit) -> impl Iterator<Item = usize> {
    segments_for(digit)
        .iter()
        .flatten()
        .flat_map(|segment| {
            let (a, b) = segment.leds();
            [a, b]
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_digits() -> impl Iterator<Item = Digit> {
        (0..=9).filter_map(Digit::new)
    }

    #[test]
    fn digit_rejects_out_of_range() {
        assert_eq!(Digit::new(9).map(Digit::value), Some(9));
        assert!(Digit::new(10).is_none());
        assert!(Digit::new(255).is_none());
    }

    #[test]
    fn eight_lights_every_segment() {
        assert!(segments_for(Digit::EIGHT).iter().all(Option::is_some));
        let mut leds: Vec<usize> = lit_leds(Digit::EIGHT).collect();
        leds.sort_unstable();
        assert_eq!(leds, (0..14).collect::<Vec<_>>());
    }

    #[test]
    fn every_digit_is_a_subset_of_eight() {
        let eight = segments_for(Digit::EIGHT);
        for digit in all_digits() {
            for (slot, full) in segments_for(digit).iter().zip(eight) {
                if let Some(segment) = slot {
                    assert_eq!(Some(*segment), *full, "digit {}", digit.value());
                }
            }
        }
    }

    #[test]
    fn union_of_all_digits_is_eight() {
        let mut union: Vec<usize> = all_digits().flat_map(lit_leds).collect();
        union.sort_unstable();
        union.dedup();
        let mut eight: Vec<usize> = lit_leds(Digit::EIGHT).collect();
        eight.sort_unstable();
        assert_eq!(union, eight);
    }

    #[test]
    fn one_uses_right_column_only() {
        let leds: Vec<usize> = lit_leds(Digit::new(1).unwrap()).collect();
        assert_eq!(leds, [2, 3, 4, 5]);
    }

    #[test]
    fn segment_counts_match_classic_encoding() {
        let counts: Vec<usize> = all_digits()
            .map(|d| segments_for(d).iter().flatten().count())
            .collect();
        assert_eq!(counts, [6, 2, 5, 5, 4, 5, 6, 3, 7, 6]);
    }

    #[test]
    fn no_led_is_shared_between_segments() {
        let mut leds: Vec<usize> = lit_leds(Digit::EIGHT).collect();
        let before = leds.len();
        leds.sort_unstable();
        leds.dedup();
        assert_eq!(leds.len(), before);
        assert!(leds.iter().all(|&led| led < crate::config::STATUS_LED));
    }
}
