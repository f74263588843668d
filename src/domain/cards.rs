//! Card ranks and the fixed 16-card pack.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// The eight ranks, totally ordered by strength: `Guard` (1) is the weakest,
/// `Princess` (8) the strongest.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Card {
    Guard = 1,
    Priest = 2,
    Baron = 3,
    Handmaid = 4,
    Prince = 5,
    King = 6,
    Countess = 7,
    Princess = 8,
}

impl Card {
    /// All ranks, weakest first.
    pub const ALL: [Card; 8] = [
        Card::Guard,
        Card::Priest,
        Card::Baron,
        Card::Handmaid,
        Card::Prince,
        Card::King,
        Card::Countess,
        Card::Princess,
    ];

    /// Numeric strength, 1..=8. This is also the log-token representation.
    pub const fn value(self) -> u8 {
        self as u8
    }

    pub const fn from_value(value: u8) -> Option<Card> {
        match value {
            1 => Some(Card::Guard),
            2 => Some(Card::Priest),
            3 => Some(Card::Baron),
            4 => Some(Card::Handmaid),
            5 => Some(Card::Prince),
            6 => Some(Card::King),
            7 => Some(Card::Countess),
            8 => Some(Card::Princess),
            _ => None,
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.value())
    }
}

/// The fixed pack: five guards, two each of priest, baron, handmaid and
/// prince, and one each of king, countess and princess.
pub const PACK: [Card; 16] = [
    Card::Princess,
    Card::Countess,
    Card::King,
    Card::Prince,
    Card::Prince,
    Card::Handmaid,
    Card::Handmaid,
    Card::Baron,
    Card::Baron,
    Card::Priest,
    Card::Priest,
    Card::Guard,
    Card::Guard,
    Card::Guard,
    Card::Guard,
    Card::Guard,
];
