//! Core card types: Card, Rank, Suit, with the game's custom ordering.

/// Suit order is only a tiebreak between cards of equal rank:
/// Diamonds < Clubs < Hearts < Spades.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Diamonds,
    Clubs,
    Hearts,
    Spades,
}

/// Rank order is the game's own ladder, not face value: Four is the lowest
/// rank and Three the highest. Declaration order drives `Ord`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    Two,
    Three,
}

impl Rank {
    /// Position on the rank ladder (Four = 0 .. Three = 12). Used for
    /// straight contiguity checks.
    pub fn value(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { suit, rank }
    }
}

/// Total order on cards: rank first, suit as tiebreak. This is the one
/// comparison the whole rules module is built on.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.rank.cmp(&other.rank) {
            std::cmp::Ordering::Equal => self.suit.cmp(&other.suit),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Marker card deciding one landlord seat (together with [`SPADE_ACE`]).
pub const SPADE_THREE: Card = Card::new(Rank::Three, Suit::Spades);
/// Marker card deciding the other landlord seat.
pub const SPADE_ACE: Card = Card::new(Rank::Ace, Suit::Spades);
/// Holder of this card leads the first trick-round and must play it.
pub const DIAMOND_FOUR: Card = Card::new(Rank::Four, Suit::Diamonds);

pub const ALL_SUITS: [Suit; 4] = [Suit::Diamonds, Suit::Clubs, Suit::Hearts, Suit::Spades];

pub const ALL_RANKS: [Rank; 13] = [
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
    Rank::Two,
    Rank::Three,
];
