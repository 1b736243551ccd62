//! Seat math for the fixed 4-seat table.
//!
//! Turn order in this game runs counter-clockwise: seat index decreases,
//! modulo 4. Every layer shares these helpers so "who acts next" has a single
//! source of truth.

pub const SEATS: usize = 4;

/// Seat index, 0..=3.
pub type Seat = u8;

#[inline]
pub fn seat_offset(seat: Seat, delta: i8) -> Seat {
    let seat_i = seat as i16;
    let delta_i = delta as i16;
    ((seat_i + delta_i).rem_euclid(SEATS as i16)) as Seat
}

/// The seat acting after `seat` (counter-clockwise: 3 → 2 → 1 → 0 → 3).
#[inline]
pub fn next_seat(seat: Seat) -> Seat {
    seat_offset(seat, -1)
}
