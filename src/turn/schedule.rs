//! Who rolls when.

use crate::core::PlayerId;

/// Scheduled move slots per turn (one die each).
pub const SLOTS_PER_TURN: usize = 3;

/// The player who owns scheduled slot `slot_index` (0-based) of a turn.
///
/// Slots alternate between the initiating player and the next seat: with
/// two players a turn started by player 1 runs P1, P2, P1.
///
/// ```
/// use rust_ludo::core::PlayerId;
/// use rust_ludo::turn::slot_owner;
///
/// let p1 = PlayerId::new(0);
/// let p2 = PlayerId::new(1);
/// let owners: Vec<_> = (0..3).map(|slot| slot_owner(slot, p2, 2)).collect();
/// assert_eq!(owners, vec![p2, p1, p2]);
/// ```
#[must_use]
pub fn slot_owner(slot_index: usize, initiating_player: PlayerId, player_count: usize) -> PlayerId {
    if slot_index % 2 == 0 {
        initiating_player
    } else {
        initiating_player.next(player_count)
    }
}

/// The player who initiates turn `turn_number` (1-based), round-robin.
#[must_use]
pub fn initiating_player(turn_number: u32, player_count: usize) -> PlayerId {
    let index = (turn_number.saturating_sub(1) as usize) % player_count;
    PlayerId::new(index as u8)
}
