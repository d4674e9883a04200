//! Table limits and default blind amounts.

use super::entities::Chips;

/// A table needs somebody to sit at it.
pub const MIN_PLAYERS: usize = 1;

/// 22 seats is the most a single deck can cover: 44 hole cards plus
/// 3 burn cards plus 5 community cards is exactly 52.
pub const MAX_PLAYERS: usize = 22;

/// Cards dealt face down to each seat.
pub const HOLE_CARDS: usize = 2;

/// Community cards on a full board.
pub const BOARD_SIZE: usize = 5;

pub const DEFAULT_SMALL_BLIND: Chips = 1;
pub const DEFAULT_BIG_BLIND: Chips = 2 * DEFAULT_SMALL_BLIND;
