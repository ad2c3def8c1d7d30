use crate::TILES_LEN;
use konst::primitive::parse_usize;
use konst::{option, result};

/// All small, dynamically allocated properties which store hand data will be stored
/// on the stack until the number of [tiles](crate::Tile) in a hand becomes greater
/// than `HAND_CAPACITY`. When there are more than `HAND_CAPACITY` [tiles](crate::Tile)
/// in a hand, its data will be heap allocated. If the environment variable named
/// `HAND_CAPACITY` is present at compile time and is able to be parsed into a `usize`,
/// set to the value of the environment variable. Otherwise, it is set to `6`.
///
/// # See Also
///
/// * [Hand](crate::Hand)
/// * [DEFAULT_HAND_SIZE](crate::DEFAULT_HAND_SIZE)
pub const HAND_CAPACITY: usize = option::unwrap_or!(
    option::and_then!(option_env!("HAND_CAPACITY"), |str| result::ok!(
        parse_usize(str)
    )),
    6
);
/// The largest number of rows (and columns) a [board](crate::BoardGrid) may be divided into.
/// If the environment variable named `BOARD_SIZE_LIMIT` is present at compile time and is able
/// to be parsed into a `usize`, set to the value of the environment variable.
/// Otherwise, it is set to `64`.
///
/// # See Also
///
/// * [GameConfig::check](crate::GameConfig::check)
pub const BOARD_SIZE_LIMIT: usize = option::unwrap_or!(
    option::and_then!(option_env!("BOARD_SIZE_LIMIT"), |str| result::ok!(
        parse_usize(str)
    )),
    64
);
const _: () = assert!(BOARD_SIZE_LIMIT > 0);
/// The maximum number of [tiles](crate::Tile) allowed in the [pool](crate::TilePool). If
/// the environment variable named `TILE_LIMIT` is present at compile time, is able to be parsed
/// into a `usize`, and is greater than or equal to the [number of tile variants](TILES_LEN),
/// set to the value of the environment variable. Otherwise, it is set to `10_000`.
///
/// # See Also
///
/// * [GameConfig::check](crate::GameConfig::check)
pub const TILE_LIMIT: usize = option::unwrap_or!(
    option::and_then!(option_env!("TILE_LIMIT"), |str| result::ok!(parse_usize(
        str
    ))),
    10_000
);
const _: () = assert!(TILE_LIMIT >= TILES_LEN);

/// Distance between neighbouring [tiles](crate::Tile) in a hand before scaling. `50` pixels.
pub const HAND_SPACER: f32 = 50.0;
/// Distance between the bottom of the window and the first row of the hand. `25` pixels.
pub const HAND_ORIGIN_Y: f32 = 25.0;
/// Number of columns in the hand layout.
pub const HAND_COLUMNS: usize = 3;
/// Number of rows in the hand layout.
pub const HAND_ROWS: usize = 2;

/// Draw order of the board background, below everything else.
pub const BOARD_ORDER: i32 = 0;
/// Draw order of a block while its [tile](crate::Tile) is held in hand.
pub const HAND_BLOCK_ORDER: i32 = 49;
/// Draw order of a gem while its [tile](crate::Tile) is held in hand.
pub const HAND_GEM_ORDER: i32 = 50;
/// Gem draw order of a [tile](crate::Tile) on cell `(0, 0)` before the row and column offset.
///
/// # See Also
///
/// * [placement_order](crate::placement_order)
pub const PLACEMENT_ORDER_BASE: i32 = 40;
