//! Plain data and rules for an isometric tile-placement game where tiles carry a colored block
//! and a colored gem, with no windowing or drawing of its own.
//!
//! ## Summary
//!
//! A [game session](GameSession) owns a [pool](TilePool) of undrawn [tiles](Tile), a
//! [board](BoardGrid) of diamond-shaped [cells](BoardCell), and a [hand](Hand) of [tiles](Tile)
//! the player can place. The front end feeds it [pointer events](PointerEvent) and reads back
//! [render items](RenderItem) each frame. Every event is handled synchronously, to completion,
//! before the next one arrives.
//!
//! ## How is the game created?
//!
//! [GameSession::new] and [GameSession::with_rng] [check](GameConfig::check) a
//! [config](GameConfig), fill the pool with one [tile](Tile) for every
//! `(block_color, gem_color)` pair [repeated](GameConfig::no_sets), lay out the board, and draw
//! the hand from the pool. The [asset provider](AssetProvider) supplies the image sizes the
//! layout and hit testing need.
//!
//! ## How is the board laid out?
//!
//! The board background is divided into `board_size` by `board_size` cells. Each cell is a
//! diamond with bottom, left, top, and right vertices. Half a cell is
//! [`width / 2n`](BoardGeometry::width_division) wide and
//! [`height / 2n`](BoardGeometry::height_division) tall, both rounded to whole pixels. Cell
//! `(x, y)` has its bottom vertex `width_division * (x - y)` to the right of and
//! `height_division * (x + y)` above the bottom of the board.
//!
//! ## How are tiles moved?
//!
//! * Press: the [hand](Hand::on_pointer_press) selects the [tile](Tile) under the pointer and
//! marks every other [tile](Tile) sharing its block or gem color as a potential selection.
//! * Drag: the [hand](Hand::on_drag) moves the held [tile](Tile) at board scale, the
//! [board](BoardGrid::update_on_drag) hit tests its cells, and the
//! [placement rules](TileInteraction::on_drag) snap the [tile](Tile) to the cell under the
//! pointer.
//! * Release: the board [checks](check_single_selection) that at most one cell is selected, the
//! [hand](Hand::on_pointer_release) outlines the selection, and the
//! [placement rules](TileInteraction::on_pointer_release) either place the [tile](Tile) or
//! return it to its slot.
//!
//! The order is fixed by the [dispatch table](DispatchTable).
//!
//! ## How is the game drawn?
//!
//! It isn't, here. Every [tile](Tile) carries a [sprite](Sprite) with a position, scale,
//! rotation, and draw orders. [GameSession::render_items] lists what to draw this frame
//! sorted by draw order.
//!
//! ## How are game states tested when properties are private?
//!
//! The `test` build configuration adds helper methods to build hands from chosen
//! [tiles](Tile), force cell selections, and generate random colors.

// Document!
#![forbid(
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::bare_urls
)]
// Don't leave a build in a half finished state!
#![deny(
    warnings,
    future_incompatible,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2018_idioms,
    rust_2021_compatibility,
    unused,
    single_use_lifetimes,
    unreachable_pub,
    missing_debug_implementations,
    unsafe_code
)]

pub use assets::*;
pub use board::*;
pub use config::*;
pub use consts::*;
pub use geometry::*;
pub use hand::*;
pub use interaction::*;
pub use pool::*;
#[cfg(test)]
pub use random::*;
pub use session::*;
pub use sprite::*;
pub use tile::*;
pub use types::*;

mod assets;
mod board;
mod config;
mod consts;
mod geometry;
mod hand;
mod interaction;
mod pool;
#[cfg(test)]
mod random;
mod session;
mod sprite;
mod tile;
mod types;
