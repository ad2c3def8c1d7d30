use crate::{
    check_single_selection, AssetProvider, BoardGeometry, BoardGrid, ConfigError, Coordinate,
    GameConfig, Hand, InteractionError, PoolError, RenderItem, Renderable, TileId,
    TileInteraction, TilePool,
};
pub use dispatch::*;
use log::{info, trace};
use rand::Rng;
use smallvec::SmallVec;
use std::collections::HashSet;
use tap::Tap;
use thiserror::Error;

mod dispatch;

/// Describes the reason why a [session](GameSession) could not start or handle an event.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The [config](GameConfig) failed its [check](GameConfig::check).
    #[error("invalid config: {0:?}")]
    InvalidConfig(HashSet<ConfigError>),
    /// The pool could not fill the hand.
    #[error(transparent)]
    Pool(#[from] PoolError),
    /// A release could not be resolved.
    #[error(transparent)]
    Interaction(#[from] InteractionError),
}

/// What a [handled](GameSession::handle) [pointer event](PointerEvent) did.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum EventOutcome {
    /// A press picked up a [tile](crate::Tile).
    Selected {
        /// The selected [tile](crate::Tile).
        tile: TileId,
    },
    /// A drag moved the held [tile](crate::Tile).
    Moved {
        /// The moved [tile](crate::Tile).
        tile: TileId,
        /// The cell it snapped to, if any.
        snapped: Option<Coordinate>,
    },
    /// A release put the held [tile](crate::Tile) on the board.
    Placed {
        /// The placed [tile](crate::Tile).
        tile: TileId,
        /// The cell it now occupies.
        coordinate: Coordinate,
    },
    /// A release sent the held [tile](crate::Tile) back to its slot.
    Returned {
        /// The returned [tile](crate::Tile).
        tile: TileId,
    },
    /// Nothing changed hands or moved.
    Unchanged,
}

/// One game: the pool, the board, and the hand, driven by [pointer events](PointerEvent).
///
/// Every event is handled to completion by [GameSession::handle]. Tiles and cells change
/// synchronously, so the rendering layer only needs to read [GameSession::render_items]
/// once per frame.
#[derive(Debug)]
pub struct GameSession<A: AssetProvider> {
    config: GameConfig,
    assets: A,
    pool: TilePool,
    board: BoardGrid,
    hand: Hand,
    interaction: TileInteraction,
    dispatch: DispatchTable,
    frame: u64,
}

impl<A: AssetProvider> GameSession<A> {
    /// Starts a game, drawing the hand with the thread-local generator.
    ///
    /// # Errors
    ///
    /// * [SessionError::InvalidConfig] with every problem [found](GameConfig::check) in `config`.
    ///
    /// # See Also
    ///
    /// * [GameSession::with_rng]
    pub fn new(config: GameConfig, assets: A) -> Result<GameSession<A>, SessionError> {
        GameSession::with_rng(&mut rand::thread_rng(), config, assets)
    }

    /// Starts a game: checks `config`, then fills the pool, lays out the board, and draws the
    /// hand from the pool, in that order.
    ///
    /// # Arguments
    ///
    /// * `rng`: The source of randomness for the first hand.
    /// * `config`: The sizes and scales of the game.
    /// * `assets`: The image sizes used to lay out the board and hit test [tiles](crate::Tile).
    ///
    /// # Errors
    ///
    /// * [SessionError::InvalidConfig] with every problem [found](GameConfig::check) in `config`.
    /// Nothing is built.
    pub fn with_rng<R: Rng + ?Sized>(
        rng: &mut R,
        config: GameConfig,
        assets: A,
    ) -> Result<GameSession<A>, SessionError> {
        config.check().map_err(SessionError::InvalidConfig)?;

        let mut pool = TilePool::new(config.no_sets);
        let board = BoardGrid::new(BoardGeometry::from_config(&config, &assets));
        let hand = Hand::new_with(rng, &config, &mut pool, &assets)?;
        info!(
            "started a game on a {} by {} board with {} tiles in hand and {} in the pool",
            config.board_size,
            config.board_size,
            hand.len(),
            pool.remaining_count()
        );

        Ok(GameSession {
            config,
            assets,
            pool,
            board,
            hand,
            interaction: TileInteraction::new(),
            dispatch: DispatchTable::default(),
            frame: 0,
        })
    }

    /// Runs `event` through every [component](Component) the [dispatch table](DispatchTable)
    /// lists for its kind, in order. Cell selections never outlive a release.
    ///
    /// # Errors
    ///
    /// * [SessionError::Interaction] when a release finds more than one selected cell or the
    /// snapped cell cannot take the [tile](crate::Tile). The held [tile](crate::Tile) returns to
    /// its slot.
    ///
    /// # Returns
    ///
    /// What the last interested [component](Component) did.
    pub fn handle(&mut self, event: PointerEvent) -> Result<EventOutcome, SessionError> {
        let kind = event.kind();
        let components: SmallVec<[Component; 3]> = self.dispatch.components(kind).into();
        trace!("dispatching {:?} to {:?}", event, components);

        let mut outcome = EventOutcome::Unchanged;
        for component in components {
            match self.run(component, event) {
                Ok(Some(next)) => outcome = next,
                Ok(None) => {}
                Err(error) => {
                    if kind == PointerEventKind::Release {
                        self.board.clear_selection();
                    }
                    return Err(error);
                }
            }
        }
        if kind == PointerEventKind::Release {
            self.board.clear_selection();
        }

        Ok(outcome)
    }

    fn run(
        &mut self,
        component: Component,
        event: PointerEvent,
    ) -> Result<Option<EventOutcome>, SessionError> {
        let pointer = event.position();
        let outcome = match (component, event) {
            (Component::Hand, PointerEvent::Press { .. }) => {
                self.interaction.cancel(&mut self.hand);
                self.hand
                    .on_pointer_press(pointer)
                    .map(|tile| EventOutcome::Selected { tile })
            }
            (Component::Hand, PointerEvent::Drag { dx, dy, .. }) => {
                self.hand.on_drag(dx, dy);
                None
            }
            (Component::Hand, PointerEvent::Release { .. }) => {
                self.hand.on_pointer_release();
                None
            }
            (Component::Board, PointerEvent::Drag { .. }) => {
                self.board.update_on_drag(pointer);
                None
            }
            (Component::Board, PointerEvent::Release { .. }) => {
                if let Err(error) = check_single_selection(&self.board) {
                    self.hand.on_pointer_release();
                    self.interaction.cancel(&mut self.hand);
                    return Err(error.into());
                }
                None
            }
            (Component::Interaction, PointerEvent::Drag { .. }) => {
                let snapped = self.interaction.on_drag(&mut self.hand, &self.board);
                self.hand
                    .held_tile()
                    .filter(|tile| tile.status().is_held())
                    .map(|tile| EventOutcome::Moved {
                        tile: tile.id(),
                        snapped,
                    })
            }
            (Component::Interaction, PointerEvent::Release { .. }) => Some(
                self.interaction
                    .on_pointer_release(&mut self.hand, &mut self.board)?,
            ),
            (component, event) => {
                trace!("{:?} ignores {:?}", component, event.kind());
                None
            }
        };

        Ok(outcome)
    }

    /// Advances the frame counter. Every change already happened while handling events, so
    /// this only marks that the rendering layer may read the new state.
    pub fn update(&mut self, dt: f32) {
        self.frame += 1;
        trace!("frame {} after {}s", self.frame, dt);
    }

    /// Draws one [tile](crate::Tile) into every empty hand slot, or as many as remain in the
    /// pool when there are fewer.
    ///
    /// # Errors
    ///
    /// * [SessionError::Pool] is passed on from [Hand::refill].
    ///
    /// # Returns
    ///
    /// The number of [tiles](crate::Tile) drawn.
    pub fn refill_hand(&mut self) -> Result<usize, SessionError> {
        Ok(self.hand.refill(&mut self.pool, &self.assets)?)
    }

    /// Every image to draw this frame, from the board background up to the held
    /// [tile](crate::Tile), sorted by draw order. Items with equal orders keep board before hand.
    pub fn render_items(&self) -> Vec<RenderItem> {
        self.board
            .render_items()
            .into_iter()
            .chain(self.hand.render_items())
            .collect::<Vec<_>>()
            .tap_mut(|items| items.sort_by_key(|item| item.order))
    }

    /// The [config](GameConfig) the game started with.
    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The image sizes the game was laid out with.
    #[inline]
    pub fn assets(&self) -> &A {
        &self.assets
    }

    /// The [tiles](crate::Tile) not drawn yet.
    #[inline]
    pub fn pool(&self) -> &TilePool {
        &self.pool
    }

    /// The number of [tiles](crate::Tile) not drawn yet.
    #[inline]
    pub fn pool_len(&self) -> usize {
        self.pool.remaining_count()
    }

    /// The board and every placed [tile](crate::Tile).
    #[inline]
    pub fn board(&self) -> &BoardGrid {
        &self.board
    }

    /// The player's [tiles](crate::Tile).
    #[inline]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// The placement rules and the cell the held [tile](crate::Tile) snapped to.
    #[inline]
    pub fn interaction(&self) -> &TileInteraction {
        &self.interaction
    }

    /// Which [components](Component) handle which events.
    #[inline]
    pub fn dispatch_table(&self) -> &DispatchTable {
        &self.dispatch
    }

    /// The number of [updates](GameSession::update) so far.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }
}
