//! A complete simulated game.
//!
//! [`Game`] owns everything one game needs: board, dice, selectors and move
//! log. Nothing is global, so independent games can be built and run on
//! separate threads.
//!
//! ## Example
//!
//! ```
//! use rust_ludo::{GameConfig, Game};
//!
//! let config = GameConfig::new().with_rounds(4).with_seed(42);
//! let mut game = Game::new(config.clone()).unwrap();
//! let history = game.run().unwrap();
//!
//! // Same seed, same history.
//! let replay = Game::new(config).unwrap().run().unwrap();
//! assert_eq!(history, replay);
//! ```

mod session;

pub use session::{create_game, Game};
