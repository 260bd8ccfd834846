//! A single-player blackjack engine with High-Low card counting and optional
//! `no_std` support.
//!
//! The crate provides a [`Game`] type that runs the full round flow: betting,
//! dealing, hits, stands, doubles and splits, dealer play and settlement. It
//! keeps a running and true count over the shoe for card-counting practice.
//!
//! # Example
//!
//! ```
//! use bjcount::{Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.place_bet(25.0).unwrap();
//! while game.state() != GameState::RoundOver {
//!     game.stand().unwrap();
//! }
//! for outcome in game.outcomes() {
//!     println!("{outcome}");
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod count;
pub mod error;
pub mod game;
pub mod hand;
mod money;
pub mod options;
pub mod result;
pub mod shoe;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use count::{RunningCount, hi_lo_value};
pub use error::{ActionError, BetError, DealerError, ReshuffleError, ShoeError};
pub use game::{Game, GameState};
pub use hand::{Hand, Seat};
pub use options::{DealerPace, DoubleOption, GameOptions, RoundingMode, SplitDeal};
pub use result::{HandOutcome, HandResult, RoundResult};
pub use shoe::Shoe;
