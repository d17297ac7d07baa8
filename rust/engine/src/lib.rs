//! # showdown-engine: Five-Card Hand Comparison Core
//!
//! Decides which of two five-card poker hands is stronger under standard
//! Texas Hold'em rankings. Everything here is a pure function over immutable
//! values: parse text into a [`hand::Hand`], classify it into one of nine
//! [`category::Category`] values, and break ties within a category.
//!
//! ## Core Modules
//!
//! - [`cards`] - Rank, Suit and Card values with their text symbols
//! - [`hand`] - The five-card Hand and its text parser
//! - [`category`] - Category classification cascade
//! - [`tiebreak`] - Per-category secondary keys for equal categories
//! - [`compare`] - Verdict and the comparison entry points
//! - [`deck`] - Seeded deck for dealing sample hands
//! - [`errors`] - Parse errors
//!
//! ## Quick Start
//!
//! ```rust
//! use showdown_engine::compare::{compare, Verdict};
//! use showdown_engine::hand::parse_hand;
//!
//! let first = parse_hand("2H 2D 3H 3D 4H").unwrap();
//! let second = parse_hand("2S 2C 5H 5D 4S").unwrap();
//!
//! let verdict = compare(&first, &second);
//! assert_eq!(verdict, Verdict::SecondWins);
//! println!("{}", verdict.message());
//! ```
//!
//! ## Errors
//!
//! Only parsing can fail:
//!
//! ```rust
//! use showdown_engine::errors::ParseError;
//! use showdown_engine::hand::parse_hand;
//!
//! match parse_hand("2H 4D 6S 8C 1D") {
//!     Err(ParseError::UnknownRankOrSuit { token }) => assert_eq!(token, "1D"),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

pub mod cards;
pub mod category;
pub mod compare;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod tiebreak;
