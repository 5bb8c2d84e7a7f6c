//! Automated play: legal-action enumeration, policies and whole-game playouts.
//!
//! Used by the benches, the property tests and the Python binding to run
//! many games without a view.
//!
//! ## Usage
//!
//! ```
//! use card_dragon::autoplay::{play_out, GreedyPolicy};
//! use card_dragon::core::GameRng;
//! use card_dragon::engine::EngineBuilder;
//!
//! let mut engine = EngineBuilder::new().build(3).unwrap();
//! let summary = play_out(&mut engine, &GreedyPolicy::default(), &mut GameRng::new(3), 2_000);
//! assert!(summary.actions <= 2_000);
//! ```

mod playout;
mod policy;

pub use playout::{play_out, PlayoutSummary};
pub use policy::{legal_actions, GreedyPolicy, Policy, RandomPolicy};
