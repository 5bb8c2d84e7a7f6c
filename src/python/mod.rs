//! Python bindings for the card dragon engine.
//!
//! Lets a Python host drive a game or run batches of automated playouts.
//!
//! # Quick Start
//!
//! ```python
//! import card_dragon as cd
//!
//! game = cd.Engine(seed=42)
//! print(game.hand())
//!
//! outcome = game.play_card(0)
//! if outcome.accepted:
//!     print(game.message)
//!
//! # Finish the game with the heuristic policy
//! result, turns, level = game.autoplay(policy="greedy")
//! ```

use pyo3::prelude::*;

mod py_engine;

pub use py_engine::*;

/// card_dragon: turn-based card-and-track dragon quest.
#[pymodule]
fn card_dragon(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyEngine>()?;
    m.add_class::<PyOutcome>()?;
    Ok(())
}
