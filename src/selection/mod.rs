//! Choosing which token a dice value moves.
//!
//! [`TokenSelector`] is the seam; [`Strategy`] maps the labels players pick
//! at setup onto the built-in selectors.

mod policy;
mod strategy;

pub use policy::{Aggressive, Greedy, Responsible, TokenSelector};
pub use strategy::Strategy;
