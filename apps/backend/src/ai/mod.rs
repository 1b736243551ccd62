//! AI stand-in for handed-over seats.

mod greedy;
mod trait_def;

pub use greedy::GreedyLowest;
pub use trait_def::{AiAction, AiPolicy};
