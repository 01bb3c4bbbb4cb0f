mod chain_finder;

pub use chain_finder::{ChainFinder, ChainSearch};
