pub mod chain_resolver;

pub use chain_resolver::{ChainResolver, ChainTable, resolve_chains};
