mod to_chain_string;
mod transaction_builder;

pub use to_chain_string::*;
pub use transaction_builder::*;
