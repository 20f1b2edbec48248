mod json_rpc_provider;
mod key_manager;
mod pocket_transaction_builder;
mod proto_tx;

pub use json_rpc_provider::*;
pub use key_manager::*;
pub use pocket_transaction_builder::*;
pub(crate) use proto_tx::*;
