mod cli_args;
mod cli_error;
mod raw_inputs;

pub use cli_args::*;
pub use cli_error::*;
pub use raw_inputs::*;
