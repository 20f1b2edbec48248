mod batch_sender;
mod report;
mod validate;

pub use batch_sender::*;
pub use report::*;
pub use validate::*;
