mod batch_sender_bootstrap;
mod batch_sender_run;

pub use batch_sender_bootstrap::*;
