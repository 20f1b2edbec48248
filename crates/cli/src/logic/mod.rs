mod init_logging;
mod preflight;
mod prompt;
mod run;

pub use init_logging::*;
pub use preflight::*;
pub use prompt::*;
pub use run::*;
