mod amount;
mod batch_request;
mod batch_sender;
mod chain_id;
mod error;
mod passphrase;
mod pocket;
mod profile;
mod recipient_address;
mod submission_record;
mod traits;
mod transfer;

pub use amount::*;
pub use batch_request::*;
pub use batch_sender::*;
pub use chain_id::*;
pub use error::*;
pub use passphrase::*;
pub use pocket::*;
pub use profile::*;
pub use recipient_address::*;
pub use submission_record::*;
pub use traits::*;
pub use transfer::*;
