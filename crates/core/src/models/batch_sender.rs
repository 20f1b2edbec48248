use std::num::NonZeroUsize;

use crate::prelude::*;

/// Drives one transfer per recipient through a [`TransactionBuilder`].
#[derive(Debug, Getters, Builder)]
pub struct BatchSender<B> {
    #[getset(get = "pub")]
    transaction_builder: B,

    #[getset(get = "pub")]
    amount: Amount,

    #[builder(into, default = DEFAULT_MEMO.to_owned())]
    #[getset(get = "pub")]
    memo: String,

    #[builder(default = NonZeroUsize::MIN)]
    #[getset(get = "pub")]
    max_in_flight: NonZeroUsize,
}
