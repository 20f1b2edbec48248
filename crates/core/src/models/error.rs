use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Bootstrap error: {0}")]
    Bootstrap(#[from] BootstrapBatchSenderError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}

/// Pre-flight failures. Any one of these aborts the run before a single
/// transaction is submitted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Could not read file at {path}: {underlying}")]
    FileNotReadable { path: PathBuf, underlying: String },

    #[error("Invalid wallet passphrase, it must not be empty")]
    EmptyPassphrase,

    #[error("Invalid amount `{bad_value}`, it is not a number")]
    AmountNotANumber { bad_value: String },

    #[error("Invalid amount `{bad_value}`, it must be greater than zero")]
    AmountNotPositive { bad_value: String },

    #[error("Invalid RPC provider url `{bad_value}`: {underlying}")]
    RpcUrlInvalid { bad_value: String, underlying: String },

    #[error("Invalid RPC provider url `{bad_value}`, it has no host")]
    RpcUrlMissingHost { bad_value: String },

    #[error("Malformed addresses csv header, expected `{expected}` but found `{found}`")]
    MalformedHeader { expected: String, found: String },

    #[error("Invalid addresses, expected every address to be {expected_length} characters long: {offending:?}")]
    InvalidAddresses {
        expected_length: usize,
        offending: Vec<String>,
    },

    #[error("Avoid batch sending to more than {max} addresses to avoid overloading blocks, got {count}. Wait another 15 minutes and try again with at most {max}")]
    TooManyRecipients { count: usize, max: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum BootstrapBatchSenderError {
    #[error("Failed to import wallet key: {0}")]
    KeyImport(#[from] KeyManagerError),

    #[error("Failed to create RPC provider: {underlying}")]
    CreateProviderFailure { underlying: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyManagerError {
    #[error("Wallet file is not a valid PPK: {underlying}")]
    MalformedPpk { underlying: String },

    #[error("Unsupported key derivation function `{kdf}`, only `scrypt` is supported")]
    UnsupportedKdf { kdf: String },

    #[error("Wallet salt is not valid hex")]
    InvalidSalt,

    #[error("Wallet ciphertext is not valid base64")]
    InvalidCiphertext,

    #[error("Failed to derive decryption key: {underlying}")]
    KeyDerivation { underlying: String },

    #[error("Failed to decrypt wallet, is the passphrase correct?")]
    Decryption,

    #[error("Decrypted private key is malformed")]
    InvalidPrivateKey,

    #[error("Failed to encrypt wallet")]
    Encryption,
}

/// Failure of a single transfer. Recorded against the recipient, never fatal
/// to the batch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("Address `{address}` is not valid hex")]
    InvalidAddress { address: String },

    #[error("Failed to encode transaction: {underlying}")]
    Encoding { underlying: String },

    #[error("Failed to reach RPC provider: {underlying}")]
    Network { underlying: String },

    #[error("RPC provider answered with status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Transaction rejected with code {code}: {raw_log}")]
    Rejected { code: u32, raw_log: String },

    #[error("RPC provider response has no transaction hash: {body}")]
    MissingTxHash { body: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Failed to create output directory {path}: {underlying}")]
    CreateOutputDir {
        path: PathBuf,
        underlying: std::io::Error,
    },

    #[error("Failed to create results file {path}: {underlying}")]
    CreateFile {
        path: PathBuf,
        underlying: std::io::Error,
    },

    #[error("Failed to write results: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to flush results: {0}")]
    Io(#[from] std::io::Error),
}
