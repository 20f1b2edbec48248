use crate::prelude::*;

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use sp_core::{ed25519, Pair as _};

const PPK_KDF: &str = "scrypt";
const PPK_SECPARAM: &str = "12";

// scrypt N = 2^15
const SCRYPT_LOG_N: u8 = 15;
const SCRYPT_R: u32 = 8;
const SCRYPT_P: u32 = 1;
const SCRYPT_KEY_LEN: usize = 32;

const NONCE_LEN: usize = 12;
const SALT_LEN: usize = 16;
const SEED_LEN: usize = 32;
const ADDRESS_LEN_BYTES: usize = 20;

/// Password protected private key, the armor wallets export keys in.
#[derive(Debug, Serialize, Deserialize)]
struct Ppk {
    kdf: String,
    salt: String,
    secparam: String,
    #[serde(default)]
    hint: String,
    ciphertext: String,
}

/// Holds the ed25519 key that signs every transfer of the batch.
#[derive(Clone, derive_more::Debug, Getters)]
#[debug("KeyManager({})", address)]
pub struct KeyManager {
    /// Hex, 40 characters.
    #[getset(get = "pub")]
    address: String,
    pair: ed25519::Pair,
}

impl From<ed25519::Pair> for KeyManager {
    fn from(pair: ed25519::Pair) -> Self {
        let address = address_of(&pair.public().0);
        Self { address, pair }
    }
}

fn address_of(public_key: &[u8]) -> String {
    let digest = Sha256::digest(public_key);
    hex::encode(&digest[..ADDRESS_LEN_BYTES])
}

fn derive_key(
    passphrase: &Passphrase,
    salt: &[u8],
) -> Result<[u8; SCRYPT_KEY_LEN], KeyManagerError> {
    let params = scrypt::Params::new(SCRYPT_LOG_N, SCRYPT_R, SCRYPT_P, SCRYPT_KEY_LEN)
        .map_err(|e| KeyManagerError::KeyDerivation {
            underlying: e.to_string(),
        })?;
    let mut key = [0u8; SCRYPT_KEY_LEN];
    scrypt::scrypt(passphrase.expose().as_bytes(), salt, &params, &mut key).map_err(|e| {
        KeyManagerError::KeyDerivation {
            underlying: e.to_string(),
        }
    })?;
    Ok(key)
}

fn cipher_for(key: &[u8; SCRYPT_KEY_LEN]) -> Result<Aes256Gcm, KeyManagerError> {
    Aes256Gcm::new_from_slice(key).map_err(|e| KeyManagerError::KeyDerivation {
        underlying: e.to_string(),
    })
}

impl KeyManager {
    pub fn create_random() -> Self {
        let (pair, _) = ed25519::Pair::generate();
        Self::from(pair)
    }

    /// Accepts either the 32 byte seed or the 64 byte `seed ‖ public key` form.
    pub fn from_private_key(private_key: &[u8]) -> Result<Self, KeyManagerError> {
        if private_key.len() != SEED_LEN && private_key.len() != 2 * SEED_LEN {
            return Err(KeyManagerError::InvalidPrivateKey);
        }
        let pair = ed25519::Pair::from_seed_slice(&private_key[..SEED_LEN])
            .map_err(|_| KeyManagerError::InvalidPrivateKey)?;
        if private_key.len() == 2 * SEED_LEN && pair.public().0 != private_key[SEED_LEN..] {
            return Err(KeyManagerError::InvalidPrivateKey);
        }
        Ok(Self::from(pair))
    }

    pub fn from_ppk(passphrase: &Passphrase, ppk: &str) -> Result<Self, KeyManagerError> {
        let ppk: Ppk =
            serde_json::from_str(ppk).map_err(|e| KeyManagerError::MalformedPpk {
                underlying: e.to_string(),
            })?;
        if ppk.kdf != PPK_KDF {
            return Err(KeyManagerError::UnsupportedKdf { kdf: ppk.kdf });
        }
        let salt = hex::decode(ppk.salt.trim()).map_err(|_| KeyManagerError::InvalidSalt)?;
        let sealed = BASE64
            .decode(ppk.ciphertext.trim())
            .map_err(|_| KeyManagerError::InvalidCiphertext)?;

        let key = derive_key(passphrase, &salt)?;
        let plaintext = cipher_for(&key)?
            .decrypt(Nonce::from_slice(&key[..NONCE_LEN]), sealed.as_ref())
            .map_err(|_| KeyManagerError::Decryption)?;

        // Wallets seal the hex text of the key, but raw bytes turn up too.
        let private_key = std::str::from_utf8(&plaintext)
            .ok()
            .and_then(|text| hex::decode(text.trim()).ok())
            .unwrap_or(plaintext);
        let key_manager = Self::from_private_key(&private_key)?;
        debug!("Imported wallet {}", key_manager.address());
        Ok(key_manager)
    }

    pub fn to_ppk(&self, passphrase: &Passphrase, hint: &str) -> Result<String, KeyManagerError> {
        let mut salt = [0u8; SALT_LEN];
        rand::thread_rng().fill_bytes(&mut salt);

        let key = derive_key(passphrase, &salt)?;
        let sealed = cipher_for(&key)?
            .encrypt(
                Nonce::from_slice(&key[..NONCE_LEN]),
                self.private_key_hex().as_bytes(),
            )
            .map_err(|_| KeyManagerError::Encryption)?;

        let ppk = Ppk {
            kdf: PPK_KDF.to_owned(),
            salt: hex::encode(salt),
            secparam: PPK_SECPARAM.to_owned(),
            hint: hint.to_owned(),
            ciphertext: BASE64.encode(sealed),
        };
        serde_json::to_string(&ppk).map_err(|e| KeyManagerError::MalformedPpk {
            underlying: e.to_string(),
        })
    }

    pub fn public_key(&self) -> Vec<u8> {
        self.pair.public().0.to_vec()
    }

    /// `seed ‖ public key`, hex.
    pub fn private_key_hex(&self) -> String {
        let mut raw = self.pair.seed().to_vec();
        raw.extend_from_slice(&self.pair.public().0);
        hex::encode(raw)
    }

    pub fn sign(&self, message: &[u8]) -> Vec<u8> {
        self.pair.sign(message).0.to_vec()
    }
}
