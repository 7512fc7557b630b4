//! Server configuration.
//!
//! Every option can be given as a flag or through the environment:
//!
//! ```bash
//! DICEWARE_ADDR=0.0.0.0:29102
//! DICEWARE_TLS_CERT=cert.pem        # TLS only when cert and key are set
//! DICEWARE_TLS_KEY=key.pem
//! DICEWARE_EXTENDED=true            # load the complex dictionary
//! DICEWARE_SIMPLE_WORDS=words.txt   # replace an embedded list
//! DICEWARE_COMPLEX_WORDS=alpha.txt
//! DICEWARE_MIN_RESPONSE_MS=30       # 0 disables the response-time floor
//! DICEWARE_GENERATION_TIMEOUT_MS=2000
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use diceware_core::dictionary::{embedded, COMPLEX, SIMPLE};
use diceware_core::{WordCollection, WordDictionary};

use crate::error::Result;

/// Default listen address.
pub const DEFAULT_ADDR: &str = "0.0.0.0:29102";

/// Configuration for the web server.
#[derive(Debug, Clone, Parser)]
#[command(name = "diceware-site", version, about = "Serve diceware passphrases over HTTP")]
pub struct ServerConfig {
    /// The address (host and port) to listen on.
    #[arg(long, env = "DICEWARE_ADDR", default_value = DEFAULT_ADDR)]
    pub addr: String,

    /// The cert.pem file to use for TLS; leave unset for no TLS.
    #[arg(long, env = "DICEWARE_TLS_CERT")]
    pub cert: Option<PathBuf>,

    /// The key.pem file to use for TLS; leave unset for no TLS.
    #[arg(long, env = "DICEWARE_TLS_KEY")]
    pub key: Option<PathBuf>,

    /// Load the complex word list and allow requests to use it.
    #[arg(long, env = "DICEWARE_EXTENDED")]
    pub extended: bool,

    /// Read the simple word list from a file instead of the embedded one.
    #[arg(long, env = "DICEWARE_SIMPLE_WORDS")]
    pub simple_words: Option<PathBuf>,

    /// Read the complex word list from a file instead of the embedded one.
    #[arg(long, env = "DICEWARE_COMPLEX_WORDS")]
    pub complex_words: Option<PathBuf>,

    /// Pad page and API responses to at least this many milliseconds.
    #[arg(long, env = "DICEWARE_MIN_RESPONSE_MS", default_value_t = 30)]
    pub min_response_ms: u64,

    /// Give up on a generation request after this many milliseconds.
    #[arg(long, env = "DICEWARE_GENERATION_TIMEOUT_MS", default_value_t = 2000)]
    pub generation_timeout_ms: u64,
}

/// Certificate and key for TLS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsConfig {
    /// Path to the certificate.
    pub cert: PathBuf,
    /// Path to the certificate key file.
    pub key: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            cert: None,
            key: None,
            extended: false,
            simple_words: None,
            complex_words: None,
            min_response_ms: 30,
            generation_timeout_ms: 2000,
        }
    }
}

impl ServerConfig {
    /// Parsed listen address.
    ///
    /// # Errors
    ///
    /// Returns an error if `addr` is not a socket address.
    pub fn bind_address(&self) -> Result<SocketAddr> {
        Ok(self.addr.parse()?)
    }

    /// TLS settings, when both the certificate and the key are configured.
    #[must_use]
    pub fn tls(&self) -> Option<TlsConfig> {
        match (&self.cert, &self.key) {
            (Some(cert), Some(key)) => Some(TlsConfig {
                cert: cert.clone(),
                key: key.clone(),
            }),
            (None, None) => None,
            _ => {
                tracing::warn!("TLS needs both a certificate and a key, serving plain HTTP");
                None
            }
        }
    }

    /// Response-time floor.
    #[must_use]
    pub const fn min_response(&self) -> Duration {
        Duration::from_millis(self.min_response_ms)
    }

    /// Budget for a single generation request.
    #[must_use]
    pub const fn generation_timeout(&self) -> Duration {
        Duration::from_millis(self.generation_timeout_ms)
    }

    /// Load the dictionaries this configuration asks for.
    ///
    /// The complex list is only read when extended words are enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if a word list cannot be read or holds no usable
    /// words.
    pub fn load_words(&self) -> Result<WordCollection> {
        let simple = match &self.simple_words {
            Some(path) => WordDictionary::load(SIMPLE, path)?,
            None => embedded::simple()?,
        };

        let complex = if self.extended {
            Some(match &self.complex_words {
                Some(path) => WordDictionary::load(COMPLEX, path)?,
                None => embedded::complex()?,
            })
        } else {
            None
        };

        tracing::info!(
            simple = simple.count(),
            complex = complex.as_ref().map_or(0, WordDictionary::count),
            "loaded word lists"
        );

        Ok(WordCollection::new(simple, complex))
    }
}
