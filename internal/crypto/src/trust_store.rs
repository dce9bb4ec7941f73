// Copyright 2025 Adobe. All rights reserved.
// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.

// Unless required by applicable law or agreed to in writing,
// this software is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.

//! Reads trust anchors from PEM bundles, DER files, and certificate
//! directories.
//!
//! Every entry gets a unique alias. Certificates are named after their
//! subject common name (`Certkat RSA Root` becomes `certkat-rsa-root`);
//! blocks that are not certificates are kept as skipped entries named after
//! their PEM label.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::debug;
use thiserror::Error;
use x509_parser::pem::Pem;

use crate::{certificate::is_pem, Certificate, CertificateError};

/// An ordered collection of trust-store entries.
#[derive(Clone, Debug, Default)]
pub struct TrustStore {
    entries: Vec<TrustStoreEntry>,
}

/// One named item from a trust store.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TrustStoreEntry {
    alias: String,
    item: EntryItem,
}

/// What a [`TrustStoreEntry`] holds.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EntryItem {
    /// A trusted certificate
    Certificate(Box<Certificate>),

    /// Anything else, identified by its PEM label
    Other {
        /// PEM label, such as `PUBLIC KEY`
        label: String,
    },
}

impl TrustStoreEntry {
    /// The entry's unique alias.
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// The entry's content.
    pub fn item(&self) -> &EntryItem {
        &self.item
    }

    /// The certificate, if this entry holds one.
    pub fn certificate(&self) -> Option<&Certificate> {
        match &self.item {
            EntryItem::Certificate(cert) => Some(cert.as_ref()),
            EntryItem::Other { .. } => None,
        }
    }
}

impl TrustStore {
    /// An empty trust store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read every block of a PEM bundle.
    ///
    /// `CERTIFICATE` and `TRUSTED CERTIFICATE` blocks become certificate
    /// entries; other blocks become skipped entries.
    pub fn from_pem(pem: &[u8]) -> Result<Self, TrustStoreError> {
        let mut store = Self::new();
        store.add_pem(pem)?;
        Ok(store)
    }

    /// A store holding the single DER certificate `der`, named `alias`.
    pub fn from_der(alias: &str, der: &[u8]) -> Result<Self, TrustStoreError> {
        let cert = Certificate::from_der(der).map_err(|source| {
            TrustStoreError::InvalidCertificate {
                alias: alias.to_owned(),
                source,
            }
        })?;

        let mut store = Self::new();
        let alias = store.unique_alias(alias);
        store.entries.push(TrustStoreEntry {
            alias,
            item: EntryItem::Certificate(Box::new(cert)),
        });

        Ok(store)
    }

    /// Load a trust store from a file or directory.
    ///
    /// A directory contributes each `.pem`, `.crt`, `.cer` and `.der` file it
    /// contains, in file-name order. A single file is read as PEM if it
    /// contains a PEM header and as DER otherwise.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, TrustStoreError> {
        let path = path.as_ref();
        let mut store = Self::new();

        if path.is_dir() {
            let mut files = fs::read_dir(path)
                .map_err(|source| TrustStoreError::Io {
                    path: path.to_owned(),
                    source,
                })?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| p.is_file() && has_store_extension(p))
                .collect::<Vec<_>>();

            files.sort();

            for file in files {
                store.add_file(&file)?;
            }
        } else {
            store.add_file(path)?;
        }

        debug!(
            "loaded {} trust store entries from {}",
            store.len(),
            path.display()
        );

        Ok(store)
    }

    /// Entries in load order.
    pub fn entries(&self) -> &[TrustStoreEntry] {
        &self.entries
    }

    /// Iterate over entries in load order.
    pub fn iter(&self) -> impl Iterator<Item = &TrustStoreEntry> {
        self.entries.iter()
    }

    /// Iterate over certificate entries only, with their aliases.
    pub fn certificates(&self) -> impl Iterator<Item = (&str, &Certificate)> {
        self.entries
            .iter()
            .filter_map(|e| e.certificate().map(|c| (e.alias(), c)))
    }

    /// Look up an entry by alias.
    pub fn get(&self, alias: &str) -> Option<&TrustStoreEntry> {
        self.entries.iter().find(|e| e.alias == alias)
    }

    /// Number of entries, including skipped ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` if the store has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn add_file(&mut self, path: &Path) -> Result<(), TrustStoreError> {
        let bytes = fs::read(path).map_err(|source| TrustStoreError::Io {
            path: path.to_owned(),
            source,
        })?;

        if is_pem(&bytes) {
            return self.add_pem(&bytes);
        }

        let fallback = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.positional_alias());

        let cert = Certificate::from_der(&bytes).map_err(|source| {
            TrustStoreError::InvalidCertificate {
                alias: fallback.clone(),
                source,
            }
        })?;

        self.push_certificate(cert, Some(fallback));
        Ok(())
    }

    fn add_pem(&mut self, pem: &[u8]) -> Result<(), TrustStoreError> {
        for maybe_pem in Pem::iter_from_buffer(pem) {
            let pem = maybe_pem.map_err(|e| TrustStoreError::InvalidPem(e.to_string()))?;

            let parsed = match pem.label.as_str() {
                "CERTIFICATE" => Certificate::from_der(&pem.contents),
                "TRUSTED CERTIFICATE" => Certificate::from_trusted_der(&pem.contents),
                _ => {
                    let alias = self.unique_alias(&alias_from_name(&pem.label));
                    self.entries.push(TrustStoreEntry {
                        alias,
                        item: EntryItem::Other {
                            label: pem.label.clone(),
                        },
                    });
                    continue;
                }
            };

            let cert = parsed.map_err(|source| TrustStoreError::InvalidCertificate {
                alias: self.positional_alias(),
                source,
            })?;

            self.push_certificate(cert, None);
        }

        Ok(())
    }

    fn push_certificate(&mut self, cert: Certificate, fallback: Option<String>) {
        let base = cert
            .common_name()
            .map(alias_from_name)
            .filter(|a| !a.is_empty())
            .or(fallback)
            .unwrap_or_else(|| self.positional_alias());

        let alias = self.unique_alias(&base);
        self.entries.push(TrustStoreEntry {
            alias,
            item: EntryItem::Certificate(Box::new(cert)),
        });
    }

    fn positional_alias(&self) -> String {
        format!("entry-{}", self.entries.len() + 1)
    }

    fn unique_alias(&self, base: &str) -> String {
        if self.get(base).is_none() {
            return base.to_owned();
        }

        (2..)
            .map(|n| format!("{base}-{n}"))
            .find(|candidate| self.get(candidate).is_none())
            .unwrap_or_else(|| base.to_owned())
    }
}

fn alias_from_name(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "-")
}

fn has_store_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .is_some_and(|e| matches!(e.as_str(), "pem" | "crt" | "cer" | "der"))
}

/// Describes errors that can occur when loading a trust store.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TrustStoreError {
    /// A file or directory could not be read.
    #[error("unable to read {}: {source}", path.display())]
    Io {
        /// Path that failed
        path: PathBuf,

        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The PEM framing is broken.
    #[error("invalid PEM data: {0}")]
    InvalidPem(String),

    /// A certificate entry could not be parsed.
    #[error("invalid certificate {alias}: {source}")]
    InvalidCertificate {
        /// Alias the entry would have had
        alias: String,

        /// Why parsing failed
        source: CertificateError,
    },
}
