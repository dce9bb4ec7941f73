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

use std::fmt;

use asn1_rs::FromDer;
use rsa::{
    pkcs1::{der::Decode, RsaPublicKey as Pkcs1RsaPublicKey},
    pkcs8::EncodePublicKey,
    BigUint, RsaPublicKey,
};
use thiserror::Error;
use x509_parser::{pem::parse_x509_pem, x509::SubjectPublicKeyInfo};

use crate::{
    certificate::is_pem,
    raw_signature::{oids::*, rust_native::validators::MAX_RSA_MODULUS_BITS},
};

/// Named elliptic curves supported for ECDSA keys.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EcdsaCurve {
    /// NIST P-256 (`prime256v1`)
    P256,

    /// NIST P-384 (`secp384r1`)
    P384,

    /// NIST P-521 (`secp521r1`)
    P521,
}

impl fmt::Display for EcdsaCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::P256 => "P-256",
            Self::P384 => "P-384",
            Self::P521 => "P-521",
        })
    }
}

/// The algorithm a [`PublicKey`] belongs to.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum KeyAlgorithm {
    /// `rsaEncryption`
    Rsa,

    /// `id-RSASSA-PSS`: an RSA key restricted to PSS signatures
    RsaPss,

    /// `id-ecPublicKey`, with the named curve when it is one we support
    Ec(Option<EcdsaCurve>),

    /// `id-Ed25519`
    Ed25519,

    /// `id-dsa`
    Dsa,

    /// Any other algorithm, named by its dotted OID
    Unknown(String),
}

impl KeyAlgorithm {
    /// Return `true` for both plain RSA and RSA-PSS keys.
    pub fn is_rsa(&self) -> bool {
        matches!(self, Self::Rsa | Self::RsaPss)
    }
}

impl fmt::Display for KeyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rsa => f.write_str("RSA"),
            Self::RsaPss => f.write_str("RSASSA-PSS"),
            Self::Ec(_) => f.write_str("EC"),
            Self::Ed25519 => f.write_str("Ed25519"),
            Self::Dsa => f.write_str("DSA"),
            Self::Unknown(oid) => f.write_str(oid),
        }
    }
}

/// A public key, kept as its DER `SubjectPublicKeyInfo` along with the
/// parameters needed to pick a validator for it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PublicKey {
    algorithm: KeyAlgorithm,
    rsa: Option<RsaComponents>,
    spki_der: Vec<u8>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct RsaComponents {
    modulus: Vec<u8>,
    exponent: Vec<u8>,
}

impl PublicKey {
    /// Parse a DER-encoded `SubjectPublicKeyInfo`.
    pub fn from_spki_der(der: &[u8]) -> Result<Self, PublicKeyError> {
        let (rest, spki) = SubjectPublicKeyInfo::from_der(der)
            .map_err(|e| PublicKeyError::InvalidDer(e.to_string()))?;

        if !rest.is_empty() {
            return Err(PublicKeyError::TrailingData);
        }

        Self::from_parsed_spki(&spki)
    }

    pub(crate) fn from_parsed_spki(spki: &SubjectPublicKeyInfo) -> Result<Self, PublicKeyError> {
        let oid = &spki.algorithm.algorithm;

        let algorithm = if *oid == RSA_OID {
            KeyAlgorithm::Rsa
        } else if *oid == RSA_PSS_OID {
            KeyAlgorithm::RsaPss
        } else if *oid == EC_PUBLICKEY_OID {
            let curve = spki
                .algorithm
                .parameters
                .as_ref()
                .and_then(|p| p.as_oid().ok())
                .and_then(|curve| {
                    if curve == PRIME256V1_OID {
                        Some(EcdsaCurve::P256)
                    } else if curve == SECP384R1_OID {
                        Some(EcdsaCurve::P384)
                    } else if curve == SECP521R1_OID {
                        Some(EcdsaCurve::P521)
                    } else {
                        None
                    }
                });
            KeyAlgorithm::Ec(curve)
        } else if *oid == ED25519_OID {
            KeyAlgorithm::Ed25519
        } else if *oid == DSA_OID {
            KeyAlgorithm::Dsa
        } else {
            KeyAlgorithm::Unknown(oid.to_id_string())
        };

        let rsa = if algorithm.is_rsa() {
            let pkcs1 = Pkcs1RsaPublicKey::from_der(&spki.subject_public_key.data)
                .map_err(|e| PublicKeyError::InvalidRsaKey(e.to_string()))?;

            Some(RsaComponents {
                modulus: pkcs1.modulus.as_bytes().to_vec(),
                exponent: pkcs1.public_exponent.as_bytes().to_vec(),
            })
        } else {
            None
        };

        Ok(Self {
            algorithm,
            rsa,
            spki_der: spki.raw.to_vec(),
        })
    }

    /// Parse a PEM `PUBLIC KEY` block.
    pub fn from_pem(pem: &[u8]) -> Result<Self, PublicKeyError> {
        let (_rest, pem) = parse_x509_pem(pem).map_err(|_| PublicKeyError::InvalidPem)?;

        if pem.label != "PUBLIC KEY" {
            return Err(PublicKeyError::UnexpectedPemLabel(pem.label));
        }

        Self::from_spki_der(&pem.contents)
    }

    /// Parse `bytes` as a PEM `PUBLIC KEY` block if it carries a PEM header
    /// and as DER `SubjectPublicKeyInfo` otherwise.
    pub fn from_pem_or_der(bytes: &[u8]) -> Result<Self, PublicKeyError> {
        if is_pem(bytes) {
            Self::from_pem(bytes)
        } else {
            Self::from_spki_der(bytes)
        }
    }

    /// Build an RSA key from its big-endian modulus and public exponent.
    pub fn from_rsa_components(modulus: &[u8], exponent: &[u8]) -> Result<Self, PublicKeyError> {
        let key = RsaPublicKey::new_with_max_size(
            BigUint::from_bytes_be(modulus),
            BigUint::from_bytes_be(exponent),
            MAX_RSA_MODULUS_BITS,
        )
        .map_err(|e| PublicKeyError::InvalidRsaKey(e.to_string()))?;

        let der = key
            .to_public_key_der()
            .map_err(|e| PublicKeyError::InvalidRsaKey(e.to_string()))?;

        Self::from_spki_der(der.as_bytes())
    }

    /// The key's algorithm.
    pub fn algorithm(&self) -> &KeyAlgorithm {
        &self.algorithm
    }

    /// DER encoding of the key's `SubjectPublicKeyInfo`.
    pub fn spki_der(&self) -> &[u8] {
        &self.spki_der
    }

    /// Big-endian RSA modulus, for RSA and RSA-PSS keys.
    pub fn rsa_modulus(&self) -> Option<&[u8]> {
        self.rsa.as_ref().map(|c| c.modulus.as_slice())
    }

    /// Big-endian RSA public exponent, for RSA and RSA-PSS keys.
    pub fn rsa_exponent(&self) -> Option<&[u8]> {
        self.rsa.as_ref().map(|c| c.exponent.as_slice())
    }

    /// Size of the RSA modulus in bits, for RSA and RSA-PSS keys.
    pub fn rsa_key_bits(&self) -> Option<usize> {
        let modulus = self.rsa_modulus()?;
        let Some(first) = modulus.iter().position(|b| *b != 0) else {
            return Some(0);
        };

        let leading = modulus[first].leading_zeros() as usize;
        Some((modulus.len() - first) * 8 - leading)
    }
}

/// Describes errors that can occur when reading a public key.
#[derive(Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum PublicKeyError {
    /// The `SubjectPublicKeyInfo` could not be decoded.
    #[error("invalid SubjectPublicKeyInfo: {0}")]
    InvalidDer(String),

    /// Bytes follow the `SubjectPublicKeyInfo`.
    #[error("unexpected data after SubjectPublicKeyInfo")]
    TrailingData,

    /// The input is not PEM.
    #[error("invalid PEM encoding")]
    InvalidPem,

    /// The PEM block is not a public key.
    #[error("expected a PUBLIC KEY block, found {0}")]
    UnexpectedPemLabel(String),

    /// The RSA key material could not be decoded or is out of range.
    #[error("invalid RSA public key: {0}")]
    InvalidRsaKey(String),
}
