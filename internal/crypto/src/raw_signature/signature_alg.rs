// Copyright 2022 Adobe. All rights reserved.
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

use std::{fmt, str::FromStr};

use asn1_rs::{Any, Class, FromDer, Header, Tag};
use serde::{Deserialize, Serialize};
use x509_parser::x509::AlgorithmIdentifier;

use crate::{raw_signature::oids::*, KeyAlgorithm};

/// Describes the certificate signature algorithms recognized by this crate.
///
/// Recognizing an algorithm does not mean it can be verified: that depends on
/// which validators the active [`ValidatorRegistry`] holds.
///
/// [`ValidatorRegistry`]: crate::raw_signature::ValidatorRegistry
#[derive(
    Copy, Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[non_exhaustive]
pub enum SignatureAlgorithm {
    /// RSASSA-PKCS1-v1_5 using MD2
    #[serde(rename = "rsa-md2")]
    Md2WithRsa,

    /// RSASSA-PKCS1-v1_5 using MD5
    #[serde(rename = "rsa-md5")]
    Md5WithRsa,

    /// RSASSA-PKCS1-v1_5 using SHA-1
    #[serde(rename = "rsa-sha1")]
    Sha1WithRsa,

    /// RSASSA-PKCS1-v1_5 using SHA-256
    #[serde(rename = "rsa-sha256")]
    Sha256WithRsa,

    /// RSASSA-PKCS1-v1_5 using SHA-384
    #[serde(rename = "rsa-sha384")]
    Sha384WithRsa,

    /// RSASSA-PKCS1-v1_5 using SHA-512
    #[serde(rename = "rsa-sha512")]
    Sha512WithRsa,

    /// RSASSA-PSS using SHA-256 and MGF1 with SHA-256
    #[serde(rename = "ps256")]
    Ps256,

    /// RSASSA-PSS using SHA-384 and MGF1 with SHA-384
    #[serde(rename = "ps384")]
    Ps384,

    /// RSASSA-PSS using SHA-512 and MGF1 with SHA-512
    #[serde(rename = "ps512")]
    Ps512,

    /// ECDSA with SHA-256
    #[serde(rename = "es256")]
    Es256,

    /// ECDSA with SHA-384
    #[serde(rename = "es384")]
    Es384,

    /// ECDSA with SHA-512
    #[serde(rename = "es512")]
    Es512,

    /// Edwards-Curve DSA (Ed25519 instance only)
    #[serde(rename = "ed25519")]
    Ed25519,
}

impl SignatureAlgorithm {
    /// Every recognized algorithm, in a stable order.
    pub const ALL: [SignatureAlgorithm; 13] = [
        Self::Md2WithRsa,
        Self::Md5WithRsa,
        Self::Sha1WithRsa,
        Self::Sha256WithRsa,
        Self::Sha384WithRsa,
        Self::Sha512WithRsa,
        Self::Ps256,
        Self::Ps384,
        Self::Ps512,
        Self::Es256,
        Self::Es384,
        Self::Es512,
        Self::Ed25519,
    ];

    /// Return `true` if a public key of type `key` can validate signatures
    /// made with this algorithm.
    pub fn accepts_key(&self, key: &KeyAlgorithm) -> bool {
        match self {
            Self::Md2WithRsa
            | Self::Md5WithRsa
            | Self::Sha1WithRsa
            | Self::Sha256WithRsa
            | Self::Sha384WithRsa
            | Self::Sha512WithRsa => matches!(key, KeyAlgorithm::Rsa),

            Self::Ps256 | Self::Ps384 | Self::Ps512 => {
                matches!(key, KeyAlgorithm::Rsa | KeyAlgorithm::RsaPss)
            }

            Self::Es256 | Self::Es384 | Self::Es512 => matches!(key, KeyAlgorithm::Ec(_)),

            Self::Ed25519 => matches!(key, KeyAlgorithm::Ed25519),
        }
    }

    /// Resolve the algorithm named by an X.509 `AlgorithmIdentifier`.
    ///
    /// Returns `None` for unrecognized OIDs and for RSASSA-PSS parameter sets
    /// other than the three profiles described by [`SignatureAlgorithm`].
    pub(crate) fn from_algorithm_identifier(alg: &AlgorithmIdentifier) -> Option<Self> {
        let oid = &alg.algorithm;

        if *oid == MD2_WITH_RSAENCRYPTION_OID {
            Some(Self::Md2WithRsa)
        } else if *oid == MD5_WITH_RSAENCRYPTION_OID {
            Some(Self::Md5WithRsa)
        } else if *oid == SHA1_WITH_RSAENCRYPTION_OID {
            Some(Self::Sha1WithRsa)
        } else if *oid == SHA256_WITH_RSAENCRYPTION_OID {
            Some(Self::Sha256WithRsa)
        } else if *oid == SHA384_WITH_RSAENCRYPTION_OID {
            Some(Self::Sha384WithRsa)
        } else if *oid == SHA512_WITH_RSAENCRYPTION_OID {
            Some(Self::Sha512WithRsa)
        } else if *oid == RSA_PSS_OID {
            rsa_pss_from_parameters(alg)
        } else if *oid == ECDSA_WITH_SHA256_OID {
            Some(Self::Es256)
        } else if *oid == ECDSA_WITH_SHA384_OID {
            Some(Self::Es384)
        } else if *oid == ECDSA_WITH_SHA512_OID {
            Some(Self::Es512)
        } else if *oid == ED25519_OID {
            Some(Self::Ed25519)
        } else {
            None
        }
    }
}

// Only the SHA-2 profiles with matching MGF1 hash and a salt as long as the
// digest are recognized.
fn rsa_pss_from_parameters(alg: &AlgorithmIdentifier) -> Option<SignatureAlgorithm> {
    let parameters = alg.parameters.as_ref()?;

    let Ok(seq) = parameters.as_sequence() else {
        return None;
    };

    let Ok((_i, (ha_alg, mgf_ai, salt_len))) = seq.parse(|i| {
        let (i, h) = <Header as FromDer>::from_der(i)?;
        if h.class() != Class::ContextSpecific || h.tag() != Tag(0) {
            return Err(nom::Err::Error(asn1_rs::Error::BerValueError));
        }

        let (i, ha_alg) = AlgorithmIdentifier::from_der(i)
            .map_err(|_| nom::Err::Error(asn1_rs::Error::BerValueError))?;

        let (i, h) = <Header as FromDer>::from_der(i)?;
        if h.class() != Class::ContextSpecific || h.tag() != Tag(1) {
            return Err(nom::Err::Error(asn1_rs::Error::BerValueError));
        }

        let (i, mgf_ai) = AlgorithmIdentifier::from_der(i)
            .map_err(|_| nom::Err::Error(asn1_rs::Error::BerValueError))?;

        // saltLength is DEFAULT 20.
        let mut salt_len = 20u32;
        let mut rest = i;
        if !rest.is_empty() {
            let (after_header, h) = <Header as FromDer>::from_der(rest)?;
            if h.class() == Class::ContextSpecific && h.tag() == Tag(2) {
                let (after_salt, value) = <u32 as FromDer>::from_der(after_header)?;
                salt_len = value;
                rest = after_salt;
            }
        }

        // Ignore the trailer field.

        Ok((rest, (ha_alg, mgf_ai, salt_len)))
    }) else {
        return None;
    };

    if mgf_ai.algorithm != MGF1_OID {
        return None;
    }

    let mgf_ai_parameters = mgf_ai.parameters?;

    let Ok(mgf_ai_parameters) = mgf_ai_parameters.as_sequence() else {
        return None;
    };

    let Ok((_i, mgf_ai_params_algorithm)) =
        <Any as FromDer>::from_der(&mgf_ai_parameters.content)
    else {
        return None;
    };

    let Ok(mgf_ai_params_algorithm) = mgf_ai_params_algorithm.as_oid() else {
        return None;
    };

    // Algorithms must be the same.
    if ha_alg.algorithm.to_id_string() != mgf_ai_params_algorithm.to_id_string() {
        return None;
    }

    let (alg, digest_len) = if ha_alg.algorithm == SHA256_OID {
        (SignatureAlgorithm::Ps256, 32)
    } else if ha_alg.algorithm == SHA384_OID {
        (SignatureAlgorithm::Ps384, 48)
    } else if ha_alg.algorithm == SHA512_OID {
        (SignatureAlgorithm::Ps512, 64)
    } else {
        return None;
    };

    (salt_len == digest_len).then_some(alg)
}

impl FromStr for SignatureAlgorithm {
    type Err = UnknownAlgorithmError;

    fn from_str(alg: &str) -> Result<Self, Self::Err> {
        match alg {
            "rsa-md2" => Ok(Self::Md2WithRsa),
            "rsa-md5" => Ok(Self::Md5WithRsa),
            "rsa-sha1" => Ok(Self::Sha1WithRsa),
            "rsa-sha256" => Ok(Self::Sha256WithRsa),
            "rsa-sha384" => Ok(Self::Sha384WithRsa),
            "rsa-sha512" => Ok(Self::Sha512WithRsa),
            "ps256" => Ok(Self::Ps256),
            "ps384" => Ok(Self::Ps384),
            "ps512" => Ok(Self::Ps512),
            "es256" => Ok(Self::Es256),
            "es384" => Ok(Self::Es384),
            "es512" => Ok(Self::Es512),
            "ed25519" => Ok(Self::Ed25519),
            _ => Err(UnknownAlgorithmError(alg.to_owned())),
        }
    }
}

impl fmt::Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(
            f,
            "{}",
            match self {
                Self::Md2WithRsa => "rsa-md2",
                Self::Md5WithRsa => "rsa-md5",
                Self::Sha1WithRsa => "rsa-sha1",
                Self::Sha256WithRsa => "rsa-sha256",
                Self::Sha384WithRsa => "rsa-sha384",
                Self::Sha512WithRsa => "rsa-sha512",
                Self::Ps256 => "ps256",
                Self::Ps384 => "ps384",
                Self::Ps512 => "ps512",
                Self::Es256 => "es256",
                Self::Es384 => "es384",
                Self::Es512 => "es512",
                Self::Ed25519 => "ed25519",
            }
        )
    }
}

#[derive(Debug, PartialEq, Eq)]
/// This error is thrown when converting from a string to
/// [`SignatureAlgorithm`] if the algorithm string is unrecognized.
pub struct UnknownAlgorithmError(pub String);

impl fmt::Display for UnknownAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "UnknownAlgorithmError({})", self.0)
    }
}

impl std::error::Error for UnknownAlgorithmError {}
