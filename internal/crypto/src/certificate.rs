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

use asn1_rs::FromDer;
use chrono::{DateTime, Utc};
use thiserror::Error;
use x509_parser::{certificate::X509Certificate, pem::parse_x509_pem, time::ASN1Time};

use crate::{hash, raw_signature::SignatureAlgorithm, PublicKey, PublicKeyError};

/// A parsed X.509 certificate.
///
/// Everything the verifier needs is copied out of the DER at parse time, so a
/// `Certificate` owns its data and never changes after construction.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Certificate {
    der: Vec<u8>,
    subject: String,
    issuer: String,
    common_name: Option<String>,
    self_issued: bool,
    serial: Vec<u8>,
    not_before: DateTime<Utc>,
    not_after: DateTime<Utc>,
    signature_algorithm_oid: String,
    signature_algorithm: Option<SignatureAlgorithm>,
    signature: Vec<u8>,
    tbs_certificate: Vec<u8>,
    public_key: PublicKey,
}

impl Certificate {
    /// Parse a DER-encoded certificate.
    ///
    /// The input must hold exactly one certificate.
    pub fn from_der(der: &[u8]) -> Result<Self, CertificateError> {
        let (cert, rest) = Self::from_der_prefix(der)?;

        if !rest.is_empty() {
            return Err(CertificateError::TrailingData);
        }

        Ok(cert)
    }

    /// Parse the first PEM block of `pem`, which must be a `CERTIFICATE` or
    /// `TRUSTED CERTIFICATE`.
    pub fn from_pem(pem: &[u8]) -> Result<Self, CertificateError> {
        let (_rest, pem) = parse_x509_pem(pem).map_err(|_| CertificateError::InvalidPem)?;

        match pem.label.as_str() {
            "CERTIFICATE" => Self::from_der(&pem.contents),
            "TRUSTED CERTIFICATE" => Self::from_trusted_der(&pem.contents),
            _ => Err(CertificateError::UnexpectedPemLabel(pem.label.clone())),
        }
    }

    /// Parse `bytes` as PEM if it carries a PEM header and as DER otherwise.
    pub fn from_pem_or_der(bytes: &[u8]) -> Result<Self, CertificateError> {
        if is_pem(bytes) {
            Self::from_pem(bytes)
        } else {
            Self::from_der(bytes)
        }
    }

    // OpenSSL's TRUSTED CERTIFICATE blocks append trust settings after the
    // certificate itself.
    pub(crate) fn from_trusted_der(der: &[u8]) -> Result<Self, CertificateError> {
        Self::from_der_prefix(der).map(|(cert, _aux)| cert)
    }

    fn from_der_prefix(der: &[u8]) -> Result<(Self, &[u8]), CertificateError> {
        let (rest, cert) = X509Certificate::from_der(der)
            .map_err(|e| CertificateError::InvalidDer(e.to_string()))?;

        let consumed = der.len() - rest.len();
        let own_der = der.get(..consumed).unwrap_or(der);

        let subject = cert.subject();
        let issuer = cert.issuer();

        let common_name = subject
            .iter_common_name()
            .next()
            .and_then(|cn| cn.as_str().ok())
            .map(str::to_owned);

        let validity = cert.validity();

        let public_key = PublicKey::from_parsed_spki(cert.public_key())?;

        let parsed = Self {
            der: own_der.to_vec(),
            subject: subject.to_string(),
            issuer: issuer.to_string(),
            common_name,
            self_issued: subject.as_raw() == issuer.as_raw(),
            serial: cert.raw_serial().to_vec(),
            not_before: to_datetime(validity.not_before)?,
            not_after: to_datetime(validity.not_after)?,
            signature_algorithm_oid: cert.signature_algorithm.algorithm.to_id_string(),
            signature_algorithm: SignatureAlgorithm::from_algorithm_identifier(
                &cert.signature_algorithm,
            ),
            signature: cert.signature_value.data.to_vec(),
            tbs_certificate: cert.tbs_certificate.as_ref().to_vec(),
            public_key,
        };

        Ok((parsed, rest))
    }

    /// DER encoding of the whole certificate.
    pub fn der(&self) -> &[u8] {
        &self.der
    }

    /// Subject distinguished name, formatted as `C=.., O=.., CN=..`.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Issuer distinguished name.
    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    /// First common name in the subject, if any.
    pub fn common_name(&self) -> Option<&str> {
        self.common_name.as_deref()
    }

    /// Return `true` if the subject and issuer names are byte-for-byte equal.
    pub fn is_self_issued(&self) -> bool {
        self.self_issued
    }

    /// Serial number as stored in the certificate (big-endian).
    pub fn serial(&self) -> &[u8] {
        &self.serial
    }

    /// Serial number as lower-case hex.
    pub fn serial_hex(&self) -> String {
        hex::encode(&self.serial)
    }

    /// Start of the validity period.
    pub fn not_before(&self) -> DateTime<Utc> {
        self.not_before
    }

    /// End of the validity period.
    pub fn not_after(&self) -> DateTime<Utc> {
        self.not_after
    }

    /// Return `true` if `at` falls within the validity period (inclusive).
    pub fn is_valid_at(&self, at: DateTime<Utc>) -> bool {
        self.not_before <= at && at <= self.not_after
    }

    /// The signature algorithm, or `None` if it is not one this crate
    /// recognizes.
    pub fn signature_algorithm(&self) -> Option<SignatureAlgorithm> {
        self.signature_algorithm
    }

    /// Dotted OID of the signature algorithm, recognized or not.
    pub fn signature_algorithm_oid(&self) -> &str {
        &self.signature_algorithm_oid
    }

    /// Content of the `signatureValue` bit string.
    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    /// DER encoding of the signed `tbsCertificate`.
    pub fn tbs_certificate(&self) -> &[u8] {
        &self.tbs_certificate
    }

    /// The subject public key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// SHA-256 fingerprint of the DER encoding, as colon-separated hex.
    pub fn fingerprint_sha256(&self) -> String {
        hash::fingerprint(&hash::sha256(&self.der))
    }
}

const PEM_HEADER: &[u8] = b"-----BEGIN";

/// Return `true` if `bytes` contains a PEM header.
pub(crate) fn is_pem(bytes: &[u8]) -> bool {
    bytes.windows(PEM_HEADER.len()).any(|w| w == PEM_HEADER)
}

fn to_datetime(time: ASN1Time) -> Result<DateTime<Utc>, CertificateError> {
    DateTime::<Utc>::from_timestamp(time.timestamp(), 0).ok_or(CertificateError::InvalidValidity)
}

/// Describes errors that can occur when reading a certificate.
#[derive(Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum CertificateError {
    /// The DER encoding could not be decoded.
    #[error("invalid certificate encoding: {0}")]
    InvalidDer(String),

    /// Bytes follow the certificate.
    #[error("unexpected data after certificate")]
    TrailingData,

    /// The input is not PEM.
    #[error("invalid PEM encoding")]
    InvalidPem,

    /// The PEM block is not a certificate.
    #[error("expected a CERTIFICATE block, found {0}")]
    UnexpectedPemLabel(String),

    /// The validity period cannot be represented.
    #[error("certificate validity period is out of range")]
    InvalidValidity,

    /// The subject public key could not be read.
    #[error(transparent)]
    InvalidPublicKey(#[from] PublicKeyError),
}
