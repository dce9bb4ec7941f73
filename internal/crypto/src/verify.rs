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

use certkat_status_tracker::status_codes;
use log::debug;
use thiserror::Error;

use crate::{
    raw_signature::{RawSignatureValidationError, SignatureAlgorithm, ValidatorRegistry},
    Certificate, CertificateError, KeyAlgorithm, PublicKey, PublicKeyError,
};

/// Checks certificate signatures using the validators held in a
/// [`ValidatorRegistry`].
///
/// A verifier is immutable once built and can be shared across threads.
#[derive(Debug, Default)]
pub struct CertificateVerifier {
    registry: ValidatorRegistry,
}

impl CertificateVerifier {
    /// Create a verifier that dispatches to `registry`.
    pub fn new(registry: ValidatorRegistry) -> Self {
        Self { registry }
    }

    /// The registry this verifier dispatches to.
    pub fn registry(&self) -> &ValidatorRegistry {
        &self.registry
    }

    /// Confirm that `cert`'s signature was made over its `tbsCertificate`
    /// by the private half of `public_key`, using the algorithm the
    /// certificate declares.
    ///
    /// Checks happen in this order: the algorithm must be recognized, the key
    /// type must suit it, the registry must hold a validator for it, and then
    /// the signature must verify.
    pub fn verify(
        &self,
        cert: &Certificate,
        public_key: &PublicKey,
    ) -> Result<(), VerificationError> {
        let Some(alg) = cert.signature_algorithm() else {
            return Err(VerificationError::UnsupportedAlgorithm(
                cert.signature_algorithm_oid().to_owned(),
            ));
        };

        if !alg.accepts_key(public_key.algorithm()) {
            return Err(VerificationError::AlgorithmMismatch {
                algorithm: alg,
                key: public_key.algorithm().clone(),
            });
        }

        let Some(validator) = self.registry.get(alg) else {
            return Err(VerificationError::UnsupportedAlgorithm(alg.to_string()));
        };

        let result = validator
            .validate(
                cert.signature(),
                cert.tbs_certificate(),
                public_key.spki_der(),
            )
            .map_err(|err| VerificationError::from_validation_error(err, alg));

        debug!(
            "verify {} ({alg}) with {}: {:?}",
            cert.subject(),
            self.registry.name(),
            result
        );

        result
    }

    /// Verify `cert` under its own public key.
    pub fn verify_self_signed(&self, cert: &Certificate) -> Result<(), VerificationError> {
        self.verify(cert, cert.public_key())
    }
}

/// Verify `cert` against `public_key` with the Rust native provider.
pub fn verify(cert: &Certificate, public_key: &PublicKey) -> Result<(), VerificationError> {
    CertificateVerifier::default().verify(cert, public_key)
}

/// Verify `cert` under its own public key with the Rust native provider.
pub fn verify_self_signed(cert: &Certificate) -> Result<(), VerificationError> {
    CertificateVerifier::default().verify_self_signed(cert)
}

/// Describes why a certificate signature did not verify.
#[derive(Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum VerificationError {
    /// The key's algorithm cannot check signatures of this type.
    #[error("signature algorithm {algorithm} cannot be checked with a {key} key")]
    AlgorithmMismatch {
        /// Algorithm named in the certificate
        algorithm: SignatureAlgorithm,

        /// Algorithm of the key offered for verification
        key: KeyAlgorithm,
    },

    /// The signature does not match the signed content and key.
    #[error("certificate signature does not verify")]
    SignatureInvalid,

    /// The algorithm is unrecognized or the provider cannot check it.
    #[error("unsupported signature algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// The certificate or key encoding could not be read.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// The provider library failed for a reason unrelated to the inputs.
    #[error("crypto library error: {0}")]
    CryptoLibraryError(String),
}

impl VerificationError {
    fn from_validation_error(err: RawSignatureValidationError, alg: SignatureAlgorithm) -> Self {
        match err {
            RawSignatureValidationError::SignatureMismatch
            | RawSignatureValidationError::InvalidSignature => Self::SignatureInvalid,

            RawSignatureValidationError::InvalidPublicKey => {
                Self::MalformedInput("public key cannot be decoded".to_owned())
            }

            RawSignatureValidationError::UnsupportedAlgorithm => {
                Self::UnsupportedAlgorithm(alg.to_string())
            }

            RawSignatureValidationError::CryptoLibraryError(msg)
            | RawSignatureValidationError::InternalError(msg) => Self::CryptoLibraryError(msg),
        }
    }

    /// The status code a sweep records for this failure.
    pub fn status_code(&self) -> &'static str {
        match self {
            Self::AlgorithmMismatch { .. } => status_codes::ALGORITHM_MISMATCH,
            Self::SignatureInvalid => status_codes::SIGNATURE_INVALID,
            Self::UnsupportedAlgorithm(_) => status_codes::ALGORITHM_UNSUPPORTED,
            Self::MalformedInput(_) => status_codes::MALFORMED,
            Self::CryptoLibraryError(_) => status_codes::PROVIDER_ERROR,
        }
    }
}

impl From<CertificateError> for VerificationError {
    fn from(err: CertificateError) -> Self {
        Self::MalformedInput(err.to_string())
    }
}

impl From<PublicKeyError> for VerificationError {
    fn from(err: PublicKeyError) -> Self {
        Self::MalformedInput(err.to_string())
    }
}
