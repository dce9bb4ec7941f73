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

use ecdsa::signature::hazmat::PrehashVerifier;
use p256::ecdsa::{Signature as P256Signature, VerifyingKey as P256VerifyingKey};
use p384::ecdsa::{Signature as P384Signature, VerifyingKey as P384VerifyingKey};
use p521::{
    ecdsa::{Signature as P521Signature, VerifyingKey as P521VerifyingKey},
    PublicKey as P521PublicKey,
};
use sha2::{Digest, Sha256, Sha384, Sha512};

use crate::{
    raw_signature::{RawSignatureValidationError, RawSignatureValidator},
    EcdsaCurve, KeyAlgorithm, PublicKey,
};

/// An `EcdsaValidator` can validate raw signatures with one of the ECDSA
/// signature algorithms.
///
/// Signatures are expected in the DER `Ecdsa-Sig-Value` encoding used by
/// X.509. The curve is taken from the public key, so any supported curve may
/// be paired with any of the hash functions.
pub enum EcdsaValidator {
    /// ECDSA with SHA-256
    Es256,

    /// ECDSA with SHA-384
    Es384,

    /// ECDSA with SHA-512
    Es512,
}

impl RawSignatureValidator for EcdsaValidator {
    fn validate(
        &self,
        sig: &[u8],
        data: &[u8],
        public_key: &[u8],
    ) -> Result<(), RawSignatureValidationError> {
        let digest = match self {
            EcdsaValidator::Es256 => Sha256::digest(data).to_vec(),
            EcdsaValidator::Es384 => Sha384::digest(data).to_vec(),
            EcdsaValidator::Es512 => Sha512::digest(data).to_vec(),
        };

        // determine curve from public key
        let curve = match PublicKey::from_spki_der(public_key)
            .map_err(|_| RawSignatureValidationError::InvalidPublicKey)?
            .algorithm()
        {
            KeyAlgorithm::Ec(Some(curve)) => *curve,
            KeyAlgorithm::Ec(None) => {
                return Err(RawSignatureValidationError::UnsupportedAlgorithm)
            }
            _ => return Err(RawSignatureValidationError::InvalidPublicKey),
        };

        let digest = pad_prehash(digest, curve);

        let result = match curve {
            EcdsaCurve::P256 => {
                use p256::pkcs8::DecodePublicKey;
                let signature = P256Signature::from_der(sig)
                    .map_err(|_| RawSignatureValidationError::InvalidSignature)?;

                let vk = P256VerifyingKey::from_public_key_der(public_key)
                    .map_err(|_| RawSignatureValidationError::InvalidPublicKey)?;

                vk.verify_prehash(&digest, &signature)
            }
            EcdsaCurve::P384 => {
                use p384::pkcs8::DecodePublicKey;
                let signature = P384Signature::from_der(sig)
                    .map_err(|_| RawSignatureValidationError::InvalidSignature)?;

                let vk = P384VerifyingKey::from_public_key_der(public_key)
                    .map_err(|_| RawSignatureValidationError::InvalidPublicKey)?;

                vk.verify_prehash(&digest, &signature)
            }
            EcdsaCurve::P521 => {
                use p521::pkcs8::DecodePublicKey;
                let signature = P521Signature::from_der(sig)
                    .map_err(|_| RawSignatureValidationError::InvalidSignature)?;

                // internal from_public_key not implemented for P521VerifyingKey so manually
                // load
                let pk = P521PublicKey::from_public_key_der(public_key)
                    .map_err(|_| RawSignatureValidationError::InvalidPublicKey)?;
                let pk_bytes = pk.to_sec1_bytes();

                let vk = P521VerifyingKey::from_sec1_bytes(&pk_bytes)
                    .map_err(|_| RawSignatureValidationError::InvalidPublicKey)?;

                vk.verify_prehash(&digest, &signature)
            }
        };

        result.map_err(|_| RawSignatureValidationError::SignatureMismatch)
    }
}

/// Left-pad `digest` with zeros to the curve's field size.
///
/// The verifier refuses a prehash shorter than half the field size, which
/// rules out SHA-256 on P-521. Leading zeros leave the integer the digest
/// converts to unchanged.
fn pad_prehash(digest: Vec<u8>, curve: EcdsaCurve) -> Vec<u8> {
    let field_len = match curve {
        EcdsaCurve::P256 => 32,
        EcdsaCurve::P384 => 48,
        EcdsaCurve::P521 => 66,
    };

    if digest.len() >= field_len {
        return digest;
    }

    let mut padded = vec![0u8; field_len - digest.len()];
    padded.extend_from_slice(&digest);
    padded
}
