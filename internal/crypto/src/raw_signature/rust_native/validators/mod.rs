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

//! This module binds Rust native logic for validating raw signatures to this
//! crate's [`RawSignatureValidator`] trait.

use rsa::{
    pkcs1::{der::Decode, RsaPublicKey as Pkcs1RsaPublicKey},
    BigUint, RsaPublicKey,
};
use spki::SubjectPublicKeyInfoRef;

use crate::raw_signature::{RawSignatureValidationError, RawSignatureValidator, SignatureAlgorithm};

mod ecdsa_validator;
pub use ecdsa_validator::EcdsaValidator;

mod ed25519_validator;
pub use ed25519_validator::Ed25519Validator;

mod rsa_legacy_validator;
pub use rsa_legacy_validator::RsaLegacyValidator;

mod rsa_validator;
pub use rsa_validator::RsaValidator;

/// Largest RSA modulus accepted by the Rust native validators.
pub const MAX_RSA_MODULUS_BITS: usize = 16384;

/// Return a validator for the given signature algorithm.
///
/// MD2 and MD5 are not available from this provider.
pub fn validator_for_signature_alg(
    alg: SignatureAlgorithm,
) -> Option<Box<dyn RawSignatureValidator>> {
    match alg {
        SignatureAlgorithm::Sha1WithRsa => Some(Box::new(RsaLegacyValidator::Sha1)),
        SignatureAlgorithm::Sha256WithRsa => Some(Box::new(RsaLegacyValidator::Rsa256)),
        SignatureAlgorithm::Sha384WithRsa => Some(Box::new(RsaLegacyValidator::Rsa384)),
        SignatureAlgorithm::Sha512WithRsa => Some(Box::new(RsaLegacyValidator::Rsa512)),
        SignatureAlgorithm::Ps256 => Some(Box::new(RsaValidator::Ps256)),
        SignatureAlgorithm::Ps384 => Some(Box::new(RsaValidator::Ps384)),
        SignatureAlgorithm::Ps512 => Some(Box::new(RsaValidator::Ps512)),
        SignatureAlgorithm::Es256 => Some(Box::new(EcdsaValidator::Es256)),
        SignatureAlgorithm::Es384 => Some(Box::new(EcdsaValidator::Es384)),
        SignatureAlgorithm::Es512 => Some(Box::new(EcdsaValidator::Es512)),
        SignatureAlgorithm::Ed25519 => Some(Box::new(Ed25519Validator {})),
        _ => None,
    }
}

/// Decode the RSA public key carried by a DER `SubjectPublicKeyInfo`.
///
/// Accepts both `rsaEncryption` and `id-RSASSA-PSS` keys, since both wrap the
/// same PKCS #1 `RSAPublicKey` structure.
pub(crate) fn rsa_public_key_from_spki(
    public_key: &[u8],
) -> Result<RsaPublicKey, RawSignatureValidationError> {
    let spki = SubjectPublicKeyInfoRef::try_from(public_key)
        .map_err(|_| RawSignatureValidationError::InvalidPublicKey)?;

    let pkcs1 = Pkcs1RsaPublicKey::from_der(spki.subject_public_key.raw_bytes())
        .map_err(|_| RawSignatureValidationError::InvalidPublicKey)?;

    let modulus = BigUint::from_bytes_be(pkcs1.modulus.as_bytes());
    let exp = BigUint::from_bytes_be(pkcs1.public_exponent.as_bytes());

    RsaPublicKey::new_with_max_size(modulus, exp, MAX_RSA_MODULUS_BITS)
        .map_err(|_| RawSignatureValidationError::InvalidPublicKey)
}
