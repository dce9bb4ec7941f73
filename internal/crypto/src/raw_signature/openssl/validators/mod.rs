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

//! This module binds OpenSSL logic for validating raw signatures to this
//! crate's [`RawSignatureValidator`] trait.

use openssl::{pkey::PKey, rsa::Rsa};

use crate::raw_signature::{
    RawSignatureValidationError, RawSignatureValidator, SignatureAlgorithm,
};

mod ecdsa_validator;
pub use ecdsa_validator::EcdsaValidator;

mod ed25519_validator;
pub use ed25519_validator::Ed25519Validator;

mod rsa_legacy_validator;
pub use rsa_legacy_validator::RsaLegacyValidator;

mod rsa_validator;
pub use rsa_validator::RsaValidator;

/// Return a validator for the given signature algorithm.
///
/// Unlike the Rust native provider, this one can check MD5 signatures. MD2
/// is not available.
pub fn validator_for_signature_alg(
    alg: SignatureAlgorithm,
) -> Option<Box<dyn RawSignatureValidator>> {
    match alg {
        SignatureAlgorithm::Md5WithRsa => Some(Box::new(RsaLegacyValidator::Md5)),
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

// Rebuild RSA keys from their components to drop any PSS restrictions carried
// in the key's own parameters. Caller must hold the OpenSSL mutex.
fn rsa_pkey_from_spki(
    public_key: &[u8],
) -> Result<PKey<openssl::pkey::Public>, RawSignatureValidationError> {
    let rsa = PKey::public_key_from_der(public_key)
        .and_then(|pkey| pkey.rsa())
        .map_err(|_| RawSignatureValidationError::InvalidPublicKey)?;

    let n = rsa.n().to_owned()?;
    let e = rsa.e().to_owned()?;

    let new_rsa = Rsa::from_public_components(n, e)?;
    Ok(PKey::from_rsa(new_rsa)?)
}
