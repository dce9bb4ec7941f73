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

use super::SAMPLE_DATA;
use crate::raw_signature::{
    rust_native::validators::{
        validator_for_signature_alg, EcdsaValidator, Ed25519Validator, RsaLegacyValidator,
        RsaValidator,
    },
    RawSignatureValidationError, RawSignatureValidator, SignatureAlgorithm,
};

const RSA_PUB_KEY: &[u8] = include_bytes!("../fixtures/raw_signature/rsa.pub_key");

#[test]
fn rs256() {
    let signature = include_bytes!("../fixtures/raw_signature/rs256.raw_sig");

    RsaLegacyValidator::Rsa256
        .validate(signature, SAMPLE_DATA, RSA_PUB_KEY)
        .unwrap();
}

#[test]
fn rs256_bad_signature() {
    let mut signature = include_bytes!("../fixtures/raw_signature/rs256.raw_sig").to_vec();
    assert_ne!(signature[10], 10);
    signature[10] = 10;

    assert_eq!(
        RsaLegacyValidator::Rsa256
            .validate(&signature, SAMPLE_DATA, RSA_PUB_KEY)
            .unwrap_err(),
        RawSignatureValidationError::SignatureMismatch
    );
}

#[test]
fn rs256_bad_data() {
    let signature = include_bytes!("../fixtures/raw_signature/rs256.raw_sig");

    let mut data = SAMPLE_DATA.to_vec();
    data[10] = 0;

    assert_eq!(
        RsaLegacyValidator::Rsa256
            .validate(signature, &data, RSA_PUB_KEY)
            .unwrap_err(),
        RawSignatureValidationError::SignatureMismatch
    );
}

#[test]
fn rs256_wrong_hash() {
    let signature = include_bytes!("../fixtures/raw_signature/rs256.raw_sig");

    assert_eq!(
        RsaLegacyValidator::Rsa384
            .validate(signature, SAMPLE_DATA, RSA_PUB_KEY)
            .unwrap_err(),
        RawSignatureValidationError::SignatureMismatch
    );
}

#[test]
fn rsa_bad_public_key() {
    let signature = include_bytes!("../fixtures/raw_signature/rs256.raw_sig");

    assert_eq!(
        RsaLegacyValidator::Rsa256
            .validate(signature, SAMPLE_DATA, b"not a key")
            .unwrap_err(),
        RawSignatureValidationError::InvalidPublicKey
    );
}

#[test]
fn ps256() {
    let signature = include_bytes!("../fixtures/raw_signature/ps256.raw_sig");

    RsaValidator::Ps256
        .validate(signature, SAMPLE_DATA, RSA_PUB_KEY)
        .unwrap();
}

#[test]
fn ps256_bad_data() {
    let signature = include_bytes!("../fixtures/raw_signature/ps256.raw_sig");

    let mut data = SAMPLE_DATA.to_vec();
    data[5] = 0;

    assert_eq!(
        RsaValidator::Ps256
            .validate(signature, &data, RSA_PUB_KEY)
            .unwrap_err(),
        RawSignatureValidationError::SignatureMismatch
    );
}

#[test]
fn ps256_rejects_short_salt() {
    let signature = include_bytes!("../fixtures/raw_signature/ps256_salt20.raw_sig");

    assert_eq!(
        RsaValidator::Ps256
            .validate(signature, SAMPLE_DATA, RSA_PUB_KEY)
            .unwrap_err(),
        RawSignatureValidationError::SignatureMismatch
    );
}

#[test]
fn es256() {
    let signature = include_bytes!("../fixtures/raw_signature/es256.raw_sig");
    let pub_key = include_bytes!("../fixtures/raw_signature/es256.pub_key");

    EcdsaValidator::Es256
        .validate(signature, SAMPLE_DATA, pub_key)
        .unwrap();
}

#[test]
fn es256_bad_data() {
    let signature = include_bytes!("../fixtures/raw_signature/es256.raw_sig");
    let pub_key = include_bytes!("../fixtures/raw_signature/es256.pub_key");

    let mut data = SAMPLE_DATA.to_vec();
    data[10] = 0;

    assert_eq!(
        EcdsaValidator::Es256
            .validate(signature, &data, pub_key)
            .unwrap_err(),
        RawSignatureValidationError::SignatureMismatch
    );
}

#[test]
fn es256_signature_not_der() {
    let pub_key = include_bytes!("../fixtures/raw_signature/es256.pub_key");

    assert_eq!(
        EcdsaValidator::Es256
            .validate(&[0x30, 0x01, 0x00], SAMPLE_DATA, pub_key)
            .unwrap_err(),
        RawSignatureValidationError::InvalidSignature
    );
}

#[test]
fn es256_with_rsa_key() {
    let signature = include_bytes!("../fixtures/raw_signature/es256.raw_sig");

    assert_eq!(
        EcdsaValidator::Es256
            .validate(signature, SAMPLE_DATA, RSA_PUB_KEY)
            .unwrap_err(),
        RawSignatureValidationError::InvalidPublicKey
    );
}

#[test]
fn es512_p521() {
    let signature = include_bytes!("../fixtures/raw_signature/es512.raw_sig");
    let pub_key = include_bytes!("../fixtures/raw_signature/es512.pub_key");

    EcdsaValidator::Es512
        .validate(signature, SAMPLE_DATA, pub_key)
        .unwrap();
}

#[test]
fn ed25519() {
    let signature = include_bytes!("../fixtures/raw_signature/ed25519.raw_sig");
    let pub_key = include_bytes!("../fixtures/raw_signature/ed25519.pub_key");

    Ed25519Validator {}
        .validate(signature, SAMPLE_DATA, pub_key)
        .unwrap();
}

#[test]
fn ed25519_bad_signature() {
    let mut signature = include_bytes!("../fixtures/raw_signature/ed25519.raw_sig").to_vec();
    signature[3] ^= 0x01;
    let pub_key = include_bytes!("../fixtures/raw_signature/ed25519.pub_key");

    assert_eq!(
        Ed25519Validator {}
            .validate(&signature, SAMPLE_DATA, pub_key)
            .unwrap_err(),
        RawSignatureValidationError::SignatureMismatch
    );
}

#[test]
fn ed25519_wrong_length() {
    let signature = include_bytes!("../fixtures/raw_signature/ed25519.raw_sig");
    let pub_key = include_bytes!("../fixtures/raw_signature/ed25519.pub_key");

    assert_eq!(
        Ed25519Validator {}
            .validate(&signature[..63], SAMPLE_DATA, pub_key)
            .unwrap_err(),
        RawSignatureValidationError::InvalidSignature
    );
}

#[test]
fn md2_and_md5_are_not_provided() {
    assert!(validator_for_signature_alg(SignatureAlgorithm::Md2WithRsa).is_none());
    assert!(validator_for_signature_alg(SignatureAlgorithm::Md5WithRsa).is_none());

    for alg in SignatureAlgorithm::ALL.into_iter().skip(2) {
        assert!(validator_for_signature_alg(alg).is_some(), "{alg}");
    }
}
