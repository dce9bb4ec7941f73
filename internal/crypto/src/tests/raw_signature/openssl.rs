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
    openssl::validators::{EcdsaValidator, Ed25519Validator, RsaLegacyValidator, RsaValidator},
    RawSignatureValidationError, RawSignatureValidator,
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
fn md5() {
    let signature = include_bytes!("../fixtures/raw_signature/rsa_md5.raw_sig");

    RsaLegacyValidator::Md5
        .validate(signature, SAMPLE_DATA, RSA_PUB_KEY)
        .unwrap();
}

#[test]
fn ps256() {
    let signature = include_bytes!("../fixtures/raw_signature/ps256.raw_sig");

    RsaValidator::Ps256
        .validate(signature, SAMPLE_DATA, RSA_PUB_KEY)
        .unwrap();
}

#[test]
fn ps256_rejects_short_salt() {
    let signature = include_bytes!("../fixtures/raw_signature/ps256_salt20.raw_sig");

    assert!(RsaValidator::Ps256
        .validate(signature, SAMPLE_DATA, RSA_PUB_KEY)
        .is_err());
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
fn es256() {
    let signature = include_bytes!("../fixtures/raw_signature/es256.raw_sig");
    let pub_key = include_bytes!("../fixtures/raw_signature/es256.pub_key");

    EcdsaValidator::Es256
        .validate(signature, SAMPLE_DATA, pub_key)
        .unwrap();
}

#[test]
fn es512() {
    let signature = include_bytes!("../fixtures/raw_signature/es512.raw_sig");
    let pub_key = include_bytes!("../fixtures/raw_signature/es512.pub_key");

    EcdsaValidator::Es512
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
fn ed25519() {
    let signature = include_bytes!("../fixtures/raw_signature/ed25519.raw_sig");
    let pub_key = include_bytes!("../fixtures/raw_signature/ed25519.pub_key");

    Ed25519Validator {}
        .validate(signature, SAMPLE_DATA, pub_key)
        .unwrap();
}

#[test]
fn ed25519_wrong_key_type() {
    let signature = include_bytes!("../fixtures/raw_signature/ed25519.raw_sig");

    assert_eq!(
        Ed25519Validator {}
            .validate(signature, SAMPLE_DATA, RSA_PUB_KEY)
            .unwrap_err(),
        RawSignatureValidationError::InvalidPublicKey
    );
}
