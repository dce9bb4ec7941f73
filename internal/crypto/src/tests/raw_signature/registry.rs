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

use std::str::FromStr;

use super::SAMPLE_DATA;
use crate::raw_signature::{
    rust_native::validators::RsaLegacyValidator, CryptoProvider, ProviderUnavailable,
    RawSignatureValidationError, RawSignatureValidator, SignatureAlgorithm, UnknownProviderError,
    ValidatorRegistry,
};

struct AlwaysFails;

impl RawSignatureValidator for AlwaysFails {
    fn validate(
        &self,
        _sig: &[u8],
        _data: &[u8],
        _public_key: &[u8],
    ) -> Result<(), RawSignatureValidationError> {
        Err(RawSignatureValidationError::SignatureMismatch)
    }
}

#[test]
fn rust_native_algorithms() {
    let registry = ValidatorRegistry::rust_native();

    assert_eq!(registry.name(), "rust_native");
    assert_eq!(
        registry.algorithms().collect::<Vec<_>>(),
        SignatureAlgorithm::ALL[2..].to_vec()
    );
    assert!(!registry.supports(SignatureAlgorithm::Md2WithRsa));
    assert!(!registry.supports(SignatureAlgorithm::Md5WithRsa));
    assert!(registry.supports(SignatureAlgorithm::Ps512));
}

#[test]
fn empty_registry() {
    let registry = ValidatorRegistry::empty("nothing");

    assert_eq!(registry.name(), "nothing");
    assert_eq!(registry.algorithms().count(), 0);
    assert!(registry.get(SignatureAlgorithm::Sha256WithRsa).is_none());
}

#[test]
fn register_and_remove() {
    let mut registry = ValidatorRegistry::empty("custom");

    assert!(registry
        .register(
            SignatureAlgorithm::Sha256WithRsa,
            Box::new(RsaLegacyValidator::Rsa256)
        )
        .is_none());
    assert!(registry.supports(SignatureAlgorithm::Sha256WithRsa));

    let signature = include_bytes!("../fixtures/raw_signature/rs256.raw_sig");
    let pub_key = include_bytes!("../fixtures/raw_signature/rsa.pub_key");

    registry
        .get(SignatureAlgorithm::Sha256WithRsa)
        .unwrap()
        .validate(signature, SAMPLE_DATA, pub_key)
        .unwrap();

    let replaced = registry.register(SignatureAlgorithm::Sha256WithRsa, Box::new(AlwaysFails));
    assert!(replaced.is_some());

    assert_eq!(
        registry
            .get(SignatureAlgorithm::Sha256WithRsa)
            .unwrap()
            .validate(signature, SAMPLE_DATA, pub_key)
            .unwrap_err(),
        RawSignatureValidationError::SignatureMismatch
    );

    assert!(registry.remove(SignatureAlgorithm::Sha256WithRsa).is_some());
    assert!(registry.remove(SignatureAlgorithm::Sha256WithRsa).is_none());
    assert!(!registry.supports(SignatureAlgorithm::Sha256WithRsa));
}

#[test]
fn debug_lists_algorithms() {
    let mut registry = ValidatorRegistry::empty("custom");
    registry.register(SignatureAlgorithm::Ed25519, Box::new(AlwaysFails));

    assert_eq!(
        format!("{registry:?}"),
        "ValidatorRegistry { name: \"custom\", algorithms: [Ed25519] }"
    );
}

#[test]
fn registry_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ValidatorRegistry>();
}

#[test]
fn provider_names() {
    assert_eq!(
        CryptoProvider::from_str("rust_native"),
        Ok(CryptoProvider::RustNative)
    );
    assert_eq!(CryptoProvider::from_str("openssl"), Ok(CryptoProvider::OpenSsl));
    assert_eq!(
        CryptoProvider::from_str("boringssl"),
        Err(UnknownProviderError("boringssl".to_owned()))
    );

    for provider in CryptoProvider::ALL {
        assert_eq!(CryptoProvider::from_str(&provider.to_string()), Ok(provider));
    }

    assert_eq!(CryptoProvider::default(), CryptoProvider::RustNative);
}

#[test]
fn provider_serde() {
    let provider: CryptoProvider = serde_json::from_str("\"openssl\"").unwrap();
    assert_eq!(provider, CryptoProvider::OpenSsl);

    assert_eq!(
        serde_json::to_string(&CryptoProvider::RustNative).unwrap(),
        "\"rust_native\""
    );
}

#[test]
fn for_provider_rust_native() {
    assert!(CryptoProvider::RustNative.is_available());

    let registry = ValidatorRegistry::for_provider(CryptoProvider::RustNative).unwrap();
    assert_eq!(registry.name(), "rust_native");
}

#[cfg(not(feature = "openssl"))]
#[test]
fn openssl_unavailable() {
    assert!(!CryptoProvider::OpenSsl.is_available());
    assert_eq!(
        ValidatorRegistry::for_provider(CryptoProvider::OpenSsl).unwrap_err(),
        ProviderUnavailable(CryptoProvider::OpenSsl)
    );
}

#[cfg(feature = "openssl")]
#[test]
fn openssl_available() {
    assert!(CryptoProvider::OpenSsl.is_available());

    let registry = ValidatorRegistry::for_provider(CryptoProvider::OpenSsl).unwrap();
    assert_eq!(registry.name(), "openssl");
    assert!(registry.supports(SignatureAlgorithm::Md5WithRsa));
    assert!(!registry.supports(SignatureAlgorithm::Md2WithRsa));
    assert_eq!(registry.algorithms().count(), 12);
}

#[test]
fn unavailable_message() {
    assert_eq!(
        ProviderUnavailable(CryptoProvider::OpenSsl).to_string(),
        "crypto provider openssl is not available in this build"
    );
}
