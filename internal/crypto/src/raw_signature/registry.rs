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

use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::raw_signature::{rust_native, RawSignatureValidator, SignatureAlgorithm};

/// Names a compiled-in cryptography backend.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CryptoProvider {
    /// Pure Rust validators from the RustCrypto project. Always available.
    #[default]
    RustNative,

    /// Validators backed by OpenSSL. Requires the `openssl` feature.
    #[serde(rename = "openssl")]
    OpenSsl,
}

impl CryptoProvider {
    /// Every provider this crate knows about, whether or not it was compiled
    /// in.
    pub const ALL: [CryptoProvider; 2] = [Self::RustNative, Self::OpenSsl];

    /// Return `true` if this provider was compiled into the current build.
    pub fn is_available(&self) -> bool {
        match self {
            Self::RustNative => true,
            Self::OpenSsl => cfg!(all(feature = "openssl", not(target_arch = "wasm32"))),
        }
    }
}

impl FromStr for CryptoProvider {
    type Err = UnknownProviderError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "rust_native" => Ok(Self::RustNative),
            "openssl" => Ok(Self::OpenSsl),
            _ => Err(UnknownProviderError(name.to_owned())),
        }
    }
}

impl fmt::Display for CryptoProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::RustNative => "rust_native",
            Self::OpenSsl => "openssl",
        })
    }
}

/// Returned when a provider name is not recognized.
#[derive(Debug, Eq, Error, PartialEq)]
#[error("unknown crypto provider: {0}")]
pub struct UnknownProviderError(pub String);

/// Returned by [`ValidatorRegistry::for_provider`] when the requested provider
/// was not compiled into this build.
#[derive(Debug, Eq, Error, PartialEq)]
#[error("crypto provider {0} is not available in this build")]
pub struct ProviderUnavailable(pub CryptoProvider);

/// Maps each [`SignatureAlgorithm`] to the [`RawSignatureValidator`] that
/// checks it.
///
/// An algorithm with no entry is reported as unsupported by the verifier.
/// Registries are `Send + Sync` and may be shared across threads.
pub struct ValidatorRegistry {
    name: String,
    validators: BTreeMap<SignatureAlgorithm, Box<dyn RawSignatureValidator>>,
}

impl ValidatorRegistry {
    /// An empty registry. Every algorithm is unsupported until a validator is
    /// registered for it.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            validators: BTreeMap::new(),
        }
    }

    /// The registry for the Rust native provider.
    pub fn rust_native() -> Self {
        let mut registry = Self::empty(CryptoProvider::RustNative.to_string());

        for alg in SignatureAlgorithm::ALL {
            if let Some(validator) = rust_native::validators::validator_for_signature_alg(alg) {
                registry.validators.insert(alg, validator);
            }
        }

        registry
    }

    /// The registry for the OpenSSL provider.
    #[cfg(all(feature = "openssl", not(target_arch = "wasm32")))]
    pub fn openssl() -> Self {
        use crate::raw_signature::openssl;

        let mut registry = Self::empty(CryptoProvider::OpenSsl.to_string());

        for alg in SignatureAlgorithm::ALL {
            if let Some(validator) = openssl::validators::validator_for_signature_alg(alg) {
                registry.validators.insert(alg, validator);
            }
        }

        registry
    }

    /// Build the registry for `provider`.
    pub fn for_provider(provider: CryptoProvider) -> Result<Self, ProviderUnavailable> {
        match provider {
            CryptoProvider::RustNative => Ok(Self::rust_native()),

            #[cfg(all(feature = "openssl", not(target_arch = "wasm32")))]
            CryptoProvider::OpenSsl => Ok(Self::openssl()),

            #[cfg(not(all(feature = "openssl", not(target_arch = "wasm32"))))]
            CryptoProvider::OpenSsl => Err(ProviderUnavailable(provider)),
        }
    }

    /// Name of the provider this registry was built for.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Install `validator` for `alg`, returning the validator it replaces.
    pub fn register(
        &mut self,
        alg: SignatureAlgorithm,
        validator: Box<dyn RawSignatureValidator>,
    ) -> Option<Box<dyn RawSignatureValidator>> {
        self.validators.insert(alg, validator)
    }

    /// Remove the validator for `alg`, returning it if one was present.
    pub fn remove(&mut self, alg: SignatureAlgorithm) -> Option<Box<dyn RawSignatureValidator>> {
        self.validators.remove(&alg)
    }

    /// The validator for `alg`, if any.
    pub fn get(&self, alg: SignatureAlgorithm) -> Option<&dyn RawSignatureValidator> {
        self.validators.get(&alg).map(|v| v.as_ref())
    }

    /// Return `true` if a validator is registered for `alg`.
    pub fn supports(&self, alg: SignatureAlgorithm) -> bool {
        self.validators.contains_key(&alg)
    }

    /// Supported algorithms, in the order of [`SignatureAlgorithm::ALL`].
    pub fn algorithms(&self) -> impl Iterator<Item = SignatureAlgorithm> + '_ {
        self.validators.keys().copied()
    }
}

impl Default for ValidatorRegistry {
    fn default() -> Self {
        Self::rust_native()
    }
}

impl fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorRegistry")
            .field("name", &self.name)
            .field("algorithms", &self.validators.keys().collect::<Vec<_>>())
            .finish()
    }
}
