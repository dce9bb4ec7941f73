// Copyright 2024 Adobe. All rights reserved.
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

//! Tools for working with raw signature algorithms.

pub(crate) mod oids;

#[cfg(all(feature = "openssl", not(target_arch = "wasm32")))]
pub mod openssl;

pub mod rust_native;

mod registry;
pub use registry::{CryptoProvider, ProviderUnavailable, UnknownProviderError, ValidatorRegistry};

mod signature_alg;
pub use signature_alg::{SignatureAlgorithm, UnknownAlgorithmError};

mod validator;
pub use validator::{RawSignatureValidationError, RawSignatureValidator};
