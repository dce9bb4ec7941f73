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

//! Status codes attached to the log items produced by a known-answer sweep.

// -- success codes --

/// The certificate signature verified under the expected public key.
pub const SIGNATURE_VERIFIED: &str = "certificate.signature.verified";

// -- informational codes --

/// The entry was not checked, either because it is not a certificate or
/// because its key type is not selected.
pub const ENTRY_SKIPPED: &str = "entry.skipped";

/// The certificate is outside its validity period. Its signature is still
/// checked.
pub const VALIDITY_OUTSIDE: &str = "certificate.validity.outside";

// -- failure codes --

/// The signature does not match the signed content and public key.
pub const SIGNATURE_INVALID: &str = "certificate.signature.invalid";

/// The signature algorithm is not recognized or not implemented by the
/// active provider.
pub const ALGORITHM_UNSUPPORTED: &str = "certificate.algorithm.unsupported";

/// The public key cannot validate the declared signature algorithm.
pub const ALGORITHM_MISMATCH: &str = "certificate.algorithm.mismatch";

/// The certificate or key encoding could not be parsed.
pub const MALFORMED: &str = "certificate.malformed";

/// The provider's cryptography library reported an internal error.
pub const PROVIDER_ERROR: &str = "certificate.provider.error";
