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

#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg, doc_cfg_hide))]

mod certificate;
pub use certificate::{Certificate, CertificateError};

pub mod hash;

mod public_key;
pub use public_key::{EcdsaCurve, KeyAlgorithm, PublicKey, PublicKeyError};

pub mod raw_signature;

pub mod sweep;

pub mod trust_store;

mod verify;
pub use verify::{verify, verify_self_signed, CertificateVerifier, VerificationError};

#[cfg(test)]
pub(crate) mod tests;
