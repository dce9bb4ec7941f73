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

use std::sync::{Mutex, MutexGuard};

use thiserror::Error;

static FFI_MUTEX: Mutex<()> = Mutex::new(());

/// Guard held by every validator while it calls into OpenSSL.
///
/// Verification is run from whichever thread owns the
/// [`CertificateVerifier`], so all OpenSSL calls are serialized through a
/// single process-wide lock.
///
/// [`CertificateVerifier`]: crate::CertificateVerifier
pub struct OpenSslMutex<'a> {
    #[allow(dead_code)]
    guard: MutexGuard<'a, ()>,
}

impl OpenSslMutex<'_> {
    /// Acquire a mutex on OpenSSL FFI code.
    ///
    /// Code holding this guard MUST NOT panic, even in tests. Doing so poisons
    /// the mutex and leaves the OpenSSL provider unusable for the rest of the
    /// process lifetime.
    pub fn acquire() -> Result<Self, OpenSslMutexUnavailable> {
        match FFI_MUTEX.lock() {
            Ok(guard) => Ok(Self { guard }),
            Err(_) => Err(OpenSslMutexUnavailable {}),
        }
    }
}

/// Error returned when unable to acquire the OpenSSL native code mutex.
///
/// This happens only after a prior holder of the mutex panicked. See
/// [Rustnomicon: Poisoning] for more information.
///
/// [Rustnomicon: Poisoning]: https://doc.rust-lang.org/nomicon/poisoning.html
#[derive(Debug, Eq, Error, PartialEq)]
#[error("unable to acquire OpenSSL native code mutex")]
pub struct OpenSslMutexUnavailable;
