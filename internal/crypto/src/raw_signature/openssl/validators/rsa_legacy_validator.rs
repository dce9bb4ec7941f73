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

use openssl::{hash::MessageDigest, sign::Verifier};

use super::rsa_pkey_from_spki;
use crate::raw_signature::{
    openssl::OpenSslMutex, RawSignatureValidationError, RawSignatureValidator,
};

/// An `RsaLegacyValidator` can validate raw signatures with one of the
/// RSASSA-PKCS1-v1_5 signature algorithms, including MD5.
#[non_exhaustive]
pub enum RsaLegacyValidator {
    /// RSASSA-PKCS1-v1_5 using MD5
    Md5,

    /// RSASSA-PKCS1-v1_5 using SHA-1
    Sha1,

    /// RSASSA-PKCS1-v1_5 using SHA-256
    Rsa256,

    /// RSASSA-PKCS1-v1_5 using SHA-384
    Rsa384,

    /// RSASSA-PKCS1-v1_5 using SHA-512
    Rsa512,
}

impl RawSignatureValidator for RsaLegacyValidator {
    fn validate(
        &self,
        sig: &[u8],
        data: &[u8],
        pkey: &[u8],
    ) -> Result<(), RawSignatureValidationError> {
        let _openssl = OpenSslMutex::acquire()?;
        let public_key = rsa_pkey_from_spki(pkey)?;

        let digest = match self {
            Self::Md5 => MessageDigest::md5(),
            Self::Sha1 => MessageDigest::sha1(),
            Self::Rsa256 => MessageDigest::sha256(),
            Self::Rsa384 => MessageDigest::sha384(),
            Self::Rsa512 => MessageDigest::sha512(),
        };

        let mut verifier = Verifier::new(digest, &public_key)?;

        // A malformed signature makes OpenSSL push an error rather than
        // return false; both mean the signature does not verify.
        match verifier.verify_oneshot(sig, data) {
            Ok(true) => Ok(()),
            _ => Err(RawSignatureValidationError::SignatureMismatch),
        }
    }
}
