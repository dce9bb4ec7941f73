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

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::{load_certificate, load_public_key, verifier_for, Provider};

#[derive(Debug, Parser)]
pub struct Verify {
    /// Certificate to verify (PEM or DER).
    pub cert: PathBuf,

    /// Certificate of the issuer whose key signed CERT.
    #[arg(long, conflicts_with = "key")]
    pub issuer: Option<PathBuf>,

    /// Public key that signed CERT (PEM or DER SubjectPublicKeyInfo).
    #[arg(long)]
    pub key: Option<PathBuf>,

    #[clap(flatten)]
    pub provider: Provider,
}

impl Verify {
    pub fn execute(&self) -> Result<bool> {
        let cert = load_certificate(&self.cert)?;

        let key = match (&self.issuer, &self.key) {
            (Some(issuer), _) => load_certificate(issuer)?.public_key().clone(),
            (None, Some(key)) => load_public_key(key)?,
            (None, None) => cert.public_key().clone(),
        };

        let verifier = verifier_for(self.provider.resolve(None))?;

        println!("* Testing {}...", cert.subject());
        match cert.signature_algorithm() {
            Some(alg) => println!("Signature algorithm: {alg}"),
            None => println!("Signature algorithm: {}", cert.signature_algorithm_oid()),
        }

        match verifier.verify(&cert, &key) {
            Ok(()) => {
                println!("Signature verified ({}).", verifier.registry().name());
                Ok(true)
            }
            Err(err) => {
                println!("FAILED: {err}");
                Ok(false)
            }
        }
    }
}
