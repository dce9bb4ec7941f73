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

mod algorithms;
mod sweep;
mod verify;

use std::{fs, path::Path};

use anyhow::{Context, Result};
use certkat_crypto::{
    raw_signature::{CryptoProvider, ValidatorRegistry},
    Certificate, CertificateVerifier, PublicKey,
};
use clap::{ArgAction, Parser, Subcommand};

pub use self::{algorithms::Algorithms, sweep::Sweep, verify::Verify};

/// Known-answer checks for certificate signature verification providers.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    /// Use verbose output (-vv very verbose output).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Verify every trust anchor in a store under its own public key.
    Sweep(Sweep),
    /// Verify a single certificate.
    Verify(Verify),
    /// List the signature algorithms a provider can check.
    Algorithms(Algorithms),
}

impl Commands {
    /// Run the command. Returns `false` if any check failed.
    pub fn execute(&self) -> Result<bool> {
        match self {
            Commands::Sweep(sweep) => sweep.execute(),
            Commands::Verify(verify) => verify.execute(),
            Commands::Algorithms(algorithms) => algorithms.execute(),
        }
    }
}

#[derive(Debug, Default, Parser)]
pub struct Provider {
    /// Crypto provider to exercise (rust_native or openssl).
    #[arg(long, env = "CERTKAT_PROVIDER")]
    pub provider: Option<CryptoProvider>,
}

impl Provider {
    pub fn resolve(&self, fallback: Option<CryptoProvider>) -> CryptoProvider {
        self.provider.or(fallback).unwrap_or_default()
    }
}

fn verifier_for(provider: CryptoProvider) -> Result<CertificateVerifier> {
    let registry = ValidatorRegistry::for_provider(provider)?;
    Ok(CertificateVerifier::new(registry))
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn load_certificate(path: &Path) -> Result<Certificate> {
    Certificate::from_pem_or_der(&read_file(path)?)
        .with_context(|| format!("Invalid certificate in {}", path.display()))
}

fn load_public_key(path: &Path) -> Result<PublicKey> {
    PublicKey::from_pem_or_der(&read_file(path)?)
        .with_context(|| format!("Invalid public key in {}", path.display()))
}
