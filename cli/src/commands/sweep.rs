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

use anyhow::{Context, Result};
use certkat_crypto::{
    sweep::{self, EntryStatus, KeyFilter, SweepReport},
    trust_store::TrustStore,
};
use certkat_status_tracker::{ErrorBehavior, StatusTracker};
use clap::Parser;

use super::{verifier_for, Provider};
use crate::settings::Settings;

/// Used when neither the command line, the environment, nor a settings file
/// names a trust store.
pub const DEFAULT_TRUST_STORE: &str = "/etc/ssl/certs/ca-certificates.crt";

#[derive(Debug, Parser)]
pub struct Sweep {
    /// Trust store: a PEM bundle, a DER certificate, or a directory of them.
    #[arg(env = "CERTKAT_TRUST_STORE")]
    pub store: Option<PathBuf>,

    #[clap(flatten)]
    pub provider: Provider,

    /// Verify every key type instead of RSA keys only.
    #[arg(long)]
    pub all_keys: bool,

    /// Stop at the first entry that fails to verify.
    #[arg(long)]
    pub fail_fast: bool,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Path to a TOML settings file.
    #[arg(long, env = "CERTKAT_SETTINGS")]
    pub settings: Option<PathBuf>,
}

impl Sweep {
    pub fn execute(&self) -> Result<bool> {
        let settings = match &self.settings {
            Some(path) => Settings::from_file(path)?,
            None => Settings::default(),
        }
        .sweep;

        let store_path = self
            .store
            .clone()
            .or(settings.trust_store)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TRUST_STORE));

        let store = TrustStore::from_path(&store_path)
            .with_context(|| format!("Failed to load trust store {}", store_path.display()))?;

        let provider = self.provider.resolve(settings.provider);

        let key_filter = if self.all_keys || settings.all_keys.unwrap_or(false) {
            KeyFilter::All
        } else {
            KeyFilter::Rsa
        };

        let error_behavior = if self.fail_fast || settings.fail_fast.unwrap_or(false) {
            ErrorBehavior::StopOnFirstError
        } else {
            ErrorBehavior::ContinueWhenPossible
        };

        let sweep = sweep::Sweep::new(verifier_for(provider)?).key_filter(key_filter);

        let mut tracker = StatusTracker::with_error_behavior(error_behavior);
        let report = sweep.run(&store, &mut tracker)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print_report(&report);
        }

        Ok(report.passed())
    }
}

fn print_report(report: &SweepReport) {
    for entry in &report.entries {
        let Some(key) = &entry.key_algorithm else {
            println!("Skipping alias {}", entry.alias);
            continue;
        };

        println!("* Testing {}...", entry.alias);

        if entry.status == EntryStatus::Skipped {
            println!("Skipping cert with key: {key}");
            continue;
        }

        if let Some(alg) = &entry.signature_algorithm {
            println!("Signature algorithm: {alg}");
        }

        if entry.status == EntryStatus::Failed {
            println!(
                "FAILED: {}",
                entry.error.as_deref().unwrap_or("verification failed")
            );
        }
    }

    if report.passed() {
        println!("All tests passed ({} ms).", report.elapsed_ms);
    } else {
        println!(
            "{} of {} certificates failed ({} ms).",
            report.failed,
            report.verified + report.failed,
            report.elapsed_ms
        );
    }
}
