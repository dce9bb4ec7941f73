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

//! Known-answer sweep over a trust store.
//!
//! Every trust anchor is self-signed, so each one must verify under its own
//! public key. A provider that rejects any of them is broken.

use certkat_status_tracker::{log_item, status_codes, ErrorBehavior, StatusTracker};
use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use web_time::Instant;

use crate::{
    trust_store::{EntryItem, TrustStore, TrustStoreEntry},
    Certificate, CertificateVerifier, KeyAlgorithm, VerificationError,
};

/// Selects which certificates a [`Sweep`] verifies.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyFilter {
    /// RSA and RSA-PSS keys only.
    #[default]
    Rsa,

    /// Every key type.
    All,
}

impl KeyFilter {
    /// Return `true` if certificates with `key` should be verified.
    pub fn selects(&self, key: &KeyAlgorithm) -> bool {
        match self {
            Self::Rsa => key.is_rsa(),
            Self::All => true,
        }
    }
}

/// Verifies every selected certificate in a trust store under its own key.
#[derive(Debug, Default)]
pub struct Sweep {
    verifier: CertificateVerifier,
    key_filter: KeyFilter,
    validity_time: Option<DateTime<Utc>>,
}

impl Sweep {
    /// A sweep that checks RSA certificates with `verifier`.
    pub fn new(verifier: CertificateVerifier) -> Self {
        Self {
            verifier,
            key_filter: KeyFilter::default(),
            validity_time: None,
        }
    }

    /// Choose which key types are verified.
    pub fn key_filter(mut self, key_filter: KeyFilter) -> Self {
        self.key_filter = key_filter;
        self
    }

    /// Check validity periods against `at` instead of the current time.
    pub fn validity_time(mut self, at: DateTime<Utc>) -> Self {
        self.validity_time = Some(at);
        self
    }

    /// The verifier this sweep uses.
    pub fn verifier(&self) -> &CertificateVerifier {
        &self.verifier
    }

    /// Run the sweep and collect every outcome, regardless of failures.
    pub fn run_detailed(&self, store: &TrustStore) -> SweepReport {
        let mut tracker = StatusTracker::with_error_behavior(ErrorBehavior::ContinueWhenPossible);

        // ContinueWhenPossible never stops early.
        match self.run(store, &mut tracker) {
            Ok(report) => report,
            Err(_) => SweepReport::empty(self.verifier.registry().name()),
        }
    }

    /// Run the sweep, logging one item per entry to `tracker`.
    ///
    /// If `tracker` stops on the first error, the first failing entry ends
    /// the sweep with [`SweepError::Failed`].
    pub fn run(
        &self,
        store: &TrustStore,
        tracker: &mut StatusTracker,
    ) -> Result<SweepReport, SweepError> {
        let start = Instant::now();
        let now = self.validity_time.unwrap_or_else(Utc::now);
        let mut report = SweepReport::empty(self.verifier.registry().name());

        for entry in store.iter() {
            let outcome = self.check_entry(entry, now, tracker)?;
            report.push(outcome);
        }

        report.elapsed_ms = start.elapsed().as_millis() as u64;

        info!(
            "sweep with {}: {} verified, {} failed, {} skipped ({} ms)",
            report.provider, report.verified, report.failed, report.skipped, report.elapsed_ms
        );

        Ok(report)
    }

    fn check_entry(
        &self,
        entry: &TrustStoreEntry,
        now: DateTime<Utc>,
        tracker: &mut StatusTracker,
    ) -> Result<EntryOutcome, SweepError> {
        let alias = entry.alias().to_owned();

        let cert = match entry.item() {
            EntryItem::Certificate(cert) => cert.as_ref(),
            EntryItem::Other { label } => {
                warn!("Skipping alias {alias}");
                log_item!(
                    alias.clone(),
                    format!("not a certificate ({label})"),
                    "Sweep::check_entry"
                )
                .status_code(status_codes::ENTRY_SKIPPED)
                .informational(tracker);

                return Ok(EntryOutcome::skipped(alias, None, None));
            }
        };

        let key = cert.public_key().algorithm();
        let sig_alg = signature_algorithm_name(cert);

        if !self.key_filter.selects(key) {
            warn!("Skipping cert with key: {key}");
            log_item!(
                alias.clone(),
                format!("skipped certificate with {key} key"),
                "Sweep::check_entry"
            )
            .status_code(status_codes::ENTRY_SKIPPED)
            .informational(tracker);

            return Ok(EntryOutcome::skipped(
                alias,
                Some(key.to_string()),
                Some(sig_alg),
            ));
        }

        if !cert.is_valid_at(now) {
            log_item!(
                alias.clone(),
                format!(
                    "outside validity period ({} to {})",
                    cert.not_before(),
                    cert.not_after()
                ),
                "Sweep::check_entry"
            )
            .status_code(status_codes::VALIDITY_OUTSIDE)
            .informational(tracker);
        }

        match self.verifier.verify_self_signed(cert) {
            Ok(()) => {
                log_item!(alias.clone(), "signature verified", "Sweep::check_entry")
                    .status_code(status_codes::SIGNATURE_VERIFIED)
                    .success(tracker);

                Ok(EntryOutcome {
                    alias,
                    status: EntryStatus::Verified,
                    key_algorithm: Some(key.to_string()),
                    signature_algorithm: Some(sig_alg),
                    error: None,
                })
            }

            Err(err) => {
                warn!("{alias}: {err}");
                let outcome = EntryOutcome {
                    alias: alias.clone(),
                    status: EntryStatus::Failed,
                    key_algorithm: Some(key.to_string()),
                    signature_algorithm: Some(sig_alg),
                    error: Some(err.to_string()),
                };

                log_item!(alias.clone(), err.to_string(), "Sweep::check_entry")
                    .status_code(err.status_code())
                    .failure(tracker, err)
                    .map_err(|source| SweepError::Failed { alias, source })?;

                Ok(outcome)
            }
        }
    }
}

fn signature_algorithm_name(cert: &Certificate) -> String {
    cert.signature_algorithm()
        .map(|alg| alg.to_string())
        .unwrap_or_else(|| cert.signature_algorithm_oid().to_owned())
}

/// Result of a [`Sweep`] over a whole trust store.
#[derive(Clone, Debug, Serialize)]
pub struct SweepReport {
    /// Name of the provider that was exercised
    pub provider: String,

    /// One outcome per trust-store entry, in store order
    pub entries: Vec<EntryOutcome>,

    /// Number of certificates that verified
    pub verified: usize,

    /// Number of certificates that did not verify
    pub failed: usize,

    /// Number of entries that were not checked
    pub skipped: usize,

    /// Wall-clock duration of the sweep
    pub elapsed_ms: u64,
}

impl SweepReport {
    fn empty(provider: &str) -> Self {
        Self {
            provider: provider.to_owned(),
            entries: vec![],
            verified: 0,
            failed: 0,
            skipped: 0,
            elapsed_ms: 0,
        }
    }

    fn push(&mut self, outcome: EntryOutcome) {
        match outcome.status {
            EntryStatus::Verified => self.verified += 1,
            EntryStatus::Failed => self.failed += 1,
            EntryStatus::Skipped => self.skipped += 1,
        }
        self.entries.push(outcome);
    }

    /// Return `true` if no entry failed.
    pub fn passed(&self) -> bool {
        self.failed == 0
    }

    /// Outcomes of entries that failed.
    pub fn failures(&self) -> impl Iterator<Item = &EntryOutcome> {
        self.entries
            .iter()
            .filter(|e| e.status == EntryStatus::Failed)
    }
}

/// What happened to one trust-store entry.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct EntryOutcome {
    /// Entry alias
    pub alias: String,

    /// Whether the entry verified, failed, or was skipped
    pub status: EntryStatus,

    /// Public key algorithm, for certificate entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_algorithm: Option<String>,

    /// Signature algorithm name or OID, for certificate entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_algorithm: Option<String>,

    /// Why verification failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EntryOutcome {
    fn skipped(
        alias: String,
        key_algorithm: Option<String>,
        signature_algorithm: Option<String>,
    ) -> Self {
        Self {
            alias,
            status: EntryStatus::Skipped,
            key_algorithm,
            signature_algorithm,
            error: None,
        }
    }
}

/// Classifies an [`EntryOutcome`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    /// The certificate verified under its own key.
    Verified,

    /// The certificate did not verify.
    Failed,

    /// The entry was not checked.
    Skipped,
}

/// Returned when a sweep configured to stop on the first error meets one.
#[derive(Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum SweepError {
    /// The named entry failed verification.
    #[error("{alias}: {source}")]
    Failed {
        /// Alias of the failing entry
        alias: String,

        /// Why it failed
        source: VerificationError,
    },
}
