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

//! Optional TOML settings for `certkat sweep`.
//!
//! ```toml
//! [sweep]
//! trust_store = "/etc/ssl/certs/ca-certificates.crt"
//! provider = "openssl"
//! all_keys = true
//! fail_fast = false
//! ```
//!
//! Command-line flags take precedence over anything set here.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use certkat_crypto::raw_signature::CryptoProvider;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub sweep: SweepSettings,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SweepSettings {
    /// Trust store file or directory
    pub trust_store: Option<PathBuf>,
    /// Provider to exercise
    pub provider: Option<CryptoProvider>,
    /// Verify every key type, not just RSA
    pub all_keys: Option<bool>,
    /// Stop at the first failing entry
    pub fail_fast: Option<bool>,
}

impl Settings {
    pub fn from_toml(toml: &str) -> Result<Self> {
        toml::from_str(toml).context("reading settings")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let toml = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;

        let settings = Self::from_toml(&toml)?;
        log::debug!("loaded settings from {}", path.display());

        Ok(settings)
    }
}
