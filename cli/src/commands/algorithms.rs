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

use anyhow::Result;
use certkat_crypto::raw_signature::{SignatureAlgorithm, ValidatorRegistry};
use clap::Parser;

use super::Provider;

#[derive(Debug, Parser)]
pub struct Algorithms {
    #[clap(flatten)]
    pub provider: Provider,

    /// Also list algorithms the provider cannot check.
    #[arg(long)]
    pub all: bool,
}

impl Algorithms {
    pub fn execute(&self) -> Result<bool> {
        let registry = ValidatorRegistry::for_provider(self.provider.resolve(None))?;

        for alg in SignatureAlgorithm::ALL {
            match (registry.supports(alg), self.all) {
                (true, _) => println!("{alg}"),
                (false, true) => println!("{alg} (unsupported)"),
                (false, false) => (),
            }
        }

        Ok(true)
    }
}
