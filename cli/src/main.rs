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

#![doc = include_str!("../README.md")]

use std::process::exit;

use anyhow::Result;
use clap::Parser;

mod commands;
mod settings;

use commands::CliArgs;

fn main() -> Result<()> {
    let args = CliArgs::parse();

    // set RUST_LOG=debug to get detailed debug logging
    if std::env::var("RUST_LOG").is_err() {
        let level = match args.verbose {
            0 => "error",
            1 => "warn",
            2 => "info",
            _ => "debug",
        };
        std::env::set_var("RUST_LOG", level);
    }
    env_logger::init();

    if !args.command.execute()? {
        exit(1);
    }

    Ok(())
}
