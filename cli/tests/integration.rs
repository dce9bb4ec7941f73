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

// isolate from wasm by wrapping in module
#[cfg(not(target_arch = "wasm32"))]
mod integration {
    use std::{fs, path::PathBuf, process::Command};

    use assert_cmd::prelude::*; // Add methods on commands
    use predicates::prelude::*;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn fixture_path(name: &str) -> PathBuf {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("../internal/crypto/src/tests/fixtures");
        path.push(name);
        std::fs::canonicalize(path).expect("canonicalize")
    }

    fn cert_path(name: &str) -> PathBuf {
        fixture_path(&format!("certs/{name}"))
    }

    fn certkat() -> Command {
        let mut cmd = Command::cargo_bin("certkat").expect("certkat binary");
        cmd.env_remove("CERTKAT_TRUST_STORE")
            .env_remove("CERTKAT_PROVIDER")
            .env_remove("CERTKAT_SETTINGS");
        cmd
    }

    #[test]
    fn sweep_rsa_entries() -> TestResult {
        certkat()
            .arg("sweep")
            .arg(cert_path("cacerts.pem"))
            .assert()
            .success()
            .stdout(predicate::str::contains("* Testing certkat-rsa-root..."))
            .stdout(predicate::str::contains("Signature algorithm: rsa-sha256"))
            .stdout(predicate::str::contains("Signature algorithm: ps256"))
            .stdout(predicate::str::contains(
                "* Testing certkat-p-256-root...\nSkipping cert with key: EC",
            ))
            .stdout(predicate::str::contains("Skipping alias public-key"))
            .stdout(predicate::str::contains("All tests passed ("));
        Ok(())
    }

    #[test]
    fn sweep_reports_failures() -> TestResult {
        certkat()
            .arg("sweep")
            .arg(cert_path("cacerts_bad.pem"))
            .assert()
            .failure()
            .stdout(predicate::str::contains(
                "FAILED: certificate signature does not verify",
            ))
            .stdout(predicate::str::contains(
                "FAILED: unsupported signature algorithm: rsa-md5",
            ))
            .stdout(predicate::str::contains("2 of 4 certificates failed"))
            .stdout(predicate::str::contains("All tests passed").not());
        Ok(())
    }

    #[test]
    fn sweep_fail_fast() -> TestResult {
        certkat()
            .arg("sweep")
            .arg("--fail-fast")
            .arg(cert_path("cacerts_bad.pem"))
            .assert()
            .failure()
            .stderr(predicate::str::contains(
                "certkat-rsa-md5-root: unsupported signature algorithm: rsa-md5",
            ));
        Ok(())
    }

    #[test]
    fn sweep_all_keys() -> TestResult {
        certkat()
            .arg("sweep")
            .arg("--all-keys")
            .arg(cert_path("cacerts.pem"))
            .assert()
            .failure()
            .stdout(predicate::str::contains("Signature algorithm: es256"))
            .stdout(predicate::str::contains("Signature algorithm: ed25519"))
            .stdout(predicate::str::contains("1 of 9 certificates failed"));
        Ok(())
    }

    #[test]
    fn sweep_json() -> TestResult {
        let output = certkat()
            .arg("sweep")
            .arg("--json")
            .arg(cert_path("cacerts.pem"))
            .output()?;

        assert!(output.status.success());

        let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
        assert_eq!(report["provider"], "rust_native");
        assert_eq!(report["verified"], 6);
        assert_eq!(report["skipped"], 4);
        assert_eq!(report["entries"][9]["alias"], "public-key");
        Ok(())
    }

    #[test]
    fn sweep_store_from_env() -> TestResult {
        certkat()
            .arg("sweep")
            .env("CERTKAT_TRUST_STORE", cert_path("cacerts.pem"))
            .assert()
            .success()
            .stdout(predicate::str::contains("* Testing certkat-other-rsa-root..."));
        Ok(())
    }

    #[test]
    fn sweep_directory() -> TestResult {
        let dir = tempfile::tempdir()?;
        fs::copy(cert_path("rsa_sha256.der"), dir.path().join("root.der"))?;
        fs::copy(cert_path("ec_p384.pem"), dir.path().join("ec.pem"))?;

        certkat()
            .arg("sweep")
            .arg("--all-keys")
            .arg(dir.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("* Testing certkat-p-384-root..."))
            .stdout(predicate::str::contains("* Testing certkat-rsa-root..."));
        Ok(())
    }

    #[test]
    fn sweep_missing_store() -> TestResult {
        certkat()
            .arg("sweep")
            .arg("no/such/cacerts.pem")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to load trust store"));
        Ok(())
    }

    #[test]
    fn sweep_settings_file() -> TestResult {
        let dir = tempfile::tempdir()?;
        let settings = dir.path().join("certkat.toml");
        fs::write(
            &settings,
            format!(
                "[sweep]\ntrust_store = {:?}\nall_keys = true\n",
                cert_path("cacerts.pem").to_string_lossy()
            ),
        )?;

        certkat()
            .arg("sweep")
            .arg("--settings")
            .arg(&settings)
            .assert()
            .failure()
            .stdout(predicate::str::contains("1 of 9 certificates failed"));
        Ok(())
    }

    #[test]
    fn sweep_flags_override_settings() -> TestResult {
        let dir = tempfile::tempdir()?;
        let settings = dir.path().join("certkat.toml");
        fs::write(
            &settings,
            format!(
                "[sweep]\ntrust_store = {:?}\n",
                cert_path("cacerts_bad.pem").to_string_lossy()
            ),
        )?;

        certkat()
            .arg("sweep")
            .arg("--settings")
            .arg(&settings)
            .arg(cert_path("cacerts.pem"))
            .assert()
            .success();
        Ok(())
    }

    #[test]
    fn sweep_bad_settings() -> TestResult {
        let dir = tempfile::tempdir()?;
        let settings = dir.path().join("certkat.toml");
        fs::write(&settings, "[sweep]\nprovider = \"bouncy\"\n")?;

        certkat()
            .arg("sweep")
            .arg("--settings")
            .arg(&settings)
            .arg(cert_path("cacerts.pem"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("reading settings"));
        Ok(())
    }

    #[test]
    fn unknown_provider() -> TestResult {
        certkat()
            .args(["sweep", "--provider", "bouncy"])
            .arg(cert_path("cacerts.pem"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown crypto provider: bouncy"));
        Ok(())
    }

    #[cfg(not(feature = "openssl"))]
    #[test]
    fn openssl_not_compiled_in() -> TestResult {
        certkat()
            .args(["sweep", "--provider", "openssl"])
            .arg(cert_path("cacerts.pem"))
            .assert()
            .failure()
            .stderr(predicate::str::contains(
                "crypto provider openssl is not available in this build",
            ));
        Ok(())
    }

    #[cfg(feature = "openssl")]
    #[test]
    fn openssl_sweep() -> TestResult {
        certkat()
            .args(["sweep", "--provider", "openssl"])
            .arg(cert_path("cacerts_bad.pem"))
            .assert()
            .failure()
            .stdout(predicate::str::contains("1 of 4 certificates failed"));
        Ok(())
    }

    #[test]
    fn verify_with_issuer() -> TestResult {
        certkat()
            .arg("verify")
            .arg(cert_path("rsa_leaf.pem"))
            .arg("--issuer")
            .arg(cert_path("rsa_sha256.pem"))
            .assert()
            .success()
            .stdout(predicate::str::contains("Signature verified (rust_native)."));
        Ok(())
    }

    #[test]
    fn verify_with_key() -> TestResult {
        certkat()
            .arg("verify")
            .arg(cert_path("rsa_leaf.pem"))
            .arg("--key")
            .arg(fixture_path("raw_signature/rsa.pub_key"))
            .assert()
            .success();
        Ok(())
    }

    #[test]
    fn verify_self_signed_der() -> TestResult {
        certkat()
            .arg("verify")
            .arg(cert_path("rsa_sha256.der"))
            .assert()
            .success()
            .stdout(predicate::str::contains("Signature algorithm: rsa-sha256"));
        Ok(())
    }

    #[test]
    fn verify_p521_with_sha256() -> TestResult {
        certkat()
            .arg("verify")
            .arg(cert_path("ec_p521_sha256.pem"))
            .assert()
            .success()
            .stdout(predicate::str::contains("Signature algorithm: es256"));
        Ok(())
    }

    #[test]
    fn verify_unsupported_curve() -> TestResult {
        certkat()
            .arg("verify")
            .arg(cert_path("ec_brainpool.pem"))
            .assert()
            .failure()
            .stdout(predicate::str::contains(
                "FAILED: unsupported signature algorithm: es256",
            ));
        Ok(())
    }

    #[test]
    fn verify_wrong_key() -> TestResult {
        certkat()
            .arg("verify")
            .arg(cert_path("rsa_leaf.pem"))
            .arg("--key")
            .arg(cert_path("leaf_pub.pem"))
            .assert()
            .failure()
            .stdout(predicate::str::contains(
                "FAILED: certificate signature does not verify",
            ));
        Ok(())
    }

    #[test]
    fn verify_algorithm_mismatch() -> TestResult {
        certkat()
            .arg("verify")
            .arg(cert_path("ec_p256.pem"))
            .arg("--issuer")
            .arg(cert_path("rsa_sha256.pem"))
            .assert()
            .failure()
            .stdout(predicate::str::contains(
                "signature algorithm es256 cannot be checked with a RSA key",
            ));
        Ok(())
    }

    #[test]
    fn verify_issuer_and_key_conflict() -> TestResult {
        certkat()
            .arg("verify")
            .arg(cert_path("rsa_leaf.pem"))
            .arg("--issuer")
            .arg(cert_path("rsa_sha256.pem"))
            .arg("--key")
            .arg(cert_path("leaf_pub.pem"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("cannot be used with"));
        Ok(())
    }

    #[test]
    fn verify_not_a_certificate() -> TestResult {
        certkat()
            .arg("verify")
            .arg(cert_path("leaf_pub.pem"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid certificate"));
        Ok(())
    }

    #[test]
    fn algorithms() -> TestResult {
        certkat()
            .arg("algorithms")
            .assert()
            .success()
            .stdout(predicate::str::contains("rsa-sha256\n"))
            .stdout(predicate::str::contains("ed25519\n"))
            .stdout(predicate::str::contains("rsa-md5").not());
        Ok(())
    }

    #[test]
    fn algorithms_all() -> TestResult {
        certkat()
            .args(["algorithms", "--all"])
            .assert()
            .success()
            .stdout(predicate::str::contains("rsa-md2 (unsupported)"));
        Ok(())
    }
}
