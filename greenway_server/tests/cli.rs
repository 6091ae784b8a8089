//! End-to-end CLI tests for the `greenway` binary.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const ENV_VARS: [&str; 3] = [
    "GREENWAY_MAINTENANCE_MODE",
    "GREENWAY_SHOW_STATUS_BANNER",
    "GREENWAY_BASE_URL",
];

/// `greenway` running in `dir` with no inherited site env vars.
fn greenway(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("greenway");
    cmd.current_dir(dir.path());
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd.env("RUST_LOG", "off");
    cmd
}

fn write_config(dir: &TempDir, name: &str, body: &str) {
    fs::write(dir.path().join(name), body).expect("write config");
}

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        let temp = TempDir::new().expect("temp dir");
        greenway(&temp)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("serve"))
            .stdout(predicate::str::contains("build"))
            .stdout(predicate::str::contains("status"));
    }

    #[test]
    fn shows_version() {
        let temp = TempDir::new().expect("temp dir");
        greenway(&temp)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

mod status {
    use super::*;

    #[test]
    fn online_from_default_config_file() {
        let temp = TempDir::new().expect("temp dir");
        write_config(&temp, "greenway.toml", "[site]\nmaintenance_mode = false\n");

        greenway(&temp)
            .arg("status")
            .assert()
            .success()
            .stdout(predicate::str::diff("Online\n"));
    }

    #[test]
    fn maintenance_from_env() {
        let temp = TempDir::new().expect("temp dir");
        greenway(&temp)
            .env("GREENWAY_MAINTENANCE_MODE", "true")
            .arg("status")
            .assert()
            .success()
            .stdout(predicate::str::diff("Maintenance Mode\n"));
    }

    #[test]
    fn env_overrides_file() {
        let temp = TempDir::new().expect("temp dir");
        write_config(&temp, "site.toml", "[site]\nmaintenance_mode = false\n");

        greenway(&temp)
            .env("GREENWAY_MAINTENANCE_MODE", "yes")
            .args(["--config", "site.toml", "status", "--json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"status\": \"Maintenance Mode\""))
            .stdout(predicate::str::contains("\"decision\": \"maintenance\""));
    }
}

mod startup_failures {
    use super::*;

    #[test]
    fn missing_flag_is_fatal() {
        let temp = TempDir::new().expect("temp dir");
        greenway(&temp)
            .arg("status")
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("maintenance_mode"))
            .stdout(predicate::str::is_empty());
    }

    #[test]
    fn invalid_flag_is_fatal() {
        let temp = TempDir::new().expect("temp dir");
        write_config(&temp, "greenway.toml", "[site]\nmaintenance_mode = \"soon\"\n");

        greenway(&temp)
            .arg("check")
            .assert()
            .failure()
            .stderr(predicate::str::contains("expects a boolean"));
    }

    #[test]
    fn missing_explicit_config_is_fatal() {
        let temp = TempDir::new().expect("temp dir");
        greenway(&temp)
            .env("GREENWAY_MAINTENANCE_MODE", "false")
            .args(["--config", "nope.toml", "check"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("nope.toml"));
    }

    #[test]
    fn build_writes_nothing_on_invalid_config() {
        let temp = TempDir::new().expect("temp dir");
        greenway(&temp)
            .env("GREENWAY_MAINTENANCE_MODE", "sometimes")
            .args(["build", "--out", "dist"])
            .assert()
            .failure();

        assert!(!temp.path().join("dist").exists());
    }
}

mod build {
    use super::*;

    #[test]
    fn exports_site() {
        let temp = TempDir::new().expect("temp dir");
        write_config(
            &temp,
            "greenway.toml",
            "[site]\nmaintenance_mode = true\nbase_url = \"https://greenway-landscaping.com\"\n",
        );

        greenway(&temp)
            .args(["build", "--out", "public"])
            .assert()
            .success()
            .stdout(predicate::str::contains("wrote 7 files"));

        let out = temp.path().join("public");
        let index = fs::read_to_string(out.join("index.html")).expect("index");
        assert!(index.contains("under maintenance"));
        assert!(!index.contains("Our Services"));

        let terms = fs::read_to_string(out.join("terms").join("index.html")).expect("terms");
        assert!(terms.contains("Terms of Service"));

        let sitemap = fs::read_to_string(out.join("sitemap.xml")).expect("sitemap");
        assert!(sitemap.contains("https://greenway-landscaping.com/privacy"));
    }
}
