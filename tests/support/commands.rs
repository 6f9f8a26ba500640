//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create an edotenv command with correct environment variables.
    ///
    /// Returns a Command configured with:
    /// - `EDOTENV_KEY_PATH` set to the test key file
    /// - `NO_COLOR` set so output is plain text
    /// - Current directory set to the test directory
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("edotenv").expect("failed to find edotenv binary");
        cmd.env("EDOTENV_KEY_PATH", self.key_path());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("EDOTENV_LOG");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `edotenv encrypt` command.
    pub fn encrypt(&self, dotenv: &str, edotenv: &str) -> Output {
        self.cmd()
            .args(["encrypt", dotenv, edotenv])
            .output()
            .expect("failed to run edotenv encrypt")
    }

    /// Shortcut for `edotenv decrypt` command.
    pub fn decrypt(&self, dotenv: &str, edotenv: &str) -> Output {
        self.cmd()
            .args(["decrypt", dotenv, edotenv])
            .output()
            .expect("failed to run edotenv decrypt")
    }

    /// Shortcut for `edotenv clear --edotenv_path` command.
    pub fn clear(&self, edotenv: &str) -> Output {
        self.cmd()
            .args(["clear", "--edotenv_path", edotenv])
            .output()
            .expect("failed to run edotenv clear")
    }

    /// Shortcut for `edotenv save` with the given variables set on the child.
    pub fn save(&self, vars: &[(&str, &str)], names: &[&str], edotenv: &str) -> Output {
        let mut cmd = self.cmd();
        for (k, v) in vars {
            cmd.env(k, v);
        }
        cmd.arg("save")
            .args(names)
            .args(["--edotenv-path", edotenv])
            .output()
            .expect("failed to run edotenv save")
    }

    /// Shortcut for `edotenv run --edotenv-path <file> -- <command>`.
    pub fn run(&self, edotenv: &str, command: &[&str]) -> Output {
        self.cmd()
            .args(["run", "--edotenv-path", edotenv, "--"])
            .args(command)
            .output()
            .expect("failed to run edotenv run")
    }
}
