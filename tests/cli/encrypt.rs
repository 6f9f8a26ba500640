//! Tests for `edotenv encrypt`.

use crate::support::*;

#[test]
fn test_encrypt_creates_key_and_encrypted_file() {
    let t = Test::with_env(SIMPLE_ENV);

    let output = t.encrypt(".env", ".env.encrypted");
    assert_success(&output);
    assert_stdout_contains(&output, "encrypted");
    assert_stdout_contains(&output, "2 variables");

    assert!(t.key_path().exists());
    assert!(t.exists(".env.encrypted"));

    let blob = t.read(".env.encrypted");
    assert!(!String::from_utf8_lossy(&blob).contains("FOO=bar"));
}

#[test]
fn test_encrypt_key_file_is_44_chars() {
    let t = Test::encrypted(SIMPLE_ENV);

    let key = std::fs::read_to_string(t.key_path()).unwrap();
    assert_eq!(key.len(), 44);
}

#[test]
fn test_encrypt_reuses_existing_key() {
    let t = Test::encrypted(SIMPLE_ENV);
    let key_before = std::fs::read(t.key_path()).unwrap();

    let output = t.encrypt(".env", ".env.encrypted");
    assert_success(&output);

    assert_eq!(std::fs::read(t.key_path()).unwrap(), key_before);
}

#[test]
fn test_encrypt_twice_gives_different_ciphertext() {
    let t = Test::with_env(SIMPLE_ENV);

    assert_success(&t.encrypt(".env", "first"));
    assert_success(&t.encrypt(".env", "second"));

    assert_ne!(t.read("first"), t.read("second"));
}

#[test]
fn test_encrypt_defaults_to_dotenv_in_place() {
    let t = Test::with_env(SIMPLE_ENV);

    let output = t.cmd().arg("encrypt").output().unwrap();
    assert_success(&output);

    assert!(!t.read_string(".env").contains("FOO"));

    let output = t.decrypt("plain", ".env");
    assert_success(&output);
    assert_env_file(&t, "plain", &[("FOO", "bar"), ("BAZ", "qux")]);
}

#[test]
fn test_encrypt_with_key_path_flag() {
    let t = Test::with_env(SIMPLE_ENV);
    let custom = t.path("custom.key");

    let output = t
        .cmd()
        .args(["encrypt", ".env", ".env.encrypted", "--key_path"])
        .arg(&custom)
        .output()
        .unwrap();
    assert_success(&output);

    assert!(custom.exists());
    assert!(!t.key_path().exists());
}

#[test]
fn test_encrypt_missing_source_fails() {
    let t = Test::new();

    let output = t.encrypt("missing.env", ".env.encrypted");
    assert_failure(&output);
    assert_stderr_contains(&output, "file not found");
    assert!(!t.exists(".env.encrypted"));
}

#[test]
fn test_encrypt_uses_config_file_defaults() {
    let t = Test::with_env(SIMPLE_ENV);
    t.write(
        ".edotenv.toml",
        "dotenv_path = \".env\"\nedotenv_path = \".env.locked\"\n",
    );

    let output = t.cmd().arg("encrypt").output().unwrap();
    assert_success(&output);

    assert!(t.exists(".env.locked"));
    assert_eq!(t.read_string(".env"), SIMPLE_ENV);
}
