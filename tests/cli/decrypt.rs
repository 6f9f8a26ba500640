//! Tests for `edotenv decrypt`.

use crate::support::*;

#[test]
fn test_encrypt_then_decrypt_roundtrip() {
    let t = Test::encrypted(SIMPLE_ENV);

    let output = t.decrypt(".env.decrypted", ".env.encrypted");
    assert_success(&output);
    assert_stdout_contains(&output, "decrypted");

    assert_env_file(&t, ".env.decrypted", &[("FOO", "bar"), ("BAZ", "qux")]);
}

#[test]
fn test_decrypt_complex_env() {
    let t = Test::encrypted(SAMPLE_ENV_COMPLEX);

    assert_success(&t.decrypt("out.env", ".env.encrypted"));

    assert_env_file(&t, "out.env", SAMPLE_ENV_COMPLEX_PAIRS);
}

#[test]
fn test_decrypt_writes_plain_name_value_lines() {
    let t = Test::encrypted("# comment\nA=\"x y\"\n\nB=2\n");

    assert_success(&t.decrypt("out.env", ".env.encrypted"));

    assert_eq!(t.read_string("out.env"), "A=x y\nB=2");
}

#[test]
fn test_decrypt_without_key_fails_and_does_not_create_key() {
    let t = Test::encrypted(SIMPLE_ENV);
    std::fs::remove_file(t.key_path()).unwrap();

    let output = t.decrypt("out.env", ".env.encrypted");
    assert_failure(&output);
    assert_stderr_contains(&output, "key file not found");

    assert!(!t.key_path().exists());
    assert!(!t.exists("out.env"));
}

#[test]
fn test_decrypt_with_wrong_key_fails() {
    let t = Test::encrypted(SIMPLE_ENV);
    std::fs::remove_file(t.key_path()).unwrap();
    assert_success(&t.encrypt(".env", "other.encrypted"));

    let output = t.decrypt("out.env", ".env.encrypted");
    assert_failure(&output);
    assert_stderr_contains(&output, "authentication failed");
}

#[test]
fn test_decrypt_tampered_file_fails() {
    let t = Test::encrypted(SIMPLE_ENV);
    let mut blob = t.read(".env.encrypted");
    let last = blob.len() - 1;
    blob[last] ^= 0x80;
    t.write(".env.encrypted", &blob);

    let output = t.decrypt("out.env", ".env.encrypted");
    assert_failure(&output);
    assert_stderr_contains(&output, "authentication failed");
    assert!(!t.exists("out.env"));
}

#[test]
fn test_decrypt_truncated_file_is_malformed() {
    let t = Test::encrypted(SIMPLE_ENV);
    t.write(".env.encrypted", b"short");

    let output = t.decrypt("out.env", ".env.encrypted");
    assert_failure(&output);
    assert_stderr_contains(&output, "malformed");
}

#[test]
fn test_decrypt_garbage_key_fails() {
    let t = Test::encrypted(SIMPLE_ENV);
    t.write(KEY_FILE, "not-a-key");

    let output = t.decrypt("out.env", ".env.encrypted");
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid key");
}

#[test]
fn test_decrypt_missing_encrypted_file_fails() {
    let t = Test::encrypted(SIMPLE_ENV);

    let output = t.decrypt("out.env", "nope.encrypted");
    assert_failure(&output);
    assert_stderr_contains(&output, "file not found");
}
