//! Test fixtures and constants.

/// Key file name used inside each test directory.
pub const KEY_FILE: &str = "test.key";

/// Minimal .env content.
pub const SIMPLE_ENV: &str = "FOO=bar\nBAZ=qux";

/// Sample .env with edge cases.
pub const SAMPLE_ENV_COMPLEX: &str = r#"
# This is a comment
SIMPLE=value
QUOTED="quoted value"
SINGLE_QUOTED='single quoted'
SPACES_IN_VALUE=hello world
export EXPORTED=yes
EMPTY=

# Another comment
WITH_EQUALS=a=b=c
SPECIAL_CHARS=p@ssw0rd!#$%
"#;

/// Parsed form of [`SAMPLE_ENV_COMPLEX`], in order.
pub const SAMPLE_ENV_COMPLEX_PAIRS: &[(&str, &str)] = &[
    ("SIMPLE", "value"),
    ("QUOTED", "quoted value"),
    ("SINGLE_QUOTED", "single quoted"),
    ("SPACES_IN_VALUE", "hello world"),
    ("EXPORTED", "yes"),
    ("EMPTY", ""),
    ("WITH_EQUALS", "a=b=c"),
    ("SPECIAL_CHARS", "p@ssw0rd!#$%"),
];

/// A unique environment variable name for tests that touch the environment.
pub fn unique_var(prefix: &str) -> String {
    format!(
        "EDOTENV_IT_{}_{}",
        prefix,
        uuid::Uuid::new_v4().simple().to_string().to_uppercase()
    )
}
