/// Sets an environment variable if it's not already set.
///
/// # Arguments
///
/// * `key` - The environment variable name
/// * `value` - The value to set
pub fn set_env(key: &str, value: &str) {
    if std::env::var(key).is_err() {
        std::env::set_var(key, value);
    }
}

/// Gets the value of an environment variable.
///
/// # Arguments
///
/// * `key` - The environment variable name to retrieve
///
/// # Returns
///
/// * `Option<String>` - The environment variable value if it exists
pub fn get_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Gets the value of an environment variable, falling back to the provided
/// default when the variable is unset or empty.
///
/// ```
/// use arbridge_common::utils::env::load_env_with_fallback;
///
/// let value = load_env_with_fallback("SOME_UNSET_VARIABLE", "http://localhost:8545");
/// assert_eq!(value, "http://localhost:8545");
/// ```
pub fn load_env_with_fallback(key: &str, fallback: &str) -> String {
    match get_env(key) {
        Some(value) if !value.is_empty() => value,
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_env_does_not_overwrite() {
        set_env("ARBRIDGE_TEST_SET_ENV", "first");
        set_env("ARBRIDGE_TEST_SET_ENV", "second");
        assert_eq!(get_env("ARBRIDGE_TEST_SET_ENV"), Some("first".to_string()));
    }

    #[test]
    fn test_load_env_with_fallback_unset() {
        assert_eq!(load_env_with_fallback("ARBRIDGE_TEST_UNSET", "fallback"), "fallback");
    }

    #[test]
    fn test_load_env_with_fallback_set() {
        set_env("ARBRIDGE_TEST_FALLBACK_SET", "value");
        assert_eq!(load_env_with_fallback("ARBRIDGE_TEST_FALLBACK_SET", "fallback"), "value");
    }

    #[test]
    fn test_load_env_with_fallback_empty() {
        std::env::set_var("ARBRIDGE_TEST_FALLBACK_EMPTY", "");
        assert_eq!(load_env_with_fallback("ARBRIDGE_TEST_FALLBACK_EMPTY", "fallback"), "fallback");
    }
}
