//! Positional-placeholder substitution for translation values.

/// Placeholder pattern used when the caller does not supply one.
///
/// Every `0` character in the pattern is replaced by the one-based argument
/// index to form the token for that argument, so the default expands to
/// `%1$s`, `%2$s`, ... across the substitution passes.
pub const DEFAULT_PATTERN: &str = "%0$s";

/// Substitute `args` into a stored translation value.
///
/// The literal two-character escape `\n` is expanded to a real newline
/// first, whether or not any arguments follow. With the default pattern and
/// exactly one argument, every bare `%s` is additionally replaced by that
/// argument before the indexed passes run.
///
/// Passes run strictly in argument order against the progressively mutated
/// result. An argument whose text contains a later token is substituted
/// again by that later pass; callers relying on this format must keep
/// argument values free of token text.
pub(crate) fn apply_args(value: &str, args: &[String], pattern: &str) -> String {
    let mut result = value.replace("\\n", "\n");
    if args.is_empty() {
        return result;
    }

    if pattern == DEFAULT_PATTERN
        && let [single] = args
    {
        result = result.replace("%s", single);
    }

    for (i, arg) in args.iter().enumerate() {
        let token = pattern.replace('0', &(i + 1).to_string());
        result = result.replace(&token, arg);
    }
    result
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[googletest::test]
    fn test_indexed_substitution() {
        let result = apply_args(
            "Hello, %1$s! You have %2$s items.",
            &args(&["Ann", "5"]),
            DEFAULT_PATTERN,
        );

        expect_that!(result, eq("Hello, Ann! You have 5 items."));
    }

    #[googletest::test]
    fn test_legacy_percent_s_shorthand_single_arg() {
        let result = apply_args("Score: %s", &args(&["42"]), DEFAULT_PATTERN);

        expect_that!(result, eq("Score: 42"));
    }

    #[googletest::test]
    fn test_percent_s_not_replaced_with_two_args() {
        let result = apply_args("Score: %s (%1$s)", &args(&["42", "x"]), DEFAULT_PATTERN);

        expect_that!(result, eq("Score: %s (42)"));
    }

    #[googletest::test]
    fn test_newline_escape_expanded_without_args() {
        let result = apply_args("line1\\nline2", &[], DEFAULT_PATTERN);

        expect_that!(result, eq("line1\nline2"));
    }

    #[googletest::test]
    fn test_newline_escape_expanded_with_args() {
        let result = apply_args("%1$s\\n%2$s", &args(&["a", "b"]), DEFAULT_PATTERN);

        expect_that!(result, eq("a\nb"));
    }

    #[rstest]
    #[case("%0$s", "<%1$s|%2$s>", &["a", "b"], "<a|b>")]
    #[case("{0}", "{1} and {2}", &["x", "y"], "x and y")]
    // パターン内のすべての `0` が置換される
    #[case("%0$0s", "%1$1s %2$2s", &["a", "b"], "a b")]
    fn test_custom_patterns(
        #[case] pattern: &str,
        #[case] value: &str,
        #[case] arg_values: &[&str],
        #[case] expected: &str,
    ) {
        let result = apply_args(value, &args(arg_values), pattern);

        assert_eq!(result, expected);
    }

    /// Known hazard: passes mutate the result sequentially, so an argument
    /// containing a later token's text is substituted again by that pass.
    #[googletest::test]
    fn test_argument_containing_later_token_is_resubstituted() {
        let result = apply_args("%1$s and %2$s", &args(&["%2$s", "B"]), DEFAULT_PATTERN);

        expect_that!(result, eq("B and B"));
    }

    #[googletest::test]
    fn test_more_than_nine_args_use_two_digit_tokens() {
        let arg_values: Vec<String> = (1..=10).map(|i| format!("a{i}")).collect();

        let result = apply_args("%10$s %1$s", &arg_values, DEFAULT_PATTERN);

        expect_that!(result, eq("a10 a1"));
    }
}
