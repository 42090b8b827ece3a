/// Length of the run at `$offset` made only of bytes matching `$pattern`.
macro_rules! strspn {
    ($expression:expr, $pattern:pat $(if $guard:expr)?, $offset:expr $(,)?) => {{
        $expression[$offset..]
            .iter()
            .position(|&b| !matches!(b, $pattern $(if $guard)?))
            .unwrap_or($expression.len() - $offset)
    }};
}

/// Length of the run at `$offset` made only of bytes NOT matching `$pattern`.
///
/// Runs to the end of the input when no byte matches.
macro_rules! strcspn {
    ($expression:expr, $pattern:pat $(if $guard:expr)?, $offset:expr $(,)?) => {{
        $expression[$offset..]
            .iter()
            .position(|&b| matches!(b, $pattern $(if $guard)?))
            .unwrap_or($expression.len() - $offset)
    }};
}
