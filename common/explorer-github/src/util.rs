//! Utility functions for GitHub operations

/// Split an `owner/name` string into its owner and name segments
///
/// Only the first two `/`-separated segments are used, so `a/b/c` yields
/// `("a", Some("b"))`. Input without a `/` yields no name; it is not
/// rejected here because the API reports it as a query error.
///
/// # Arguments
/// * `input` - The `owner/name` string typed by the user or taken from a route
///
/// # Returns
/// A tuple containing (owner, optional repository name)
pub fn split_name_with_owner(input: &str) -> (String, Option<String>) {
    let mut parts = input.split('/');
    let owner = parts.next().unwrap_or_default().to_string();
    let name = parts.next().map(str::to_string);
    (owner, name)
}
