/// Strips one leading separator so absolute addresses (".www.example.com")
/// and plain owners ("www.example.com") compare equal.
///
/// Node addresses and record owners are otherwise compared exactly: no
/// wildcard matching and no case normalization.
pub fn canonical_name(name: &str) -> &str {
    name.strip_prefix('.').unwrap_or(name)
}
