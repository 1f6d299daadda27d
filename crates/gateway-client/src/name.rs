//! Qualified entity names.
//!
//! Entities are addressed as `/`-delimited qualified names with several
//! shorthand forms: `/namespace/name`, `/namespace/package/name`, a bare
//! `name`, a `/name` under the default namespace, and the opaque
//! `package/name` shorthand.

use std::fmt;

/// Namespace used when a qualified name does not carry one.
pub const DEFAULT_NAMESPACE: &str = "_";

/// A resolved entity name: which namespace it lives in, and its name within
/// that namespace (which may itself contain `/` for packaged entities).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedName {
    /// The access-scope segment. Never empty; defaults to [`DEFAULT_NAMESPACE`].
    pub namespace: String,
    /// The entity name within the namespace.
    pub name: String,
}

impl QualifiedName {
    /// Split a raw qualified name into namespace and name.
    ///
    /// Total: any input resolves to some name, the empty string included.
    /// Note the two-segment asymmetry, which follows the platform's name
    /// grammar: `/name` is a name under the default namespace, while
    /// `package/name` stays opaque under the default namespace rather than
    /// being split further.
    pub fn parse(raw: &str) -> Self {
        let segments: Vec<&str> = raw.split('/').collect();

        if segments.len() > 2 {
            // Fully qualified: the leading slash makes segments[0] empty.
            Self {
                namespace: segments[1].to_string(),
                name: segments[2..].join("/"),
            }
        } else if segments.len() == 2 {
            let name = if raw.starts_with('/') {
                segments[1].to_string()
            } else {
                segments.join("/")
            };
            Self {
                namespace: DEFAULT_NAMESPACE.to_string(),
                name,
            }
        } else {
            Self {
                namespace: DEFAULT_NAMESPACE.to_string(),
                name: segments[0].to_string(),
            }
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.namespace, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fully_qualified_name_splits_namespace_and_packaged_name() {
        let parsed = QualifiedName::parse("/whisk.system/samples/date");
        assert_eq!(parsed.namespace, "whisk.system");
        assert_eq!(parsed.name, "samples/date");
    }

    #[test]
    fn fully_qualified_name_without_package() {
        let parsed = QualifiedName::parse("/whisk.system/date");
        assert_eq!(parsed.namespace, "whisk.system");
        assert_eq!(parsed.name, "date");
    }

    #[test]
    fn bare_name_uses_default_namespace() {
        let parsed = QualifiedName::parse("myaction");
        assert_eq!(parsed.namespace, DEFAULT_NAMESPACE);
        assert_eq!(parsed.name, "myaction");
    }

    #[test]
    fn slash_prefixed_single_name_uses_default_namespace() {
        let parsed = QualifiedName::parse("/myaction");
        assert_eq!(parsed.namespace, DEFAULT_NAMESPACE);
        assert_eq!(parsed.name, "myaction");
    }

    #[test]
    fn package_shorthand_stays_opaque_under_default_namespace() {
        let parsed = QualifiedName::parse("package/action");
        assert_eq!(parsed.namespace, DEFAULT_NAMESPACE);
        assert_eq!(parsed.name, "package/action");
    }

    #[test]
    fn empty_string_resolves_to_empty_name() {
        let parsed = QualifiedName::parse("");
        assert_eq!(parsed.namespace, DEFAULT_NAMESPACE);
        assert_eq!(parsed.name, "");
    }

    #[test]
    fn display_renders_fully_qualified_form() {
        let parsed = QualifiedName::parse("/whisk.system/samples/date");
        assert_eq!(parsed.to_string(), "/whisk.system/samples/date");
    }
}
