//! Small string helpers shared by the descriptors.

/// Upper-case the first character, e.g. `userProcessor` becomes `UserProcessor`
#[must_use]
pub fn ucfirst(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Derive the base reference name of an injection method.
///
/// The configured prefix is removed first, so `injectUserProcessor` becomes `UserProcessor`. A
/// method that consists of the prefix only keeps its full name.
#[must_use]
pub fn method_base_name(method_name: &str, prefix: &str) -> String {
    let stripped = method_name
        .strip_prefix(prefix)
        .filter(|rest| !rest.is_empty())
        .unwrap_or(method_name);
    ucfirst(stripped)
}

/// Overwrite `target` with `source` if `source` is set
pub fn overlay(target: &mut Option<String>, source: Option<&String>) {
    if let Some(value) = source {
        *target = Some(value.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ucfirst() {
        assert_eq!(ucfirst("dummyEnterpriseBean"), "DummyEnterpriseBean");
        assert_eq!(ucfirst("Already"), "Already");
        assert_eq!(ucfirst("ärger"), "Ärger");
        assert_eq!(ucfirst(""), "");
    }

    #[test]
    fn test_method_base_name() {
        assert_eq!(
            method_base_name("injectDummyEnterpriseBean", "inject"),
            "DummyEnterpriseBean"
        );
        assert_eq!(method_base_name("setFoo", "inject"), "SetFoo");
        assert_eq!(method_base_name("inject", "inject"), "Inject");
        assert_eq!(method_base_name("setFoo", "set"), "Foo");
    }

    #[test]
    fn test_overlay() {
        let mut target = Some("old".to_string());
        overlay(&mut target, None);
        assert_eq!(target.as_deref(), Some("old"));

        overlay(&mut target, Some(&"new".to_string()));
        assert_eq!(target.as_deref(), Some("new"));

        let mut empty = None;
        overlay(&mut empty, Some(&"set".to_string()));
        assert_eq!(empty.as_deref(), Some("set"));
    }
}
