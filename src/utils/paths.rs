//! Path expansion and resolution

use std::path::{Path, PathBuf};

/// Expand a leading `~` to `home`. Paths without one are returned unchanged, as is
/// everything when no home directory is known.
pub fn expand_tilde(path: &str, home: Option<&Path>) -> PathBuf {
    if let Some(home) = home {
        if path == "~" {
            return home.to_path_buf();
        }
        if let Some(rest) = path.strip_prefix("~/").or_else(|| path.strip_prefix("~\\")) {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

/// Resolve a path written inside a config file. Relative paths are anchored at the
/// directory holding the referencing file.
pub fn resolve_reference(reference: &str, referrer: &Path, home: Option<&Path>) -> PathBuf {
    let expanded = expand_tilde(reference, home);
    if expanded.is_absolute() {
        return expanded;
    }
    match referrer.parent() {
        Some(dir) => dir.join(expanded),
        None => expanded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde() {
        let home = Path::new("/home/me");
        assert_eq!(expand_tilde("~", Some(home)), PathBuf::from("/home/me"));
        assert_eq!(expand_tilde("~/a.yml", Some(home)), PathBuf::from("/home/me/a.yml"));
        assert_eq!(expand_tilde("~other/a.yml", Some(home)), PathBuf::from("~other/a.yml"));
        assert_eq!(expand_tilde("~/a.yml", None), PathBuf::from("~/a.yml"));
    }

    #[test]
    fn test_resolve_reference_relative_to_referrer() {
        let referrer = Path::new("/etc/flitz/main.yml");
        assert_eq!(
            resolve_reference("colors.yml", referrer, None),
            PathBuf::from("/etc/flitz/colors.yml")
        );
        assert_eq!(
            resolve_reference("/opt/shared.yml", referrer, None),
            PathBuf::from("/opt/shared.yml")
        );
        assert_eq!(
            resolve_reference("~/x.yml", referrer, Some(Path::new("/home/me"))),
            PathBuf::from("/home/me/x.yml")
        );
    }
}
