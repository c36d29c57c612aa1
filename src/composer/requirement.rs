//! Repointing a dependency's version constraint at the local source.

use crate::composer::manifest::{DEV_CONSTRAINT, Manifest, RequireSection, Slot};
use crate::output::Reporter;
use std::io::Write;

/// Sets `package` to the `@dev` constraint.
///
/// ## Priority
///
/// 1. `require`, if it already lists the package
/// 2. `require-dev`, if it already lists the package
/// 3. otherwise added to `require`, which is created when absent
///
/// Only the first matching section is touched. Returns the section that
/// now holds the constraint.
pub fn require_dev_version<W: Write>(
    manifest: &mut Manifest,
    package: &str,
    reporter: &mut Reporter<W>,
) -> RequireSection {
    reporter.success(
        1,
        format!(
            "Updating package '{}' to '{}' version...",
            package, DEV_CONSTRAINT
        ),
    );

    for section in [RequireSection::Require, RequireSection::RequireDev] {
        if manifest.contains_requirement(section, package) {
            log::debug!("{} found in {}", package, section.key());
            reporter.plain(
                2,
                format!("Package found in '{}' entry. Updating...", section.key()),
            );
            manifest.set_constraint(section, package, DEV_CONSTRAINT);
            return section;
        }
    }

    let section = RequireSection::Require;
    match manifest.set_constraint(section, package, DEV_CONSTRAINT) {
        Slot::Present => {}
        Slot::Created => reporter.plain(
            2,
            format!("Missing '{}' entry in composer.json. Creating...", section.key()),
        ),
        Slot::Replaced => reporter.plain(
            2,
            format!("'{}' entry is invalid in composer.json. Fixing...", section.key()),
        ),
    }
    reporter.plain(
        2,
        format!("Package not found. Adding in '{}' entry...", section.key()),
    );

    log::debug!("{} added to {}", package, section.key());
    section
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repoint(manifest: &mut Manifest, package: &str) -> RequireSection {
        let mut reporter = Reporter::new(Vec::new());
        require_dev_version(manifest, package, &mut reporter)
    }

    #[test]
    fn test_updates_require_in_place() {
        let mut manifest: Manifest =
            r#"{"require": {"v/n": "^1.0"}, "require-dev": {"x/y": "^2.0"}}"#.parse().unwrap();

        assert_eq!(repoint(&mut manifest, "v/n"), RequireSection::Require);
        assert_eq!(manifest.constraint(RequireSection::Require, "v/n"), Some("@dev"));
        assert!(!manifest.contains_requirement(RequireSection::RequireDev, "v/n"));
        assert_eq!(
            manifest.constraint(RequireSection::RequireDev, "x/y"),
            Some("^2.0")
        );
    }

    #[test]
    fn test_updates_require_dev_in_place() {
        let mut manifest: Manifest =
            r#"{"require": {"php": ">=8.1"}, "require-dev": {"v/n": "^1.0"}}"#.parse().unwrap();

        assert_eq!(repoint(&mut manifest, "v/n"), RequireSection::RequireDev);
        assert_eq!(
            manifest.constraint(RequireSection::RequireDev, "v/n"),
            Some("@dev")
        );
        assert!(!manifest.contains_requirement(RequireSection::Require, "v/n"));
    }

    #[test]
    fn test_require_wins_over_require_dev() {
        let mut manifest: Manifest =
            r#"{"require": {"v/n": "^1.0"}, "require-dev": {"v/n": "^1.1"}}"#.parse().unwrap();

        assert_eq!(repoint(&mut manifest, "v/n"), RequireSection::Require);
        assert_eq!(
            manifest.constraint(RequireSection::RequireDev, "v/n"),
            Some("^1.1")
        );
    }

    #[test]
    fn test_adds_to_require_when_unlisted() {
        let mut manifest: Manifest = r#"{"require-dev": {"x/y": "*"}}"#.parse().unwrap();

        assert_eq!(repoint(&mut manifest, "v/n"), RequireSection::Require);
        assert_eq!(manifest.constraint(RequireSection::Require, "v/n"), Some("@dev"));
        assert!(!manifest.contains_requirement(RequireSection::RequireDev, "v/n"));
    }

    #[test]
    fn test_repeated_run_keeps_single_entry() {
        let mut manifest = Manifest::default();

        repoint(&mut manifest, "v/n");
        let once = manifest.clone();
        repoint(&mut manifest, "v/n");

        assert_eq!(manifest, once);
        assert_eq!(manifest.requirements(RequireSection::Require).unwrap().len(), 1);
    }

    #[test]
    fn test_reports_missing_require() {
        colored::control::set_override(false);
        let mut manifest = Manifest::default();

        let mut reporter = Reporter::new(Vec::new());
        require_dev_version(&mut manifest, "v/n", &mut reporter);
        let out = String::from_utf8(reporter.into_inner()).unwrap();

        assert!(out.contains("Missing 'require' entry in composer.json. Creating..."));
        assert!(out.contains("Package not found. Adding in 'require' entry..."));
    }
}
