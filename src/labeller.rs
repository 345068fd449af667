use crate::config::LabellerConfig;
use crate::domain::revision::{self, ChangeNumber, RevisionSource};
use crate::domain::{Version, VersionBump};
use crate::fallback::FallbackWarning;
use crate::format::{Component, LabelFormat, NumberFormat};

/// Everything computed for one label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelOutcome {
    /// Previous version as parsed, or the configured baseline
    pub previous: Version,
    /// Strongest bump found in the comments
    pub bump: VersionBump,
    /// Resulting version
    pub version: Version,
    /// Rendered label
    pub label: String,
    /// Fallbacks applied while computing the label
    pub warnings: Vec<FallbackWarning>,
}

/// Computes the next build label from the previous label, the change
/// comments since then and the source control change number.
///
/// Never fails: malformed input degrades to fallback values, which are
/// reported through [`LabelOutcome::warnings`] and the log.
#[derive(Debug, Clone)]
pub struct VersionLabeller {
    config: LabellerConfig,
    format: LabelFormat,
    format_warnings: Vec<FallbackWarning>,
}

impl VersionLabeller {
    /// Create a labeller. Invalid format strings fall back to plain decimal.
    pub fn new(config: LabellerConfig) -> Self {
        let mut format = LabelFormat::default();
        let mut format_warnings = Vec::new();

        let configured = [
            (Component::Major, &config.major_label_format),
            (Component::Minor, &config.minor_label_format),
            (Component::Patch, &config.patch_label_format),
            (Component::Revision, &config.revision_label_format),
        ];
        for (component, spec) in configured {
            let Some(spec) = spec else { continue };
            match NumberFormat::parse(spec) {
                Ok(parsed) => format.set(component, parsed),
                Err(e) => {
                    let warning = FallbackWarning::InvalidFormat {
                        component,
                        format: spec.clone(),
                        reason: e.to_string(),
                    };
                    tracing::warn!("{}", warning);
                    format_warnings.push(warning);
                }
            }
        }

        VersionLabeller {
            config,
            format,
            format_warnings,
        }
    }

    /// Compute the next label
    pub fn generate<I, S>(
        &self,
        previous_label: Option<&str>,
        comments: I,
        last_change_number: Option<&str>,
    ) -> String
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        self.generate_detailed(previous_label, comments, last_change_number)
            .label
    }

    /// Compute the next label along with the intermediate results
    pub fn generate_detailed<I, S>(
        &self,
        previous_label: Option<&str>,
        comments: I,
        last_change_number: Option<&str>,
    ) -> LabelOutcome
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let mut warnings = self.format_warnings.clone();

        tracing::debug!(label = ?previous_label, "old build label");
        let previous = self.previous_version(previous_label, &mut warnings);
        tracing::debug!(%previous, "old version");

        let bump = VersionBump::from_comments(comments);
        tracing::debug!(%bump, "change level");

        let change = ChangeNumber::parse(last_change_number);
        match &change {
            ChangeNumber::Parsed(value) => {
                tracing::debug!(change_number = value, "last change number retrieved");
            }
            ChangeNumber::Absent => {
                tracing::debug!("last change number is N/A, revision falls back");
            }
            ChangeNumber::Unparsable(value) => {
                tracing::debug!(change_number = %value, "last change number is not numeric");
                warnings.push(FallbackWarning::UnparsableChangeNumber {
                    value: value.clone(),
                });
            }
        }

        let revision = revision::resolve(&change, self.config.revision_modulus, previous.revision);
        if revision.source == RevisionSource::PreviousVersion {
            warnings.push(FallbackWarning::RevisionFromPrevious {
                revision: revision.value,
            });
        }

        let version = previous.bump(bump).with_revision(revision.value);
        tracing::debug!(
            major = version.major,
            minor = version.minor,
            patch = version.patch,
            revision = version.revision,
            "computed version"
        );

        let label = self.format.render(&version);
        tracing::debug!(%label, "new version");

        LabelOutcome {
            previous,
            bump,
            version,
            label,
            warnings,
        }
    }

    fn previous_version(
        &self,
        previous_label: Option<&str>,
        warnings: &mut Vec<FallbackWarning>,
    ) -> Version {
        let baseline = self.config.baseline();

        let Some(label) = previous_label else {
            warnings.push(FallbackWarning::NoPreviousLabel {
                baseline: baseline.to_string(),
            });
            return baseline;
        };

        match Version::parse(label) {
            Ok(version) => version,
            Err(e) => {
                let warning = FallbackWarning::UnparsablePreviousLabel {
                    label: label.to_string(),
                    reason: e.to_string(),
                    baseline: baseline.to_string(),
                };
                tracing::debug!("{}", warning);
                warnings.push(warning);
                baseline
            }
        }
    }
}

impl Default for VersionLabeller {
    fn default() -> Self {
        VersionLabeller::new(LabellerConfig::default())
    }
}

/// One-shot label generation with the given configuration
pub fn generate<I, S>(
    previous_label: Option<&str>,
    comments: I,
    last_change_number: Option<&str>,
    config: &LabellerConfig,
) -> String
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    VersionLabeller::new(config.clone()).generate(previous_label, comments, last_change_number)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(previous: Option<&str>, comments: &[&str], change: Option<&str>) -> String {
        VersionLabeller::default().generate(previous, comments.iter().map(Some), change)
    }

    #[test]
    fn test_no_previous_build() {
        assert_eq!(
            label(None, &["Major: a major change"], Some("1240")),
            "1.0.0.1240"
        );
    }

    #[test]
    fn test_increment_major() {
        assert_eq!(
            label(Some("2.3.5.1239"), &["Major: a major change"], Some("1240")),
            "3.0.0.1240"
        );
    }

    #[test]
    fn test_increment_minor() {
        assert_eq!(
            label(Some("2.3.5.1239"), &["minor: a minor change"], Some("1240")),
            "2.4.0.1240"
        );
    }

    #[test]
    fn test_increment_patch() {
        assert_eq!(
            label(Some("2.3.5.1239"), &["patch: a bug fix"], Some("1240")),
            "2.3.6.1240"
        );
    }

    #[test]
    fn test_revision_overflow() {
        assert_eq!(
            label(Some("2.3.5.1239"), &["patch: a bug fix"], Some("74444")),
            "2.3.6.4444"
        );
    }

    #[test]
    fn test_revision_falls_back_to_previous() {
        assert_eq!(label(Some("2.3.5.1239"), &[], None), "2.3.5.1239");
        assert_eq!(label(Some("2.3.5.1239"), &[], Some("r42")), "2.3.5.1239");
    }

    #[test]
    fn test_malformed_previous_label() {
        assert_eq!(
            label(Some("not-a-version"), &["Major: a major change"], Some("1240")),
            "1.0.0.1240"
        );
        assert_eq!(label(Some("not-a-version"), &[], None), "0.0.0.0");
    }

    #[test]
    fn test_outcome_records_warnings() {
        let outcome = VersionLabeller::default().generate_detailed(
            Some("not-a-version"),
            vec![Some("patch: x")],
            Some("abc"),
        );
        assert_eq!(outcome.previous, Version::default());
        assert_eq!(outcome.bump, VersionBump::Patch);
        assert_eq!(outcome.label, "0.0.1.0");
        assert!(matches!(
            outcome.warnings[0],
            FallbackWarning::UnparsablePreviousLabel { .. }
        ));
        assert!(outcome
            .warnings
            .contains(&FallbackWarning::UnparsableChangeNumber {
                value: "abc".to_string()
            }));
        assert!(outcome
            .warnings
            .contains(&FallbackWarning::RevisionFromPrevious { revision: 0 }));
    }

    #[test]
    fn test_outcome_clean_run_has_no_warnings() {
        let outcome = VersionLabeller::default().generate_detailed(
            Some("2.3.5.1239"),
            vec![Some("minor: x")],
            Some("1240"),
        );
        assert!(outcome.warnings.is_empty());
        assert_eq!(outcome.version, Version::new(2, 4, 0, 1240));
    }

    #[test]
    fn test_seed_baseline_used_without_previous_label() {
        let config = LabellerConfig {
            major: 4,
            minor: 1,
            revision: 9,
            ..LabellerConfig::default()
        };
        let labeller = VersionLabeller::new(config);
        assert_eq!(
            labeller.generate(None, Vec::<Option<&str>>::new(), None),
            "4.1.0.9"
        );
        // seed is ignored once a previous label parses
        assert_eq!(
            labeller.generate(Some("1.0.0.1"), Vec::<Option<&str>>::new(), None),
            "1.0.0.1"
        );
    }

    #[test]
    fn test_invalid_format_falls_back_to_plain() {
        let config = LabellerConfig {
            revision_label_format: Some("0.00".to_string()),
            patch_label_format: Some("00".to_string()),
            ..LabellerConfig::default()
        };
        let outcome = VersionLabeller::new(config).generate_detailed(
            Some("2.3.5.1239"),
            Vec::<Option<String>>::new(),
            Some("44"),
        );
        assert_eq!(outcome.label, "2.3.05.44");
        assert!(matches!(
            outcome.warnings[0],
            FallbackWarning::InvalidFormat {
                component: Component::Revision,
                ..
            }
        ));
    }

    #[test]
    fn test_long_precision_falls_back_to_plain() {
        let config = LabellerConfig {
            revision_label_format: Some("D100".to_string()),
            ..LabellerConfig::default()
        };
        let outcome = VersionLabeller::new(config).generate_detailed(
            Some("2.3.5.1239"),
            vec![Some("patch: fix")],
            Some("1240"),
        );
        assert_eq!(outcome.label, "2.3.6.1240");
        assert_eq!(outcome.warnings.len(), 1);
        assert!(matches!(
            &outcome.warnings[0],
            FallbackWarning::InvalidFormat { component: Component::Revision, format, .. }
                if format == "D100"
        ));
    }

    #[test]
    fn test_free_function_matches_labeller() {
        let config = LabellerConfig {
            revision_modulus: 1000,
            ..LabellerConfig::default()
        };
        assert_eq!(
            generate(
                Some("2.3.5.1239"),
                vec![Some("patch: fix")],
                Some("74444"),
                &config
            ),
            "2.3.6.444"
        );
    }
}
