//! Detection of obsolete options in the options of one file.

use tracing::trace;

use crate::cancellation::CancellationToken;
use crate::category_set::CategorySet;
use crate::diagnostic::{Diagnostic, DiagnosticSink};
use crate::gate::RuleGate;
use crate::options::ConfigOptions;
use crate::registry::LEGACY_OPTIONS;
use crate::rule_set::Rule;
use crate::unit::SourceUnit;

/// Report the obsolete options set for `unit`.
///
/// Each category is reported at most once: the first legacy option of the
/// category (in [`LEGACY_OPTIONS`] order) that is set wins. A legacy option
/// is only reported when the rule owning its replacement is effective for
/// the unit, and nothing is reported when `obsolete_option` itself is not.
///
/// This never fails. Missing and malformed values are simply not reported,
/// and a cancelled token stops the validation between two options.
pub fn validate<C, G, S>(
    unit: &SourceUnit,
    options: &C,
    gate: &G,
    cancellation: &CancellationToken,
    sink: &mut S,
) where
    C: ConfigOptions + ?Sized,
    G: RuleGate + ?Sized,
    S: DiagnosticSink + ?Sized,
{
    let Some(severity) = gate.effective_severity(Rule::ObsoleteOption, unit) else {
        trace!(path = %unit.path.display(), "obsolete_option is not effective");
        return;
    };

    let mut reported = CategorySet::empty();

    for legacy in LEGACY_OPTIONS {
        if cancellation.is_cancelled() {
            trace!(path = %unit.path.display(), "validation cancelled");
            return;
        }

        if reported.contains(legacy.category) {
            continue;
        }

        if !gate.is_effective(legacy.rule(), unit) {
            trace!(
                path = %unit.path.display(),
                option = legacy.key,
                rule = %legacy.rule(),
                "rule is not effective"
            );
            continue;
        }

        let Some(value) = options.get(legacy.key) else {
            continue;
        };

        let Some(recommended) = legacy.matches(value) else {
            trace!(
                path = %unit.path.display(),
                option = legacy.key,
                value,
                "value doesn't trigger"
            );
            continue;
        };

        sink.report(Diagnostic::obsolete_option(
            legacy,
            recommended,
            unit.path.clone(),
            severity,
        ));
        reported.insert(legacy.category);
    }
}
