use std::fmt;

use rustc_hash::FxHashSet;

use crate::severity::Severity;

/// Rules known to optlint.
///
/// `ObsoleteOption` is the rule whose diagnostics optlint produces. All the
/// other rules are the behavior rules that own the current options: they
/// don't report anything by themselves here, but whether they are switched
/// on decides whether their obsolete options are worth reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rule {
    ObsoleteOption,
    AddOrRemoveAccessibilityModifiers,
    AddOrRemoveParenthesesFromConditionInConditionalOperator,
    ConfigureAwait,
    NormalizeNullCheck,
    RemoveUnnecessaryBlankLine,
    RemoveUnusedMemberDeclaration,
    UseAnonymousFunctionOrMethodGroup,
    UseBlockBodyOrExpressionBody,
    UseEmptyStringLiteralOrStringEmpty,
    UseExplicitlyOrImplicitlyTypedArray,
    UseHasFlagMethodOrBitwiseOperator,
    UseImplicitOrExplicitObjectCreation,
}

impl Rule {
    pub const fn all() -> &'static [Rule] {
        &[
            Rule::ObsoleteOption,
            Rule::AddOrRemoveAccessibilityModifiers,
            Rule::AddOrRemoveParenthesesFromConditionInConditionalOperator,
            Rule::ConfigureAwait,
            Rule::NormalizeNullCheck,
            Rule::RemoveUnnecessaryBlankLine,
            Rule::RemoveUnusedMemberDeclaration,
            Rule::UseAnonymousFunctionOrMethodGroup,
            Rule::UseBlockBodyOrExpressionBody,
            Rule::UseEmptyStringLiteralOrStringEmpty,
            Rule::UseExplicitlyOrImplicitlyTypedArray,
            Rule::UseHasFlagMethodOrBitwiseOperator,
            Rule::UseImplicitOrExplicitObjectCreation,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            Rule::ObsoleteOption => "obsolete_option",
            Rule::AddOrRemoveAccessibilityModifiers => "add_or_remove_accessibility_modifiers",
            Rule::AddOrRemoveParenthesesFromConditionInConditionalOperator => {
                "add_or_remove_parentheses_from_condition_in_conditional_operator"
            }
            Rule::ConfigureAwait => "configure_await",
            Rule::NormalizeNullCheck => "normalize_null_check",
            Rule::RemoveUnnecessaryBlankLine => "remove_unnecessary_blank_line",
            Rule::RemoveUnusedMemberDeclaration => "remove_unused_member_declaration",
            Rule::UseAnonymousFunctionOrMethodGroup => "use_anonymous_function_or_method_group",
            Rule::UseBlockBodyOrExpressionBody => "use_block_body_or_expression_body",
            Rule::UseEmptyStringLiteralOrStringEmpty => "use_empty_string_literal_or_string_empty",
            Rule::UseExplicitlyOrImplicitlyTypedArray => "use_explicitly_or_implicitly_typed_array",
            Rule::UseHasFlagMethodOrBitwiseOperator => "use_has_flag_method_or_bitwise_operator",
            Rule::UseImplicitOrExplicitObjectCreation => "use_implicit_or_explicit_object_creation",
        }
    }

    pub fn from_name(name: &str) -> Option<Rule> {
        Rule::all().iter().copied().find(|rule| rule.name() == name)
    }

    /// Severity used when neither `[lint.severity]` nor an override mentions
    /// the rule.
    pub fn default_severity(self) -> Severity {
        match self {
            Rule::ObsoleteOption => Severity::Warning,
            _ => Severity::Suggestion,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The set of rules selected for a run (after `select`, `extend-select` and
/// `ignore` have been applied).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: FxHashSet<Rule>,
}

impl RuleSet {
    pub fn empty() -> Self {
        Self { rules: FxHashSet::default() }
    }

    pub fn all() -> Self {
        Rule::all().iter().copied().collect()
    }

    pub fn insert(&mut self, rule: Rule) {
        self.rules.insert(rule);
    }

    pub fn remove(&mut self, rule: Rule) {
        self.rules.remove(&rule);
    }

    pub fn contains(&self, rule: &Rule) -> bool {
        self.rules.contains(rule)
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Iterate over the rules in a stable order.
    pub fn iter(&self) -> impl Iterator<Item = Rule> + '_ {
        Rule::all().iter().copied().filter(|rule| self.rules.contains(rule))
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        RuleSet { rules: iter.into_iter().collect() }
    }
}
