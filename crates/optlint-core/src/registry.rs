//! The table of obsolete options and their replacements.
//!
//! Every legacy option belongs to exactly one [`Category`]. A category is the
//! unit of deduplication: however many legacy options of a category are set
//! in a file, the file gets at most one diagnostic for it. The category also
//! decides which rule owns the replacement option, through an exhaustive
//! `match`, so a new category can't be added without naming its rule.

use crate::options::parse_bool;
use crate::rule_set::Rule;

/// Deduplication category of a legacy option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    EnumHasFlagStyle,
    BodyStyle,
    AnonymousFunctionOrMethodGroup,
    ConfigureAwait,
    AccessibilityModifiers,
    BlankLineBetweenClosingBraceAndSwitchSection,
    ConditionalOperatorConditionParenthesesStyle,
    ObjectCreationParenthesesStyle,
    SuppressUnityScriptMethods,
    NullCheckStyle,
    ArrayCreationTypeStyle,
    EmptyStringStyle,
}

impl Category {
    pub const COUNT: usize = Category::all().len();

    pub const fn all() -> &'static [Category] {
        &[
            Category::EnumHasFlagStyle,
            Category::BodyStyle,
            Category::AnonymousFunctionOrMethodGroup,
            Category::ConfigureAwait,
            Category::AccessibilityModifiers,
            Category::BlankLineBetweenClosingBraceAndSwitchSection,
            Category::ConditionalOperatorConditionParenthesesStyle,
            Category::ObjectCreationParenthesesStyle,
            Category::SuppressUnityScriptMethods,
            Category::NullCheckStyle,
            Category::ArrayCreationTypeStyle,
            Category::EmptyStringStyle,
        ]
    }

    /// Position of the category in [`Category::all`], used as its bit index.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The rule that owns the current options of this category.
    pub fn rule(self) -> Rule {
        match self {
            Category::EnumHasFlagStyle => Rule::UseHasFlagMethodOrBitwiseOperator,
            Category::BodyStyle => Rule::UseBlockBodyOrExpressionBody,
            Category::AnonymousFunctionOrMethodGroup => Rule::UseAnonymousFunctionOrMethodGroup,
            Category::ConfigureAwait => Rule::ConfigureAwait,
            Category::AccessibilityModifiers => Rule::AddOrRemoveAccessibilityModifiers,
            Category::BlankLineBetweenClosingBraceAndSwitchSection => {
                Rule::RemoveUnnecessaryBlankLine
            }
            Category::ConditionalOperatorConditionParenthesesStyle => {
                Rule::AddOrRemoveParenthesesFromConditionInConditionalOperator
            }
            Category::ObjectCreationParenthesesStyle => Rule::UseImplicitOrExplicitObjectCreation,
            Category::SuppressUnityScriptMethods => Rule::RemoveUnusedMemberDeclaration,
            Category::NullCheckStyle => Rule::NormalizeNullCheck,
            Category::ArrayCreationTypeStyle => Rule::UseExplicitlyOrImplicitlyTypedArray,
            Category::EmptyStringStyle => Rule::UseEmptyStringLiteralOrStringEmpty,
        }
    }
}

/// When a legacy option counts as "in use".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The legacy option is a switch, and it is obsolete only when turned on.
    Enabled,
    /// The legacy option was renamed: any boolean value is obsolete.
    Set,
}

/// Value to suggest for the current option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    Value(&'static str),
    /// Keep the value the legacy option had.
    Carry,
}

/// A replacement option and the rule it configures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentOption {
    pub key: &'static str,
    pub rule: Rule,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyOption {
    pub key: &'static str,
    pub current_key: &'static str,
    pub category: Category,
    pub trigger: Trigger,
    pub recommendation: Recommendation,
}

impl LegacyOption {
    pub fn rule(&self) -> Rule {
        self.category.rule()
    }

    pub fn current_option(&self) -> CurrentOption {
        CurrentOption { key: self.current_key, rule: self.rule() }
    }

    /// Returns the value to recommend for the current option if `value` (the
    /// value of the legacy option) triggers this descriptor.
    ///
    /// Values that aren't booleans never trigger.
    pub fn matches(&self, value: &str) -> Option<&'static str> {
        let value = parse_bool(value)?;
        match self.trigger {
            Trigger::Enabled if !value => return None,
            Trigger::Enabled | Trigger::Set => {}
        }
        Some(match self.recommendation {
            Recommendation::Value(recommended) => recommended,
            Recommendation::Carry => {
                if value {
                    "true"
                } else {
                    "false"
                }
            }
        })
    }
}

const fn legacy(
    key: &'static str,
    current_key: &'static str,
    category: Category,
    recommended: &'static str,
) -> LegacyOption {
    LegacyOption {
        key,
        current_key,
        category,
        trigger: Trigger::Enabled,
        recommendation: Recommendation::Value(recommended),
    }
}

/// All obsolete options, in the order they are checked. When several
/// options of the same category are set in a file, the first one in this
/// list is the one reported.
pub static LEGACY_OPTIONS: &[LegacyOption] = &[
    legacy(
        "roslynator.RCS1096.invert",
        "roslynator_enum_has_flag_style",
        Category::EnumHasFlagStyle,
        "method",
    ),
    legacy(
        "roslynator.RCS1016.invert",
        "roslynator_body_style",
        Category::BodyStyle,
        "block",
    ),
    legacy(
        "roslynator.RCS1016.use_block_body_when_declaration_is_multiline",
        "roslynator_use_block_body_when_declaration_spans_over_multiple_lines",
        Category::BodyStyle,
        "true",
    ),
    legacy(
        "roslynator.RCS1016.use_block_body_when_expression_is_multiline",
        "roslynator_use_block_body_when_expression_spans_over_multiple_lines",
        Category::BodyStyle,
        "true",
    ),
    legacy(
        "roslynator.RCS1207.invert",
        "roslynator_use_anonymous_function_or_method_group",
        Category::AnonymousFunctionOrMethodGroup,
        "anonymous_function",
    ),
    legacy(
        "roslynator.RCS1090.invert",
        "roslynator_configure_await",
        Category::ConfigureAwait,
        "false",
    ),
    legacy(
        "roslynator.RCS1018.invert",
        "roslynator_accessibility_modifiers",
        Category::AccessibilityModifiers,
        "implicit",
    ),
    legacy(
        "roslynator.RCS1036.remove_empty_line_between_closing_brace_and_switch_section",
        "roslynator_blank_line_between_closing_brace_and_switch_section",
        Category::BlankLineBetweenClosingBraceAndSwitchSection,
        "false",
    ),
    legacy(
        "roslynator.RCS1051.do_not_parenthesize_single_token",
        "roslynator_conditional_operator_condition_parentheses_style",
        Category::ConditionalOperatorConditionParenthesesStyle,
        "omit_when_condition_is_single_token",
    ),
    legacy(
        "roslynator.RCS1050.invert",
        "roslynator_object_creation_parentheses_style",
        Category::ObjectCreationParenthesesStyle,
        "omit",
    ),
    LegacyOption {
        key: "roslynator.RCS1213.suppress_unity_script_methods",
        current_key: "roslynator_suppress_unity_script_methods",
        category: Category::SuppressUnityScriptMethods,
        trigger: Trigger::Set,
        recommendation: Recommendation::Carry,
    },
    legacy(
        "roslynator.RCS1248.invert",
        "roslynator_null_check_style",
        Category::NullCheckStyle,
        "equality_operator",
    ),
    legacy(
        "roslynator.RCS1014.invert",
        "roslynator_array_creation_type_style",
        Category::ArrayCreationTypeStyle,
        "implicit",
    ),
    legacy(
        "roslynator.RCS1014.use_implicit_type_when_obvious",
        "roslynator_array_creation_type_style",
        Category::ArrayCreationTypeStyle,
        "implicit_when_type_is_obvious",
    ),
    legacy(
        "roslynator.RCS1078.invert",
        "roslynator_empty_string_style",
        Category::EmptyStringStyle,
        "field",
    ),
];

/// Look up a legacy option by key (case-insensitive).
pub fn find_legacy_option(key: &str) -> Option<&'static LegacyOption> {
    LEGACY_OPTIONS
        .iter()
        .find(|option| option.key.eq_ignore_ascii_case(key))
}
