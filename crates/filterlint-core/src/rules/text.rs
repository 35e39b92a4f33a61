//! String and boolean rules.

use super::{
    expect_equality, format_error, next_argument, report_trailing_comment, RuleOutcome,
};
use crate::catalog::NameSet;
use crate::cursor::Cursor;
use crate::diagnostic::{LineContext, CONDITIONS_URL};

/// Maximum number of letters in a socket group.
const MAX_SOCKET_GROUP: usize = 6;

/// `True` or `False`, optionally quoted.
pub(super) fn boolean_rule(cursor: &mut Cursor, ctx: &LineContext<'_>) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();
    if !expect_equality(cursor, ctx, &mut outcome) {
        return outcome;
    }

    match cursor.next_boolean() {
        Some(value) => outcome.value(value),
        None => outcome.error(
            format_error(cursor, ctx, "<Boolean>", CONDITIONS_URL)
                .with_description("A Boolean is a binary value that can be either 'True' or 'False'"),
        ),
    }

    report_trailing_comment(cursor, ctx, &mut outcome);
    outcome
}

/// One value out of `allowed`, compared case-insensitively.
pub(super) fn one_of_rule(
    cursor: &mut Cursor,
    ctx: &LineContext<'_>,
    allowed: &[&str],
) -> RuleOutcome {
    let mut outcome = RuleOutcome {
        operator: cursor.next_operator(),
        ..RuleOutcome::default()
    };

    let Some(value) = next_argument(cursor) else {
        outcome.error(format_error(
            cursor,
            ctx,
            "[Operator] <Text>",
            CONDITIONS_URL,
        ));
        return outcome;
    };

    if allowed.iter().any(|a| a.eq_ignore_ascii_case(&value.value)) {
        outcome.value(value);
    } else {
        let mut description = String::from("The following values are valid for this rule:\n");
        for a in allowed {
            description.push_str("\n\t");
            description.push_str(a);
        }
        outcome.error(
            ctx.error(
                value.span,
                format!("Invalid value for \"{}\" rule.", ctx.keyword),
            )
            .with_description(description)
            .with_url(CONDITIONS_URL),
        );
    }

    report_trailing_comment(cursor, ctx, &mut outcome);
    outcome
}

/// One to six socket colours out of `R`, `G`, `B` and `W`.
pub(super) fn socket_group_rule(cursor: &mut Cursor, ctx: &LineContext<'_>) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();
    if !expect_equality(cursor, ctx, &mut outcome) {
        return outcome;
    }

    let Some(group) = next_argument(cursor) else {
        outcome.error(format_error(cursor, ctx, "<Group>", CONDITIONS_URL));
        return outcome;
    };

    let letters = group.value.chars().count();
    let valid = (1..=MAX_SOCKET_GROUP).contains(&letters)
        && group
            .value
            .chars()
            .all(|c| matches!(c.to_ascii_uppercase(), 'R' | 'G' | 'B' | 'W'));

    if valid {
        outcome.value(group);
    } else {
        outcome.error(
            ctx.error(
                group.span,
                format!(
                    "Invalid value for \"{}\" rule. Valid characters are: R, G, B, W.",
                    ctx.keyword
                ),
            )
            .with_url(CONDITIONS_URL),
        );
    }

    report_trailing_comment(cursor, ctx, &mut outcome);
    outcome
}

/// One or more names, each matched against the catalog set.
///
/// A name is accepted when it is a case-insensitive substring of a catalog
/// entry. Every unmatched name is reported; parsing continues to the end of
/// the argument list.
pub(super) fn catalog_list_rule(
    cursor: &mut Cursor,
    ctx: &LineContext<'_>,
    names: &NameSet,
) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();
    if !expect_equality(cursor, ctx, &mut outcome) {
        return outcome;
    }

    while let Some(name) = next_argument(cursor) {
        if !name.value.is_empty() && names.matches(&name.value) {
            outcome.value(name);
        } else {
            outcome.error(
                ctx.error(
                    name.span,
                    format!("Invalid value for \"{}\" rule.", ctx.keyword),
                )
                .with_url(CONDITIONS_URL),
            );
        }
    }

    if outcome.values.is_empty() && outcome.diagnostics.is_empty() {
        outcome.error(
            format_error(cursor, ctx, "<Text>...", CONDITIONS_URL).with_description(format!(
                "The '{}' keyword should be followed by a list of words or strings.\n\n\
                 Any value consisting of multiple words should be surrounded by double quotation marks.",
                ctx.keyword
            )),
        );
    }

    report_trailing_comment(cursor, ctx, &mut outcome);
    outcome
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{only_diagnostic, run, run_with};
    use crate::catalog::Catalog;
    use crate::keyword::{CatalogSet, Validator, RARITIES};
    use crate::token::{Operator, Span, Value};

    const CLASSES: Validator = Validator::CatalogList(CatalogSet::Classes);

    fn texts(outcome: &super::RuleOutcome) -> Vec<String> {
        outcome.values.iter().map(|v| v.value.to_string()).collect()
    }

    #[test]
    fn test_boolean_values() {
        let (outcome, _) = run("Identified", "True", Validator::Boolean);
        assert!(!outcome.invalid);
        assert_eq!(outcome.values[0].value, Value::Boolean(true));

        let (outcome, _) = run("Corrupted", "= \"false\"", Validator::Boolean);
        assert!(!outcome.invalid);
        assert_eq!(outcome.values[0].value, Value::Boolean(false));
        assert_eq!(outcome.operator.unwrap().value, Operator::Equal);
    }

    #[test]
    fn test_boolean_rejects_other_words() {
        let (outcome, _) = run("Identified", "yes", Validator::Boolean);
        let d = only_diagnostic(&outcome);
        assert_eq!(d.excerpt, "Invalid format. Expected \"Identified <Boolean>\".");
        assert!(d.description.is_some());
    }

    #[test]
    fn test_boolean_rejects_comparison() {
        let (outcome, _) = run("Corrupted", "< True", Validator::Boolean);
        assert!(outcome.invalid);
        assert!(outcome.values.is_empty());
        assert_eq!(only_diagnostic(&outcome).range.span(), Span::new(10, 11));
    }

    #[test]
    fn test_rarity_case_insensitive() {
        let (outcome, _) = run("Rarity", "< rare", Validator::OneOf(RARITIES));
        assert!(!outcome.invalid);
        assert_eq!(outcome.operator.as_ref().unwrap().value, Operator::Less);
        assert_eq!(texts(&outcome), vec!["rare"]);
    }

    #[test]
    fn test_rarity_unknown_lists_values() {
        let (outcome, _) = run("Rarity", "Legendary", Validator::OneOf(RARITIES));
        let d = only_diagnostic(&outcome);
        assert_eq!(d.excerpt, "Invalid value for \"Rarity\" rule.");
        assert_eq!(d.range.span(), Span::new(7, 16));
        let description = d.description.as_deref().unwrap();
        assert!(description.contains("\tUnique"));
    }

    #[test]
    fn test_rarity_does_not_treat_comment_as_value() {
        let (outcome, _) = run("Rarity", "# nothing", Validator::OneOf(RARITIES));
        assert_eq!(
            only_diagnostic(&outcome).excerpt,
            "Invalid format. Expected \"Rarity [Operator] <Text>\"."
        );
    }

    #[test]
    fn test_socket_group_valid() {
        let (outcome, _) = run("SocketGroup", "rgbW", Validator::SocketGroup);
        assert!(!outcome.invalid);
        assert_eq!(texts(&outcome), vec!["rgbW"]);
    }

    #[test]
    fn test_socket_group_invalid_letters() {
        let (outcome, _) = run("SocketGroup", "XYZ", Validator::SocketGroup);
        let d = only_diagnostic(&outcome);
        assert!(d.excerpt.ends_with("Valid characters are: R, G, B, W."));
        assert_eq!(d.range.span(), Span::new(12, 15));
    }

    #[test]
    fn test_socket_group_too_long() {
        let (outcome, _) = run("SocketGroup", "RRRRRRR", Validator::SocketGroup);
        assert!(outcome.invalid);
    }

    #[test]
    fn test_socket_group_missing() {
        let (outcome, _) = run("SocketGroup", "", Validator::SocketGroup);
        assert_eq!(
            only_diagnostic(&outcome).excerpt,
            "Invalid format. Expected \"SocketGroup <Group>\"."
        );
    }

    #[test]
    fn test_catalog_list_accepts_several_values() {
        let (outcome, _) = run("Class", "\"Life Flasks\" Rings amulet", CLASSES);
        assert!(!outcome.invalid);
        assert_eq!(texts(&outcome), vec!["Life Flasks", "Rings", "amulet"]);
        assert_eq!(outcome.values[0].span, Span::new(6, 19));
    }

    #[test]
    fn test_catalog_list_reports_each_unknown_value() {
        let (outcome, _) = run("Class", "Rings Gizmo Amulets Widget", CLASSES);
        assert!(outcome.invalid);
        assert_eq!(texts(&outcome), vec!["Rings", "Amulets"]);
        let spans: Vec<_> = outcome.diagnostics.iter().map(|d| d.range.span()).collect();
        assert_eq!(spans, vec![Span::new(12, 17), Span::new(26, 32)]);
    }

    #[test]
    fn test_catalog_list_requires_a_value() {
        let (outcome, _) = run("BaseType", "", Validator::CatalogList(CatalogSet::Bases));
        let d = only_diagnostic(&outcome);
        assert_eq!(d.excerpt, "Invalid format. Expected \"BaseType <Text>...\".");
    }

    #[test]
    fn test_catalog_list_rejects_empty_quotes() {
        let (outcome, _) = run("Class", "\"\"", CLASSES);
        assert_eq!(
            only_diagnostic(&outcome).excerpt,
            "Invalid value for \"Class\" rule."
        );
    }

    #[test]
    fn test_catalog_list_stops_at_comment() {
        let (outcome, cursor) = run("Class", "Rings # jewellery", CLASSES);
        assert_eq!(texts(&outcome), vec!["Rings"]);
        assert!(only_diagnostic(&outcome).excerpt.contains("trailing comment"));
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_catalog_list_uses_supplied_catalog() {
        let catalog = Catalog::new(["Incubator"], Vec::<String>::new());
        let (outcome, _) = run_with("Class", "Incubator", CLASSES, &catalog);
        assert!(!outcome.invalid);
        let (outcome, _) = run_with("Class", "Rings", CLASSES, &catalog);
        assert!(outcome.invalid);
    }
}
