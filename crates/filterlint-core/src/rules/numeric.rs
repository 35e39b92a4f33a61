//! Numeric rules: bounded ranges, whitelisted numbers and alert sounds.

use super::{
    capture_trailing_comment, expect_equality, format_error, report_trailing_comment, value_error,
    RuleOutcome,
};
use crate::cursor::Cursor;
use crate::diagnostic::{LineContext, ACTIONS_URL, CONDITIONS_URL, FILTER_URL};

/// Valid `PlayAlertSound` ids.
const SOUND_IDS: std::ops::RangeInclusive<i64> = 1..=9;

/// Valid `PlayAlertSound` volumes.
const SOUND_VOLUMES: std::ops::RangeInclusive<i64> = 0..=300;

/// A single number within `min..=max`.
///
/// With `allow_operator` unset, any operator is reported but parsing carries
/// on so a bad value is reported in the same pass.
pub(super) fn range_rule(
    cursor: &mut Cursor,
    ctx: &LineContext<'_>,
    min: i64,
    max: i64,
    allow_operator: bool,
) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();

    let operator = cursor.next_operator();
    if allow_operator {
        outcome.operator = operator;
    } else if let Some(op) = operator {
        outcome.error(
            ctx.error(
                op.span,
                format!("An operator for a \"{}\" rule is an error.", ctx.keyword),
            )
            .with_url(FILTER_URL),
        );
    }

    match cursor.next_number() {
        None => {
            let usage = if allow_operator {
                "[Operator] <Number>"
            } else {
                "<Number>"
            };
            outcome.error(format_error(cursor, ctx, usage, FILTER_URL));
        }
        Some(number) if (min..=max).contains(&number.value) => outcome.value(number),
        Some(number) => {
            outcome.error(
                ctx.error(
                    number.span,
                    format!(
                        "Invalid value for \"{}\" rule. Expected {min}-{max}.",
                        ctx.keyword
                    ),
                )
                .with_url(FILTER_URL),
            );
        }
    }

    report_trailing_comment(cursor, ctx, &mut outcome);
    outcome
}

/// An optional operator followed by one number out of `allowed`.
pub(super) fn operator_number_rule(
    cursor: &mut Cursor,
    ctx: &LineContext<'_>,
    allowed: &[i64],
) -> RuleOutcome {
    let mut outcome = RuleOutcome {
        operator: cursor.next_operator(),
        ..RuleOutcome::default()
    };

    let Some(number) = cursor.next_number() else {
        outcome.error(format_error(
            cursor,
            ctx,
            "[Operator] <Number>",
            CONDITIONS_URL,
        ));
        return outcome;
    };

    if allowed.contains(&number.value) {
        outcome.value(number);
    } else {
        let expected = allowed
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(",");
        outcome.error(value_error(ctx, number.span, expected, CONDITIONS_URL));
    }

    report_trailing_comment(cursor, ctx, &mut outcome);
    outcome
}

/// A sound id and an optional volume. Both are range checked independently.
pub(super) fn alert_sound_rule(cursor: &mut Cursor, ctx: &LineContext<'_>) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();
    if !expect_equality(cursor, ctx, &mut outcome) {
        return outcome;
    }

    let Some(id) = cursor.next_number() else {
        outcome.error(format_error(cursor, ctx, "<Value> [Value]", ACTIONS_URL));
        return outcome;
    };
    let volume = cursor.next_number();

    if !SOUND_IDS.contains(&id.value) {
        outcome.error(value_error(ctx, id.span, "1-9", ACTIONS_URL));
    }
    if let Some(volume) = &volume {
        if !SOUND_VOLUMES.contains(&volume.value) {
            outcome.error(value_error(ctx, volume.span, "0-300", ACTIONS_URL));
        }
    }

    if !outcome.invalid {
        outcome.value(id);
        if let Some(volume) = volume {
            outcome.value(volume);
        }
    }

    capture_trailing_comment(cursor, &mut outcome);
    outcome
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{only_diagnostic, run};
    use crate::keyword::{Validator, LINKED_SOCKETS};
    use crate::token::{Operator, Span, Value};

    const ITEM_LEVEL: Validator = Validator::Range {
        min: 0,
        max: 100,
        operator: true,
    };

    const FONT_SIZE: Validator = Validator::Range {
        min: 18,
        max: 45,
        operator: false,
    };

    #[test]
    fn test_range_with_operator() {
        let (outcome, _) = run("ItemLevel", ">= 85", ITEM_LEVEL);
        assert!(!outcome.invalid);
        assert_eq!(outcome.operator.unwrap().value, Operator::GreaterEqual);
        assert_eq!(outcome.values.len(), 1);
        assert_eq!(outcome.values[0].value, Value::Number(85));
        assert_eq!(outcome.values[0].span, Span::new(13, 15));
    }

    #[test]
    fn test_range_without_operator() {
        let (outcome, _) = run("ItemLevel", "100", ITEM_LEVEL);
        assert!(!outcome.invalid);
        assert!(outcome.operator.is_none());
        assert_eq!(outcome.values[0].value, Value::Number(100));
    }

    #[test]
    fn test_range_out_of_bounds_anchors_to_number() {
        let (outcome, _) = run("ItemLevel", ">= 150", ITEM_LEVEL);
        assert!(outcome.invalid);
        let d = only_diagnostic(&outcome);
        assert_eq!(d.excerpt, "Invalid value for \"ItemLevel\" rule. Expected 0-100.");
        assert_eq!(d.range.span(), Span::new(13, 16));
        assert!(outcome.values.is_empty());
    }

    #[test]
    fn test_range_missing_number_covers_rule() {
        let (outcome, _) = run("Quality", "<", ITEM_LEVEL);
        let d = only_diagnostic(&outcome);
        assert_eq!(
            d.excerpt,
            "Invalid format. Expected \"Quality [Operator] <Number>\"."
        );
        assert_eq!(d.range.span(), Span::new(0, 9));
    }

    #[test]
    fn test_range_reports_trailing_comment() {
        let (outcome, _) = run("ItemLevel", "5 # low", ITEM_LEVEL);
        assert!(outcome.invalid);
        let d = only_diagnostic(&outcome);
        assert!(d.excerpt.contains("trailing comment"));
        assert_eq!(d.range.span(), Span::new(12, 17));
        assert_eq!(outcome.values.len(), 1);
    }

    #[test]
    fn test_font_size_rejects_operator_and_still_checks_value() {
        let (outcome, _) = run("SetFontSize", "> 50", FONT_SIZE);
        assert!(outcome.invalid);
        assert_eq!(outcome.diagnostics.len(), 2);
        assert_eq!(
            outcome.diagnostics[0].excerpt,
            "An operator for a \"SetFontSize\" rule is an error."
        );
        assert_eq!(outcome.diagnostics[0].range.span(), Span::new(12, 13));
        assert!(outcome.diagnostics[1].excerpt.ends_with("Expected 18-45."));
    }

    #[test]
    fn test_font_size_missing_number_usage() {
        let (outcome, _) = run("SetFontSize", "big", FONT_SIZE);
        assert_eq!(
            only_diagnostic(&outcome).excerpt,
            "Invalid format. Expected \"SetFontSize <Number>\"."
        );
    }

    #[test]
    fn test_linked_sockets_whitelist() {
        let validator = Validator::OperatorNumber(LINKED_SOCKETS);
        let (outcome, _) = run("LinkedSockets", ">= 5", validator);
        assert!(!outcome.invalid);
        assert_eq!(outcome.values[0].value, Value::Number(5));

        let (outcome, _) = run("LinkedSockets", "1", validator);
        let d = only_diagnostic(&outcome);
        assert_eq!(
            d.excerpt,
            "Invalid value for rule \"LinkedSockets\". Expected 0,2,3,4,5,6."
        );
        assert_eq!(d.range.span(), Span::new(14, 15));
    }

    #[test]
    fn test_alert_sound_id_and_volume() {
        let (outcome, _) = run("PlayAlertSound", "3 250", Validator::AlertSound);
        assert!(!outcome.invalid);
        let values: Vec<_> = outcome.values.iter().map(|v| v.value.clone()).collect();
        assert_eq!(values, vec![Value::Number(3), Value::Number(250)]);
    }

    #[test]
    fn test_alert_sound_bad_id() {
        let (outcome, _) = run("PlayAlertSound", "11", Validator::AlertSound);
        let d = only_diagnostic(&outcome);
        assert_eq!(
            d.excerpt,
            "Invalid value for rule \"PlayAlertSound\". Expected 1-9."
        );
        assert_eq!(d.range.span(), Span::new(15, 17));
    }

    #[test]
    fn test_alert_sound_reports_id_and_volume_together() {
        let (outcome, _) = run("PlayAlertSound", "0 400", Validator::AlertSound);
        assert_eq!(outcome.diagnostics.len(), 2);
        assert!(outcome.diagnostics[0].excerpt.ends_with("Expected 1-9."));
        assert!(outcome.diagnostics[1].excerpt.ends_with("Expected 0-300."));
        assert!(outcome.values.is_empty());
    }

    #[test]
    fn test_alert_sound_requires_equality() {
        let (outcome, _) = run("PlayAlertSound", "> 3", Validator::AlertSound);
        let d = only_diagnostic(&outcome);
        assert!(d.excerpt.starts_with("Invalid operator for \"PlayAlertSound\""));
        assert_eq!(d.range.span(), Span::new(15, 16));
    }

    #[test]
    fn test_alert_sound_captures_comment() {
        let (outcome, cursor) = run("PlayAlertSound", "1 # ding", Validator::AlertSound);
        assert!(!outcome.invalid);
        assert_eq!(outcome.trailing_comment.unwrap().value, "# ding");
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_alert_sound_missing_id() {
        let (outcome, _) = run("PlayAlertSound", "", Validator::AlertSound);
        assert_eq!(
            only_diagnostic(&outcome).excerpt,
            "Invalid format. Expected \"PlayAlertSound <Value> [Value]\"."
        );
    }
}
