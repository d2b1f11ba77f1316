use hexplain::{
    convert::{
        fraction::{convert_fraction, DEFAULT_MAX_DIGITS},
        split::split_real,
        whole::{convert_whole, DivisionStep, DivisionSteps},
    },
    convert_report,
    error::ConvertError,
    render::{
        division::render_division_trace,
        multiplication::render_multiplication_trace,
        summary::{render_input_summary, render_result},
    },
};

#[test]
fn splitting_separates_whole_and_fraction() {
    assert_eq!(split_real(26.5).unwrap(), (26, 0.5));
    assert_eq!(split_real(0.25).unwrap(), (0, 0.25));
    assert_eq!(split_real(7.0).unwrap(), (7, 0.0));
    assert_eq!(split_real(0.0).unwrap(), (0, 0.0));
}

#[test]
fn splitting_rejects_invalid_input() {
    assert!(matches!(split_real(-5.0), Err(ConvertError::Negative { .. })));
    assert!(matches!(split_real(-0.5), Err(ConvertError::Negative { .. })));
    assert!(matches!(split_real(f64::NAN), Err(ConvertError::NotFinite { .. })));
    assert!(matches!(split_real(f64::INFINITY), Err(ConvertError::NotFinite { .. })));
    assert!(matches!(split_real(1e16), Err(ConvertError::WholeTooLarge { .. })));
}

#[test]
fn whole_conversion_of_255_records_both_divisions() {
    let conversion = convert_whole(255);

    assert_eq!(conversion.steps,
               vec![DivisionStep { dividend:  255,
                                   divisor:   16,
                                   quotient:  15,
                                   remainder: 15,
                                   digit:     'F', },
                    DivisionStep { dividend:  15,
                                   divisor:   16,
                                   quotient:  0,
                                   remainder: 15,
                                   digit:     'F', },]);
    assert_eq!(conversion.digits, "FF");
}

#[test]
fn whole_conversion_of_zero_yields_a_single_zero_digit() {
    let conversion = convert_whole(0);

    assert_eq!(conversion.steps.len(), 1);
    assert_eq!(conversion.steps[0].quotient, 0);
    assert_eq!(conversion.steps[0].remainder, 0);
    assert_eq!(conversion.digits, "0");
}

#[test]
fn whole_digits_round_trip_through_base_16() {
    for w in [1, 10, 15, 16, 26, 255, 256, 4095, 65_535, 1_048_575, 9_007_199_254_740_991] {
        let digits = convert_whole(w).digits;
        assert_eq!(u64::from_str_radix(&digits, 16).unwrap(), w, "round trip failed for {w}");
    }
}

#[test]
fn division_steps_are_restartable() {
    let producer = DivisionSteps::new(26);

    let first: Vec<_> = producer.clone().collect();
    let second: Vec<_> = producer.collect();

    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn fraction_conversion_of_half_terminates_after_one_step() {
    let conversion = convert_fraction(0.5, DEFAULT_MAX_DIGITS).unwrap();

    assert_eq!(conversion.steps.len(), 1);
    assert_eq!(conversion.steps[0].multiplier, 0.5);
    assert_eq!(conversion.steps[0].product, 8.0);
    assert_eq!(conversion.steps[0].digit, '8');
    assert_eq!(conversion.digits, "8");
    assert!(!conversion.truncated);
}

#[test]
fn fraction_conversion_of_zero_is_empty() {
    let conversion = convert_fraction(0.0, DEFAULT_MAX_DIGITS).unwrap();

    assert!(conversion.steps.is_empty());
    assert_eq!(conversion.digits, "");
    assert!(!conversion.truncated);
}

#[test]
fn fraction_conversion_of_a_tenth_expands_the_stored_value() {
    // 0.1 is stored as 3602879701896397 / 2^55; shifting out four bits per
    // step empties it in exactly 14 digits.
    let conversion = convert_fraction(0.1, DEFAULT_MAX_DIGITS).unwrap();

    assert_eq!(conversion.digits, "1999999999999A");
    assert!(!conversion.truncated);
}

#[test]
fn fraction_conversion_honors_the_digit_bound() {
    let conversion = convert_fraction(0.1, 5).unwrap();

    assert_eq!(conversion.steps.len(), 5);
    assert_eq!(conversion.digits, "19999");
    assert!(conversion.truncated);

    let lines = render_multiplication_trace(&conversion);
    assert!(lines.last().unwrap().contains("cut off after 5 digits"));
}

#[test]
fn fraction_conversion_rejects_invalid_input() {
    assert!(matches!(convert_fraction(1.0, 32), Err(ConvertError::FractionOutOfRange { .. })));
    assert!(matches!(convert_fraction(1.5, 32), Err(ConvertError::FractionOutOfRange { .. })));
    assert!(matches!(convert_fraction(-0.5, 32), Err(ConvertError::FractionOutOfRange { .. })));
    assert!(matches!(convert_fraction(f64::NAN, 32), Err(ConvertError::NotFinite { .. })));
}

#[test]
fn fraction_digit_prefixes_converge_toward_the_input() {
    let digits = convert_fraction(0.1, DEFAULT_MAX_DIGITS).unwrap().digits;

    for k in 1..=10 {
        let partial: f64 = digits.chars()
                                 .take(k)
                                 .enumerate()
                                 .map(|(i, c)| {
                                     f64::from(c.to_digit(16).unwrap())
                                     * 16f64.powi(-(i as i32 + 1))
                                 })
                                 .sum();

        let error = (0.1 - partial).abs();
        assert!(error < 16f64.powi(-(k as i32)),
                "prefix of {k} digits is off by {error}");
    }
}

#[test]
fn report_for_26_5_matches_the_worked_example() {
    let report = convert_report(26.5, DEFAULT_MAX_DIGITS).unwrap();

    assert!(report.contains("(26.5)\u{2081}\u{2080} = (26)\u{2081}\u{2080} + (0.5)\u{2081}\u{2080}"));
    assert!(report.contains("R(10)"));
    assert!(report.contains("(1A.8)\u{2081}\u{2086}"));
}

#[test]
fn report_for_a_whole_number_has_no_fractional_half() {
    let report = convert_report(255.0, DEFAULT_MAX_DIGITS).unwrap();

    assert!(report.contains("(FF)\u{2081}\u{2086}"));
    assert!(!report.contains("FF."));
    assert!(!report.contains('\u{00B7}'), "no multiplication section expected");
}

#[test]
fn report_for_zero_still_shows_a_digit() {
    let report = convert_report(0.0, DEFAULT_MAX_DIGITS).unwrap();

    assert!(report.contains("(0)\u{2081}\u{2086}"));
}

#[test]
fn failed_conversions_produce_no_report() {
    assert!(convert_report(-5.0, DEFAULT_MAX_DIGITS).is_err());
    assert!(convert_report(f64::NAN, DEFAULT_MAX_DIGITS).is_err());
}

#[test]
fn division_trace_columns_line_up() {
    let conversion = convert_whole(255);
    let lines = render_division_trace(&conversion.steps);

    assert_eq!(lines.len(), 2);

    let colon_at = |line: &str| line.chars().position(|c| c == ':').unwrap();
    assert_eq!(colon_at(&lines[0]), colon_at(&lines[1]));
}

#[test]
fn summary_lines_name_value_and_bases() {
    assert_eq!(render_input_summary(26.5, 26, 0.5),
               "(26.5)\u{2081}\u{2080} = (26)\u{2081}\u{2080} + (0.5)\u{2081}\u{2080}");
    assert_eq!(render_result(26.5, "1A", "8"),
               "(26.5)\u{2081}\u{2080} = (1A.8)\u{2081}\u{2086}");
    assert_eq!(render_result(255.0, "FF", ""), "(255)\u{2081}\u{2080} = (FF)\u{2081}\u{2086}");
}

#[test]
fn diagnostics_name_the_offending_value() {
    let message = ConvertError::Negative { value: -5.0 }.to_string();
    assert!(message.contains("-5"));
    assert!(message.contains("non-negative"));

    let message = ConvertError::FractionOutOfRange { value: 1.5 }.to_string();
    assert!(message.contains("[0, 1)"));
}
