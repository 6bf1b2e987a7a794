use pretty_assertions::assert_eq;
use sformat_utils::{
    Arg, BoundedString, FormatError, Policy, format, format_with,
    numeric::{FLOAT_MAX_FRAC_DIGITS, convert_float, convert_integer},
    sformat,
    template::count_placeholders,
};

fn render(template: &str, args: &[Arg<'_>]) -> String {
    format(template, args).to_string()
}

#[test]
fn student_report() {
    let report = [
        sformat!("Student #{} : {}, height = {}cm\n", 1, "Alice", 161.75),
        sformat!("Student #{} : {}, height = {}cm\n", 2, "Bob", 176.5),
    ];

    assert_eq!(report[0].as_str(), "Student #1 : Alice, height = 161.75cm\n");
    assert_eq!(report[1].as_str(), "Student #2 : Bob, height = 176.5cm\n");
}

#[test]
fn substitution_reconstructs_length() {
    let template = "a{}bb{}ccc{}";
    let args = [Arg::Int(-10), Arg::Text("xyz"), Arg::Float(2.5)];
    let out = render(template, &args);

    let rendered: usize = args.iter().map(|arg| arg.to_string().len()).sum();
    let literal = template.len() - 2 * count_placeholders(template);

    assert_eq!(out, "a-10bbxyzccc2.5");
    assert_eq!(out.len(), literal + rendered);
}

#[test]
fn literal_templates_are_fixed_points() {
    for template in ["", "plain", "trailing }", "unicode ✓ text", "}{"] {
        assert_eq!(render(template, &[]), template);
    }
}

#[test]
fn truncation_law() {
    let args = [Arg::Int(1), Arg::Text("two"), Arg::Float(3.5), Arg::Int(4)];

    for template in ["{}", "{} {}", "[{}|{}|{}]", "none"] {
        let k = count_placeholders(template);
        let full = render(template, &args);

        assert_eq!(full, render(template, &args[..k]), "{template}");

        for extra in &args[k..] {
            assert!(!full.contains(&extra.to_string()), "{template} -> {full}");
        }
    }
}

#[test]
fn strict_and_lenient_agree_on_well_formed_input() {
    let args = [Arg::UInt(7), Arg::Text("é")];
    let lenient = format("<{}> <{}>", &args);
    let strict = format_with(Policy::Strict, "<{}> <{}>", &args).unwrap();

    assert_eq!(lenient, strict);
}

#[test]
fn strict_errors_render_readably() {
    let err = format_with(Policy::Strict, "{} {}", &[Arg::Int(1)]).unwrap_err();

    assert_eq!(
        err,
        FormatError::ArgumentCountMismatch {
            placeholders: 2,
            args: 1
        }
    );
    assert_eq!(
        err.to_string(),
        "template has 2 placeholder(s) but 1 argument(s) were supplied"
    );
}

#[test]
fn lenient_output_is_bounded() {
    let long = "x".repeat(1500);
    let out = format("{}", &[Arg::Text(&long)]);

    assert_eq!(out.len(), sformat_utils::MAX_LEN);
    assert!(format_with(Policy::Strict, "{}", &[Arg::Text(&long)]).is_err());
}

#[test]
fn integer_conversion_matches_std() {
    for n in [0, 1, -1, 9, -42, 1_000_000, i64::MIN, i64::MAX] {
        let text = convert_integer(n);
        assert_eq!(text.as_str(), n.to_string());
        assert!(!text.starts_with('+'));
    }
}

#[test]
fn float_fraction_rules() {
    assert_eq!(convert_float(3.0).as_str(), "3");
    assert_eq!(convert_float(3.14).as_str(), "3.14");

    for x in [1.0 / 7.0, 12.345_678_9, -0.123_456_789] {
        let text = convert_float(x);
        let frac = text.split('.').nth(1).unwrap_or("");
        assert!(frac.len() <= FLOAT_MAX_FRAC_DIGITS, "{x} -> {text}");
    }
}

#[test]
fn bounded_arguments_chain() {
    let name = BoundedString::<8>::truncated("Alice");
    let greeting = sformat!("Hi {}", &name);
    let nested = sformat!("[{}]", &greeting);

    assert_eq!(nested.as_str(), "[Hi Alice]");
}
