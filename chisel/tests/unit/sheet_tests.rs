use chisel::{BUILDER, FragmentKind, SelectorError, Sheet, SheetError, Step};
use std::error::Error;
use std::io::Write;

const SHEET: &str = r#"
[[selectors]]
name = "png-link"
steps = [{ element = "a" }, { attr = 'href$=".png"' }, { pseudo-class = "focus" }]
properties = { outline = "none", color = "red" }

[[selectors]]
name = "editable"
steps = [{ id = "main" }, { class = "container" }, { class = "editable" }]

[[selectors]]
name = "sibling"
steps = [{ combine = { left = "png-link", combinator = "+", right = "editable" } }]
"#;

#[test]
fn test_parse_steps() {
    let sheet: Sheet = SHEET.parse().unwrap();
    assert_eq!(sheet.selectors.len(), 3);
    assert_eq!(
        sheet.selectors[0].steps,
        vec![
            Step::Element("a".to_string()),
            Step::Attr(r#"href$=".png""#.to_string()),
            Step::PseudoClass("focus".to_string()),
        ]
    );
    assert_eq!(
        sheet.selectors[2].steps,
        vec![Step::Combine {
            left: "png-link".to_string(),
            combinator: "+".to_string(),
            right: "editable".to_string(),
        }]
    );
    assert!(sheet.selectors[1].properties.is_empty());
}

#[test]
fn test_build_in_declaration_order() {
    let built = SHEET.parse::<Sheet>().unwrap().build().unwrap();
    let names: Vec<&str> = built.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["png-link", "editable", "sibling"]);

    assert_eq!(built[0].selector.stringify(), r#"a[href$=".png"]:focus"#);
    assert_eq!(built[1].selector.stringify(), "#main.container.editable");
    assert_eq!(
        built[2].selector.stringify(),
        r##"a[href$=".png"]:focus + #main.container.editable"##
    );
    assert_eq!(
        built[0].properties.get("outline").map(String::as_str),
        Some("none")
    );
    assert!(BUILDER.is_empty());
}

#[test]
fn test_empty_sheet() {
    let sheet: Sheet = "".parse().unwrap();
    assert!(sheet.build().unwrap().is_empty());
}

#[test]
fn test_selector_error_names_selector() {
    let sheet: Sheet = r#"
        [[selectors]]
        name = "broken"
        steps = [{ class = "x" }, { id = "y" }]
    "#
    .parse()
    .unwrap();

    match sheet.build().unwrap_err() {
        SheetError::Selector { name, source } => {
            assert_eq!(name, "broken");
            assert_eq!(
                source,
                SelectorError::Order {
                    kind: FragmentKind::Id,
                    after: FragmentKind::Class
                }
            );
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_duplicate_segment_in_sheet() {
    let sheet: Sheet = r#"
        [[selectors]]
        name = "twice"
        steps = [{ pseudo-element = "before" }, { pseudo-element = "after" }]
    "#
    .parse()
    .unwrap();

    let err = sheet.build().unwrap_err();
    assert!(matches!(
        err,
        SheetError::Selector {
            source: SelectorError::DuplicateSegment {
                kind: FragmentKind::PseudoElement
            },
            ..
        }
    ));
}

#[test]
fn test_forward_reference_is_rejected() {
    let sheet: Sheet = r#"
        [[selectors]]
        name = "pair"
        steps = [{ combine = { left = "a", combinator = ">", right = "later" } }]

        [[selectors]]
        name = "a"
        steps = [{ element = "a" }]

        [[selectors]]
        name = "later"
        steps = [{ element = "b" }]
    "#
    .parse()
    .unwrap();

    match sheet.build().unwrap_err() {
        SheetError::UnknownReference { name, reference } => {
            assert_eq!(name, "pair");
            assert_eq!(reference, "a");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_duplicate_name_and_empty_steps() {
    let sheet: Sheet = r#"
        [[selectors]]
        name = "a"
        steps = [{ element = "a" }]

        [[selectors]]
        name = "a"
        steps = [{ element = "b" }]
    "#
    .parse()
    .unwrap();
    assert!(matches!(sheet.build(), Err(SheetError::DuplicateName(name)) if name == "a"));

    let sheet: Sheet = r#"
        [[selectors]]
        name = "nothing"
        steps = []
    "#
    .parse()
    .unwrap();
    assert!(matches!(
        sheet.build(),
        Err(SheetError::EmptySelector { name }) if name == "nothing"
    ));
}

#[test]
fn test_unknown_step_fails_to_parse() {
    let result = r#"
        [[selectors]]
        name = "bad"
        steps = [{ tag = "a" }]
    "#
    .parse::<Sheet>();
    assert!(matches!(result, Err(SheetError::Parse(_))));
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SHEET.as_bytes()).unwrap();

    let sheet = Sheet::from_file(file.path()).unwrap();
    assert_eq!(sheet.build().unwrap().len(), 3);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");
    assert!(matches!(
        Sheet::from_file(&path),
        Err(SheetError::NotFound(_))
    ));
}

#[test]
fn test_selector_error_chain_reports_cause_once() {
    let sheet: Sheet = r#"
        [[selectors]]
        name = "b"
        steps = [{ class = "x" }, { id = "y" }]
    "#
    .parse()
    .unwrap();

    let err = sheet.build().unwrap_err();
    assert_eq!(err.to_string(), "Invalid selector `b`");

    let cause = err.source().unwrap().to_string();
    assert!(cause.starts_with("Selector parts should be arranged"));
    assert!(!err.to_string().contains(&cause));

    let chain = format!("{:#}", anyhow::Error::new(err));
    assert_eq!(chain.matches("should be arranged").count(), 1);
}

#[test]
fn test_parse_error_does_not_repeat_cause() {
    let err = "selectors = 1".parse::<Sheet>().unwrap_err();
    assert_eq!(err.to_string(), "Failed to parse sheet TOML");
    assert!(err.source().is_some());
}
