use restamp_scanner::{scan, DelimiterPair, Segment};

fn count(segments: &[Segment]) -> usize {
    segments
        .iter()
        .filter(|s| matches!(s, Segment::Placeholder))
        .count()
}

#[test]
fn default_and_custom_delimiters_are_independent() {
    let default = DelimiterPair::default();
    let custom = DelimiterPair::new("<<!", "!>>").unwrap();

    let default_template = "See the *( value )* brown fox?";
    let custom_template = "Is <<! value !>> healthy to <<! value !>>?";

    // Each scan only recognizes its own pair.
    assert_eq!(count(&scan(default_template, &default)), 1);
    assert_eq!(count(&scan(default_template, &custom)), 0);
    assert_eq!(count(&scan(custom_template, &custom)), 2);
    assert_eq!(count(&scan(custom_template, &default)), 0);
}

#[test]
fn segments_interleave_in_template_order() {
    let delims = DelimiterPair::default();
    let segments = scan("a *(value)* b *(value)* c", &delims);

    assert_eq!(
        segments,
        vec![
            Segment::Literal("a ".to_string()),
            Segment::Placeholder,
            Segment::Literal(" b ".to_string()),
            Segment::Placeholder,
            Segment::Literal(" c".to_string()),
        ]
    );
}

#[test]
fn whitespace_tolerance_is_body_only() {
    let delims = DelimiterPair::default();

    // Whitespace around the keyword is insignificant.
    assert_eq!(count(&scan("*(value)*", &delims)), 1);
    assert_eq!(count(&scan("*(   value   )*", &delims)), 1);

    // Whitespace inside a delimiter glyph is not: "* (" is not "*(".
    assert_eq!(count(&scan("* ( value )*", &delims)), 0);
}

#[test]
fn placeholder_lookalikes_survive_verbatim() {
    let delims = DelimiterPair::default();
    let inputs = [
        "See the *( value brown fox?",
        "See the value )* brown fox?",
        "*( valeu )*",
        "*()*",
        "*( valuevalue )*",
    ];

    for input in inputs {
        let segments = scan(input, &delims);
        assert_eq!(count(&segments), 0, "input: {input:?}");
        assert_eq!(
            segments,
            vec![Segment::Literal(input.to_string())],
            "input: {input:?}"
        );
    }
}
