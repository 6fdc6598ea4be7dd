//! Integration tests for the JerseyBuilder API.

use jersey::{
    JerseyBuilder, JerseyError, config::AppConfig, options::RenderOptions,
    template::{JerseyDesign, design_to_source},
};

const SOURCE: &str = r#"
    jersey {
        team: "FC";
        primary: #0033aa;
        secondary: #ffcc00;
        tertiary: #000;
        number: 7;
    }
"#;

#[test]
fn test_compile_simple_design() {
    let spec = JerseyBuilder::default()
        .compile(SOURCE)
        .expect("Should compile valid design");

    assert_eq!(spec.team(), "FC");
    assert_eq!(spec.number(), 7);
    assert_eq!(spec.primary().to_string(), "#0033AA");
}

#[test]
fn test_render_simple_design() {
    let svg = JerseyBuilder::default()
        .compile_to_svg(SOURCE)
        .expect("Failed to render");

    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
}

#[test]
fn test_builder_with_config() {
    let config = AppConfig::new(RenderOptions::new(true));
    let builder = JerseyBuilder::new(config);
    assert!(builder.config().render().show_debug());

    let svg = builder.compile_to_svg(SOURCE).unwrap();
    assert!(svg.contains("magenta"));
}

#[test]
fn test_compile_error_keeps_source() {
    let source = "jersey { team: \"FC\" }";
    let err = JerseyBuilder::default().compile(source).unwrap_err();

    let JerseyError::Compile { err, src } = err else {
        panic!("expected a compile error, got {err:?}");
    };
    assert_eq!(src, source);
    assert_eq!(err.diagnostic().labels()[0].span().start(), 20);
}

#[test]
fn test_template_output_compiles() {
    let design = JerseyDesign::from_json(
        r##"{
            "team": "Night \"Owls\"",
            "primary": "#112233",
            "secondary": "#445566",
            "tertiary": "#778899",
            "player_size": 30,
            "pattern": { "type": "hoops", "args": [5, 18] },
            "patternColor": "#EEE",
            "number": 11,
            "player": "Kim",
            "sponsor": "ACME"
        }"##,
    )
    .unwrap();

    let source = design_to_source(&design);
    let spec = JerseyBuilder::default().compile(&source).unwrap();

    assert_eq!(spec.team(), "Night \"Owls\"");
    assert_eq!(spec.player_size(), 30);
    assert_eq!(spec.number_size(), 75);
    assert_eq!(spec.pattern_color().to_string(), "#EEEEEE");
    assert_eq!(spec.pattern().map(|p| p.to_string()), Some("hoops(5, 18)".to_string()));
}
