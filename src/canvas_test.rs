use super::*;

fn sequential() -> RafaConfig {
    RafaConfig::default().with_uid(UidStrategy::Sequential)
}

fn holder() -> Canvas {
    Canvas::with_config(CanvasTarget::container("holder", 640, 480), &sequential()).unwrap()
}

// =============================================================================
// CONSTRUCTION
// =============================================================================

#[test]
fn container_constructor_quotes_the_id() {
    let canvas = holder();
    assert_eq!(canvas.constructor(), "new Raphael(\"holder\", 640, 480)");
    assert_eq!(canvas.name(), "_raphael_canvas_1");
}

#[test]
fn position_constructor_uses_four_integers() {
    let canvas = Canvas::with_config(CanvasTarget::position(10, -20, 300, 200), &sequential()).unwrap();
    assert_eq!(canvas.constructor(), "new Raphael(10, -20, 300, 200)");
}

#[test]
fn zero_dimensions_are_rejected() {
    let err = Canvas::new(CanvasTarget::container("holder", 0, 480)).err().unwrap();
    assert!(matches!(err, RafaError::InvalidDimensions { width: 0, height: 480 }));

    let err = Canvas::new(CanvasTarget::position(0, 0, 10, 0)).err().unwrap();
    assert!(matches!(err, RafaError::InvalidDimensions { width: 10, height: 0 }));
}

#[test]
fn empty_container_is_rejected() {
    let err = Canvas::new(CanvasTarget::container("  ", 10, 10)).err().unwrap();
    assert!(matches!(err, RafaError::InvalidContainer));
}

#[test]
fn default_names_use_timestamp_uids() {
    let canvas = Canvas::new(CanvasTarget::container("holder", 10, 10)).unwrap();
    let suffix = canvas.name().strip_prefix("_raphael_canvas_").unwrap();
    assert!(suffix.contains('_'));
}

#[test]
fn named_canvas_validates_the_identifier() {
    let canvas = Canvas::named(CanvasTarget::container("holder", 10, 10), "paper", &sequential()).unwrap();
    assert_eq!(canvas.name(), "paper");
    assert!(canvas.to_script().starts_with("var paper = new Raphael("));

    let err = Canvas::named(CanvasTarget::container("holder", 10, 10), "my paper", &sequential()).err().unwrap();
    assert!(matches!(err, RafaError::InvalidIdentifier(_)));
}

// =============================================================================
// ELEMENTS
// =============================================================================

#[test]
fn circle_emits_constructor_then_attributes() {
    let canvas = holder();
    let circle = canvas
        .circle(50.0, 40.0, 10.0, &Attrs::new().set("fill", "#f00").set("stroke_width", 2.0))
        .unwrap();
    assert_eq!(circle.name(), "rafa_circle_2");
    assert_eq!(
        canvas.statements(),
        vec![
            "var rafa_circle_2 = _raphael_canvas_1.circle(50, 40, 10);",
            "rafa_circle_2.attr({\"fill\":\"#f00\"});",
            "rafa_circle_2.attr({\"stroke-width\":2});",
        ]
    );
}

#[test]
fn rect_radius_defaults_to_zero() {
    let canvas = holder();
    canvas.rect(1.0, 2.0, 30.0, 40.0, None, &Attrs::new()).unwrap();
    canvas.rect(1.0, 2.0, 30.0, 40.0, Some(5.0), &Attrs::new()).unwrap();
    let statements = canvas.statements();
    assert!(statements[0].ends_with(".rect(1, 2, 30, 40, 0);"));
    assert!(statements[1].ends_with(".rect(1, 2, 30, 40, 5);"));
}

#[test]
fn ellipse_text_and_image_constructors() {
    let canvas = holder();
    canvas.ellipse(10.0, 20.0, 5.0, 2.5, &Attrs::new()).unwrap();
    canvas.text(0.0, 0.0, "Hello \"world\"", &Attrs::new()).unwrap();
    canvas.image("logo.png", 0.0, 0.0, 64.0, 32.0, &Attrs::new()).unwrap();
    let statements = canvas.statements();
    assert_eq!(statements[0], "var rafa_ellipse_2 = _raphael_canvas_1.ellipse(10, 20, 5, 2.5);");
    assert_eq!(statements[1], "var rafa_text_3 = _raphael_canvas_1.text(0, 0, \"Hello \\\"world\\\"\");");
    assert_eq!(statements[2], "var rafa_image_4 = _raphael_canvas_1.image(\"logo.png\", 0, 0, 64, 32);");
}

#[test]
fn explicit_ids_name_the_variable() {
    let canvas = holder();
    let logo = canvas.circle(0.0, 0.0, 1.0, &Attrs::new().id("logo")).unwrap();
    assert_eq!(logo.name(), "logo");
    assert_eq!(canvas.statements()[0], "var logo = _raphael_canvas_1.circle(0, 0, 1);");
}

#[test]
fn invalid_ids_are_rejected_before_emitting() {
    let canvas = holder();
    let err = canvas.circle(0.0, 0.0, 1.0, &Attrs::new().id("not valid")).err().unwrap();
    assert!(matches!(err, RafaError::InvalidIdentifier(ref id) if id == "not valid"));
    assert!(canvas.statements().is_empty());
}

#[test]
fn path_runs_the_builder() {
    let canvas = holder();
    let path = canvas
        .path("", &Attrs::new().set("stroke", "#00f"), |p| {
            p.move_to(10.0, 10.0).line_to(50.0, 100.0).close();
        })
        .unwrap();
    assert_eq!(path.kind(), ElementKind::Path);
    assert_eq!(
        canvas.statements(),
        vec![
            "var rafa_path_2 = _raphael_canvas_1.path(\"M10 10 L50 100 z\");",
            "rafa_path_2.attr({\"stroke\":\"#00f\"});",
        ]
    );
}

#[test]
fn path_with_non_finite_coordinates_is_rejected() {
    let canvas = holder();
    let err = canvas
        .path("", &Attrs::new(), |p| {
            p.move_to(f64::INFINITY, f64::NAN).line_to(1.0, 1.0);
        })
        .err()
        .unwrap();
    assert!(matches!(err, RafaError::InvalidPath(_)));
    assert!(canvas.statements().is_empty());
}

#[test]
fn path_data_is_validated() {
    let canvas = holder();
    canvas.path_data("M0 0 L10 10", &Attrs::new()).unwrap();
    let err = canvas.path_data("nonsense", &Attrs::new()).err().unwrap();
    assert!(matches!(err, RafaError::InvalidPath(_)));
    assert_eq!(canvas.statements().len(), 1);
}

// =============================================================================
// SETS
// =============================================================================

#[test]
fn set_pushes_its_members() {
    let canvas = holder();
    let a = canvas.circle(0.0, 0.0, 1.0, &Attrs::new()).unwrap();
    let b = canvas.rect(0.0, 0.0, 1.0, 1.0, None, &Attrs::new()).unwrap();
    let set = canvas.set(&[&a, &b], &Attrs::new().set("fill", "#333")).unwrap();
    assert_eq!(set.kind(), ElementKind::Set);
    let statements = canvas.statements();
    assert_eq!(statements[2], "var rafa_set_4 = _raphael_canvas_1.set();");
    assert_eq!(statements[3], "rafa_set_4.push(rafa_circle_2, rafa_rect_3);");
    assert_eq!(statements[4], "rafa_set_4.attr({\"fill\":\"#333\"});");
}

#[test]
fn empty_set_has_no_push() {
    let canvas = holder();
    canvas.set(&[], &Attrs::new()).unwrap();
    assert_eq!(canvas.statements(), vec!["var rafa_set_2 = _raphael_canvas_1.set();"]);
}

#[test]
fn set_rejects_elements_of_another_canvas() {
    let first = holder();
    let second = holder();
    let stray = second.circle(0.0, 0.0, 1.0, &Attrs::new().id("stray")).unwrap();
    let err = first.set(&[&stray], &Attrs::new()).err().unwrap();
    assert!(matches!(err, RafaError::ForeignElement { ref element } if element == "stray"));
    assert!(first.statements().is_empty());
}

// =============================================================================
// OUTPUT
// =============================================================================

#[test]
fn script_starts_with_the_paper() {
    let canvas = holder();
    canvas.push("console.log(1);");
    assert_eq!(
        canvas.to_script(),
        "var _raphael_canvas_1 = new Raphael(\"holder\", 640, 480);\nconsole.log(1);"
    );
}

#[test]
fn javascript_tag_wraps_in_cdata() {
    let canvas = holder();
    let tag = canvas.javascript_tag();
    assert!(tag.starts_with("<script type=\"text/javascript\">\n//<![CDATA[\nvar _raphael_canvas_1"));
    assert!(tag.ends_with("\n//]]>\n</script>"));
}

#[test]
fn canvas_helper_returns_the_tag() {
    let tag = canvas(CanvasTarget::container("holder", 100, 100), |c| {
        c.circle(1.0, 2.0, 3.0, &Attrs::new().id("dot"))?;
        Ok(())
    })
    .unwrap();
    assert!(tag.contains("var dot = "));
    assert!(tag.contains(".circle(1, 2, 3);"));
}

#[test]
fn canvas_helper_propagates_errors() {
    let result = canvas(CanvasTarget::container("holder", 100, 100), |c| {
        c.circle(1.0, 2.0, 3.0, &Attrs::new().id("1bad"))?;
        Ok(())
    });
    assert!(matches!(result, Err(RafaError::InvalidIdentifier(_))));
}

#[test]
fn escape_html_covers_markup_characters() {
    assert_eq!(escape_html(r#"a"b<c>&'d"#), "a&quot;b&lt;c&gt;&amp;&#39;d");
    assert_eq!(escape_html("holder"), "holder");
}
