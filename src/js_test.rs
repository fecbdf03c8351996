use super::*;

#[test]
fn numbers_drop_integral_fraction() {
    assert_eq!(format_number(10.0), "10");
    assert_eq!(format_number(-3.0), "-3");
    assert_eq!(format_number(0.5), "0.5");
    assert_eq!(format_number(1.25), "1.25");
}

#[test]
fn numbers_use_js_globals_for_non_finite() {
    assert_eq!(format_number(f64::NAN), "NaN");
    assert_eq!(format_number(f64::INFINITY), "Infinity");
    assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
}

#[test]
fn strings_are_json_quoted() {
    assert_eq!(JsValue::from("hello").to_js(), "\"hello\"");
    assert_eq!(JsValue::from("say \"hi\"\n").to_js(), "\"say \\\"hi\\\"\\n\"");
}

#[test]
fn strings_cannot_close_a_script_element() {
    let js = JsValue::from("</script><script>alert(1)").to_js();
    assert!(!js.contains("</script>"));
    assert!(js.starts_with("\"<\\/script>"));
}

#[test]
fn literals_are_written_verbatim() {
    let value = JsValue::from(js_literal("(new Date()).getSeconds()"));
    assert_eq!(value.to_js(), "(new Date()).getSeconds()");
}

#[test]
fn objects_keep_insertion_order() {
    let value = JsValue::Object(vec![
        ("stroke".to_owned(), "#000".into()),
        ("fill".to_owned(), "#fff".into()),
        ("r".to_owned(), 5.0.into()),
    ]);
    assert_eq!(value.to_js(), "{\"stroke\":\"#000\",\"fill\":\"#fff\",\"r\":5}");
}

#[test]
fn arrays_and_options_serialize() {
    assert_eq!(JsValue::from(vec![1.0, 2.5]).to_js(), "[1,2.5]");
    assert_eq!(JsValue::from(None::<f64>).to_js(), "null");
    assert_eq!(JsValue::from(Some(true)).to_js(), "true");
}

#[test]
fn args_are_comma_separated() {
    let args = js_args(&[JsValue::from("holder"), JsValue::from(640u32), JsValue::from(480u32)]);
    assert_eq!(args, "\"holder\", 640, 480");
}

#[test]
fn json_values_convert() {
    let value = JsValue::from(serde_json::json!({"fill": "#f00", "opacity": 0.5, "hidden": false}));
    let js = value.to_js();
    assert!(js.contains("\"fill\":\"#f00\""));
    assert!(js.contains("\"opacity\":0.5"));
    assert!(js.contains("\"hidden\":false"));
}
