use super::*;
use rafa::UidStrategy;

fn config() -> RafaConfig {
    RafaConfig::default().with_uid(UidStrategy::Sequential)
}

#[test]
fn html_page_escapes_the_container_id() {
    let canvas = Canvas::with_config(CanvasTarget::container("a\"b", 10, 10), &config()).unwrap();
    let page = html_page(&canvas, &config());
    assert!(page.contains("<div id=\"a&quot;b\"></div>"));
    assert!(page.contains("new Raphael(\"a\\\"b\", 10, 10);"));
}

#[test]
fn html_page_without_container_has_no_holder() {
    let canvas = Canvas::with_config(CanvasTarget::position(0, 0, 10, 10), &config()).unwrap();
    let page = html_page(&canvas, &config());
    assert!(!page.contains("<div"));
    assert!(page.contains("src=\"raphael-1.3.1.min.js\""));
    assert!(page.ends_with("</body>\n</html>"));
}
