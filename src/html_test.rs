use super::*;

#[test]
fn set_attribute_upserts_in_place() {
    let mut el = HtmlElement::new("div");
    el.set_attribute("class", "a");
    el.set_attribute("id", "x");
    el.set_attribute("class", "b");

    assert_eq!(el.attribute("class"), Some("b"));
    assert_eq!(el.attributes().len(), 2);
    assert_eq!(el.attributes()[0].0, "class");
}

#[test]
fn data_context_records_type_name() {
    struct OrdersViewModel;

    let mut el = HtmlElement::new("div");
    assert_eq!(el.data_context(), None);
    el.set_data_context::<OrdersViewModel>();
    assert!(el.data_context().expect("data context").contains("OrdersViewModel"));
}

#[test]
fn render_nested_tree() {
    let mut root = HtmlElement::new("div");
    root.set_attribute("class", "outer");
    let mut inner = HtmlElement::new("span");
    inner.add_text("hi");
    root.add_child(Node::Element(inner));

    let mut writer = HtmlWriter::new();
    root.render(&mut writer).expect("render");
    let html = writer.into_string().expect("balanced");
    assert_eq!(html, "<div class=\"outer\"><span>hi</span></div>");
}

#[test]
fn child_elements_skips_text_nodes() {
    let mut root = HtmlElement::new("div");
    root.add_text("before");
    root.add_child(Node::Element(HtmlElement::new("p")));
    root.add_text("after");

    let tags: Vec<&str> = root.child_elements().map(HtmlElement::tag).collect();
    assert_eq!(tags, vec!["p"]);
    assert_eq!(root.children().len(), 3);
}

#[test]
fn pending_attributes_apply_to_next_tag_only() {
    let mut writer = HtmlWriter::new();
    writer.add_attribute("id", "first");
    writer.render_begin_tag("div");
    writer.render_begin_tag("span");
    writer.render_end_tag().expect("close span");
    writer.render_end_tag().expect("close div");

    let html = writer.into_string().expect("balanced");
    assert_eq!(html, "<div id=\"first\"><span></span></div>");
}

#[test]
fn add_attribute_replaces_queued_value() {
    let mut writer = HtmlWriter::new();
    writer.add_attribute("style", "display:none;");
    writer.add_attribute("style", "color:red;");
    writer.render_begin_tag("div");
    writer.render_end_tag().expect("close");

    let html = writer.into_string().expect("balanced");
    assert_eq!(html, "<div style=\"color:red;\"></div>");
}

#[test]
fn attribute_values_are_escaped() {
    let mut writer = HtmlWriter::new();
    writer.add_attribute("data-bind", "load: \"a\" & <b>");
    writer.render_begin_tag("div");
    writer.render_end_tag().expect("close");

    let html = writer.into_string().expect("balanced");
    assert_eq!(html, "<div data-bind=\"load: &quot;a&quot; &amp; &lt;b>\"></div>");
}

#[test]
fn text_content_is_escaped() {
    let mut writer = HtmlWriter::new();
    writer.render_begin_tag("p");
    writer.write_text("1 < 2 && 3 > 2");
    writer.render_end_tag().expect("close");

    let html = writer.into_string().expect("balanced");
    assert_eq!(html, "<p>1 &lt; 2 &amp;&amp; 3 &gt; 2</p>");
}

#[test]
fn into_string_rejects_unclosed_tag() {
    let mut writer = HtmlWriter::new();
    writer.render_begin_tag("div");
    let err = writer.into_string().expect_err("should be unbalanced");
    assert!(matches!(err, HtmlError::UnclosedTag(tag) if tag == "div"));
}

#[test]
fn render_end_tag_without_open_tag_fails() {
    let mut writer = HtmlWriter::new();
    let err = writer.render_end_tag().expect_err("nothing open");
    assert!(matches!(err, HtmlError::NoOpenTag));
}
