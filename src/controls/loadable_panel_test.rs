use super::*;
use crate::context::render_to_string;

struct OrdersViewModel;

fn content(_ctx: &mut RequestContext, container: &mut HtmlElement) {
    container.add_text("content goes here");
}

fn progress(_ctx: &mut RequestContext, container: &mut HtmlElement) {
    let mut spinner = HtmlElement::new("div");
    spinner.set_attribute("class", "spin-spinner");
    container.add_child(Node::Element(spinner));
}

fn panel(with_progress: bool, hide: bool) -> LoadablePanel {
    let mut panel = LoadablePanel::new(content, CommandBinding::new("orders:load"))
        .hide_until_loaded(hide)
        .with_data_context::<OrdersViewModel>();
    if with_progress {
        panel = panel.with_progress_template(progress);
    }
    panel
}

#[test]
fn child_structure_matrix() {
    for with_progress in [false, true] {
        for hide in [false, true] {
            let mut p = panel(with_progress, hide);
            let mut ctx = RequestContext::new();
            p.on_init(&mut ctx);

            let children: Vec<&HtmlElement> = p.element().child_elements().collect();
            let expected = if with_progress { 2 } else { 1 };
            assert_eq!(children.len(), expected, "progress={with_progress} hide={hide}");

            // Content container is always the last child.
            let content_container = children.last().expect("content container");
            if hide {
                assert_eq!(content_container.attribute("style"), Some("display:none;"));
            } else {
                assert_eq!(content_container.attribute("style"), None);
            }

            if with_progress {
                let progress_container = children[0];
                assert_eq!(progress_container.data_context(), p.element().data_context());
                assert!(progress_container.data_context().expect("context").contains("OrdersViewModel"));
            }
        }
    }
}

#[test]
fn descriptor_contains_progress_flag_iff_progress_template_present() {
    let with = panel(true, false).control_binding();
    assert_eq!(with.get("progressElement"), Some("true"));

    let without = panel(false, false).control_binding();
    assert_eq!(without.get("progressElement"), None);
}

#[test]
fn descriptor_contains_loading_items_iff_binding_exists() {
    let bare = panel(false, false).control_binding();
    assert_eq!(bare.get("loadingItems"), None);

    let bound = panel(false, false)
        .with_loading_items(ValueBinding::new("LoadingItems"))
        .control_binding();
    assert_eq!(bound.get("loadingItems"), Some("LoadingItems"));
}

#[test]
fn descriptor_always_contains_the_load_function() {
    let binding = panel(false, false).control_binding();
    let load = binding.get("load").expect("load entry");
    assert!(load.contains("lzp.postback(\"orders:load\",$element,ar)"));
    assert!(load.contains("window.setTimeout"));
    assert_eq!(binding.entries()[0].0, "load");
}

#[test]
fn rendered_markup_carries_the_binding_attribute_and_children() {
    let mut p = panel(true, true)
        .with_loading_items(ValueBinding::new("LoadingItems"))
        .with_attribute("id", "orders-panel");
    let mut ctx = RequestContext::new();

    let html = render_to_string(&mut p, &mut ctx).expect("render");

    assert!(html.starts_with("<div id=\"orders-panel\" data-bind=\"lzp-loadable-panel: {"));
    assert!(html.contains("progressElement: true"));
    assert!(html.contains("loadingItems: LoadingItems"));
    // Attribute escaping applies to the generated script's quotes.
    assert!(html.contains("&quot;orders:load&quot;"));
    assert!(html.contains("style=\"display:none;\""));
    assert!(html.contains("content goes here"));
    assert!(html.contains("class=\"spin-spinner\""));
    assert!(html.ends_with("</div>"));
}

#[test]
fn pre_render_declares_the_integration_script() {
    let mut p = panel(false, false);
    let mut ctx = RequestContext::new();
    p.on_init(&mut ctx);
    p.on_pre_render(&mut ctx);

    assert_eq!(ctx.resource_manager.required(), [JAVASCRIPT_RESOURCE_NAME]);
}

#[test]
fn children_remain_attached_after_render() {
    let mut p = panel(true, false);
    let mut ctx = RequestContext::new();
    let _ = render_to_string(&mut p, &mut ctx).expect("render");

    assert_eq!(p.element().child_elements().count(), 2);
}
