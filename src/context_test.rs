use super::*;

#[derive(Default)]
struct ProbeControl {
    phases: Vec<&'static str>,
}

impl Control for ProbeControl {
    fn on_init(&mut self, _ctx: &mut RequestContext) {
        self.phases.push("init");
    }

    fn on_pre_render(&mut self, ctx: &mut RequestContext) {
        self.phases.push("pre_render");
        ctx.resource_manager.add_required_resource("probe");
    }

    fn render(&self, writer: &mut HtmlWriter, _ctx: &RequestContext) -> Result<(), HtmlError> {
        writer.render_begin_tag("div");
        writer.write_text("probe");
        writer.render_end_tag()
    }
}

#[test]
fn driver_runs_phases_in_order_and_returns_markup() {
    let mut control = ProbeControl::default();
    let mut ctx = RequestContext::new();

    let html = render_to_string(&mut control, &mut ctx).expect("render");

    assert_eq!(control.phases, ["init", "pre_render"]);
    assert_eq!(html, "<div>probe</div>");
    assert_eq!(ctx.resource_manager.required(), ["probe"]);
}

#[test]
fn context_starts_with_no_required_resources() {
    let ctx = RequestContext::new();
    assert!(ctx.resource_manager.required().is_empty());
}
