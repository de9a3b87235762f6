use crate::dom;
use site_core::ParticleField;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire_resize(canvas: web::HtmlCanvasElement, field: Rc<RefCell<ParticleField>>) {
    dom::on_window("resize", move || {
        let Some((w, h)) = dom::sync_canvas_to_viewport(&canvas) else {
            return;
        };
        if field.borrow_mut().resize(w, h) {
            log::info!(
                "[particles] rebuilt {} particles for {:.0}x{:.0}",
                field.borrow().particles().len(),
                w,
                h
            );
        }
    });
}
