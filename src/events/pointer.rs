use site_core::ParticleField;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Feed pointer positions to the particle field. The canvas covers the
/// viewport, so client coordinates are canvas coordinates.
pub fn wire_pointermove(field: Rc<RefCell<ParticleField>>) {
    let Some(window) = web::window() else {
        return;
    };
    crate::dom::add_listener(&window, "pointermove", move |ev: web::PointerEvent| {
        field
            .borrow_mut()
            .set_pointer(ev.client_x() as f32, ev.client_y() as f32);
    });
}
