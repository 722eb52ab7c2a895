use blob_core::picking::pointer_ndc;
use glam::Vec2;
use web_sys as web;

/// NDC of the pointer relative to the container. Until the first pointer
/// event arrives this holds the far-away sentinel, so the hit test cannot
/// fire spuriously.
#[inline]
pub fn pointer_event_ndc(ev: &web::PointerEvent, container: &web::Element) -> Vec2 {
    let rect = container.get_bounding_client_rect();
    let px = ev.client_x() as f32 - rect.left() as f32;
    let py = ev.client_y() as f32 - rect.top() as f32;
    pointer_ndc(px, py, rect.width() as f32, rect.height() as f32)
}
