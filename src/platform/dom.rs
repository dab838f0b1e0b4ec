//! DOM handles and repainting
//!
//! Every anchor is optional. A page that leaves one out still runs; that part
//! of the view is simply not drawn.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use crate::view::Frame;

/// Element ids the page is expected to provide
pub mod ids {
    pub const PLANK: &str = "seesaw-plank";
    pub const OBJECTS_LAYER: &str = "objects-layer";
    pub const LEFT_WEIGHT: &str = "left-weight";
    pub const RIGHT_WEIGHT: &str = "right-weight";
    pub const TILT_ANGLE: &str = "tilt-angle";
    pub const NEXT_WEIGHT: &str = "next-weight";
    pub const HISTORY_LOG: &str = "history-log";
    pub const RESET_BUTTON: &str = "reset-btn";
}

pub struct DomRefs {
    document: Document,
    pub plank: Option<HtmlElement>,
    pub objects_layer: Option<Element>,
    pub left_weight: Option<Element>,
    pub right_weight: Option<Element>,
    pub tilt_angle: Option<Element>,
    pub next_weight: Option<Element>,
    pub history_log: Option<Element>,
    pub reset_button: Option<Element>,
}

impl DomRefs {
    pub fn lookup(document: &Document) -> Self {
        Self {
            document: document.clone(),
            plank: find(document, ids::PLANK).and_then(|el| el.dyn_into::<HtmlElement>().ok()),
            objects_layer: find(document, ids::OBJECTS_LAYER),
            left_weight: find(document, ids::LEFT_WEIGHT),
            right_weight: find(document, ids::RIGHT_WEIGHT),
            tilt_angle: find(document, ids::TILT_ANGLE),
            next_weight: find(document, ids::NEXT_WEIGHT),
            history_log: find(document, ids::HISTORY_LOG),
            reset_button: find(document, ids::RESET_BUTTON),
        }
    }

    /// Copy a frame onto the page
    pub fn apply(&self, frame: &Frame) {
        if let Err(e) = self.render_tilt(frame) {
            log::warn!("Tilt render failed: {:?}", e);
        }
        if let Err(e) = self.render_objects(frame) {
            log::warn!("Object render failed: {:?}", e);
        }
        self.render_stats(frame);
        if let Err(e) = self.render_history(frame) {
            log::warn!("History render failed: {:?}", e);
        }
    }

    fn render_tilt(&self, frame: &Frame) -> Result<(), JsValue> {
        let Some(plank) = &self.plank else {
            return Ok(());
        };
        plank
            .style()
            .set_property("transform", &frame.plank_transform())
    }

    fn render_objects(&self, frame: &Frame) -> Result<(), JsValue> {
        let Some(layer) = &self.objects_layer else {
            return Ok(());
        };
        layer.set_inner_html("");

        let fragment = self.document.create_document_fragment();
        for marker in &frame.markers {
            let el: HtmlElement = self.document.create_element("div")?.dyn_into()?;
            el.set_class_name(marker.class_name());
            el.style()
                .set_property("left", &format!("{}px", marker.left_px))?;
            el.set_text_content(Some(&marker.label()));
            fragment.append_child(&el)?;
        }
        layer.append_child(&fragment)?;
        Ok(())
    }

    fn render_stats(&self, frame: &Frame) {
        let stats = &frame.stats;
        set_text(self.left_weight.as_ref(), &stats.left_text());
        set_text(self.right_weight.as_ref(), &stats.right_text());
        set_text(self.tilt_angle.as_ref(), &stats.tilt_text());
        set_text(self.next_weight.as_ref(), &stats.next_weight_text());
    }

    fn render_history(&self, frame: &Frame) -> Result<(), JsValue> {
        let Some(log_el) = &self.history_log else {
            return Ok(());
        };
        log_el.set_inner_html("");

        let fragment = self.document.create_document_fragment();
        for line in &frame.history {
            let item = self.document.create_element("li")?;
            item.set_class_name("history__item");
            item.set_text_content(Some(line));
            fragment.append_child(&item)?;
        }
        log_el.append_child(&fragment)?;
        Ok(())
    }
}

fn find(document: &Document, id: &str) -> Option<Element> {
    let el = document.get_element_by_id(id);
    if el.is_none() {
        log::warn!("Element #{} not found, skipping it", id);
    }
    el
}

fn set_text(el: Option<&Element>, text: &str) {
    if let Some(el) = el {
        el.set_text_content(Some(text));
    }
}
