use crate::constants::{COLLAPSED_CLASS, ICON_COLLAPSED, ICON_EXPANDED, INFO_BOX_ID, INFO_ICON_ID};
use web_sys as web;

#[inline]
pub fn icon_text(collapsed: bool) -> &'static str {
    if collapsed {
        ICON_COLLAPSED
    } else {
        ICON_EXPANDED
    }
}

#[inline]
pub fn is_collapsed(document: &web::Document) -> bool {
    document
        .get_element_by_id(INFO_BOX_ID)
        .map(|el| el.class_list().contains(COLLAPSED_CLASS))
        .unwrap_or(false)
}

/// Collapse or expand the instructions box and keep its +/− icon in sync.
pub fn toggle(document: &web::Document) {
    let Some(info) = document.get_element_by_id(INFO_BOX_ID) else {
        return;
    };
    let _ = info.class_list().toggle(COLLAPSED_CLASS);
    let collapsed = is_collapsed(document);
    if let Some(icon) = document.get_element_by_id(INFO_ICON_ID) {
        icon.set_text_content(Some(icon_text(collapsed)));
    }
    log::debug!("[ui] info box collapsed={}", collapsed);
}
