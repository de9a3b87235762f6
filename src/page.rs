//! Small DOM touches: year stamp, timeline labels, nav highlight, back-to-top.

use crate::constants::*;
use crate::dom;
use crate::observe::{observer, ObserverOptions};
use site_core::{back_to_top_visible, DateRange, NavLinks};
use web_sys as web;

pub fn stamp_year(document: &web::Document) -> anyhow::Result<()> {
    if let Some(el) = document.get_element_by_id(YEAR_ID) {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
    Ok(())
}

/// Mark `YYYY–YYYY` timeline dates as ranges so CSS can put each year on its
/// own line.
pub fn split_timeline_dates(document: &web::Document) -> anyhow::Result<()> {
    for el in dom::query_all(document, TIMELINE_ITEM_SELECTOR) {
        let raw = el.get_attribute(DATE_ATTR).unwrap_or_default();
        match raw.parse::<DateRange>() {
            Ok(range) => {
                _ = el.class_list().add_1(RANGE_CLASS);
                _ = el.set_attribute(FROM_ATTR, &range.from.to_string());
                _ = el.set_attribute(TO_ATTR, &range.to.to_string());
            }
            Err(_) => {
                _ = el.class_list().remove_1(RANGE_CLASS);
                _ = el.remove_attribute(FROM_ATTR);
                _ = el.remove_attribute(TO_ATTR);
            }
        }
    }
    Ok(())
}

pub fn init_nav_highlight(document: &web::Document) -> anyhow::Result<()> {
    let sections = dom::query_all(document, SECTION_SELECTOR);
    let links = dom::query_all(document, NAV_LINK_SELECTOR);
    if sections.is_empty() || links.is_empty() {
        return Ok(());
    }
    let nav = NavLinks::new(links.iter().map(|a| a.get_attribute("href")).collect());

    let obs = observer(
        ObserverOptions {
            root_margin: Some(NAV_ROOT_MARGIN),
            threshold: NAV_THRESHOLD,
        },
        move |entry, _| {
            if !entry.is_intersecting() {
                return;
            }
            let flags = nav.activate(&entry.target().id());
            for (a, on) in links.iter().zip(flags) {
                _ = a.class_list().toggle_with_force(ACTIVE_CLASS, on);
            }
        },
    )?;
    for s in &sections {
        obs.observe(s);
    }
    Ok(())
}

pub fn wire_back_to_top(document: &web::Document) -> anyhow::Result<()> {
    let Some(button) = document.get_element_by_id(TO_TOP_ID) else {
        log::debug!("[page] no #{} button", TO_TOP_ID);
        return Ok(());
    };

    dom::on_window("scroll", move || {
        let y = web::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0);
        _ = button
            .class_list()
            .toggle_with_force(VISIBLE_CLASS, back_to_top_visible(y));
    });

    dom::add_click_listener(document, TO_TOP_ID, || {
        if let Some(w) = web::window() {
            let opts = web::ScrollToOptions::new();
            opts.set_top(0.0);
            opts.set_behavior(web::ScrollBehavior::Smooth);
            w.scroll_to_with_scroll_to_options(&opts);
        }
    });
    Ok(())
}
