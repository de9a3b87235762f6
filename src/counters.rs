//! Stat counters and the per-card border sweep.

use crate::constants::*;
use crate::dom;
use crate::format::locale_integer;
use crate::observe::{observer, ObserverOptions};
use instant::Instant;
use site_core::{
    CountAnimation, CounterAnimator, CounterStart, CounterTarget, Motion, OnceRegistry,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Observed regions that fire once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    Stats,
    Card(usize),
}

pub type Registry = Rc<RefCell<OnceRegistry<Region>>>;

fn motion() -> Motion {
    if dom::prefers_reduced_motion(REDUCED_MOTION_QUERY) {
        Motion::Reduced
    } else {
        Motion::Full
    }
}

fn collect_targets(
    animator: &mut CounterAnimator<web::Element>,
    elements: impl IntoIterator<Item = web::Element>,
) {
    for el in elements {
        let raw = el.get_attribute(TARGET_ATTR);
        animator.push(CounterTarget::from_attribute(el, raw.as_deref()));
    }
}

fn run(started: Vec<(web::Element, CounterStart)>) {
    for (el, start) in started {
        match start {
            CounterStart::Immediate(value) => el.set_text_content(Some(&locale_integer(value))),
            CounterStart::Animate(anim) => animate_count(el, anim),
            CounterStart::Skip => {}
        }
    }
}

/// Count `el` up with its own frame chain; the chain ends on the exact target.
pub fn animate_count(el: web::Element, anim: CountAnimation) {
    let started = Instant::now();
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let frame = anim.sample(started.elapsed());
        el.set_text_content(Some(&locale_integer(frame.value)));
        if frame.done {
            // release the closure once this call returns
            _ = tick_clone.borrow_mut().take();
            return;
        }
        if let Some(cb) = tick_clone.borrow().as_ref() {
            dom::request_frame(cb);
        }
    }) as Box<dyn FnMut()>));
    if let Some(cb) = tick.borrow().as_ref() {
        dom::request_frame(cb);
    }
}

pub fn init_counters(document: &web::Document, registry: &Registry) -> anyhow::Result<()> {
    let nums = dom::query_all(document, COUNTER_SELECTOR);
    if nums.is_empty() {
        log::debug!("[counters] no counters on page");
        return Ok(());
    }

    let mut animator = CounterAnimator::new(motion());
    let Some(stats) = dom::query_one(document, STATS_SELECTOR) else {
        log::debug!("[counters] no {} container, starting now", STATS_SELECTOR);
        collect_targets(&mut animator, nums);
        run(animator.trigger());
        return Ok(());
    };

    collect_targets(&mut animator, dom::query_all_in(&stats, REGION_COUNTER_SELECTOR));
    let animator = Rc::new(RefCell::new(animator));
    registry.borrow_mut().observe(Region::Stats);

    let registry = registry.clone();
    let obs = observer(
        ObserverOptions {
            root_margin: Some(STATS_ROOT_MARGIN),
            threshold: STATS_THRESHOLD,
        },
        move |entry, observer| {
            if !entry.is_intersecting() || !registry.borrow_mut().fire(&Region::Stats) {
                return;
            }
            observer.unobserve(&entry.target());
            let started = animator.borrow_mut().trigger();
            log::info!("[counters] stats visible, starting {} counters", started.len());
            run(started);
            registry.borrow_mut().complete(&Region::Stats);
        },
    )?;
    obs.observe(&stats);
    Ok(())
}

fn supports_has_selector() -> bool {
    let global = js_sys::global();
    let supports = js_sys::Reflect::get(&global, &"CSS".into())
        .ok()
        .filter(|css| css.is_object())
        .and_then(|css| {
            let f = js_sys::Reflect::get(&css, &"supports".into()).ok()?;
            let f = f.dyn_into::<js_sys::Function>().ok()?;
            f.call1(&css, &HAS_SELECTOR_SUPPORT.into()).ok()
        });
    supports.and_then(|v| v.as_bool()).unwrap_or(false)
}

fn restart_sweep(card: &web::Element) {
    let cl = card.class_list();
    _ = cl.remove_1(SWEEP_CLASS);
    // reading layout restarts the CSS animation
    if let Some(h) = card.dyn_ref::<web::HtmlElement>() {
        _ = h.offset_width();
    }
    _ = cl.add_1(SWEEP_CLASS);
}

/// Give each stats card its own one-shot sweep, plus a hover replay where the
/// stylesheet cannot do it with `:has()`.
pub fn arm_card_sweep(document: &web::Document, registry: &Registry) -> anyhow::Result<()> {
    let cards = dom::query_all(document, STAT_CARD_SELECTOR);
    if cards.is_empty() {
        return Ok(());
    }

    for (i, card) in cards.iter().enumerate() {
        let key = Region::Card(i);
        registry.borrow_mut().observe(key);
        let registry = registry.clone();
        let obs = observer(
            ObserverOptions {
                root_margin: None,
                threshold: CARD_THRESHOLD,
            },
            move |entry, observer| {
                if !entry.is_intersecting() || !registry.borrow_mut().fire(&key) {
                    return;
                }
                let target = entry.target();
                _ = target.class_list().add_1(SWEEP_CLASS);
                observer.unobserve(&target);
                registry.borrow_mut().complete(&key);
            },
        )?;
        obs.observe(card);
    }

    if !supports_has_selector() {
        for card in cards {
            let Some(num) = card.query_selector(CARD_NUM_SELECTOR).ok().flatten() else {
                continue;
            };
            dom::add_listener(&num, "mouseenter", move |_: web::Event| restart_sweep(&card));
        }
    }
    Ok(())
}
