use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};

use super::geometry::ElemRect;
use crate::config;

const PULSE_MS: u32 = 150;
const GLIDE_MS: u32 = 400;
const HIDE_MS: u32 = 300;

const PULSE_SCALE: f64 = 1.02;
const TRACK_SCALE: f64 = 1.01;
const HIDE_SCALE: f64 = 0.8;
const WOBBLE_PX: f64 = 3.0;

const DATA_ID_ATTR: &str = "data-follower-id";

pub type TargetId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Entering,
    Tracking,
    Transitioning,
    Leaving,
}

/// Transition timing the follower element runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionMode {
    /// Geometry lands instantly; only opacity and transform ease.
    Enter,
    /// The glide between two buttons.
    Glide,
    /// Resting curve for wobble and fade.
    Default,
}

impl TransitionMode {
    pub fn css(&self) -> &'static str {
        match self {
            TransitionMode::Enter => "transform 0.15s ease-out, opacity 0.2s ease-out",
            TransitionMode::Glide => "all 0.4s cubic-bezier(0.23, 1, 0.32, 1)",
            TransitionMode::Default => "all 0.6s cubic-bezier(0.23, 1, 0.32, 1)",
        }
    }
}

/// One inline-style write on the follower element.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleOp {
    Rect(ElemRect),
    Radius(String),
    Opacity(f64),
    Transform { scale: f64, translate: (f64, f64) },
    Transition(TransitionMode),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    Pulse,
    GlideSettle,
    HideSettle,
}

/// Asks the DOM side to feed `on_timer(kind, token)` back in after `delay_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerReq {
    pub kind: TimerKind,
    pub token: u64,
    pub delay_ms: u32,
}

#[derive(Debug, Default)]
pub struct Effects {
    pub ops: Vec<StyleOp>,
    pub timers: Vec<TimerReq>,
}

/// Measured geometry of the element an event refers to.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetGeom {
    pub id: TargetId,
    pub rect: ElemRect,
    pub radius: String,
}

/// State machine behind the shared highlight element. Pure: events go in,
/// style writes and timer requests come out, so every transition is
/// checkable without a DOM.
///
/// Timers are superseded by token, not cancelled: each schedule takes a
/// fresh token and an expired timer whose token no longer matches is a
/// no-op. A new enter therefore invalidates any pending hide from a
/// previous leave.
pub struct FollowerCore {
    phase: Phase,
    target: Option<TargetId>,
    next_token: u64,
    pulse_token: Option<u64>,
    glide_token: Option<u64>,
    hide_token: Option<u64>,
}

impl FollowerCore {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            target: None,
            next_token: 0,
            pulse_token: None,
            glide_token: None,
            hide_token: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn target(&self) -> Option<TargetId> {
        self.target
    }

    /// True while the pointer is inside some interactive element.
    pub fn is_active(&self) -> bool {
        matches!(
            self.phase,
            Phase::Entering | Phase::Tracking | Phase::Transitioning
        )
    }

    fn issue_token(&mut self) -> u64 {
        self.next_token += 1;
        self.next_token
    }

    pub fn on_enter(&mut self, target: TargetGeom) -> Effects {
        if target.rect.is_degenerate() {
            return Effects::default();
        }
        // A glide already heading for this element keeps its geometry;
        // re-snapping would cut the animation short. Re-pulse only.
        if self.phase == Phase::Transitioning && self.target == Some(target.id) {
            let token = self.issue_token();
            self.pulse_token = Some(token);
            return Effects {
                ops: vec![
                    StyleOp::Opacity(1.0),
                    StyleOp::Transform {
                        scale: PULSE_SCALE,
                        translate: (0.0, 0.0),
                    },
                ],
                timers: vec![TimerReq {
                    kind: TimerKind::Pulse,
                    token,
                    delay_ms: PULSE_MS,
                }],
            };
        }
        self.phase = Phase::Entering;
        self.target = Some(target.id);
        self.glide_token = None;
        self.hide_token = None;
        let token = self.issue_token();
        self.pulse_token = Some(token);
        Effects {
            ops: vec![
                StyleOp::Transition(TransitionMode::Enter),
                StyleOp::Rect(target.rect),
                StyleOp::Radius(target.radius),
                StyleOp::Opacity(1.0),
                StyleOp::Transform {
                    scale: PULSE_SCALE,
                    translate: (0.0, 0.0),
                },
            ],
            timers: vec![TimerReq {
                kind: TimerKind::Pulse,
                token,
                delay_ms: PULSE_MS,
            }],
        }
    }

    pub fn on_move(&mut self, id: TargetId, rect: ElemRect, pointer: (f64, f64)) -> Effects {
        // Guard against events from an element the follower has already left.
        if self.target != Some(id) || !self.is_active() {
            return Effects::default();
        }
        if rect.is_degenerate() {
            return Effects::default();
        }
        if self.phase != Phase::Transitioning {
            self.phase = Phase::Tracking;
        }
        let (nx, ny) = rect.normalized_offset(pointer.0, pointer.1);
        Effects {
            ops: vec![StyleOp::Transform {
                scale: TRACK_SCALE,
                translate: (nx * WOBBLE_PX, ny * WOBBLE_PX),
            }],
            timers: Vec::new(),
        }
    }

    pub fn on_leave(&mut self, id: TargetId, related: Option<TargetGeom>) -> Effects {
        if self.target != Some(id) {
            return Effects::default();
        }
        match related {
            Some(next) if !next.rect.is_degenerate() => {
                self.phase = Phase::Transitioning;
                self.target = Some(next.id);
                self.pulse_token = None;
                let token = self.issue_token();
                self.glide_token = Some(token);
                Effects {
                    ops: vec![
                        StyleOp::Transition(TransitionMode::Glide),
                        StyleOp::Rect(next.rect),
                        StyleOp::Radius(next.radius),
                    ],
                    timers: vec![TimerReq {
                        kind: TimerKind::GlideSettle,
                        token,
                        delay_ms: GLIDE_MS,
                    }],
                }
            }
            _ => {
                self.phase = Phase::Leaving;
                self.pulse_token = None;
                self.glide_token = None;
                let token = self.issue_token();
                self.hide_token = Some(token);
                Effects {
                    ops: vec![
                        StyleOp::Opacity(0.0),
                        StyleOp::Transform {
                            scale: HIDE_SCALE,
                            translate: (0.0, 0.0),
                        },
                    ],
                    timers: vec![TimerReq {
                        kind: TimerKind::HideSettle,
                        token,
                        delay_ms: HIDE_MS,
                    }],
                }
            }
        }
    }

    pub fn on_timer(&mut self, kind: TimerKind, token: u64) -> Effects {
        let expected = match kind {
            TimerKind::Pulse => &mut self.pulse_token,
            TimerKind::GlideSettle => &mut self.glide_token,
            TimerKind::HideSettle => &mut self.hide_token,
        };
        if *expected != Some(token) {
            return Effects::default();
        }
        *expected = None;
        match kind {
            TimerKind::Pulse => {
                if self.phase == Phase::Entering {
                    self.phase = Phase::Tracking;
                }
                let mut ops = vec![StyleOp::Transform {
                    scale: 1.0,
                    translate: (0.0, 0.0),
                }];
                // Mid-glide the 400ms curve stays in charge until its own settle.
                if self.phase != Phase::Transitioning {
                    ops.push(StyleOp::Transition(TransitionMode::Default));
                }
                Effects {
                    ops,
                    timers: Vec::new(),
                }
            }
            TimerKind::GlideSettle => {
                if self.phase == Phase::Transitioning {
                    self.phase = Phase::Tracking;
                }
                Effects {
                    ops: vec![StyleOp::Transition(TransitionMode::Default)],
                    timers: Vec::new(),
                }
            }
            TimerKind::HideSettle => {
                self.phase = Phase::Idle;
                self.target = None;
                Effects {
                    // Scale back up while invisible so the next enter starts clean.
                    ops: vec![StyleOp::Transform {
                        scale: 1.0,
                        translate: (0.0, 0.0),
                    }],
                    timers: Vec::new(),
                }
            }
        }
    }
}

impl Default for FollowerCore {
    fn default() -> Self {
        Self::new()
    }
}

/// The DOM side: owns the single floating highlight element and routes
/// pointer events on the page's interactive elements into [`FollowerCore`].
pub struct LiquidGlass {
    follower: HtmlElement,
    _listeners: Vec<EventListener>,
}

impl LiquidGlass {
    /// Wires the follower to every interactive element currently in the page.
    /// Returns `None` when there is nothing to attach to.
    pub fn attach() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let follower: HtmlElement = document.create_element("div").ok()?.dyn_into().ok()?;
        follower.set_class_name("liquid-follower");
        document.body()?.append_child(&follower).ok()?;

        let core = Rc::new(RefCell::new(FollowerCore::new()));
        let nodes = document.query_selector_all(config::INTERACTIVE_SELECTOR).ok()?;
        let mut listeners = Vec::new();
        let mut id: TargetId = 0;
        for i in 0..nodes.length() {
            let el = match nodes.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                Some(el) => el,
                None => continue,
            };
            let _ = el.set_attribute(DATA_ID_ATTR, &id.to_string());

            listeners.push(EventListener::new(&el, "mouseenter", {
                let core = core.clone();
                let follower = follower.clone();
                let el = el.clone();
                move |_| {
                    if let Some(geom) = measure(&el, id) {
                        let fx = core.borrow_mut().on_enter(geom);
                        run_effects(&core, &follower, fx);
                    }
                }
            }));

            listeners.push(EventListener::new(&el, "mousemove", {
                let core = core.clone();
                let follower = follower.clone();
                let el = el.clone();
                move |event| {
                    let pointer = match event.dyn_ref::<MouseEvent>() {
                        Some(e) => (e.client_x() as f64, e.client_y() as f64),
                        None => return,
                    };
                    let r = el.get_bounding_client_rect();
                    let rect = ElemRect::new(r.left(), r.top(), r.width(), r.height());
                    let fx = core.borrow_mut().on_move(id, rect, pointer);
                    run_effects(&core, &follower, fx);
                }
            }));

            listeners.push(EventListener::new(&el, "mouseleave", {
                let core = core.clone();
                let follower = follower.clone();
                move |event| {
                    let related = event
                        .dyn_ref::<MouseEvent>()
                        .and_then(|e| e.related_target())
                        .and_then(|t| t.dyn_into::<Element>().ok())
                        .and_then(related_target_geom);
                    let fx = core.borrow_mut().on_leave(id, related);
                    run_effects(&core, &follower, fx);
                }
            }));

            id += 1;
        }

        if listeners.is_empty() {
            follower.remove();
            return None;
        }
        Some(Self {
            follower,
            _listeners: listeners,
        })
    }
}

impl Drop for LiquidGlass {
    fn drop(&mut self) {
        self.follower.remove();
    }
}

fn measure(el: &HtmlElement, id: TargetId) -> Option<TargetGeom> {
    let r = el.get_bounding_client_rect();
    let rect = ElemRect::new(r.left(), r.top(), r.width(), r.height());
    if rect.is_degenerate() {
        return None;
    }
    let radius = web_sys::window()?
        .get_computed_style(el)
        .ok()??
        .get_property_value("border-radius")
        .ok()?;
    Some(TargetGeom { id, rect, radius })
}

/// Resolves the element the pointer moved onto back to a wired target, if
/// it is one. The pointer may land on a child of the button.
fn related_target_geom(el: Element) -> Option<TargetGeom> {
    let hit = el.closest(config::INTERACTIVE_SELECTOR).ok()??;
    let id = hit.get_attribute(DATA_ID_ATTR)?.parse::<TargetId>().ok()?;
    let html: HtmlElement = hit.dyn_into().ok()?;
    measure(&html, id)
}

fn run_effects(core: &Rc<RefCell<FollowerCore>>, follower: &HtmlElement, fx: Effects) {
    apply_ops(follower, &fx.ops);
    for req in fx.timers {
        schedule(core.clone(), follower.clone(), req);
    }
}

// Token checks make stale timeouts no-ops, so fire-and-forget is safe here.
fn schedule(core: Rc<RefCell<FollowerCore>>, follower: HtmlElement, req: TimerReq) {
    Timeout::new(req.delay_ms, move || {
        let fx = core.borrow_mut().on_timer(req.kind, req.token);
        run_effects(&core, &follower, fx);
    })
    .forget();
}

fn apply_ops(follower: &HtmlElement, ops: &[StyleOp]) {
    let style = follower.style();
    for op in ops {
        match op {
            StyleOp::Rect(rect) => {
                let _ = style.set_property("left", &format!("{}px", rect.left));
                let _ = style.set_property("top", &format!("{}px", rect.top));
                let _ = style.set_property("width", &format!("{}px", rect.width));
                let _ = style.set_property("height", &format!("{}px", rect.height));
            }
            StyleOp::Radius(radius) => {
                let _ = style.set_property("border-radius", radius);
            }
            StyleOp::Opacity(opacity) => {
                let _ = style.set_property("opacity", &opacity.to_string());
            }
            StyleOp::Transform { scale, translate } => {
                let _ = style.set_property(
                    "transform",
                    &format!(
                        "translate({}px, {}px) scale({})",
                        translate.0, translate.1, scale
                    ),
                );
            }
            StyleOp::Transition(mode) => {
                let _ = style.set_property("transition", mode.css());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect_a() -> ElemRect {
        ElemRect::new(0.0, 0.0, 100.0, 40.0)
    }

    fn rect_b() -> ElemRect {
        ElemRect::new(120.0, 0.0, 100.0, 40.0)
    }

    fn target(id: TargetId, rect: ElemRect) -> TargetGeom {
        TargetGeom {
            id,
            rect,
            radius: "24px".to_string(),
        }
    }

    fn last_rect(ops: &[StyleOp]) -> Option<ElemRect> {
        ops.iter().rev().find_map(|op| match op {
            StyleOp::Rect(r) => Some(*r),
            _ => None,
        })
    }

    fn has_opacity(ops: &[StyleOp], value: f64) -> bool {
        ops.iter()
            .any(|op| matches!(op, StyleOp::Opacity(o) if *o == value))
    }

    fn last_transform(ops: &[StyleOp]) -> Option<(f64, (f64, f64))> {
        ops.iter().rev().find_map(|op| match op {
            StyleOp::Transform { scale, translate } => Some((*scale, *translate)),
            _ => None,
        })
    }

    #[test]
    fn follower_tracks_a_single_button() {
        let mut core = FollowerCore::new();
        assert!(!core.is_active());
        assert_eq!(core.target(), None);

        let fx = core.on_enter(target(0, rect_a()));
        assert_eq!(last_rect(&fx.ops), Some(rect_a()));
        assert!(has_opacity(&fx.ops, 1.0));
        assert_eq!(last_transform(&fx.ops), Some((PULSE_SCALE, (0.0, 0.0))));
        assert_eq!(fx.timers.len(), 1);
        assert_eq!(fx.timers[0].kind, TimerKind::Pulse);
        assert_eq!(fx.timers[0].delay_ms, PULSE_MS);
        assert!(core.is_active());

        // Pointer at the element center wobbles to the neutral transform.
        let fx = core.on_move(0, rect_a(), (50.0, 20.0));
        assert_eq!(last_transform(&fx.ops), Some((TRACK_SCALE, (0.0, 0.0))));
        assert!(core.is_active());
        assert_eq!(core.phase(), Phase::Tracking);

        let fx = core.on_leave(0, None);
        assert!(has_opacity(&fx.ops, 0.0));
        assert!(!core.is_active());
        let settle = fx.timers[0];
        assert_eq!(settle.kind, TimerKind::HideSettle);
        assert_eq!(settle.delay_ms, HIDE_MS);

        let fx = core.on_timer(settle.kind, settle.token);
        assert_eq!(last_transform(&fx.ops), Some((1.0, (0.0, 0.0))));
        assert_eq!(core.target(), None);
        assert!(!core.is_active());
        assert_eq!(core.phase(), Phase::Idle);
    }

    #[test]
    fn wobble_is_proportional_to_cursor_offset() {
        let mut core = FollowerCore::new();
        core.on_enter(target(0, rect_a()));
        // Right edge, vertical center: full positive x offset.
        let fx = core.on_move(0, rect_a(), (100.0, 20.0));
        assert_eq!(last_transform(&fx.ops), Some((TRACK_SCALE, (WOBBLE_PX, 0.0))));
    }

    #[test]
    fn glide_between_adjacent_buttons_keeps_opacity() {
        let mut core = FollowerCore::new();
        let mut all_ops = Vec::new();

        let fx = core.on_enter(target(0, rect_a()));
        all_ops.extend(fx.ops);

        let fx = core.on_leave(0, Some(target(1, rect_b())));
        assert_eq!(last_rect(&fx.ops), Some(rect_b()));
        assert_eq!(core.phase(), Phase::Transitioning);
        assert!(core.is_active());
        let settle = fx.timers[0];
        assert_eq!(settle.kind, TimerKind::GlideSettle);
        assert_eq!(settle.delay_ms, GLIDE_MS);
        all_ops.extend(fx.ops);

        let fx = core.on_timer(settle.kind, settle.token);
        all_ops.extend(fx.ops);

        // The direct hand-off never passes through the fade-out path.
        assert!(!has_opacity(&all_ops, 0.0));
        assert_eq!(core.target(), Some(1));
        assert_eq!(core.phase(), Phase::Tracking);
        assert!(all_ops
            .iter()
            .any(|op| *op == StyleOp::Transition(TransitionMode::Default)));
    }

    #[test]
    fn leave_to_empty_space_fades_and_resets() {
        let mut core = FollowerCore::new();
        core.on_enter(target(0, rect_a()));
        core.on_move(0, rect_a(), (10.0, 10.0));

        let fx = core.on_leave(0, None);
        assert!(has_opacity(&fx.ops, 0.0));
        assert_eq!(last_transform(&fx.ops), Some((HIDE_SCALE, (0.0, 0.0))));
        assert_eq!(core.target(), Some(0)); // cleared only at settle

        let settle = fx.timers[0];
        let fx = core.on_timer(settle.kind, settle.token);
        assert_eq!(last_transform(&fx.ops), Some((1.0, (0.0, 0.0))));
        assert_eq!(core.target(), None);
        assert!(!core.is_active());
    }

    #[test]
    fn stale_move_is_ignored() {
        let mut core = FollowerCore::new();
        core.on_enter(target(0, rect_a()));
        let fx = core.on_move(1, rect_b(), (130.0, 20.0));
        assert!(fx.ops.is_empty());
        assert!(fx.timers.is_empty());
        assert_eq!(core.target(), Some(0));
    }

    #[test]
    fn move_after_leave_settle_is_ignored() {
        let mut core = FollowerCore::new();
        core.on_enter(target(0, rect_a()));
        let fx = core.on_leave(0, None);
        let settle = fx.timers[0];
        core.on_timer(settle.kind, settle.token);

        let fx = core.on_move(0, rect_a(), (50.0, 20.0));
        assert!(fx.ops.is_empty());
    }

    #[test]
    fn superseded_hide_timer_is_ignored() {
        let mut core = FollowerCore::new();
        core.on_enter(target(0, rect_a()));
        let fx = core.on_leave(0, None);
        let stale = fx.timers[0];

        // Pointer comes back before the hide settles.
        core.on_enter(target(0, rect_a()));
        assert!(core.is_active());

        let fx = core.on_timer(stale.kind, stale.token);
        assert!(fx.ops.is_empty());
        assert_eq!(core.target(), Some(0));
        assert!(core.is_active());
    }

    #[test]
    fn enter_on_glide_destination_keeps_geometry() {
        let mut core = FollowerCore::new();
        core.on_enter(target(0, rect_a()));
        let fx = core.on_leave(0, Some(target(1, rect_b())));
        let glide_settle = fx.timers[0];

        // The browser delivers B's enter while the glide is in flight.
        let fx = core.on_enter(target(1, rect_b()));
        assert_eq!(last_rect(&fx.ops), None);
        assert_eq!(last_transform(&fx.ops), Some((PULSE_SCALE, (0.0, 0.0))));
        assert_eq!(core.phase(), Phase::Transitioning);

        // The pulse settling mid-glide must not clobber the glide curve.
        let pulse = fx.timers[0];
        let fx = core.on_timer(pulse.kind, pulse.token);
        assert!(!fx
            .ops
            .iter()
            .any(|op| matches!(op, StyleOp::Transition(_))));

        let fx = core.on_timer(glide_settle.kind, glide_settle.token);
        assert!(fx
            .ops
            .iter()
            .any(|op| *op == StyleOp::Transition(TransitionMode::Default)));
        assert_eq!(core.phase(), Phase::Tracking);
        assert_eq!(core.target(), Some(1));
    }

    #[test]
    fn degenerate_rect_does_not_activate() {
        let mut core = FollowerCore::new();
        let fx = core.on_enter(target(0, ElemRect::new(0.0, 0.0, 0.0, 0.0)));
        assert!(fx.ops.is_empty());
        assert!(!core.is_active());
    }

    #[test]
    fn entry_snaps_geometry_before_easing_in() {
        let mut core = FollowerCore::new();
        let fx = core.on_enter(target(0, rect_a()));
        // The transition narrows before any geometry write lands.
        assert_eq!(fx.ops[0], StyleOp::Transition(TransitionMode::Enter));

        let pulse = fx.timers[0];
        let fx = core.on_timer(pulse.kind, pulse.token);
        assert!(fx
            .ops
            .iter()
            .any(|op| *op == StyleOp::Transition(TransitionMode::Default)));
        assert_eq!(core.phase(), Phase::Tracking);
    }
}
