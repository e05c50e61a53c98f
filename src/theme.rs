//! Light/dark theme and the strategies used to switch between them.
//!
//! The strategy is picked once per page load by [`select_theme_switch`]:
//! browsers with the View Transitions API get a circular reveal from the
//! toggle button, everything else flips the theme immediately.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Class set on `<html>`; the stylesheet keys dark mode off it.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Center of the element that triggered a theme switch, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RevealOrigin {
    pub x: f64,
    pub y: f64,
}

impl RevealOrigin {
    pub fn from_rect(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            x: left + width / 2.0,
            y: top + height / 2.0,
        }
    }
}

pub const REVEAL_DURATION_MS: f64 = 500.0;
pub const REVEAL_EASING: &str = "ease-in-out";
pub const REVEAL_PSEUDO_ELEMENT: &str = "::view-transition-new(root)";

/// Radius that covers the whole viewport from `origin`.
pub fn reveal_radius(origin: RevealOrigin, viewport_width: f64, viewport_height: f64) -> f64 {
    let dx = origin.x.max(viewport_width - origin.x);
    let dy = origin.y.max(viewport_height - origin.y);
    dx.hypot(dy)
}

/// Start and end `clip-path` values of the reveal animation.
pub fn clip_path_frames(origin: RevealOrigin, radius: f64) -> [String; 2] {
    [
        format!("circle(0px at {}px {}px)", origin.x, origin.y),
        format!("circle({}px at {}px {}px)", radius, origin.x, origin.y),
    ]
}

/// Applies a new theme, optionally dressing the change up.
///
/// `apply` performs the actual state change and is called exactly once.
pub trait ThemeSwitch: Send + Sync {
    fn switch(&self, next: Theme, origin: RevealOrigin, apply: Box<dyn FnOnce(Theme)>);

    fn name(&self) -> &'static str;
}

pub struct ImmediateSwitch;

impl ThemeSwitch for ImmediateSwitch {
    fn switch(&self, next: Theme, _origin: RevealOrigin, apply: Box<dyn FnOnce(Theme)>) {
        apply(next);
    }

    fn name(&self) -> &'static str {
        "immediate"
    }
}

#[cfg(feature = "hydrate")]
pub struct AnimatedTransition;

#[cfg(feature = "hydrate")]
impl ThemeSwitch for AnimatedTransition {
    fn switch(&self, next: Theme, origin: RevealOrigin, apply: Box<dyn FnOnce(Theme)>) {
        leptos::task::spawn_local(view_transition::run(next, origin, apply));
    }

    fn name(&self) -> &'static str {
        "view-transition"
    }
}

/// Probes the environment once and returns the strategy to use for the
/// lifetime of the page.
pub fn select_theme_switch() -> Arc<dyn ThemeSwitch> {
    #[cfg(feature = "hydrate")]
    if view_transition::supported() {
        return Arc::new(AnimatedTransition);
    }
    Arc::new(ImmediateSwitch)
}

#[cfg(feature = "hydrate")]
mod view_transition {
    use std::cell::RefCell;
    use std::rc::Rc;

    use js_sys::{Array, Function, Object, Promise, Reflect};
    use wasm_bindgen::{closure::Closure, JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    use super::*;

    type PendingApply = Rc<RefCell<Option<Box<dyn FnOnce(Theme)>>>>;

    fn document() -> Option<web_sys::Document> {
        web_sys::window().and_then(|w| w.document())
    }

    fn start_fn(document: &web_sys::Document) -> Option<Function> {
        Reflect::get(document, &JsValue::from_str("startViewTransition"))
            .ok()?
            .dyn_into::<Function>()
            .ok()
    }

    pub fn supported() -> bool {
        document().as_ref().and_then(start_fn).is_some()
    }

    fn viewport() -> (f64, f64) {
        let Some(window) = web_sys::window() else {
            return (0.0, 0.0);
        };
        let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        (dim(window.inner_width()), dim(window.inner_height()))
    }

    fn set(target: &Object, key: &str, value: &JsValue) -> Result<(), JsValue> {
        Reflect::set(target, &JsValue::from_str(key), value).map(|_| ())
    }

    async fn reveal(next: Theme, origin: RevealOrigin, pending: PendingApply) -> Result<(), JsValue> {
        let document = document().ok_or_else(|| JsValue::from_str("no document"))?;
        let start = start_fn(&document).ok_or_else(|| JsValue::from_str("no startViewTransition"))?;

        let callback = Closure::once_into_js({
            let pending = pending.clone();
            move || {
                if let Some(apply) = pending.borrow_mut().take() {
                    apply(next);
                }
            }
        });
        let transition = start.call1(&document, &callback)?;
        let ready = Reflect::get(&transition, &JsValue::from_str("ready"))?.dyn_into::<Promise>()?;
        JsFuture::from(ready).await?;

        let (width, height) = viewport();
        let radius = reveal_radius(origin, width, height);
        let [from, to] = clip_path_frames(origin, radius);

        let keyframes = Object::new();
        set(
            &keyframes,
            "clipPath",
            &Array::of2(&JsValue::from_str(&from), &JsValue::from_str(&to)),
        )?;
        let options = Object::new();
        set(&options, "duration", &JsValue::from_f64(REVEAL_DURATION_MS))?;
        set(&options, "easing", &JsValue::from_str(REVEAL_EASING))?;
        set(&options, "pseudoElement", &JsValue::from_str(REVEAL_PSEUDO_ELEMENT))?;

        let root = document
            .document_element()
            .ok_or_else(|| JsValue::from_str("no document element"))?;
        let animate = Reflect::get(&root, &JsValue::from_str("animate"))?.dyn_into::<Function>()?;
        animate.call2(&root, &keyframes, &options)?;
        Ok(())
    }

    pub async fn run(next: Theme, origin: RevealOrigin, apply: Box<dyn FnOnce(Theme)>) {
        let pending: PendingApply = Rc::new(RefCell::new(Some(apply)));
        if let Err(e) = reveal(next, origin, pending.clone()).await {
            log::warn!("theme transition failed: {e:?}");
        }
        // the transition never ran the callback, flip without animation
        if let Some(apply) = pending.borrow_mut().take() {
            apply(next);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_theme_two_cycle() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_theme_serde() {
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
        assert_eq!(serde_json::from_str::<Theme>("\"dark\"").unwrap(), Theme::Dark);
        assert_eq!(Theme::Dark.as_str(), "dark");
    }

    #[test]
    fn test_immediate_switch_cycles() {
        let current = Rc::new(Cell::new(Theme::Light));
        let switch = select_theme_switch();
        for _ in 0..2 {
            let next = current.get().toggled();
            let target = current.clone();
            switch.switch(next, RevealOrigin::default(), Box::new(move |t| target.set(t)));
        }
        assert_eq!(current.get(), Theme::Light);
        assert_eq!(switch.name(), "immediate");
    }

    #[test]
    fn test_reveal_origin_and_radius() {
        let origin = RevealOrigin::from_rect(90.0, 10.0, 20.0, 20.0);
        assert_eq!(origin, RevealOrigin { x: 100.0, y: 20.0 });

        // farthest corner is bottom-right at (400, 320) from (100, 20)
        let r = reveal_radius(origin, 400.0, 320.0);
        assert!((r - 300.0_f64.hypot(300.0)).abs() < 1e-9);

        let centered = reveal_radius(RevealOrigin { x: 50.0, y: 50.0 }, 100.0, 100.0);
        assert!((centered - 50.0_f64.hypot(50.0)).abs() < 1e-9);
    }

    #[test]
    fn test_clip_path_frames() {
        let [from, to] = clip_path_frames(RevealOrigin { x: 12.5, y: 40.0 }, 200.0);
        assert_eq!(from, "circle(0px at 12.5px 40px)");
        assert_eq!(to, "circle(200px at 12.5px 40px)");
    }
}
