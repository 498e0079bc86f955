use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::animation::reveal::{start_reveal, ObserveError, RevealConfig, ViewportObserver, Visibility};

/// Browser `IntersectionObserver` watching a single element.
pub struct IntersectionViewport {
    target: Option<Element>,
}

impl IntersectionViewport {
    pub fn new(node: &NodeRef) -> Self {
        Self { target: node.cast::<Element>() }
    }
}

/// Live observation; disconnects on drop.
pub struct IntersectionSubscription {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for IntersectionSubscription {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl ViewportObserver for IntersectionViewport {
    type Subscription = IntersectionSubscription;

    fn observe(
        &self,
        config: &RevealConfig,
        mut on_sample: Box<dyn FnMut(Visibility)>,
    ) -> Result<IntersectionSubscription, ObserveError> {
        let target = self.target.as_ref().ok_or(ObserveError::NoTarget)?;

        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                        on_sample(Visibility {
                            ratio: entry.intersection_ratio(),
                            intersecting: entry.is_intersecting(),
                        });
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_root_margin(&config.margin.to_string());
        // 0.0 as well so leaving the viewport is reported too
        options.set_threshold(&Array::of2(&JsValue::from_f64(0.0), &JsValue::from_f64(config.threshold)));

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|err| ObserveError::Unsupported(format!("{:?}", err)))?;
        observer.observe(target);

        Ok(IntersectionSubscription { observer, _callback: callback })
    }
}

/// Whether the element behind `node` has been revealed under `config`.
/// Observation stops when the calling component unmounts.
#[hook]
pub fn use_reveal(node: NodeRef, config: RevealConfig) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |(node, config)| {
                let viewport = IntersectionViewport::new(node);
                let subscription = start_reveal(&viewport, config.clone(), move |value| revealed.set(value));
                move || drop(subscription)
            },
            (node, config),
        );
    }

    *revealed
}
