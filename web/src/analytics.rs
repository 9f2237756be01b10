use bingo_core::{Event, Tracker};
use wasm_bindgen::{JsCast, JsValue};

/// Forwards events to the page's global `gtag` function, when there is one.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub(crate) struct Gtag;

impl Gtag {
    fn function() -> Option<js_sys::Function> {
        js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("gtag"))
            .ok()?
            .dyn_into()
            .ok()
    }
}

impl Tracker for Gtag {
    fn track(&self, event: &Event) {
        let action = event.action();
        let params = event.params();
        log::debug!("event {}: {}", action, params);

        let Some(gtag) = Self::function() else {
            return;
        };
        let params = match js_sys::JSON::parse(&params.to_string()) {
            Ok(params) => params,
            Err(err) => {
                log::debug!("could not encode {} event: {:?}", action, err);
                return;
            }
        };
        if let Err(err) = gtag.call3(
            &JsValue::NULL,
            &JsValue::from_str("event"),
            &JsValue::from_str(action),
            &params,
        ) {
            log::debug!("gtag rejected {} event: {:?}", action, err);
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn missing_gtag_is_a_no_op() {
        let _ = js_sys::Reflect::delete_property(&js_sys::global(), &"gtag".into());
        Gtag.track(&Event::Reset);
    }

    #[wasm_bindgen_test]
    fn gtag_receives_action_and_params() {
        let global = js_sys::global();
        let recorder = js_sys::Function::new_with_args(
            "kind, action, params",
            "globalThis.__tracked = [kind, action, params.value];",
        );
        js_sys::Reflect::set(&global, &"gtag".into(), &recorder).unwrap();

        Gtag.track(&Event::Mark {
            text: "Chosen one".into(),
        });

        let tracked = js_sys::Reflect::get(&global, &"__tracked".into()).unwrap();
        let tracked: js_sys::Array = tracked.unchecked_into();
        assert_eq!(tracked.get(0).as_string().as_deref(), Some("event"));
        assert_eq!(tracked.get(1).as_string().as_deref(), Some("mark"));
        assert_eq!(tracked.get(2).as_string().as_deref(), Some("Chosen one"));

        let _ = js_sys::Reflect::delete_property(&global, &"gtag".into());
    }
}
