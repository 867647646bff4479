use std::cell::RefCell;
use std::rc::Rc;

use common::{Controller, Effect, FormState, Surfaces, UiEvent};
use yew::prelude::*;

use crate::api_client;
use crate::settings;

/// Snapshot of the dashboard surfaces plus the way to feed events back.
#[derive(Clone, PartialEq)]
pub struct DashboardHandle {
    pub surfaces: Surfaces,
    pub dispatch: Callback<UiEvent>,
}

/// Owns the [`Controller`] for the lifetime of the component.
///
/// Every event runs to completion on the controller, the component is
/// re-rendered from the updated surfaces, then any requested fetch is spawned.
/// Fetches are never cancelled; their resolution is just another event.
#[hook]
pub fn use_dashboard() -> DashboardHandle {
    let controller = use_mut_ref(|| {
        let settings = settings::get_settings();
        log::debug!(
            "Creating dashboard controller (base: {}, policy: {})",
            settings.api_base_url(),
            settings.stale_response_policy.as_str()
        );
        Controller::new(
            settings.api_base_url(),
            FormState::default(),
            settings.stale_response_policy,
        )
    });
    let update = use_force_update();

    let dispatch_event = {
        let controller = controller.clone();
        let update = update.clone();
        use_callback((), move |event: UiEvent, _| {
            dispatch(&controller, &update, event);
        })
    };

    // Initial load: Prophet rule + first metrics fetch
    {
        let dispatch_event = dispatch_event.clone();
        use_effect_with((), move |_| {
            dispatch_event.emit(UiEvent::Loaded);
            || ()
        });
    }

    let surfaces = controller.borrow().surfaces().clone();
    DashboardHandle {
        surfaces,
        dispatch: dispatch_event,
    }
}

fn dispatch(controller: &Rc<RefCell<Controller>>, update: &UseForceUpdateHandle, event: UiEvent) {
    let effects = controller.borrow_mut().handle(event);
    update.force_update();

    for effect in effects {
        run_effect(controller.clone(), update.clone(), effect);
    }
}

fn run_effect(controller: Rc<RefCell<Controller>>, update: UseForceUpdateHandle, effect: Effect) {
    match effect {
        Effect::Fetch(request) => {
            wasm_bindgen_futures::spawn_local(async move {
                let result = api_client::execute(&request).await;
                dispatch(&controller, &update, UiEvent::Resolved { request, result });
            });
        }
    }
}
