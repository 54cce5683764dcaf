//! Update function for the record manager screen.
//!
//! Manager messages go through `common::manager::update`; every request it
//! returns is performed in its own local task, and the completion is
//! sent back to the component as another manager message. Requests are not
//! serialized against each other.

use yew::html::Scope;
use yew::prelude::*;

use common::api::execute;
use common::manager;
use common::requests::ApiRequest;

use super::messages::Msg;
use super::state::RecordsComponent;

pub fn update(component: &mut RecordsComponent, ctx: &Context<RecordsComponent>, msg: Msg) -> bool {
    match msg {
        Msg::Manager(msg) => {
            for request in manager::update(&mut component.manager, msg) {
                perform(component, ctx.link(), request);
            }
            true
        }
        Msg::ToggleSort(column) => {
            component.grid.toggle_sort(column);
            true
        }
        Msg::SetFilter(column, value) => {
            component.grid.set_filter(column, value);
            true
        }
    }
}

fn perform(component: &RecordsComponent, link: &Scope<RecordsComponent>, request: ApiRequest) {
    let api = component.api.clone();
    let link = link.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let completion = execute(&api, request).await;
        link.send_message(completion);
    });
}
