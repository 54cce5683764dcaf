//! Record manager screen: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic and view rendering.
//!
//! Responsibilities
//! - Re-export the component, its messages and properties.
//! - Delegate to `update::update` and `view::view`.
//! - Fetch the collection once, after the first render.

use yew::prelude::*;

use common::manager::Msg as ManagerMsg;

use crate::api::HttpRecordsApi;
use crate::config;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::RecordsProps;
pub use state::RecordsComponent;

impl Component for RecordsComponent {
    type Message = Msg;
    type Properties = RecordsProps;

    fn create(ctx: &Context<Self>) -> Self {
        let base_url = ctx
            .props()
            .api_base
            .as_deref()
            .unwrap_or(config::api_base());
        RecordsComponent::new(HttpRecordsApi::new(base_url))
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message(ManagerMsg::Load);
        }
    }
}
