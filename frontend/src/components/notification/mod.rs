use yew::prelude::*;

/// Small modal showing one transient message.
///
/// Clicking the close button or the backdrop emits `on_dismiss`; the parent
/// decides whether the modal stays mounted.
pub struct NotificationModal;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub message: AttrValue,
    pub on_dismiss: Callback<()>,
}

impl Component for NotificationModal {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        NotificationModal
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let dismiss = props.on_dismiss.reform(|_: MouseEvent| ());
        let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

        html! {
            <div
                class="notification-backdrop"
                role="dialog"
                aria-modal="true"
                onclick={dismiss.clone()}
                style="position:fixed;top:0;left:0;width:100vw;height:100vh;background:rgba(0,0,0,0.5);z-index:9999;display:flex;align-items:flex-start;justify-content:center;"
            >
                <div
                    onclick={keep_open}
                    style="margin-top:10vh;min-width:280px;max-width:90vw;background:#fff;border-radius:6px;box-shadow:0 4px 16px rgba(0,0,0,0.3);"
                >
                    <div style="display:flex;justify-content:flex-end;padding:8px 12px;border-bottom:1px solid #eee;">
                        <button
                            type="button"
                            aria-label="بستن"
                            onclick={dismiss}
                            style="background:none;border:none;font-size:1.2rem;cursor:pointer;"
                        >
                            { "✕" }
                        </button>
                    </div>
                    <div class="notification-body" style="padding:16px;">
                        { props.message.clone() }
                    </div>
                </div>
            </div>
        }
    }
}
