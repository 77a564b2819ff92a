use crate::hooks::use_notices::Notifier;
use crate::state::notices::{Notice, NoticeQueue};
use gloo::timers::callback::Timeout;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NoticeProviderProps {
    pub children: Children,
}

/// Owns the app-wide notice queue and renders it above the page
#[function_component(NoticeProvider)]
pub fn notice_provider(props: &NoticeProviderProps) -> Html {
    let queue = use_reducer(NoticeQueue::default);
    let notifier = Notifier::new(queue.dispatcher());

    let on_dismiss = {
        let notifier = notifier.clone();
        Callback::from(move |id: u64| notifier.dismiss(id))
    };

    html! {
        <ContextProvider<Notifier> context={notifier}>
            <div class="notices">
                {for queue.iter().map(|notice| html! {
                    <NoticeBanner key={notice.id} notice={notice.clone()} on_dismiss={on_dismiss.clone()} />
                })}
            </div>
            {props.children.clone()}
        </ContextProvider<Notifier>>
    }
}

#[derive(Properties, PartialEq)]
pub struct NoticeBannerProps {
    pub notice: Notice,
    pub on_dismiss: Callback<u64>,
}

#[function_component(NoticeBanner)]
pub fn notice_banner(props: &NoticeBannerProps) -> Html {
    // Successes clear themselves; the timer dies with the banner
    use_effect_with(props.notice.id, {
        let delay = props.notice.kind.auto_dismiss_ms();
        let on_dismiss = props.on_dismiss.clone();
        move |id| {
            let id = *id;
            let timeout = delay.map(|millis| Timeout::new(millis, move || on_dismiss.emit(id)));
            move || drop(timeout)
        }
    });

    let on_close = {
        let id = props.notice.id;
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    html! {
        <div class={props.notice.kind.css_class()} role="status">
            <span class="notice-message">{props.notice.message.clone()}</span>
            <button class="notice-close" onclick={on_close}>{"×"}</button>
        </div>
    }
}
