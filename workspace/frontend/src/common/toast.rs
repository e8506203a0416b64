use std::cell::Cell;
use std::rc::Rc;

use yew::prelude::*;

use crate::settings;

#[derive(Clone, PartialEq)]
pub enum ToastType {
    Warning,
    Error,
}

impl ToastType {
    fn alert_class(&self) -> &'static str {
        match self {
            ToastType::Warning => "alert-warning",
            ToastType::Error => "alert-error",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastType::Warning => "fas fa-exclamation-triangle",
            ToastType::Error => "fas fa-exclamation-circle",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub message: String,
    pub toast_type: ToastType,
}

pub enum ToastAction {
    Add(Toast),
    Remove(usize),
}

/// Toasts currently on screen.
#[derive(Default, PartialEq)]
pub struct ToastList {
    toasts: Vec<Toast>,
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Add(toast) => toasts.push(toast),
            ToastAction::Remove(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(Self { toasts })
    }
}

/// Handle for raising toasts from anywhere below [`ToastProvider`].
///
/// The dispatcher is stable across renders, so copies captured by spawned
/// futures still reach the live list.
#[derive(Clone, PartialEq)]
pub struct ToastContext {
    dispatcher: UseReducerDispatcher<ToastList>,
    next_id: Rc<Cell<usize>>,
    duration_ms: u32,
}

impl ToastContext {
    fn show(&self, message: String, toast_type: ToastType) {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.dispatcher.dispatch(ToastAction::Add(Toast {
            id,
            message,
            toast_type,
        }));

        let dispatcher = self.dispatcher.clone();
        let timeout_handle = gloo_timers::callback::Timeout::new(self.duration_ms, move || {
            dispatcher.dispatch(ToastAction::Remove(id));
        });
        timeout_handle.forget();
    }

    pub fn show_warning(&self, message: String) {
        self.show(message, ToastType::Warning);
    }

    pub fn show_error(&self, message: String) {
        self.show(message, ToastType::Error);
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_reducer(ToastList::default);
    let next_id = use_memo((), |_| Cell::new(0usize));

    let context = ToastContext {
        dispatcher: toasts.dispatcher(),
        next_id: next_id.clone(),
        duration_ms: settings::get_settings().toast_duration_ms,
    };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <div class="toast toast-top toast-end z-50">
                {for toasts.toasts.iter().map(|toast| {
                    let id = toast.id;
                    let on_close = {
                        let dispatcher = toasts.dispatcher();
                        Callback::from(move |_| dispatcher.dispatch(ToastAction::Remove(id)))
                    };

                    html! {
                        <div key={id} class={classes!("alert", toast.toast_type.alert_class(), "shadow-lg")}>
                            <i class={toast.toast_type.icon()}></i>
                            <span>{&toast.message}</span>
                            <button class="btn btn-sm btn-ghost btn-circle" onclick={on_close}>
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}
