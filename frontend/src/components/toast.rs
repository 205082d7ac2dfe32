use std::rc::Rc;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

const DISMISS_AFTER_MS: u32 = 5_000;
const MAX_VISIBLE: usize = 3;

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub destructive: bool,
}

pub enum ToastAction {
    Show { title: String, description: String, destructive: bool },
    Dismiss(u32),
}

impl ToastAction {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::Show { title: title.into(), description: description.into(), destructive: false }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::Show { title: title.into(), description: description.into(), destructive: true }
    }
}

/// Newest toast last; older ones fall off once more than a few are stacked.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ToastQueue {
    next_id: u32,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Show { title, description, destructive } => {
                next.toasts.push(Toast { id: next.next_id, title, description, destructive });
                next.next_id = next.next_id.wrapping_add(1);
                let overflow = next.toasts.len().saturating_sub(MAX_VISIBLE);
                next.toasts.drain(..overflow);
            }
            ToastAction::Dismiss(id) => {
                if !next.toasts.iter().any(|t| t.id == id) {
                    return self;
                }
                next.toasts.retain(|t| t.id != id);
            }
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
struct ToastViewProps {
    toast: Toast,
    on_dismiss: Callback<u32>,
}

#[function_component]
fn ToastView(props: &ToastViewProps) -> Html {
    {
        let id = props.toast.id;
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(DISMISS_AFTER_MS, move || on_dismiss.emit(id));
                // dropping the handle cancels it
                move || drop(timeout)
            },
            id,
        );
    }

    let close = {
        let id = props.toast.id;
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    html! {
        <div class={classes!("toast", props.toast.destructive.then_some("destructive"))} role="status">
            <div class="toast-body">
                <p class="toast-title">{ props.toast.title.clone() }</p>
                <p class="toast-description">{ props.toast.description.clone() }</p>
            </div>
            <button class="toast-close" aria-label="Close" onclick={close}>
                <i class="fas fa-times"></i>
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    pub queue: UseReducerHandle<ToastQueue>,
}

#[function_component]
pub fn Toaster(props: &ToasterProps) -> Html {
    let on_dismiss = {
        let dispatcher = props.queue.dispatcher();
        Callback::from(move |id: u32| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <div class="toaster">
            { for props.queue.toasts().iter().map(|toast| html! {
                <ToastView key={toast.id} toast={toast.clone()} on_dismiss={on_dismiss.clone()} />
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(queue: Rc<ToastQueue>, action: ToastAction) -> Rc<ToastQueue> {
        Reducible::reduce(queue, action)
    }

    #[test]
    fn shows_and_dismisses_by_id() {
        let queue = Rc::new(ToastQueue::default());
        let queue = reduce(queue, ToastAction::info("Opening WhatsApp", "Redirecting"));
        let queue = reduce(queue, ToastAction::error("Error", "Failed"));
        assert_eq!(queue.toasts().len(), 2);
        assert!(queue.toasts()[1].destructive);

        let first = queue.toasts()[0].id;
        let queue = reduce(queue, ToastAction::Dismiss(first));
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].title, "Error");
    }

    #[test]
    fn dismissing_twice_is_a_no_op() {
        let queue = reduce(Rc::new(ToastQueue::default()), ToastAction::info("a", "b"));
        let id = queue.toasts()[0].id;
        let queue = reduce(queue, ToastAction::Dismiss(id));
        let again = reduce(queue.clone(), ToastAction::Dismiss(id));
        assert!(Rc::ptr_eq(&queue, &again));
    }

    #[test]
    fn oldest_toasts_fall_off() {
        let mut queue = Rc::new(ToastQueue::default());
        for n in 0..5 {
            queue = reduce(queue, ToastAction::info(format!("t{n}"), ""));
        }
        let titles: Vec<_> = queue.toasts().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["t2", "t3", "t4"]);
    }
}
