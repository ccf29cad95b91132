use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info, warn};
use web_sys::{Element, KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::form_host::{DomFormHost, EmbedPhase, FormEmbed, MountOutcome, MountTicket};
use crate::components::icons::{Icon, IconKind};
use crate::config::{self, EmbedConfig};
use crate::state::ModalVariant;

#[derive(Properties, PartialEq)]
pub struct FormModalProps {
    pub is_open: bool,
    pub variant: ModalVariant,
    pub on_close: Callback<()>,
}

fn mount_form(embed: &FormEmbed, ticket: MountTicket, mount: Option<Element>) {
    let result = DomFormHost::new(mount, &embed.config().mount_id)
        .and_then(|host| embed.mount(ticket, &host));

    match result {
        Ok(MountOutcome::Injected) => debug!("Hosted form script injected"),
        Ok(MountOutcome::NoMountPoint) => debug!("Form mount point missing, skipping injection"),
        Ok(MountOutcome::Stale) => debug!("Ignoring stale form mount request"),
        Err(e) => warn!("Failed to mount hosted form: {}", e),
    }
}

fn unmount_form(embed: &Rc<RefCell<FormEmbed>>, mount: Option<Element>) {
    let mut embed = embed.borrow_mut();
    if embed.phase() == EmbedPhase::Closed {
        return;
    }

    let host = match DomFormHost::new(mount, &embed.config().mount_id) {
        Ok(host) => host,
        Err(e) => {
            warn!("Cannot reach the document to tear down the form: {}", e);
            embed.reset();
            return;
        }
    };

    match embed.close(&host) {
        Ok(removed) => debug!("Hosted form torn down, {} script(s) removed", removed),
        Err(e) => warn!("Failed to tear down hosted form: {}", e),
    }
}

fn set_body_scroll_locked(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };

    let value = if locked { "hidden" } else { "" };
    if let Err(e) = body.style().set_property("overflow", value) {
        warn!("Failed to update body scroll lock: {:?}", e);
    }
}

#[function_component(FormModal)]
pub fn form_modal(props: &FormModalProps) -> Html {
    let mount_ref = use_node_ref();
    let embed = use_mut_ref(|| FormEmbed::new(EmbedConfig::default()));

    // Effects run after the dialog is committed, so the mount point is ready here.
    {
        let mount_ref = mount_ref.clone();
        let embed = embed.clone();
        use_effect_with_deps(
            move |is_open| {
                let is_open = *is_open;
                let mounted = mount_ref.cast::<Element>();

                if is_open {
                    let ticket = embed.borrow_mut().open();
                    if let Some(ticket) = ticket {
                        mount_form(&embed.borrow(), ticket, mounted.clone());
                    }
                }

                // Runs on the next is_open change and on unmount.
                move || {
                    if is_open {
                        unmount_form(&embed, mounted);
                    }
                }
            },
            props.is_open,
        );
    }

    use_effect_with_deps(
        move |is_open| {
            let locked = *is_open;
            if locked {
                set_body_scroll_locked(true);
            }
            move || {
                if locked {
                    set_body_scroll_locked(false);
                }
            }
        },
        props.is_open,
    );

    {
        let on_close = props.on_close.clone();
        let is_open = props.is_open;
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if is_open && e.key() == "Escape" {
                info!("Form modal dismissed with Escape");
                on_close.emit(());
            }
        });
    }

    if !props.is_open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    // Keep clicks inside the panel from reaching the overlay.
    let stop_propagation = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-overlay" onclick={close.clone()}>
            <div
                class="modal-panel"
                role="dialog"
                aria-modal="true"
                aria-labelledby="form-modal-title"
                onclick={stop_propagation}
            >
                <h2 id="form-modal-title" class="visually-hidden">
                    { props.variant.title() }
                </h2>
                <button class="modal-close" aria-label="Close" onclick={close}>
                    <Icon kind={IconKind::Close} size={20} />
                </button>
                <div class="modal-body">
                    <div id={config::FORM_MOUNT_ID} class="formstack-container" ref={mount_ref}></div>
                </div>
            </div>
            <style>
                {r#"
                    .modal-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 50;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(0, 0, 0, 0.8);
                        animation: modalFadeIn 0.2s ease-out;
                    }
                    .modal-panel {
                        position: relative;
                        width: calc(100% - 2rem);
                        max-width: 600px;
                        max-height: 90vh;
                        overflow-y: auto;
                        padding: 1.5rem;
                        border-radius: 0.5rem;
                        background: #1e3a8a;
                        color: #fff;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
                    }
                    .modal-close {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        background: none;
                        border: none;
                        color: #d1d5db;
                        cursor: pointer;
                        opacity: 0.7;
                    }
                    .modal-close:hover {
                        opacity: 1;
                    }
                    .modal-body {
                        min-height: 600px;
                        width: 100%;
                    }
                    .visually-hidden {
                        position: absolute;
                        width: 1px;
                        height: 1px;
                        padding: 0;
                        margin: -1px;
                        overflow: hidden;
                        clip: rect(0, 0, 0, 0);
                        white-space: nowrap;
                        border: 0;
                    }
                    @keyframes modalFadeIn {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                "#}
            </style>
        </div>
    }
}
