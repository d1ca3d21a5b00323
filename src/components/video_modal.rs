use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::config;
use crate::dom::ScrollLock;

#[derive(Properties, PartialEq)]
pub struct VideoModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(VideoModal)]
pub fn video_modal(props: &VideoModalProps) -> Html {
    // Background scroll is locked for exactly as long as the modal is open.
    // The destructor runs when `open` changes and on unmount.
    use_effect_with_deps(
        |open: &bool| {
            let lock = if *open {
                match ScrollLock::acquire() {
                    Ok(lock) => Some(lock),
                    Err(e) => {
                        warn!("Could not lock background scroll: {}", e);
                        None
                    }
                }
            } else {
                None
            };
            move || drop(lock)
        },
        props.open,
    );

    // Escape closes
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let listener = if *open {
                    web_sys::window().map(|window| {
                        let callback = Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                            if e.key() == "Escape" {
                                debug!("Escape pressed, closing video modal");
                                on_close.emit(());
                            }
                        });
                        if let Err(e) = window
                            .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
                        {
                            warn!("Failed to attach keydown listener: {:?}", e);
                        }
                        (window, callback)
                    })
                } else {
                    None
                };
                move || {
                    if let Some((window, callback)) = listener {
                        if let Err(e) = window
                            .remove_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
                        {
                            warn!("Failed to detach keydown listener: {:?}", e);
                        }
                    }
                }
            },
            props.open,
        );
    }

    if !props.open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="video-modal-backdrop" onclick={close.clone()}>
            // Clicks on the player must never reach the backdrop
            <div class="video-modal-surface" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <button type="button" class="video-modal-close" aria-label="Fechar" onclick={close}>
                    {"✕"}
                </button>
                <div class="video-modal-frame">
                    <iframe
                        width="100%"
                        height="100%"
                        src={config::DEMO_VIDEO_URL}
                        title={config::DEMO_VIDEO_TITLE}
                        frameborder="0"
                        allow={config::DEMO_VIDEO_ALLOW}
                        allowfullscreen={true}
                    ></iframe>
                </div>
            </div>
            <style>
                {r#"
                    .video-modal-backdrop {
                        position: fixed;
                        inset: 0;
                        z-index: 100;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                        background: rgba(15, 23, 42, 0.8);
                        backdrop-filter: blur(4px);
                        animation: modal-fade 0.3s ease;
                    }

                    @media (min-width: 768px) {
                        .video-modal-backdrop { padding: 2rem; }
                    }

                    .video-modal-surface {
                        position: relative;
                        width: 100%;
                        max-width: 56rem;
                        background: #000;
                        border-radius: 1rem;
                        overflow: hidden;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
                        animation: modal-zoom 0.3s ease;
                    }

                    .video-modal-close {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        z-index: 10;
                        width: 2.5rem;
                        height: 2.5rem;
                        border: none;
                        border-radius: 9999px;
                        background: rgba(0, 0, 0, 0.2);
                        color: #fff;
                        font-size: 1.25rem;
                        cursor: pointer;
                    }

                    .video-modal-close:hover { background: rgba(0, 0, 0, 0.4); }

                    .video-modal-frame {
                        aspect-ratio: 16 / 9;
                        width: 100%;
                    }

                    @keyframes modal-fade {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }

                    @keyframes modal-zoom {
                        from { transform: scale(0.95); opacity: 0; }
                        to { transform: scale(1); opacity: 1; }
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    fn document() -> web_sys::Document {
        web_sys::window().unwrap().document().unwrap()
    }

    fn mount_point() -> web_sys::Element {
        let root = document().create_element("div").unwrap();
        document().body().unwrap().append_child(&root).unwrap();
        root
    }

    fn body_overflow() -> String {
        document().body().unwrap().style().get_property_value("overflow").unwrap()
    }

    fn click(selector: &str) {
        document()
            .query_selector(selector)
            .unwrap()
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap()
            .click();
    }

    async fn settle() {
        TimeoutFuture::new(10).await;
    }

    #[wasm_bindgen_test]
    async fn only_backdrop_clicks_request_close() {
        let closes = Rc::new(Cell::new(0));
        let on_close = {
            let closes = closes.clone();
            Callback::from(move |_| closes.set(closes.get() + 1))
        };
        let root = mount_point();
        let handle = yew::Renderer::<VideoModal>::with_root_and_props(
            root.clone(),
            VideoModalProps { open: true, on_close },
        )
        .render();
        settle().await;

        click(".video-modal-surface");
        settle().await;
        assert_eq!(closes.get(), 0);

        click(".video-modal-backdrop");
        settle().await;
        assert_eq!(closes.get(), 1);

        click(".video-modal-close");
        settle().await;
        assert_eq!(closes.get(), 2);

        handle.destroy();
        settle().await;
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn unmounting_while_open_releases_scroll_lock() {
        let root = mount_point();
        let handle = yew::Renderer::<VideoModal>::with_root_and_props(
            root.clone(),
            VideoModalProps { open: true, on_close: Callback::noop() },
        )
        .render();
        settle().await;
        assert_eq!(body_overflow(), "hidden");

        handle.destroy();
        settle().await;
        assert_eq!(body_overflow(), "");
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn closed_modal_renders_nothing_and_leaves_scroll_alone() {
        let root = mount_point();
        let handle = yew::Renderer::<VideoModal>::with_root_and_props(
            root.clone(),
            VideoModalProps { open: false, on_close: Callback::noop() },
        )
        .render();
        settle().await;
        assert!(document().query_selector(".video-modal-backdrop").unwrap().is_none());
        assert_eq!(body_overflow(), "");

        handle.destroy();
        settle().await;
        root.remove();
    }
}
