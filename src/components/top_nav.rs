use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::navigation::{Section, View};
use crate::outbound::{redirect_to, Destination};

#[derive(Properties, PartialEq)]
pub struct TopNavProps {
    pub view: View,
    pub menu_open: bool,
    pub on_navigate: Callback<View>,
    pub on_scroll: Callback<Section>,
    pub on_toggle_menu: Callback<()>,
}

#[function_component(TopNav)]
pub fn top_nav(props: &TopNavProps) -> Html {
    let TopNavProps { view, menu_open, on_navigate, on_scroll, on_toggle_menu } = props;
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = Closure::<dyn Fn()>::new(move || {
                    if let Some(win) = web_sys::window() {
                        if let Ok(scroll_y) = win.scroll_y() {
                            is_scrolled.set(scroll_y > 8.0);
                        }
                    }
                });
                if let Some(window) = &window {
                    if let Err(e) = window
                        .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    {
                        warn!("Failed to attach scroll listener: {:?}", e);
                    }
                }
                move || {
                    if let Some(window) = window {
                        if let Err(e) = window
                            .remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                        {
                            warn!("Failed to detach scroll listener: {:?}", e);
                        }
                    }
                }
            },
            (),
        );
    }

    let go = |target: View| {
        let on_navigate = on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(target))
    };
    let scroll = |section: Section| {
        let on_scroll = on_scroll.clone();
        Callback::from(move |_: MouseEvent| on_scroll.emit(section))
    };
    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    let science_link = classes!("nav-link", "nav-science", (*view == View::Science).then(|| "active"));

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="container nav-content">
                <div class="nav-logo" onclick={go(View::Home)}>
                    <span class="nav-logo-mark">{"✥"}</span>
                    <span class="nav-logo-text">{"NEURO"}<span class="accent">{"RASTREIO MOTOR"}</span></span>
                </div>

                <div class="nav-desktop">
                    <button type="button" class="nav-link" onclick={scroll(Section::Solution)}>{"Solução"}</button>
                    <button type="button" class="nav-link" onclick={scroll(Section::Domains)}>{"Domínios"}</button>
                    <button type="button" class={science_link} onclick={go(View::Science)}>{"Ciência"}</button>
                    <Button onclick={redirect_to(Destination::Login)} class="nav-login">{"Login"}</Button>
                </div>

                <button type="button" class="burger-menu" aria-label="Menu" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>
            {
                if *menu_open {
                    html! {
                        <div class="nav-mobile">
                            <button type="button" class="nav-mobile-link" onclick={scroll(Section::Solution)}>{"Solução"}</button>
                            <button type="button" class="nav-mobile-link" onclick={scroll(Section::Domains)}>{"Domínios"}</button>
                            <button type="button" class="nav-mobile-link" onclick={go(View::Science)}>{"Ciência"}</button>
                            <div class="nav-mobile-login">
                                <Button onclick={redirect_to(Destination::Login)} variant={ButtonVariant::Primary} class="btn-wide">
                                    {"Login"}
                                </Button>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                    .top-nav {
                        position: sticky;
                        top: 0;
                        z-index: 50;
                        background: rgba(255, 255, 255, 0.9);
                        backdrop-filter: blur(12px);
                        border-bottom: 1px solid #e2e8f0;
                        transition: box-shadow 0.2s ease;
                    }

                    .top-nav.scrolled {
                        box-shadow: 0 4px 12px rgba(15, 23, 42, 0.06);
                    }

                    .nav-content {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        height: 4rem;
                    }

                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        cursor: pointer;
                    }

                    .nav-logo-mark {
                        font-size: 1.75rem;
                        color: #1e3a8a;
                    }

                    .nav-logo-text {
                        font-size: 1.25rem;
                        font-weight: 700;
                        letter-spacing: -0.02em;
                    }

                    .accent { color: #1e3a8a; }

                    .nav-desktop {
                        display: none;
                        align-items: center;
                        gap: 2rem;
                    }

                    .nav-link, .nav-mobile-link {
                        background: none;
                        border: none;
                        font: inherit;
                        font-weight: 500;
                        color: #475569;
                        cursor: pointer;
                        transition: color 0.2s ease;
                    }

                    .nav-link:hover, .nav-link.active { color: #1e3a8a; }

                    .nav-login {
                        padding: 0.5rem 1rem;
                        font-size: 0.875rem;
                    }

                    .burger-menu {
                        background: none;
                        border: none;
                        font-size: 1.5rem;
                        color: #475569;
                        padding: 0.5rem;
                        cursor: pointer;
                    }

                    .nav-mobile {
                        border-top: 1px solid #f1f5f9;
                        background: #fff;
                        padding: 0.5rem 1rem 1.5rem;
                        animation: slide-down 0.2s ease;
                    }

                    .nav-mobile-link {
                        display: block;
                        width: 100%;
                        text-align: left;
                        padding: 0.5rem 0;
                    }

                    .nav-mobile-login { padding-top: 0.5rem; }

                    @keyframes slide-down {
                        from { transform: translateY(-0.5rem); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }

                    @media (min-width: 768px) {
                        .nav-desktop { display: flex; }
                        .burger-menu, .nav-mobile { display: none; }
                    }
                "#}
            </style>
        </nav>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    fn window() -> web_sys::Window {
        web_sys::window().unwrap()
    }

    fn document() -> web_sys::Document {
        window().document().unwrap()
    }

    fn nav_is_scrolled() -> bool {
        document()
            .query_selector(".top-nav")
            .unwrap()
            .unwrap()
            .class_list()
            .contains("scrolled")
    }

    async fn settle() {
        TimeoutFuture::new(50).await;
    }

    #[wasm_bindgen_test]
    async fn scrolled_class_follows_the_window() {
        let root = document().create_element("div").unwrap();
        let spacer = document().create_element("div").unwrap();
        spacer.set_attribute("style", "height: 5000px").unwrap();
        let body = document().body().unwrap();
        body.append_child(&root).unwrap();
        body.append_child(&spacer).unwrap();

        let handle = yew::Renderer::<TopNav>::with_root_and_props(
            root.clone(),
            TopNavProps {
                view: View::Home,
                menu_open: false,
                on_navigate: Callback::noop(),
                on_scroll: Callback::noop(),
                on_toggle_menu: Callback::noop(),
            },
        )
        .render();
        settle().await;
        assert!(!nav_is_scrolled());

        window().scroll_to_with_x_and_y(0.0, 200.0);
        settle().await;
        assert!(nav_is_scrolled());

        window().scroll_to_with_x_and_y(0.0, 0.0);
        settle().await;
        assert!(!nav_is_scrolled());

        handle.destroy();
        settle().await;
        spacer.remove();
        root.remove();
    }
}
