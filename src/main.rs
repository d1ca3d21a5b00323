use log::{debug, info, warn};
use yew::prelude::*;

mod config;
mod dom;
mod navigation;
mod outbound;
mod components {
    pub mod button;
    pub mod layout;
    pub mod top_nav;
    pub mod video_modal;
}
mod pages {
    pub mod home;
    pub mod science;
}

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

use components::{layout::BaseStyles, top_nav::TopNav, video_modal::VideoModal};
use navigation::{NavAction, NavState, Section, View};
use pages::{home::HomePage, science::SciencePage};

#[function_component(App)]
fn app() -> Html {
    let nav = use_reducer(NavState::default);

    // A scroll requested from another view runs once that view is in the DOM.
    {
        let deps = (nav.view, nav.pending_scroll);
        let nav = nav.clone();
        use_effect_with_deps(
            move |deps: &(View, Option<Section>)| {
                if let Some(section) = deps.1 {
                    debug!("Running deferred scroll to #{}", section.id());
                    dom::reveal(section);
                    nav.dispatch(NavAction::PendingScrollDone);
                }
                || ()
            },
            deps,
        );
    }

    let navigate = {
        let nav = nav.clone();
        Callback::from(move |view: View| {
            info!("Navigating to {:?}", view);
            nav.dispatch(NavAction::NavigateTo(view));
            if let Err(e) = dom::scroll_to_top() {
                warn!("Could not reset scroll position: {}", e);
            }
        })
    };

    let scroll_to = {
        let nav = nav.clone();
        Callback::from(move |section: Section| {
            let now = nav.can_scroll_now();
            nav.dispatch(NavAction::ScrollTo(section));
            if now {
                dom::reveal(section);
            }
        })
    };

    let toggle_menu = {
        let nav = nav.clone();
        Callback::from(move |_| nav.dispatch(NavAction::ToggleMobileMenu))
    };

    let open_video = {
        let nav = nav.clone();
        Callback::from(move |_| {
            info!("Opening demo video");
            nav.dispatch(NavAction::OpenVideoModal);
        })
    };

    let close_video = {
        let nav = nav.clone();
        Callback::from(move |_| {
            debug!("Closing demo video");
            nav.dispatch(NavAction::CloseVideoModal);
        })
    };

    html! {
        <div class="app">
            <BaseStyles />
            <VideoModal open={nav.video_modal_open} on_close={close_video} />
            <TopNav
                view={nav.view}
                menu_open={nav.mobile_menu_open}
                on_navigate={navigate.clone()}
                on_scroll={scroll_to.clone()}
                on_toggle_menu={toggle_menu}
            />
            {
                match nav.view {
                    View::Home => html! { <HomePage on_scroll={scroll_to} on_open_video={open_video} /> },
                    View::Science => html! { <SciencePage on_navigate={navigate} /> },
                }
            }
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    fn window() -> web_sys::Window {
        web_sys::window().unwrap()
    }

    fn document() -> web_sys::Document {
        window().document().unwrap()
    }

    fn click(selector: &str) {
        document()
            .query_selector(selector)
            .unwrap()
            .unwrap_or_else(|| panic!("nothing matches {}", selector))
            .dyn_into::<HtmlElement>()
            .unwrap()
            .click();
    }

    fn exists(selector: &str) -> bool {
        document().query_selector(selector).unwrap().is_some()
    }

    fn body_overflow() -> String {
        document().body().unwrap().style().get_property_value("overflow").unwrap()
    }

    async fn settle() {
        TimeoutFuture::new(10).await;
    }

    // Long enough for a smooth scroll to finish
    async fn settle_scroll() {
        TimeoutFuture::new(1500).await;
    }

    fn mount() -> (web_sys::Element, yew::AppHandle<App>) {
        let root = document().create_element("div").unwrap();
        document().body().unwrap().append_child(&root).unwrap();
        let handle = yew::Renderer::<App>::with_root(root.clone()).render();
        (root, handle)
    }

    #[wasm_bindgen_test]
    async fn science_round_trip_closes_the_menu() {
        let (root, handle) = mount();
        settle().await;

        assert!(exists(&format!("#{}", Section::Plans.id())));
        assert!(!exists(".video-modal-backdrop"));

        click(".nav-desktop .nav-science");
        settle().await;
        assert!(exists(".science-page"));
        assert!(!exists(&format!("#{}", Section::Plans.id())));

        // Open the mobile menu, then leave via the science CTA
        click(".burger-menu");
        settle().await;
        assert!(exists(".nav-mobile"));
        click(&format!("#{} .btn", Section::ScienceCta.id()));
        settle().await;
        assert!(exists(".home-page"));
        assert!(!exists(".science-page"));
        assert!(!exists(".nav-mobile"));

        handle.destroy();
        settle().await;
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn section_link_from_science_switches_home_then_scrolls() {
        let (root, handle) = mount();
        settle().await;

        click(".nav-desktop .nav-science");
        settle().await;
        assert!(exists(".science-page"));
        assert_eq!(window().scroll_y().unwrap(), 0.0);

        // First desktop link is the solution section
        click(".nav-desktop .nav-link");
        settle_scroll().await;
        assert!(exists(".home-page"));
        assert!(!exists(".science-page"));

        let target = document().get_element_by_id(Section::Solution.id()).unwrap();
        let top = target.get_bounding_client_rect().top();
        let viewport = window().inner_height().unwrap().as_f64().unwrap();
        assert!(window().scroll_y().unwrap() > 0.0, "page never scrolled");
        assert!(top >= -1.0 && top < viewport, "#{} is not in view (top = {})", Section::Solution.id(), top);

        handle.destroy();
        settle().await;
        root.remove();
        window().scroll_to_with_x_and_y(0.0, 0.0);
    }

    #[wasm_bindgen_test]
    async fn modal_closes_through_state_and_releases_the_lock() {
        let (root, handle) = mount();
        settle().await;

        click(".hero-cta-group .btn-outline");
        settle().await;
        assert!(exists(".video-modal-backdrop"));
        assert_eq!(body_overflow(), "hidden");

        click(".video-modal-surface");
        settle().await;
        assert!(exists(".video-modal-backdrop"));
        assert_eq!(body_overflow(), "hidden");

        click(".video-modal-backdrop");
        settle().await;
        assert!(!exists(".video-modal-backdrop"));
        assert_eq!(body_overflow(), "");

        // Reopen, then unmount with the modal still open
        click(".hero-cta-group .btn-outline");
        settle().await;
        assert_eq!(body_overflow(), "hidden");
        handle.destroy();
        settle().await;
        assert_eq!(body_overflow(), "");
        root.remove();
    }
}
