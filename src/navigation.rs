//! Top-level navigation state for the site.
//!
//! Everything here is plain data so it can be driven by `use_reducer` in the
//! browser and exercised directly in native unit tests. DOM side effects
//! (scrolling, body scroll lock) live in [`crate::dom`].

use std::rc::Rc;
use yew::prelude::*;

/// Which top-level page is on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Home,
    Science,
}

/// Named page regions that can be scrolled into view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Solution,
    Domains,
    Plans,
    Contact,
    Foundations,
    Paradigms,
    Ethics,
    References,
    ScienceCta,
}

impl Section {
    /// The `id` attribute the section is rendered with.
    pub const fn id(self) -> &'static str {
        match self {
            Section::Solution => "solucao",
            Section::Domains => "dominios",
            Section::Plans => "planos",
            Section::Contact => "contato",
            Section::Foundations => "fundamentos",
            Section::Paradigms => "paradigmas",
            Section::Ethics => "etica",
            Section::References => "referencias",
            Section::ScienceCta => "cta-ciencia",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub view: View,
    pub mobile_menu_open: bool,
    pub video_modal_open: bool,
    /// Set when a scroll was requested for a section on a view that had not
    /// been rendered yet. Consumed once that view is committed.
    pub pending_scroll: Option<Section>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    NavigateTo(View),
    ScrollTo(Section),
    PendingScrollDone,
    ToggleMobileMenu,
    OpenVideoModal,
    CloseVideoModal,
}

impl NavState {
    /// True when a `ScrollTo` can scroll right away. Only home does; any
    /// other view switches to home first.
    pub fn can_scroll_now(&self) -> bool {
        self.view == View::Home
    }

    pub fn apply(&self, action: NavAction) -> NavState {
        let mut next = self.clone();
        match action {
            NavAction::NavigateTo(view) => {
                next.view = view;
                next.mobile_menu_open = false;
                next.pending_scroll = None;
            }
            NavAction::ScrollTo(section) => {
                next.mobile_menu_open = false;
                if self.can_scroll_now() {
                    next.pending_scroll = None;
                } else {
                    next.view = View::Home;
                    next.pending_scroll = Some(section);
                }
            }
            NavAction::PendingScrollDone => next.pending_scroll = None,
            NavAction::ToggleMobileMenu => next.mobile_menu_open = !self.mobile_menu_open,
            NavAction::OpenVideoModal => next.video_modal_open = true,
            NavAction::CloseVideoModal => next.video_modal_open = false,
        }
        next
    }
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            // Same Rc back means no re-render.
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce_all(actions: &[NavAction]) -> Rc<NavState> {
        actions
            .iter()
            .fold(Rc::new(NavState::default()), |state, action| state.reduce(*action))
    }

    #[test]
    fn starts_on_home_with_everything_closed() {
        let state = NavState::default();
        assert_eq!(state.view, View::Home);
        assert!(!state.mobile_menu_open);
        assert!(!state.video_modal_open);
        assert_eq!(state.pending_scroll, None);
    }

    #[test]
    fn navigating_twice_to_the_same_view_is_a_no_op() {
        let once = Rc::new(NavState::default()).reduce(NavAction::NavigateTo(View::Science));
        let twice = once.clone().reduce(NavAction::NavigateTo(View::Science));
        assert_eq!(twice.view, View::Science);
        assert!(Rc::ptr_eq(&once, &twice));
    }

    #[test]
    fn scrolling_from_science_switches_home_first_and_defers_the_scroll() {
        let state = reduce_all(&[
            NavAction::NavigateTo(View::Science),
            NavAction::ScrollTo(Section::Plans),
        ]);
        assert_eq!(state.view, View::Home);
        assert_eq!(state.pending_scroll, Some(Section::Plans));

        let state = state.reduce(NavAction::PendingScrollDone);
        assert_eq!(state.view, View::Home);
        assert_eq!(state.pending_scroll, None);
    }

    #[test]
    fn scrolling_on_home_is_immediate() {
        let state = NavState::default();
        assert!(state.can_scroll_now());
        let next = state.apply(NavAction::ScrollTo(Section::Plans));
        assert_eq!(next.view, View::Home);
        assert_eq!(next.pending_scroll, None);
    }

    #[test]
    fn scrolling_on_home_never_leaves_home() {
        // A target that is not rendered on home is a missed scroll, not a view change
        let next = NavState::default().apply(NavAction::ScrollTo(Section::Ethics));
        assert_eq!(next.view, View::Home);
        assert_eq!(next.pending_scroll, None);
    }

    #[test]
    fn navigation_closes_the_mobile_menu() {
        for action in [
            NavAction::NavigateTo(View::Home),
            NavAction::NavigateTo(View::Science),
            NavAction::ScrollTo(Section::Domains),
            NavAction::ScrollTo(Section::Ethics),
        ] {
            let state = reduce_all(&[NavAction::ToggleMobileMenu, action]);
            assert!(!state.mobile_menu_open, "menu left open after {:?}", action);
        }
    }

    #[test]
    fn menu_toggle_flips() {
        let state = reduce_all(&[NavAction::ToggleMobileMenu]);
        assert!(state.mobile_menu_open);
        let state = state.reduce(NavAction::ToggleMobileMenu);
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn modal_is_independent_of_the_view() {
        let state = reduce_all(&[
            NavAction::OpenVideoModal,
            NavAction::NavigateTo(View::Science),
        ]);
        assert!(state.video_modal_open);
        assert_eq!(state.view, View::Science);

        let state = state.reduce(NavAction::CloseVideoModal);
        assert!(!state.video_modal_open);
        assert_eq!(state.view, View::Science);
    }

    #[test]
    fn later_navigation_drops_a_pending_scroll() {
        let state = reduce_all(&[
            NavAction::NavigateTo(View::Science),
            NavAction::ScrollTo(Section::Contact),
            NavAction::NavigateTo(View::Science),
        ]);
        assert_eq!(state.view, View::Science);
        assert_eq!(state.pending_scroll, None);
    }

    #[test]
    fn section_ids_match_rendered_anchors() {
        assert_eq!(Section::Plans.id(), "planos");
        assert_eq!(Section::References.id(), "referencias");
    }
}
