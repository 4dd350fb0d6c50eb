//! The select's interaction logic as a pure function.
//!
//! [`reduce`] takes the current [`State`], one [`Event`], and the caller's
//! options and selection, and returns the next state together with the
//! selection change to report, if any. It never touches the selection
//! itself: the owner decides whether to apply the change.
//!
//! ```text
//!            click / Enter / Space / ↑ / ↓
//!   Closed ─────────────────────────────────▶ Open(0)
//!     ▲                                        │ ↑ / ↓ move, clamped
//!     └──── click / Enter / Space / Esc / blur ┘ hover sets index
//! ```

use crate::mode::SelectionMode;
use crate::option::SelectOption;

/// Interaction state owned by the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct State {
    pub open: bool,
    /// Option targeted by keyboard navigation. Independent of the selection.
    pub highlighted: Option<usize>,
}

/// Navigation keys after key-map translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    /// Enter / Space.
    Toggle,
    /// Arrow down.
    Next,
    /// Arrow up.
    Prev,
    /// Escape.
    Dismiss,
}

/// Everything that can happen to a select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Click on the container outside the clear button, badges, and list.
    ContainerClick,
    /// Focus left the widget.
    Blur,
    /// Click on the option at this index.
    OptionClick(usize),
    /// Click on the badge of the selected option at this position.
    BadgeClick(usize),
    /// Click on the clear button.
    ClearClick,
    /// Pointer entered the option row at this index.
    Hover(usize),
    /// Programmatic open or close.
    SetOpen(bool),
    Key(NavKey),
}

/// Result of [`reduce`].
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<V> {
    pub state: State,
    /// The selection to report, if the event committed one.
    pub change: Option<V>,
}

/// Compute the next state and the change to report for `event`.
pub fn reduce<V: SelectionMode>(
    state: State,
    event: Event,
    options: &[SelectOption],
    value: &V,
) -> Transition<V> {
    let mut next = state;
    let mut change = None;

    match event {
        Event::ContainerClick => next.open = !state.open,
        Event::Blur | Event::Key(NavKey::Dismiss) => next.open = false,
        Event::SetOpen(open) => next.open = open,
        // Rows of a closed list are not on screen, so they cannot be hit.
        Event::OptionClick(_) | Event::Hover(_) if !state.open => {}
        Event::OptionClick(i) => {
            if let Some(option) = options.get(i) {
                change = value.commit(option);
                next.open = false;
            }
        }
        Event::BadgeClick(i) => {
            if let Some(option) = value.selected().get(i) {
                change = value.commit(option);
                next.open = false;
            }
        }
        // Leaves `open` alone: the clear button sits inside the container
        // but must not act as a container click.
        Event::ClearClick => change = Some(V::cleared()),
        Event::Hover(i) => {
            if i < options.len() {
                next.highlighted = Some(i);
            }
        }
        Event::Key(NavKey::Toggle) => {
            next.open = !state.open;
            if state.open {
                if let Some(option) = state.highlighted.and_then(|i| options.get(i)) {
                    change = value.commit(option);
                }
            }
        }
        Event::Key(key @ (NavKey::Next | NavKey::Prev)) => {
            if !state.open {
                // Opening consumes the key; the highlight does not move this step.
                next.open = true;
            } else if let Some(current) = state.highlighted {
                let target = match key {
                    NavKey::Next => current.checked_add(1),
                    _ => current.checked_sub(1),
                };
                if let Some(target) = target.filter(|&t| t < options.len()) {
                    next.highlighted = Some(target);
                }
            }
        }
    }

    if next.open && !state.open {
        next.highlighted = first_index(options);
    }

    Transition {
        state: next,
        change,
    }
}

/// Keep `highlighted` inside a list of `len` options.
pub fn clamp_highlight(highlighted: Option<usize>, len: usize) -> Option<usize> {
    match (highlighted, len) {
        (_, 0) | (None, _) => None,
        (Some(i), len) => Some(i.min(len - 1)),
    }
}

fn first_index(options: &[SelectOption]) -> Option<usize> {
    (!options.is_empty()).then_some(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn abc() -> Vec<SelectOption> {
        vec![
            SelectOption::new("A", 1),
            SelectOption::new("B", 2),
            SelectOption::new("C", 3),
        ]
    }

    fn open_at(i: usize) -> State {
        State {
            open: true,
            highlighted: Some(i),
        }
    }

    type Single = Option<SelectOption>;

    #[test]
    fn container_click_toggles_and_resets_highlight() {
        let options = abc();
        let closed = State {
            open: false,
            highlighted: Some(2),
        };
        let t = reduce::<Single>(closed, Event::ContainerClick, &options, &None);
        assert_eq!(t.state, open_at(0));
        assert_eq!(t.change, None);

        let t = reduce::<Single>(t.state, Event::ContainerClick, &options, &None);
        assert!(!t.state.open);
    }

    #[test]
    fn blur_and_escape_force_closed() {
        let options = abc();
        for event in [Event::Blur, Event::Key(NavKey::Dismiss)] {
            let t = reduce::<Single>(open_at(1), event, &options, &None);
            assert!(!t.state.open);
            let t = reduce::<Single>(State::default(), event, &options, &None);
            assert!(!t.state.open);
        }
    }

    #[test]
    fn option_click_commits_and_closes() {
        let options = abc();
        let value = Some(options[0].clone());
        let t = reduce(open_at(0), Event::OptionClick(2), &options, &value);
        assert_eq!(t.change, Some(Some(options[2].clone())));
        assert!(!t.state.open);
    }

    #[test]
    fn clicking_selected_option_emits_nothing_but_closes() {
        let options = abc();
        let value = Some(options[2].clone());
        let t = reduce(open_at(0), Event::OptionClick(2), &options, &value);
        assert_eq!(t.change, None);
        assert!(!t.state.open);
    }

    #[test]
    fn out_of_range_clicks_are_ignored() {
        let options = abc();
        let t = reduce::<Single>(open_at(0), Event::OptionClick(7), &options, &None);
        assert_eq!(t.state, open_at(0));
        assert_eq!(t.change, None);
        let t = reduce::<Vec<SelectOption>>(open_at(0), Event::BadgeClick(0), &options, &vec![]);
        assert_eq!(t.state, open_at(0));
    }

    #[test]
    fn clear_never_toggles_open() {
        let options = abc();
        for state in [open_at(1), State::default()] {
            let t = reduce(state, Event::ClearClick, &options, &Some(options[0].clone()));
            assert_eq!(t.state, state);
            assert_eq!(t.change, Some(None));

            let t = reduce(state, Event::ClearClick, &options, &vec![options[1].clone()]);
            assert_eq!(t.state, state);
            assert_eq!(t.change, Some(vec![]));
        }
    }

    #[test]
    fn badge_click_deselects() {
        let options = abc();
        let value = vec![options[1].clone(), options[0].clone()];
        let t = reduce(State::default(), Event::BadgeClick(1), &options, &value);
        assert_eq!(t.change, Some(vec![options[1].clone()]));
        assert!(!t.state.open);
    }

    #[test]
    fn arrows_open_without_moving() {
        let options = abc();
        for key in [NavKey::Next, NavKey::Prev] {
            let t = reduce::<Single>(State::default(), Event::Key(key), &options, &None);
            assert_eq!(t.state, open_at(0));
        }
    }

    #[test]
    fn arrows_clamp_without_wrapping() {
        let options = abc();
        let mut state = open_at(0);
        for _ in 0..5 {
            state = reduce::<Single>(state, Event::Key(NavKey::Next), &options, &None).state;
            assert!(state.highlighted.is_some_and(|h| h < options.len()));
        }
        assert_eq!(state, open_at(2));

        for _ in 0..5 {
            state = reduce::<Single>(state, Event::Key(NavKey::Prev), &options, &None).state;
        }
        assert_eq!(state, open_at(0));
    }

    #[test]
    fn enter_while_open_commits_highlighted() {
        let options = abc();
        let t = reduce::<Single>(open_at(1), Event::Key(NavKey::Toggle), &options, &None);
        assert_eq!(t.change, Some(Some(options[1].clone())));
        assert!(!t.state.open);
    }

    #[test]
    fn enter_while_closed_only_opens() {
        let options = abc();
        let t = reduce::<Single>(State::default(), Event::Key(NavKey::Toggle), &options, &None);
        assert_eq!(t.state, open_at(0));
        assert_eq!(t.change, None);
    }

    #[test]
    fn hover_sets_highlight_in_range() {
        let options = abc();
        let t = reduce::<Single>(open_at(0), Event::Hover(2), &options, &None);
        assert_eq!(t.state, open_at(2));
        let t = reduce::<Single>(open_at(0), Event::Hover(3), &options, &None);
        assert_eq!(t.state, open_at(0));
    }

    #[test]
    fn empty_options_have_no_highlight() {
        let t = reduce::<Single>(State::default(), Event::Key(NavKey::Next), &[], &None);
        assert_eq!(
            t.state,
            State {
                open: true,
                highlighted: None
            }
        );
        let t = reduce::<Single>(t.state, Event::Key(NavKey::Toggle), &[], &None);
        assert!(!t.state.open);
        assert_eq!(t.change, None);
    }

    #[test]
    fn set_open_is_idempotent() {
        let options = abc();
        let t = reduce::<Single>(open_at(2), Event::SetOpen(true), &options, &None);
        assert_eq!(t.state, open_at(2));
        let t = reduce::<Single>(State::default(), Event::SetOpen(true), &options, &None);
        assert_eq!(t.state, open_at(0));
    }

    #[test]
    fn closed_list_ignores_rows() {
        let options = abc();
        let closed = State {
            open: false,
            highlighted: Some(1),
        };
        let t = reduce::<Single>(closed, Event::OptionClick(2), &options, &None);
        assert_eq!(t.state, closed);
        assert_eq!(t.change, None);

        let t = reduce::<Single>(closed, Event::Hover(0), &options, &None);
        assert_eq!(t.state, closed);
    }

    #[test]
    fn clamp_highlight_bounds() {
        assert_eq!(clamp_highlight(Some(5), 3), Some(2));
        assert_eq!(clamp_highlight(Some(1), 3), Some(1));
        assert_eq!(clamp_highlight(Some(0), 0), None);
        assert_eq!(clamp_highlight(None, 3), None);
    }

    #[test]
    fn multiple_scenario() {
        let options = vec![SelectOption::new("A", 1), SelectOption::new("B", 2)];
        let (a, b) = (options[0].clone(), options[1].clone());
        let mut value: Vec<SelectOption> = vec![];
        let mut emitted = vec![];

        for click in [0, 0, 1, 0] {
            let t = reduce(open_at(0), Event::OptionClick(click), &options, &value);
            let next = t.change.expect("multiple mode always emits");
            emitted.push(next.clone());
            value = next;
        }

        assert_eq!(
            emitted,
            vec![vec![a.clone()], vec![], vec![b.clone()], vec![b, a]]
        );
    }
}
