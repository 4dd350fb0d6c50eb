//! Single and multiple selection, expressed as the type of the selected value.
//!
//! A select in single mode holds `Option<SelectOption>`; in multiple mode it
//! holds `Vec<SelectOption>`. The mode decides how a click on an option
//! changes the selection and what "cleared" means, so a mismatched value
//! shape cannot be constructed.

use crate::option::SelectOption;
use std::fmt::Debug;

/// How a selection reacts to options being committed.
pub trait SelectionMode: Clone + Default + Debug + PartialEq + Send + 'static {
    /// Whether several options may be selected at once.
    const MULTIPLE: bool;

    /// The selected options, in selection order.
    fn selected(&self) -> &[SelectOption];

    /// Whether `option` is part of the selection (compared by value).
    fn is_selected(&self, option: &SelectOption) -> bool {
        self.selected().iter().any(|s| s.same_value(option))
    }

    /// The selection after committing `option`, or `None` when nothing changes.
    fn commit(&self, option: &SelectOption) -> Option<Self>;

    /// The empty selection.
    fn cleared() -> Self {
        Self::default()
    }
}

impl SelectionMode for Option<SelectOption> {
    const MULTIPLE: bool = false;

    fn selected(&self) -> &[SelectOption] {
        self.as_slice()
    }

    /// Replaces the selection unless `option` is already the selected one.
    fn commit(&self, option: &SelectOption) -> Option<Self> {
        if self.is_selected(option) {
            None
        } else {
            Some(Some(option.clone()))
        }
    }
}

impl SelectionMode for Vec<SelectOption> {
    const MULTIPLE: bool = true;

    fn selected(&self) -> &[SelectOption] {
        self
    }

    /// Toggles membership: removes `option` if present, appends it otherwise.
    fn commit(&self, option: &SelectOption) -> Option<Self> {
        if self.is_selected(option) {
            Some(
                self.iter()
                    .filter(|s| !s.same_value(option))
                    .cloned()
                    .collect(),
            )
        } else {
            let mut next = self.clone();
            next.push(option.clone());
            Some(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn opt(label: &str, value: i64) -> SelectOption {
        SelectOption::new(label, value)
    }

    #[test]
    fn single_replaces() {
        let value = Some(opt("a", 1));
        assert_eq!(value.commit(&opt("c", 3)), Some(Some(opt("c", 3))));
    }

    #[test]
    fn single_recommit_is_noop() {
        let value = Some(opt("a", 1));
        assert_eq!(value.commit(&opt("a", 1)), None);
    }

    #[test]
    fn single_from_empty() {
        let value: Option<SelectOption> = None;
        assert_eq!(value.commit(&opt("b", 2)), Some(Some(opt("b", 2))));
        assert!(value.selected().is_empty());
    }

    #[test]
    fn multiple_toggles() {
        let value = vec![opt("a", 1), opt("b", 2)];
        assert_eq!(value.commit(&opt("a", 1)), Some(vec![opt("b", 2)]));
        assert_eq!(
            value.commit(&opt("c", 3)),
            Some(vec![opt("a", 1), opt("b", 2), opt("c", 3)])
        );
    }

    #[test]
    fn multiple_membership_is_by_value() {
        let value = vec![opt("a", 1)];
        assert!(value.is_selected(&opt("renamed", 1)));
        assert_eq!(value.commit(&opt("renamed", 1)), Some(vec![]));
    }

    #[test]
    fn cleared_is_empty() {
        assert_eq!(<Option<SelectOption>>::cleared(), None);
        assert_eq!(<Vec<SelectOption>>::cleared(), Vec::<SelectOption>::new());
    }

    #[test]
    fn toggle_sequences_never_duplicate() {
        let options = [opt("a", 1), opt("b", 2), opt("c", 3)];
        let clicks = [0, 1, 0, 2, 2, 1, 0, 0, 1, 2];
        let mut value: Vec<SelectOption> = Vec::new();
        let mut expected: Vec<i64> = Vec::new();

        for &i in &clicks {
            value = value.commit(&options[i]).expect("multiple mode always emits");
            let v = i as i64 + 1;
            if let Some(pos) = expected.iter().position(|&e| e == v) {
                expected.remove(pos);
            } else {
                expected.push(v);
            }
        }

        let got: Vec<i64> = value
            .iter()
            .map(|o| match o.value() {
                crate::option::OptionValue::Num(n) => *n,
                crate::option::OptionValue::Str(_) => unreachable!(),
            })
            .collect();
        assert_eq!(got, expected);
    }
}
