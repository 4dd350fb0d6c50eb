//! The **pearl** select widget.
//!
//! [`Select`](select::Select) is a controlled dropdown implementing
//! [`pearl_core::Component`]. It runs in single mode
//! ([`SingleSelect`](select::SingleSelect), value `Option<SelectOption>`) or
//! multiple mode ([`MultiSelect`](select::MultiSelect), value
//! `Vec<SelectOption>`), and reports committed changes to its owner instead
//! of applying them.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`select`] | The component: messages, style hooks, rendering, hit-testing |
//! | [`reducer`] | Pure `(state, event) -> (state, change)` interaction logic |
//! | [`mode`] | [`SelectionMode`](mode::SelectionMode) for single and multiple selection |
//! | [`option`] | [`SelectOption`](option::SelectOption) label/value pairs |
//! | [`key`] | Configurable key bindings and help lines |
//! | [`chrome`] | Bordered container blocks |
//! | [`text`] | Display-width aware label fitting |

pub mod chrome;
pub mod key;
pub mod mode;
pub mod option;
pub mod reducer;
pub mod select;
pub mod text;

pub use mode::SelectionMode;
pub use option::{OptionValue, SelectOption};
pub use select::{MultiSelect, Select, SelectStyle, SingleSelect};
