//! **pearl** -- a controlled select/dropdown widget for [`ratatui`] apps.
//!
//! This umbrella crate re-exports everything needed from one dependency:
//!
//! * All public items from [`pearl_core`] at the crate root ([`Model`],
//!   [`Component`], [`Command`], [`Subscription`], [`Program`], [`run`],
//!   [`run_with`], ...).
//! * The [`widgets`] module re-exports [`pearl_widgets`] ([`widgets::SingleSelect`],
//!   [`widgets::MultiSelect`], [`widgets::SelectOption`], ...).
//! * [`ratatui`], [`crossterm`], and [`tokio`] so demos and downstream crates
//!   do not need to depend on them directly.
//!
//! # Quick start
//!
//! ```ignore
//! use pearl::widgets::{select, SelectOption, SingleSelect};
//! use pearl::{Command, Component, Model};
//!
//! struct App { picker: SingleSelect }
//! enum Msg { Picker(select::Message<Option<SelectOption>>) }
//!
//! impl Model for App {
//!     type Message = Msg;
//!     type Flags = ();
//!
//!     fn init(_: ()) -> (Self, Command<Msg>) {
//!         let options = vec![SelectOption::new("first", 1), SelectOption::new("second", 2)];
//!         (App { picker: SingleSelect::new(options) }, Command::none())
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Command<Msg> {
//!         match msg {
//!             Msg::Picker(select::Message::Changed(value)) => {
//!                 self.picker.set_value(value);
//!                 Command::none()
//!             }
//!             Msg::Picker(m) => self.picker.update(m).map(Msg::Picker),
//!         }
//!     }
//!
//!     fn view(&self, frame: &mut pearl::ratatui::Frame) {
//!         self.picker.view(frame, frame.area());
//!     }
//! }
//! ```

pub use pearl_core::*;
pub mod widgets {
    pub use pearl_widgets::*;
}

// Re-export dependencies for use in demos and downstream crates
pub use crossterm;
pub use ratatui;
pub use tokio;
