use crate::command::Command;
use ratatui::{layout::Rect, Frame};

/// A reusable sub-model that renders into a given [`Rect`] area.
///
/// `Component` mirrors [`Model`](crate::Model) with one difference: its
/// [`view`](Component::view) method receives an `area: Rect`, so a parent
/// decides *where* each child renders.
///
/// # Composition pattern
///
/// Wrap the component's message type in a variant of the parent message and
/// use [`Command::map`] to lift the child's commands. Outputs the child
/// reports (such as a committed selection) come back through the same
/// variant and are handled by the parent:
///
/// ```rust,ignore
/// use pearl_core::{Model, Component, Command};
/// use pearl_widgets::select::{self, SingleSelect};
///
/// struct App { picker: SingleSelect, chosen: Option<SelectOption> }
///
/// enum Msg { Picker(select::Message<Option<SelectOption>>) }
///
/// impl Model for App {
///     // ...
///     fn update(&mut self, msg: Msg) -> Command<Msg> {
///         match msg {
///             Msg::Picker(select::Message::Changed(value)) => {
///                 self.chosen = value.clone();
///                 self.picker.set_value(value);
///                 Command::none()
///             }
///             Msg::Picker(m) => self.picker.update(m).map(Msg::Picker),
///         }
///     }
///
///     fn view(&self, frame: &mut Frame) {
///         self.picker.view(frame, frame.area());
///     }
/// }
/// ```
pub trait Component: Send + 'static {
    /// The component's internal message type.
    type Message: Send + 'static;

    /// Process a message, mutate state, and return a [`Command`] for side effects.
    ///
    /// The returned command uses the component's own `Message` type; the
    /// parent should call [`.map()`](Command::map) to lift it.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into a specific `area` of the [`Frame`].
    ///
    /// Components may draw overlays (such as an open option list) directly
    /// below `area`, clipped to the frame.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Whether this component currently has focus.
    ///
    /// A parent queries this to decide which child receives keyboard
    /// events. The default implementation returns `false`.
    fn focused(&self) -> bool {
        false
    }
}
