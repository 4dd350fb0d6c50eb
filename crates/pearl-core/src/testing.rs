//! Headless harnesses for exercising models and components in plain `#[test]`s.

use crate::command::{Action, Command, CommandInner};
use crate::component::Component;
use crate::model::Model;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

/// Drives a [`Model`] without a real terminal.
///
/// Messages returned through [`Command::message`] are queued; flush them with
/// [`drain_messages`](TestProgram::drain_messages). No tokio runtime or TTY
/// is needed.
///
/// ```rust,ignore
/// use pearl_core::testing::TestProgram;
///
/// let mut prog = TestProgram::<Demo>::new(());
/// prog.send(Msg::Picker(select::Message::Open));
/// assert!(prog.model().picker.is_open());
/// assert!(prog.render_string(40, 8).contains("first"));
/// ```
pub struct TestProgram<M: Model> {
    model: M,
    pending_messages: Vec<M::Message>,
    quit: bool,
}

impl<M: Model> TestProgram<M> {
    /// Create a test program by calling [`Model::init`] with the given flags.
    pub fn new(flags: M::Flags) -> Self {
        let (model, init_cmd) = M::init(flags);
        let mut program = Self {
            model,
            pending_messages: Vec::new(),
            quit: false,
        };
        program.collect(init_cmd);
        program
    }

    /// Send a message, triggering a single update cycle.
    pub fn send(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.collect(cmd);
    }

    /// Process pending messages until no new ones are produced.
    pub fn drain_messages(&mut self) {
        while !self.pending_messages.is_empty() {
            let messages: Vec<_> = self.pending_messages.drain(..).collect();
            for msg in messages {
                self.send(msg);
            }
        }
    }

    /// Whether any update so far returned [`Command::quit`].
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Shared reference to the model for assertions.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Mutable reference to the model, bypassing the update cycle.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Render the model to a [`Buffer`] of the given dimensions.
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        let mut terminal = test_terminal(width, height);
        terminal
            .draw(|frame| self.model.view(frame))
            .expect("test backend draw");
        terminal.backend().buffer().clone()
    }

    /// Render the model and return the visible content as a plain string.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        buffer_to_string(&self.render(width, height))
    }

    fn collect(&mut self, cmd: Command<M::Message>) {
        match cmd.inner {
            CommandInner::None => {}
            CommandInner::Action(Action::Message(msg)) => self.pending_messages.push(msg),
            CommandInner::Action(Action::Quit) => self.quit = true,
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    self.collect(cmd);
                }
            }
        }
    }
}

/// Render a single [`Component`] into `area` of a `width`×`height` buffer.
pub fn render_component<C: Component>(component: &C, width: u16, height: u16, area: Rect) -> Buffer {
    let mut terminal = test_terminal(width, height);
    terminal
        .draw(|frame| component.view(frame, area))
        .expect("test backend draw");
    terminal.backend().buffer().clone()
}

/// Rows of `buf` joined with newlines. Trailing whitespace is preserved.
pub fn buffer_to_string(buf: &Buffer) -> String {
    let area = buf.area;
    let mut output = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            output.push_str(buf[(x, y)].symbol());
        }
        if y + 1 < area.bottom() {
            output.push('\n');
        }
    }
    output
}

fn test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(width, height)).expect("test backend")
}
