//! # Multiple Select Demo
//!
//! A single select and a multiple select side by side:
//! - Tab / Shift+Tab move focus between the two selects
//! - Clicking a select focuses it; the other one blurs on its own
//! - Badges in the multiple select are clickable to deselect
//!
//! The UI draws on stderr so the final choices printed on stdout can be
//! piped: `cargo run --example multiple > picked.txt`

use pearl::crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use pearl::ratatui::layout::{Constraint, Layout};
use pearl::ratatui::style::{Color, Style};
use pearl::ratatui::widgets::Paragraph;
use pearl::ratatui::Frame;
use pearl::widgets::key::KeyMap;
use pearl::widgets::select::{self, MultiSelect, SingleSelect};
use pearl::widgets::SelectOption;
use pearl::{
    terminal_events, Command, Component, Model, OutputTarget, ProgramOptions, Subscription,
    TerminalEvent,
};

fn demo_options() -> Vec<SelectOption> {
    ["first", "second", "third", "fourth", "fifth"]
        .into_iter()
        .zip(1i64..)
        .map(|(label, value)| SelectOption::new(label, value))
        .collect()
}

struct App {
    one: SingleSelect,
    many: MultiSelect,
}

#[derive(Debug)]
enum Msg {
    Key(KeyEvent),
    Mouse(MouseEvent),
    One(select::Message<Option<SelectOption>>),
    Many(select::Message<Vec<SelectOption>>),
}

impl App {
    fn cycle_focus(&mut self) -> Command<Msg> {
        if self.one.focused() {
            self.one.blur();
            self.many.focus();
        } else {
            self.many.blur();
            self.one.focus();
        }
        Command::none()
    }
}

impl Model for App {
    type Message = Msg;
    type Flags = ();

    fn init(_: ()) -> (Self, Command<Msg>) {
        let options = demo_options();
        let mut one = SingleSelect::new(options.clone()).with_title(" One ");
        one.focus();
        let many = MultiSelect::new(options)
            .with_title(" Many ")
            .with_placeholder("Pick any...");
        (App { one, many }, Command::none())
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Key(key) => match key.code {
                KeyCode::Char('q') => Command::quit(),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Command::quit()
                }
                KeyCode::Tab | KeyCode::BackTab => self.cycle_focus(),
                _ if self.one.focused() => {
                    self.one.update(select::Message::KeyPress(key)).map(Msg::One)
                }
                _ => self.many.update(select::Message::KeyPress(key)).map(Msg::Many),
            },
            Msg::Mouse(mouse) => Command::batch([
                self.one.update(select::Message::Mouse(mouse)).map(Msg::One),
                self.many.update(select::Message::Mouse(mouse)).map(Msg::Many),
            ]),
            Msg::One(select::Message::Changed(value)) => {
                self.one.set_value(value);
                Command::none()
            }
            Msg::One(m) => self.one.update(m).map(Msg::One),
            Msg::Many(select::Message::Changed(value)) => {
                self.many.set_value(value);
                Command::none()
            }
            Msg::Many(m) => self.many.update(m).map(Msg::Many),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let [top, _, help_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());
        let [one_area, many_area] =
            Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)]).areas(top);

        frame.render_widget(
            Paragraph::new(format!(
                "{} · tab switch · q quit",
                self.one.key_map().help_line()
            ))
            .style(Style::default().fg(Color::DarkGray)),
            help_area,
        );

        self.one.view(frame, one_area);
        self.many.view(frame, many_area);
    }

    fn subscriptions(&self) -> Vec<Subscription<Msg>> {
        vec![terminal_events(|ev| match ev {
            TerminalEvent::Key(_) => ev.key_press().map(Msg::Key),
            TerminalEvent::Mouse(m) => Some(Msg::Mouse(m)),
            _ => None,
        })]
    }
}

#[pearl::tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let options = ProgramOptions {
        mouse_capture: true,
        output: OutputTarget::Stderr,
        ..ProgramOptions::default()
    };
    let app = pearl::run_with::<App>((), options).await?;
    let labels: Vec<&str> = app.many.value().iter().map(|o| o.label()).collect();
    println!("One: {:?}", app.one.value().as_ref().map(|o| o.label()));
    println!("Many: {labels:?}");
    Ok(())
}
