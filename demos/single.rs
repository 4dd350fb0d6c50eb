//! # Single Select Demo
//!
//! One select in single mode over five options, starting on "first":
//! - The app owns the selection and pushes it back with `set_value`
//! - Keys and mouse events are routed to the select through its message type
//! - Terminal focus loss blurs the select
//!
//! Run with: `cargo run --example single`
//! Logs go to `single.log` (set `RUST_LOG=trace` to see every transition).

use pearl::crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use pearl::ratatui::layout::{Constraint, Layout};
use pearl::ratatui::style::{Color, Style};
use pearl::ratatui::text::{Line, Span};
use pearl::ratatui::widgets::Paragraph;
use pearl::ratatui::Frame;
use pearl::widgets::key::KeyMap;
use pearl::widgets::select::{self, SingleSelect};
use pearl::widgets::SelectOption;
use pearl::{terminal_events, Command, Component, Model, ProgramOptions, Subscription, TerminalEvent};

fn demo_options() -> Vec<SelectOption> {
    ["first", "second", "third", "fourth", "fifth"]
        .into_iter()
        .zip(1i64..)
        .map(|(label, value)| SelectOption::new(label, value))
        .collect()
}

struct App {
    picker: SingleSelect,
    value: Option<SelectOption>,
}

#[derive(Debug)]
enum Msg {
    Key(KeyEvent),
    Mouse(MouseEvent),
    FocusLost,
    Picker(select::Message<Option<SelectOption>>),
}

impl Model for App {
    type Message = Msg;
    type Flags = ();

    fn init(_: ()) -> (Self, Command<Msg>) {
        let options = demo_options();
        let value = options.first().cloned();
        let mut picker = SingleSelect::new(options)
            .with_title(" Number ")
            .with_value(value.clone());
        picker.focus();
        (App { picker, value }, Command::none())
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Key(key) => match key.code {
                KeyCode::Char('q') => Command::quit(),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Command::quit()
                }
                _ => self.picker.update(select::Message::KeyPress(key)).map(Msg::Picker),
            },
            Msg::Mouse(mouse) => self.picker.update(select::Message::Mouse(mouse)).map(Msg::Picker),
            Msg::FocusLost => self.picker.update(select::Message::Blur).map(Msg::Picker),
            // The owner decides: here every change is accepted.
            Msg::Picker(select::Message::Changed(value)) => {
                self.value = value.clone();
                self.picker.set_value(value);
                Command::none()
            }
            Msg::Picker(m) => self.picker.update(m).map(Msg::Picker),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let [picker_area, _, status_area, help_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());
        let [picker_area, _] =
            Layout::horizontal([Constraint::Length(40), Constraint::Fill(1)]).areas(picker_area);

        let chosen = self.value.as_ref().map_or("nothing", |o| o.label());
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw("Selected: "),
                Span::styled(chosen, Style::default().fg(Color::Cyan)),
            ])),
            status_area,
        );
        frame.render_widget(
            Paragraph::new(format!("{} · q quit", self.picker.key_map().help_line()))
                .style(Style::default().fg(Color::DarkGray)),
            help_area,
        );

        // Drawn last so the open list overlays the status lines.
        self.picker.view(frame, picker_area);
    }

    fn subscriptions(&self) -> Vec<Subscription<Msg>> {
        vec![terminal_events(|ev| match ev {
            TerminalEvent::Key(_) => ev.key_press().map(Msg::Key),
            TerminalEvent::Mouse(m) => Some(Msg::Mouse(m)),
            TerminalEvent::FocusLost => Some(Msg::FocusLost),
            _ => None,
        })]
    }
}

#[pearl::tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let options = ProgramOptions {
        mouse_capture: true,
        focus_reporting: true,
        title: Some("pearl: single select".into()),
        log_file: Some("single.log".into()),
        ..ProgramOptions::default()
    };
    let app = pearl::run_with::<App>((), options).await?;
    match app.value {
        Some(option) => println!("Selected: {} ({})", option.label(), option.value()),
        None => println!("Nothing selected"),
    }
    Ok(())
}
