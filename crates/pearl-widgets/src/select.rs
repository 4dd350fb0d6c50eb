//! Controlled dropdown select with single and multiple selection.
//!
//! The widget never owns the selection. It keeps a copy the owner pushes in
//! with [`Select::set_value`], and reports every commit as
//! [`Message::Changed`]. The owner applies (or ignores) the change and pushes
//! the new value back. Only the open/closed state and the highlighted row
//! belong to the widget; all of that logic lives in [`crate::reducer`].
//!
//! ```rust,ignore
//! fn update(&mut self, msg: Msg) -> Command<Msg> {
//!     match msg {
//!         Msg::Fruit(select::Message::Changed(value)) => {
//!             self.fruit.set_value(value);
//!             Command::none()
//!         }
//!         Msg::Fruit(m) => self.fruit.update(m).map(Msg::Fruit),
//!     }
//! }
//! ```

use crate::chrome::{focus_block, list_block};
use crate::key::SelectKeyMap;
use crate::mode::SelectionMode;
use crate::option::SelectOption;
use crate::reducer::{self, clamp_highlight, Event, State};
use crate::text::{display_width, fit};
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use pearl_core::command::Command;
use pearl_core::component::Component;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;
use std::cell::{Cell, RefCell};

/// Messages for the select component.
#[derive(Debug, Clone, PartialEq)]
pub enum Message<V> {
    /// Key press routed to the select. Ignored unless focused.
    KeyPress(KeyEvent),
    /// Mouse event, hit-tested against the last rendered layout.
    Mouse(MouseEvent),
    Open,
    Close,
    Focus,
    /// Focus moved elsewhere. Closes the list.
    Blur,
    /// Emitted with the new selection when the user commits a change.
    Changed(V),
}

/// Style hooks for every region of the select.
#[derive(Debug, Clone)]
pub struct SelectStyle {
    pub value: Style,
    pub placeholder: Style,
    pub badge: Style,
    pub clear: Style,
    pub divider: Style,
    pub caret: Style,
    pub option: Style,
    /// Patched over `option` for selected rows.
    pub selected: Style,
    /// Patched over `option` (and `selected`) for the highlighted row.
    pub highlighted: Style,
    pub border_focused: Style,
    pub border_unfocused: Style,
}

impl Default for SelectStyle {
    fn default() -> Self {
        Self {
            value: Style::default(),
            placeholder: Style::default().fg(Color::DarkGray),
            badge: Style::default().fg(Color::Black).bg(Color::Cyan),
            clear: Style::default().fg(Color::DarkGray),
            divider: Style::default().fg(Color::DarkGray),
            caret: Style::default().fg(Color::DarkGray),
            option: Style::default(),
            selected: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            highlighted: Style::default().bg(Color::DarkGray),
            border_focused: Style::default().fg(Color::Cyan),
            border_unfocused: Style::default().fg(Color::DarkGray),
        }
    }
}

/// Regions recorded by the last `view`, for mouse hit-testing.
#[derive(Debug, Default)]
struct HitMap {
    container: Rect,
    clear: Rect,
    badges: Vec<Rect>,
    list: Rect,
    rows: Vec<(Rect, usize)>,
}

impl HitMap {
    fn target(&self, pos: Position) -> Option<Event> {
        if self.clear.contains(pos) {
            return Some(Event::ClearClick);
        }
        if let Some(i) = self.badges.iter().position(|r| r.contains(pos)) {
            return Some(Event::BadgeClick(i));
        }
        if let Some(index) = self.row_at(pos) {
            return Some(Event::OptionClick(index));
        }
        self.container.contains(pos).then_some(Event::ContainerClick)
    }

    fn row_at(&self, pos: Position) -> Option<usize> {
        self.rows
            .iter()
            .find(|(rect, _)| rect.contains(pos))
            .map(|&(_, index)| index)
    }

    fn inside(&self, pos: Position) -> bool {
        self.container.contains(pos) || self.list.contains(pos)
    }

    /// Forget the list regions once it is no longer drawn.
    fn close_list(&mut self) {
        self.list = Rect::default();
        self.rows.clear();
    }
}

/// A dropdown select over `options`, in the mode given by `V`.
///
/// Use the [`SingleSelect`] and [`MultiSelect`] aliases.
pub struct Select<V: SelectionMode> {
    options: Vec<SelectOption>,
    value: V,
    state: State,
    focus: bool,
    placeholder: String,
    title: Option<String>,
    style: SelectStyle,
    keys: SelectKeyMap,
    max_visible: usize,
    scroll: Cell<usize>,
    hits: RefCell<HitMap>,
}

/// A select holding at most one option.
pub type SingleSelect = Select<Option<SelectOption>>;

/// A select holding any subset of its options.
pub type MultiSelect = Select<Vec<SelectOption>>;

impl<V: SelectionMode> Select<V> {
    /// Create a closed, unfocused select with an empty selection.
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self {
            options,
            value: V::cleared(),
            state: State::default(),
            focus: false,
            placeholder: "Select...".to_string(),
            title: None,
            style: SelectStyle::default(),
            keys: SelectKeyMap::default(),
            max_visible: 8,
            scroll: Cell::new(0),
            hits: RefCell::new(HitMap::default()),
        }
    }

    /// Set the initial selection.
    pub fn with_value(mut self, value: V) -> Self {
        self.value = value;
        self
    }

    /// Text shown when nothing is selected.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Title drawn in the container border.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_style(mut self, style: SelectStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_key_map(mut self, keys: SelectKeyMap) -> Self {
        self.keys = keys;
        self
    }

    /// Rows shown before the option list scrolls.
    pub fn with_max_visible(mut self, rows: usize) -> Self {
        self.max_visible = rows.max(1);
        self
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// The selection as last pushed in by the owner.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Replace the mirrored selection. Call this after handling [`Message::Changed`].
    pub fn set_value(&mut self, value: V) {
        self.value = value;
    }

    /// Replace the options, keeping the highlight in range.
    ///
    /// An open list that had nothing to highlight starts at the first option.
    pub fn set_options(&mut self, options: Vec<SelectOption>) {
        self.options = options;
        self.state.highlighted = match clamp_highlight(self.state.highlighted, self.options.len()) {
            None if self.state.open && !self.options.is_empty() => Some(0),
            highlighted => highlighted,
        };
    }

    pub fn is_open(&self) -> bool {
        self.state.open
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.state.highlighted
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn key_map(&self) -> &SelectKeyMap {
        &self.keys
    }

    /// Give this select keyboard focus.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Remove focus and close the list.
    pub fn blur(&mut self) {
        self.focus = false;
        self.state = reducer::reduce(self.state, Event::Blur, &self.options, &self.value).state;
        self.hits.get_mut().close_list();
    }

    fn apply(&mut self, event: Event) -> Command<Message<V>> {
        let transition = reducer::reduce(self.state, event, &self.options, &self.value);
        tracing::trace!(?event, from = ?self.state, to = ?transition.state, "select transition");
        self.state = transition.state;
        if !self.state.open {
            self.hits.get_mut().close_list();
        }

        match transition.change {
            Some(value) => {
                tracing::debug!(?value, "selection changed");
                Command::message(Message::Changed(value))
            }
            None => Command::none(),
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Command<Message<V>> {
        let pos = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let (target, inside) = {
                    let hits = self.hits.borrow();
                    (hits.target(pos), hits.inside(pos))
                };
                match target {
                    Some(event) => {
                        self.focus = true;
                        self.apply(event)
                    }
                    None if !inside && (self.focus || self.state.open) => {
                        self.focus = false;
                        self.apply(Event::Blur)
                    }
                    None => Command::none(),
                }
            }
            MouseEventKind::Moved => {
                let row = self.hits.borrow().row_at(pos);
                match row {
                    Some(index) => self.apply(Event::Hover(index)),
                    None => Command::none(),
                }
            }
            _ => Command::none(),
        }
    }

    fn render_value(&self, frame: &mut Frame, area: Rect, hits: &mut HitMap) {
        let selected = self.value.selected();
        if selected.is_empty() {
            let text = fit(&self.placeholder, area.width as usize);
            frame.render_widget(Paragraph::new(Span::styled(text, self.style.placeholder)), area);
            return;
        }

        if !V::MULTIPLE {
            let text = fit(selected[0].label(), area.width as usize);
            frame.render_widget(Paragraph::new(Span::styled(text, self.style.value)), area);
            return;
        }

        let mut x = area.x;
        for option in selected {
            let badge = format!("{} ×", option.label());
            let width = u16::try_from(display_width(&badge)).unwrap_or(u16::MAX);
            if x.saturating_add(width) > area.right() {
                if x < area.right() {
                    frame.render_widget(
                        Paragraph::new(Span::styled("…", self.style.placeholder)),
                        Rect::new(x, area.y, 1, 1),
                    );
                }
                break;
            }
            let rect = Rect::new(x, area.y, width, 1);
            frame.render_widget(Paragraph::new(Span::styled(badge, self.style.badge)), rect);
            hits.badges.push(rect);
            x = x.saturating_add(width).saturating_add(1);
        }
    }

    fn render_list(&self, frame: &mut Frame, anchor: Rect, hits: &mut HitMap) {
        let rows = self.options.len().clamp(1, self.max_visible);
        let rows = u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(2);
        let list_area = Rect::new(anchor.x, anchor.bottom(), anchor.width, rows)
            .intersection(frame.area());
        if list_area.height < 3 || list_area.width < 4 {
            return;
        }

        frame.render_widget(Clear, list_area);
        let block = list_block(self.style.border_focused);
        let inner = block.inner(list_area);
        frame.render_widget(block, list_area);
        hits.list = list_area;

        if self.options.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled("No options", self.style.placeholder)),
                Rect { height: 1, ..inner },
            );
            return;
        }

        let visible = inner.height as usize;
        let offset = self.scroll_offset(visible);
        for (row, index) in (offset..self.options.len()).take(visible).enumerate() {
            let option = &self.options[index];
            let is_selected = self.value.is_selected(option);
            let mut style = self.style.option;
            if is_selected {
                style = style.patch(self.style.selected);
            }
            if self.state.highlighted == Some(index) {
                style = style.patch(self.style.highlighted);
            }

            let marker = if is_selected { "✓ " } else { "  " };
            let label = fit(option.label(), (inner.width as usize).saturating_sub(2));
            let rect = Rect {
                y: inner.y + row as u16,
                height: 1,
                ..inner
            };
            frame.render_widget(
                Paragraph::new(Line::from(format!("{marker}{label}"))).style(style),
                rect,
            );
            hits.rows.push((rect, index));
        }
    }

    /// First visible row, moved just enough to keep the highlight in view.
    fn scroll_offset(&self, visible: usize) -> usize {
        let max_offset = self.options.len().saturating_sub(visible);
        let mut offset = self.scroll.get().min(max_offset);
        if let Some(h) = self.state.highlighted {
            if h < offset {
                offset = h;
            } else if h >= offset + visible {
                offset = h + 1 - visible;
            }
        }
        self.scroll.set(offset);
        offset
    }
}

impl<V: SelectionMode> Component for Select<V> {
    type Message = Message<V>;

    fn update(&mut self, msg: Message<V>) -> Command<Message<V>> {
        match msg {
            Message::KeyPress(key) if self.focus => match self.keys.action(&key) {
                Some(nav) => self.apply(Event::Key(nav)),
                None => Command::none(),
            },
            Message::Mouse(mouse) => self.handle_mouse(mouse),
            Message::Open => self.apply(Event::SetOpen(true)),
            Message::Close => self.apply(Event::SetOpen(false)),
            Message::Focus => {
                self.focus = true;
                Command::none()
            }
            Message::Blur => {
                self.focus = false;
                self.apply(Event::Blur)
            }
            // Outputs for the owner, and keys while unfocused.
            Message::KeyPress(_) | Message::Changed(_) => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let mut hits = HitMap {
            container: area,
            ..HitMap::default()
        };

        let block = focus_block(
            self.title.as_deref(),
            self.focus,
            self.style.border_focused,
            self.style.border_unfocused,
        );
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.height > 0 && inner.width > 0 {
            let row = Rect { height: 1, ..inner };
            let [value_area, clear_area, divider_area, caret_area] = Layout::horizontal([
                Constraint::Fill(1),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(2),
            ])
            .areas(row);

            self.render_value(frame, value_area, &mut hits);

            frame.render_widget(Paragraph::new(Span::styled("×", self.style.clear)), clear_area);
            hits.clear = clear_area;
            frame.render_widget(Paragraph::new(Span::styled("│", self.style.divider)), divider_area);
            let caret = if self.state.open { " ▾" } else { " ▸" };
            frame.render_widget(Paragraph::new(Span::styled(caret, self.style.caret)), caret_area);
        }

        if self.state.open {
            self.render_list(frame, area, &mut hits);
        }

        *self.hits.borrow_mut() = hits;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}
