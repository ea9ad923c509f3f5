use crate::{
    anim::Animation,
    answer::accepts,
    glyphs::{GlyphSet, Sprite},
    types::{LengthBounds, TrainerError, Word},
    words::pick_word,
};

use ratatui::{
    crossterm::event::{self, KeyCode},
    prelude::*,
    widgets::*,
};
use tui_input::{Input, InputRequest};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Pending,
    Correct,
    Wrong(String),
    NoMatch { min: usize, max: usize },
}

pub struct App {
    glyphs: GlyphSet,
    words: Vec<String>,
    bounds: LengthBounds,
    current: Option<Word>,
    anim: Animation,
    input: Input,
    status: Status,
    ticks: u64,
}

impl App {
    pub fn new(glyphs: GlyphSet, words: Vec<String>, bounds: LengthBounds, delay: u16) -> Self {
        let mut app = Self {
            glyphs,
            words,
            bounds,
            current: None,
            anim: Animation::new(delay),
            input: Input::default(),
            status: Status::Pending,
            ticks: 0,
        };
        app.next_word();
        app
    }

    /// Advance the frame clock and, while a word is being spelled, the
    /// animation. An idle animation is not ticked at all.
    pub fn tick(&mut self) {
        self.ticks += 1;
        if self.anim.is_playing() {
            self.anim.tick(self.ticks, &self.glyphs);
        }
    }

    fn next_word(&mut self) {
        match pick_word(&self.words, &self.glyphs, &self.bounds, &mut rand::rng()) {
            Ok(word) => {
                self.anim.start(word.tokens.clone(), self.ticks);
                self.current = Some(word);
                self.input = Input::default();
                self.status = Status::Pending;
            }
            Err(TrainerError::NoWordMatchesBounds { min, max }) => {
                self.status = Status::NoMatch { min, max };
            }
            Err(e) => {
                // pick_word only reports bounds failures; anything else
                // would be a bug worth seeing in the log
                log::warn!("picking a word failed: {e}");
            }
        }
    }

    fn replay(&mut self) {
        if let Some(word) = &self.current {
            self.anim.start(word.tokens.clone(), self.ticks);
        }
    }

    fn check_answer(&mut self) {
        let Some(word) = &self.current else {
            return;
        };
        self.status = if accepts(self.input.value(), &word.normalized) {
            Status::Correct
        } else {
            Status::Wrong(word.original.clone())
        };
    }

    pub fn handle_key(&mut self, key: event::KeyEvent) {
        if self.status == Status::Correct {
            if key.code == KeyCode::Enter {
                self.next_word();
            }

            return;
        }

        match key.code {
            KeyCode::Enter => self.check_answer(),
            KeyCode::F(2) => self.next_word(),
            KeyCode::F(5) => self.replay(),
            KeyCode::Up => self.anim.adjust_delay(-2),
            KeyCode::Down => self.anim.adjust_delay(2),
            KeyCode::F(6) => self.bounds.set_min(self.bounds.min().saturating_sub(1)),
            KeyCode::F(7) => self.bounds.set_min(self.bounds.min() + 1),
            KeyCode::F(8) => self.bounds.set_max(self.bounds.max().saturating_sub(1)),
            KeyCode::F(9) => self.bounds.set_max(self.bounds.max() + 1),
            KeyCode::Char(c) => {
                self.input.handle(InputRequest::InsertChar(c));
            }
            KeyCode::Backspace => {
                self.input.handle(InputRequest::DeletePrevChar);
            }
            _ => {}
        }
    }

    pub fn draw_ui(&self, f: &mut Frame) {
        let area = f.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints(
                [
                    Constraint::Length(1), // Title
                    Constraint::Min(9),    // Sign card
                    Constraint::Length(3), // Answer
                    Constraint::Length(4), // Status
                    Constraint::Min(0),
                ]
                .as_ref(),
            )
            .split(area);

        let title = Paragraph::new("Fingeralphabet").alignment(Alignment::Center);
        f.render_widget(title, chunks[0]);

        let sign_block = Block::default().title("Zeichen").borders(Borders::ALL);
        let sign_inner = sign_block.inner(chunks[1]);
        f.render_widget(sign_block, chunks[1]);

        if let Some(frame) = self.anim.frame() {
            if let Some(sprite) = self.glyphs.get(&frame.glyph) {
                let card = sprite_area(sign_inner, sprite, frame.dx, frame.dy);
                let rows: Vec<Line> = sprite
                    .rows
                    .iter()
                    .map(|r| Line::from(r.replace('#', "█")))
                    .collect();
                f.render_widget(Paragraph::new(rows), card);
            }
        }

        let answer_block = Block::default().title("Antwort").borders(Borders::ALL);
        let answer_inner = answer_block.inner(chunks[2]);
        let answer = Paragraph::new(self.input.value()).block(answer_block);
        f.render_widget(answer, chunks[2]);
        f.set_cursor_position((
            answer_inner.x + self.input.visual_cursor() as u16,
            answer_inner.y,
        ));

        let feedback = match &self.status {
            Status::Pending => Span::raw(""),
            Status::Correct => Span::styled("richtig!", Style::default().fg(Color::Green)),
            Status::Wrong(original) => Span::styled(
                format!("falsch! ({original})"),
                Style::default().fg(Color::Red),
            ),
            Status::NoMatch { min, max } => Span::styled(
                format!("kein Wort mit {min}-{max} Zeichen in der Liste!"),
                Style::default().fg(Color::Yellow),
            ),
        };
        let info = format!(
            "Länge {}-{} | Tempo {} | Enter prüfen | F5 wiederholen | F2 neues Wort | ↑/↓ Tempo | F6-F9 Länge | Esc Ende",
            self.bounds.min(),
            self.bounds.max(),
            self.anim.delay(),
        );

        let status_block = Block::default().title("Status").borders(Borders::ALL);
        let status = Paragraph::new(vec![Line::from(feedback), Line::from(info)]).block(status_block);
        f.render_widget(status, chunks[3]);
    }
}

/// Where the sprite card lands inside the sign area: centered, then
/// displaced by the animation offset and clipped to the area.
fn sprite_area(inner: Rect, sprite: &Sprite, dx: i16, dy: i16) -> Rect {
    let w = sprite.width() as u16;
    let h = sprite.height() as u16;
    let x = inner.x as i32 + (inner.width.saturating_sub(w) / 2) as i32 + dx as i32;
    let y = inner.y as i32 + (inner.height.saturating_sub(h) / 2) as i32 + dy as i32;

    Rect::new(x.max(0) as u16, y.max(0) as u16, w, h).intersection(inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DEFAULT_DELAY, INITIAL_DELAY, MAX_DELAY, MIN_DELAY};
    use ratatui::crossterm::event::KeyEvent;

    fn app_with(words: &[&str], bounds: LengthBounds) -> App {
        App::new(
            GlyphSet::builtin(),
            words.iter().map(|w| w.to_string()).collect(),
            bounds,
            DEFAULT_DELAY,
        )
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.handle_key(KeyEvent::from(KeyCode::Char(c)));
        }
    }

    #[test]
    fn correct_answer_then_enter_starts_the_next_round() {
        let mut app = app_with(&["Hund"], LengthBounds::new(1, 20));
        type_word(&mut app, "hund");
        app.handle_key(KeyEvent::from(KeyCode::Enter));
        assert_eq!(app.status, Status::Correct);

        app.handle_key(KeyEvent::from(KeyCode::Enter));
        assert_eq!(app.status, Status::Pending);
        assert_eq!(app.input.value(), "");
        assert!(app.anim.is_playing());
    }

    #[test]
    fn typing_is_ignored_after_a_correct_answer() {
        let mut app = app_with(&["Hund"], LengthBounds::new(1, 20));
        type_word(&mut app, "hund");
        app.handle_key(KeyEvent::from(KeyCode::Enter));
        type_word(&mut app, "xyz");
        assert_eq!(app.input.value(), "hund");
    }

    #[test]
    fn wrong_answer_names_the_word_and_keeps_the_input() {
        let mut app = app_with(&["Hund"], LengthBounds::new(1, 20));
        type_word(&mut app, "katze");
        app.handle_key(KeyEvent::from(KeyCode::Enter));
        assert_eq!(app.status, Status::Wrong("Hund".to_string()));
        assert_eq!(app.input.value(), "katze");
    }

    #[test]
    fn alternate_spelling_counts_as_correct() {
        let mut app = app_with(&["Straße"], LengthBounds::new(1, 20));
        type_word(&mut app, "strasse");
        app.handle_key(KeyEvent::from(KeyCode::Enter));
        assert_eq!(app.status, Status::Correct);
    }

    #[test]
    fn replay_runs_the_animation_again() {
        let mut app = app_with(&["Ei"], LengthBounds::new(1, 20));
        for _ in 0..INITIAL_DELAY {
            app.tick();
        }
        assert!(app.anim.frame().is_some());

        app.handle_key(KeyEvent::from(KeyCode::F(5)));
        assert!(app.anim.frame().is_none());
        for _ in 0..INITIAL_DELAY {
            app.tick();
        }
        assert_eq!(app.anim.frame().unwrap().glyph, "e");
    }

    #[test]
    fn speed_keys_stay_within_the_delay_bounds() {
        let mut app = app_with(&["Ei"], LengthBounds::new(1, 20));
        for _ in 0..100 {
            app.handle_key(KeyEvent::from(KeyCode::Up));
        }
        assert_eq!(app.anim.delay(), MIN_DELAY);
        for _ in 0..100 {
            app.handle_key(KeyEvent::from(KeyCode::Down));
        }
        assert_eq!(app.anim.delay(), MAX_DELAY);
    }

    #[test]
    fn bound_keys_drag_each_other_along() {
        let mut app = app_with(&["Ei", "Hund"], LengthBounds::new(2, 4));
        app.handle_key(KeyEvent::from(KeyCode::F(8))); // max 3
        app.handle_key(KeyEvent::from(KeyCode::F(8))); // max 2
        assert_eq!(app.bounds.max(), 2);

        app.handle_key(KeyEvent::from(KeyCode::F(7))); // min 3 drags max up
        assert_eq!(app.bounds.min(), 3);
        assert_eq!(app.bounds.max(), 3);
    }

    #[test]
    fn unsatisfiable_bounds_surface_in_the_status() {
        let mut bounds = LengthBounds::new(2, 10);
        bounds.set_min(4);
        bounds.set_max(6);
        let app = app_with(&["Ei", "Schmetterling"], bounds);
        assert_eq!(app.status, Status::NoMatch { min: 4, max: 6 });
        assert!(app.current.is_none());
    }
}
