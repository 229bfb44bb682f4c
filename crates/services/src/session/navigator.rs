use rand::Rng;

use rehearse_core::{Theme, ThemeId};

use super::view::SessionView;
use crate::error::SessionError;

//
// ─── NAVIGATION CHANGES ────────────────────────────────────────────────────────
//

/// What a navigation command changed, so the presentation layer can decide
/// what to redraw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavChange {
    ThemeSelected { theme: ThemeId },
    AnswerRevealed,
    QuestionChanged { index: usize },
}

//
// ─── NAVIGATOR ─────────────────────────────────────────────────────────────────
//

/// Per-session navigation state over resolved themes.
///
/// Tracks which theme is active, which of its questions is displayed, and
/// whether the answer is revealed. Commands that make no sense in the
/// current state come back as `SessionError` and leave the state untouched;
/// nothing here ever panics on out-of-order input.
#[derive(Debug, Default)]
pub struct Navigator {
    active: Option<ActiveTheme>,
}

#[derive(Debug)]
struct ActiveTheme {
    theme: Theme,
    index: usize,
    answer_shown: bool,
}

impl Navigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Activates a theme, starting at its first question with the answer
    /// hidden. Valid from any state; any prior position is discarded.
    pub fn select_theme(&mut self, theme: Theme) -> NavChange {
        let id = theme.id().clone();
        self.active = Some(ActiveTheme {
            theme,
            index: 0,
            answer_shown: false,
        });
        NavChange::ThemeSelected { theme: id }
    }

    /// Reveals the current question's answer. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns `NoThemeSelected` without an active theme, or
    /// `NoQuestionsAvailable` when the active theme holds no questions.
    pub fn reveal_answer(&mut self) -> Result<NavChange, SessionError> {
        let active = self.active.as_mut().ok_or(SessionError::NoThemeSelected)?;
        if active.theme.is_empty() {
            return Err(SessionError::NoQuestionsAvailable);
        }
        active.answer_shown = true;
        Ok(NavChange::AnswerRevealed)
    }

    /// Moves to a uniformly random different question and hides the answer.
    ///
    /// With a single question the index stays at 0; the answer is still
    /// hidden again.
    ///
    /// # Errors
    ///
    /// Returns `NoThemeSelected` without an active theme, or
    /// `NoQuestionsAvailable` when the active theme holds no questions.
    pub fn next_question(&mut self) -> Result<NavChange, SessionError> {
        self.next_question_with(&mut rand::rng())
    }

    /// Same as [`Navigator::next_question`], drawing from the given source.
    ///
    /// # Errors
    ///
    /// See [`Navigator::next_question`].
    pub fn next_question_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<NavChange, SessionError> {
        let active = self.active.as_mut().ok_or(SessionError::NoThemeSelected)?;
        let total = active.theme.question_count();
        if total == 0 {
            return Err(SessionError::NoQuestionsAvailable);
        }
        if total > 1 {
            // One uniform draw over the other total - 1 slots, so the index
            // always moves when it can.
            let mut pick = rng.random_range(0..total - 1);
            if pick >= active.index {
                pick += 1;
            }
            active.index = pick;
        }
        active.answer_shown = false;
        Ok(NavChange::QuestionChanged {
            index: active.index,
        })
    }

    /// Snapshot of what should be on screen right now.
    #[must_use]
    pub fn view(&self) -> SessionView<'_> {
        match &self.active {
            None => SessionView::Idle,
            Some(active) if active.theme.is_empty() => SessionView::Empty {
                theme: active.theme.name(),
            },
            Some(active) => {
                let question = &active.theme.questions()[active.index];
                SessionView::Card {
                    theme: active.theme.name(),
                    prompt: question.prompt(),
                    answer: active.answer_shown.then(|| question.answer()),
                    position: active.index + 1,
                    total: active.theme.question_count(),
                }
            }
        }
    }

    #[must_use]
    pub fn active_theme(&self) -> Option<&Theme> {
        self.active.as_ref().map(|active| &active.theme)
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.active.as_ref().map(|active| active.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use rehearse_core::{CardText, Question, QuestionId};

    fn theme(question_count: usize) -> Theme {
        let questions = (0..question_count)
            .map(|i| {
                let n = i64::try_from(i).unwrap();
                Question::new(
                    QuestionId::num(n),
                    CardText::parse(format!("Q{n}")).unwrap(),
                    CardText::parse(format!("A{n}")).unwrap(),
                )
            })
            .collect();
        Theme::new(ThemeId::num(1), "Test", questions)
    }

    #[test]
    fn commands_without_a_theme_are_refused() {
        let mut nav = Navigator::new();

        assert_eq!(nav.reveal_answer(), Err(SessionError::NoThemeSelected));
        assert_eq!(nav.next_question(), Err(SessionError::NoThemeSelected));
        assert_eq!(nav.view(), SessionView::Idle);
    }

    #[test]
    fn select_theme_starts_at_first_question_with_answer_hidden() {
        let mut nav = Navigator::new();
        let change = nav.select_theme(theme(3));

        assert_eq!(
            change,
            NavChange::ThemeSelected {
                theme: ThemeId::num(1)
            }
        );
        assert_eq!(
            nav.view(),
            SessionView::Card {
                theme: "Test",
                prompt: "Q0",
                answer: None,
                position: 1,
                total: 3,
            }
        );
    }

    #[test]
    fn reveal_answer_is_idempotent() {
        let mut nav = Navigator::new();
        nav.select_theme(theme(2));

        assert_eq!(nav.reveal_answer(), Ok(NavChange::AnswerRevealed));
        assert_eq!(nav.reveal_answer(), Ok(NavChange::AnswerRevealed));
        assert!(matches!(
            nav.view(),
            SessionView::Card {
                answer: Some("A0"),
                ..
            }
        ));
    }

    #[test]
    fn next_question_hides_the_answer_again() {
        let mut nav = Navigator::new();
        nav.select_theme(theme(2));
        nav.reveal_answer().unwrap();

        nav.next_question().unwrap();
        assert!(matches!(nav.view(), SessionView::Card { answer: None, .. }));
    }

    #[test]
    fn single_question_theme_never_moves() {
        let mut nav = Navigator::new();
        nav.select_theme(theme(1));

        for _ in 0..100 {
            let change = nav.next_question().unwrap();
            assert_eq!(change, NavChange::QuestionChanged { index: 0 });
        }
        assert_eq!(nav.current_index(), Some(0));
    }

    #[test]
    fn two_question_theme_always_alternates() {
        let mut nav = Navigator::new();
        nav.select_theme(theme(2));

        let mut previous = nav.current_index().unwrap();
        for _ in 0..50 {
            nav.next_question().unwrap();
            let current = nav.current_index().unwrap();
            assert_eq!(current, 1 - previous);
            previous = current;
        }
    }

    #[test]
    fn next_question_never_repeats_the_previous_index() {
        let mut nav = Navigator::new();
        nav.select_theme(theme(5));
        let mut rng = StdRng::seed_from_u64(7);

        let mut previous = nav.current_index().unwrap();
        for _ in 0..1000 {
            nav.next_question_with(&mut rng).unwrap();
            let current = nav.current_index().unwrap();
            assert_ne!(current, previous);
            previous = current;
        }
    }

    #[test]
    fn draws_cover_all_other_indices_roughly_uniformly() {
        let mut nav = Navigator::new();
        nav.select_theme(theme(4));
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0usize; 4];
        for _ in 0..3000 {
            nav.next_question_with(&mut rng).unwrap();
            counts[nav.current_index().unwrap()] += 1;
        }
        // 3000 draws over 4 slots: each should land near 750.
        for count in counts {
            assert!((500..=1000).contains(&count), "skewed counts: {counts:?}");
        }
    }

    #[test]
    fn empty_theme_reports_no_questions_available() {
        let mut nav = Navigator::new();
        nav.select_theme(theme(0));

        assert_eq!(nav.view(), SessionView::Empty { theme: "Test" });
        assert_eq!(nav.reveal_answer(), Err(SessionError::NoQuestionsAvailable));
        assert_eq!(nav.next_question(), Err(SessionError::NoQuestionsAvailable));
        // The refusal left the state alone.
        assert_eq!(nav.view(), SessionView::Empty { theme: "Test" });
    }

    #[test]
    fn reselecting_discards_the_previous_position() {
        let mut nav = Navigator::new();
        nav.select_theme(theme(5));
        nav.next_question().unwrap();
        nav.reveal_answer().unwrap();

        nav.select_theme(theme(2));
        assert_eq!(nav.current_index(), Some(0));
        assert!(matches!(nav.view(), SessionView::Card { answer: None, .. }));
    }
}
