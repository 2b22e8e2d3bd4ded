use crate::core::exercise::ExerciseType;
use crate::core::state::{App, Screen};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::statistics::StatisticsRow;
use crate::tui::components::{Menu, QueryView, QuizView, StatisticsView, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [title_area, main_area] = Layout::vertical([Length(1), Min(0)]).areas(frame.area());

    let tally = match &app.screen {
        Screen::Exercise(quiz) => Some(quiz.tally),
        _ => None,
    };
    TitleBar::new(app.status_message.clone(), tally).render(frame, title_area);

    match &app.screen {
        Screen::Menu => Menu::new(&mut tui.menu).render(frame, main_area),
        Screen::Exercise(quiz) => QuizView::new(&mut tui.quiz, quiz).render(frame, main_area),
        Screen::Query(query) => {
            QueryView::new(query, &mut tui.input_box).render(frame, main_area)
        }
        Screen::Statistics => StatisticsView::new(statistics_rows(app)).render(frame, main_area),
    }
}

/// Figures for every exercise type, computed from the current history.
pub fn statistics_rows(app: &App) -> Vec<StatisticsRow> {
    let scorer = app.scorer();
    ExerciseType::ALL
        .into_iter()
        .map(|exercise| StatisticsRow {
            exercise,
            stats: scorer.statistics(exercise),
            trouble: app
                .catalog
                .items()
                .iter()
                .filter(|item| scorer.is_frequently_wrong(&item.reading, exercise))
                .map(|item| exercise.cue(item).to_string())
                .collect(),
        })
        .collect()
}
