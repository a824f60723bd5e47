use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use edumate::ai::{AnswerJudge, ModelHandle, OpenRouterGenerator, TextGenerator};
use edumate::models::{AiRequest, AiResponse, AppState, LearnState, QuizSession};
use edumate::{draw_app, handle_learn_input, handle_quiz_input, logger, spawn_ai_worker, Config};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    logger::init(&config.log_file);
    logger::log(&format!("Starting edumate with model {}", config.model));

    let model_name = config.model.clone();
    let model = Arc::new(ModelHandle::new(move || {
        let generator = OpenRouterGenerator::new(model_name.clone())?;
        Ok(Arc::new(generator) as Arc<dyn TextGenerator>)
    }));
    let judge = Arc::new(AnswerJudge::new(model, config.generation.clone()));

    let (request_tx, request_rx) = mpsc::channel::<AiRequest>(8);
    let (response_tx, mut response_rx) = mpsc::channel::<AiResponse>(8);
    let _worker = spawn_ai_worker(judge, response_tx, request_rx);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run(&mut terminal, &config, request_tx, &mut response_rx).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        logger::log(&format!("Exiting with error: {}", e));
    }
    result.map_err(Into::into)
}

async fn run(
    terminal: &mut Tui,
    config: &Config,
    request_tx: mpsc::Sender<AiRequest>,
    response_rx: &mut mpsc::Receiver<AiResponse>,
) -> io::Result<()> {
    let mut app_state = AppState::Learn;
    let mut learn = LearnState::default();
    let mut session = QuizSession::new(Some(request_tx));
    let mut events = EventStream::new();

    loop {
        terminal.draw(|f| draw_app(f, app_state, &mut learn, &mut session, &config.model))?;

        tokio::select! {
            maybe_event = events.next() => {
                let Some(event) = maybe_event else {
                    return Ok(());
                };
                if let Event::Key(key) = event?
                    && key.kind == KeyEventKind::Press
                    && !handle_key(key, &mut app_state, &mut learn, &mut session)
                {
                    return Ok(());
                }
            }
            Some(response) = response_rx.recv() => {
                session.process_ai_response(response);
            }
        }
    }
}

/// Returns `false` when the app should exit.
fn handle_key(
    key: KeyEvent,
    app_state: &mut AppState,
    learn: &mut LearnState,
    session: &mut QuizSession,
) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return false;
    }

    match *app_state {
        AppState::Learn => handle_learn_input(learn, key, app_state),
        AppState::Quiz => handle_quiz_input(session, key, app_state),
        AppState::LearnQuitConfirm | AppState::QuizQuitConfirm => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => return false,
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                *app_state = app_state.resume();
            }
            _ => {}
        },
    }
    true
}
