//! Integration tests - keys through the input map into the engine

use crossterm::event::{KeyCode, KeyEvent};
use tui_blockfall::core::{Engine, EngineConfig};
use tui_blockfall::input::{action_for, should_quit};
use tui_blockfall::types::GameStatus;

fn press(engine: &mut Engine, code: KeyCode) -> bool {
    match action_for(KeyEvent::from(code)) {
        Some(action) => engine.apply_action(action),
        None => false,
    }
}

#[test]
fn test_game_lifecycle() {
    let mut engine = Engine::new(EngineConfig::default().with_seed(12345));
    assert_eq!(engine.status(), GameStatus::Ready);

    // Nothing moves until Enter.
    assert!(!press(&mut engine, KeyCode::Left));
    assert!(press(&mut engine, KeyCode::Enter));
    assert_eq!(engine.status(), GameStatus::Running);

    assert!(press(&mut engine, KeyCode::Char('p')));
    assert_eq!(engine.status(), GameStatus::Paused);
    assert!(!press(&mut engine, KeyCode::Down));
    assert!(press(&mut engine, KeyCode::Char('p')));
    assert_eq!(engine.status(), GameStatus::Running);

    assert!(press(&mut engine, KeyCode::Char(' ')));
    assert!(engine.score() >= 2);

    assert!(press(&mut engine, KeyCode::Char('r')));
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.status(), GameStatus::Running);

    assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
}

#[test]
fn test_soft_drop_key_scores() {
    let mut engine = Engine::new(EngineConfig::default().with_seed(7));
    engine.start();
    let y = engine.active().map(|p| p.y);

    assert!(press(&mut engine, KeyCode::Char('s')));
    assert_eq!(engine.active().map(|p| p.y), y.map(|y| y + 1));
    assert_eq!(engine.score(), 1);
}

#[test]
fn test_play_until_game_over() {
    let mut engine = Engine::new(EngineConfig::default().with_seed(2024));
    press(&mut engine, KeyCode::Enter);

    // Hard-dropping straight down stacks the middle columns until spawn fails.
    for _ in 0..200 {
        if !press(&mut engine, KeyCode::Char(' ')) {
            break;
        }
    }
    assert!(engine.is_game_over());
    assert_eq!(engine.final_score(), Some(engine.score()));

    assert!(press(&mut engine, KeyCode::Enter));
    assert_eq!(engine.status(), GameStatus::Running);
    assert_eq!(engine.board().occupied_count(), 0);
}
