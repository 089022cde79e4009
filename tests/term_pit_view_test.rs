//! Terminal frontend rendered into memory.

use tetris3d::core::{Engine, MemoryStore, NoSound, Renderer, ScriptedSource};
use tetris3d::term::{FrameBuffer, PitView, TerminalFrontend, Viewport};
use tetris3d::types::{Dimensions, GameAction};

fn screen(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

fn squares() -> Engine {
    Engine::with_ports(
        Box::new(ScriptedSource::new(vec![1])),
        Box::new(NoSound::default()),
        Box::new(MemoryStore::new(900)),
    )
}

#[test]
fn test_menu_screen() {
    let engine = squares();
    let text = screen(&PitView::default().render(&engine.snapshot(), Viewport::new(80, 24)));

    assert!(text.contains("3D BLOCKS"));
    assert!(text.contains("ENTER to start"));
    assert!(text.contains("TOP"));
    assert!(text.contains("FRONT"));
    assert!(text.contains("900"));
}

#[test]
fn test_score_updates_after_a_clear() {
    let mut engine = squares();
    engine.start(Dimensions::CLASSIC);
    for z in 0..10 {
        for x in 0..10 {
            engine.board_mut().set(x, 0, z, Some(1));
        }
    }
    engine.hard_drop();

    let text = screen(&PitView::default().render(&engine.snapshot(), Viewport::new(80, 24)));
    assert!(!text.contains("3D BLOCKS"));
    assert!(text.contains("SCORE"));
    assert!(text.contains("100"));
    assert!(text.contains("1180ms"));
}

#[test]
fn test_pause_and_game_over_overlays() {
    let view = PitView::default();
    let mut engine = squares();
    engine.start(Dimensions::CLASSIC);

    engine.apply_action(GameAction::TogglePause);
    let text = screen(&view.render(&engine.snapshot(), Viewport::new(80, 24)));
    assert!(text.contains("PAUSED"));

    engine.apply_action(GameAction::TogglePause);
    engine.board_mut().set(4, 19, 4, Some(1));
    engine.spawn();
    let text = screen(&view.render(&engine.snapshot(), Viewport::new(80, 24)));
    assert!(text.contains("GAME OVER"));
}

#[test]
fn test_mute_shows_in_panel() {
    let mut engine = squares();
    let view = PitView::default();

    let before = screen(&view.render(&engine.snapshot(), Viewport::new(80, 24)));
    engine.apply_action(GameAction::ToggleMute);
    let after = screen(&view.render(&engine.snapshot(), Viewport::new(80, 24)));

    assert!(!before.contains("OFF"));
    assert!(after.contains("OFF"));
}

#[test]
fn test_frontend_writes_full_frame_then_diffs() {
    let mut engine = squares();
    engine.start(Dimensions::CLASSIC);
    let mut frontend = TerminalFrontend::with_writer(Vec::new(), Viewport::new(80, 24));

    frontend.render(&engine.snapshot()).unwrap();
    let full = frontend.renderer().writer().len();
    assert!(full > 0);

    // nothing changed: nothing written
    engine.render_with(&mut frontend).unwrap();
    assert_eq!(frontend.renderer().writer().len(), full);

    assert!(engine.move_x(1));
    engine.render_with(&mut frontend).unwrap();
    let diff = frontend.renderer().writer().len() - full;
    assert!(diff > 0);
    assert!(diff < full / 2);
}

#[test]
fn test_frontend_resize_redraws() {
    let engine = squares();
    let mut frontend = TerminalFrontend::with_writer(Vec::new(), Viewport::new(80, 24));
    engine.render_with(&mut frontend).unwrap();
    let first = frontend.renderer().writer().len();

    frontend.resize(100, 30);
    assert_eq!(frontend.viewport(), Viewport::new(100, 30));
    engine.render_with(&mut frontend).unwrap();

    assert!(frontend.renderer().writer().len() - first > first / 2);
}
