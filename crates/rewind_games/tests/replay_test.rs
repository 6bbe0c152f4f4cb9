//! End-to-end tests for the headless replay driver.

use rewind_games::{AppConfig, Player, Status, render_json, render_text, replay};

#[test]
fn test_diagonal_win() {
    let game = replay(&AppConfig::default(), &[0, 1, 4, 2, 8], None).unwrap();
    assert_eq!(game.status(), Status::Won(Player::X));

    let text = render_text(&game, true);
    assert!(text.starts_with("X|O|O\n-+-+-\n4|X|6\n-+-+-\n7|8|X"));
    assert!(text.contains("Winner: X"));
    assert!(text.contains("> 5. Go to move #5 step coord: 3,3"));
}

#[test]
fn test_moves_after_win_are_ignored() {
    let game = replay(&AppConfig::default(), &[0, 1, 4, 2, 8, 3, 5], None).unwrap();
    assert_eq!(game.history().len(), 6);
}

#[test]
fn test_jump_then_json() {
    let game = replay(&AppConfig::default(), &[0, 1, 4, 2, 8], Some(2)).unwrap();
    let json: serde_json::Value = serde_json::from_str(&render_json(&game, true).unwrap()).unwrap();
    assert_eq!(json["status"], "Next player: X");
    assert_eq!(json["step_number"], 2);
    assert_eq!(json["winner"], serde_json::Value::Null);
    assert_eq!(json["moves"][2]["is_current"], true);
}

#[test]
fn test_descending_text() {
    let config = AppConfig::default().with_ascending(false);
    let game = replay(&config, &[4, 0], None).unwrap();
    let text = render_text(&game, false);
    let list: Vec<&str> = text.lines().skip(8).collect();
    assert_eq!(
        list,
        vec!["> 2. Go to move #2", "  1. Go to move #1", "  0. Go to game start"]
    );
}
