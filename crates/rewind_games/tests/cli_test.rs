//! Tests for command-line parsing.

use clap::Parser;
use rewind_games::{Cli, Command};

#[test]
fn test_no_subcommand_defaults_to_play() {
    let cli = Cli::try_parse_from(["rewind_games"]).unwrap();
    assert_eq!(cli.command, None);
    assert_eq!(cli.command_or_default(), Command::Play { descending: false });
}

#[test]
fn test_play_descending() {
    let cli = Cli::try_parse_from(["rewind_games", "play", "--descending"]).unwrap();
    assert_eq!(cli.command_or_default(), Command::Play { descending: true });
}

#[test]
fn test_replay_arguments() {
    let cli = Cli::try_parse_from([
        "rewind_games",
        "replay",
        "--json",
        "--jump",
        "2",
        "0",
        "4",
        "8",
    ])
    .unwrap();
    assert_eq!(
        cli.command_or_default(),
        Command::Replay {
            moves: vec![0, 4, 8],
            jump: Some(2),
            descending: false,
            json: true,
        }
    );
}

#[test]
fn test_replay_descending() {
    let cli = Cli::try_parse_from(["rewind_games", "replay", "--descending", "4"]).unwrap();
    assert_eq!(
        cli.command_or_default(),
        Command::Replay {
            moves: vec![4],
            jump: None,
            descending: true,
            json: false,
        }
    );
}

#[test]
fn test_global_config_flag() {
    let cli =
        Cli::try_parse_from(["rewind_games", "replay", "4", "--config", "game.toml"]).unwrap();
    assert_eq!(cli.config, Some(std::path::PathBuf::from("game.toml")));
}

#[test]
fn test_non_numeric_move_is_rejected() {
    assert!(Cli::try_parse_from(["rewind_games", "replay", "center"]).is_err());
}
