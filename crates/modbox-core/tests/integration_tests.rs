//! Integration tests for modbox-core
//!
//! These tests drive the board and the high score screen together through
//! the public API and the recording doubles.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use modbox_core::mock::{RecordingAudio, RecordingDisplay, RecordingMenu, ScriptedInput};
use modbox_core::{
    Button, Config, Navigation, PollingWaiter, Rank, ScoreBoard, ScoreEntry, Screen, Tone,
    record_score, show_high_scores,
};

/// Seeded score stream so failures reproduce
fn score_stream(seed: u64, count: usize) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.random_range(-50..150)).collect()
}

mod board_invariant_tests {
    use super::*;

    #[test]
    fn test_sorted_after_every_submit() {
        for seed in 0..20 {
            let mut board = ScoreBoard::new(7);
            for (i, score) in score_stream(seed, 60).into_iter().enumerate() {
                board.submit(score, format!("P{}", i));
                let scores: Vec<i32> = board.entries().iter().map(|e| e.score).collect();
                assert!(
                    scores.windows(2).all(|w| w[0] >= w[1]),
                    "seed {} step {}: {:?}",
                    seed,
                    i,
                    scores
                );
            }
        }
    }

    #[test]
    fn test_count_never_exceeds_capacity() {
        for capacity in 1..6 {
            let mut board = ScoreBoard::new(capacity);
            for (i, score) in score_stream(capacity as u64, 40).into_iter().enumerate() {
                board.submit(score, format!("P{}", i));
                assert!(board.len() <= capacity);
                assert_eq!(board.len(), (i + 1).min(capacity));
            }
        }
    }

    #[test]
    fn test_full_board_only_changes_for_strictly_higher_score() {
        let mut board = ScoreBoard::new(4);
        for (i, score) in score_stream(99, 4).into_iter().enumerate() {
            board.submit(score, format!("P{}", i));
        }

        for (i, score) in score_stream(7, 50).into_iter().enumerate() {
            let lowest = board.lowest().map(|e| e.score).unwrap();
            let before = board.clone();
            let rank = board.submit(score, format!("N{}", i));

            if score > lowest {
                let rank = rank.expect("higher score must be accepted");
                let mut expected = before.entries()[..3].to_vec();
                expected.insert(rank.index(), ScoreEntry::new(score, format!("N{}", i)));
                assert_eq!(board.entries(), expected.as_slice());
            } else {
                assert_eq!(rank, None);
                assert_eq!(board, before);
            }
        }
    }

    #[test]
    fn test_equal_scores_keep_insertion_order() {
        let mut board = ScoreBoard::new(10);
        board.submit(100, "TOP");
        for name in ["FIRST", "SECOND", "THIRD"] {
            board.submit(50, name);
        }
        board.submit(75, "MID");

        let names: Vec<&str> = board.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["TOP", "MID", "FIRST", "SECOND", "THIRD"]);
    }

    #[test]
    fn test_rank_matches_stored_position() {
        let mut board = ScoreBoard::new(5);
        for (i, score) in score_stream(3, 30).into_iter().enumerate() {
            let name = format!("P{}", i);
            if let Some(rank) = board.submit(score, name.clone()) {
                let entry = board.get(rank.index()).unwrap();
                assert_eq!(entry.name, name);
                assert_eq!(entry.score, score);
            }
        }
    }
}

mod session_tests {
    use super::*;

    #[test]
    fn test_game_session_then_high_score_screen() {
        let config = Config::parse("capacity = 3").unwrap();
        let mut board = ScoreBoard::new(config.capacity);
        let mut audio = RecordingAudio::new();

        let results: Vec<Option<Rank>> = [(10, "A"), (5, "B"), (20, "C"), (1, "D"), (15, "E")]
            .into_iter()
            .map(|(score, name)| record_score(&mut board, &mut audio, config.tone(), score, name))
            .collect();

        assert_eq!(
            results,
            [
                Some(Rank::new(0)),
                Some(Rank::new(1)),
                Some(Rank::new(0)),
                None,
                Some(Rank::new(1)),
            ]
        );
        assert_eq!(audio.played().len(), 4);
        assert!(audio.played().iter().all(|t| *t == Tone::score_saved()));

        let mut display = RecordingDisplay::new();
        let mut waiter = PollingWaiter::new(
            ScriptedInput::pressed_after(config.back_button, 5),
            config.back_button,
        )
        .with_interval(Duration::ZERO);
        let mut navigation = Navigation::new();
        navigation.go_to(Screen::Playing);
        let mut menu = RecordingMenu::new();

        show_high_scores(
            &board,
            &mut display,
            &mut waiter,
            config.back_button,
            &mut navigation,
            &mut menu,
        )
        .unwrap();

        assert_eq!(
            display.lines(),
            [
                "HIGH SCORES",
                "1. C - 20",
                "2. E - 15",
                "3. A - 10",
                "Press B to return",
            ]
        );
        assert_eq!(waiter.input().polls(), 6);
        assert_eq!(navigation.current(), Screen::Menu);
        assert_eq!(menu.shown(), 1);
    }

    #[test]
    fn test_configured_back_button() {
        let config = Config::parse("back_button = \"START\"").unwrap();
        let board = ScoreBoard::new(config.capacity);
        let mut display = RecordingDisplay::new();
        let input = ScriptedInput::new(vec![Some(Button::B), Some(Button::Start)]);
        let mut waiter =
            PollingWaiter::new(input, config.back_button).with_interval(Duration::ZERO);
        let mut navigation = Navigation::new();
        let mut menu = RecordingMenu::new();

        show_high_scores(
            &board,
            &mut display,
            &mut waiter,
            config.back_button,
            &mut navigation,
            &mut menu,
        )
        .unwrap();

        assert_eq!(waiter.input().polls(), 2);
        assert_eq!(display.lines().last(), Some(&"Press START to return"));
    }

    #[test]
    fn test_screen_redraw_is_stable() {
        let mut board = ScoreBoard::new(3);
        board.submit(9, "A");
        board.submit(4, "B");

        let mut first = RecordingDisplay::new();
        let mut second = RecordingDisplay::new();
        modbox_core::render_high_scores(&mut first, &board, Button::B).unwrap();
        modbox_core::render_high_scores(&mut second, &board, Button::B).unwrap();

        assert_eq!(first.calls(), second.calls());
    }
}
