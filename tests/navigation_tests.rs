mod common;

use common::{session_from_text, snapshot};
use mazerunner::{InputKind, InputState, MoveOutcome, Position};

// Row 1 has a wall left of the start and an obstacle right of it
const ARENA: &str = r#"
.....
#S^.E
.....
"#;

#[test]
fn test_path_starts_with_start_cell() {
    let session = session_from_text(ARENA);
    assert_eq!(session.agent_position(), Position::new(1, 1));
    assert_eq!(session.agent_path(), &[6]);
    assert_eq!(session.input_state(), InputState::Idle);
}

#[test]
fn test_step_into_wall_never_moves() {
    let mut session = session_from_text(ARENA);
    assert_eq!(session.apply_input(InputKind::MoveLeft), MoveOutcome::Rejected);
    assert_eq!(session.agent_position(), Position::new(1, 1));
    assert_eq!(session.agent_path().len(), 1);
}

#[test]
fn test_step_into_obstacle_never_moves() {
    let mut session = session_from_text(ARENA);
    assert_eq!(session.apply_input(InputKind::MoveRight), MoveOutcome::Rejected);
    assert_eq!(session.agent_position(), Position::new(1, 1));
}

#[test]
fn test_step_off_grid_never_moves() {
    let mut session = session_from_text(
        r#"
        S.E
        "#,
    );
    assert_eq!(session.apply_input(InputKind::MoveUp), MoveOutcome::Rejected);
    assert_eq!(session.apply_input(InputKind::MoveLeft), MoveOutcome::Rejected);
    assert_eq!(session.agent_position(), Position::new(0, 0));
}

#[test]
fn test_jump_between_open_cells_is_illegal() {
    let mut session = session_from_text(ARENA);
    session.apply_input(InputKind::ArmJump);
    assert_eq!(session.apply_input(InputKind::MoveUp), MoveOutcome::Rejected);
    assert_eq!(session.agent_position(), Position::new(1, 1));
    assert_eq!(session.agent_path().len(), 1);
}

#[test]
fn test_illegal_input_is_idempotent() {
    let mut session = session_from_text(ARENA);
    let before = snapshot(&session);

    for input in [InputKind::MoveLeft, InputKind::MoveRight] {
        assert_eq!(session.apply_input(input), MoveOutcome::Rejected);
        let once = snapshot(&session);
        assert_eq!(session.apply_input(input), MoveOutcome::Rejected);
        let twice = snapshot(&session);
        assert_eq!(once, twice);
        assert_eq!(once, before);
    }
}

#[test]
fn test_failed_jump_clears_armed_state() {
    let mut session = session_from_text(ARENA);
    assert_eq!(session.apply_input(InputKind::ArmJump), MoveOutcome::Armed);
    assert_eq!(session.input_state(), InputState::JumpArmed);

    // Into the wall: illegal as a jump
    assert_eq!(session.apply_input(InputKind::MoveLeft), MoveOutcome::Rejected);
    assert_eq!(session.input_state(), InputState::Idle);
    assert_eq!(session.agent_position(), Position::new(1, 1));

    // Next direction is a plain step again
    assert_eq!(session.apply_input(InputKind::MoveDown), MoveOutcome::Stepped);
    assert_eq!(session.agent_position(), Position::new(1, 2));
}

#[test]
fn test_jump_in_and_out_of_obstacle() {
    let mut session = session_from_text(ARENA);
    session.apply_input(InputKind::ArmJump);
    assert_eq!(session.apply_input(InputKind::MoveRight), MoveOutcome::Jumped);
    assert_eq!(session.agent_position(), Position::new(2, 1));

    // Leaving by jump is also legal
    session.apply_input(InputKind::ArmJump);
    assert_eq!(session.apply_input(InputKind::MoveDown), MoveOutcome::Jumped);
    assert_eq!(session.agent_position(), Position::new(2, 2));
    assert_eq!(session.agent_path(), &[6, 7, 12]);
}

#[test]
fn test_arm_twice_stays_armed() {
    let mut session = session_from_text(ARENA);
    session.apply_input(InputKind::ArmJump);
    session.apply_input(InputKind::ArmJump);
    assert_eq!(session.input_state(), InputState::JumpArmed);
    assert_eq!(session.agent_path().len(), 1);
}

#[test]
fn test_completion_freezes_state() {
    let mut session = session_from_text(ARENA);
    for input in [
        InputKind::ArmJump,
        InputKind::MoveRight,
        InputKind::MoveRight,
    ] {
        assert!(!session.is_completed());
        session.apply_input(input);
    }
    assert!(!session.is_completed());
    assert_eq!(session.apply_input(InputKind::MoveRight), MoveOutcome::ReachedGoal);
    assert!(session.is_completed());

    let frozen = snapshot(&session);
    for input in [
        InputKind::MoveLeft,
        InputKind::ArmJump,
        InputKind::MoveLeft,
        InputKind::MoveUp,
    ] {
        assert_eq!(session.apply_input(input), MoveOutcome::Ignored);
    }
    assert_eq!(snapshot(&session), frozen);
    assert_eq!(session.end_position(), Position::new(4, 1));
}

#[test]
fn test_jump_shortcut_scores_above_100() {
    let mut session = session_from_text(ARENA);
    // Strict reference detours through row 0: 6 cells
    assert_eq!(session.reference_path().len(), 6);

    for input in [
        InputKind::ArmJump,
        InputKind::MoveRight,
        InputKind::MoveRight,
        InputKind::MoveRight,
    ] {
        session.apply_input(input);
    }
    // Agent took 4 cells
    assert_eq!(session.final_score(), Some(150));
}

#[test]
fn test_path_comparison_after_detour() {
    let mut session = session_from_text(
        r#"
        S.E
        ...
        "#,
    );
    for input in [
        InputKind::MoveDown,
        InputKind::MoveRight,
        InputKind::MoveRight,
        InputKind::MoveUp,
    ] {
        session.apply_input(input);
    }
    assert!(session.is_completed());
    assert_eq!(session.final_score(), Some(60));

    let comparison = session.path_comparison();
    assert_eq!(comparison.reference_cells, session.reference_path_cells());
    assert_eq!(comparison.agent_only_cells.len(), 3);
    assert!(session.agent_path_cells().is_superset(&comparison.agent_only_cells));
}
