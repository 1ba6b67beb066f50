use egui::{Color32, Pos2};
use proptest::prelude::*;
use sticker_pad::drawable::factory;
use sticker_pad::{Drawable, History};

#[derive(Debug, Clone)]
enum Op {
    CommitStroke(u8),
    CommitSticker(u8),
    Undo,
    Redo,
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<u8>().prop_map(Op::CommitStroke),
        2 => any::<u8>().prop_map(Op::CommitSticker),
        3 => Just(Op::Undo),
        2 => Just(Op::Redo),
        1 => Just(Op::Clear),
    ]
}

fn stroke(tag: u8) -> Drawable {
    let x = f32::from(tag);
    factory::create_stroke(vec![Pos2::new(x, 0.0), Pos2::new(x, 10.0)], 2.0, Color32::BLACK)
}

fn sticker(tag: u8) -> Drawable {
    factory::create_sticker(Pos2::new(f32::from(tag), 5.0), "⭐", 0.0, 32.0)
}

/// Both sequences, rendered for comparison (drawables are not Clone)
fn snapshot(history: &History) -> (String, String) {
    (
        format!("{:?}", history.list()),
        format!("{:?}", history.redo_buffer()),
    )
}

fn apply(history: &mut History, op: &Op) -> bool {
    match op {
        Op::CommitStroke(tag) => {
            history.commit(stroke(*tag));
            true
        }
        Op::CommitSticker(tag) => {
            history.commit(sticker(*tag));
            true
        }
        Op::Undo => history.undo().is_some(),
        Op::Redo => history.redo().is_some(),
        Op::Clear => {
            history.clear();
            true
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn list_length_tracks_commits_undos_and_redos(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let mut history = History::new();
        let mut expected: usize = 0;

        for op in &ops {
            let applied = apply(&mut history, op);
            match op {
                Op::CommitStroke(_) | Op::CommitSticker(_) => expected += 1,
                Op::Undo if applied => expected -= 1,
                Op::Redo if applied => expected += 1,
                Op::Clear => expected = 0,
                Op::Undo | Op::Redo => {}
            }
            prop_assert_eq!(history.list().len(), expected);
        }
    }

    #[test]
    fn undo_on_empty_is_a_no_op(ops in prop::collection::vec(op_strategy(), 0..32)) {
        let mut history = History::new();
        for op in &ops {
            apply(&mut history, op);
        }
        while history.undo().is_some() {}

        let before = snapshot(&history);
        prop_assert!(history.undo().is_none());
        prop_assert_eq!(snapshot(&history), before);
    }

    #[test]
    fn redo_on_empty_is_a_no_op(ops in prop::collection::vec(op_strategy(), 0..32)) {
        let mut history = History::new();
        for op in &ops {
            apply(&mut history, op);
        }
        while history.redo().is_some() {}

        let before = snapshot(&history);
        prop_assert!(history.redo().is_none());
        prop_assert_eq!(snapshot(&history), before);
    }

    #[test]
    fn commit_undo_redo_round_trips(
        ops in prop::collection::vec(op_strategy(), 0..32),
        tag in any::<u8>(),
    ) {
        let mut history = History::new();
        for op in &ops {
            apply(&mut history, op);
        }

        history.commit(sticker(tag));
        let after_commit = format!("{:?}", history.list());

        prop_assert!(history.undo().is_some());
        prop_assert!(history.redo().is_some());
        prop_assert_eq!(format!("{:?}", history.list()), after_commit);
    }

    #[test]
    fn a_drawable_lives_in_one_sequence(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let mut history = History::new();
        let mut total: usize = 0;

        for op in &ops {
            apply(&mut history, op);
            match op {
                Op::CommitStroke(_) | Op::CommitSticker(_) => {
                    // A commit drops the redo buffer.
                    total = history.list().len();
                }
                Op::Clear => total = 0,
                Op::Undo | Op::Redo => {}
            }
            prop_assert_eq!(history.list().len() + history.redo_buffer().len(), total);
        }
    }

    #[test]
    fn clear_empties_everything(ops in prop::collection::vec(op_strategy(), 0..32)) {
        let mut history = History::new();
        for op in &ops {
            apply(&mut history, op);
        }

        history.clear();
        prop_assert!(history.list().is_empty());
        prop_assert!(history.undo().is_none());
        prop_assert!(history.redo().is_none());
    }
}

#[test]
fn test_new_commit_invalidates_redo() {
    let mut history = History::new();
    history.commit(stroke(1));
    assert!(history.undo().is_some());
    assert!(history.can_redo());

    history.commit(stroke(2));

    assert!(history.redo_buffer().is_empty());
    assert!(history.redo().is_none());
    assert_eq!(history.list(), &[stroke(2)]);
}

#[test]
fn test_mixed_kinds_scenario() {
    let s1 = || {
        factory::create_stroke(
            vec![Pos2::new(10.0, 10.0), Pos2::new(20.0, 20.0)],
            2.0,
            Color32::BLACK,
        )
    };
    let k1 = || factory::create_sticker(Pos2::new(50.0, 50.0), "⭐", 0.0, 32.0);
    let s2 = || factory::create_stroke(vec![Pos2::new(0.0, 0.0), Pos2::new(5.0, 5.0)], 6.0, Color32::RED);

    let mut history = History::new();
    history.commit(s1());
    history.commit(k1());
    assert_eq!(history.list(), &[s1(), k1()]);

    assert_eq!(history.undo(), Some(&k1()));
    assert_eq!(history.list(), &[s1()]);

    assert_eq!(history.undo(), Some(&s1()));
    assert!(history.list().is_empty());

    assert_eq!(history.redo(), Some(&s1()));
    assert_eq!(history.list(), &[s1()]);

    history.commit(s2());
    assert_eq!(history.list(), &[s1(), s2()]);
    assert!(history.redo().is_none());
}

#[test]
fn test_empty_history_operations_are_no_ops() {
    let mut history = History::new();
    assert!(history.undo().is_none());
    assert!(history.redo().is_none());
    history.clear();

    assert!(history.is_empty());
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn test_clear_drops_redo_buffer_too() {
    let mut history = History::new();
    history.commit(stroke(1));
    history.commit(sticker(2));
    history.undo();

    history.clear();

    assert!(history.list().is_empty());
    assert!(history.redo_buffer().is_empty());
    assert!(history.undo().is_none());
}
