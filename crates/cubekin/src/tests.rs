use itertools::Itertools;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use strum::IntoEnumIterator;

use crate::*;

fn moves(s: &str) -> MoveSequence {
    s.parse().unwrap()
}

fn model_after(s: &str) -> PieceModel {
    let mut model = PieceModel::solved();
    model.apply_sequence(&moves(s));
    model
}

fn arbitrary_move() -> impl Strategy<Value = Move> {
    prop::sample::select(Move::all().collect_vec())
}

fn arbitrary_sequence() -> impl Strategy<Value = MoveSequence> {
    prop::collection::vec(arbitrary_move(), 0..40).prop_map(MoveSequence)
}

fn arbitrary_model() -> impl Strategy<Value = PieceModel> {
    arbitrary_sequence().prop_map(|seq| {
        let mut model = PieceModel::solved();
        model.apply_sequence(&seq);
        model
    })
}

#[test]
fn test_single_turns_from_solved() {
    // Reference strings for one turn of a solved cube.
    let cases = [
        ("R", "UUFUUFUUFRRRRRRRRRFFDFFDFFDDDBDDBDDBLLLLLLLLLUBBUBBUBB"),
        ("U", "UUUUUUUUURRRRRRBBBFFFFFFRRRDDDDDDDDDLLLLLLFFFBBBBBBLLL"),
        ("F", "LLLUUUUUUURRURRURRFFFFFFFFFDDDDDDRRRLLDLLDLLDBBBBBBBBB"),
        ("M", "UBUUBUUBURRRRRRRRRFUFFUFFUFDFDDFDDFDLLLLLLLLLBDBBDBBDB"),
    ];
    for (m, expected) in cases {
        assert_eq!(expected, model_after(m).to_facelets().serialize(), "after {m}");
    }
}

#[test]
fn test_sexy_move_has_order_six() {
    let sexy = moves("R U R' U'");
    let mut model = PieceModel::solved();
    model.apply_sequence(&sexy);
    assert!(!model.is_solved());
    assert_eq!(
        "UUFUUFUULURRBRRRRUFFFFFUFFDDDDDDDDDRLLLLLLBLLBBBBBBBRR",
        model.to_facelets().serialize(),
    );
    for _ in 1..6 {
        assert!(!model.is_solved());
        model.apply_sequence(&sexy);
    }
    assert_eq!(SOLVED_STR, model.to_facelets().serialize());
    assert_eq!(PieceModel::solved(), model);
}

#[test]
fn test_unknown_move_changes_nothing() {
    let mut model = model_after("R U F' M2");
    let before = model.clone();
    let facelets_before = model.to_facelets().serialize();

    assert_eq!(
        Err(CubeError::UnknownMove("Q".to_owned())),
        model.apply_move_str("Q"),
    );
    assert_eq!(before, model);
    assert_eq!(facelets_before, model.to_facelets().serialize());

    model.apply_move_str("R'").unwrap();
    assert_ne!(before, model);
}

#[test]
fn test_parse_scenarios() {
    assert!(matches!(
        FaceletState::parse("short"),
        Err(CubeError::MalformedState(_)),
    ));
    let with_x = SOLVED_STR.replacen('F', "X", 1);
    assert_eq!(54, with_x.len());
    assert!(matches!(
        FaceletState::parse(&with_x),
        Err(CubeError::MalformedState(_)),
    ));
}

#[test]
fn test_layer_sizes() {
    let model = model_after("R U2 M' E S F'");
    for axis in Axis::iter() {
        for layer in Sign::iter() {
            let expected = if layer.is_zero() { 8 } else { 9 };
            assert_eq!(expected, model.select_layer(axis, layer).count());
        }
    }
}

#[test]
fn test_slice_moves_carry_centers() {
    let model = model_after("M");
    let u_center = model.cubie_at(Face::U.center()).unwrap();
    assert_eq!(Face::B.center(), u_center.home());
    assert_eq!(Some(Face::B), u_center.sticker_facing(Face::U));
    assert_eq!(None, u_center.sticker_facing(Face::D));

    // R L' M' turns the whole cube like R does.
    let model = model_after("R L' M'");
    assert!(model.is_solved());
    let facelets = model.to_facelets();
    assert_eq!(&[Face::F; 9], facelets.block(Face::U));
    let reloaded = PieceModel::from_facelets(&facelets, Verification::Reachable).unwrap();
    assert_eq!(facelets, reloaded.to_facelets());
}

#[test]
fn test_cubie_accessors() {
    let model = model_after("F");
    let ufr = model.cubie_at(Cell([Sign::Pos, Sign::Neg, Sign::Pos])).unwrap();
    // F carries the UFR corner down to DFR.
    assert_eq!(Cell([Sign::Pos, Sign::Pos, Sign::Pos]), ufr.home());
    assert_eq!([2, 0, 2], ufr.grid_position());
    assert_eq!(CubieKind::Corner, ufr.kind());
    assert_eq!(
        [[0, 1, 0], [-1, 0, 0], [0, 0, 1]],
        ufr.orientation().matrix(),
    );
    let stickers = ufr.stickers().sorted().collect_vec();
    assert_eq!(
        vec![(Face::R, Face::U), (Face::F, Face::F), (Face::D, Face::R)],
        stickers,
    );
    assert!(model.cubie_at(Cell::core()).is_none());
}

fn solved_with(edits: &[(Face, Cell, Face)]) -> FaceletState {
    let mut state = FaceletState::solved();
    for &(face, cell, color) in edits {
        state.set_at(face, cell, color);
    }
    state
}

#[test]
fn test_load_rejects_impossible_states() {
    use Sign::*;

    let uf = Cell([Zero, Pos, Pos]);
    let ur = Cell([Pos, Pos, Zero]);
    let ufr = Cell([Pos, Pos, Pos]);

    let flipped_edge = solved_with(&[(Face::U, uf, Face::F), (Face::F, uf, Face::U)]);
    let twisted_corner = solved_with(&[
        (Face::U, ufr, Face::R),
        (Face::R, ufr, Face::F),
        (Face::F, ufr, Face::U),
    ]);
    let mirrored_corner = solved_with(&[(Face::U, ufr, Face::R), (Face::R, ufr, Face::U)]);
    let swapped_edges = solved_with(&[(Face::F, uf, Face::R), (Face::R, ur, Face::F)]);

    for (state, physical) in [
        (&flipped_edge, true),
        (&twisted_corner, true),
        (&swapped_edges, true),
        (&mirrored_corner, false),
    ] {
        state.check_balanced().unwrap();
        let result = PieceModel::from_facelets(state, Verification::Reachable);
        assert!(
            matches!(result, Err(CubeError::UnsolvablePermutation(_))),
            "{state} should be unreachable",
        );
        let result = PieceModel::from_facelets(state, Verification::Physical);
        assert_eq!(physical, result.is_ok(), "{state}");
        if let Ok(model) = result {
            assert_eq!(*state, model.to_facelets());
        }
    }

    let swapped_centers = solved_with(&[
        (Face::U, Face::U.center(), Face::D),
        (Face::D, Face::D.center(), Face::U),
    ]);
    assert!(matches!(
        PieceModel::from_facelets(&swapped_centers, Verification::Physical),
        Err(CubeError::UnsolvablePermutation(_)),
    ));

    let unbalanced = FaceletState::parse(&"U".repeat(54)).unwrap();
    let mut model = model_after("R");
    let before = model.clone();
    assert!(matches!(
        model.load_from_facelets(&unbalanced, Verification::Physical),
        Err(CubeError::UnbalancedState(_)),
    ));
    assert_eq!(before, model);
}

proptest! {
    #[test]
    fn proptest_round_trip(model in arbitrary_model()) {
        let s = model.to_facelets().serialize();
        let state = FaceletState::parse(&s).unwrap();
        state.check_balanced().unwrap();
        prop_assert_eq!(&s, &state.serialize());
    }

    #[test]
    fn proptest_permutation_closure(model in arbitrary_model()) {
        model.check_permutation().unwrap();
        let positions = model.cubies().iter().map(|c| c.position()).sorted().collect_vec();
        prop_assert_eq!(Cell::iter().sorted().collect_vec(), positions);
    }

    #[test]
    fn proptest_order_four(model in arbitrary_model()) {
        for m in Move::all() {
            let mut twisted = model.clone();
            for _ in 0..4 {
                twisted.apply_move(m);
            }
            prop_assert_eq!(&model, &twisted);
            prop_assert_eq!(model.to_facelets(), twisted.to_facelets());
        }
    }

    #[test]
    fn proptest_double_moves(model in arbitrary_model()) {
        for family in MoveFamily::iter() {
            let mut once = model.clone();
            once.apply_move(Move::new(family, Amount::Double));
            let mut twice = model.clone();
            twice.apply_move(Move::new(family, Amount::Single));
            twice.apply_move(Move::new(family, Amount::Single));
            prop_assert_eq!(&once, &twice);
        }
    }

    #[test]
    fn proptest_inverse_cancels(model in arbitrary_model(), seq in arbitrary_sequence()) {
        for m in Move::all() {
            let mut twisted = model.clone();
            twisted.apply_move(m);
            twisted.apply_move(m.inverse());
            prop_assert_eq!(&model, &twisted);
            prop_assert_eq!(model.to_facelets(), twisted.to_facelets());
        }

        let mut twisted = model.clone();
        twisted.apply_sequence(&seq);
        twisted.apply_sequence(&seq.inverse());
        prop_assert_eq!(&model, &twisted);
    }

    #[test]
    fn proptest_load_matches_pieces(model in arbitrary_model()) {
        let facelets = model.to_facelets();
        let loaded = PieceModel::from_facelets(&facelets, Verification::Reachable).unwrap();
        prop_assert_eq!(&facelets, &loaded.to_facelets());
        for (a, b) in model.cubies().iter().zip(loaded.cubies()) {
            prop_assert_eq!(a.home(), b.home());
            prop_assert_eq!(a.position(), b.position());
            // Spinning a center in place does not show on the stickers.
            if a.kind() != CubieKind::Center {
                prop_assert_eq!(a.orientation(), b.orientation());
            }
        }
    }

    #[test]
    fn proptest_facelets_match_stickers(model in arbitrary_model()) {
        let facelets = model.to_facelets();
        for face in Face::iter() {
            for row in 0..3 {
                for col in 0..3 {
                    let cell = FaceletState::slot_position(face, row, col);
                    let cubie = model.cubie_at(cell).unwrap();
                    prop_assert_eq!(Some(facelets.get(face, row, col)), cubie.sticker_facing(face));
                }
            }
        }
    }
}

mod controller {
    use pretty_assertions::assert_eq;

    use crate::*;

    #[test]
    fn test_busy_rejects_new_operations() {
        let mut ctl = CubeController::new(Verification::Reachable);
        ctl.queue_sequence(OperationKind::Solution, "R U".parse().unwrap())
            .unwrap();
        assert_eq!(Status::Busy(OperationKind::Solution), ctl.status());

        let busy = Err(CubeError::Busy(OperationKind::Solution));
        assert_eq!(busy, ctl.twist_str("F"));
        assert_eq!(
            busy,
            ctl.queue_sequence(OperationKind::Scramble, "D".parse().unwrap()),
        );
        assert_eq!(busy, ctl.adopt_state(SOLVED_STR));
        assert_eq!(busy.clone().map(|()| None), ctl.undo());
        assert_eq!(busy, ctl.reset());

        assert_eq!(Some("R".parse().unwrap()), ctl.step());
        assert_eq!(Status::Busy(OperationKind::Solution), ctl.status());
        assert_eq!(vec!["U".parse::<Move>().unwrap()], ctl.pending().collect::<Vec<_>>());
        assert_eq!(Some("U".parse().unwrap()), ctl.step());
        assert_eq!(Status::Idle, ctl.status());
        assert_eq!(None, ctl.step());

        ctl.twist_str("F").unwrap();
        let mut expected = PieceModel::solved();
        expected.apply_sequence(&"R U F".parse().unwrap());
        assert!(ctl == expected);
    }

    #[test]
    fn test_undo_redo() {
        let scramble: MoveSequence = "R U R' U'".parse().unwrap();
        let mut ctl = CubeController::new(Verification::Reachable);
        ctl.queue_sequence(OperationKind::Scramble, scramble.clone())
            .unwrap();
        ctl.catch_up();
        assert_eq!(Status::Idle, ctl.status());
        assert!(!ctl.facelets().is_solved());

        for _ in 0..scramble.len() {
            assert!(ctl.undo().unwrap().is_some());
        }
        assert_eq!(None, ctl.undo().unwrap());
        assert!(ctl.facelets().is_solved());

        assert_eq!(Some("R".parse().unwrap()), ctl.redo().unwrap());
        assert!(ctl.has_redo());
        ctl.twist_str("D").unwrap();
        assert!(!ctl.has_redo());
        assert!(ctl.has_undo());

        assert_eq!(
            Err(CubeError::UnknownMove("Dw".to_owned())),
            ctl.twist_str("Dw"),
        );
    }

    #[test]
    fn test_adopt_and_reconcile() {
        let scramble: MoveSequence = "F2 M E' S".parse().unwrap();
        let mut reference = PieceModel::solved();
        reference.apply_sequence(&scramble);
        let reference_str = reference.to_facelets().serialize();

        let mut ctl = CubeController::new(Verification::Reachable);
        ctl.adopt_state(&reference_str).unwrap();
        assert_eq!(reference_str, ctl.facelets().serialize());
        assert!(!ctl.has_undo());

        assert!(matches!(
            ctl.adopt_state("UUU"),
            Err(CubeError::MalformedState(_)),
        ));
        assert_eq!(reference_str, ctl.facelets().serialize());

        // In sync: nothing changes.
        let mut ctl = CubeController::from_scramble(&scramble, Verification::Reachable);
        assert_eq!(Ok(false), ctl.reconcile(&reference_str));

        // Out of sync: the echoed state wins.
        ctl.twist_str("R").unwrap();
        assert_eq!(Ok(true), ctl.reconcile(&reference_str));
        assert_eq!(reference_str, ctl.facelets().serialize());
    }
}
