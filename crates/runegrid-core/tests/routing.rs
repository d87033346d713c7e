//! Board-level routing properties over randomly generated layouts.

use proptest::prelude::*;
use runegrid_core::{Bank, Board, BoardConfig, Coord, Direction, Resource, Rune, RuneKind};

fn arb_kind() -> impl Strategy<Value = RuneKind> {
    prop_oneof![
        Just(RuneKind::Void),
        Just(RuneKind::ManaEmitter),
        (0usize..8).prop_map(|i| RuneKind::Transmit {
            facing: Direction::from_index(i)
        }),
        Just(RuneKind::Amplifier),
        Just(RuneKind::Emitter),
        Just(RuneKind::Base),
    ]
}

fn arb_layout() -> impl Strategy<Value = Vec<Rune>> {
    prop::collection::vec(
        (arb_kind(), -4i32..5, -4i32..5).prop_map(|(kind, x, y)| Rune::new(kind, x, y)),
        0..40,
    )
}

fn build(layout: &[Rune]) -> Board {
    let mut board = Board::new(BoardConfig::default().with_trace(true));
    for rune in layout {
        board.add_rune(rune.clone()).unwrap();
    }
    board
}

proptest! {
    #[test]
    fn cast_terminates_within_edge_budget(layout in arb_layout()) {
        let mut board = build(&layout);
        let mut bank = Bank::new();
        let report = board.cast(&mut bank);

        // Every emitted chain crosses each (cell, direction) edge at most once.
        let edges = board.len() * 8;
        let chains = board.emitters().count() * 4;
        prop_assert!(report.deliveries <= edges * chains);
        prop_assert_eq!(report.cast, 1);
    }

    #[test]
    fn bank_matches_reported_deposits(layout in arb_layout()) {
        let mut board = build(&layout);
        let mut bank = Bank::new();
        let first = board.cast(&mut bank);
        let second = board.cast(&mut bank);

        // Facings do not change during a cast, so casts repeat exactly.
        prop_assert_eq!(&first.deposited, &second.deposited);
        prop_assert_eq!(first.deliveries, second.deliveries);
        prop_assert_eq!(
            bank.balance(&Resource::Mana),
            first.deposited.get(&Resource::Mana) * 2
        );
        prop_assert!(bank.balance(&Resource::Mana) >= 0);
    }

    #[test]
    fn bounds_contain_origin_and_every_rune(layout in arb_layout()) {
        let board = build(&layout);
        let bounds = board.bounds();
        prop_assert!(bounds.contains(Coord::ORIGIN));
        for rune in board.runes() {
            prop_assert!(bounds.contains(rune.coord()));
        }
    }

    #[test]
    fn one_rune_per_cell(layout in arb_layout()) {
        let board = build(&layout);
        let mut cells: Vec<Coord> = layout.iter().map(Rune::coord).collect();
        cells.sort();
        cells.dedup();
        prop_assert_eq!(board.len(), cells.len());
        for rune in board.emitters() {
            prop_assert!(rune.is_emitter());
        }
    }
}

#[test]
fn starter_layout_fills_three_voids() {
    // Emitter in the middle, a north-facing transmit above leading nowhere,
    // voids on the other three sides.
    let mut board = Board::default();
    board.add_rune(Rune::mana_emitter(0, 0)).unwrap();
    board.add_rune(Rune::transmit(0, 1)).unwrap();
    board.add_rune(Rune::void(0, -1)).unwrap();
    board.add_rune(Rune::void(1, 0)).unwrap();
    board.add_rune(Rune::void(-1, 0)).unwrap();

    let mut bank = Bank::new();
    board.cast(&mut bank);
    assert_eq!(bank.balance(&Resource::Mana), 3);

    // Point the transmit diagonally down into the east void.
    board.set_direction(0, 1, Direction::SouthEast).unwrap();
    board.cast(&mut bank);
    assert_eq!(bank.balance(&Resource::Mana), 7);
}

#[test]
fn separate_banks_isolate_simulations() {
    let mut a = Board::default();
    a.add_rune(Rune::mana_emitter(0, 0)).unwrap();
    a.add_rune(Rune::void(0, 1)).unwrap();
    let mut b = Board::default();
    b.add_rune(Rune::mana_emitter(0, 0)).unwrap();
    b.add_rune(Rune::amplifier(0, 1)).unwrap();
    b.add_rune(Rune::void(0, 2)).unwrap();

    let mut bank_a = Bank::new();
    let mut bank_b = Bank::new();
    a.cast(&mut bank_a);
    b.cast(&mut bank_b);
    assert_eq!(bank_a.balance(&Resource::Mana), 1);
    assert_eq!(bank_b.balance(&Resource::Mana), 2);
}
