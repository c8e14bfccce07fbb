//! Whole-match behaviour: classic patterns, scoring and termination.
//!
//! Run with: cargo test --test match_properties

use std::collections::HashSet;

use proptest::prelude::*;

use pvp_life::domain::transition::{self, evolve};
use pvp_life::{
    Algorithm, BirthEvent, CellStore, Color, Coord, GameState, IterationCap, MatchResult,
    MatchStatus, Mode, Phase, presets,
};

fn live_set(game: &GameState) -> HashSet<Coord> {
    game.current_alive_cells().map(|(c, _)| c).collect()
}

fn coords(cells: &[(i32, i32)]) -> HashSet<Coord> {
    cells.iter().map(|&c| Coord::from(c)).collect()
}

fn conway() -> GameState {
    GameState::new(Mode::SingleColor, IterationCap::Unbounded)
}

#[test]
fn test_empty_board_stays_empty() {
    let mut game = conway();
    for _ in 0..50 {
        let step = game.step().unwrap();
        assert_eq!(step.new_alive_count, 0);
        assert!(step.birth_events.is_empty());
    }
    assert_eq!(game.match_status(), MatchStatus::Ongoing);
}

#[test]
fn test_block_is_still_life() {
    let mut game = conway();
    game.seed(&presets::block()).unwrap();
    let start = live_set(&game);
    for _ in 0..100 {
        game.step().unwrap();
        assert_eq!(live_set(&game), start);
    }
}

#[test]
fn test_blinker_has_period_two() {
    let mut game = conway();
    game.seed(&presets::blinker()).unwrap();
    let horizontal = coords(&[(-1, 0), (0, 0), (1, 0)]);
    let vertical = coords(&[(0, -1), (0, 0), (0, 1)]);
    assert_eq!(live_set(&game), horizontal);

    for _ in 0..5 {
        let step = game.step().unwrap();
        assert_eq!(step.birth_events.len(), 2);
        assert_eq!(live_set(&game), vertical);
        game.step().unwrap();
        assert_eq!(live_set(&game), horizontal);
    }
}

#[test]
fn test_glider_translates_diagonally() {
    for algorithm in Algorithm::all() {
        let mut game = conway().with_algorithm(algorithm);
        game.seed(&presets::glider()).unwrap();
        let start = live_set(&game);

        for period in 1..=3 {
            for _ in 0..4 {
                game.step().unwrap();
            }
            let expected: HashSet<_> = start
                .iter()
                .map(|c| c.offset(period, period))
                .collect();
            assert_eq!(live_set(&game), expected, "{} after {} periods", algorithm.name(), period);
        }
    }
}

#[test]
fn test_majority_birth_in_match() {
    let mut game = GameState::new(Mode::TwoColor, IterationCap::Unbounded);
    // Target (0, 0): two A neighbors above, one B below.
    game.set_alive(Coord::new(-1, -1), true, Color::A).unwrap();
    game.set_alive(Coord::new(1, -1), true, Color::A).unwrap();
    game.set_alive(Coord::new(0, 1), true, Color::B).unwrap();
    // Target (30, 0): one A, two B.
    game.set_alive(Coord::new(29, -1), true, Color::B).unwrap();
    game.set_alive(Coord::new(31, -1), true, Color::B).unwrap();
    game.set_alive(Coord::new(30, 1), true, Color::A).unwrap();

    let step = game.step().unwrap();
    let births: HashSet<BirthEvent> = step.birth_events.into_iter().collect();
    assert_eq!(
        births,
        HashSet::from([
            BirthEvent { coord: Coord::new(0, 0), color: Color::A },
            BirthEvent { coord: Coord::new(30, 0), color: Color::B },
        ])
    );
    assert_eq!(game.scores(), (1, 1));
}

#[test]
fn test_mixed_neighbors_not_totaling_three_stay_dead() {
    let store: CellStore = [
        (Coord::new(-1, -1), Color::A),
        (Coord::new(1, -1), Color::B),
    ]
    .into_iter()
    .collect();
    let (next, births) = evolve(&store, Mode::TwoColor);
    assert!(next.is_empty());
    assert!(births.is_empty());

    let crowded: CellStore = [
        (Coord::new(-1, -1), Color::A),
        (Coord::new(0, -1), Color::A),
        (Coord::new(1, -1), Color::B),
        (Coord::new(-1, 1), Color::B),
    ]
    .into_iter()
    .collect();
    let (next, _) = evolve(&crowded, Mode::TwoColor);
    assert!(!next.is_alive(Coord::ORIGIN));
}

/// Three cells around (1, 1) that give birth to one cell, which then dies alone.
fn place_short_lived(game: &mut GameState, at: Coord, majority: Color) {
    game.set_alive(at, true, majority).unwrap();
    game.set_alive(at.offset(2, 0), true, majority).unwrap();
    game.set_alive(at.offset(1, 2), true, majority.opponent()).unwrap();
}

#[test]
fn test_extinction_ends_match_with_winner() {
    let mut game = GameState::new(Mode::TwoColor, IterationCap::Unbounded);
    place_short_lived(&mut game, Coord::ORIGIN, Color::A);

    let first = game.step().unwrap();
    assert_eq!(first.status, MatchStatus::Ongoing);
    assert_eq!(first.new_alive_count, 1);
    assert_eq!(game.scores(), (1, 0));

    let second = game.step().unwrap();
    assert_eq!(second.new_alive_count, 0);
    assert_eq!(second.status, MatchStatus::Ended);
    assert_eq!(game.phase(), Phase::Ended);
    assert_eq!(game.result(), Ok(MatchResult::AWins));
}

#[test]
fn test_extinction_with_equal_scores_is_draw() {
    let mut game = GameState::new(Mode::TwoColor, IterationCap::Unbounded);
    place_short_lived(&mut game, Coord::ORIGIN, Color::A);
    place_short_lived(&mut game, Coord::new(40, 40), Color::B);

    assert_eq!(game.run_until_end(10).unwrap(), MatchStatus::Ended);
    assert_eq!(game.generation(), 2);
    assert_eq!(game.scores(), (1, 1));
    assert_eq!(game.result(), Ok(MatchResult::Draw));
}

#[test]
fn test_iteration_cap_ends_exactly() {
    for mode in [Mode::SingleColor, Mode::TwoColor] {
        let mut game = GameState::new(mode, IterationCap::Limited(7));
        game.seed(&presets::glider_gun()).unwrap();
        for n in 1..7 {
            let step = game.step().unwrap();
            assert_eq!(step.status, MatchStatus::Ongoing, "ended early at step {n}");
        }
        assert_eq!(game.step().unwrap().status, MatchStatus::Ended);
        assert_eq!(game.generation(), 7);
    }
}

#[test]
fn test_seeding_twice_matches_seeding_once() {
    let mut once = conway();
    once.seed(&presets::r_pentomino()).unwrap();

    let mut twice = conway();
    twice.seed(&presets::r_pentomino()).unwrap();
    twice.step().unwrap();
    twice.seed(&presets::r_pentomino()).unwrap();

    assert_eq!(once.cells(), twice.cells());
    assert_eq!(twice.generation(), 0);
}

fn arb_store() -> impl Strategy<Value = CellStore> {
    prop::collection::vec((-12i32..12, -12i32..12, any::<bool>()), 0..80).prop_map(|cells| {
        cells
            .into_iter()
            .map(|(x, y, a)| (Coord::new(x, y), if a { Color::A } else { Color::B }))
            .collect()
    })
}

fn arb_mode() -> impl Strategy<Value = Mode> {
    prop_oneof![Just(Mode::SingleColor), Just(Mode::TwoColor)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Stepping the same input twice gives the same generation and births.
    #[test]
    fn prop_step_is_deterministic(store in arb_store(), mode in arb_mode()) {
        let (first, births_a) = evolve(&store, mode);
        let (second, births_b) = evolve(&store, mode);
        prop_assert_eq!(first, second);

        let a: HashSet<_> = births_a.into_iter().collect();
        let b: HashSet<_> = births_b.into_iter().collect();
        prop_assert_eq!(a, b);
    }

    /// The rayon path matches the serial path cell for cell.
    #[test]
    fn prop_parallel_matches_serial(store in arb_store(), mode in arb_mode()) {
        let mut serial = CellStore::new();
        let mut parallel = CellStore::new();
        let a: HashSet<_> = transition::step(&store, mode, &mut serial).into_iter().collect();
        let b: HashSet<_> = transition::step_parallel(&store, mode, &mut parallel).into_iter().collect();
        prop_assert_eq!(serial, parallel);
        prop_assert_eq!(a, b);
    }

    /// Births are exactly the cells alive after the step that were dead before.
    #[test]
    fn prop_births_are_new_cells(store in arb_store(), mode in arb_mode()) {
        let (next, births) = evolve(&store, mode);
        let born: HashSet<_> = births.iter().map(|b| b.coord).collect();
        let expected: HashSet<_> = next
            .iter()
            .filter(|(c, _)| !store.is_alive(*c))
            .map(|(c, _)| c)
            .collect();
        prop_assert_eq!(born, expected);
        for birth in &births {
            prop_assert_eq!(next.get(birth.coord), Some(birth.color));
        }
    }
}
