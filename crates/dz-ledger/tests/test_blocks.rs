//! Integration tests for block detection on Slovak ledgers.

use dz_ledger::{Block, BlockDetector, BlockPolicy, DayCode, DayLedger};
use dz_time::{DayKey, MonthKey, Slovakia, WeekendsOnly};
use proptest::prelude::*;

fn mk(s: &str) -> MonthKey {
    s.parse().unwrap()
}

fn day(d: u8) -> DayKey {
    DayKey::new(d).unwrap()
}

fn ledger_with(month: &str, code: DayCode, days: &[u8]) -> DayLedger {
    let mut ledger = DayLedger::generate(mk(month), &Slovakia::new());
    for &d in days {
        ledger.set(day(d), code.clone()).unwrap();
    }
    ledger
}

fn spans(blocks: &[Block]) -> Vec<(u8, u8)> {
    blocks
        .iter()
        .map(|b| (b.start.number(), b.end.number()))
        .collect()
}

// ─── Trips ────────────────────────────────────────────────────────────────────

#[test]
fn trips_need_literal_adjacency() {
    let ledger = ledger_with("03-2024", DayCode::Trip, &[5, 6, 7, 10]);
    let cal = Slovakia::new();
    let blocks = BlockDetector::new(&cal).detect(&ledger, &BlockPolicy::trips());
    assert_eq!(spans(&blocks), vec![(5, 7), (10, 10)]);
}

#[test]
fn trips_over_a_weekend_stay_one_block() {
    // 08.03.2024 is a Friday
    let ledger = ledger_with("03-2024", DayCode::Trip, &[8, 9, 10, 11]);
    let cal = Slovakia::new();
    let blocks = BlockDetector::new(&cal).detect(&ledger, &BlockPolicy::trips());
    assert_eq!(spans(&blocks), vec![(8, 11)]);
}

#[test]
fn trips_are_split_by_a_weekend_gap() {
    // Fri 08 and Mon 11 with the weekend left as "0"
    let ledger = ledger_with("03-2024", DayCode::Trip, &[8, 11]);
    let cal = Slovakia::new();
    let blocks = BlockDetector::new(&cal).detect(&ledger, &BlockPolicy::trips());
    assert_eq!(spans(&blocks), vec![(8, 8), (11, 11)]);
}

// ─── Vacations ────────────────────────────────────────────────────────────────

#[test]
fn vacations_bridge_weekends() {
    // July 2023: 15/16 are Saturday/Sunday
    let ledger = ledger_with("07-2023", DayCode::Vacation, &[12, 13, 14, 17, 18]);
    let cal = Slovakia::new();
    let blocks = BlockDetector::new(&cal).detect(&ledger, &BlockPolicy::vacations());
    assert_eq!(spans(&blocks), vec![(12, 18)]);
    assert_eq!(blocks[0].len(), 7);
}

#[test]
fn vacations_bridge_holidays() {
    // 05.07.2024 (Fri) is a holiday, 06/07 the weekend
    let ledger = ledger_with("07-2024", DayCode::Vacation, &[3, 4, 8, 9]);
    let cal = Slovakia::new();
    let blocks = BlockDetector::new(&cal).detect(&ledger, &BlockPolicy::vacations());
    assert_eq!(spans(&blocks), vec![(3, 9)]);
}

#[test]
fn a_workday_breaks_a_vacation() {
    let ledger = ledger_with("07-2023", DayCode::Vacation, &[12, 14]);
    let cal = Slovakia::new();
    let blocks = BlockDetector::new(&cal).detect(&ledger, &BlockPolicy::vacations());
    assert_eq!(spans(&blocks), vec![(12, 12), (14, 14)]);
}

#[test]
fn vacation_marks_on_weekends_bridge_but_never_count() {
    let cal = Slovakia::new();
    // D on Saturday 15.07.2023 alone produces nothing
    let ledger = ledger_with("07-2023", DayCode::Vacation, &[15]);
    let detector = BlockDetector::new(&cal);
    assert!(detector.detect(&ledger, &BlockPolicy::vacations()).is_empty());
    assert!(!detector.is_candidate(&ledger, &BlockPolicy::vacations(), day(15)));

    // ...but it still bridges the gap between Friday and Monday
    let ledger = ledger_with("07-2023", DayCode::Vacation, &[14, 15, 17]);
    let blocks = detector.detect(&ledger, &BlockPolicy::vacations());
    assert_eq!(spans(&blocks), vec![(14, 17)]);
}

#[test]
fn vacations_at_month_edges() {
    let cal = WeekendsOnly;
    // 31.07.2023 is a Monday, 29/30 the weekend
    let ledger = {
        let mut l = DayLedger::generate(mk("07-2023"), &cal);
        for d in [3, 28, 31] {
            l.set(day(d), DayCode::Vacation).unwrap();
        }
        l
    };
    let blocks = BlockDetector::new(&cal).detect(&ledger, &BlockPolicy::vacations());
    assert_eq!(spans(&blocks), vec![(3, 3), (28, 31)]);
}

#[test]
fn no_target_days_no_blocks() {
    let cal = Slovakia::new();
    let ledger = DayLedger::generate(mk("02-2024"), &cal);
    let detector = BlockDetector::new(&cal);
    assert!(detector.detect(&ledger, &BlockPolicy::trips()).is_empty());
    assert!(detector.detect(&ledger, &BlockPolicy::vacations()).is_empty());
}

// ─── Properties ───────────────────────────────────────────────────────────────

fn arbitrary_ledger() -> impl Strategy<Value = DayLedger> {
    prop::collection::vec(
        prop::sample::select(vec![
            DayCode::WorkFull,
            DayCode::Off,
            DayCode::Vacation,
            DayCode::Trip,
            DayCode::Sick,
        ]),
        31,
    )
    .prop_map(|codes| {
        let month = mk("07-2024");
        let mut ledger = DayLedger::generate(month, &Slovakia::new());
        for (d, code) in month.day_keys().zip(codes) {
            ledger.set(d, code).unwrap();
        }
        ledger
    })
}

proptest! {
    #[test]
    fn blocks_are_ordered_and_disjoint(ledger in arbitrary_ledger()) {
        let cal = Slovakia::new();
        let detector = BlockDetector::new(&cal);
        for policy in [BlockPolicy::trips(), BlockPolicy::vacations()] {
            let blocks = detector.detect(&ledger, &policy);
            for b in &blocks {
                prop_assert!(b.start <= b.end);
                prop_assert!(detector.is_candidate(&ledger, &policy, b.start));
                prop_assert!(detector.is_candidate(&ledger, &policy, b.end));
            }
            for pair in blocks.windows(2) {
                prop_assert!(pair[0].end < pair[1].start);
            }
        }
    }

    #[test]
    fn every_candidate_is_in_exactly_one_block(ledger in arbitrary_ledger()) {
        let cal = Slovakia::new();
        let detector = BlockDetector::new(&cal);
        for policy in [BlockPolicy::trips(), BlockPolicy::vacations()] {
            let blocks = detector.detect(&ledger, &policy);
            for d in detector.candidates(&ledger, &policy) {
                let n = blocks.iter().filter(|b| b.start <= d && d <= b.end).count();
                prop_assert_eq!(n, 1);
            }
        }
    }
}
