use casino_engine::cards::parse_cards;
use casino_engine::hand::Category;
use casino_engine::ledger::Bankroll;
use casino_engine::showdown::resolve;
use casino_engine::table::{Blinds, Seats, TableState};

fn table_with(holes: &[&str], board: &str) -> TableState {
    let mut ledger = Bankroll::new(500);
    let mut table = TableState::new(Seats::new(holes.len(), 500, 500), Blinds::new(5, 10), 0);
    table.post_blinds(&mut ledger).unwrap();
    for (seat, hole) in holes.iter().enumerate() {
        for card in parse_cards(hole).unwrap() {
            table.seat_mut(seat).unwrap().give_card(card).unwrap();
        }
    }
    for card in parse_cards(board).unwrap() {
        table.reveal(card);
    }
    table
}

#[test]
fn tie_splits_pot_with_remainder_to_first_winner() {
    let mut ledger = Bankroll::new(500);
    let mut table = table_with(&["4c 5d", "Ah Qd", "Ad Qc"], "2c 3d 8h 9s Ks");
    table.commit(0, 10, &mut ledger).unwrap();
    assert_eq!(table.pot(), 25);

    let result = resolve(&table).unwrap();
    assert!(result.is_split());
    assert_eq!(result.winners, vec![1, 2]);
    assert_eq!(result.payouts, vec![(1, 13), (2, 12)]);
    assert_eq!(result.payout_for(0), 0);
}

#[test]
fn folded_seats_are_not_ranked() {
    let mut table = table_with(&["Ah Ad", "2h 7d", "Kc Qc"], "As 9d 5c 4h Jd");
    table.seat_mut(0).unwrap().fold();
    let result = resolve(&table).unwrap();
    assert_eq!(result.ranks.len(), 2);
    assert_eq!(result.winners, vec![2]);
    assert_eq!(result.best.category(), Category::HighCard);
    assert_eq!(result.payout_for(2), table.pot());
}

#[test]
fn incomplete_board_cannot_be_resolved() {
    let table = table_with(&["Ah Ad", "Kc Qc"], "As 9d 5c");
    assert!(resolve(&table).is_err());
}
