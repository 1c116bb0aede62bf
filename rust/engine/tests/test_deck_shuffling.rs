use std::collections::HashSet;

use casino_engine::cards::{parse_cards, Card};
use casino_engine::deck::{CardSource, Deck, StackedDeck};

fn deal_all<D: CardSource>(deck: &mut D, n: usize) -> Vec<Card> {
    (0..n).map(|_| deck.deal_card()).collect()
}

#[test]
fn same_seed_same_order() {
    let mut a = Deck::new_with_seed(7);
    let mut b = Deck::new_with_seed(7);
    a.shuffle();
    b.shuffle();
    assert_eq!(deal_all(&mut a, 52), deal_all(&mut b, 52));
}

#[test]
fn different_seeds_differ() {
    let mut a = Deck::new_with_seed(1);
    let mut b = Deck::new_with_seed(2);
    a.shuffle();
    b.shuffle();
    assert_ne!(deal_all(&mut a, 52), deal_all(&mut b, 52));
}

#[test]
fn a_full_deal_has_no_duplicates() {
    let mut deck = Deck::new_with_seed(99);
    deck.shuffle();
    let cards: HashSet<Card> = deal_all(&mut deck, 52).into_iter().collect();
    assert_eq!(cards.len(), 52);
    assert_eq!(deck.remaining(), 0);
}

#[test]
fn exhausted_deck_refills_instead_of_failing() {
    let mut deck = Deck::new_with_seed(3);
    deck.shuffle();
    deal_all(&mut deck, 52);
    assert!(deck.try_deal().is_none());
    let _ = deck.deal_card();
    assert_eq!(deck.remaining(), 51);
}

#[test]
fn burn_consumes_one_card() {
    let mut deck = Deck::new_with_seed(5);
    deck.burn_card();
    assert_eq!(deck.remaining(), 51);
    deck.refill();
    assert_eq!(deck.remaining(), 52);
}

#[test]
fn stacked_deck_deals_in_order() {
    let cards = parse_cards("As Kd 2c").unwrap();
    let mut deck = StackedDeck::new(cards.clone());
    assert_eq!(deal_all(&mut deck, 3), cards);
}
