//! Hand and hand value tests.

use bjround::{BLACKJACK, Card, Hand, HandValue, Slot, Suit, card_points};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn hand_of(ranks: &[u8]) -> Hand {
    let mut hand = Hand::new();
    for &rank in ranks {
        hand.add_card(card(Suit::Clubs, rank));
    }
    hand
}

#[test]
fn cards_keep_deal_order() {
    let mut hand = Hand::new();
    hand.add_card(card(Suit::Hearts, 1));
    hand.add_card(card(Suit::Spades, 7));
    hand.add_face_down(card(Suit::Clubs, 12));

    assert_eq!(
        hand.cards(),
        &[
            Slot::FaceUp(card(Suit::Hearts, 1)),
            Slot::FaceUp(card(Suit::Spades, 7)),
            Slot::FaceDown(card(Suit::Clubs, 12)),
        ]
    );
    assert_eq!(hand.len(), 3);
    assert!(hand.has_face_down());
}

#[test]
fn face_down_slot_hides_its_card() {
    let slot = Slot::FaceDown(card(Suit::Diamonds, 9));
    assert_eq!(slot.visible(), None);
    assert_eq!(slot.card(), &card(Suit::Diamonds, 9));
    assert!(slot.is_face_down());
    assert_eq!(slot.revealed(), Slot::FaceUp(card(Suit::Diamonds, 9)));
}

#[test]
fn reveal_turns_face_down_cards_up_in_place() {
    let mut hand = Hand::new();
    hand.add_card(card(Suit::Hearts, 10));
    hand.add_face_down(card(Suit::Spades, 1));
    assert_eq!(hand.value(), 10);

    hand.reveal_face_down_cards();
    assert!(!hand.has_face_down());
    assert_eq!(hand.cards()[1], Slot::FaceUp(card(Suit::Spades, 1)));
    assert_eq!(hand.value(), 21);

    let before = hand.clone();
    hand.reveal_face_down_cards();
    assert_eq!(hand, before);
}

#[test]
fn revealed_is_a_pure_transform() {
    let mut hand = Hand::new();
    hand.add_card(card(Suit::Hearts, 4));
    hand.add_face_down(card(Suit::Hearts, 5));

    let shown = hand.clone().revealed();
    assert!(hand.has_face_down());
    assert!(!shown.has_face_down());
    assert_eq!(shown.value(), 9);
}

#[test]
fn empty_hand_is_worth_zero() {
    let hand = Hand::new();
    assert!(hand.is_empty());
    assert_eq!(hand.value(), 0);
    assert!(!hand.is_blackjack());
    assert!(!hand.is_bust());
}

#[test]
fn non_ace_hands_sum_with_faces_as_ten() {
    assert_eq!(hand_of(&[2, 3]).value(), 5);
    assert_eq!(hand_of(&[9, 8]).value(), 17);
    assert_eq!(hand_of(&[11, 12]).value(), 20);
    assert_eq!(hand_of(&[13, 5, 4]).value(), 19);
    assert_eq!(hand_of(&[10, 12, 2]).value(), 22);
}

#[test]
fn ace_counts_high_when_it_fits() {
    let hand = hand_of(&[1, 6]);
    assert_eq!(hand.value(), 17);
    assert!(hand.evaluate().is_soft());

    assert_eq!(hand_of(&[1, 4, 6]).value(), 21);
}

#[test]
fn ace_demotes_instead_of_busting() {
    let hand = hand_of(&[1, 9, 13]);
    assert_eq!(hand.value(), 20);
    assert!(!hand.is_bust());
    assert!(!hand.evaluate().is_soft());
}

#[test]
fn aces_demote_one_at_a_time() {
    assert_eq!(hand_of(&[1, 1]).value(), 12);
    assert_eq!(hand_of(&[1, 1, 9]).value(), 21);
    assert_eq!(hand_of(&[1, 1, 1, 1]).value(), 14);
    assert_eq!(hand_of(&[1, 1, 10, 10]).value(), 22);
}

#[test]
fn blackjack_needs_exactly_two_cards() {
    assert!(hand_of(&[1, 13]).is_blackjack());
    assert!(hand_of(&[10, 1]).is_blackjack());
    assert!(!hand_of(&[7, 7, 7]).is_blackjack());
    assert!(!hand_of(&[10, 9]).is_blackjack());
}

#[test]
fn face_down_cards_do_not_count() {
    let mut hand = Hand::new();
    hand.add_card(card(Suit::Hearts, 1));
    hand.add_face_down(card(Suit::Hearts, 13));

    let value = HandValue::new(&hand);
    assert_eq!(value.value(), 11);
    assert!(!value.is_blackjack());

    hand.reveal_face_down_cards();
    assert!(hand.is_blackjack());
}

#[test]
fn bust_is_over_twenty_one() {
    assert!(hand_of(&[10, 10, 2]).is_bust());
    assert!(!hand_of(&[10, 10, 1]).is_bust());
}

#[test]
fn card_points_table() {
    assert_eq!(card_points(1), 11);
    assert_eq!(card_points(7), 7);
    assert_eq!(card_points(11), 10);
    assert_eq!(card_points(13), 10);
    assert_eq!(card_points(0), 0);
    assert_eq!(BLACKJACK, 21);
}
