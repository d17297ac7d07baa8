use showdown_engine::category::{classify, Category};
use showdown_engine::compare::{compare, compare_text, Showdown, Verdict};
use showdown_engine::deck::Deck;
use showdown_engine::hand::parse_hand;

fn verdict(a: &str, b: &str) -> Verdict {
    compare_text(a, b).unwrap()
}

#[test]
fn straight_flush_against_plain_flush() {
    // 2-3-4-5-7 is not a run, so the second hand is only a flush
    let first = parse_hand("2H 3H 4H 5H 6H").unwrap();
    let second = parse_hand("2S 3S 4S 5S 7S").unwrap();
    assert_eq!(classify(&first), Category::StraightFlush);
    assert_eq!(classify(&second), Category::Flush);
    assert_eq!(compare(&first, &second), Verdict::FirstWins);
}

#[test]
fn higher_straight_flush_wins() {
    assert_eq!(
        verdict("2H 3H 4H 5H 6H", "3S 4S 5S 6S 7S"),
        Verdict::SecondWins
    );
}

#[test]
fn quad_aces_beat_quad_kings() {
    assert_eq!(
        verdict("AH AD AC AS 2H", "KH KD KC KS 2H"),
        Verdict::FirstWins
    );
}

#[test]
fn two_pair_higher_pair_decides() {
    assert_eq!(
        verdict("2H 2D 3H 3D 4H", "2S 2C 5H 5D 4S"),
        Verdict::SecondWins
    );
}

#[test]
fn two_pair_lower_pair_decides_when_high_pairs_match() {
    assert_eq!(
        verdict("KH KD 7H 7D 2H", "KS KC 4H 4D AS"),
        Verdict::FirstWins
    );
}

#[test]
fn identical_high_card_hands_tie() {
    assert_eq!(verdict("2H 4D 6S 8C TD", "2H 4D 6S 8C TD"), Verdict::Tie);
}

#[test]
fn high_card_never_breaks_ties() {
    assert_eq!(verdict("AH KD 6S 8C TD", "2H 4D 6S 8C 9D"), Verdict::Tie);
}

#[test]
fn one_pair_rank_then_kicker() {
    assert_eq!(
        verdict("9H 9D 2S 3C 4D", "8H 8D AS KC QD"),
        Verdict::FirstWins
    );
    assert_eq!(
        verdict("9H 9D 2S 3C KD", "9S 9C 2H 3D AD"),
        Verdict::SecondWins
    );
    // only the top kicker counts
    assert_eq!(verdict("9H 9D 2S 3C AD", "9S 9C 6H 7D AC"), Verdict::Tie);
}

#[test]
fn one_pair_kicker_ignores_input_order() {
    // the king is typed first, the queen last
    assert_eq!(
        verdict("9H 9D KC 2S 3D", "9S 9C 2H 3C QD"),
        Verdict::FirstWins
    );
    assert_eq!(
        verdict("KC 3D 9H 2S 9D", "9S 9C 2H 3C QD"),
        Verdict::FirstWins
    );
}

#[test]
fn trips_rank_decides_and_kickers_do_not() {
    assert_eq!(
        verdict("JH JD JS 2C 3D", "TH TD TS AC KD"),
        Verdict::FirstWins
    );
    assert_eq!(verdict("JH JD JS 2C 3D", "JH JD JS AC KD"), Verdict::Tie);
}

#[test]
fn straight_high_card_decides() {
    assert_eq!(
        verdict("5H 6D 7S 8C 9D", "6H 7D 8S 9C TD"),
        Verdict::SecondWins
    );
    assert_eq!(verdict("5H 6D 7S 8C 9D", "9H 8D 7C 6S 5S"), Verdict::Tie);
}

#[test]
fn flush_compares_from_top_down() {
    assert_eq!(
        verdict("2H 5H 9H JH AH", "3S 6S 9S JS KS"),
        Verdict::FirstWins
    );
    assert_eq!(
        verdict("2H 5H 9H JH AH", "3S 5S 9S JS AS"),
        Verdict::SecondWins
    );
    assert_eq!(verdict("2H 5H 9H JH AH", "2S 5S 9S JS AS"), Verdict::Tie);
}

#[test]
fn full_house_triple_decides() {
    assert_eq!(
        verdict("4H 4D 4S 2C 2D", "3H 3D 3S AC AD"),
        Verdict::FirstWins
    );
}

#[test]
fn swapping_arguments_reverses_the_verdict() {
    let pairs = [
        ("2H 3H 4H 5H 6H", "2S 3S 4S 5S 7S"),
        ("AH AD AC AS 2H", "KH KD KC KS 2H"),
        ("2H 2D 3H 3D 4H", "2S 2C 5H 5D 4S"),
        ("2H 4D 6S 8C TD", "2H 4D 6S 8C TD"),
        ("9H 9D 2S 3C KD", "9S 9C 2H 3D AD"),
        ("2H 5H 9H JH AH", "3S 6S 9S JS KS"),
    ];
    for (a, b) in pairs {
        assert_eq!(verdict(a, b), verdict(b, a).reversed(), "{} vs {}", a, b);
    }
}

#[test]
fn dealt_hands_compare_antisymmetrically() {
    for seed in 0..200 {
        let mut deck = Deck::new_with_seed(seed);
        deck.shuffle();
        let a = deck.deal_hand().unwrap();
        let b = deck.deal_hand().unwrap();
        assert_eq!(compare(&a, &b), compare(&b, &a).reversed(), "seed {}", seed);
        assert_eq!(compare(&a, &a), Verdict::Tie);
    }
}

#[test]
fn showdown_serializes_for_clients() {
    let s = Showdown::evaluate(
        parse_hand("AH AD AC AS 2H").unwrap(),
        parse_hand("KH KD KC KS 2H").unwrap(),
    );
    let json = serde_json::to_value(&s).unwrap();
    assert_eq!(json["verdict"], "first_wins");
    assert_eq!(json["first_category"], "four_of_a_kind");
    assert_eq!(json["first"]["cards"][0]["rank"], "Ace");
}
