use memopairs::game::{Board, CheckOutcome, DEFAULT_COLUMNS};

fn images() -> Vec<String> {
    [
        "assets/sun.png",
        "assets/moon.png",
        "assets/star.png",
        "assets/leaf.png",
        "assets/wave.png",
        "assets/acorn.png",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn board() -> Board {
    Board::seeded(&images(), DEFAULT_COLUMNS, 42)
}

fn slot_of(board: &Board, id: &str) -> usize {
    board
        .slots()
        .iter()
        .position(|slot| slot.as_ref().map(|c| c.id()) == Some(id))
        .unwrap_or_else(|| panic!("card {} not on board", id))
}

/// Each image appears on exactly two of the twelve cards.
#[test]
fn test_board_construction() {
    let board = board();

    assert_eq!(board.slots().len(), 12);
    assert!(board.slots().iter().all(|slot| slot.is_some()));
    assert_eq!(board.total_pairs(), 6);
    assert_eq!(board.attempts(), 0);
    assert_eq!(board.pairs_found(), 0);
    assert!(!board.is_won());

    for image in images() {
        let count = board
            .slots()
            .iter()
            .filter(|slot| slot.as_ref().map(|c| c.image()) == Some(image.as_str()))
            .count();
        assert_eq!(count, 2, "image {} should be on exactly two cards", image);
    }
}

/// Flipping "2" then "92" and checking is a match: both cards leave the
/// board, one pair and one attempt are counted.
#[test]
fn test_matching_pair_is_removed() {
    let mut board = board();
    let first = slot_of(&board, "2");
    let second = slot_of(&board, "92");

    board.flip(first);
    board.flip(second);
    assert_eq!(board.open_count(), 2);
    assert_eq!(board.attempts(), 1);

    assert_eq!(board.check_pair(), Some(CheckOutcome::Matched));
    assert!(board.slots()[first].is_none());
    assert!(board.slots()[second].is_none());
    assert_eq!(board.pairs_found(), 1);
    assert_eq!(board.attempts(), 1);
    assert_eq!(board.open_count(), 0);
}

/// "1" and "95" do not match: both cards turn face-down again and the
/// attempt still counts.
#[test]
fn test_non_matching_pair_resets() {
    let mut board = board();
    let first = slot_of(&board, "1");
    let second = slot_of(&board, "95");

    board.flip(first);
    board.flip(second);
    assert_eq!(board.check_pair(), Some(CheckOutcome::NoMatch));

    for slot in [first, second] {
        let card = board.slots()[slot].as_ref().expect("card should remain");
        assert!(!card.is_face_up());
    }
    assert_eq!(board.pairs_found(), 0);
    assert_eq!(board.attempts(), 1);
    assert_eq!(board.open_count(), 0);
}

/// Pressing the open card again, or a third card, changes nothing.
#[test]
fn test_flip_is_idempotent_under_guards() {
    let mut board = board();
    let first = slot_of(&board, "3");

    board.flip(first);
    board.flip(first);
    assert_eq!(board.open_count(), 1);
    assert_eq!(board.attempts(), 0);

    let second = slot_of(&board, "4");
    let third = slot_of(&board, "5");
    board.flip(second);
    board.flip(third);
    assert_eq!(board.open_count(), 2);
    assert_eq!(board.attempts(), 1);

    let third_card = board.slots()[third].as_ref().unwrap();
    assert!(!third_card.is_face_up());
}

/// Checking with fewer than two open cards is tolerated silently.
#[test]
fn test_check_requires_two_open_cards() {
    let mut board = board();

    assert_eq!(board.check_pair(), None);
    assert_eq!(board.attempts(), 0);

    board.flip(slot_of(&board, "6"));
    assert_eq!(board.check_pair(), None);
    assert_eq!(board.open_count(), 1);
    assert_eq!(board.pairs_found(), 0);
}

/// Flipping the gap left by a matched pair is a no-op.
#[test]
fn test_flip_empty_slot_is_noop() {
    let mut board = board();
    let first = slot_of(&board, "1");
    let second = slot_of(&board, "91");

    board.flip(first);
    board.flip(second);
    assert_eq!(board.check_pair(), Some(CheckOutcome::Matched));

    board.flip(first);
    assert_eq!(board.open_count(), 0);
}

/// Matching all six pairs wins the game exactly at the sixth check, and
/// every input after that is ignored.
#[test]
fn test_win_fires_exactly_at_six_pairs() {
    let mut board = board();

    for k in 1..=6 {
        assert!(!board.is_won(), "must not be won before pair {}", k);

        let first = slot_of(&board, &k.to_string());
        let second = slot_of(&board, &(k + 90).to_string());
        board.flip(first);
        board.flip(second);
        assert_eq!(board.check_pair(), Some(CheckOutcome::Matched));
        assert_eq!(board.pairs_found(), k as u32);
    }

    assert!(board.is_won());
    assert_eq!(board.attempts(), 6);
    assert!(board.slots().iter().all(|slot| slot.is_none()));

    // Terminal: nothing moves any more.
    board.flip(0);
    assert_eq!(board.open_count(), 0);
    assert_eq!(board.check_pair(), None);
    assert_eq!(board.pairs_found(), 6);
}

/// Mixed play keeps the selection within 0..=2 at all times.
#[test]
fn test_selection_size_stays_bounded() {
    let mut board = board();

    for slot in 0..board.slots().len() {
        board.flip(slot);
        assert!(board.open_count() <= 2);
    }

    board.check_pair();
    assert_eq!(board.open_count(), 0);
}

/// Pair count follows the configured image list, not a hard-coded six.
#[test]
fn test_pair_count_follows_image_list() {
    let images: Vec<String> = (1..=3).map(|i| format!("assets/face{i}.png")).collect();
    let mut board = Board::seeded(&images, DEFAULT_COLUMNS, 9);

    assert_eq!(board.slots().len(), 6);
    assert_eq!(board.total_pairs(), 3);

    for k in 1..=3 {
        board.flip(slot_of(&board, &k.to_string()));
        board.flip(slot_of(&board, &(k + 90).to_string()));
        assert_eq!(board.check_pair(), Some(CheckOutcome::Matched));
    }
    assert!(board.is_won());
}
