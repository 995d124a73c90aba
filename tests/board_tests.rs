//! Board tests - pick-up, drop and recycle rules

use tui_solitaire::core::{
    Board, Card, Commit, ModeKind, PileContents, PileId, PressOutcome, Refusal, ReleaseOutcome,
};
use tui_solitaire::types::{
    foundation_pos, working_stack_pos, MotionPolicy, PointerInput, Pos, Rank, Suit, DRAW_PILE_POS,
    WASTE_PILE_POS,
};

fn up(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn down(rank: Rank, suit: Suit) -> Card {
    Card::face_down(rank, suit)
}

fn working(stacks: &[(usize, Vec<Card>)]) -> [Vec<Card>; 7] {
    let mut out: [Vec<Card>; 7] = Default::default();
    for (i, cards) in stacks {
        out[*i] = cards.clone();
    }
    out
}

fn instant(piles: PileContents) -> Board {
    Board::from_piles(piles).with_motion(MotionPolicy::Instant)
}

/// A point on the visible edge of card `index` in working stack `stack`.
fn on_working(stack: usize, index: usize) -> Pos<i32> {
    working_stack_pos(stack).translate(2, index as i32)
}

fn on_base(base: Pos<i32>) -> Pos<i32> {
    base.translate(3, 2)
}

fn drag(board: &mut Board, from: Pos<i32>, to: Pos<i32>) -> (PressOutcome, ReleaseOutcome) {
    let press = board.update(PointerInput::press(from)).press;
    board.update(PointerInput::at(to));
    let release = board.update(PointerInput::release(to)).release;
    (press.unwrap(), release.unwrap())
}

#[test]
fn test_king_onto_empty_working_stack_reveals_origin() {
    let mut board = instant(PileContents {
        working: working(&[
            (
                0,
                vec![
                    down(Rank::Four, Suit::Club),
                    up(Rank::King, Suit::Spade),
                    up(Rank::Queen, Suit::Heart),
                ],
            ),
            (3, vec![]),
        ]),
        ..PileContents::default()
    });

    let (press, release) = drag(&mut board, on_working(0, 1), on_base(working_stack_pos(3)));
    assert_eq!(
        press,
        PressOutcome::PickedUp {
            from: PileId::Working(0),
            origin: PileId::Working(0),
            cards: 2
        }
    );
    assert_eq!(
        release,
        ReleaseOutcome::Placed {
            from: PileId::Working(0),
            to: PileId::Working(3),
            cards: 2
        }
    );

    let target = &board.working_stacks()[3];
    assert_eq!(target.len(), 2);
    assert_eq!(target.bottom_card().unwrap().identity(), (Rank::King, Suit::Spade));
    assert_eq!(target.cards()[0].pos(), working_stack_pos(3));
    assert_eq!(target.cards()[1].pos(), working_stack_pos(3).translate(0, 1));

    let origin = &board.working_stacks()[0];
    assert_eq!(origin.len(), 1);
    assert!(origin.top_card().unwrap().face_up);
    assert_eq!(board.moves(), 1);
    assert_eq!(board.mode(), ModeKind::Idle);
}

#[test]
fn test_non_king_rejected_by_empty_working_stack() {
    let mut board = instant(PileContents {
        working: working(&[(0, vec![up(Rank::Queen, Suit::Heart)])]),
        ..PileContents::default()
    });
    let (_, release) = drag(&mut board, on_working(0, 0), on_base(working_stack_pos(5)));
    assert_eq!(
        release,
        ReleaseOutcome::Returned {
            to: PileId::Working(0),
            cards: 1
        }
    );
    assert_eq!(board.working_stacks()[0].len(), 1);
    assert_eq!(board.working_stacks()[0].top_card().unwrap().pos(), working_stack_pos(0));
    assert_eq!(board.moves(), 0);
}

#[test]
fn test_two_of_hearts_rejected_by_empty_foundation() {
    let mut board = instant(PileContents {
        waste: vec![up(Rank::Two, Suit::Heart)],
        ..PileContents::default()
    });
    let (_, release) = drag(&mut board, on_base(WASTE_PILE_POS), on_base(foundation_pos(0)));
    assert_eq!(
        release,
        ReleaseOutcome::Returned {
            to: PileId::Waste,
            cards: 1
        }
    );
    assert!(board.foundations()[0].is_empty());
    assert_eq!(board.waste_pile().len(), 1);
    assert_eq!(board.waste_pile().top_card().unwrap().pos(), WASTE_PILE_POS);
}

#[test]
fn test_foundation_builds_up_by_suit() {
    let mut board = instant(PileContents {
        waste: vec![
            up(Rank::Three, Suit::Diamond),
            up(Rank::Two, Suit::Club),
            up(Rank::Two, Suit::Diamond),
            up(Rank::Ace, Suit::Diamond),
        ],
        ..PileContents::default()
    });
    let waste = on_base(WASTE_PILE_POS);
    let f = on_base(foundation_pos(1));

    assert!(matches!(drag(&mut board, waste, f).1, ReleaseOutcome::Placed { .. }));
    assert!(matches!(drag(&mut board, waste, f).1, ReleaseOutcome::Placed { .. }));
    // Two of Clubs: wrong suit.
    assert!(matches!(drag(&mut board, waste, f).1, ReleaseOutcome::Returned { .. }));

    let foundation = &board.foundations()[1];
    assert_eq!(foundation.len(), 2);
    assert_eq!(foundation.top_card().unwrap().identity(), (Rank::Two, Suit::Diamond));
    assert_eq!(board.moves(), 2);
}

#[test]
fn test_foundation_refuses_runs() {
    let mut board = instant(PileContents {
        working: working(&[(
            2,
            vec![up(Rank::Two, Suit::Spade), up(Rank::Ace, Suit::Heart)],
        )]),
        foundations: [vec![up(Rank::Ace, Suit::Spade)], vec![], vec![], vec![]],
        ..PileContents::default()
    });
    let (press, release) = drag(&mut board, on_working(2, 0), on_base(foundation_pos(0)));
    assert!(matches!(press, PressOutcome::PickedUp { cards: 2, .. }));
    assert!(matches!(release, ReleaseOutcome::Returned { cards: 2, .. }));
    assert_eq!(board.foundations()[0].len(), 1);
}

#[test]
fn test_run_onto_opposite_color_one_rank_higher() {
    let mut board = instant(PileContents {
        working: working(&[
            (
                0,
                vec![up(Rank::Seven, Suit::Club), up(Rank::Six, Suit::Diamond)],
            ),
            (1, vec![down(Rank::Two, Suit::Club), up(Rank::Eight, Suit::Heart)]),
            (2, vec![up(Rank::Eight, Suit::Spade)]),
        ]),
        ..PileContents::default()
    });

    // Seven of Clubs onto the Eight of Spades: same color.
    let (_, release) = drag(&mut board, on_working(0, 0), on_working(2, 0));
    assert!(matches!(release, ReleaseOutcome::Returned { .. }));

    // Onto the Eight of Hearts: legal, pointer over its top card.
    let (_, release) = drag(&mut board, on_working(0, 0), on_working(1, 1));
    assert_eq!(
        release,
        ReleaseOutcome::Placed {
            from: PileId::Working(0),
            to: PileId::Working(1),
            cards: 2
        }
    );
    let stack = &board.working_stacks()[1];
    let ids: Vec<_> = stack.cards().iter().map(|c| c.identity()).collect();
    assert_eq!(
        ids,
        vec![
            (Rank::Two, Suit::Club),
            (Rank::Eight, Suit::Heart),
            (Rank::Seven, Suit::Club),
            (Rank::Six, Suit::Diamond),
        ]
    );
    assert!(!stack.cards()[0].face_up);
    assert!(board.working_stacks()[0].is_empty());
}

#[test]
fn test_drop_must_be_over_the_top_card() {
    let mut board = instant(PileContents {
        working: working(&[
            (0, vec![up(Rank::Seven, Suit::Club)]),
            (
                1,
                vec![
                    up(Rank::Nine, Suit::Club),
                    up(Rank::Eight, Suit::Heart),
                ],
            ),
        ]),
        ..PileContents::default()
    });
    // Row of the Nine, which is covered by the Eight except for its top edge.
    let (_, release) = drag(&mut board, on_working(0, 0), working_stack_pos(1).translate(2, 0));
    assert!(matches!(release, ReleaseOutcome::Returned { .. }));
}

#[test]
fn test_face_down_card_cannot_be_picked_up() {
    let mut board = instant(PileContents {
        working: working(&[(
            4,
            vec![
                down(Rank::Ten, Suit::Heart),
                down(Rank::Jack, Suit::Spade),
                up(Rank::Three, Suit::Club),
            ],
        )]),
        ..PileContents::default()
    });
    let before = board.fingerprint();
    let report = board.update(PointerInput::press(on_working(4, 1)));
    assert_eq!(report.press, Some(PressOutcome::Refused(Refusal::FaceDown)));
    assert_eq!(board.mode(), ModeKind::Idle);
    assert_eq!(board.fingerprint(), before);
    assert_eq!(board.working_stacks()[4].len(), 3);
}

#[test]
fn test_recycle_waste_onto_empty_draw_pile() {
    let waste = vec![
        up(Rank::Ace, Suit::Club),
        up(Rank::Two, Suit::Heart),
        up(Rank::Three, Suit::Spade),
        up(Rank::Four, Suit::Diamond),
        up(Rank::Five, Suit::Club),
    ];
    let mut board = instant(PileContents {
        waste: waste.clone(),
        ..PileContents::default()
    });

    let report = board.update(PointerInput::press(on_base(DRAW_PILE_POS)));
    assert_eq!(report.press, Some(PressOutcome::Recycled { cards: 5 }));
    assert_eq!(board.mode(), ModeKind::Idle);
    assert!(board.held().is_none());
    assert!(board.waste_pile().is_empty());

    let draw = board.draw_pile();
    assert_eq!(draw.len(), 5);
    assert!(draw.cards().iter().all(|c| !c.face_up));
    assert!(draw.cards().iter().all(|c| c.pos() == DRAW_PILE_POS));
    // The old bottom of the waste is now the top of the draw pile.
    assert_eq!(draw.top_card().unwrap().identity(), (Rank::Ace, Suit::Club));
    assert_eq!(draw.bottom_card().unwrap().identity(), (Rank::Five, Suit::Club));

    // Release with nothing held.
    let report = board.update(PointerInput::release(on_base(DRAW_PILE_POS)));
    assert_eq!(report.release, Some(ReleaseOutcome::Refused(Refusal::NothingHeld)));
}

#[test]
fn test_both_piles_empty_press_does_nothing() {
    let mut board = instant(PileContents::default());
    let report = board.update(PointerInput::press(on_base(DRAW_PILE_POS)));
    assert_eq!(report.press, Some(PressOutcome::Refused(Refusal::NothingUnderPointer)));
}

#[test]
fn test_draw_card_can_go_straight_to_a_working_stack() {
    let mut board = instant(PileContents {
        draw: vec![down(Rank::Nine, Suit::Spade), down(Rank::Jack, Suit::Diamond)],
        working: working(&[(6, vec![up(Rank::Queen, Suit::Club)])]),
        ..PileContents::default()
    });
    let (press, release) = drag(&mut board, on_base(DRAW_PILE_POS), on_working(6, 0));
    assert_eq!(
        press,
        PressOutcome::PickedUp {
            from: PileId::Draw,
            origin: PileId::Waste,
            cards: 1
        }
    );
    assert!(matches!(release, ReleaseOutcome::Placed { to: PileId::Working(6), .. }));
    let top = board.working_stacks()[6].top_card().unwrap();
    assert_eq!(top.identity(), (Rank::Jack, Suit::Diamond));
    assert!(top.face_up);
    assert_eq!(board.draw_pile().len(), 1);
    assert!(!board.draw_pile().top_card().unwrap().face_up);
    assert!(board.waste_pile().is_empty());
}

#[test]
fn test_press_and_release_in_one_tick_picks_then_drops() {
    let mut board = instant(PileContents {
        working: working(&[(0, vec![up(Rank::Five, Suit::Heart)])]),
        ..PileContents::default()
    });
    let report = board.update(PointerInput {
        pos: on_working(0, 0),
        pressed: true,
        released: true,
    });
    assert!(matches!(report.press, Some(PressOutcome::PickedUp { .. })));
    assert!(matches!(report.release, Some(ReleaseOutcome::Returned { .. })));
    assert_eq!(board.mode(), ModeKind::Idle);
}

#[test]
fn test_animated_drop_commits_exactly_once() {
    let mut board = Board::from_piles(PileContents {
        working: working(&[
            (0, vec![down(Rank::Two, Suit::Spade), up(Rank::Ace, Suit::Heart)]),
        ]),
        ..PileContents::default()
    })
    .with_motion(MotionPolicy::FixedStep { percent: 10 });

    board.update(PointerInput::press(on_working(0, 1)));
    let report = board.update(PointerInput::release(on_base(foundation_pos(3))));
    assert_eq!(
        report.release,
        Some(ReleaseOutcome::Launched {
            from: PileId::Working(0),
            to: PileId::Foundation(3),
            cards: 1
        })
    );
    assert!(board.is_animating());
    // The origin turns its new top over at launch; the card lands later.
    assert!(board.foundations()[3].is_empty());
    assert!(board.working_stacks()[0].top_card().unwrap().face_up);

    let report = board.update(PointerInput::press(on_working(0, 0)));
    assert_eq!(report.press, Some(PressOutcome::Refused(Refusal::MotionInFlight)));
    let report = board.update(PointerInput::release(on_working(0, 0)));
    assert_eq!(report.release, Some(ReleaseOutcome::Refused(Refusal::MotionInFlight)));

    let mut commits = Vec::new();
    for _ in 0..30 {
        if let Some(commit) = board.update(PointerInput::at(on_working(0, 0))).committed {
            commits.push(commit);
        }
    }
    assert_eq!(
        commits,
        vec![Commit {
            from: PileId::Working(0),
            to: PileId::Foundation(3),
            cards: 1
        }]
    );
    assert_eq!(board.foundations()[3].len(), 1);
    assert_eq!(board.foundations()[3].top_card().unwrap().pos(), foundation_pos(3));
    assert!(board.working_stacks()[0].top_card().unwrap().face_up);
    assert_eq!(board.moves(), 1);
}

#[test]
fn test_win_when_every_foundation_is_complete() {
    let mut foundations: [Vec<Card>; 4] = Default::default();
    for (i, suit) in Suit::ALL.into_iter().enumerate() {
        foundations[i] = Rank::ALL.iter().map(|r| up(*r, suit)).collect();
    }
    let king = foundations[2].pop().unwrap();

    let mut board = instant(PileContents {
        waste: vec![king],
        foundations,
        ..PileContents::default()
    });
    assert!(!board.is_won());
    drag(&mut board, on_base(WASTE_PILE_POS), on_base(foundation_pos(2)));
    assert!(board.is_won());
}

#[test]
fn test_deal_uses_every_card_once() {
    let board = Board::new(2024);
    let mut seen: Vec<u8> = board.all_cards().iter().map(|c| c.index()).collect();
    seen.sort_unstable();
    assert_eq!(seen, (0..52).collect::<Vec<u8>>());
}
