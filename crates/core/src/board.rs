//! Board module - piles, pointer state and the pick-up/drop state machine
//!
//! The board owns every pile: the face-down draw pile, the overturned (waste)
//! pile, seven working stacks and four foundations. Input arrives once per
//! tick as a pointer position plus press/release edges.
//!
//! # Modes
//!
//! | mode | event | next |
//! |------|-------|------|
//! | `Idle` | press over pickable cards | `Holding` |
//! | `Idle` | press over empty draw pile | `Idle` (waste recycled) |
//! | `Holding` | pointer move | `Holding` (held cards follow the pointer) |
//! | `Holding` | release over a legal target, instant policy | `Idle` (committed) |
//! | `Holding` | release over a legal target, animated policy | `Animating` |
//! | `Holding` | release elsewhere | `Idle` (returned to origin) |
//! | `Animating` | tick, not yet arrived | `Animating` |
//! | `Animating` | tick, arrived | `Idle` (committed) |
//! | `Animating` | press or release | `Animating` (ignored) |
//!
//! Rule violations never fail: they are reported as a [`Refusal`] and leave
//! every pile as it was.

use std::fmt;
use std::mem;

use arrayvec::ArrayVec;
use log::{debug, info};

use crate::card::{standard_deck, Card};
use crate::motion::{Animation, Interpolation, Motion, Progress};
use crate::render::{render_floating, render_stack, CardRenderer};
use crate::rng::DealRng;
use crate::stack::CardStack;
use crate::types::{
    foundation_pos, working_stack_pos, Layout, MotionPolicy, PointerInput, Pos, Rank, DECK_SIZE,
    DRAW_PILE_POS, FOUNDATIONS, PILE_COUNT, WASTE_PILE_POS, WORKING_STACKS,
};

/// Identifies one pile on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PileId {
    Draw,
    Waste,
    Working(usize),
    Foundation(usize),
}

impl fmt::Display for PileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PileId::Draw => f.write_str("draw pile"),
            PileId::Waste => f.write_str("waste pile"),
            PileId::Working(i) => write!(f, "working stack {}", i + 1),
            PileId::Foundation(i) => write!(f, "foundation {}", i + 1),
        }
    }
}

/// Why an input edge changed nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refusal {
    /// Release with nothing in hand.
    NothingHeld,
    /// Press while cards are already in hand.
    AlreadyHolding,
    /// A transfer is still animating.
    MotionInFlight,
    /// The card under the pointer is face-down.
    FaceDown,
    /// No pile offered cards at the pointer.
    NothingUnderPointer,
}

impl fmt::Display for Refusal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Refusal::NothingHeld => "no cards held",
            Refusal::AlreadyHolding => "cards are already held",
            Refusal::MotionInFlight => "a move is still in motion",
            Refusal::FaceDown => "cannot pick up a face-down card",
            Refusal::NothingUnderPointer => "no cards under the pointer",
        };
        f.write_str(msg)
    }
}

/// Result of a press edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// Cards were lifted from `from`; they return to `origin` if dropped nowhere.
    PickedUp {
        from: PileId,
        origin: PileId,
        cards: usize,
    },
    /// The waste pile was turned over onto the empty draw pile.
    Recycled { cards: usize },
    Refused(Refusal),
}

/// Result of a release edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// Transfer committed immediately.
    Placed {
        from: PileId,
        to: PileId,
        cards: usize,
    },
    /// Transfer accepted; it commits when the motion arrives.
    Launched {
        from: PileId,
        to: PileId,
        cards: usize,
    },
    /// No legal target: the cards went back to their origin.
    Returned { to: PileId, cards: usize },
    Refused(Refusal),
}

/// A committed transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Commit {
    pub from: PileId,
    pub to: PileId,
    pub cards: usize,
}

/// Everything that happened during one [`Board::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    pub committed: Option<Commit>,
    pub press: Option<PressOutcome>,
    pub release: Option<ReleaseOutcome>,
}

/// Coarse view of the board mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeKind {
    Idle,
    Holding,
    Animating,
}

#[derive(Debug, Clone, PartialEq)]
struct Hold {
    stack: CardStack,
    origin: PileId,
    offset: Pos<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Transfer {
    origin: PileId,
    destination: PileId,
}

#[derive(Debug, Clone, PartialEq)]
enum Mode {
    Idle,
    Holding(Hold),
    Animating {
        stack: CardStack,
        animation: Animation<Transfer>,
    },
}

/// Initial contents of every pile, bottom-to-top, for building arbitrary positions.
///
/// Cards keep their face-up flags. No deck validation is done, so partial
/// decks are allowed.
#[derive(Debug, Clone, Default)]
pub struct PileContents {
    pub draw: Vec<Card>,
    pub waste: Vec<Card>,
    pub working: [Vec<Card>; WORKING_STACKS],
    pub foundations: [Vec<Card>; FOUNDATIONS],
}

/// The solitaire board.
#[derive(Debug, Clone)]
pub struct Board {
    draw: CardStack,
    waste: CardStack,
    working: [CardStack; WORKING_STACKS],
    foundations: [CardStack; FOUNDATIONS],
    mode: Mode,
    cursor: Pos<i32>,
    motion: MotionPolicy,
    seed: u32,
    moves: u32,
}

impl Board {
    /// Deal a new game from `seed`.
    ///
    /// Working stack `i` receives `i + 1` cards with only the top one face-up;
    /// the remaining 24 cards form the face-down draw pile.
    pub fn new(seed: u32) -> Self {
        let mut deck = CardStack::with_cards(
            standard_deck().into_iter().collect(),
            DRAW_PILE_POS,
            Layout::Collapsed,
        );
        deck.shuffle(&mut DealRng::new(seed));
        deck.set_all_face_up(false);

        let working = std::array::from_fn(|i| {
            let mut stack = CardStack::new(working_stack_pos(i), Layout::Spread);
            if let Some(dealt) = deck.split_at(deck.len().saturating_sub(i + 1)) {
                stack.append_stack(dealt);
            }
            stack.reveal_top();
            stack
        });

        info!("dealt game with seed {}", seed);

        Self {
            draw: deck,
            waste: CardStack::new(WASTE_PILE_POS, Layout::Collapsed),
            working,
            foundations: std::array::from_fn(|i| {
                CardStack::new(foundation_pos(i), Layout::Collapsed)
            }),
            mode: Mode::Idle,
            cursor: Pos::default(),
            motion: MotionPolicy::default(),
            seed,
            moves: 0,
        }
    }

    /// Build a board with the given pile contents at the standard positions.
    pub fn from_piles(piles: PileContents) -> Self {
        let PileContents {
            draw,
            waste,
            working,
            foundations,
        } = piles;
        let mut working = working.into_iter();
        let mut foundations = foundations.into_iter();
        Self {
            draw: CardStack::with_cards(draw, DRAW_PILE_POS, Layout::Collapsed),
            waste: CardStack::with_cards(waste, WASTE_PILE_POS, Layout::Collapsed),
            working: std::array::from_fn(|i| {
                CardStack::with_cards(
                    working.next().unwrap_or_default(),
                    working_stack_pos(i),
                    Layout::Spread,
                )
            }),
            foundations: std::array::from_fn(|i| {
                CardStack::with_cards(
                    foundations.next().unwrap_or_default(),
                    foundation_pos(i),
                    Layout::Collapsed,
                )
            }),
            mode: Mode::Idle,
            cursor: Pos::default(),
            motion: MotionPolicy::default(),
            seed: 0,
            moves: 0,
        }
    }

    pub fn with_motion(mut self, policy: MotionPolicy) -> Self {
        self.motion = policy;
        self
    }

    /// Replace this game with a fresh deal, keeping the motion policy.
    pub fn new_game(&mut self, seed: u32) {
        let motion = self.motion;
        *self = Board::new(seed).with_motion(motion);
    }

    /// Deal the current seed again.
    pub fn redeal(&mut self) {
        self.new_game(self.seed);
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn cursor(&self) -> Pos<i32> {
        self.cursor
    }

    pub fn motion_policy(&self) -> MotionPolicy {
        self.motion
    }

    /// Applies to transfers launched from now on.
    pub fn set_motion_policy(&mut self, policy: MotionPolicy) {
        self.motion = policy;
    }

    pub fn mode(&self) -> ModeKind {
        match self.mode {
            Mode::Idle => ModeKind::Idle,
            Mode::Holding(_) => ModeKind::Holding,
            Mode::Animating { .. } => ModeKind::Animating,
        }
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.mode, Mode::Animating { .. })
    }

    pub fn draw_pile(&self) -> &CardStack {
        &self.draw
    }

    pub fn waste_pile(&self) -> &CardStack {
        &self.waste
    }

    pub fn working_stacks(&self) -> &[CardStack; WORKING_STACKS] {
        &self.working
    }

    pub fn foundations(&self) -> &[CardStack; FOUNDATIONS] {
        &self.foundations
    }

    /// The pile named by `id`, or `None` for an out-of-range index.
    pub fn pile(&self, id: PileId) -> Option<&CardStack> {
        match id {
            PileId::Draw => Some(&self.draw),
            PileId::Waste => Some(&self.waste),
            PileId::Working(i) => self.working.get(i),
            PileId::Foundation(i) => self.foundations.get(i),
        }
    }

    /// Ids built by the board itself are always in range.
    fn stack(&self, id: PileId) -> &CardStack {
        match id {
            PileId::Draw => &self.draw,
            PileId::Waste => &self.waste,
            PileId::Working(i) => &self.working[i],
            PileId::Foundation(i) => &self.foundations[i],
        }
    }

    fn pile_mut(&mut self, id: PileId) -> &mut CardStack {
        match id {
            PileId::Draw => &mut self.draw,
            PileId::Waste => &mut self.waste,
            PileId::Working(i) => &mut self.working[i],
            PileId::Foundation(i) => &mut self.foundations[i],
        }
    }

    /// Every pile in draw order: working stacks, draw, waste, foundations.
    pub fn pile_ids() -> ArrayVec<PileId, PILE_COUNT> {
        let mut ids = ArrayVec::new();
        ids.extend((0..WORKING_STACKS).map(PileId::Working));
        ids.push(PileId::Draw);
        ids.push(PileId::Waste);
        ids.extend((0..FOUNDATIONS).map(PileId::Foundation));
        ids
    }

    /// Cards in the pointer's hand, or in flight toward their destination.
    pub fn held(&self) -> Option<&CardStack> {
        match &self.mode {
            Mode::Idle => None,
            Mode::Holding(hold) => Some(&hold.stack),
            Mode::Animating { stack, .. } => Some(stack),
        }
    }

    /// Pile the held cards return to when dropped nowhere.
    pub fn held_origin(&self) -> Option<PileId> {
        match &self.mode {
            Mode::Holding(hold) => Some(hold.origin),
            Mode::Animating { animation, .. } => Some(animation.payload().origin),
            Mode::Idle => None,
        }
    }

    /// Every card on the board, including held and in-flight cards.
    pub fn all_cards(&self) -> Vec<&Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for id in Self::pile_ids() {
            cards.extend(self.stack(id).cards());
        }
        if let Some(held) = self.held() {
            cards.extend(held.cards());
        }
        cards
    }

    /// All four foundations complete.
    pub fn is_won(&self) -> bool {
        self.foundations
            .iter()
            .all(|f| f.len() == Rank::ALL.len())
    }

    /// Hash of everything visible, for skipping redundant redraws.
    pub fn fingerprint(&self) -> u64 {
        let mut h = FNV_OFFSET_BASIS;
        for id in Self::pile_ids() {
            h = fnv1a_mix_stack(h, self.stack(id));
        }
        h = fnv1a_mix(h, self.mode() as u8);
        if let Some(held) = self.held() {
            h = fnv1a_mix_stack(h, held);
        }
        for b in self.moves.to_le_bytes() {
            h = fnv1a_mix(h, b);
        }
        h
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Emit every visible card and placeholder, held or in-flight cards last.
    pub fn render<R: CardRenderer + ?Sized>(&self, renderer: &mut R) {
        for id in Self::pile_ids() {
            render_stack(self.stack(id), renderer);
        }
        if let Some(held) = self.held() {
            render_floating(held, renderer);
        }
    }

    // ------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------

    /// Apply one tick of host input.
    ///
    /// An in-flight motion advances first, so its commit lands before this
    /// tick's pointer edges are processed. Press is applied before release.
    pub fn update(&mut self, input: PointerInput) -> TickReport {
        let committed = self.tick();
        self.set_cursor_pos(input.pos);
        let press = input.pressed.then(|| self.press());
        let release = input.released.then(|| self.release());
        TickReport {
            committed,
            press,
            release,
        }
    }

    /// Move the pointer; held cards keep their offset from it.
    pub fn set_cursor_pos(&mut self, pos: Pos<i32>) {
        self.cursor = pos;
        if let Mode::Holding(hold) = &mut self.mode {
            hold.stack.move_base_to(pos + hold.offset);
        }
    }

    /// Pointer-down: try to pick cards up at the cursor.
    pub fn press(&mut self) -> PressOutcome {
        match self.mode {
            Mode::Idle => {}
            Mode::Holding(_) => return PressOutcome::Refused(Refusal::AlreadyHolding),
            Mode::Animating { .. } => {
                debug!("press ignored: transfer in motion");
                return PressOutcome::Refused(Refusal::MotionInFlight);
            }
        }
        let point = self.cursor;

        for i in 0..WORKING_STACKS {
            let Some(run) = self.working[i].split_at_position(point) else {
                continue;
            };
            if !run.bottom_card().is_some_and(|c| c.face_up) {
                debug!("cannot pick up a run whose bottom card is face-down");
                self.working[i].append_stack(run);
                return PressOutcome::Refused(Refusal::FaceDown);
            }
            return self.hold(run, PileId::Working(i), PileId::Working(i));
        }

        for i in 0..FOUNDATIONS {
            if let Some(top) = self.foundations[i].split_at_position(point) {
                return self.hold(top, PileId::Foundation(i), PileId::Foundation(i));
            }
        }

        if self.draw.base_contains(point) {
            if let Some(mut card) = self.draw.split_at_position(point) {
                card.set_all_face_up(true);
                return self.hold(card, PileId::Draw, PileId::Waste);
            }
            if !self.waste.is_empty() {
                return self.recycle_waste();
            }
        }

        if self.waste.top_card().is_some_and(|c| c.contains(point)) {
            if let Some(top) = self.waste.split_at_position(point) {
                return self.hold(top, PileId::Waste, PileId::Waste);
            }
        }

        debug!("nothing picked up at {:?}", point);
        PressOutcome::Refused(Refusal::NothingUnderPointer)
    }

    /// Pointer-up: drop the held cards on a legal target or send them back.
    pub fn release(&mut self) -> ReleaseOutcome {
        let hold = match mem::replace(&mut self.mode, Mode::Idle) {
            Mode::Holding(hold) => hold,
            Mode::Idle => return ReleaseOutcome::Refused(Refusal::NothingHeld),
            animating @ Mode::Animating { .. } => {
                self.mode = animating;
                debug!("release ignored: transfer in motion");
                return ReleaseOutcome::Refused(Refusal::MotionInFlight);
            }
        };

        match self.drop_target(&hold.stack) {
            Some(destination) => self.place(hold, destination),
            None => {
                let cards = hold.stack.len();
                debug!("no target under the pointer, returning {} card(s) to {}", cards, hold.origin);
                self.pile_mut(hold.origin).append_stack(hold.stack);
                ReleaseOutcome::Returned {
                    to: hold.origin,
                    cards,
                }
            }
        }
    }

    /// Advance an in-flight motion by one tick, committing it on arrival.
    pub fn tick(&mut self) -> Option<Commit> {
        match mem::replace(&mut self.mode, Mode::Idle) {
            Mode::Animating {
                mut stack,
                animation,
            } => match animation.step(&mut stack) {
                Progress::Running(animation) => {
                    self.mode = Mode::Animating { stack, animation };
                    None
                }
                Progress::Done(transfer) => Some(self.commit(stack, transfer)),
            },
            other => {
                self.mode = other;
                None
            }
        }
    }

    // ------------------------------------------------------------------
    // Rules
    // ------------------------------------------------------------------

    fn hold(&mut self, stack: CardStack, from: PileId, origin: PileId) -> PressOutcome {
        let cards = stack.len();
        debug!("picked up {} card(s) from {}", cards, from);
        let offset = stack.base_pos() - self.cursor;
        self.mode = Mode::Holding(Hold {
            stack,
            origin,
            offset,
        });
        PressOutcome::PickedUp {
            from,
            origin,
            cards,
        }
    }

    /// Turn the waste pile over onto the draw pile, face-down.
    fn recycle_waste(&mut self) -> PressOutcome {
        self.waste.reverse();
        let recycled = self.waste.take_all();
        let cards = recycled.len();
        self.draw.append_stack(recycled);
        self.draw.set_all_face_up(false);
        debug!("recycled {} card(s) from the waste pile", cards);
        PressOutcome::Recycled { cards }
    }

    /// First pile, in priority order, that legally accepts `run` at the cursor.
    fn drop_target(&self, run: &CardStack) -> Option<PileId> {
        let bottom = run.bottom_card()?;
        let point = self.cursor;

        for (i, stack) in self.working.iter().enumerate() {
            let accepts = match stack.top_card() {
                None => bottom.rank == Rank::King && stack.base_contains(point),
                Some(top) => {
                    top.face_up
                        && top.suit.is_opposite_color(bottom.suit)
                        && bottom.rank.is_one_less_than(top.rank)
                        && top.contains(point)
                }
            };
            if accepts {
                return Some(PileId::Working(i));
            }
        }

        if run.len() != 1 {
            debug!("only single cards go on foundations");
            return None;
        }
        for (i, pile) in self.foundations.iter().enumerate() {
            let accepts = match pile.top_card() {
                None => bottom.rank == Rank::Ace && pile.base_contains(point),
                Some(top) => {
                    top.suit == bottom.suit
                        && bottom.rank.is_one_more_than(top.rank)
                        && top.contains(point)
                }
            };
            if accepts {
                return Some(PileId::Foundation(i));
            }
        }
        None
    }

    /// Reveal the origin's new top card, then move the cards over, at once
    /// or through a motion that commits on arrival.
    fn place(&mut self, hold: Hold, destination: PileId) -> ReleaseOutcome {
        let Hold { stack, origin, .. } = hold;
        let cards = stack.len();
        if self.pile_mut(origin).reveal_top() {
            debug!("revealed new top card of {}", origin);
        }
        let transfer = Transfer {
            origin,
            destination,
        };

        match Interpolation::from_policy(self.motion) {
            None => {
                self.commit(stack, transfer);
                ReleaseOutcome::Placed {
                    from: origin,
                    to: destination,
                    cards,
                }
            }
            Some(interpolation) => {
                let target = self.stack(destination).next_slot_pos();
                let motion = Motion::new(stack.base_pos(), target, interpolation);
                debug!(
                    "launching {} card(s) toward {} ({:?} -> {:?})",
                    cards,
                    destination,
                    stack.base_pos(),
                    target
                );
                self.mode = Mode::Animating {
                    stack,
                    animation: Animation::new(motion, transfer),
                };
                ReleaseOutcome::Launched {
                    from: origin,
                    to: destination,
                    cards,
                }
            }
        }
    }

    /// Append the cards to their destination and count the move.
    fn commit(&mut self, stack: CardStack, transfer: Transfer) -> Commit {
        let Transfer {
            origin,
            destination,
        } = transfer;
        let cards = stack.len();
        self.pile_mut(destination).append_stack(stack);
        self.moves += 1;
        debug!("moved {} card(s) from {} to {}", cards, origin, destination);
        if self.is_won() {
            info!("game won in {} moves (seed {})", self.moves, self.seed);
        }
        Commit {
            from: origin,
            to: destination,
            cards,
        }
    }
}

const FNV_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01B3;

#[inline]
fn fnv1a_mix(mut h: u64, byte: u8) -> u64 {
    h ^= byte as u64;
    h.wrapping_mul(FNV_PRIME)
}

fn fnv1a_mix_stack(mut h: u64, stack: &CardStack) -> u64 {
    h = fnv1a_mix(h, 0xC0);
    for b in (stack.len() as u32).to_le_bytes() {
        h = fnv1a_mix(h, b);
    }
    for card in stack.cards() {
        h = fnv1a_mix(h, card.index());
        h = fnv1a_mix(h, card.face_up as u8);
        for b in card.pos().x.to_le_bytes().into_iter().chain(card.pos().y.to_le_bytes()) {
            h = fnv1a_mix(h, b);
        }
    }
    h
}
