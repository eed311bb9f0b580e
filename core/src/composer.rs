//! Dubeolsik syllable composer.
//!
//! `HangulComposer` owns one `CompositionContext` and turns classified jamo
//! into `CompositionResult`s. Every transition is computed by a pure function
//! of (context, input) so the table of transitions can be read in one place;
//! the composer only stores the next context.
//!
//! The composer never fails. Indices are typed, and the few lookups that
//! cannot miss for well-formed contexts fall back to a harmless result and
//! log a warning instead of panicking.

use crate::jamo::{compose_syllable, Choseong, JamoInput, Jongseong, Jungseong};
use crate::result::{Committed, CompositionResult};
use tracing::{debug, warn};

/// Which slots of the syllable are filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompositionState {
    Empty,
    Choseong,
    Jungseong,
    Jongseong,
}

/// The in-progress syllable.
///
/// Each variant carries exactly the slots its state allows, so a context
/// can never hold a vowel without an initial or a final without a vowel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompositionContext {
    #[default]
    Empty,
    /// Initial consonant only. `cluster` accumulates a consonant cluster
    /// (e.g. ㄱ then ㅅ shown as ㄳ) that has no vowel yet.
    Initial {
        cho: Choseong,
        cluster: Option<Jongseong>,
    },
    /// Initial and vowel.
    Medial { cho: Choseong, jung: Jungseong },
    /// Initial, vowel and final.
    Final {
        cho: Choseong,
        jung: Jungseong,
        jong: Jongseong,
    },
}

impl CompositionContext {
    /// Assemble a context from optional slots. Returns `None` for slot
    /// combinations no state allows (e.g. a vowel without an initial).
    pub fn from_parts(
        cho: Option<Choseong>,
        jung: Option<Jungseong>,
        jong: Option<Jongseong>,
    ) -> Option<Self> {
        match (cho, jung, jong) {
            (None, None, None) => Some(Self::Empty),
            (Some(cho), None, cluster) => Some(Self::Initial { cho, cluster }),
            (Some(cho), Some(jung), None) => Some(Self::Medial { cho, jung }),
            (Some(cho), Some(jung), Some(jong)) => Some(Self::Final { cho, jung, jong }),
            _ => None,
        }
    }

    pub fn state(&self) -> CompositionState {
        match self {
            Self::Empty => CompositionState::Empty,
            Self::Initial { .. } => CompositionState::Choseong,
            Self::Medial { .. } => CompositionState::Jungseong,
            Self::Final { .. } => CompositionState::Jongseong,
        }
    }

    pub fn cho(&self) -> Option<Choseong> {
        match *self {
            Self::Empty => None,
            Self::Initial { cho, .. } | Self::Medial { cho, .. } | Self::Final { cho, .. } => Some(cho),
        }
    }

    pub fn jung(&self) -> Option<Jungseong> {
        match *self {
            Self::Medial { jung, .. } | Self::Final { jung, .. } => Some(jung),
            _ => None,
        }
    }

    /// The final slot, or the accumulated cluster while in `Choseong`.
    pub fn jong(&self) -> Option<Jongseong> {
        match *self {
            Self::Initial { cluster, .. } => cluster,
            Self::Final { jong, .. } => Some(jong),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The character currently shown for this context: a syllable once a
    /// vowel is present, otherwise the standalone consonant (or cluster).
    pub fn display(&self) -> Option<char> {
        match *self {
            Self::Empty => None,
            Self::Initial { cluster: Some(cluster), .. } => Some(cluster.compat()),
            Self::Initial { cho, cluster: None } => Some(cho.compat()),
            Self::Medial { cho, jung } => Some(compose_syllable(cho, jung, None)),
            Self::Final { cho, jung, jong } => Some(compose_syllable(cho, jung, Some(jong))),
        }
    }
}

type Transition = (CompositionContext, CompositionResult);

fn composing(next: CompositionContext) -> Transition {
    let display = next.display().unwrap_or_default();
    (next, CompositionResult::Composing(display))
}

fn commit(committed: char, next: CompositionContext) -> Transition {
    let display = next.display().unwrap_or_default();
    (
        next,
        CompositionResult::Commit {
            committed: Committed::one(committed),
            display,
        },
    )
}

fn flush_all(committed: Committed) -> Transition {
    (CompositionContext::Empty, CompositionResult::CommitFlush(committed))
}

fn initial(cho: Choseong) -> CompositionContext {
    CompositionContext::Initial { cho, cluster: None }
}

/// Compute the next context and result for one classified key.
pub fn transition(context: CompositionContext, input: JamoInput) -> Transition {
    use CompositionContext::*;
    use JamoInput::*;

    match (context, input) {
        (Empty, Consonant(cho)) => composing(initial(cho)),
        (Empty, Vowel(jung)) => flush_all(Committed::one(jung.compat())),

        (Initial { cho, cluster: Some(cluster) }, Vowel(jung)) => match cluster.split() {
            Some((remaining, freed)) => commit(remaining.compat(), Medial { cho: freed, jung }),
            None => {
                warn!(?cluster, "initial cluster is not a compound final; dropping it");
                composing(Medial { cho, jung })
            }
        },
        (Initial { cho, cluster: None }, Vowel(jung)) => composing(Medial { cho, jung }),
        (Initial { cho, cluster: Some(cluster) }, Consonant(added)) => match cluster.combine(added) {
            Some(larger) => composing(Initial { cho, cluster: Some(larger) }),
            None => commit(cluster.compat(), initial(added)),
        },
        (Initial { cho, cluster: None }, Consonant(added)) => {
            match cho.as_jongseong().and_then(|jong| jong.combine(added)) {
                Some(cluster) => composing(Initial { cho, cluster: Some(cluster) }),
                None => commit(cho.compat(), initial(added)),
            }
        }

        (Medial { cho, jung }, Consonant(added)) => match added.as_jongseong() {
            Some(jong) => composing(Final { cho, jung, jong }),
            None => commit(compose_syllable(cho, jung, None), initial(added)),
        },
        (Medial { cho, jung }, Vowel(next)) => match jung.combine(next) {
            Some(combined) => composing(Medial { cho, jung: combined }),
            None => flush_all(Committed::two(compose_syllable(cho, jung, None), next.compat())),
        },

        (Final { cho, jung, jong }, Vowel(next)) => match jong.split() {
            Some((remaining, freed)) => commit(
                compose_syllable(cho, jung, Some(remaining)),
                Medial { cho: freed, jung: next },
            ),
            None => match jong.as_choseong() {
                Some(moved) => commit(compose_syllable(cho, jung, None), Medial { cho: moved, jung: next }),
                None => {
                    warn!(?jong, "final has no initial form; committing syllable and vowel");
                    flush_all(Committed::two(compose_syllable(cho, jung, Some(jong)), next.compat()))
                }
            },
        },
        (Final { cho, jung, jong }, Consonant(added)) => match jong.combine(added) {
            Some(combined) => composing(Final { cho, jung, jong: combined }),
            None => commit(compose_syllable(cho, jung, Some(jong)), initial(added)),
        },
    }
}

/// Undo the most recent atomic step.
pub fn undo(context: CompositionContext) -> Transition {
    use CompositionContext::*;

    match context {
        Final { cho, jung, jong } => match jong.split() {
            Some((remaining, _)) => composing(Final { cho, jung, jong: remaining }),
            None => composing(Medial { cho, jung }),
        },
        Medial { cho, jung } => match jung.split() {
            Some((first, _)) => composing(Medial { cho, jung: first }),
            None => composing(initial(cho)),
        },
        Initial { cho, cluster: Some(_) } => composing(initial(cho)),
        Initial { cluster: None, .. } => flush_all(Committed::empty()),
        Empty => (Empty, CompositionResult::Pass),
    }
}

/// One composition context plus the operations that drive it.
#[derive(Debug, Clone, Default)]
pub struct HangulComposer {
    context: CompositionContext,
}

impl HangulComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an arbitrary context.
    pub fn with_context(context: CompositionContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &CompositionContext {
        &self.context
    }

    pub fn state(&self) -> CompositionState {
        self.context.state()
    }

    pub fn is_empty(&self) -> bool {
        self.context.is_empty()
    }

    /// Feed one consonant or vowel.
    pub fn process(&mut self, input: JamoInput) -> CompositionResult {
        let (next, result) = transition(self.context, input);
        debug!(from = ?self.context.state(), to = ?next.state(), ?input, "compose");
        self.context = next;
        result
    }

    /// Feed a key classified by the host as a (consonant index, vowel index)
    /// pair with `-1` for the unused side.
    ///
    /// Both negative, both set, or an out-of-range index violate the
    /// classification contract: debug builds assert, release builds return
    /// `Pass` and leave the context untouched.
    pub fn process_indices(&mut self, cho: i32, jung: i32) -> CompositionResult {
        match JamoInput::from_indices(cho, jung) {
            Some(input) => self.process(input),
            None => {
                debug_assert!(
                    cho < 0 && jung < 0,
                    "jamo indices out of contract: cho={cho} jung={jung}"
                );
                if cho >= 0 || jung >= 0 {
                    warn!(cho, jung, "ignoring jamo indices outside the documented range");
                }
                CompositionResult::Pass
            }
        }
    }

    /// Remove the most recently added jamo.
    pub fn backspace(&mut self) -> CompositionResult {
        let (next, result) = undo(self.context);
        debug!(from = ?self.context.state(), to = ?next.state(), "backspace");
        self.context = next;
        result
    }

    /// Commit whatever is composing. `Pass` when nothing is.
    pub fn flush(&mut self) -> CompositionResult {
        match self.context.display() {
            Some(ch) => {
                self.reset();
                CompositionResult::CommitFlush(Committed::one(ch))
            }
            None => CompositionResult::Pass,
        }
    }

    /// Drop the composition without committing anything.
    pub fn reset(&mut self) {
        self.context = CompositionContext::Empty;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cons(cho: Choseong) -> JamoInput {
        JamoInput::Consonant(cho)
    }

    fn vowel(jung: Jungseong) -> JamoInput {
        JamoInput::Vowel(jung)
    }

    #[test]
    fn test_from_parts_rejects_impossible_slots() {
        assert_eq!(CompositionContext::from_parts(None, Some(Jungseong::A), None), None);
        assert_eq!(CompositionContext::from_parts(None, None, Some(Jongseong::G)), None);
        assert_eq!(
            CompositionContext::from_parts(Some(Choseong::G), Some(Jungseong::A), Some(Jongseong::GS))
                .map(|c| c.state()),
            Some(CompositionState::Jongseong)
        );
    }

    #[test]
    fn test_accessors_match_state() {
        let ctx = CompositionContext::Initial {
            cho: Choseong::G,
            cluster: Some(Jongseong::GS),
        };
        assert_eq!(ctx.state(), CompositionState::Choseong);
        assert_eq!(ctx.cho(), Some(Choseong::G));
        assert_eq!(ctx.jung(), None);
        assert_eq!(ctx.jong(), Some(Jongseong::GS));
        assert_eq!(ctx.display(), Some('ㄳ'));
        assert_eq!(CompositionContext::Empty.display(), None);
    }

    #[test]
    fn test_transition_is_pure() {
        let ctx = CompositionContext::Medial {
            cho: Choseong::G,
            jung: Jungseong::A,
        };
        let first = transition(ctx, cons(Choseong::N));
        let second = transition(ctx, cons(Choseong::N));
        assert_eq!(first, second);
    }

    #[test]
    fn test_simple_syllable() {
        let mut composer = HangulComposer::new();
        assert_eq!(composer.process(cons(Choseong::H)), CompositionResult::Composing('ㅎ'));
        assert_eq!(composer.process(vowel(Jungseong::A)), CompositionResult::Composing('하'));
        assert_eq!(composer.process(cons(Choseong::N)), CompositionResult::Composing('한'));
        assert_eq!(composer.state(), CompositionState::Jongseong);
    }

    #[test]
    fn test_double_consonant_final_then_vowel() {
        let mut composer = HangulComposer::new();
        composer.process(cons(Choseong::D));
        composer.process(vowel(Jungseong::A));
        composer.process(cons(Choseong::R));
        assert_eq!(composer.process(cons(Choseong::G)), CompositionResult::Composing('닭'));
        assert_eq!(
            composer.process(vowel(Jungseong::I)),
            CompositionResult::Commit {
                committed: Committed::one('달'),
                display: '기',
            }
        );
    }

    #[test]
    fn test_process_indices_rejects_non_jamo() {
        let mut composer = HangulComposer::new();
        assert_eq!(composer.process_indices(-1, -1), CompositionResult::Pass);
        assert!(composer.is_empty());
    }

    #[test]
    fn test_flush_medial() {
        let mut composer = HangulComposer::with_context(CompositionContext::Medial {
            cho: Choseong::N,
            jung: Jungseong::A,
        });
        assert_eq!(composer.flush(), CompositionResult::CommitFlush(Committed::one('나')));
        assert!(composer.is_empty());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut composer = HangulComposer::new();
        composer.process(cons(Choseong::G));
        composer.process(vowel(Jungseong::A));
        composer.reset();
        assert_eq!(*composer.context(), CompositionContext::Empty);
        assert_eq!(composer.context().cho(), None);
        assert_eq!(composer.context().jung(), None);
        assert_eq!(composer.context().jong(), None);
    }
}
