use crate::animation::style::StyleMap;
use crate::foundation::core::{ElementId, Easing, Millis};
use crate::playback::host::{Clock, Container, Ticket, Tweener, Wakeup};
use crate::playback::player::TextGroup;
use std::cmp::{Ordering, Reverse};
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap};

/// What happened on a [`MemoryStage`], in the order it happened.
#[derive(Clone, Debug, PartialEq)]
pub enum StageEventKind {
    /// Container shown (`true`) or hidden (`false`).
    Visibility(bool),
    /// Styles applied to the container.
    ContainerStyled(StyleMap),
    /// Styles applied instantly to an element.
    ElementStyled {
        /// Target element.
        element: ElementId,
        /// Applied properties.
        style: StyleMap,
    },
    /// Offset timer armed.
    TimerArmed {
        /// Element waiting on the timer.
        element: ElementId,
        /// Requested delay.
        delay: Millis,
    },
    /// Offset timer fired.
    TimerFired(ElementId),
    /// Tween started.
    TweenStarted {
        /// Animated element.
        element: ElementId,
        /// Step being played.
        step: Option<u32>,
        /// Requested duration.
        duration: Millis,
        /// Requested easing.
        easing: Easing,
    },
    /// Tween completion delivered; `cancelled` when it was cut short by a stop.
    TweenFinished {
        /// Animated element.
        element: ElementId,
        /// Step that was playing.
        step: Option<u32>,
        /// Whether the tween was stopped before reaching its targets.
        cancelled: bool,
    },
}

/// One logged stage event with its virtual timestamp.
#[derive(Clone, Debug, PartialEq)]
pub struct StageEvent {
    /// Virtual time of the event.
    pub at: Millis,
    /// What happened.
    pub kind: StageEventKind,
}

#[derive(Debug)]
struct Queued {
    at: Millis,
    seq: u64,
    wakeup: Wakeup,
    cancelled: bool,
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Queued {}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Same-time events are delivered in the order they were queued.
impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        self.at
            .0
            .total_cmp(&other.at.0)
            .then(self.seq.cmp(&other.seq))
    }
}

#[derive(Debug)]
struct InFlight {
    seq: u64,
    ticket: Ticket,
    targets: StyleMap,
}

/// Deterministic in-memory host: a container, a tween primitive and a virtual clock.
///
/// Tweens jump to their targets when they complete; stopped tweens report completion at the
/// current virtual time and leave styles where they were. Useful for tests, previews and
/// computing timelines without a UI.
#[derive(Debug, Default)]
pub struct MemoryStage {
    now: Millis,
    visible: bool,
    container_style: StyleMap,
    element_styles: Vec<StyleMap>,
    queue: BinaryHeap<Reverse<Queued>>,
    next_seq: u64,
    in_flight: BTreeMap<ElementId, InFlight>,
    superseded: BTreeSet<u64>,
    events: Vec<StageEvent>,
}

impl MemoryStage {
    /// Stage with `element_count` bindable children.
    pub fn new(element_count: usize) -> Self {
        Self {
            element_styles: vec![StyleMap::new(); element_count],
            ..Self::default()
        }
    }

    /// Current virtual time.
    pub fn now(&self) -> Millis {
        self.now
    }

    /// Whether the container is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Accumulated container style.
    pub fn container_style(&self) -> &StyleMap {
        &self.container_style
    }

    /// Accumulated style of `element`.
    pub fn element_style(&self, element: ElementId) -> Option<&StyleMap> {
        self.element_styles.get(element.0)
    }

    /// Everything that happened so far.
    pub fn events(&self) -> &[StageEvent] {
        &self.events
    }

    /// Return `true` when no timer or tween completion is outstanding.
    pub fn is_quiet(&self) -> bool {
        self.queue.len() == self.superseded.len()
    }

    /// Deliver every event due at or before `until` to `group`, then move the clock to `until`.
    ///
    /// Returns the number of delivered events.
    pub fn run_until(&mut self, group: &mut TextGroup, until: Millis) -> usize {
        let mut delivered = 0;
        while let Some(wakeup) = self.pop_due(until) {
            group.handle(wakeup, self);
            delivered += 1;
        }
        if until > self.now {
            self.now = until;
        }
        delivered
    }

    /// Advance the clock by `by`, delivering due events.
    pub fn advance(&mut self, group: &mut TextGroup, by: Millis) -> usize {
        let until = self.now + by;
        self.run_until(group, until)
    }

    /// Deliver events until the queue drains or `max_events` were delivered.
    ///
    /// An unbounded repeat never drains, so the cap is mandatory.
    pub fn run_until_idle(&mut self, group: &mut TextGroup, max_events: usize) -> usize {
        let mut delivered = 0;
        while delivered < max_events {
            let Some(wakeup) = self.pop_due(Millis(f64::INFINITY)) else {
                break;
            };
            group.handle(wakeup, self);
            delivered += 1;
        }
        delivered
    }

    fn push(&mut self, at: Millis, wakeup: Wakeup, cancelled: bool) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Reverse(Queued {
            at,
            seq,
            wakeup,
            cancelled,
        }));
        seq
    }

    fn log(&mut self, kind: StageEventKind) {
        self.events.push(StageEvent { at: self.now, kind });
    }

    fn pop_due(&mut self, until: Millis) -> Option<Wakeup> {
        loop {
            let Reverse(next) = self.queue.peek()?;
            if next.at > until {
                return None;
            }
            let Reverse(q) = self.queue.pop()?;
            if self.superseded.remove(&q.seq) {
                continue;
            }
            if q.at > self.now {
                self.now = q.at;
            }

            match q.wakeup {
                Wakeup::OffsetElapsed(t) => self.log(StageEventKind::TimerFired(t.element)),
                Wakeup::TweenFinished(t) => {
                    if !q.cancelled {
                        self.land(t.element, q.seq);
                    }
                    self.log(StageEventKind::TweenFinished {
                        element: t.element,
                        step: t.step,
                        cancelled: q.cancelled,
                    });
                }
            }
            return Some(q.wakeup);
        }
    }

    /// Apply a completed tween's targets.
    fn land(&mut self, element: ElementId, seq: u64) {
        let Entry::Occupied(entry) = self.in_flight.entry(element) else {
            return;
        };
        if entry.get().seq != seq {
            return;
        }
        let f = entry.remove();
        apply(&mut self.element_styles, element, &f.targets);
    }
}

fn apply(styles: &mut [StyleMap], element: ElementId, style: &StyleMap) {
    if let Some(current) = styles.get_mut(element.0) {
        current.extend(style.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
}

impl Container for MemoryStage {
    fn element_count(&self) -> usize {
        self.element_styles.len()
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.log(StageEventKind::Visibility(visible));
    }

    fn style_container(&mut self, style: &StyleMap) {
        self.container_style
            .extend(style.iter().map(|(k, v)| (k.clone(), v.clone())));
        self.log(StageEventKind::ContainerStyled(style.clone()));
    }

    fn style_element(&mut self, element: ElementId, style: &StyleMap) {
        apply(&mut self.element_styles, element, style);
        self.log(StageEventKind::ElementStyled {
            element,
            style: style.clone(),
        });
    }
}

impl Tweener for MemoryStage {
    fn tween(&mut self, ticket: Ticket, targets: &StyleMap, duration: Millis, easing: &Easing) {
        let seq = self.push(self.now + duration, Wakeup::TweenFinished(ticket), false);
        let replaced = self.in_flight.insert(
            ticket.element,
            InFlight {
                seq,
                ticket,
                targets: targets.clone(),
            },
        );
        if let Some(old) = replaced {
            self.superseded.insert(old.seq);
        }
        self.log(StageEventKind::TweenStarted {
            element: ticket.element,
            step: ticket.step,
            duration,
            easing: easing.clone(),
        });
    }

    fn stop(&mut self, element: ElementId) {
        let Some(f) = self.in_flight.remove(&element) else {
            return;
        };
        self.superseded.insert(f.seq);
        self.push(self.now, Wakeup::TweenFinished(f.ticket), true);
    }
}

impl Clock for MemoryStage {
    fn schedule(&mut self, ticket: Ticket, delay: Millis) {
        self.push(self.now + delay, Wakeup::OffsetElapsed(ticket), false);
        self.log(StageEventKind::TimerArmed {
            element: ticket.element,
            delay,
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/memory.rs"]
mod tests;
