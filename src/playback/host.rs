use crate::animation::style::StyleMap;
use crate::foundation::core::{ElementId, Easing, Millis};

/// Identifies one suspension (offset timer or tween) of one element in one play cycle.
///
/// Hosts hand the ticket back unchanged in the matching [`Wakeup`]. Tickets from an earlier
/// cycle are ignored by the player, so late callbacks after a stop or restart are harmless.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ticket {
    /// Element the suspension belongs to.
    pub element: ElementId,
    /// Play cycle that issued the ticket.
    pub cycle: u64,
    /// Step being tweened; `None` for the offset timer.
    pub step: Option<u32>,
}

/// Event delivered back to the player by its host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wakeup {
    /// An element's start offset has elapsed.
    OffsetElapsed(Ticket),
    /// A tween finished, normally or because it was stopped.
    TweenFinished(Ticket),
}

impl Wakeup {
    /// Ticket carried by the event.
    pub fn ticket(&self) -> Ticket {
        match self {
            Self::OffsetElapsed(t) | Self::TweenFinished(t) => *t,
        }
    }
}

/// The wrapping element and its children.
pub trait Container {
    /// Number of child elements available for binding.
    fn element_count(&self) -> usize;
    /// Show or hide the container.
    fn set_visible(&mut self, visible: bool);
    /// Apply styles to the container itself.
    fn style_container(&mut self, style: &StyleMap);
    /// Apply styles to one child instantly.
    fn style_element(&mut self, element: ElementId, style: &StyleMap);
}

/// Property-tweening primitive.
///
/// Contract: every `tween` produces exactly one [`Wakeup::TweenFinished`] carrying its ticket,
/// delivered asynchronously after `duration`, or promptly after `stop` for that element.
pub trait Tweener {
    /// Animate `element` toward `targets`.
    fn tween(&mut self, ticket: Ticket, targets: &StyleMap, duration: Millis, easing: &Easing);
    /// Abort any in-flight tween on `element`. Must be a no-op when nothing is running.
    fn stop(&mut self, element: ElementId);
}

/// One-shot timers.
pub trait Clock {
    /// Deliver [`Wakeup::OffsetElapsed`] with `ticket` after `delay`.
    fn schedule(&mut self, ticket: Ticket, delay: Millis);
}

/// Everything a player needs from its environment.
pub trait Host: Container + Tweener + Clock {}

impl<T> Host for T where T: Container + Tweener + Clock + ?Sized {}
