//! Frame-synchronous update path.
//!
//! Hosts describe prop changes as a [`GradientUpdate`]: every field is a
//! three-state [`Patch`] so "not mentioned" stays distinct from "explicitly
//! cleared". Updates reach an instance either directly
//! ([`GradientInstance::apply`](crate::instance::GradientInstance::apply)) on
//! the owning thread, or from any thread through an [`UpdateSender`] feeding a
//! single-slot [`Mailbox`]. The mailbox merges field-wise (last write wins)
//! and is drained before every direct apply, layout pass and resolve, so a
//! value pushed before a frame's resolve is always observed by that frame and
//! never overrides a later direct apply.

mod mailbox;
mod message;
mod patch;

pub use mailbox::{Mailbox, MailboxStats, SendError, UpdateSender};
pub use message::GradientUpdate;
pub use patch::Patch;
