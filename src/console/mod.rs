//! Console front end for the task manager.
//!
//! A [`Profile`] picks the [`Announcer`] variant at startup, and
//! [`TaskWalkthrough`] exercises the task service end to end, writing a
//! human-readable transcript.

mod announcer;
mod walkthrough;

pub use announcer::{
    Announcer, DevAnnouncer, ParseProfileError, ProdAnnouncer, Profile, announcer_for,
};
pub use walkthrough::{TaskWalkthrough, WalkthroughError};
