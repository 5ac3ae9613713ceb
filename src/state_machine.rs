//! Interview dialogue state machine
//!
//! Elm-style: a pure `transition(state, context, event)` returning the new
//! state plus the effects the runtime must carry out.

mod effect;
pub mod event;
pub(crate) mod script;
pub mod state;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use effect::Effect;
pub use event::Event;
pub use state::{SessionContext, SessionState};
pub use transition::{transition, TransitionError};
