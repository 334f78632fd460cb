//! The Generation Screen: prompt in, story out, comic on request.
//!
//! [`state::ScreenState`] is a pure state machine. Its transitions hand back
//! a [`state::Command`] describing the backend call to make, which
//! [`generation_screen::GenerationScreen`] executes through
//! [`client::ScreenClient`] before feeding the outcome back in.

pub mod client;
pub mod generation_screen;
pub mod state;
