pub mod session_state;
pub mod slide;
