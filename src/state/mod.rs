//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Stores are provided as `RwSignal` contexts by the app root and written
//! only by the surrounding wiring; pages and components read them.

pub mod chats;
