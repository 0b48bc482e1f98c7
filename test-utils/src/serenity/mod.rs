//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity objects by deserializing JSON, simulating
//! what Discord's API would return. Only the fields the bot reads are customizable;
//! everything else gets a sensible default.
//!
//! # Available Factories
//!
//! - `member::create_test_member` - Guild members as seen on an interaction
//! - `channel::create_test_text_channel` - Guild text channels with parent and topic

pub mod channel;
pub mod member;

pub use channel::create_test_text_channel;
pub use member::create_test_member;
