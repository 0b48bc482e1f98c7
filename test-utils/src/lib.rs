//! Gatekeeper Test Utils
//!
//! Shared helpers for the bot's unit tests. The bot's services talk to Discord through
//! traits and are tested against in-crate fakes, but code that inspects Serenity models
//! directly (permission guards, ticket channel scans) needs real Serenity structs. This
//! crate builds them from JSON the way Discord's API would send them.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_member, create_test_text_channel};
//!
//! let admin = create_test_member(100, 1, &[], Some(0x8));
//! let ticket = create_test_text_channel(800, 100, Some(700), Some("10"));
//! ```

pub mod serenity;
