//! VoiceBrief - voice-to-briefing CLI
//!
//! This crate transcribes audio recordings with a hosted speech-to-text
//! model and turns the (optionally edited) transcript into a structured
//! briefing — meeting minutes, a daily report, study notes, or a news
//! summary — with a hosted chat model.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: value objects, session state, the failure taxonomy
//! - **Application**: use cases and port interfaces (traits)
//! - **Infrastructure**: adapter implementations (SiliconFlow API, config)
//! - **CLI**: command-line interface, argument parsing, and presentation

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
