//! Briefing generation adapters

mod siliconflow;

pub use siliconflow::SiliconFlowGenerator;
