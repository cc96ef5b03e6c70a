//! pagesim - A page replacement simulator with pluggable eviction policies.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │        Input (input)  +  Settings (common::config)       │   │
//! │  │    reference string, frame count, policy, display label   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                 Simulation (sim/)                        │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │  Replacers: FIFO | LRU | Optimal | Second Chance │   │   │
//! │  │   │              | LFU | MFU                          │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │    Simulator + ResidentSet + StepRecord + Statistics     │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                Rendering (render/)                       │   │
//! │  │        Renderer trait + TextRenderer (paced output)      │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, Error, config)
//! - [`input`] - Parsing of reference strings and frame counts
//! - [`sim`] - Simulator and eviction policies
//! - [`render`] - Step and summary presentation
//!
//! # Quick Start
//! ```
//! use pagesim::input::parse_references;
//! use pagesim::{SimulationInput, Simulator};
//!
//! let refs = parse_references("1 2 3 4 1 2 5 1 2 3").unwrap();
//! let log = Simulator::new(SimulationInput::new(3, refs)).unwrap().run();
//!
//! assert_eq!(log.stats.faults, 8);
//! assert_eq!(log.step_lines()[3], "Entered: 4, Removed: 1");
//! ```

pub mod common;
pub mod input;
pub mod render;
pub mod sim;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, PageId, Result};

pub use render::{NullRenderer, Renderer, TextRenderer};
pub use sim::replacer::{Policy, Replacer};
pub use sim::{SimulationInput, SimulationLog, SimulationStats, Simulator, StepRecord};
