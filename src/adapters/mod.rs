//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements     | Connects to                    |
//! |-------------|----------------|--------------------------------|
//! | `document`  | HistorySource  | JSON export of telemetry store |
//! | `memory`    | HistorySource  | In-memory simulation           |
//! | `offline`   | NarrativePort  | Nothing (always unavailable)   |
//! | `log_sink`  | EventSink      | `log` facade                   |

pub mod document;
pub mod log_sink;
pub mod memory;
pub mod offline;
