//! Interactive terminal dashboard built on ratatui.
//!
//! # Architecture
//!
//! [`SuiteApp`] owns the dataset, the active view and one local state per
//! view. Key handling in `events` maps keys to `SuiteApp` methods, which
//! dispatch filter and navigation keys to the active view through the
//! [`ViewState`] trait. Rendering (`ui::render` and the per-view functions
//! in `views`) only reads state.
//!
//! The reporting view's Generate control runs a simulated generation on a
//! timer thread (see [`GenerateAction`]); completion is picked up on the UI
//! thread during ticks.

mod app;
mod app_states;
mod badges;
pub(crate) mod constants;
mod events;
pub mod state;
mod task;
pub mod theme;
pub mod traits;
mod ui;
pub mod viewmodel;
pub(crate) mod views;
pub(crate) mod widgets;

// Theme exports
pub use theme::{
    colors, current_theme_name, set_theme, toggle_theme, ColorScheme, FooterHints, Styles, Theme,
    Tone,
};

pub use badges::{badge, score_tone, Toned};

// Trait exports for view state machines
pub use traits::ViewState;

// Shared state exports
pub use state::{ListNavigation, ListState};

pub use viewmodel::{CycleFilter, FilterState, StatusMessage};

pub use app::{AppSettings, SuiteApp, TabStates};
pub use app_states::{AmlState, AuditState, EkycState, FraudState, ReportingState};
pub use events::{handle_key_event, handle_mouse_event, Event, EventHandler};
pub use task::{CancellationToken, GenerateAction, GenerationNotice, ReportGeneration};
pub use ui::{render, run_tui};
