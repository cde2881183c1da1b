//! Results view for recommendation lists.
//!
//! The view owns its open/closed state explicitly: presenting while a list
//! is already open warns and does nothing, and closing is the only way back
//! to `Idle`. At most one list is ever rendered at a time.

use tabled::Table;

use crate::{
    success,
    types::{Track, TrackTableRow},
    warning,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Open,
}

#[derive(Debug, Default)]
pub struct ResultsView {
    state: ViewState,
}

impl ResultsView {
    pub fn new() -> Self {
        Self {
            state: ViewState::Idle,
        }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == ViewState::Open
    }

    /// Renders the track list and opens the view.
    ///
    /// Tracks are shown in the order the API returned them, numbered from 1,
    /// with the primary artist next to each name. Returns `false` without
    /// rendering anything when a list is already open.
    pub fn present(&mut self, tracks: &[Track]) -> bool {
        if self.state == ViewState::Open {
            warning!("Close the existing list before generating a new one.");
            return false;
        }

        success!("Here's your list of recommendations!");
        let rows: Vec<TrackTableRow> = tracks
            .iter()
            .enumerate()
            .map(|(i, track)| TrackTableRow {
                position: i + 1,
                name: track.name.clone(),
                artist: track.primary_artist(),
            })
            .collect();
        println!("{}", Table::new(rows));

        self.state = ViewState::Open;
        true
    }

    /// Closes the view, allowing the next presentation.
    pub fn close(&mut self) {
        self.state = ViewState::Idle;
    }
}
