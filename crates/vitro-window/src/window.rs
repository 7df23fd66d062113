//! Window - the top of the synthetic object graph
//!
//! Aggregates the document, location, history, navigator, storage
//! areas, timers and console into the single object hosted code
//! expects to find as its global.

use crate::console::Console;
use crate::history::History;
use crate::location::{Location, LocationError};
use crate::navigator::Navigator;
use crate::storage::Storage;
use crate::timers::Timers;
use tracing::info;
use vitro_dom::Document;

/// Synthetic window
pub struct Window {
    pub document: Document,
    pub location: Location,
    pub history: History,
    pub navigator: Navigator,
    pub local_storage: Storage,
    pub session_storage: Storage,
    pub timers: Timers,
    pub console: Console,
    inner_width: u32,
    inner_height: u32,
    device_pixel_ratio: f64,
}

impl Window {
    /// Build a window around a fresh document at `url`. Both storage
    /// areas start in-memory; hosts wanting a persistent localStorage
    /// swap in `Storage::local(path)`.
    pub fn new(url: &str) -> Result<Self, LocationError> {
        let location = Location::new(url)?;
        Ok(Self {
            document: Document::new(url),
            history: History::new(url),
            navigator: Navigator::default(),
            local_storage: Storage::session(),
            session_storage: Storage::session(),
            timers: Timers::new(),
            console: Console::new(),
            location,
            inner_width: 1280,
            inner_height: 720,
            device_pixel_ratio: 1.0,
        })
    }

    /// Viewport width constant
    pub fn inner_width(&self) -> u32 {
        self.inner_width
    }

    /// Viewport height constant
    pub fn inner_height(&self) -> u32 {
        self.inner_height
    }

    /// Always 1.0
    pub fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }

    /// Navigate: update location, record a history entry, and swap in
    /// a fresh document for the new URL.
    pub fn navigate(&mut self, url: &str) -> Result<(), LocationError> {
        self.location.assign(url)?;
        let href = self.location.href();
        self.history.push_state(None, String::new(), href.clone());
        self.document = Document::new(&href);
        Ok(())
    }

    /// Logging stub
    pub fn alert(&self, message: &str) {
        info!("[alert] {message}");
    }

    /// Logging stub; the synthetic user always agrees
    pub fn confirm(&self, message: &str) -> bool {
        info!("[confirm] {message}");
        true
    }

    /// Logging stub; the synthetic user never types anything
    pub fn prompt(&self, message: &str) -> Option<String> {
        info!("[prompt] {message}");
        None
    }
}
