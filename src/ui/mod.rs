//! View functions for the portal page

pub mod footer;
pub mod header;
pub mod results;
pub mod search_bar;
pub mod theme;

/// Side effect of a header/footer link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// Diagnostic only
    Log(&'static str),
    /// Open in the system browser
    External(&'static str),
}
