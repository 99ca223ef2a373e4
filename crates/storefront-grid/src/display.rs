//! Loading/error/ready display region.
//!
//! The grid derives nothing here: all three flags come from the host,
//! and only precedence is decided locally.

/// Host-supplied fetch status flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayFlags {
    pub is_loading: bool,
    pub is_refetching: bool,
    pub is_error: bool,
}

/// What the table body region shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    Loading,
    Error,
    Ready,
}

impl DisplayFlags {
    /// Precedence: loading/refetching over error, error over rows.
    /// Error shows whenever `is_error` is set and the grid is not
    /// currently loading; it does not require both loading flags.
    pub fn state(&self) -> DisplayState {
        if self.is_loading || self.is_refetching {
            DisplayState::Loading
        } else if self.is_error {
            DisplayState::Error
        } else {
            DisplayState::Ready
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_takes_priority_over_error() {
        let flags = DisplayFlags {
            is_loading: true,
            is_refetching: false,
            is_error: true,
        };
        assert_eq!(flags.state(), DisplayState::Loading);
    }

    #[test]
    fn refetching_alone_shows_loading() {
        let flags = DisplayFlags {
            is_refetching: true,
            ..Default::default()
        };
        assert_eq!(flags.state(), DisplayState::Loading);
    }

    #[test]
    fn error_shows_without_any_loading_flag() {
        let flags = DisplayFlags {
            is_error: true,
            ..Default::default()
        };
        assert_eq!(flags.state(), DisplayState::Error);
    }

    #[test]
    fn default_is_ready() {
        assert_eq!(DisplayFlags::default().state(), DisplayState::Ready);
    }
}
