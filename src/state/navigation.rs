//! Navigation state for managing image file lists and current position.

use log::{debug, warn};
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

/// Direction for navigation through images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Manages the current directory, list of image files, and current index.
#[derive(Debug, Default)]
pub struct NavigationState {
    current_directory: Option<PathBuf>,
    image_files: Vec<OsString>,
    current_index: Option<usize>,
}

impl NavigationState {
    /// Creates a new empty navigation state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the directory context with a fresh listing and positions the
    /// index on `file_name`, or on nothing if the listing does not contain it.
    pub fn replace_listing(&mut self, directory: PathBuf, files: Vec<OsString>, file_name: &OsStr) {
        self.current_index = files.iter().position(|f| f == file_name);
        if self.current_index.is_none() {
            warn!(
                "{:?} is not part of the listing of {}",
                file_name,
                directory.display()
            );
        }
        debug!(
            "Listed {} images in {}",
            files.len(),
            directory.display()
        );
        self.current_directory = Some(directory);
        self.image_files = files;
    }

    /// Index the position would move to, without moving.
    pub fn peek(&self, direction: Direction) -> Option<usize> {
        let index = self.current_index?;
        match direction {
            Direction::Next if index + 1 < self.image_files.len() => Some(index + 1),
            Direction::Previous if index > 0 => Some(index - 1),
            _ => None,
        }
    }

    /// Moves one step in `direction`. Returns the new index, or `None` at
    /// either end of the list; there is no wraparound.
    pub fn step(&mut self, direction: Direction) -> Option<usize> {
        let Some(new_index) = self.peek(direction) else {
            debug!("No {:?} image available", direction);
            return None;
        };
        self.current_index = Some(new_index);
        Some(new_index)
    }

    /// Full path of the image at `index`.
    pub fn path_at(&self, index: usize) -> Option<PathBuf> {
        let dir = self.current_directory.as_ref()?;
        self.image_files.get(index).map(|name| dir.join(name))
    }

    /// Returns the current file path, if the index points into the list.
    #[cfg(test)]
    pub fn current_path(&self) -> Option<PathBuf> {
        self.path_at(self.current_index?)
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    pub fn image_count(&self) -> usize {
        self.image_files.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(names: &[&str]) -> Vec<OsString> {
        names.iter().map(OsString::from).collect()
    }

    fn state_at(names: &[&str], selected: &str) -> NavigationState {
        let mut state = NavigationState::new();
        state.replace_listing(
            PathBuf::from("/photos"),
            listing(names),
            OsStr::new(selected),
        );
        state
    }

    #[test]
    fn index_matches_position_in_listing() {
        let state = state_at(&["a.jpg", "b.jpg", "c.png"], "b.jpg");
        assert_eq!(state.current_index(), Some(1));
        assert_eq!(state.current_path(), Some(PathBuf::from("/photos/b.jpg")));
    }

    #[test]
    fn missing_file_leaves_no_index() {
        let state = state_at(&["a.jpg"], "z.jpg");
        assert_eq!(state.current_index(), None);
        assert_eq!(state.current_path(), None);
        assert_eq!(state.image_count(), 1);
    }

    #[test]
    fn next_stops_at_last_image() {
        let mut state = state_at(&["a.jpg", "b.jpg"], "a.jpg");
        assert_eq!(state.step(Direction::Next), Some(1));
        assert_eq!(state.step(Direction::Next), None);
        assert_eq!(state.current_index(), Some(1));
    }

    #[test]
    fn previous_stops_at_first_image() {
        let mut state = state_at(&["a.jpg", "b.jpg"], "b.jpg");
        assert_eq!(state.step(Direction::Previous), Some(0));
        assert_eq!(state.step(Direction::Previous), None);
        assert_eq!(state.current_index(), Some(0));
    }

    #[test]
    fn no_movement_without_index() {
        let mut state = NavigationState::new();
        assert_eq!(state.step(Direction::Next), None);
        assert_eq!(state.step(Direction::Previous), None);
    }

    #[test]
    fn replacing_listing_resets_position() {
        let mut state = state_at(&["a.jpg", "b.jpg", "c.jpg"], "c.jpg");
        state.replace_listing(
            PathBuf::from("/other"),
            listing(&["x.png", "y.png"]),
            OsStr::new("x.png"),
        );
        assert_eq!(state.current_index(), Some(0));
        assert_eq!(state.current_path(), Some(PathBuf::from("/other/x.png")));
        assert_eq!(state.peek(Direction::Next), Some(1));
    }
}
