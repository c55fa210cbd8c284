//! The navigation stack.
//!
//! A last-in-first-out history of visited screens. The stack is never
//! empty and its bottom is always [`Screen::Home`]; both invariants are
//! enforced here, at the stack's only mutation points. No two adjacent
//! entries are ever equal: pushing a duplicate of the current top (a
//! double-tap on a card that is already open) is a no-op.

use parking_lot::RwLock;

use widget_atlas_core::Signal;

use super::screen::Screen;

/// Ordered history of visited screens supporting back-navigation.
///
/// Append and remove happen only at the end. The stack is owned by the
/// application state object; nothing else mutates it.
pub struct NavigationStack {
    entries: RwLock<Vec<Screen>>,
    /// Emitted with the new top after every completed navigation.
    pub current_changed: Signal<Screen>,
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationStack {
    /// Creates a stack containing only [`Screen::Home`].
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(vec![Screen::Home]),
            current_changed: Signal::new(),
        }
    }

    /// The currently visible screen.
    ///
    /// Always defined: the stack holds at least the Home floor.
    pub fn top(&self) -> Screen {
        self.entries
            .read()
            .last()
            .cloned()
            .unwrap_or(Screen::Home)
    }

    /// Number of entries on the stack.
    pub fn depth(&self) -> usize {
        self.entries.read().len()
    }

    /// A read-only snapshot of the stack, bottom first.
    pub fn entries(&self) -> Vec<Screen> {
        self.entries.read().clone()
    }

    /// Navigates to `screen`.
    ///
    /// Pushing a screen equal to the current top is a no-op; otherwise the
    /// screen is appended and becomes the top.
    pub fn push(&self, screen: Screen) {
        {
            let mut entries = self.entries.write();
            if entries.last() == Some(&screen) {
                tracing::trace!(
                    target: "widget_atlas::nav",
                    screen = %screen,
                    "push ignored, already on top"
                );
                return;
            }
            entries.push(screen.clone());
            tracing::debug!(
                target: "widget_atlas::nav",
                screen = %screen,
                depth = entries.len(),
                "pushed"
            );
        }
        self.current_changed.emit(screen);
    }

    /// Navigates back.
    ///
    /// Removes the top and returns `true` when more than one entry is on
    /// the stack. On the single-entry stack the removal is refused and
    /// `false` is returned: Home is the floor, there is nowhere to go back
    /// to.
    pub fn pop(&self) -> bool {
        let new_top = {
            let mut entries = self.entries.write();
            if entries.len() <= 1 {
                tracing::trace!(target: "widget_atlas::nav", "pop refused on floor");
                return false;
            }
            entries.pop();
            tracing::debug!(target: "widget_atlas::nav", depth = entries.len(), "popped");
            entries.last().cloned()
        };
        if let Some(screen) = new_top {
            self.current_changed.emit(screen);
        }
        true
    }

    /// Pops everything above the Home floor.
    ///
    /// Returns `true` if any navigation occurred. Emits `current_changed`
    /// once, not per removed entry.
    pub fn pop_to_root(&self) -> bool {
        let popped = {
            let mut entries = self.entries.write();
            if entries.len() <= 1 {
                return false;
            }
            entries.truncate(1);
            tracing::debug!(target: "widget_atlas::nav", "popped to root");
            true
        };
        if popped {
            self.current_changed.emit(Screen::Home);
        }
        popped
    }

    /// Formats the stack for log output, bottom first.
    pub fn debug_dump(&self) -> String {
        let entries = self.entries.read();
        let mut out = format!("NavigationStack (depth {})\n", entries.len());
        let last = entries.len() - 1;
        for (level, screen) in entries.iter().enumerate() {
            out.push_str(&"  ".repeat(level));
            out.push_str("└─ ");
            out.push_str(&screen.to_string());
            if level == last {
                out.push_str("   ← current");
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::WidgetCategory;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_initial_stack_is_home() {
        let stack = NavigationStack::new();
        assert_eq!(stack.top(), Screen::Home);
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_push_appends_and_changes_top() {
        let stack = NavigationStack::new();
        stack.push(Screen::Favorites);

        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.top(), Screen::Favorites);
        assert_eq!(stack.entries(), vec![Screen::Home, Screen::Favorites]);
    }

    #[test]
    fn test_push_duplicate_top_is_noop() {
        let stack = NavigationStack::new();
        stack.push(Screen::Home); // already on top
        assert_eq!(stack.depth(), 1);

        stack.push(Screen::WidgetDetail("Text".into()));
        stack.push(Screen::WidgetDetail("Text".into())); // double tap
        assert_eq!(stack.depth(), 2);

        // A different payload is a different screen.
        stack.push(Screen::WidgetDetail("Button".into()));
        assert_eq!(stack.depth(), 3);
    }

    #[test]
    fn test_no_two_adjacent_entries_equal() {
        let stack = NavigationStack::new();
        stack.push(Screen::Favorites);
        stack.push(Screen::Home); // distinct from Favorites, allowed
        stack.push(Screen::Home); // duplicate of top, ignored

        let entries = stack.entries();
        for pair in entries.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn test_pop_on_floor_is_refused() {
        let stack = NavigationStack::new();
        assert!(!stack.pop());
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.top(), Screen::Home);
    }

    #[test]
    fn test_pop_returns_to_previous_screen() {
        let stack = NavigationStack::new();
        stack.push(Screen::Category(WidgetCategory::Input));
        stack.push(Screen::WidgetDetail("Slider".into()));

        assert!(stack.pop());
        assert_eq!(stack.top(), Screen::Category(WidgetCategory::Input));
        assert!(stack.pop());
        assert_eq!(stack.top(), Screen::Home);
        assert!(!stack.pop());
    }

    #[test]
    fn test_current_changed_emissions() {
        let stack = NavigationStack::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let recv = seen.clone();
        stack.current_changed.connect(move |screen: &Screen| {
            recv.lock().push(screen.clone());
        });

        stack.push(Screen::Favorites);
        stack.push(Screen::Favorites); // no-op, no emission
        assert!(stack.pop());
        assert!(!stack.pop()); // refused, no emission

        let seen = seen.lock();
        assert_eq!(*seen, vec![Screen::Favorites, Screen::Home]);
    }

    #[test]
    fn test_pop_to_root() {
        let stack = NavigationStack::new();
        stack.push(Screen::ExamplesGallery);
        stack.push(Screen::ExampleDetail("TabBar".into()));

        let seen = Arc::new(Mutex::new(Vec::new()));
        let recv = seen.clone();
        stack.current_changed.connect(move |screen: &Screen| {
            recv.lock().push(screen.clone());
        });

        assert!(stack.pop_to_root());
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.top(), Screen::Home);
        assert_eq!(*seen.lock(), vec![Screen::Home]); // one emission, not two

        assert!(!stack.pop_to_root()); // already home
        assert_eq!(seen.lock().len(), 1);
    }

    #[test]
    fn test_debug_dump_marks_current() {
        let stack = NavigationStack::new();
        stack.push(Screen::Favorites);

        let dump = stack.debug_dump();
        assert!(dump.contains("depth 2"));
        assert!(dump.contains("Home"));
        assert!(dump.contains("Favorites   ← current"));
    }
}
