//! Property system for Widget Atlas.
//!
//! This module provides reactive properties with change detection and
//! computed bindings. Properties are the data backbone of the signal/slot
//! system - when a property changes, the owning component emits a signal to
//! notify interested parties.
//!
//! # Property Types
//!
//! - **Property<T>**: A value cell with change detection
//! - **ReadOnlyProperty**: A read-only view over a property
//! - **Binding<T>**: A computed cell that derives its value from others
//!
//! # Example
//!
//! ```
//! use widget_atlas_core::{Property, Signal};
//!
//! struct SearchBox {
//!     query: Property<String>,
//!     query_changed: Signal<String>,
//! }
//!
//! impl SearchBox {
//!     fn new() -> Self {
//!         Self {
//!             query: Property::new(String::new()),
//!             query_changed: Signal::new(),
//!         }
//!     }
//!
//!     fn set_query(&self, text: String) {
//!         if self.query.set(text.clone()) {
//!             self.query_changed.emit(text);
//!         }
//!     }
//! }
//! ```

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;

/// A reactive property that tracks changes.
///
/// `Property<T>` wraps a value and provides change detection. When `set()`
/// is called, it compares the new value with the current one and returns
/// whether the value actually changed. This enables efficient change
/// notification: the owner only emits its notify signal when `set()`
/// returns `true`.
///
/// # Example
///
/// ```
/// use widget_atlas_core::Property;
///
/// let prop = Property::new(42);
/// assert_eq!(prop.get(), 42);
///
/// // Setting same value returns false (no change)
/// assert!(!prop.set(42));
///
/// // Setting different value returns true (changed)
/// assert!(prop.set(100));
/// assert_eq!(prop.get(), 100);
/// ```
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get the current value.
    ///
    /// This clones the value. For large types, consider using `with()` instead.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Access the value through a closure without cloning.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.value.read())
    }

    /// Set the value without change notification.
    ///
    /// This is useful during initialization or batch updates where
    /// notifications are deferred.
    pub fn set_silent(&self, value: T) {
        *self.value.write() = value;
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Set the value, returning `true` if the value changed.
    ///
    /// The caller should emit the associated notification signal when this
    /// returns `true`.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            true
        } else {
            false
        }
    }

    /// Set the value, returning the old value if it changed.
    pub fn replace(&self, value: T) -> Option<T> {
        let mut current = self.value.write();
        if *current != value {
            let old = std::mem::replace(&mut *current, value);
            Some(old)
        } else {
            None
        }
    }
}

impl<T: Clone> Clone for Property<T> {
    fn clone(&self) -> Self {
        Self::new(self.get())
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.get())
            .finish()
    }
}

/// A read-only view of a property.
///
/// This provides read access without the ability to modify the underlying
/// value. Useful for exposing properties publicly while keeping the setter
/// private.
pub struct ReadOnlyProperty<'a, T> {
    inner: &'a Property<T>,
}

impl<'a, T: Clone> ReadOnlyProperty<'a, T> {
    /// Create a read-only view of a property.
    pub fn new(property: &'a Property<T>) -> Self {
        Self { inner: property }
    }

    /// Get the current value.
    pub fn get(&self) -> T {
        self.inner.get()
    }

    /// Access the value through a closure.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        self.inner.with(f)
    }
}

/// A computed property that derives its value from a computation.
///
/// `Binding<T>` caches its computed value and only recalculates when
/// explicitly invalidated. This is the dependency-tracked cell used for
/// derived state: invalidate it when any source changes, and the next
/// `get()` recomputes.
///
/// # Example
///
/// ```
/// use widget_atlas_core::{Binding, Property};
/// use std::sync::Arc;
///
/// let count = Arc::new(Property::new(5));
///
/// let count_clone = count.clone();
/// let doubled = Binding::new(move || count_clone.get() * 2);
/// assert_eq!(doubled.get(), 10);
///
/// // After changing a dependency, invalidate to recalculate
/// count.set(7);
/// doubled.invalidate();
/// assert_eq!(doubled.get(), 14);
/// ```
pub struct Binding<T> {
    /// The computation function.
    compute: Box<dyn Fn() -> T + Send + Sync>,
    /// Cached value.
    cached: RwLock<Option<T>>,
    /// Whether the cache needs refreshing.
    dirty: AtomicBool,
}

impl<T: Clone + Send + Sync + 'static> Binding<T> {
    /// Create a new binding with a computation function.
    ///
    /// The function is called lazily when `get()` is first called, and
    /// again after each `invalidate()` call.
    pub fn new<F>(compute: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self {
            compute: Box::new(compute),
            cached: RwLock::new(None),
            dirty: AtomicBool::new(true),
        }
    }

    /// Get the current value, computing it if necessary.
    pub fn get(&self) -> T {
        if self.dirty.load(Ordering::Acquire) || self.cached.read().is_none() {
            let value = (self.compute)();
            *self.cached.write() = Some(value.clone());
            self.dirty.store(false, Ordering::Release);
            value
        } else {
            self.cached.read().clone().unwrap()
        }
    }

    /// Mark the binding as dirty, causing recalculation on next `get()`.
    ///
    /// Call this when any dependency of the binding changes.
    pub fn invalidate(&self) {
        self.dirty.store(true, Ordering::Release);
    }

    /// Check if the binding needs recalculation.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::Acquire)
    }

    /// Force immediate recalculation and return the new value.
    pub fn refresh(&self) -> T {
        self.invalidate();
        self.get()
    }
}

impl<T: Clone + fmt::Debug + Send + Sync + 'static> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("dirty", &self.is_dirty())
            .field("cached", &*self.cached.read())
            .finish()
    }
}
