use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use slab::Slab;

type Listener = Arc<dyn Fn() + Send + Sync>;
type Listeners = Mutex<Slab<Listener>>;

/// A resize notification owned by the host, typically fired for window or container resizes.
///
/// Cloning produces another handle to the same set of listeners.
#[derive(Clone, Default)]
pub struct ResizeSignal {
	listeners: Arc<Listeners>,
}

impl ResizeSignal {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a listener until the returned guard is dropped.
	pub fn subscribe<F>(&self, listener: F) -> ResizeListener
	where
		F: Fn() + Send + Sync + 'static,
	{
		let key = self.listeners.lock().insert(Arc::new(listener));

		ResizeListener {
			listeners: Arc::downgrade(&self.listeners),
			key,
		}
	}

	/// Invoke every registered listener.
	pub fn notify(&self) {
		// Listeners may subscribe or unsubscribe while running.
		let listeners: Vec<Listener> = self.listeners.lock().iter().map(|(_, l)| l.clone()).collect();

		for listener in listeners {
			listener();
		}
	}

	/// The number of registered listeners.
	pub fn len(&self) -> usize {
		self.listeners.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl fmt::Debug for ResizeSignal {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ResizeSignal").field("listeners", &self.len()).finish()
	}
}

/// Keeps a listener registered; dropping it deregisters exactly once.
pub struct ResizeListener {
	listeners: Weak<Listeners>,
	key: usize,
}

impl Drop for ResizeListener {
	fn drop(&mut self) {
		if let Some(listeners) = self.listeners.upgrade() {
			listeners.lock().try_remove(self.key);
		}
	}
}

impl fmt::Debug for ResizeListener {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ResizeListener").field("key", &self.key).finish()
	}
}
