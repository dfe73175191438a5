use std::{
	cell::RefCell,
	collections::BTreeMap,
	rc::{Rc, Weak},
};

type Listener<T> = Rc<dyn Fn(&T)>;

struct Registry<T> {
	next_id: usize,
	listeners: BTreeMap<usize, Listener<T>>,
}

/// Notifies every subscriber of a value, e.g. a changed display language.
/// Subscriptions end when their [`Subscription`] is dropped.
pub struct Broadcaster<T> {
	registry: Rc<RefCell<Registry<T>>>,
}

impl<T> Default for Broadcaster<T> {
	fn default() -> Self {
		Self {
			registry: Rc::new(RefCell::new(Registry {
				next_id: 0,
				listeners: BTreeMap::new(),
			})),
		}
	}
}

impl<T> Clone for Broadcaster<T> {
	fn clone(&self) -> Self {
		Self {
			registry: self.registry.clone(),
		}
	}
}

impl<T> PartialEq for Broadcaster<T> {
	fn eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.registry, &other.registry)
	}
}

impl<T> std::fmt::Debug for Broadcaster<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Broadcaster")
			.field("subscribers", &self.registry.borrow().listeners.len())
			.finish()
	}
}

impl<T: 'static> Broadcaster<T> {
	#[must_use = "the subscription ends when dropped"]
	pub fn subscribe<F>(&self, listener: F) -> Subscription<T>
	where
		F: Fn(&T) + 'static,
	{
		let mut registry = self.registry.borrow_mut();
		let id = registry.next_id;
		registry.next_id += 1;
		registry.listeners.insert(id, Rc::new(listener));
		Subscription {
			id,
			registry: Rc::downgrade(&self.registry),
		}
	}

	/// Calls every listener subscribed at the time of the broadcast.
	/// Listeners may subscribe or unsubscribe while being notified.
	pub fn broadcast(&self, value: &T) {
		let listeners = self.registry.borrow().listeners.values().cloned().collect::<Vec<_>>();
		for listener in listeners {
			(*listener)(value);
		}
	}

	pub fn subscriber_count(&self) -> usize {
		self.registry.borrow().listeners.len()
	}
}

pub struct Subscription<T> {
	id: usize,
	registry: Weak<RefCell<Registry<T>>>,
}

impl<T> Drop for Subscription<T> {
	fn drop(&mut self) {
		if let Some(registry) = self.registry.upgrade() {
			registry.borrow_mut().listeners.remove(&self.id);
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use std::cell::Cell;

	#[test]
	fn notifies_subscribers() {
		let channel = Broadcaster::<u32>::default();
		let total = Rc::new(Cell::new(0));
		let _a = channel.subscribe({
			let total = total.clone();
			move |value| total.set(total.get() + value)
		});
		let _b = channel.subscribe({
			let total = total.clone();
			move |value| total.set(total.get() + value * 10)
		});
		channel.broadcast(&2);
		assert_eq!(total.get(), 22);
	}

	#[test]
	fn drop_unsubscribes() {
		let channel = Broadcaster::<u32>::default();
		let received = Rc::new(Cell::new(0));
		let subscription = channel.subscribe({
			let received = received.clone();
			move |value| received.set(*value)
		});
		assert_eq!(channel.subscriber_count(), 1);
		drop(subscription);
		assert_eq!(channel.subscriber_count(), 0);
		channel.broadcast(&5);
		assert_eq!(received.get(), 0);
	}

	#[test]
	fn subscription_outlives_channel() {
		let channel = Broadcaster::<u32>::default();
		let subscription = channel.subscribe(|_| {});
		drop(channel);
		drop(subscription);
	}

	#[test]
	fn unsubscribe_during_broadcast() {
		let channel = Broadcaster::<u32>::default();
		let held = Rc::new(RefCell::new(None));
		let subscription = channel.subscribe({
			let held = held.clone();
			move |_| {
				held.borrow_mut().take();
			}
		});
		*held.borrow_mut() = Some(subscription);
		channel.broadcast(&1);
		assert_eq!(channel.subscriber_count(), 0);
	}

	#[test]
	fn clones_share_subscribers() {
		let channel = Broadcaster::<u32>::default();
		let other = channel.clone();
		let _subscription = other.subscribe(|_| {});
		assert_eq!(channel, other);
		assert_eq!(channel.subscriber_count(), 1);
		assert_ne!(channel, Broadcaster::default());
	}
}
