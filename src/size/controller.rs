use std::cell::Cell;
use std::fmt::{self, Debug, Formatter};

use super::{Capacity, MaxSize, SizeMessages, SizeMode};
use crate::util::error::{CapacityOverflow, CapacityUnderflow, IndexOutOfBounds};

/// Counts the elements of the context `C`.
pub type Calculate<C> = fn(&C) -> usize;

/// The single source of truth for how many elements a structure holds and how many it may hold.
///
/// The count comes from a calculation over a context (for the structures in this crate, their
/// [`NodeManager`](crate::node::NodeManager)) and is cached until the next mutation. Every write to
/// the context must go through [`mutate`](SizeController::mutate), which clears the cache once the
/// write is done.
///
/// The controller doesn't own its context, so the methods that need the count take it as an
/// argument. [`bind`](SizeController::bind) pairs the two for read-only use.
pub struct SizeController<C: ?Sized> {
    calculate: Calculate<C>,
    cache: Cell<Option<usize>>,
    max_size: MaxSize,
    messages: SizeMessages,
}

impl<C: ?Sized> SizeController<C> {
    /// Creates an unbounded controller with the default messages.
    pub fn new(calculate: Calculate<C>) -> SizeController<C> {
        SizeController {
            calculate,
            cache: Cell::new(None),
            max_size: MaxSize::Unbounded,
            messages: SizeMessages::default(),
        }
    }

    pub fn with_max_size(mut self, max_size: impl Into<MaxSize>) -> SizeController<C> {
        self.max_size = max_size.into();
        self
    }

    pub fn with_messages(mut self, messages: SizeMessages) -> SizeController<C> {
        self.messages = messages;
        self
    }

    /// Returns the cached count, calculating it first if the cache is empty.
    pub fn get(&self, context: &C) -> usize {
        match self.cache.get() {
            Some(len) => len,
            None => self.get_forced(context),
        }
    }

    /// Recalculates the count regardless of the cache, and caches the result.
    pub fn get_forced(&self, context: &C) -> usize {
        let len = (self.calculate)(context);
        self.cache.set(Some(len));
        len
    }

    pub fn cached(&self) -> Option<usize> {
        self.cache.get()
    }

    pub fn invalidate(&self) {
        self.cache.set(None);
    }

    pub fn set_calculate(&mut self, calculate: Calculate<C>) {
        self.calculate = calculate;
        self.invalidate();
    }

    pub const fn max_size(&self) -> MaxSize {
        self.max_size
    }

    /// Sets the maximum size, which also decides the [`SizeMode`]. Lowering it below the current
    /// count is allowed; nothing is evicted, but inserts fail until the count drops back under it.
    pub fn set_max_size(&mut self, max_size: impl Into<MaxSize>) {
        self.max_size = max_size.into();
    }

    pub const fn mode(&self) -> SizeMode {
        self.max_size.mode()
    }

    pub fn capacity(&self, context: &C) -> Capacity {
        Capacity::between(self.max_size, self.get(context))
    }

    pub const fn messages(&self) -> &SizeMessages {
        &self.messages
    }

    pub fn set_messages(&mut self, messages: SizeMessages) {
        self.messages = messages;
    }

    pub fn is_full(&self, context: &C) -> bool {
        match self.max_size {
            MaxSize::Unbounded => false,
            MaxSize::Limited(limit) => self.get(context) >= limit,
        }
    }

    pub fn is_empty(&self, context: &C) -> bool {
        self.get(context) == 0
    }

    pub fn is_in_bounds(&self, context: &C, index: usize) -> bool {
        index < self.get(context)
    }

    pub fn assert_not_full(&self, context: &C) -> Result<(), CapacityOverflow> {
        self.assert_room_for(context, 1)
    }

    /// Checks that `count` more elements would fit under the max size.
    pub fn assert_room_for(&self, context: &C, count: usize) -> Result<(), CapacityOverflow> {
        let MaxSize::Limited(limit) = self.max_size else {
            return Ok(());
        };
        let len = self.get(context);
        if len.saturating_add(count) > limit {
            Err(CapacityOverflow {
                len,
                max_size: limit,
                message: self.messages.overflow.clone(),
            })
        } else {
            Ok(())
        }
    }

    pub fn assert_not_empty(&self, context: &C) -> Result<(), CapacityUnderflow> {
        if self.is_empty(context) {
            Err(self.underflow())
        } else {
            Ok(())
        }
    }

    pub fn assert_in_bounds(&self, context: &C, index: usize) -> Result<(), IndexOutOfBounds> {
        if self.is_in_bounds(context, index) {
            Ok(())
        } else {
            Err(self.out_of_bounds(index, self.get(context)))
        }
    }

    /// Runs a write against the context, then clears the cache whatever the write did.
    pub fn mutate<R>(&self, context: &mut C, write: impl FnOnce(&mut C) -> R) -> R {
        let result = write(context);
        self.invalidate();
        result
    }

    /// Pairs the controller with its context for read-only use.
    pub const fn bind<'a>(&'a self, context: &'a C) -> Size<'a, C> {
        Size {
            controller: self,
            context,
        }
    }

    pub(crate) fn underflow(&self) -> CapacityUnderflow {
        CapacityUnderflow {
            message: self.messages.underflow.clone(),
        }
    }

    pub(crate) fn out_of_bounds(&self, index: usize, len: usize) -> IndexOutOfBounds {
        IndexOutOfBounds {
            index,
            len,
            message: self.messages.out_of_bounds.clone(),
        }
    }
}

impl<C: ?Sized> Clone for SizeController<C> {
    fn clone(&self) -> Self {
        SizeController {
            calculate: self.calculate,
            cache: self.cache.clone(),
            max_size: self.max_size,
            messages: self.messages.clone(),
        }
    }
}

impl<C: ?Sized> Debug for SizeController<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SizeController")
            .field("cache", &self.cache.get())
            .field("max_size", &self.max_size)
            .field("mode", &self.mode())
            .field("messages", &self.messages)
            .finish_non_exhaustive()
    }
}

/// A [`SizeController`] bound to its context. Returned by `size()` on every structure.
pub struct Size<'a, C: ?Sized> {
    controller: &'a SizeController<C>,
    context: &'a C,
}

impl<'a, C: ?Sized> Size<'a, C> {
    pub fn get(&self) -> usize {
        self.controller.get(self.context)
    }

    pub fn get_forced(&self) -> usize {
        self.controller.get_forced(self.context)
    }

    pub fn cached(&self) -> Option<usize> {
        self.controller.cached()
    }

    pub const fn max_size(&self) -> MaxSize {
        self.controller.max_size()
    }

    pub const fn mode(&self) -> SizeMode {
        self.controller.mode()
    }

    pub fn capacity(&self) -> Capacity {
        self.controller.capacity(self.context)
    }

    pub const fn messages(&self) -> &'a SizeMessages {
        self.controller.messages()
    }

    pub fn is_full(&self) -> bool {
        self.controller.is_full(self.context)
    }

    pub fn is_empty(&self) -> bool {
        self.controller.is_empty(self.context)
    }

    pub fn is_in_bounds(&self, index: usize) -> bool {
        self.controller.is_in_bounds(self.context, index)
    }

    pub fn assert_not_full(&self) -> Result<(), CapacityOverflow> {
        self.controller.assert_not_full(self.context)
    }

    pub fn assert_room_for(&self, count: usize) -> Result<(), CapacityOverflow> {
        self.controller.assert_room_for(self.context, count)
    }

    pub fn assert_not_empty(&self) -> Result<(), CapacityUnderflow> {
        self.controller.assert_not_empty(self.context)
    }

    pub fn assert_in_bounds(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        self.controller.assert_in_bounds(self.context, index)
    }
}

impl<C: ?Sized> Clone for Size<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized> Copy for Size<'_, C> {}

impl<C: ?Sized> Debug for Size<'_, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Size")
            .field("len", &self.get())
            .field("max_size", &self.max_size())
            .field("capacity", &self.capacity())
            .finish()
    }
}
