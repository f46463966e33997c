/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Framework-agnostic notification callback.
//!
//! The form core and the visibility tracker hand events to their owners
//! through this type so that `landing-form` stays free of any UI framework.
//! Equality is identity: two callbacks are equal only if they share the
//! same allocation, which is what lets the visibility reporter notice that
//! its parent handed it a new handler.

use std::fmt;
use std::rc::Rc;

/// Cloneable, `Rc`-backed `Fn(IN)`.
pub struct Callback<IN> {
    cb: Rc<dyn Fn(IN)>,
}

impl<IN, F: Fn(IN) + 'static> From<F> for Callback<IN> {
    fn from(func: F) -> Self {
        Callback { cb: Rc::new(func) }
    }
}

impl<IN> Clone for Callback<IN> {
    fn clone(&self) -> Self {
        Self {
            cb: Rc::clone(&self.cb),
        }
    }
}

#[allow(clippy::vtable_address_comparisons)]
impl<IN> PartialEq for Callback<IN> {
    fn eq(&self, other: &Callback<IN>) -> bool {
        Rc::ptr_eq(&self.cb, &other.cb)
    }
}

impl<IN> fmt::Debug for Callback<IN> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback<_>")
    }
}

impl<IN> Callback<IN> {
    pub fn emit(&self, value: IN) {
        (*self.cb)(value)
    }

    /// A callback that drops whatever it is given.
    pub fn noop() -> Self {
        Self::from(|_| ())
    }
}

impl<IN> Default for Callback<IN> {
    fn default() -> Self {
        Self::noop()
    }
}

impl<IN: 'static> Callback<IN> {
    /// Adapts this callback to a different input type by running `func`
    /// before every emit.
    pub fn reform<F, T>(&self, func: F) -> Callback<T>
    where
        F: Fn(T) -> IN + 'static,
    {
        let this = self.clone();
        Callback::from(move |input: T| this.emit(func(input)))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    fn recorder<T: 'static>() -> (Callback<T>, Rc<RefCell<Vec<T>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (Callback::from(move |v| sink.borrow_mut().push(v)), seen)
    }

    #[test]
    fn emit_reaches_closure() {
        let (cb, seen) = recorder::<u8>();
        cb.emit(1);
        cb.emit(2);
        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn reform_maps_input() {
        let (cb, seen) = recorder::<bool>();
        let negated = cb.reform(|v: bool| !v);
        negated.emit(true);
        negated.emit(false);
        assert_eq!(*seen.borrow(), vec![false, true]);
    }

    #[test]
    fn equality_is_identity() {
        let a: Callback<()> = Callback::from(|_| ());
        let b: Callback<()> = Callback::from(|_| ());
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }
}
