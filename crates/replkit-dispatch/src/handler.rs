//! Command handler types.
//!
//! A handler is the business logic of a command. It receives the application
//! state mutably plus the bound arguments, and returns a serializable value.
//! It never formats output: presentation is decided afterwards by the
//! [`Strategy`](crate::Strategy) from the command's metadata.
//!
//! Handlers are plain closures:
//!
//! ```rust
//! use replkit_dispatch::{ArgValues, Handler};
//!
//! struct Counter { count: u32 }
//!
//! let bump = Handler::new(|state: &mut Counter, _args: &ArgValues| {
//!     state.count += 1;
//!     Ok::<_, anyhow::Error>(state.count)
//! });
//!
//! let mut counter = Counter { count: 0 };
//! let value = bump.call(&mut counter, &ArgValues::default())?;
//! assert_eq!(value, serde_json::json!(1));
//! # Ok::<(), anyhow::Error>(())
//! ```

use std::fmt;
use std::rc::Rc;

use serde::Serialize;
use serde_json::Value;

use crate::args::ArgValues;

/// The result type for handler bodies.
pub type HandlerResult<T> = Result<T, anyhow::Error>;

/// Types a handler closure may return.
///
/// Any `Result<T, E>` with a serializable `T` and an error convertible into
/// [`anyhow::Error`] qualifies; the value is converted to JSON on return.
pub trait IntoHandlerResult {
    fn into_handler_result(self) -> HandlerResult<Value>;
}

impl<T, E> IntoHandlerResult for Result<T, E>
where
    T: Serialize,
    E: Into<anyhow::Error>,
{
    fn into_handler_result(self) -> HandlerResult<Value> {
        let value = self.map_err(Into::into)?;
        Ok(serde_json::to_value(value)?)
    }
}

type HandlerFn<S> = dyn Fn(&mut S, &ArgValues) -> HandlerResult<Value>;

/// A type-erased command handler over state `S`.
///
/// Cloning is cheap and clones share the same closure.
pub struct Handler<S> {
    f: Rc<HandlerFn<S>>,
}

impl<S> Handler<S> {
    pub fn new<F, R>(f: F) -> Self
    where
        S: 'static,
        F: Fn(&mut S, &ArgValues) -> R + 'static,
        R: IntoHandlerResult + 'static,
    {
        Self {
            f: Rc::new(move |state: &mut S, args: &ArgValues| {
                f(state, args).into_handler_result()
            }),
        }
    }

    pub fn call(&self, state: &mut S, args: &ArgValues) -> HandlerResult<Value> {
        (self.f)(state, args)
    }
}

impl<S> Clone for Handler<S> {
    fn clone(&self) -> Self {
        Self {
            f: Rc::clone(&self.f),
        }
    }
}

impl<S> fmt::Debug for Handler<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler").finish_non_exhaustive()
    }
}
