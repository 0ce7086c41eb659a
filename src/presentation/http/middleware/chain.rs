// src/presentation/http/middleware/chain.rs
//! Composition of request interceptors around a terminal handler.
//!
//! A [`Constructor`] turns one [`Handle`] into another, usually by running
//! some check before delegating. A [`Chain`] holds an ordered list of them and
//! applies the list to a handler so that the first registered constructor ends
//! up outermost: `Chain::new([a, b]).then(Some(h))` behaves like `a(b(h))`.

use axum::{
    extract::Request,
    handler::Handler,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::{future::Future, pin::Pin, sync::Arc};

pub type ResponseFuture = Pin<Box<dyn Future<Output = Response> + Send + 'static>>;

type HandleFn = dyn Fn(Request) -> ResponseFuture + Send + Sync;

/// A cloneable, type-erased request handler.
#[derive(Clone)]
pub struct Handle(Arc<HandleFn>);

impl Handle {
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        Self(Arc::new(move |req: Request| -> ResponseFuture { Box::pin(f(req)) }))
    }

    /// Adapts an axum handler function (extractors and all) into a `Handle`.
    pub fn from_handler<H, T, S>(handler: H, state: S) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
        S: Clone + Send + Sync + 'static,
    {
        Self(Arc::new(move |req: Request| -> ResponseFuture {
            Box::pin(handler.clone().call(req, state.clone()))
        }))
    }

    /// Answers `200 OK` with an empty body and does nothing else.
    pub fn noop() -> Self {
        Self::new(|_req| async { StatusCode::OK.into_response() })
    }

    pub fn run(&self, req: Request) -> ResponseFuture {
        (self.0)(req)
    }
}

impl<S> Handler<(), S> for Handle {
    type Future = ResponseFuture;

    fn call(self, req: Request, _state: S) -> Self::Future {
        (self.0)(req)
    }
}

/// Wraps a handle with another behaviour.
pub type Constructor = Arc<dyn Fn(Handle) -> Handle + Send + Sync>;

#[derive(Clone, Default)]
pub struct Chain {
    constructors: Vec<Constructor>,
}

impl Chain {
    pub fn new(constructors: impl IntoIterator<Item = Constructor>) -> Self {
        Self {
            constructors: constructors.into_iter().collect(),
        }
    }

    /// Wraps `handle` in every constructor, last registered innermost. A
    /// missing handle yields a bare [`Handle::noop`] that no constructor sees.
    pub fn then(&self, handle: Option<Handle>) -> Handle {
        let Some(handle) = handle else {
            return Handle::noop();
        };
        self.constructors
            .iter()
            .rev()
            .fold(handle, |inner, constructor| constructor(inner))
    }

    /// Returns a new chain with `constructors` added after the existing ones.
    /// `self` is left untouched.
    pub fn append(&self, constructors: impl IntoIterator<Item = Constructor>) -> Self {
        let mut combined = self.constructors.clone();
        combined.extend(constructors);
        Self {
            constructors: combined,
        }
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}
