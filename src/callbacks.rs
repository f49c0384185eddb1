//! Continuation-style wrapper around [`Datatank`] for callers that are not
//! async themselves (UI event loops, FFI shims, ...).
//!
//! Every operation is spawned onto a Tokio runtime and reports its outcome
//! through `on_success` / `on_failure` closures, which run on a runtime worker
//! thread. The returned [`JoinHandle`] can be awaited or aborted.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use cardref::{CallbackDatatank, Datatank};
//!
//! # fn example(runtime: &tokio::runtime::Runtime) -> cardref::Result<()> {
//! let tank = Arc::new(Datatank::builder().build()?);
//! let callbacks = CallbackDatatank::with_handle(tank, runtime.handle().clone());
//!
//! callbacks.fetch_card(
//!     "3ee34158-867f-4685-8f2b-af9469b628c3",
//!     |card| println!("{}", card.name),
//!     |err| eprintln!("{}", err),
//! );
//! # Ok(())
//! # }
//! ```

use std::future::Future;
use std::sync::Arc;

use image::DynamicImage;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::error::{DatatankError, Result};
use crate::models::{Card, Catalog, CatalogName, ImageType, List, Ruling};
use crate::search::Search;
use crate::Datatank;

/// Spawns [`Datatank`] operations and hands their results to closures.
#[derive(Clone)]
pub struct CallbackDatatank {
    inner: Arc<Datatank>,
    handle: Handle,
}

impl CallbackDatatank {
    /// Wrap a tank using the runtime of the calling context.
    ///
    /// Fails with [`DatatankError::InvalidArgument`] when called outside a
    /// Tokio runtime; use [`with_handle`](Self::with_handle) there.
    pub fn new(tank: Arc<Datatank>) -> Result<Self> {
        let handle = Handle::try_current()
            .map_err(|e| DatatankError::InvalidArgument(format!("No Tokio runtime: {e}")))?;
        Ok(Self::with_handle(tank, handle))
    }

    pub fn with_handle(tank: Arc<Datatank>, handle: Handle) -> Self {
        Self {
            inner: tank,
            handle,
        }
    }

    /// The wrapped tank, for direct async use.
    pub fn tank(&self) -> &Arc<Datatank> {
        &self.inner
    }

    fn dispatch<T, Op, Fut, S, E>(&self, op: Op, on_success: S, on_failure: E) -> JoinHandle<()>
    where
        Op: FnOnce(Arc<Datatank>) -> Fut + Send + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
        T: Send + 'static,
        S: FnOnce(T) + Send + 'static,
        E: FnOnce(DatatankError) + Send + 'static,
    {
        let tank = self.inner.clone();
        self.handle.spawn(async move {
            match op(tank).await {
                Ok(value) => on_success(value),
                Err(err) => on_failure(err),
            }
        })
    }

    // -- Operations --------------------------------------------------------

    pub fn fetch_card<S, E>(&self, id: impl Into<String>, on_success: S, on_failure: E) -> JoinHandle<()>
    where
        S: FnOnce(Arc<Card>) + Send + 'static,
        E: FnOnce(DatatankError) + Send + 'static,
    {
        let id = id.into();
        self.dispatch(
            move |tank| async move { tank.cards().fetch(&id).await },
            on_success,
            on_failure,
        )
    }

    /// Fetch several cards. `on_failure` runs once per failing id;
    /// `on_success` runs once with the successes in input order.
    pub fn fetch_cards<S, E>(&self, ids: Vec<String>, on_success: S, mut on_failure: E) -> JoinHandle<()>
    where
        S: FnOnce(Vec<Arc<Card>>) + Send + 'static,
        E: FnMut(String, DatatankError) + Send + 'static,
    {
        let tank = self.inner.clone();
        self.handle.spawn(async move {
            let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
            let cards = tank
                .cards()
                .fetch_many(&refs, |id, err| on_failure(id.to_string(), err))
                .await;
            on_success(cards);
        })
    }

    pub fn fetch_catalog<S, E>(&self, name: CatalogName, on_success: S, on_failure: E) -> JoinHandle<()>
    where
        S: FnOnce(Arc<Catalog>) + Send + 'static,
        E: FnOnce(DatatankError) + Send + 'static,
    {
        self.dispatch(
            move |tank| async move { tank.catalogs().fetch(name).await },
            on_success,
            on_failure,
        )
    }

    pub fn fetch_image<S, E>(
        &self,
        card: Arc<Card>,
        image_type: ImageType,
        on_success: S,
        on_failure: E,
    ) -> JoinHandle<()>
    where
        S: FnOnce(Arc<DynamicImage>) + Send + 'static,
        E: FnOnce(DatatankError) + Send + 'static,
    {
        self.dispatch(
            move |tank| async move { tank.images().fetch(&card, image_type).await },
            on_success,
            on_failure,
        )
    }

    pub fn fetch_rulings<S, E>(&self, card: Arc<Card>, on_success: S, on_failure: E) -> JoinHandle<()>
    where
        S: FnOnce(Arc<List<Ruling>>) + Send + 'static,
        E: FnOnce(DatatankError) + Send + 'static,
    {
        self.dispatch(
            move |tank| async move { tank.rulings().fetch(&card).await },
            on_success,
            on_failure,
        )
    }

    pub fn search<S, E>(&self, search: Search, on_success: S, on_failure: E) -> JoinHandle<()>
    where
        S: FnOnce(Arc<List<Card>>) + Send + 'static,
        E: FnOnce(DatatankError) + Send + 'static,
    {
        self.dispatch(
            move |tank| async move { tank.search().run(&search).await },
            on_success,
            on_failure,
        )
    }

    pub fn search_next_page<S, E>(
        &self,
        previous: Arc<List<Card>>,
        on_success: S,
        on_failure: E,
    ) -> JoinHandle<()>
    where
        S: FnOnce(Arc<List<Card>>) + Send + 'static,
        E: FnOnce(DatatankError) + Send + 'static,
    {
        self.dispatch(
            move |tank| async move { tank.search().next_page(&previous).await },
            on_success,
            on_failure,
        )
    }
}
