//! The pagination pipeline: count, order, clamp, slice.

use std::sync::Arc;

use crate::common::{Error, PaginatorConfig, Result};
use crate::paging::{Page, PageComputer, PageMetadata, PageRequest, PaginatorStats, SortKeyResolver};
use crate::query::{OrderableQuery, OrderingBuilder};
use crate::schema::{descriptor_of, Record, TypeDescriptor};

/// Turns an [`OrderableQuery`] plus a [`PageRequest`] into one [`Page`].
///
/// # Pipeline
/// ```text
/// request ──▶ defaults ──▶ count (once) ──▶ total pages
///                                              │
///   sort field ◀── SortKeyResolver ◀───────────┘
///       │
///       ▼
/// OrderingBuilder ──▶ clamp index ──▶ skip/take ──▶ fetch ──▶ Page<T>
/// ```
///
/// # Thread Safety
/// A paginator holds only its config and atomic counters, so one instance
/// can be shared across threads. Each call is independent; the request is
/// only read.
///
/// # Usage
/// ```
/// use pagekit::query::IntoMemoryQuery;
/// use pagekit::schema::{Record, TypeDescriptor};
/// use pagekit::{PageRequest, Paginator};
///
/// #[derive(Debug, Clone)]
/// struct User {
///     id: u32,
///     name: String,
/// }
///
/// impl Record for User {
///     fn describe() -> TypeDescriptor<Self> {
///         TypeDescriptor::builder("User")
///             .key("id", |u: &User| u.id)
///             .field("name", |u: &User| u.name.clone())
///             .build()
///     }
/// }
///
/// let users: Vec<User> = (1..=95).rev().map(|id| User { id, name: format!("user{id}") }).collect();
/// let paginator = Paginator::default();
///
/// let page = paginator.paginate(users.into_query(), Some(&PageRequest::new(4, 30))).unwrap();
/// assert_eq!(page.metadata().total_pages, 4);
/// assert_eq!(page.len(), 5);
/// assert_eq!(page[0].id, 91);
/// ```
#[derive(Debug, Default)]
pub struct Paginator {
    config: PaginatorConfig,
    stats: PaginatorStats,
}

impl Paginator {
    pub fn new(config: PaginatorConfig) -> Self {
        Self {
            config,
            stats: PaginatorStats::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> &PaginatorConfig {
        &self.config
    }

    #[inline]
    pub fn stats(&self) -> &PaginatorStats {
        &self.stats
    }

    /// Paginate `source` using `T`'s cached descriptor.
    ///
    /// With `request == None` the whole source is returned unsorted with
    /// zeroed totals.
    ///
    /// # Errors
    /// - `Error::NoSortableField` if no sort field was given and `T` has no fields
    /// - `Error::UnknownSortField` if the sort field does not exist on `T`
    /// - `Error::InvalidPageRequest` in strict mode, for a zero or oversized request
    /// - `Error::Query` if the backing engine fails
    pub fn paginate<Q>(&self, source: Q, request: Option<&PageRequest>) -> Result<Page<Q::Item>>
    where
        Q: OrderableQuery,
        Q::Item: Record,
    {
        let descriptor = descriptor_of::<Q::Item>();
        self.paginate_with(&descriptor, source, request)
    }

    /// Paginate by index and size, sorted by the default sort field.
    pub fn paginate_at<Q>(&self, source: Q, page_index: usize, page_size: usize) -> Result<Page<Q::Item>>
    where
        Q: OrderableQuery,
        Q::Item: Record,
    {
        self.paginate(source, Some(&PageRequest::new(page_index, page_size)))
    }

    /// Paginate by index with the configured default page size.
    pub fn paginate_page<Q>(&self, source: Q, page_index: usize) -> Result<Page<Q::Item>>
    where
        Q: OrderableQuery,
        Q::Item: Record,
    {
        self.paginate_at(source, page_index, self.config.default_page_size)
    }

    /// Paginate with an explicitly supplied descriptor, for element types
    /// whose shape is only known at runtime (see [`Row`](crate::schema::Row)).
    pub fn paginate_with<Q>(
        &self,
        descriptor: &Arc<TypeDescriptor<Q::Item>>,
        source: Q,
        request: Option<&PageRequest>,
    ) -> Result<Page<Q::Item>>
    where
        Q: OrderableQuery,
    {
        let Some(request) = request else {
            let items = source.fetch().map_err(Error::query)?;
            tracing::debug!(type_name = descriptor.type_name(), records = items.len(), "no page request, returning source as is");
            self.stats.record_unpaged(items.len());
            return Ok(Page::new(items, PageMetadata::unpaged(self.config.default_page_size)));
        };

        let (window, metadata, clamped) = self.window(descriptor, source, request)?;
        let items = window.fetch().map_err(Error::query)?;

        tracing::debug!(
            type_name = descriptor.type_name(),
            total_count = metadata.total_count,
            total_pages = metadata.total_pages,
            page_index = metadata.page_index,
            page_size = metadata.page_size,
            returned = items.len(),
            "page fetched"
        );

        self.stats.record_page(items.len(), clamped);
        Ok(Page::new(items, metadata))
    }

    /// Like [`paginate`](Self::paginate), but hands back the ordered and
    /// windowed query instead of fetching it, so the caller decides when
    /// (and how) to run it.
    ///
    /// With `request == None` the source is returned untouched.
    ///
    /// ```
    /// use pagekit::query::{IntoMemoryQuery, OrderableQuery};
    /// use pagekit::schema::{Record, TypeDescriptor};
    /// use pagekit::{PageRequest, Paginator};
    ///
    /// struct Line(u32);
    ///
    /// impl Record for Line {
    ///     fn describe() -> TypeDescriptor<Self> {
    ///         TypeDescriptor::builder("Line").key("no", |l: &Line| l.0).build()
    ///     }
    /// }
    ///
    /// let source = vec![Line(3), Line(1), Line(2)].into_query();
    /// let (query, meta) = Paginator::default()
    ///     .paginate_query(source, Some(&PageRequest::new(2, 2)))
    ///     .unwrap();
    ///
    /// assert_eq!(meta.total_pages, 2);
    /// assert_eq!(query.fetch().unwrap().iter().map(|l| l.0).collect::<Vec<_>>(), vec![3]);
    /// ```
    pub fn paginate_query<Q>(&self, source: Q, request: Option<&PageRequest>) -> Result<(Q, PageMetadata)>
    where
        Q: OrderableQuery,
        Q::Item: Record,
    {
        let descriptor = descriptor_of::<Q::Item>();
        self.paginate_query_with(&descriptor, source, request)
    }

    /// [`paginate_query`](Self::paginate_query) with an explicitly supplied descriptor.
    pub fn paginate_query_with<Q>(
        &self,
        descriptor: &Arc<TypeDescriptor<Q::Item>>,
        source: Q,
        request: Option<&PageRequest>,
    ) -> Result<(Q, PageMetadata)>
    where
        Q: OrderableQuery,
    {
        let Some(request) = request else {
            return Ok((source, PageMetadata::unpaged(self.config.default_page_size)));
        };

        let (window, metadata, _) = self.window(descriptor, source, request)?;
        Ok((window, metadata))
    }

    /// Count, order, clamp and slice `source`. Returns the unfetched window,
    /// its metadata and whether the page index was clamped.
    fn window<Q>(
        &self,
        descriptor: &Arc<TypeDescriptor<Q::Item>>,
        source: Q,
        request: &PageRequest,
    ) -> Result<(Q, PageMetadata, bool)>
    where
        Q: OrderableQuery,
    {
        let (page_index, page_size) = self.normalize(request)?;

        let total_count = source.count().map_err(Error::query)?;

        let sort_field = SortKeyResolver::resolve(descriptor, request.explicit_sort_field())?;
        let ordered = OrderingBuilder::apply_order(source, descriptor, &sort_field, request.direction())?;

        let metadata = PageComputer::metadata(total_count, page_size, page_index);
        let clamped = metadata.page_index != page_index;
        if clamped {
            tracing::warn!(
                requested = page_index,
                clamped_to = metadata.page_index,
                total_pages = metadata.total_pages,
                "page index out of range"
            );
        }

        let offset = PageComputer::offset(metadata.page_index, page_size);
        tracing::debug!(sort_field = %sort_field, offset, limit = page_size, "page window");

        Ok((ordered.skip(offset).take(page_size), metadata, clamped))
    }

    /// Apply defaults (or reject, in strict mode) to the request's index and size.
    fn normalize(&self, request: &PageRequest) -> Result<(usize, usize)> {
        let config = &self.config;

        if config.strict {
            if request.page_index == 0 {
                return Err(Error::invalid_request("page index must be at least 1"));
            }
            if request.page_size == 0 {
                return Err(Error::invalid_request("page size must be at least 1"));
            }
            if request.page_size > config.max_page_size {
                return Err(Error::invalid_request(format!(
                    "page size {} exceeds maximum {}",
                    request.page_size, config.max_page_size
                )));
            }
            return Ok((request.page_index, request.page_size));
        }

        let page_index = if request.page_index == 0 {
            crate::common::config::DEFAULT_PAGE_INDEX
        } else {
            request.page_index
        };

        let page_size = match request.page_size {
            0 => config.default_page_size.max(1),
            size => size,
        };

        Ok((page_index, page_size))
    }
}

/// Pagination as a method on any [`OrderableQuery`], using a default
/// [`Paginator`].
///
/// ```
/// use pagekit::query::IntoMemoryQuery;
/// use pagekit::schema::{Record, TypeDescriptor};
/// use pagekit::{PageRequest, Paginate};
///
/// struct Score(u32);
///
/// impl Record for Score {
///     fn describe() -> TypeDescriptor<Self> {
///         TypeDescriptor::builder("Score").field("value", |s: &Score| s.0).build()
///     }
/// }
///
/// let page = vec![Score(3), Score(9), Score(1)]
///     .into_query()
///     .to_page(&PageRequest::new(1, 2).sort_by_desc("value"))
///     .unwrap();
/// assert_eq!(page.iter().map(|s| s.0).collect::<Vec<_>>(), vec![9, 3]);
/// assert!(page.metadata().has_next);
/// ```
pub trait Paginate: OrderableQuery {
    fn to_page(self, request: &PageRequest) -> Result<Page<Self::Item>>
    where
        Self::Item: Record,
    {
        Paginator::default().paginate(self, Some(request))
    }

    fn to_page_at(self, page_index: usize, page_size: usize) -> Result<Page<Self::Item>>
    where
        Self::Item: Record,
    {
        Paginator::default().paginate_at(self, page_index, page_size)
    }
}

impl<Q: OrderableQuery> Paginate for Q {}
