//! Paginator scenario tests.
//!
//! These exercise the public API end to end against in-memory sources.

use chrono::{Duration, NaiveDate};
use pagekit::query::{IntoMemoryQuery, MemoryQuery};
use pagekit::schema::{Record, TypeDescriptor};
use pagekit::{Error, PageRequest, Paginate, Paginator};

#[derive(Debug, Clone, PartialEq)]
struct Customer {
    id: u64,
    name: String,
    joined: NaiveDate,
    referrer: Option<u64>,
}

impl Record for Customer {
    fn describe() -> TypeDescriptor<Self> {
        TypeDescriptor::builder("Customer")
            .field("name", |c: &Customer| c.name.clone())
            .key("id", |c: &Customer| c.id)
            .field("joined", |c: &Customer| c.joined)
            .field("referrer", |c: &Customer| c.referrer)
            .build()
    }
}

/// No field is marked as key.
#[derive(Debug, Clone)]
struct LogLine {
    seq: i64,
    message: String,
}

impl Record for LogLine {
    fn describe() -> TypeDescriptor<Self> {
        TypeDescriptor::builder("LogLine")
            .field("seq", |l: &LogLine| l.seq)
            .field("message", |l: &LogLine| l.message.clone())
            .build()
    }
}

#[derive(Debug)]
struct Opaque;

impl Record for Opaque {
    fn describe() -> TypeDescriptor<Self> {
        TypeDescriptor::builder("Opaque").build()
    }
}

/// Log output is opt-in through `RUST_LOG`.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn customers(n: u64) -> Vec<Customer> {
    let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    // Shuffled ids so ordering has something to do
    (0..n)
        .map(|i| (i * 37) % n + 1)
        .map(|id| Customer {
            id,
            name: format!("customer-{:03}", n - id),
            joined: start + Duration::days(id as i64 * 3),
            referrer: if id % 4 == 0 { None } else { Some(id / 2) },
        })
        .collect()
}

// ============================================================================
// Page boundaries
// ============================================================================

#[test]
fn test_95_records_four_pages() {
    init_tracing();
    let paginator = Paginator::default();
    let source = customers(95);

    let page = paginator.paginate_at(source.clone().into_query(), 4, 30).unwrap();
    let meta = page.metadata();
    assert_eq!(meta.total_count, 95);
    assert_eq!(meta.total_pages, 4);
    assert_eq!(meta.page_index, 4);
    assert_eq!(page.len(), 5);
    assert!(meta.has_previous);
    assert!(!meta.has_next);

    let clamped = paginator.paginate_at(source.into_query(), 5, 30).unwrap();
    assert_eq!(clamped.metadata().page_index, 4);
    assert_eq!(clamped.items(), page.items());
}

#[test]
fn test_empty_source() {
    let page = Paginator::default()
        .paginate(MemoryQuery::<Customer>::new(Vec::new()), Some(&PageRequest::new(1, 30)))
        .unwrap();

    let meta = page.metadata();
    assert!(page.is_empty());
    assert_eq!(meta.total_count, 0);
    assert_eq!(meta.total_pages, 0);
    assert_eq!(meta.page_index, 1);
    assert!(!meta.has_next);
    assert!(!meta.has_previous);
}

#[test]
fn test_first_page_flags() {
    let page = customers(61).into_query().to_page_at(1, 30).unwrap();
    assert!(!page.metadata().has_previous);
    assert!(page.metadata().has_next);
    assert_eq!(page.metadata().total_pages, 3);
}

#[test]
fn test_exact_multiple_has_no_next_on_last_page() {
    let page = customers(60).into_query().to_page_at(2, 30).unwrap();
    assert_eq!(page.len(), 30);
    assert!(!page.metadata().has_next);
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn test_default_sort_by_key_ascending() {
    let page = customers(50).into_query().to_page(&PageRequest::new(2, 10)).unwrap();
    let ids: Vec<u64> = page.iter().map(|c| c.id).collect();
    assert_eq!(ids, (11..=20).collect::<Vec<_>>());
}

#[test]
fn test_default_sort_falls_back_to_first_field() {
    let lines: Vec<LogLine> = [5, 3, 9, 1]
        .into_iter()
        .map(|seq| LogLine {
            seq,
            message: format!("line {seq}"),
        })
        .collect();

    let page = lines.into_query().to_page(&PageRequest::new(1, 10)).unwrap();
    assert_eq!(page.iter().map(|l| l.seq).collect::<Vec<_>>(), vec![1, 3, 5, 9]);
}

#[test]
fn test_sort_by_date_descending() {
    let request = PageRequest::new(1, 20).sort_by_desc("joined");
    let page = customers(40).into_query().to_page(&request).unwrap();

    let dates: Vec<NaiveDate> = page.iter().map(|c| c.joined).collect();
    assert!(dates.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(page[0].id, 40);
}

#[test]
fn test_sort_by_text() {
    let request = PageRequest::new(1, 5).sort_by("name");
    let page = customers(12).into_query().to_page(&request).unwrap();

    let names: Vec<&str> = page.iter().map(|c| c.name.as_str()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
    assert_eq!(names[0], "customer-000");
}

#[test]
fn test_nullable_field_sorts_nulls_first() {
    let request = PageRequest::new(1, 100).sort_by("referrer");
    let page = customers(16).into_query().to_page(&request).unwrap();

    let nulls = page.iter().take_while(|c| c.referrer.is_none()).count();
    assert_eq!(nulls, 4);
    assert!(page[nulls..].iter().all(|c| c.referrer.is_some()));
}

#[test]
fn test_filtered_source() {
    let source = customers(100).into_query().filter(|c| c.id % 2 == 0);
    let page = source.to_page_at(1, 30).unwrap();

    assert_eq!(page.metadata().total_count, 50);
    assert_eq!(page.metadata().total_pages, 2);
    assert!(page.iter().all(|c| c.id % 2 == 0));
}

// ============================================================================
// Errors and pass-through
// ============================================================================

#[test]
fn test_unknown_sort_field() {
    init_tracing();
    let request = PageRequest::new(1, 10).sort_by("doesNotExist");
    let err = customers(10).into_query().to_page(&request).unwrap_err();

    match err {
        Error::UnknownSortField { field, type_name } => {
            assert_eq!(field, "doesNotExist");
            assert_eq!(type_name, "Customer");
        }
        other => panic!("Expected UnknownSortField, got {:?}", other),
    }
}

#[test]
fn test_type_without_fields() {
    let err = vec![Opaque, Opaque].into_query().to_page_at(1, 10).unwrap_err();
    assert!(matches!(err, Error::NoSortableField { ref type_name } if type_name == "Opaque"));
}

#[test]
fn test_no_request_returns_everything_unsorted() {
    let source = customers(45);
    let page = Paginator::default().paginate(source.clone().into_query(), None).unwrap();

    assert_eq!(page.items(), source.as_slice());
    assert_eq!(page.metadata().total_count, 0);
    assert_eq!(page.metadata().total_pages, 0);
}

#[test]
fn test_request_is_not_modified() {
    let request = PageRequest::new(9, 0);
    let before = request.clone();

    let page = customers(10).into_query().to_page(&request).unwrap();

    assert_eq!(request, before);
    assert_eq!(page.metadata().page_index, 1);
    assert_eq!(page.metadata().page_size, 30);
}

#[test]
fn test_request_from_query_params() {
    let request: PageRequest =
        serde_json::from_str(r#"{"pageIndex": 3, "pageSize": 4, "sortField": "id", "descending": true}"#).unwrap();
    let page = customers(20).into_query().to_page(&request).unwrap();

    assert_eq!(page.iter().map(|c| c.id).collect::<Vec<_>>(), vec![12, 11, 10, 9]);
}
