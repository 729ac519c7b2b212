use crate::database::Transaction;
use crate::entity::{Book, BookId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookQuery<Connection: Transaction>: Sync + Send + 'static {
    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError>;

    /// Returns matching records in insertion order.
    async fn find_all(
        &self,
        con: &mut Connection,
        filter: &BookFilter,
    ) -> error_stack::Result<Vec<Book>, KernelError>;
}

pub trait DependOnBookQuery<Connection: Transaction>: Sync + Send + 'static {
    type BookQuery: BookQuery<Connection>;
    fn book_query(&self) -> &Self::BookQuery;
}

/// At most one predicate ever applies to a listing; the caller resolves
/// which one before reaching the query.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum BookFilter {
    All,
    Reading(bool),
    Finished(bool),
    NameContains(String),
}

impl BookFilter {
    /// Case-insensitive substring match on the record name.
    pub fn name_contains(needle: impl Into<String>) -> Self {
        Self::NameContains(needle.into().to_lowercase())
    }

    pub fn matches(&self, book: &Book) -> bool {
        match self {
            BookFilter::All => true,
            BookFilter::Reading(flag) => book.extra().reading() == Some(*flag),
            BookFilter::Finished(flag) => book.finished() == *flag,
            BookFilter::NameContains(needle) => {
                book.name().as_ref().to_lowercase().contains(needle)
            }
        }
    }
}

#[cfg(test)]
mod test {
    use serde_json::{json, Value};

    use crate::entity::{Book, BookDate, BookExtra, BookId, BookName, PageCount, ReadPage};
    use crate::query::BookFilter;

    fn book(name: &str, page_count: u32, read_page: u32, extra: Value) -> Book {
        let Value::Object(fields) = extra else {
            unreachable!()
        };
        let now = BookDate::now();
        Book::new(
            BookId::new("V09YExygSUYogwWb"),
            BookName::new(name),
            PageCount::new(page_count),
            ReadPage::new(read_page),
            BookExtra::new(fields),
            now.clone(),
            now,
        )
    }

    #[test]
    fn all_matches_everything() {
        assert!(BookFilter::All.matches(&book("A", 1, 0, json!({}))));
    }

    #[test]
    fn reading_compares_strictly_against_a_boolean() {
        let reading = book("A", 10, 2, json!({"reading": true}));
        let idle = book("B", 10, 2, json!({"reading": false}));
        let untagged = book("C", 10, 2, json!({}));

        assert!(BookFilter::Reading(true).matches(&reading));
        assert!(!BookFilter::Reading(true).matches(&idle));
        assert!(BookFilter::Reading(false).matches(&idle));
        // A record without a boolean `reading` matches neither polarity.
        assert!(!BookFilter::Reading(true).matches(&untagged));
        assert!(!BookFilter::Reading(false).matches(&untagged));
    }

    #[test]
    fn finished_follows_the_derived_flag() {
        let done = book("A", 100, 100, json!({}));
        let in_progress = book("B", 100, 50, json!({}));

        assert!(BookFilter::Finished(true).matches(&done));
        assert!(!BookFilter::Finished(true).matches(&in_progress));
        assert!(BookFilter::Finished(false).matches(&in_progress));
    }

    #[test]
    fn name_match_ignores_case() {
        let record = book("Dicoding Books", 1, 0, json!({}));

        assert!(BookFilter::name_contains("DICODING").matches(&record));
        assert!(BookFilter::name_contains("ding boo").matches(&record));
        assert!(!BookFilter::name_contains("missing").matches(&record));
    }
}
