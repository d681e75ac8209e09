//! Keyword filtering, sorting and offset pagination over in-memory sequences.

use core::str::FromStr;

use serde::Serialize;

use crate::entity::Resource;
use crate::error::{DomainError, DomainResult};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Sort instruction parsed from `"field"` or `"field,asc|desc"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            order: SortOrder::Asc,
        }
    }
}

impl FromStr for SortSpec {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, order) = match s.split_once(',') {
            Some((field, dir)) => {
                let order = match dir.trim().to_ascii_lowercase().as_str() {
                    "asc" => SortOrder::Asc,
                    "desc" => SortOrder::Desc,
                    other => {
                        return Err(DomainError::validation(format!(
                            "sort direction must be asc or desc, got '{other}'"
                        )));
                    }
                };
                (field, order)
            }
            None => (s, SortOrder::Asc),
        };

        let field = field.trim();
        if field.is_empty() {
            return Err(DomainError::validation("sort field cannot be empty"));
        }

        Ok(Self {
            field: field.to_string(),
            order,
        })
    }
}

/// Offset pagination request. `size == 0` means "everything in one page".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
    pub sort: Option<SortSpec>,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size,
            sort: None,
        }
    }

    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn is_unpaged(&self) -> bool {
        self.size == 0
    }

    fn offset(&self) -> usize {
        (self.page as usize).saturating_mul(self.size as usize)
    }
}

/// Parameters of a collection GET.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListQuery {
    pub keyword: Option<String>,
    pub page: Option<PageRequest>,
}

impl ListQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn with_page(mut self, page: PageRequest) -> Self {
        self.page = Some(page);
        self
    }

    /// Non-empty keyword, if any. An empty keyword means "no filter".
    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref().filter(|k| !k.is_empty())
    }

    /// Filter, sort and slice `items` (given in store order).
    pub fn apply<R: Resource>(&self, items: Vec<R>) -> DomainResult<Page<R>> {
        let mut items: Vec<R> = match self.keyword() {
            Some(kw) => items.into_iter().filter(|r| r.matches_keyword(kw)).collect(),
            None => items,
        };

        let Some(request) = &self.page else {
            return Ok(Page::unpaged(items));
        };

        if let Some(sort) = &request.sort {
            if !R::SORT_FIELDS.contains(&sort.field.as_str()) {
                return Err(DomainError::validation(format!(
                    "cannot sort by '{}' (allowed: {})",
                    sort.field,
                    R::SORT_FIELDS.join(", ")
                )));
            }
            items.sort_by(|a, b| {
                let ord = a.compare_by(b, &sort.field);
                match sort.order {
                    SortOrder::Asc => ord,
                    SortOrder::Desc => ord.reverse(),
                }
            });
        }

        Ok(paginate(items, request))
    }
}

/// One slice of a collection plus what the client needs to ask for the next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total: u64,
    pub has_next: bool,
}

impl<T> Page<T> {
    pub fn unpaged(items: Vec<T>) -> Self {
        let total = items.len();
        Self {
            items,
            page: 0,
            size: u32::try_from(total).unwrap_or(u32::MAX),
            total: total as u64,
            has_next: false,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total: self.total,
            has_next: self.has_next,
        }
    }
}

/// Slice already-ordered `items`. A page past the end is empty, not an error.
pub fn paginate<T>(items: Vec<T>, request: &PageRequest) -> Page<T> {
    if request.is_unpaged() {
        return Page::unpaged(items);
    }

    let total = items.len();
    let offset = request.offset().min(total);
    let items: Vec<T> = items
        .into_iter()
        .skip(offset)
        .take(request.size as usize)
        .collect();
    let has_next = offset + items.len() < total;

    Page {
        items,
        page: request.page,
        size: request.size,
        total: total as u64,
        has_next,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Record, RecordId};
    use core::cmp::Ordering;
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Named {
        id: RecordId,
        name: String,
    }

    impl Record for Named {
        fn id(&self) -> RecordId {
            self.id
        }

        fn assign_id(&mut self, id: RecordId) {
            self.id = id;
        }
    }

    impl Resource for Named {
        type Draft = String;
        const SORT_FIELDS: &'static [&'static str] = &["id", "name"];

        fn from_draft(draft: String) -> Self {
            Self {
                id: RecordId::UNASSIGNED,
                name: draft,
            }
        }

        fn replace_with(&mut self, draft: String) {
            self.name = draft;
        }

        fn matches_keyword(&self, keyword: &str) -> bool {
            self.name.contains(keyword)
        }

        fn compare_by(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => self.name.cmp(&other.name),
                _ => self.id.cmp(&other.id),
            }
        }
    }

    fn named(n: u64) -> Vec<Named> {
        (1..=n)
            .map(|i| Named {
                id: RecordId::new(i),
                name: format!("user-{i:02}"),
            })
            .collect()
    }

    #[test]
    fn first_page_of_twenty_has_ten() {
        let page = paginate(named(20), &PageRequest::new(0, 10));
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.total, 20);
        assert!(page.has_next);
    }

    #[test]
    fn last_page_reports_no_next() {
        let page = paginate(named(20), &PageRequest::new(1, 10));
        assert_eq!(page.items.len(), 10);
        assert!(!page.has_next);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let page = paginate(named(20), &PageRequest::new(7, 10));
        assert!(page.items.is_empty());
        assert_eq!(page.total, 20);
        assert!(!page.has_next);
    }

    #[test]
    fn size_zero_is_unpaged() {
        let page = paginate(named(5), &PageRequest::new(3, 0));
        assert_eq!(page.items.len(), 5);
        assert!(!page.has_next);
    }

    #[test]
    fn keyword_filters_case_sensitively() {
        let mut items = named(3);
        items[1].name = "Alice".into();
        let q = ListQuery::all().with_keyword("Ali");
        assert_eq!(q.apply(items.clone()).unwrap().items.len(), 1);

        let q = ListQuery::all().with_keyword("ali");
        assert!(q.apply(items).unwrap().items.is_empty());
    }

    #[test]
    fn empty_keyword_is_ignored() {
        let q = ListQuery::all().with_keyword("");
        assert_eq!(q.apply(named(4)).unwrap().items.len(), 4);
    }

    #[test]
    fn sorts_descending_by_name() {
        let q = ListQuery::all().with_page(
            PageRequest::new(0, 3).with_sort("name,desc".parse().unwrap()),
        );
        let page = q.apply(named(5)).unwrap();
        let names: Vec<_> = page.items.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, ["user-05", "user-04", "user-03"]);
    }

    #[test]
    fn unknown_sort_field_is_rejected_even_when_empty() {
        let q = ListQuery::all()
            .with_page(PageRequest::new(0, 10).with_sort(SortSpec::asc("password")));
        let err = q.apply(Vec::<Named>::new()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn sort_spec_parsing() {
        assert_eq!("id".parse::<SortSpec>().unwrap(), SortSpec::asc("id"));
        let spec: SortSpec = " name , DESC ".parse().unwrap();
        assert_eq!(spec.field, "name");
        assert_eq!(spec.order, SortOrder::Desc);
        assert!("name,sideways".parse::<SortSpec>().is_err());
        assert!(",asc".parse::<SortSpec>().is_err());
    }

    proptest! {
        #[test]
        fn pages_tile_the_collection(total in 0u64..60, size in 1u32..15) {
            let all = named(total);
            let mut seen = Vec::new();
            let mut page_no = 0;
            loop {
                let page = paginate(all.clone(), &PageRequest::new(page_no, size));
                prop_assert!(page.items.len() <= size as usize);
                prop_assert_eq!(page.total, total);
                seen.extend(page.items);
                if !page.has_next {
                    break;
                }
                page_no += 1;
            }
            prop_assert_eq!(seen, all);
        }

        #[test]
        fn page_length_matches_remaining(total in 0u64..60, size in 1u32..15, page_no in 0u32..10) {
            let page = paginate(named(total), &PageRequest::new(page_no, size));
            let remaining = (total as usize).saturating_sub(page_no as usize * size as usize);
            prop_assert_eq!(page.items.len(), remaining.min(size as usize));
        }
    }
}
