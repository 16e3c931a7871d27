use crate::model::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Glyph shown next to the active sort column.
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortCriteria {
    pub field: &'static str,
    pub direction: SortDirection,
}

/// Compute the records the list should display: filter by the search query,
/// then order by the sort criteria.
///
/// Filtering is a case-insensitive substring match over every searchable
/// field; an empty query matches everything. Sorting is stable, so records
/// that compare equal keep their fetched order. Records missing the sort
/// field group ahead of records that have it.
pub fn derive_view<R: Record>(
    records: &[R],
    query: &str,
    sort: Option<&SortCriteria>,
) -> Vec<R> {
    // The query is matched verbatim apart from case folding; whitespace in
    // it is significant.
    let needle = query.to_lowercase();
    let mut view: Vec<R> = records
        .iter()
        .filter(|record| needle.is_empty() || matches_query(*record, &needle))
        .cloned()
        .collect();

    if let Some(criteria) = sort {
        view.sort_by(|a, b| {
            let ord = match (a.field(criteria.field), b.field(criteria.field)) {
                (Some(a), Some(b)) => a.cmp_natural(&b),
                (None, Some(_)) => std::cmp::Ordering::Less,
                (Some(_), None) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            };
            match criteria.direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
    }

    view
}

fn matches_query<R: Record>(record: &R, needle: &str) -> bool {
    R::FIELDS
        .iter()
        .filter(|spec| spec.searchable)
        .filter_map(|spec| record.field(spec.name))
        .any(|value| {
            value
                .search_text()
                .is_some_and(|text| text.to_lowercase().contains(needle))
        })
}
