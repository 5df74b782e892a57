use indexmap::IndexMap;

use super::filter::{ColumnFilter, Slot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conjunction {
    And,
    Or,
}

impl Conjunction {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Conjunction::And => "AND",
            Conjunction::Or => "OR",
        }
    }
}

/// The filters on one slot, in the order they were added.
#[derive(Debug)]
pub struct FilterGroup<'a> {
    pub slot: &'a Slot,
    pub conjunction: Conjunction,
    pub filters: Vec<&'a ColumnFilter>,
}

/// Groups filters by slot, ordered by each slot's first appearance.
///
/// Several equality or null checks on one column are alternatives (`a = 1 OR a IS NULL`), while
/// several range comparisons narrow each other down (`a > 5 AND a < 10`). So a group is joined by
/// `OR` as soon as it contains a plain or null filter, and by `AND` otherwise. A group with a
/// single filter reports `AND`.
pub fn group_filters(filters: &[ColumnFilter]) -> Vec<FilterGroup<'_>> {
    let mut by_slot = IndexMap::<&Slot, Vec<&ColumnFilter>>::new();
    for filter in filters {
        by_slot.entry(&filter.slot).or_default().push(filter);
    }
    by_slot
        .into_iter()
        .map(|(slot, filters)| {
            let conjunction = if filters.len() > 1 && filters.iter().any(|f| f.kind.is_alternative()) {
                Conjunction::Or
            } else {
                Conjunction::And
            };
            FilterGroup {
                slot,
                conjunction,
                filters,
            }
        })
        .collect()
}

pub fn infer_operator_for_columns(filters: &[ColumnFilter]) -> IndexMap<Slot, Conjunction> {
    group_filters(filters)
        .into_iter()
        .map(|group| (group.slot.clone(), group.conjunction))
        .collect()
}

#[cfg(test)]
mod tests {
    use qbuilder_parser::ast::Operator;

    use crate::query::FilterKind;

    use super::*;

    fn filter(column: &str, kind: FilterKind) -> ColumnFilter {
        ColumnFilter::new(Slot::new("t", column, None), kind, "")
    }

    fn plain(column: &str, value: &str) -> ColumnFilter {
        filter(
            column,
            FilterKind::Plain {
                value: value.to_string(),
            },
        )
    }

    fn comparison(column: &str, operator: Operator, number: &str) -> ColumnFilter {
        filter(
            column,
            FilterKind::NumberComparison {
                operator,
                number: number.to_string(),
            },
        )
    }

    #[test]
    fn test_plain_filters_on_one_slot_are_alternatives() {
        let filters = [plain("a", "1"), plain("a", "2")];
        let operators = infer_operator_for_columns(&filters);
        assert_eq!(operators.get(&Slot::new("t", "a", None)), Some(&Conjunction::Or));
    }

    #[test]
    fn test_null_filter_makes_group_alternative() {
        let filters = [
            comparison("a", Operator::Gt, "5"),
            filter("a", FilterKind::Null { negated: false }),
        ];
        let operators = infer_operator_for_columns(&filters);
        assert_eq!(operators.get(&Slot::new("t", "a", None)), Some(&Conjunction::Or));
    }

    #[test]
    fn test_comparisons_on_one_slot_are_conjoined() {
        let filters = [
            comparison("a", Operator::Gt, "5"),
            comparison("a", Operator::Lt, "10"),
        ];
        let operators = infer_operator_for_columns(&filters);
        assert_eq!(operators.get(&Slot::new("t", "a", None)), Some(&Conjunction::And));
    }

    #[test]
    fn test_groups_keep_first_seen_order() {
        let filters = [plain("b", "1"), plain("a", "1"), plain("b", "2")];
        let groups = group_filters(&filters);
        let columns: Vec<&str> = groups.iter().map(|g| g.slot.column.as_str()).collect();
        assert_eq!(columns, ["b", "a"]);
        assert_eq!(groups[0].filters.len(), 2);
        assert_eq!(groups[1].conjunction, Conjunction::And);
    }

    #[test]
    fn test_table_alias_separates_slots() {
        let filters = [
            plain("a", "1"),
            ColumnFilter::new(
                Slot::new("t", "a", Some("t2")),
                FilterKind::Plain {
                    value: "2".to_string(),
                },
                "2",
            ),
        ];
        assert_eq!(group_filters(&filters).len(), 2);
    }
}
