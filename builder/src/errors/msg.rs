pub fn invalid_number() -> String {
    "Invalid number".to_string()
}

pub fn invalid_timestamp() -> String {
    "Invalid timestamp expression".to_string()
}

pub fn no_query() -> String {
    "A table must be selected first.".to_string()
}

pub fn no_sub_query() -> String {
    "The query has no subquery to filter.".to_string()
}

pub fn filter_not_found(table: &str, column: &str) -> String {
    format!("No matching filter on `{table}.{column}`.")
}

pub fn left_join_not_found(source_table: &str, target_table: &str) -> String {
    format!("No left join from `{source_table}` to `{target_table}`.")
}

pub fn unknown_table(table_name: &str) -> String {
    format!("Table `{table_name}` does not exist.")
}

pub fn col_not_in_table(column_name: &str, table_name: &str) -> String {
    format!("Column `{column_name}` not found within table `{table_name}`.")
}

pub fn unknown_reference_target(table_name: &str, column_name: &str) -> String {
    format!("Reference from `{table_name}.{column_name}` points to an unknown table or column.")
}

pub fn invalid_schema_json(reason: &str) -> String {
    format!("Schema input is not valid JSON: {reason}")
}

pub fn unknown_dialect(name: &str) -> String {
    format!("Unknown dialect `{name}`.")
}
