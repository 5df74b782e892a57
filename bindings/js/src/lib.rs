use qbuilder::{dialect_from_name, Command, Options, Session};
use wasm_bindgen::prelude::*;

fn to_js_error(e: impl ToString) -> String {
    e.to_string()
}

/// One query builder session, owned by the page.
#[wasm_bindgen]
pub struct QueryBuilder {
    session: Session,
}

#[wasm_bindgen]
impl QueryBuilder {
    #[wasm_bindgen(constructor)]
    pub fn new(
        schema_json: &str,
        dialect: &str,
        schema_name: Option<String>,
        show_where_in_button: bool,
    ) -> Result<QueryBuilder, String> {
        let options = Options {
            dialect: dialect_from_name(dialect).map_err(to_js_error)?,
            schema_name,
            show_where_in_button,
            ..Options::default()
        };
        let session = Session::from_schema_json(schema_json, options).map_err(to_js_error)?;
        Ok(QueryBuilder { session })
    }

    /// Applies one JSON command and returns `{"description": ..., "sql": ...}`.
    pub fn apply(&mut self, command_json: &str) -> Result<String, String> {
        let command: Command = serde_json::from_str(command_json).map_err(to_js_error)?;
        let applied = self.session.apply(command).map_err(to_js_error)?;
        serde_json::to_string(&applied).map_err(to_js_error)
    }

    pub fn sql(&self) -> String {
        self.session.sql()
    }

    #[wasm_bindgen(js_name = stateJson)]
    pub fn state_json(&self) -> Result<String, String> {
        self.session.state_json().map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = relatedReferences)]
    pub fn related_references(&self, table: &str) -> Result<String, String> {
        let references = self.session.related_references(table).map_err(to_js_error)?;
        serde_json::to_string(&references).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = possibleLeftJoins)]
    pub fn possible_left_joins(&self) -> Result<String, String> {
        let joins = self.session.possible_left_joins().map_err(to_js_error)?;
        serde_json::to_string(&joins).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = selectableTables)]
    pub fn selectable_tables(&self) -> Result<String, String> {
        let tables = self.session.selected_table_alias_pairs().map_err(to_js_error)?;
        serde_json::to_string(&tables).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = showWhereInAction)]
    pub fn show_where_in_action(&self) -> bool {
        self.session.show_where_in_action()
    }

    #[wasm_bindgen(js_name = relatedColumnClass)]
    pub fn related_column_class(&self, table: &str) -> String {
        self.session.related_column_class(table).to_string()
    }
}
