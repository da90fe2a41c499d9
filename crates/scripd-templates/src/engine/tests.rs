//! Tests for the substitution engine

use super::*;
use crate::repository::{TemplateDocument, TemplateSource};
use pretty_assertions::assert_eq;
use scripd_core::Vendor;
use serde_json::json;
use std::collections::HashMap;

#[derive(Debug, Default)]
struct MapSource {
    documents: HashMap<&'static str, &'static str>,
}

impl MapSource {
    fn with(mut self, identifier: &'static str, document: &'static str) -> Self {
        self.documents.insert(identifier, document);
        self
    }
}

impl TemplateSource for MapSource {
    fn fetch(&self, identifier: &str) -> Result<TemplateDocument> {
        let source = self
            .documents
            .get(identifier)
            .ok_or_else(|| ScripdError::TemplateNotFound(identifier.to_string()))?;
        TemplateDocument::from_json_str(source)
    }
}

fn attributes(value: Value) -> AttributeMap {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

fn engine(source: MapSource) -> SubstitutionEngine {
    SubstitutionEngine::new(
        TemplateLoader::new(source, Vendor::default()),
        KindRegistry::new(),
    )
}

fn embedded(vendor: &str) -> SubstitutionEngine {
    SubstitutionEngine::new(TemplateLoader::embedded(Vendor::from(vendor)), KindRegistry::new())
}

#[test]
fn test_literals_and_values() {
    let engine = engine(
        MapSource::default().with("create-index", r#"{"default": ["create", "index", "{name}", "on", "{table}", "{columns}"]}"#),
    );
    let attrs = attributes(json!({
        "name": "idx_students_name",
        "table": "students",
        "columns": ["last_name", "first_name"],
    }));

    let sql = engine
        .render_declaration(CrudAction::Create, "index", &attrs)
        .unwrap();
    assert_eq!(sql, "CREATE INDEX idx_students_name ON students (last_name, first_name)");
}

#[test]
fn test_numbers_render_as_json() {
    let engine = engine(
        MapSource::default().with("alter-table", r#"{"default": ["alter", "table", "{name}", "auto_increment", "=", "{auto increment}"]}"#),
    );
    let attrs = attributes(json!({"name": "faculty", "auto-increment": 100}));
    assert_eq!(
        engine.render_template("alter-table", &attrs).unwrap(),
        "ALTER TABLE faculty AUTO_INCREMENT = 100"
    );
}

#[test]
fn test_true_value_emits_placeholder_text() {
    let engine = embedded("default");
    let attrs = attributes(json!({"name": "faculty", "if-exists": true}));
    assert_eq!(
        engine.render_declaration(CrudAction::Drop, "table", &attrs).unwrap(),
        "DROP TABLE IF EXISTS faculty"
    );
}

#[test]
fn test_false_or_missing_value_is_elided() {
    let engine = embedded("default");

    let attrs = attributes(json!({"name": "faculty", "if-exists": false}));
    assert_eq!(
        engine.render_declaration(CrudAction::Drop, "table", &attrs).unwrap(),
        "DROP TABLE faculty"
    );

    let attrs = attributes(json!({"name": "faculty"}));
    assert_eq!(
        engine.render_declaration(CrudAction::Drop, "table", &attrs).unwrap(),
        "DROP TABLE faculty"
    );

    let attrs = attributes(json!({"name": "faculty", "if-exists": null}));
    assert_eq!(
        engine.render_declaration(CrudAction::Drop, "table", &attrs).unwrap(),
        "DROP TABLE faculty"
    );
}

#[test]
fn test_elided_value_takes_equals_sign_along() {
    let engine = embedded("mysql");

    let attrs = attributes(json!({"name": "students", "engine": "InnoDB"}));
    assert_eq!(
        engine.render_declaration(CrudAction::Create, "table", &attrs).unwrap(),
        "CREATE TABLE students ENGINE = InnoDB"
    );

    let attrs = attributes(json!({"name": "students"}));
    let sql = engine
        .render_declaration(CrudAction::Create, "table", &attrs)
        .unwrap();
    assert_eq!(sql, "CREATE TABLE students");
    assert!(!sql.contains('='));

    let attrs = attributes(json!({"name": "students", "engine": false, "default-charset": false}));
    let sql = engine
        .render_declaration(CrudAction::Create, "table", &attrs)
        .unwrap();
    assert!(!sql.contains('='), "dangling assignment in {sql}");
}

#[test]
fn test_keyword_pairs_with_value() {
    let engine = embedded("mysql");
    let attrs = attributes(json!({
        "name": "students",
        "engine": "InnoDB",
        "default-charset": "utf8mb4",
        "comment": "'enrolled students'",
    }));
    assert_eq!(
        engine.render_declaration(CrudAction::Create, "table", &attrs).unwrap(),
        "CREATE TABLE students ENGINE = InnoDB DEFAULT CHARSET = utf8mb4 COMMENT = 'enrolled students'"
    );
}

#[test]
fn test_zero_default_keeps_its_keyword() {
    let engine = embedded("mysql");
    let column = attributes(json!({
        "name": "count",
        "type": "int",
        "not-null": true,
        "default": 0,
    }));
    assert_eq!(
        engine.render_definer("columns", &column).unwrap(),
        "count int NOT NULL DEFAULT 0"
    );
}

#[test]
fn test_empty_string_drops_keyword_pair() {
    let engine = embedded("mysql");

    let column = attributes(json!({
        "name": "note",
        "type": "varchar(5)",
        "default": "",
        "comment": "",
    }));
    assert_eq!(engine.render_definer("columns", &column).unwrap(), "note varchar(5)");

    let attrs = attributes(json!({
        "name": "loans",
        "columns": [{"name": "note", "type": "varchar(5)", "default": ""}],
        "comment": "",
    }));
    let sql = engine
        .render_declaration(CrudAction::Create, "table", &attrs)
        .unwrap();
    assert_eq!(sql, "CREATE TABLE loans (note varchar(5))");
    assert!(!sql.contains('='), "dangling assignment in {sql}");
}

#[test]
fn test_nested_declaration_does_not_fill_placeholder() {
    let engine = engine(
        MapSource::default().with("drop-index", r#"{"default": ["drop", "index", "{name}", "[on]", "{table}"]}"#),
    );

    let attrs = attributes(json!({"name": "idx_a", "table": "students"}));
    assert_eq!(
        engine.render_declaration(CrudAction::Drop, "index", &attrs).unwrap(),
        "DROP INDEX idx_a ON students"
    );

    let attrs = attributes(json!({
        "name": "idx_a",
        "table": {"crud-action": "drop", "name": "students"},
    }));
    assert_eq!(
        engine.render_declaration(CrudAction::Drop, "index", &attrs).unwrap(),
        "DROP INDEX idx_a"
    );
}

#[test]
fn test_flag_keywords_in_columns() {
    let engine = embedded("mysql");
    let column = attributes(json!({
        "name": "fac_id",
        "type": "int",
        "auto_increment": true,
        "primary-key": true,
    }));
    assert_eq!(
        engine.render_definer("columns", &column).unwrap(),
        "fac_id int AUTO_INCREMENT PRIMARY KEY"
    );

    let column = attributes(json!({
        "name": "fac_id",
        "type": "int",
        "auto_increment": false,
        "primary-key": true,
    }));
    assert_eq!(
        engine.render_definer("columns", &column).unwrap(),
        "fac_id int PRIMARY KEY"
    );
}

#[test]
fn test_definer_list_lengths() {
    let engine = embedded("default");

    let attrs = attributes(json!({"name": "empty", "columns": []}));
    assert_eq!(
        engine.render_declaration(CrudAction::Create, "table", &attrs).unwrap(),
        "CREATE TABLE empty ()"
    );

    let attrs = attributes(json!({
        "name": "students",
        "columns": [{"name": "id", "type": "int", "primary-key": true}],
    }));
    assert_eq!(
        engine.render_declaration(CrudAction::Create, "table", &attrs).unwrap(),
        "CREATE TABLE students (id int PRIMARY KEY)"
    );

    let attrs = attributes(json!({
        "name": "students",
        "columns": [
            {"name": "id", "type": "int", "primary-key": true},
            {"name": "first_name", "type": "varchar(20)", "default": "'samuel'"},
            {"name": "last_name", "type": "varchar(20)"},
        ],
    }));
    assert_eq!(
        engine.render_declaration(CrudAction::Create, "table", &attrs).unwrap(),
        "CREATE TABLE students (id int PRIMARY KEY, first_name varchar(20) DEFAULT 'samuel', last_name varchar(20))"
    );
}

#[test]
fn test_comma_literal_inside_definer() {
    let engine = embedded("default");
    let attrs = attributes(json!({
        "name": "subjects",
        "columns": [
            {"name": "subject_id", "type": "int", "auto_increment": true, "primary-key": true},
            {
                "name": "subject_faculty",
                "type": "int",
                "foreign-key": "(subject_faculty)",
                "references": "faculty(fac_id)",
                "on-update": "cascade",
                "on-delete": "set null",
            },
        ],
    }));
    assert_eq!(
        engine.render_declaration(CrudAction::Create, "table", &attrs).unwrap(),
        "CREATE TABLE subjects (subject_id int AUTO_INCREMENT PRIMARY KEY, subject_faculty int , FOREIGN KEY (subject_faculty) REFERENCES faculty(fac_id) ON UPDATE cascade ON DELETE set null)"
    );
}

#[test]
fn test_comma_literal_guard() {
    let engine = engine(
        MapSource::default().with("columns", r#"{"default": ["{name}", "[(not null)]"]}"#),
    );
    let on = attributes(json!({"name": "id", "not-null": true}));
    let off = attributes(json!({"name": "id", "not-null": false}));
    let absent = attributes(json!({"name": "id"}));
    assert_eq!(engine.render_definer("columns", &on).unwrap(), "id , NOT NULL");
    assert_eq!(engine.render_definer("columns", &off).unwrap(), "id");
    assert_eq!(engine.render_definer("columns", &absent).unwrap(), "id");
}

#[test]
fn test_alter_table_add_column() {
    let engine = embedded("default");
    let attrs = attributes(json!({
        "name": "facultys",
        "add-column": [{
            "name": "full_name",
            "type": "varchar(30)",
            "not-null": true,
            "default": "'john doe'",
        }],
    }));
    assert_eq!(
        engine.render_declaration(CrudAction::Alter, "table", &attrs).unwrap(),
        "ALTER TABLE facultys ADD COLUMN (full_name varchar(30) NOT NULL DEFAULT 'john doe')"
    );
}

#[test]
fn test_view_with_column_definer() {
    let engine = embedded("default");
    let attrs = attributes(json!({
        "name": "student_vw",
        "columns": [
            {"name": "id"},
            {"name": "first_name"},
            {"name": "last_name"},
            {"name": "class"},
        ],
        "select": "select * from students where id < 3",
        "with-local-check-option": true,
    }));
    assert_eq!(
        engine.render_declaration(CrudAction::Create, "view", &attrs).unwrap(),
        "CREATE VIEW student_vw (id, first_name, last_name, class) AS select * from students where id < 3 WITH LOCAL CHECK OPTION"
    );
}

#[test]
fn test_definer_templates_can_nest() {
    let engine = engine(
        MapSource::default()
            .with("create-table", r#"{"default": ["create", "table", "{name}", "[{columns}]"]}"#)
            .with("columns", r#"{"default": ["{name}", "{type}", "[{foreign key}]"]}"#)
            .with("foreign-key", r#"{"default": ["references", "{references}"]}"#),
    );
    let attrs = attributes(json!({
        "name": "subjects",
        "columns": [{
            "name": "faculty",
            "type": "int",
            "foreign-key": [{"references": "faculty(fac_id)"}],
        }],
    }));
    assert_eq!(
        engine.render_declaration(CrudAction::Create, "table", &attrs).unwrap(),
        "CREATE TABLE subjects (faculty int (REFERENCES faculty(fac_id)))"
    );
}

#[test]
fn test_rendering_is_idempotent() {
    let engine = embedded("mysql");
    let attrs = attributes(json!({
        "name": "students",
        "if-not-exists": true,
        "columns": [
            {"name": "id", "type": "int", "primary-key": true},
            {"name": "class", "type": "varchar(10)"},
        ],
        "engine": "InnoDB",
    }));
    let first = engine
        .render_declaration(CrudAction::Create, "table", &attrs)
        .unwrap();
    let second = engine
        .render_declaration(CrudAction::Create, "table", &attrs)
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_vendor_variant_selection() {
    let attrs = attributes(json!({
        "name": "students",
        "columns": [{"name": "id", "type": "integer", "primary-key": true, "autoincrement": true}],
        "strict": true,
    }));

    assert_eq!(
        embedded("sqlite")
            .render_declaration(CrudAction::Create, "table", &attrs)
            .unwrap(),
        "CREATE TABLE students (id integer PRIMARY KEY AUTOINCREMENT) STRICT"
    );
    // Vendors without their own variant render the default one
    assert_eq!(
        embedded("postgres")
            .render_declaration(CrudAction::Create, "table", &attrs)
            .unwrap(),
        "CREATE TABLE students (id integer PRIMARY KEY)"
    );
}

#[test]
fn test_object_value_is_structure_error() {
    let engine = embedded("default");
    let attrs = attributes(json!({"name": {"first": "faculty"}}));
    assert!(matches!(
        engine.render_declaration(CrudAction::Drop, "table", &attrs),
        Err(ScripdError::Structure(_))
    ));
}

#[test]
fn test_definer_entries_must_be_objects() {
    let engine = embedded("default");
    let attrs = attributes(json!({"name": "students", "columns": ["id", "name"]}));
    assert!(matches!(
        engine.render_declaration(CrudAction::Create, "table", &attrs),
        Err(ScripdError::Structure(_))
    ));
}

#[test]
fn test_plain_placeholder_rejects_object_lists() {
    let engine = embedded("default");
    let attrs = attributes(json!({
        "name": "idx",
        "table": "students",
        "columns": [{"name": "id"}],
    }));
    assert!(matches!(
        engine.render_declaration(CrudAction::Create, "index", &attrs),
        Err(ScripdError::Structure(_))
    ));
}

#[test]
fn test_unknown_definer_is_structure_error() {
    let engine = engine(
        MapSource::default().with("create-table", r#"{"default": ["create", "table", "{name}", "[{partitions}]"]}"#),
    );
    let attrs = attributes(json!({"name": "t", "partitions": [{"name": "p0"}]}));
    assert!(matches!(
        engine.render_declaration(CrudAction::Create, "table", &attrs),
        Err(ScripdError::Structure(_))
    ));
}

#[test]
fn test_missing_definer_template_propagates() {
    let engine = engine(
        MapSource::default().with("create-table", r#"{"default": ["create", "table", "{name}", "[{columns}]"]}"#),
    );
    let attrs = attributes(json!({"name": "t", "columns": [{"name": "id"}]}));
    assert!(matches!(
        engine.render_declaration(CrudAction::Create, "table", &attrs),
        Err(ScripdError::TemplateNotFound(_))
    ));
}
