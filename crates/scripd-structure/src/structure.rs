//! Entry point tying document, templates and walker together

use scripd_core::{DEFAULT_DELIMITER, DEFAULT_TEMPLATE_EXTENSION, KindRegistry, Result, ScripdConfig, Vendor};
use scripd_templates::{DirectorySource, SubstitutionEngine, TemplateLoader, TemplateSource};
use std::path::{Path, PathBuf};

use crate::assembly::GeneratedSql;
use crate::document::StructureDocument;
use crate::walker::StructureWalker;

/// SQL generator for one structure document
///
/// ```rust,ignore
/// let mut structure = JsonDbStructure::from_path("schema.json", "mysql")?;
/// structure.parse_structure()?;
/// println!("{}", structure.generated_sql(";\n"));
/// ```
#[derive(Debug)]
pub struct JsonDbStructure {
    document: StructureDocument,
    engine: SubstitutionEngine,
    template_extension: String,
    generated: GeneratedSql,
}

impl JsonDbStructure {
    /// Generator over an in-memory document using the built-in templates and
    /// the `default` vendor
    pub fn new(document: impl Into<StructureDocument>) -> Self {
        Self::with_vendor(document, Vendor::default())
    }

    pub fn with_vendor(document: impl Into<StructureDocument>, vendor: impl Into<Vendor>) -> Self {
        let engine = SubstitutionEngine::new(
            TemplateLoader::embedded(vendor.into()),
            KindRegistry::new(),
        );
        Self::with_engine(document, engine)
    }

    /// Generator over a JSON file
    pub fn from_path(path: impl AsRef<Path>, vendor: impl Into<Vendor>) -> Result<Self> {
        let document = StructureDocument::from_path(path)?;
        Ok(Self::with_vendor(document, vendor))
    }

    /// Generator set up from a run configuration
    pub fn from_config(document: impl Into<StructureDocument>, config: &ScripdConfig) -> Self {
        let loader = match &config.template_dir {
            Some(dir) => TemplateLoader::new(
                DirectorySource::new(dir).with_extension(&config.template_extension),
                config.vendor.clone(),
            ),
            None => TemplateLoader::embedded(config.vendor.clone()),
        };
        let mut structure =
            Self::with_engine(document, SubstitutionEngine::new(loader, KindRegistry::new()));
        structure.template_extension = config.template_extension.clone();
        structure
    }

    pub fn with_engine(document: impl Into<StructureDocument>, engine: SubstitutionEngine) -> Self {
        Self {
            document: document.into(),
            engine,
            template_extension: DEFAULT_TEMPLATE_EXTENSION.to_string(),
            generated: GeneratedSql::new(),
        }
    }

    pub fn vendor(&self) -> &Vendor {
        self.engine.loader().vendor()
    }

    pub fn set_vendor(&mut self, vendor: impl Into<Vendor>) {
        self.engine.loader_mut().set_vendor(vendor.into());
    }

    /// Reads templates from `dir` instead of the current source, keeping the
    /// configured template extension
    pub fn set_template_directory(&mut self, dir: impl Into<PathBuf>) {
        let source = DirectorySource::new(dir).with_extension(&self.template_extension);
        self.set_template_source(source);
    }

    pub fn template_extension(&self) -> &str {
        &self.template_extension
    }

    pub fn set_template_source(&mut self, source: impl TemplateSource + 'static) {
        self.engine.loader_mut().set_source(source);
    }

    pub fn document(&self) -> &StructureDocument {
        &self.document
    }

    /// Walks the document and stores the generated statements
    ///
    /// Statements from an earlier run are replaced. On error nothing is kept.
    /// Templates are cached for one run only and read afresh by the next.
    pub fn parse_structure(&mut self) -> Result<()> {
        self.generated = GeneratedSql::new();
        self.engine.loader().clear_cache();

        let statements = StructureWalker::new(&self.engine).walk(self.document.attributes())?;
        tracing::debug!(
            vendor = %self.vendor(),
            statement_count = statements.len(),
            "parsed structure"
        );
        self.generated = GeneratedSql::from(statements);
        Ok(())
    }

    /// Generated statements joined by `delimiter`
    pub fn generated_sql(&self, delimiter: &str) -> String {
        self.generated.join(delimiter)
    }

    /// Generated statements joined by `"; \n"`
    pub fn generated_sql_default(&self) -> String {
        self.generated_sql(DEFAULT_DELIMITER)
    }

    pub fn statements(&self) -> &[String] {
        self.generated.statements()
    }

    pub fn generated(&self) -> &GeneratedSql {
        &self.generated
    }
}
