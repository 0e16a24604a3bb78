//! UI component snippets and token-aware code generation.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::catalog::{
    Catalog, CatalogRecord, ClosedSet, CsvRow, FilterChain, LoadReport, ScoreProfile,
};
use crate::error::Result;

pub const COMPONENTS_FILE: &str = "components.csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    NextJs,
    React,
    Vue,
    Svelte,
    Html,
    Tailwind,
}

impl ClosedSet for Framework {
    const FIELD: &'static str = "framework";

    fn all() -> &'static [Self] {
        &[
            Self::NextJs,
            Self::React,
            Self::Vue,
            Self::Svelte,
            Self::Html,
            Self::Tailwind,
        ]
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::NextJs => "nextjs",
            Self::React => "react",
            Self::Vue => "vue",
            Self::Svelte => "svelte",
            Self::Html => "html",
            Self::Tailwind => "tailwind",
        }
    }
}

impl Framework {
    /// Frameworks whose snippets carry Tailwind classes in `className` attributes.
    const fn uses_class_names(self) -> bool {
        matches!(self, Self::React | Self::NextJs | Self::Tailwind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentCategory {
    Button,
    Input,
    Card,
    Modal,
    Navigation,
    Form,
    Feedback,
    Layout,
    Typography,
    DataDisplay,
}

impl ClosedSet for ComponentCategory {
    const FIELD: &'static str = "category";

    fn all() -> &'static [Self] {
        &[
            Self::Button,
            Self::Input,
            Self::Card,
            Self::Modal,
            Self::Navigation,
            Self::Form,
            Self::Feedback,
            Self::Layout,
            Self::Typography,
            Self::DataDisplay,
        ]
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Input => "input",
            Self::Card => "card",
            Self::Modal => "modal",
            Self::Navigation => "navigation",
            Self::Form => "form",
            Self::Feedback => "feedback",
            Self::Layout => "layout",
            Self::Typography => "typography",
            Self::DataDisplay => "data_display",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

impl PropSpec {
    fn new(name: &str, ty: &str) -> Self {
        Self {
            name: name.to_string(),
            ty: ty.to_string(),
        }
    }
}

/// Parse `name:type;name:type`. Items without a `:` are ignored.
#[must_use]
pub fn parse_props(raw: &str) -> Vec<PropSpec> {
    raw.split(';')
        .filter_map(|item| item.split_once(':'))
        .map(|(name, ty)| PropSpec::new(name.trim(), ty.trim()))
        .filter(|prop| !prop.name.is_empty())
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct ComponentSnippet {
    pub name: String,
    pub category: ComponentCategory,
    pub framework: Framework,
    pub code: String,
    pub dependencies: Vec<String>,
    pub props: Vec<PropSpec>,
    pub preview: String,
    pub description: String,
}

impl CatalogRecord for ComponentSnippet {
    const KIND: &'static str = "component";

    fn from_row(row: &CsvRow<'_>) -> Result<Self> {
        Ok(Self {
            name: row.non_empty("name")?.to_string(),
            category: row.parse("category")?,
            framework: row.parse("framework")?,
            code: row.text("code")?.to_string(),
            dependencies: row.list("dependencies", ';'),
            props: parse_props(row.text("props")?),
            preview: row.optional("preview").unwrap_or_default().to_string(),
            description: row.optional("description").unwrap_or_default().to_string(),
        })
    }

    fn defaults() -> Vec<Self> {
        vec![
            Self {
                name: "Button".to_string(),
                category: ComponentCategory::Button,
                framework: Framework::React,
                code: BUTTON_CODE.to_string(),
                dependencies: vec!["react".to_string()],
                props: vec![
                    PropSpec::new("children", "React.ReactNode"),
                    PropSpec::new("onClick", "() => void"),
                    PropSpec::new("variant", "'primary' | 'secondary'"),
                    PropSpec::new("size", "'sm' | 'md' | 'lg'"),
                ],
                preview: r#"<Button variant="primary" size="md">Click me</Button>"#.to_string(),
                description: "A versatile button component with multiple variants and sizes"
                    .to_string(),
            },
            Self {
                name: "Card".to_string(),
                category: ComponentCategory::Card,
                framework: Framework::React,
                code: CARD_CODE.to_string(),
                dependencies: vec!["react".to_string()],
                props: vec![
                    PropSpec::new("children", "React.ReactNode"),
                    PropSpec::new("title", "string"),
                    PropSpec::new("footer", "React.ReactNode"),
                ],
                preview: r#"<Card title="Card Title">Card content</Card>"#.to_string(),
                description: "A card component with optional header and footer".to_string(),
            },
            Self {
                name: "Input".to_string(),
                category: ComponentCategory::Input,
                framework: Framework::React,
                code: INPUT_CODE.to_string(),
                dependencies: vec!["react".to_string()],
                props: vec![
                    PropSpec::new("type", "'text' | 'email' | 'password' | 'number'"),
                    PropSpec::new("placeholder", "string"),
                    PropSpec::new("value", "string"),
                    PropSpec::new("onChange", "(value: string) => void"),
                    PropSpec::new("label", "string"),
                    PropSpec::new("error", "string"),
                ],
                preview: r#"<Input label="Email" value="" onChange={() => {}} />"#.to_string(),
                description: "A text input with label and error handling".to_string(),
            },
        ]
    }
}

const BUTTON_CODE: &str = r"import React from 'react'

interface ButtonProps {
  children: React.ReactNode
  onClick?: () => void
  variant?: 'primary' | 'secondary'
  size?: 'sm' | 'md' | 'lg'
}

export const Button: React.FC<ButtonProps> = ({
  children,
  onClick,
  variant = 'primary',
  size = 'md'
}) => {
  const baseStyles = 'rounded-lg font-medium transition-colors'
  const variants = {
    primary: 'bg-blue-500 hover:bg-blue-600 text-white',
    secondary: 'bg-gray-200 hover:bg-gray-300 text-gray-800'
  }
  const sizes = {
    sm: 'px-3 py-1.5 text-sm',
    md: 'px-4 py-2 text-base',
    lg: 'px-6 py-3 text-lg'
  }

  return (
    <button
      onClick={onClick}
      className={`${baseStyles} ${variants[variant]} ${sizes[size]}`}
    >
      {children}
    </button>
  )
}";

const CARD_CODE: &str = r#"import React from 'react'

interface CardProps {
  children: React.ReactNode
  title?: string
  footer?: React.ReactNode
}

export const Card: React.FC<CardProps> = ({ children, title, footer }) => {
  return (
    <div className="bg-white rounded-lg shadow-md overflow-hidden">
      {title && (
        <div className="px-6 py-4 border-b border-gray-200">
          <h3 className="text-lg font-semibold text-gray-900">{title}</h3>
        </div>
      )}
      <div className="px-6 py-4">
        {children}
      </div>
      {footer && (
        <div className="px-6 py-4 bg-gray-50 border-t border-gray-200">
          {footer}
        </div>
      )}
    </div>
  )
}"#;

const INPUT_CODE: &str = r#"import React from 'react'

interface InputProps {
  type?: 'text' | 'email' | 'password' | 'number'
  placeholder?: string
  value: string
  onChange: (value: string) => void
  label?: string
  error?: string
}

export const Input: React.FC<InputProps> = ({
  type = 'text',
  placeholder,
  value,
  onChange,
  label,
  error
}) => {
  return (
    <div className="w-full">
      {label && (
        <label className="block text-sm font-medium text-gray-700 mb-1">
          {label}
        </label>
      )}
      <input
        type={type}
        placeholder={placeholder}
        value={value}
        onChange={(e) => onChange(e.target.value)}
        className={`w-full px-3 py-2 border rounded-lg focus:outline-none focus:ring-2 ${
          error
            ? 'border-red-500 focus:ring-red-500'
            : 'border-gray-300 focus:ring-blue-500'
        }`}
      />
      {error && (
        <p className="mt-1 text-sm text-red-600">{error}</p>
      )}
    </div>
  )
}"#;

// =============================================================================
// GENERATION
// =============================================================================

const DEFAULT_PRIMARY: &str = "#000000";
const DEFAULT_SECONDARY: &str = "#666666";

static CLASS_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"className="([^"]+)""#).expect("valid regex"));

/// Named design values applied to generated code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignTokens {
    #[serde(default)]
    pub colors: BTreeMap<String, String>,
}

impl DesignTokens {
    #[must_use]
    pub fn with_color(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.colors.insert(name.into(), value.into());
        self
    }

    fn color<'a>(&'a self, name: &str, fallback: &'a str) -> &'a str {
        self.colors.get(name).map_or(fallback, String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedComponent {
    pub code: String,
    pub imports: Vec<String>,
    pub styles: String,
    pub dependencies: Vec<String>,
    pub description: String,
    pub usage_example: String,
}

fn apply_tokens(code: &str, tokens: &DesignTokens, framework: Framework) -> String {
    if tokens.colors.is_empty() {
        return code.to_string();
    }
    let primary = tokens.color("primary", DEFAULT_PRIMARY);
    let secondary = tokens.color("secondary", DEFAULT_SECONDARY);
    match framework {
        Framework::Tailwind => format!(
            "/* Apply these colors in tailwind.config.js:\n * primary: '{primary}'\n * secondary: '{secondary}'\n */\n\n{code}"
        ),
        Framework::React | Framework::NextJs => format!(
            "/* Use these CSS variables:\n * --color-primary: {primary}\n * --color-secondary: {secondary}\n */\n\n{code}"
        ),
        Framework::Vue | Framework::Svelte | Framework::Html => code.to_string(),
    }
}

/// Trimmed lines that start with `import `.
#[must_use]
pub fn extract_imports(code: &str) -> Vec<String> {
    code.lines()
        .map(str::trim)
        .filter(|line| line.starts_with("import "))
        .map(ToString::to_string)
        .collect()
}

/// Every `className="..."` value, one per line.
#[must_use]
pub fn extract_styles(code: &str, framework: Framework) -> String {
    if !framework.uses_class_names() {
        return String::new();
    }
    CLASS_NAME_REGEX
        .captures_iter(code)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

// =============================================================================
// ENGINE
// =============================================================================

#[derive(Debug)]
pub struct ComponentLibrary {
    catalog: Catalog<ComponentSnippet>,
    profile: ScoreProfile<ComponentSnippet>,
}

impl ComponentLibrary {
    #[must_use]
    pub fn open(data_dir: &Path) -> Self {
        Self::open_file(&data_dir.join(COMPONENTS_FILE))
    }

    #[must_use]
    pub fn open_file(path: &Path) -> Self {
        Self::with_catalog(Catalog::open(path))
    }

    #[must_use]
    pub fn from_records(snippets: Vec<ComponentSnippet>) -> Self {
        Self::with_catalog(Catalog::from_records(snippets))
    }

    fn with_catalog(catalog: Catalog<ComponentSnippet>) -> Self {
        Self {
            catalog,
            profile: ScoreProfile::<ComponentSnippet>::new()
                .text("name", 10, |s| s.name.as_str())
                .text("description", 5, |s| s.description.as_str())
                .text("category", 3, |s| s.category.as_str()),
        }
    }

    #[must_use]
    pub fn snippets(&self) -> &[ComponentSnippet] {
        self.catalog.records()
    }

    #[must_use]
    pub const fn load_report(&self) -> &LoadReport {
        self.catalog.report()
    }

    #[must_use]
    pub fn search_components(
        &self,
        query: &str,
        framework: Option<&str>,
        category: Option<&str>,
    ) -> Vec<&ComponentSnippet> {
        let filters = FilterChain::<ComponentSnippet>::new()
            .exact("framework", |s| s.framework.as_str(), framework)
            .exact("category", |s| s.category.as_str(), category);
        self.catalog
            .search(&self.profile, query, &filters, None)
            .into_iter()
            .map(|hit| hit.record)
            .collect()
    }

    /// Render the snippet called `name` for `framework`, if one exists.
    #[must_use]
    pub fn generate_component(
        &self,
        name: &str,
        framework: Framework,
        tokens: Option<&DesignTokens>,
    ) -> Option<GeneratedComponent> {
        let wanted = name.to_lowercase();
        let snippet = self
            .catalog
            .find(|s| s.framework == framework && s.name.to_lowercase() == wanted)?;
        Some(Self::render(snippet, tokens))
    }

    fn render(snippet: &ComponentSnippet, tokens: Option<&DesignTokens>) -> GeneratedComponent {
        let code = tokens.map_or_else(
            || snippet.code.clone(),
            |tokens| apply_tokens(&snippet.code, tokens, snippet.framework),
        );
        GeneratedComponent {
            imports: extract_imports(&code),
            styles: extract_styles(&code, snippet.framework),
            dependencies: snippet.dependencies.clone(),
            description: snippet.description.clone(),
            usage_example: snippet.preview.clone(),
            code,
        }
    }

    /// Render every snippet for `framework`, walking categories in declaration order.
    #[must_use]
    pub fn generate_for_framework(
        &self,
        framework: Framework,
        tokens: Option<&DesignTokens>,
    ) -> BTreeMap<String, GeneratedComponent> {
        let mut generated = BTreeMap::new();
        for category in ComponentCategory::all() {
            for snippet in self
                .catalog
                .iter()
                .filter(|s| s.framework == framework && s.category == *category)
            {
                generated
                    .entry(snippet.name.clone())
                    .or_insert_with(|| Self::render(snippet, tokens));
            }
        }
        generated
    }

    /// Like [`Self::generate_component`] with a textual framework; unknown frameworks yield `None`.
    #[must_use]
    pub fn generate_by_name(
        &self,
        name: &str,
        framework: &str,
        tokens: Option<&DesignTokens>,
    ) -> Option<GeneratedComponent> {
        let framework = Framework::parse(framework).ok()?;
        self.generate_component(name, framework, tokens)
    }

    /// Component names grouped by category.
    #[must_use]
    pub fn get_available_components(
        &self,
        framework: Option<Framework>,
    ) -> BTreeMap<&'static str, Vec<&str>> {
        let mut grouped: BTreeMap<&'static str, Vec<&str>> = BTreeMap::new();
        for snippet in self
            .catalog
            .iter()
            .filter(|s| framework.is_none_or(|f| s.framework == f))
        {
            grouped
                .entry(snippet.category.as_str())
                .or_default()
                .push(snippet.name.as_str());
        }
        grouped
    }

    #[must_use]
    pub fn list_frameworks(&self) -> Vec<&'static str> {
        sorted_names::<Framework>()
    }

    #[must_use]
    pub fn list_categories(&self) -> Vec<&'static str> {
        sorted_names::<ComponentCategory>()
    }
}

fn sorted_names<T: ClosedSet>() -> Vec<&'static str> {
    T::all()
        .iter()
        .map(|value| value.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
