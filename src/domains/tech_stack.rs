//! Framework best practices, patterns and performance tips.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::{
    Catalog, CatalogRecord, ClosedSet, CsvRow, FilterChain, Level, LoadReport, Priority,
    PriorityRules, ResourceTable, ScoreProfile,
};
use crate::error::Result;

pub const PRACTICES_FILE: &str = "tech_practices.csv";
pub const PATTERNS_FILE: &str = "tech_patterns.csv";
pub const PERFORMANCE_FILE: &str = "tech_performance.csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TechStack {
    #[serde(rename = "Next.js")]
    NextJs,
    Remix,
    React,
    Vue,
    SvelteKit,
    Angular,
    Astro,
    #[serde(rename = "SolidJS")]
    SolidJs,
    Qwik,
    #[serde(rename = "SwiftUI")]
    SwiftUi,
    #[serde(rename = "React Native")]
    ReactNative,
    Flutter,
}

impl ClosedSet for TechStack {
    const FIELD: &'static str = "stack";

    fn all() -> &'static [Self] {
        &[
            Self::NextJs,
            Self::Remix,
            Self::React,
            Self::Vue,
            Self::SvelteKit,
            Self::Angular,
            Self::Astro,
            Self::SolidJs,
            Self::Qwik,
            Self::SwiftUi,
            Self::ReactNative,
            Self::Flutter,
        ]
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::NextJs => "Next.js",
            Self::Remix => "Remix",
            Self::React => "React",
            Self::Vue => "Vue",
            Self::SvelteKit => "SvelteKit",
            Self::Angular => "Angular",
            Self::Astro => "Astro",
            Self::SolidJs => "SolidJS",
            Self::Qwik => "Qwik",
            Self::SwiftUi => "SwiftUI",
            Self::ReactNative => "React Native",
            Self::Flutter => "Flutter",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PracticeCategory {
    Architecture,
    Performance,
    StateManagement,
    Styling,
    Testing,
    Deployment,
    Security,
    Accessibility,
}

impl ClosedSet for PracticeCategory {
    const FIELD: &'static str = "category";

    fn all() -> &'static [Self] {
        &[
            Self::Architecture,
            Self::Performance,
            Self::StateManagement,
            Self::Styling,
            Self::Testing,
            Self::Deployment,
            Self::Security,
            Self::Accessibility,
        ]
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Architecture => "architecture",
            Self::Performance => "performance",
            Self::StateManagement => "state_management",
            Self::Styling => "styling",
            Self::Testing => "testing",
            Self::Deployment => "deployment",
            Self::Security => "security",
            Self::Accessibility => "accessibility",
        }
    }
}

impl PracticeCategory {
    /// One-line explanation of what practices in this category affect.
    #[must_use]
    pub const fn context(self) -> &'static str {
        match self {
            Self::Architecture => "Architecture-level practice that shapes overall code organization",
            Self::Performance => "Performance optimization that improves user experience",
            Self::StateManagement => "State management pattern that keeps data flow clear",
            Self::Styling => "Styling approach that keeps the visual language consistent",
            Self::Testing => "Testing strategy that protects code quality",
            Self::Deployment => "Deployment approach that simplifies releases",
            Self::Security => "Security practice that protects the application and its users",
            Self::Accessibility => "Accessibility practice that keeps the product usable by everyone",
        }
    }
}

// =============================================================================
// RECORDS
// =============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct TechBestPractice {
    pub stack: TechStack,
    pub category: PracticeCategory,
    pub topic: String,
    pub practice: String,
    pub anti_pattern: String,
    pub code_example: String,
    pub benefits: String,
    pub complexity: Level,
}

impl CatalogRecord for TechBestPractice {
    const KIND: &'static str = "tech_practice";

    fn from_row(row: &CsvRow<'_>) -> Result<Self> {
        Ok(Self {
            stack: row.parse("stack")?,
            category: row.parse("category")?,
            topic: row.non_empty("topic")?.to_string(),
            practice: row.text("practice")?.to_string(),
            anti_pattern: row.text("anti_pattern")?.to_string(),
            code_example: row.text("code_example")?.to_string(),
            benefits: row.text("benefits")?.to_string(),
            complexity: row.parse("complexity")?,
        })
    }

    fn defaults() -> Vec<Self> {
        vec![
            Self {
                stack: TechStack::NextJs,
                category: PracticeCategory::Architecture,
                topic: "Server Components".to_string(),
                practice: "Use Server Components by default, Client Components only when needed"
                    .to_string(),
                anti_pattern: "Mark all components with 'use client'".to_string(),
                code_example: "// Server Component (default)\nexport default function Profile() {\n  return <div>{user.name}</div>\n}\n\n// Client Component\n'use client'\nexport function Button() { return <button>Click</button> }".to_string(),
                benefits: "Reduced bundle size, improved performance, simpler data fetching"
                    .to_string(),
                complexity: Level::Low,
            },
            Self {
                stack: TechStack::React,
                category: PracticeCategory::Performance,
                topic: "Code Splitting".to_string(),
                practice: "Use React.lazy and Suspense for route-based code splitting".to_string(),
                anti_pattern: "Load entire application bundle upfront".to_string(),
                code_example: "const Dashboard = React.lazy(() => import('./Dashboard'));\n\n<Suspense fallback={<Loading />}>\n  <Dashboard />\n</Suspense>".to_string(),
                benefits: "Faster initial load, better user experience".to_string(),
                complexity: Level::Medium,
            },
            Self {
                stack: TechStack::Vue,
                category: PracticeCategory::StateManagement,
                topic: "Composition API".to_string(),
                practice: "Use Composition API with <script setup> syntax".to_string(),
                anti_pattern: "Mix Options API and Composition API".to_string(),
                code_example: "<script setup>\nimport { ref, computed } from 'vue'\nconst count = ref(0)\nconst doubled = computed(() => count.value * 2)\n</script>".to_string(),
                benefits: "Better type inference, code organization, tree-shaking".to_string(),
                complexity: Level::Low,
            },
        ]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TechPattern {
    pub stack: TechStack,
    pub name: String,
    pub description: String,
    pub use_case: String,
    pub implementation: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

impl CatalogRecord for TechPattern {
    const KIND: &'static str = "tech_pattern";

    fn from_row(row: &CsvRow<'_>) -> Result<Self> {
        Ok(Self {
            stack: row.parse("stack")?,
            name: row.non_empty("name")?.to_string(),
            description: row.text("description")?.to_string(),
            use_case: row.text("use_case")?.to_string(),
            implementation: row.text("implementation")?.to_string(),
            pros: row.list("pros", ';'),
            cons: row.list("cons", ';'),
        })
    }

    fn defaults() -> Vec<Self> {
        vec![
            Self {
                stack: TechStack::NextJs,
                name: "Parallel Routes".to_string(),
                description: "Render multiple sections of a page in parallel".to_string(),
                use_case: "Dashboard with independent sections".to_string(),
                implementation: "// app/dashboard/layout.tsx\nexport default function Layout({\n  children,\n  analytics,\n  users\n}: {\n  children: React.ReactNode\n  analytics: React.ReactNode\n  users: React.ReactNode\n}) {\n  return (\n    <div>\n      {children}\n      {analytics}\n      {users}\n    </div>\n  )\n}".to_string(),
                pros: to_strings(&["Independent loading states", "Parallel rendering", "Better UX"]),
                cons: to_strings(&["More complex routing", "Not suitable for all layouts"]),
            },
            Self {
                stack: TechStack::React,
                name: "Compound Components".to_string(),
                description: "Build components that share state implicitly".to_string(),
                use_case: "Modals, Dropdowns, Tabs".to_string(),
                implementation: "const Tabs = ({ children }) => {\n  const [active, setActive] = useState(0)\n  return (\n    <TabsContext value={{ active, setActive }}>\n      {children}\n    </TabsContext>\n  )\n}".to_string(),
                pros: to_strings(&["Flexible API", "Less prop drilling", "Intuitive usage"]),
                cons: to_strings(&["Harder to understand", "Requires context"]),
            },
        ]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PerformanceTip {
    pub stack: TechStack,
    pub topic: String,
    pub technique: String,
    pub impact: Level,
    pub effort: Level,
    pub description: String,
    pub code_snippet: String,
}

impl CatalogRecord for PerformanceTip {
    const KIND: &'static str = "performance_tip";

    fn from_row(row: &CsvRow<'_>) -> Result<Self> {
        Ok(Self {
            stack: row.parse("stack")?,
            topic: row.non_empty("topic")?.to_string(),
            technique: row.text("technique")?.to_string(),
            impact: row.parse("impact")?,
            effort: row.parse("effort")?,
            description: row.text("description")?.to_string(),
            code_snippet: row.text("code_snippet")?.to_string(),
        })
    }

    fn defaults() -> Vec<Self> {
        vec![
            Self {
                stack: TechStack::NextJs,
                topic: "Image Optimization".to_string(),
                technique: "Use next/image for all images".to_string(),
                impact: Level::High,
                effort: Level::Low,
                description: "Automatic optimization, lazy loading, and responsive images"
                    .to_string(),
                code_snippet: "import Image from 'next/image'\n\n<Image\n  src='/hero.jpg'\n  alt='Hero'\n  width={1200}\n  height={600}\n  priority\n/>".to_string(),
            },
            Self {
                stack: TechStack::React,
                topic: "Memoization".to_string(),
                technique: "Use useMemo and useCallback sparingly".to_string(),
                impact: Level::Medium,
                effort: Level::Medium,
                description: "Memoize expensive computations and callbacks".to_string(),
                code_snippet: "const memoizedValue = useMemo(() => {\n  return computeExpensiveValue(a, b)\n}, [a, b])".to_string(),
            },
        ]
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

// =============================================================================
// RECOMMENDATIONS
// =============================================================================

/// A practice enriched with priority, context and reference links.
#[derive(Debug, Clone, Serialize)]
pub struct StackRecommendation<'a> {
    pub practice: &'a TechBestPractice,
    pub priority: Priority,
    pub context: &'static str,
    pub alternatives: Vec<String>,
    pub resources: Vec<String>,
}

/// One area of a framework migration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationStep {
    pub area: &'static str,
    pub guidance: &'static str,
}

const STACK_RESOURCES: ResourceTable = ResourceTable::new(&[
    (
        "Next.js",
        &[
            "Next.js Documentation: https://nextjs.org/docs",
            "Next.js Learn: https://nextjs.org/learn",
        ],
    ),
    (
        "React",
        &[
            "React Documentation: https://react.dev",
            "React Patterns: https://reactpatterns.com",
        ],
    ),
    (
        "Vue",
        &[
            "Vue Documentation: https://vuejs.org/guide/",
            "Vue Style Guide: https://vuejs.org/style-guide/",
        ],
    ),
    (
        "SvelteKit",
        &[
            "SvelteKit Docs: https://kit.svelte.dev/docs",
            "Svelte Docs: https://svelte.dev/docs",
        ],
    ),
]);

const ALTERNATIVES_PLACEHOLDER: &str = "See documentation for alternatives";

const MIGRATION_GUIDES: &[(&str, &str, &[MigrationStep])] = &[
    (
        "react",
        "nextjs",
        &[
            MigrationStep {
                area: "routing",
                guidance: "Replace react-router with Next.js App Router file-based routing",
            },
            MigrationStep {
                area: "data_fetching",
                guidance: "Move from useEffect to Server Components and async/await",
            },
            MigrationStep {
                area: "styling",
                guidance: "Keep existing CSS solutions, they work with Next.js",
            },
            MigrationStep {
                area: "deployment",
                guidance: "Deploy to Vercel for zero-config hosting",
            },
        ],
    ),
    (
        "vue",
        "nuxt",
        &[
            MigrationStep {
                area: "routing",
                guidance: "Replace vue-router with file-based routing in pages/",
            },
            MigrationStep {
                area: "data_fetching",
                guidance: "Use useAsyncData and useFetch composables",
            },
            MigrationStep {
                area: "styling",
                guidance: "Vue SFC styles work the same way",
            },
            MigrationStep {
                area: "deployment",
                guidance: "Deploy to Vercel, Netlify, or Node.js server",
            },
        ],
    ),
];

fn practice_priorities() -> PriorityRules<TechBestPractice> {
    PriorityRules::<TechBestPractice>::new(Priority::Medium)
        .rule(
            "security",
            |p| p.category == PracticeCategory::Security,
            Priority::Critical,
        )
        .rule(
            "performance",
            |p| p.category == PracticeCategory::Performance,
            Priority::High,
        )
        .rule("low complexity", |p| p.complexity == Level::Low, Priority::High)
}

fn practice_profile() -> ScoreProfile<TechBestPractice> {
    ScoreProfile::<TechBestPractice>::new()
        .text("topic", 10, |p| p.topic.as_str())
        .text("practice", 8, |p| p.practice.as_str())
        .text("benefits", 5, |p| p.benefits.as_str())
}

// =============================================================================
// ENGINE
// =============================================================================

#[derive(Debug)]
pub struct TechStackGuide {
    practices: Catalog<TechBestPractice>,
    patterns: Catalog<TechPattern>,
    performance: Catalog<PerformanceTip>,
    profile: ScoreProfile<TechBestPractice>,
    priorities: PriorityRules<TechBestPractice>,
}

impl TechStackGuide {
    /// Load the three tech-stack files from `data_dir`.
    #[must_use]
    pub fn open(data_dir: &Path) -> Self {
        Self::open_files(
            &data_dir.join(PRACTICES_FILE),
            &data_dir.join(PATTERNS_FILE),
            &data_dir.join(PERFORMANCE_FILE),
        )
    }

    #[must_use]
    pub fn open_files(practices: &Path, patterns: &Path, performance: &Path) -> Self {
        Self::with_catalogs(
            Catalog::open(practices),
            Catalog::open(patterns),
            Catalog::open(performance),
        )
    }

    #[must_use]
    pub fn from_records(
        practices: Vec<TechBestPractice>,
        patterns: Vec<TechPattern>,
        performance: Vec<PerformanceTip>,
    ) -> Self {
        Self::with_catalogs(
            Catalog::from_records(practices),
            Catalog::from_records(patterns),
            Catalog::from_records(performance),
        )
    }

    fn with_catalogs(
        practices: Catalog<TechBestPractice>,
        patterns: Catalog<TechPattern>,
        performance: Catalog<PerformanceTip>,
    ) -> Self {
        Self {
            practices,
            patterns,
            performance,
            profile: practice_profile(),
            priorities: practice_priorities(),
        }
    }

    #[must_use]
    pub fn load_reports(&self) -> [&LoadReport; 3] {
        [
            self.practices.report(),
            self.patterns.report(),
            self.performance.report(),
        ]
    }

    /// Practices for `stack`, optionally narrowed by category and ranked by `query`.
    ///
    /// Without a query every practice passing the filters is returned in store order.
    #[must_use]
    pub fn search_practices(
        &self,
        stack: &str,
        query: Option<&str>,
        category: Option<&str>,
        max_results: usize,
    ) -> Vec<StackRecommendation<'_>> {
        let filters = FilterChain::<TechBestPractice>::new()
            .exact("stack", |p| p.stack.as_str(), Some(stack))
            .exact("category", |p| p.category.as_str(), category);

        let selected: Vec<&TechBestPractice> = match query {
            Some(query) => self
                .practices
                .search(&self.profile, query, &filters, Some(max_results))
                .into_iter()
                .map(|hit| hit.record)
                .collect(),
            None => self.practices.filter(&filters).take(max_results).collect(),
        };

        selected
            .into_iter()
            .map(|practice| self.recommend(practice))
            .collect()
    }

    fn recommend<'a>(&self, practice: &'a TechBestPractice) -> StackRecommendation<'a> {
        StackRecommendation {
            practice,
            priority: self.priorities.evaluate(practice),
            context: practice.category.context(),
            alternatives: vec![ALTERNATIVES_PLACEHOLDER.to_string()],
            resources: STACK_RESOURCES.lookup(practice.stack.as_str()),
        }
    }

    #[must_use]
    pub fn get_patterns(&self, stack: &str) -> Vec<&TechPattern> {
        let filters =
            FilterChain::<TechPattern>::new().exact("stack", |p| p.stack.as_str(), Some(stack));
        self.patterns.filter(&filters).collect()
    }

    /// Tips for `stack`, highest impact first.
    #[must_use]
    pub fn get_performance_tips(
        &self,
        stack: &str,
        impact: Option<&str>,
        effort: Option<&str>,
    ) -> Vec<&PerformanceTip> {
        let filters = FilterChain::<PerformanceTip>::new()
            .exact("stack", |t| t.stack.as_str(), Some(stack))
            .exact("impact", |t| t.impact.as_str(), impact)
            .exact("effort", |t| t.effort.as_str(), effort);

        let mut tips: Vec<&PerformanceTip> = self.performance.filter(&filters).collect();
        tips.sort_by(|a, b| b.impact.cmp(&a.impact));
        tips
    }

    /// High-impact, low-effort tips for `stack`.
    #[must_use]
    pub fn get_quick_wins(&self, stack: &str) -> Vec<&PerformanceTip> {
        self.get_performance_tips(stack, Some("high"), Some("low"))
    }

    /// Migration guidance keyed by lower-cased `from->to`; unknown pairs are empty.
    #[must_use]
    pub fn get_migration_guide(&self, from: &str, to: &str) -> Vec<MigrationStep> {
        MIGRATION_GUIDES
            .iter()
            .find(|(source, target, _)| {
                source.eq_ignore_ascii_case(from.trim()) && target.eq_ignore_ascii_case(to.trim())
            })
            .map(|(_, _, steps)| steps.to_vec())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn list_stacks(&self) -> Vec<&'static str> {
        self.practices
            .iter()
            .map(|p| p.stack.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    #[must_use]
    pub fn list_categories(&self, stack: Option<&str>) -> Vec<&'static str> {
        let filters =
            FilterChain::<TechBestPractice>::new().exact("stack", |p| p.stack.as_str(), stack);
        self.practices
            .filter(&filters)
            .map(|p| p.category.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
