//! Built-in catalog of starter templates.
//!
//! Templates are immutable seeds: selecting one copies its fields into a new
//! project (see [`crate::project::Project::from_template`]) and its
//! requirements text can seed an architecture request.

use crate::project::{ProjectCategory, TechStack};

/// A static catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub category: ProjectCategory,
    pub description: &'static str,
    pub tech_stack: &'static [TechStack],
    pub requirements: &'static str,
    pub architecture_overview: &'static str,
}

static TEMPLATES: [Template; 4] = [
    Template {
        id: "chatbot-1",
        name: "Conversational AI Chatbot",
        category: ProjectCategory::Chatbot,
        description: "A context-aware chatbot with conversation history, streaming responses, and personality customization.",
        tech_stack: &[TechStack::React, TechStack::Node],
        requirements: "\
# Core Requirements
- Real-time streaming responses with token-by-token display
- Conversation history with session persistence
- Context window management (last 10 messages)
- Customizable AI personality and tone
- Message retry and edit functionality
- Export conversation as markdown/text
- Rate limiting and error handling",
        architecture_overview: "\
# Architecture Overview

## Frontend Components
- ChatInterface: Main conversation UI
- MessageList: Displays chat history with typing indicators
- InputBox: Message composition with multiline support
- SettingsPanel: Configure personality and model settings

## State Management
- Persisted conversation history
- Transient state for the message currently streaming
- Shared context for global settings

## AI Integration
- Completion API for generation
- Streaming with character-by-character display
- Conversation context built from history",
    },
    Template {
        id: "code-assistant-1",
        name: "Code Generation Assistant",
        category: ProjectCategory::CodeAssistant,
        description: "Generate, explain, and refactor code with syntax highlighting and multiple language support.",
        tech_stack: &[TechStack::React, TechStack::Node],
        requirements: "\
# Core Requirements
- Multi-language code generation (Python, JavaScript, Java, etc.)
- Code explanation with inline comments
- Refactoring suggestions with before/after diff
- Syntax highlighting for output
- Copy to clipboard functionality
- Code validation and testing suggestions
- Save generated snippets to library",
        architecture_overview: "\
# Architecture Overview

## Frontend Components
- CodeEditor: Editor for input/output
- LanguageSelector: Dropdown for target language
- ActionPanel: Generate, Explain, Refactor buttons
- SnippetLibrary: Saved code collection

## Code Processing
- Syntax highlighting
- Diff visualization for refactoring
- Code validation via language-specific parsers

## AI Integration
- Specialized prompts for each action type
- Context includes language, framework, and style preferences",
    },
    Template {
        id: "content-generator-1",
        name: "Content Generation Engine",
        category: ProjectCategory::ContentGenerator,
        description: "Generate blog posts, marketing copy, and social media content with tone and style controls.",
        tech_stack: &[TechStack::React],
        requirements: "\
# Core Requirements
- Multiple content types (blog, social media, email, ad copy)
- Tone adjustment (professional, casual, enthusiastic, etc.)
- Length control (short, medium, long)
- SEO optimization suggestions
- Headline/title generation
- Bulk generation with variations
- Export in multiple formats (HTML, Markdown, plain text)",
        architecture_overview: "\
# Architecture Overview

## Frontend Components
- ContentTypeSelector: Choose content format
- ToneControls: Adjust voice and style
- InputForm: Topic, keywords, and requirements
- OutputPanel: Display and edit generated content
- VariationsView: Multiple versions side-by-side

## Content Processing
- Template-based prompt construction
- Word count and readability metrics
- SEO keyword density analysis

## AI Integration
- Dynamic prompts based on content type and tone
- Iterative generation for variations",
    },
    Template {
        id: "data-analyzer-1",
        name: "Data Analysis & Insights",
        category: ProjectCategory::DataAnalyzer,
        description: "Upload data, generate visualizations, and get AI-powered insights and recommendations.",
        tech_stack: &[TechStack::React, TechStack::Python],
        requirements: "\
# Core Requirements
- CSV/JSON data upload and parsing
- Automated data profiling and statistics
- AI-generated insights and patterns
- Interactive visualizations (charts, graphs)
- Natural language query interface
- Export analysis reports
- Data cleaning suggestions",
        architecture_overview: "\
# Architecture Overview

## Frontend Components
- DataUploader: File upload and preview
- DataTable: Interactive data grid
- VisualizationPanel: Charts
- InsightsPanel: AI-generated findings
- QueryInterface: Natural language data queries

## Data Processing
- Client-side CSV parsing
- Statistical calculations
- Data type inference

## AI Integration
- Data profiling prompts with sample data
- Natural language to data query translation
- Insight generation from statistics",
    },
];

/// Every template in the catalog.
pub fn templates() -> &'static [Template] {
    &TEMPLATES
}

pub fn template_by_id(id: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.id == id)
}

pub fn templates_by_category(category: ProjectCategory) -> Vec<&'static Template> {
    TEMPLATES.iter().filter(|t| t.category == category).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        let ids: Vec<&str> = templates().iter().map(|t| t.id).collect();
        for (i, a) in ids.iter().enumerate() {
            assert!(!ids[i + 1..].contains(a), "duplicate template id {}", a);
        }
    }

    #[test]
    fn template_by_id_finds_known_entry() {
        let template = template_by_id("data-analyzer-1").unwrap();
        assert_eq!(template.name, "Data Analysis & Insights");
        assert_eq!(template.tech_stack, &[TechStack::React, TechStack::Python]);
    }

    #[test]
    fn template_by_id_returns_none_for_unknown() {
        assert!(template_by_id("nope").is_none());
    }

    #[test]
    fn templates_by_category_filters() {
        let chatbots = templates_by_category(ProjectCategory::Chatbot);
        assert_eq!(chatbots.len(), 1);
        assert_eq!(chatbots[0].id, "chatbot-1");

        assert!(templates_by_category(ProjectCategory::Custom).is_empty());
    }

    #[test]
    fn requirements_are_trimmed_markdown() {
        for template in templates() {
            assert!(template.requirements.starts_with("# Core Requirements"));
            assert_eq!(template.requirements, template.requirements.trim());
            assert_eq!(
                template.architecture_overview,
                template.architecture_overview.trim()
            );
        }
    }
}
